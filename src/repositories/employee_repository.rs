use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use tracing::instrument;

use crate::dto::reports::EmployeeInboundOrdersReport;
use crate::entities::{employee, inbound_order};
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "Employee",
    unique: "CardNumberID already in use",
    foreign_key: "Warehouse does not exist",
};

#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, employee))]
    pub async fn create(&self, employee: employee::Model) -> ServiceResult<employee::Model> {
        let mut active = employee.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<employee::Model>> {
        employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<employee::Model> {
        employee::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, employee), fields(id = employee.id))]
    pub async fn update(&self, employee: employee::Model) -> ServiceResult<employee::Model> {
        employee
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = employee::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists(&self, id: i32) -> ServiceResult<bool> {
        let count = employee::Entity::find_by_id(id)
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }

    pub async fn exists_by_card_number_id(
        &self,
        card_number_id: &str,
        exclude_id: Option<i32>,
    ) -> ServiceResult<bool> {
        let mut query =
            employee::Entity::find().filter(employee::Column::CardNumberId.eq(card_number_id));
        if let Some(id) = exclude_id {
            query = query.filter(employee::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }

    /// Inbound orders registered per employee.
    pub async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> ServiceResult<Vec<EmployeeInboundOrdersReport>> {
        let mut query = employee::Entity::find()
            .select_only()
            .column(employee::Column::Id)
            .column(employee::Column::CardNumberId)
            .column(employee::Column::FirstName)
            .column(employee::Column::LastName)
            .column(employee::Column::WarehouseId)
            .column_as(inbound_order::Column::Id.count(), "inbound_orders_count")
            .join(JoinType::LeftJoin, employee::Relation::InboundOrders.def())
            .group_by(employee::Column::Id)
            .group_by(employee::Column::CardNumberId)
            .group_by(employee::Column::FirstName)
            .group_by(employee::Column::LastName)
            .group_by(employee::Column::WarehouseId)
            .order_by_asc(employee::Column::Id);

        if let Some(id) = id {
            query = query.filter(employee::Column::Id.eq(id));
        }

        let rows = query
            .into_model::<EmployeeInboundOrdersReport>()
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;

        if id.is_some() && rows.is_empty() {
            return Err(ERRORS.not_found());
        }
        Ok(rows)
    }
}
