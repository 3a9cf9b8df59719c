use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use tracing::instrument;

use crate::dto::reports::BuyerPurchaseOrdersReport;
use crate::entities::{buyer, purchase_order};
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "Buyer",
    unique: "CardNumberId already in use",
    foreign_key: "Buyer references a missing record",
};

/// Repository for buyers
#[derive(Debug, Clone)]
pub struct BuyerRepository {
    base: BaseRepository,
}

impl BuyerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Inserts a buyer; the id on the input is ignored.
    #[instrument(skip(self, buyer))]
    pub async fn create(&self, buyer: buyer::Model) -> ServiceResult<buyer::Model> {
        let mut active = buyer.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<buyer::Model>> {
        buyer::Entity::find()
            .order_by_asc(buyer::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<buyer::Model> {
        buyer::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    /// Writes every attribute of `buyer` to the row with the same id.
    #[instrument(skip(self, buyer), fields(id = buyer.id))]
    pub async fn update(&self, buyer: buyer::Model) -> ServiceResult<buyer::Model> {
        buyer
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = buyer::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    /// True when another buyer already holds `card_number_id`.
    pub async fn exists_by_card_number_id(
        &self,
        card_number_id: i64,
        exclude_id: Option<i32>,
    ) -> ServiceResult<bool> {
        let mut query = buyer::Entity::find().filter(buyer::Column::CardNumberId.eq(card_number_id));
        if let Some(id) = exclude_id {
            query = query.filter(buyer::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }

    /// Purchase orders per buyer. With an id, exactly one row or `NotFound`.
    pub async fn report_purchase_orders(
        &self,
        id: Option<i32>,
    ) -> ServiceResult<Vec<BuyerPurchaseOrdersReport>> {
        let mut query = buyer::Entity::find()
            .select_only()
            .column(buyer::Column::Id)
            .column(buyer::Column::CardNumberId)
            .column(buyer::Column::FirstName)
            .column(buyer::Column::LastName)
            .column_as(purchase_order::Column::Id.count(), "purchase_orders_count")
            .join(JoinType::LeftJoin, buyer::Relation::PurchaseOrders.def())
            .group_by(buyer::Column::Id)
            .group_by(buyer::Column::CardNumberId)
            .group_by(buyer::Column::FirstName)
            .group_by(buyer::Column::LastName)
            .order_by_asc(buyer::Column::Id);

        if let Some(id) = id {
            query = query.filter(buyer::Column::Id.eq(id));
        }

        let rows = query
            .into_model::<BuyerPurchaseOrdersReport>()
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;

        if id.is_some() && rows.is_empty() {
            return Err(ERRORS.not_found());
        }
        Ok(rows)
    }
}
