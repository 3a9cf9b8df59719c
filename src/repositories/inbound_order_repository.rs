use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::inbound_order;
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "InboundOrder",
    unique: "OrderNumber already in use",
    foreign_key: "Employee, Warehouse or ProductBatch does not exist",
};

#[derive(Debug, Clone)]
pub struct InboundOrderRepository {
    base: BaseRepository,
}

impl InboundOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, order))]
    pub async fn create(&self, order: inbound_order::Model) -> ServiceResult<inbound_order::Model> {
        let mut active = order.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<inbound_order::Model>> {
        inbound_order::Entity::find()
            .order_by_asc(inbound_order::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<inbound_order::Model> {
        inbound_order::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, order), fields(id = order.id))]
    pub async fn update(&self, order: inbound_order::Model) -> ServiceResult<inbound_order::Model> {
        order
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = inbound_order::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists_by_order_number(
        &self,
        order_number: &str,
        exclude_id: Option<i32>,
    ) -> ServiceResult<bool> {
        let mut query =
            inbound_order::Entity::find().filter(inbound_order::Column::OrderNumber.eq(order_number));
        if let Some(id) = exclude_id {
            query = query.filter(inbound_order::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }
}
