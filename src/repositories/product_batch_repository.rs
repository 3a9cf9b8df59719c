use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::product_batch;
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "ProductBatch",
    unique: "BatchNumber already in use",
    foreign_key: "Product or Section does not exist",
};

#[derive(Debug, Clone)]
pub struct ProductBatchRepository {
    base: BaseRepository,
}

impl ProductBatchRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, batch))]
    pub async fn create(&self, batch: product_batch::Model) -> ServiceResult<product_batch::Model> {
        let mut active = batch.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<product_batch::Model>> {
        product_batch::Entity::find()
            .order_by_asc(product_batch::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<product_batch::Model> {
        product_batch::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, batch), fields(id = batch.id))]
    pub async fn update(&self, batch: product_batch::Model) -> ServiceResult<product_batch::Model> {
        batch
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = product_batch::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists_by_batch_number(
        &self,
        batch_number: i32,
        exclude_id: Option<i32>,
    ) -> ServiceResult<bool> {
        let mut query =
            product_batch::Entity::find().filter(product_batch::Column::BatchNumber.eq(batch_number));
        if let Some(id) = exclude_id {
            query = query.filter(product_batch::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }
}
