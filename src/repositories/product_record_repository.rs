use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryOrder,
};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::product_record;
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

// Records have no natural key; `unique` only fires if a duplicate id is forced in.
const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "ProductRecord",
    unique: "ProductRecord already exists",
    foreign_key: "Product does not exist",
};

#[derive(Debug, Clone)]
pub struct ProductRecordRepository {
    base: BaseRepository,
}

impl ProductRecordRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, record))]
    pub async fn create(&self, record: product_record::Model) -> ServiceResult<product_record::Model> {
        let mut active = record.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<product_record::Model>> {
        product_record::Entity::find()
            .order_by_asc(product_record::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<product_record::Model> {
        product_record::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, record), fields(id = record.id))]
    pub async fn update(&self, record: product_record::Model) -> ServiceResult<product_record::Model> {
        record
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = product_record::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }
}
