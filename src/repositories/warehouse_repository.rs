use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::warehouse;
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "Warehouse",
    unique: "WarehouseCode already in use",
    foreign_key: "Warehouse references a missing record",
};

#[derive(Debug, Clone)]
pub struct WarehouseRepository {
    base: BaseRepository,
}

impl WarehouseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, warehouse))]
    pub async fn create(&self, warehouse: warehouse::Model) -> ServiceResult<warehouse::Model> {
        let mut active = warehouse.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<warehouse::Model>> {
        warehouse::Entity::find()
            .order_by_asc(warehouse::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<warehouse::Model> {
        warehouse::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, warehouse), fields(id = warehouse.id))]
    pub async fn update(&self, warehouse: warehouse::Model) -> ServiceResult<warehouse::Model> {
        warehouse
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    /// Fails with `Conflict` while employees, sections or inbound orders point here.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = warehouse::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists_by_warehouse_code(
        &self,
        warehouse_code: &str,
        exclude_id: Option<i32>,
    ) -> ServiceResult<bool> {
        let mut query =
            warehouse::Entity::find().filter(warehouse::Column::WarehouseCode.eq(warehouse_code));
        if let Some(id) = exclude_id {
            query = query.filter(warehouse::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }
}
