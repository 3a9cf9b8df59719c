use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateWarehouseRequest, UpdateWarehouseRequest};
use crate::entities::warehouse;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::WarehouseRepository;
use crate::utils::{sorted_by_id, Patch};

const CODE_IN_USE: &str = "WarehouseCode already in use";

#[derive(Clone)]
pub struct WarehouseService {
    repository: WarehouseRepository,
}

impl WarehouseService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: WarehouseRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateWarehouseRequest) -> ServiceResult<warehouse::Model> {
        let warehouse = request.into_model()?;
        warehouse.validate()?;

        if self
            .repository
            .exists_by_warehouse_code(&warehouse.warehouse_code, None)
            .await?
        {
            return Err(ServiceError::Conflict(CODE_IN_USE.to_string()));
        }

        let created = self.repository.create(warehouse).await?;
        info!(warehouse_id = created.id, "warehouse created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<warehouse::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<warehouse::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateWarehouseRequest,
    ) -> ServiceResult<warehouse::Model> {
        let mut warehouse = self.repository.get_by_id(id).await?;
        let previous_code = warehouse.warehouse_code.clone();

        patch.apply_to(&mut warehouse);
        warehouse.validate()?;

        if warehouse.warehouse_code != previous_code
            && self
                .repository
                .exists_by_warehouse_code(&warehouse.warehouse_code, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(CODE_IN_USE.to_string()));
        }

        let updated = self.repository.update(warehouse).await?;
        info!(warehouse_id = id, "warehouse updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(warehouse_id = id, "warehouse deleted");
        Ok(())
    }
}
