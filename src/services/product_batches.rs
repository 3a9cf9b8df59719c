use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateProductBatchRequest, UpdateProductBatchRequest};
use crate::entities::product_batch;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::ProductBatchRepository;
use crate::utils::{sorted_by_id, Patch};

const BATCH_NUMBER_IN_USE: &str = "BatchNumber already in use";

#[derive(Clone)]
pub struct ProductBatchService {
    repository: ProductBatchRepository,
}

impl ProductBatchService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: ProductBatchRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateProductBatchRequest,
    ) -> ServiceResult<product_batch::Model> {
        let batch = request.into_model()?;
        batch.validate()?;

        if self
            .repository
            .exists_by_batch_number(batch.batch_number, None)
            .await?
        {
            return Err(ServiceError::Conflict(BATCH_NUMBER_IN_USE.to_string()));
        }

        let created = self.repository.create(batch).await?;
        info!(product_batch_id = created.id, section_id = created.section_id, "product batch created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<product_batch::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<product_batch::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateProductBatchRequest,
    ) -> ServiceResult<product_batch::Model> {
        let mut batch = self.repository.get_by_id(id).await?;
        let previous_number = batch.batch_number;

        patch.apply_to(&mut batch);
        batch.validate()?;

        if batch.batch_number != previous_number
            && self
                .repository
                .exists_by_batch_number(batch.batch_number, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(BATCH_NUMBER_IN_USE.to_string()));
        }

        let updated = self.repository.update(batch).await?;
        info!(product_batch_id = id, "product batch updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(product_batch_id = id, "product batch deleted");
        Ok(())
    }
}
