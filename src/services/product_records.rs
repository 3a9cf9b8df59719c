use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateProductRecordRequest, UpdateProductRecordRequest};
use crate::entities::product_record;
use crate::errors::ServiceResult;
use crate::repositories::ProductRecordRepository;
use crate::utils::{sorted_by_id, Patch};

#[derive(Clone)]
pub struct ProductRecordService {
    repository: ProductRecordRepository,
}

impl ProductRecordService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: ProductRecordRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateProductRecordRequest,
    ) -> ServiceResult<product_record::Model> {
        let record = request.into_model()?;
        record.validate()?;

        let created = self.repository.create(record).await?;
        info!(product_record_id = created.id, product_id = created.product_id, "product record created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<product_record::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<product_record::Model> {
        self.repository.get_by_id(id).await
    }

    /// The price ordering is checked on the merged record, so patching one side alone is covered.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateProductRecordRequest,
    ) -> ServiceResult<product_record::Model> {
        let mut record = self.repository.get_by_id(id).await?;
        patch.apply_to(&mut record);
        record.validate()?;

        let updated = self.repository.update(record).await?;
        info!(product_record_id = id, "product record updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(product_record_id = id, "product record deleted");
        Ok(())
    }
}
