use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::reports::{ProductRecordsReport, ReportOutput};
use crate::dto::{CreateProductRequest, UpdateProductRequest};
use crate::entities::product;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::ProductRepository;
use crate::services::report_output;
use crate::utils::{sorted_by_id, Patch};

const CODE_IN_USE: &str = "ProductCode already in use";

#[derive(Clone)]
pub struct ProductService {
    repository: ProductRepository,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: ProductRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateProductRequest) -> ServiceResult<product::Model> {
        let product = request.into_model()?;
        product.validate()?;

        if self
            .repository
            .exists_by_product_code(&product.product_code, None)
            .await?
        {
            return Err(ServiceError::Conflict(CODE_IN_USE.to_string()));
        }

        let created = self.repository.create(product).await?;
        info!(product_id = created.id, "product created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<product::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<product::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateProductRequest) -> ServiceResult<product::Model> {
        let mut product = self.repository.get_by_id(id).await?;
        let previous_code = product.product_code.clone();

        patch.apply_to(&mut product);
        product.validate()?;

        if product.product_code != previous_code
            && self
                .repository
                .exists_by_product_code(&product.product_code, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(CODE_IN_USE.to_string()));
        }

        let updated = self.repository.update(product).await?;
        info!(product_id = id, "product updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(product_id = id, "product deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn report_records(
        &self,
        id: Option<i32>,
    ) -> ServiceResult<ReportOutput<ProductRecordsReport>> {
        let rows = self.repository.report_records(id).await?;
        report_output(rows, id.is_some(), "Product")
    }
}
