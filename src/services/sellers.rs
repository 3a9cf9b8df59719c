use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateSellerRequest, UpdateSellerRequest};
use crate::entities::seller;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::SellerRepository;
use crate::utils::{sorted_by_id, Patch};

const CID_IN_USE: &str = "CID already in use";

#[derive(Clone)]
pub struct SellerService {
    repository: SellerRepository,
}

impl SellerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: SellerRepository::new(db),
        }
    }

    /// Every attribute is mandatory; a missing one is a bad request rather than a validation failure.
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateSellerRequest) -> ServiceResult<seller::Model> {
        let seller = request.into_model()?;
        seller.validate()?;

        if self.repository.exists_by_cid(seller.cid, None).await? {
            return Err(ServiceError::Conflict(CID_IN_USE.to_string()));
        }

        let created = self.repository.create(seller).await?;
        info!(seller_id = created.id, "seller created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<seller::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<seller::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateSellerRequest) -> ServiceResult<seller::Model> {
        let mut seller = self.repository.get_by_id(id).await?;
        let previous_cid = seller.cid;

        patch.apply_to(&mut seller);
        seller.validate()?;

        if seller.cid != previous_cid && self.repository.exists_by_cid(seller.cid, Some(id)).await? {
            return Err(ServiceError::Conflict(CID_IN_USE.to_string()));
        }

        let updated = self.repository.update(seller).await?;
        info!(seller_id = id, "seller updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(seller_id = id, "seller deleted");
        Ok(())
    }
}
