use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateCarryRequest, UpdateCarryRequest};
use crate::entities::carry;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::CarryRepository;
use crate::utils::{sorted_by_id, Patch};

const CID_IN_USE: &str = "Cid already in use";

#[derive(Clone)]
pub struct CarryService {
    repository: CarryRepository,
}

impl CarryService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: CarryRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateCarryRequest) -> ServiceResult<carry::Model> {
        let carry = request.into_model()?;
        carry.validate()?;

        if self.repository.exists_by_cid(&carry.cid, None).await? {
            return Err(ServiceError::Conflict(CID_IN_USE.to_string()));
        }

        let created = self.repository.create(carry).await?;
        info!(carry_id = created.id, locality_id = %created.locality_id, "carry created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<carry::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<carry::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateCarryRequest) -> ServiceResult<carry::Model> {
        let mut carry = self.repository.get_by_id(id).await?;
        let previous_cid = carry.cid.clone();

        patch.apply_to(&mut carry);
        carry.validate()?;

        if carry.cid != previous_cid && self.repository.exists_by_cid(&carry.cid, Some(id)).await? {
            return Err(ServiceError::Conflict(CID_IN_USE.to_string()));
        }

        let updated = self.repository.update(carry).await?;
        info!(carry_id = id, "carry updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(carry_id = id, "carry deleted");
        Ok(())
    }
}
