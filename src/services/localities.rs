use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::reports::{LocalityCarriesReport, LocalitySellersReport, ReportOutput};
use crate::dto::{CreateLocalityRequest, UpdateLocalityRequest};
use crate::entities::locality;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::LocalityRepository;
use crate::services::report_output;
use crate::utils::{sorted_by_id, Patch};

#[derive(Clone)]
pub struct LocalityService {
    repository: LocalityRepository,
}

impl LocalityService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: LocalityRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateLocalityRequest) -> ServiceResult<locality::Model> {
        let locality = request.into_model()?;
        locality.validate()?;

        if self.repository.exists_by_id(&locality.id).await? {
            return Err(ServiceError::Conflict("LocalityID already in use".to_string()));
        }

        let created = self.repository.create(locality).await?;
        info!(locality_id = %created.id, "locality created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<locality::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> ServiceResult<locality::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: &str,
        patch: UpdateLocalityRequest,
    ) -> ServiceResult<locality::Model> {
        let mut locality = self.repository.get_by_id(id).await?;
        patch.apply_to(&mut locality);
        locality.validate()?;

        let updated = self.repository.update(locality).await?;
        info!(locality_id = %id, "locality updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(locality_id = %id, "locality deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn report_sellers(
        &self,
        id: Option<&str>,
    ) -> ServiceResult<ReportOutput<LocalitySellersReport>> {
        let rows = self.repository.report_sellers(id).await?;
        report_output(rows, id.is_some(), "Locality")
    }

    #[instrument(skip(self))]
    pub async fn report_carries(
        &self,
        id: Option<&str>,
    ) -> ServiceResult<ReportOutput<LocalityCarriesReport>> {
        let rows = self.repository.report_carries(id).await?;
        report_output(rows, id.is_some(), "Locality")
    }
}
