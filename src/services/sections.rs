use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::reports::{ReportOutput, SectionProductsReport};
use crate::dto::{CreateSectionRequest, UpdateSectionRequest};
use crate::entities::section;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::SectionRepository;
use crate::services::report_output;
use crate::utils::{sorted_by_id, Patch};

const SECTION_NUMBER_IN_USE: &str = "SectionNumber already in use";

#[derive(Clone)]
pub struct SectionService {
    repository: SectionRepository,
}

impl SectionService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: SectionRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateSectionRequest) -> ServiceResult<section::Model> {
        let section = request.into_model()?;
        section.validate()?;

        if self
            .repository
            .exists_by_section_number(section.section_number, None)
            .await?
        {
            return Err(ServiceError::Conflict(SECTION_NUMBER_IN_USE.to_string()));
        }

        let created = self.repository.create(section).await?;
        info!(section_id = created.id, "section created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<section::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<section::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateSectionRequest) -> ServiceResult<section::Model> {
        let mut section = self.repository.get_by_id(id).await?;
        let previous_number = section.section_number;

        patch.apply_to(&mut section);
        section.validate()?;

        if section.section_number != previous_number
            && self
                .repository
                .exists_by_section_number(section.section_number, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(SECTION_NUMBER_IN_USE.to_string()));
        }

        let updated = self.repository.update(section).await?;
        info!(section_id = id, "section updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(section_id = id, "section deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn report_products(
        &self,
        id: Option<i32>,
    ) -> ServiceResult<ReportOutput<SectionProductsReport>> {
        let rows = self.repository.report_products(id).await?;
        report_output(rows, id.is_some(), "Section")
    }
}
