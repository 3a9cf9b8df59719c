use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::reports::{EmployeeInboundOrdersReport, ReportOutput};
use crate::dto::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::entities::employee;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::EmployeeRepository;
use crate::services::report_output;
use crate::utils::{sorted_by_id, Patch};

const CARD_NUMBER_IN_USE: &str = "CardNumberID already in use";

#[derive(Clone)]
pub struct EmployeeService {
    repository: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: EmployeeRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateEmployeeRequest) -> ServiceResult<employee::Model> {
        let employee = request.into_model()?;
        employee.validate()?;

        if self
            .repository
            .exists_by_card_number_id(&employee.card_number_id, None)
            .await?
        {
            return Err(ServiceError::Conflict(CARD_NUMBER_IN_USE.to_string()));
        }

        let created = self.repository.create(employee).await?;
        info!(employee_id = created.id, "employee created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<employee::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<employee::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateEmployeeRequest,
    ) -> ServiceResult<employee::Model> {
        let mut employee = self.repository.get_by_id(id).await?;
        let previous_card = employee.card_number_id.clone();

        patch.apply_to(&mut employee);
        employee.validate()?;

        if employee.card_number_id != previous_card
            && self
                .repository
                .exists_by_card_number_id(&employee.card_number_id, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(CARD_NUMBER_IN_USE.to_string()));
        }

        let updated = self.repository.update(employee).await?;
        info!(employee_id = id, "employee updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(employee_id = id, "employee deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> ServiceResult<ReportOutput<EmployeeInboundOrdersReport>> {
        let rows = self.repository.report_inbound_orders(id).await?;
        report_output(rows, id.is_some(), "Employee")
    }
}
