use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CreateInboundOrderRequest, UpdateInboundOrderRequest};
use crate::entities::inbound_order;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::{EmployeeRepository, InboundOrderRepository};
use crate::utils::{sorted_by_id, Patch};

const ORDER_NUMBER_IN_USE: &str = "OrderNumber already in use";
const UNKNOWN_EMPLOYEE: &str = "Employee does not exist";

/// Inbound orders are registered by an existing employee.
#[derive(Clone)]
pub struct InboundOrderService {
    repository: InboundOrderRepository,
    employees: EmployeeRepository,
}

impl InboundOrderService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: InboundOrderRepository::new(db.clone()),
            employees: EmployeeRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreateInboundOrderRequest,
    ) -> ServiceResult<inbound_order::Model> {
        let order = request.into_model()?;
        order.validate()?;

        if !self.employees.exists(order.employee_id).await? {
            warn!(employee_id = order.employee_id, "inbound order for unknown employee");
            return Err(ServiceError::Conflict(UNKNOWN_EMPLOYEE.to_string()));
        }

        if self
            .repository
            .exists_by_order_number(&order.order_number, None)
            .await?
        {
            return Err(ServiceError::Conflict(ORDER_NUMBER_IN_USE.to_string()));
        }

        let created = self.repository.create(order).await?;
        info!(
            inbound_order_id = created.id,
            employee_id = created.employee_id,
            "inbound order created"
        );
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<inbound_order::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<inbound_order::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdateInboundOrderRequest,
    ) -> ServiceResult<inbound_order::Model> {
        let mut order = self.repository.get_by_id(id).await?;
        let previous_number = order.order_number.clone();
        let previous_employee = order.employee_id;

        patch.apply_to(&mut order);
        order.validate()?;

        if order.employee_id != previous_employee && !self.employees.exists(order.employee_id).await? {
            return Err(ServiceError::Conflict(UNKNOWN_EMPLOYEE.to_string()));
        }

        if order.order_number != previous_number
            && self
                .repository
                .exists_by_order_number(&order.order_number, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(ORDER_NUMBER_IN_USE.to_string()));
        }

        let updated = self.repository.update(order).await?;
        info!(inbound_order_id = id, "inbound order updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(inbound_order_id = id, "inbound order deleted");
        Ok(())
    }
}
