use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreatePurchaseOrderRequest, UpdatePurchaseOrderRequest};
use crate::entities::purchase_order;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::PurchaseOrderRepository;
use crate::utils::{sorted_by_id, Patch};

const ORDER_NUMBER_IN_USE: &str = "OrderNumber already in use";

/// Purchase orders placed by buyers against a product record.
/// `order_date` may not be later than the moment of the write.
#[derive(Clone)]
pub struct PurchaseOrderService {
    repository: PurchaseOrderRepository,
}

impl PurchaseOrderService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: PurchaseOrderRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        request: CreatePurchaseOrderRequest,
    ) -> ServiceResult<purchase_order::Model> {
        let order = request.into_model()?;
        order.validate()?;

        if self
            .repository
            .exists_by_order_number(&order.order_number, None)
            .await?
        {
            return Err(ServiceError::Conflict(ORDER_NUMBER_IN_USE.to_string()));
        }

        let created = self.repository.create(order).await?;
        info!(
            purchase_order_id = created.id,
            buyer_id = created.buyer_id,
            "purchase order created"
        );
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<purchase_order::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<purchase_order::Model> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i32,
        patch: UpdatePurchaseOrderRequest,
    ) -> ServiceResult<purchase_order::Model> {
        let mut order = self.repository.get_by_id(id).await?;
        let previous_number = order.order_number.clone();

        patch.apply_to(&mut order);
        order.validate()?;

        if order.order_number != previous_number
            && self
                .repository
                .exists_by_order_number(&order.order_number, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(ORDER_NUMBER_IN_USE.to_string()));
        }

        let updated = self.repository.update(order).await?;
        info!(purchase_order_id = id, "purchase order updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(purchase_order_id = id, "purchase order deleted");
        Ok(())
    }
}
