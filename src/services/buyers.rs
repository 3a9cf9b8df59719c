use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::reports::{BuyerPurchaseOrdersReport, ReportOutput};
use crate::dto::{CreateBuyerRequest, UpdateBuyerRequest};
use crate::entities::buyer;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::BuyerRepository;
use crate::services::report_output;
use crate::utils::{sorted_by_id, Patch};

const CARD_NUMBER_IN_USE: &str = "CardNumberId already in use";

/// Service for managing buyers
#[derive(Clone)]
pub struct BuyerService {
    repository: BuyerRepository,
}

impl BuyerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            repository: BuyerRepository::new(db),
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateBuyerRequest) -> ServiceResult<buyer::Model> {
        let buyer = request.into_model()?;
        buyer.validate()?;

        if self
            .repository
            .exists_by_card_number_id(buyer.card_number_id, None)
            .await?
        {
            return Err(ServiceError::Conflict(CARD_NUMBER_IN_USE.to_string()));
        }

        let created = self.repository.create(buyer).await?;
        info!(buyer_id = created.id, "buyer created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<buyer::Model>> {
        Ok(sorted_by_id(self.repository.get_all().await?))
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> ServiceResult<buyer::Model> {
        self.repository.get_by_id(id).await
    }

    /// Merges `patch` over the stored buyer; the card number is re-checked only if it changes.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: UpdateBuyerRequest) -> ServiceResult<buyer::Model> {
        let mut buyer = self.repository.get_by_id(id).await?;
        let previous_card = buyer.card_number_id;

        patch.apply_to(&mut buyer);
        buyer.validate()?;

        if buyer.card_number_id != previous_card
            && self
                .repository
                .exists_by_card_number_id(buyer.card_number_id, Some(id))
                .await?
        {
            return Err(ServiceError::Conflict(CARD_NUMBER_IN_USE.to_string()));
        }

        let updated = self.repository.update(buyer).await?;
        info!(buyer_id = id, "buyer updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        self.repository.delete(id).await?;
        info!(buyer_id = id, "buyer deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn report_purchase_orders(
        &self,
        id: Option<i32>,
    ) -> ServiceResult<ReportOutput<BuyerPurchaseOrdersReport>> {
        let rows = self.repository.report_purchase_orders(id).await?;
        report_output(rows, id.is_some(), "Buyer")
    }
}
