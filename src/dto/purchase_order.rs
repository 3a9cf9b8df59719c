use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::purchase_order;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::{flexible_datetime_opt, validate_not_blank, validate_not_in_future};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreatePurchaseOrderRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "PO-2024-0001")]
    pub order_number: Option<String>,
    /// Past or present; future dates are rejected.
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    #[validate(custom = "validate_not_in_future")]
    pub order_date: Option<NaiveDateTime>,
    #[validate(custom = "validate_not_blank")]
    pub tracking_code: Option<String>,
    #[validate(range(min = 1))]
    pub buyer_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_record_id: Option<i32>,
}

impl CreatePurchaseOrderRequest {
    pub fn into_model(self) -> ServiceResult<purchase_order::Model> {
        Ok(purchase_order::Model {
            id: 0,
            order_number: require(self.order_number, "order_number")?,
            order_date: require(self.order_date, "order_date")?,
            tracking_code: require(self.tracking_code, "tracking_code")?,
            buyer_id: require(self.buyer_id, "buyer_id")?,
            product_record_id: require(self.product_record_id, "product_record_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdatePurchaseOrderRequest {
    #[validate(custom = "validate_not_blank")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    #[validate(custom = "validate_not_in_future")]
    pub order_date: Option<NaiveDateTime>,
    #[validate(custom = "validate_not_blank")]
    pub tracking_code: Option<String>,
    #[validate(range(min = 1))]
    pub buyer_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_record_id: Option<i32>,
}

impl Patch<purchase_order::Model> for UpdatePurchaseOrderRequest {
    fn apply_to(self, target: &mut purchase_order::Model) {
        apply_patch!(self => target;
            order_number,
            order_date,
            tracking_code,
            buyer_id,
            product_record_id,
        );
    }
}
