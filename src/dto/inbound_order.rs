use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::inbound_order;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::{flexible_datetime_opt, validate_not_blank};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateInboundOrderRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "IO-2024-0001")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    #[schema(example = "2024-03-01T09:30:00Z")]
    pub order_date: Option<NaiveDateTime>,
    #[validate(range(min = 1))]
    pub employee_id: Option<i32>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_batch_id: Option<i32>,
}

impl CreateInboundOrderRequest {
    pub fn into_model(self) -> ServiceResult<inbound_order::Model> {
        Ok(inbound_order::Model {
            id: 0,
            order_number: require(self.order_number, "order_number")?,
            order_date: require(self.order_date, "order_date")?,
            employee_id: require(self.employee_id, "employee_id")?,
            warehouse_id: require(self.warehouse_id, "warehouse_id")?,
            product_batch_id: require(self.product_batch_id, "product_batch_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateInboundOrderRequest {
    #[validate(custom = "validate_not_blank")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "flexible_datetime_opt")]
    pub order_date: Option<NaiveDateTime>,
    #[validate(range(min = 1))]
    pub employee_id: Option<i32>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_batch_id: Option<i32>,
}

impl Patch<inbound_order::Model> for UpdateInboundOrderRequest {
    fn apply_to(self, target: &mut inbound_order::Model) {
        apply_patch!(self => target;
            order_number,
            order_date,
            employee_id,
            warehouse_id,
            product_batch_id,
        );
    }
}
