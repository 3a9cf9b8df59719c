use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::product_batch;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::flexible_date_opt;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProductBatchRequest {
    #[validate(range(min = 1))]
    pub batch_number: Option<i32>,
    #[validate(range(min = 0))]
    pub current_quantity: Option<i32>,
    pub current_temperature: Option<f64>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub due_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub initial_quantity: Option<i32>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub manufacturing_date: Option<NaiveDate>,
    #[validate(range(min = 0, max = 23, message = "manufacturing_hour must be between 0 and 23"))]
    pub manufacturing_hour: Option<i32>,
    pub minimum_temperature: Option<f64>,
    #[validate(range(min = 1))]
    pub product_id: Option<i32>,
    #[validate(range(min = 1))]
    pub section_id: Option<i32>,
}

impl CreateProductBatchRequest {
    pub fn into_model(self) -> ServiceResult<product_batch::Model> {
        Ok(product_batch::Model {
            id: 0,
            batch_number: require(self.batch_number, "batch_number")?,
            current_quantity: require(self.current_quantity, "current_quantity")?,
            current_temperature: require(self.current_temperature, "current_temperature")?,
            due_date: require(self.due_date, "due_date")?,
            initial_quantity: require(self.initial_quantity, "initial_quantity")?,
            manufacturing_date: require(self.manufacturing_date, "manufacturing_date")?,
            manufacturing_hour: require(self.manufacturing_hour, "manufacturing_hour")?,
            minimum_temperature: require(self.minimum_temperature, "minimum_temperature")?,
            product_id: require(self.product_id, "product_id")?,
            section_id: require(self.section_id, "section_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductBatchRequest {
    #[validate(range(min = 1))]
    pub batch_number: Option<i32>,
    #[validate(range(min = 0))]
    pub current_quantity: Option<i32>,
    pub current_temperature: Option<f64>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub due_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub initial_quantity: Option<i32>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub manufacturing_date: Option<NaiveDate>,
    #[validate(range(min = 0, max = 23, message = "manufacturing_hour must be between 0 and 23"))]
    pub manufacturing_hour: Option<i32>,
    pub minimum_temperature: Option<f64>,
    #[validate(range(min = 1))]
    pub product_id: Option<i32>,
    #[validate(range(min = 1))]
    pub section_id: Option<i32>,
}

impl Patch<product_batch::Model> for UpdateProductBatchRequest {
    fn apply_to(self, target: &mut product_batch::Model) {
        apply_patch!(self => target;
            batch_number,
            current_quantity,
            current_temperature,
            due_date,
            initial_quantity,
            manufacturing_date,
            manufacturing_hour,
            minimum_temperature,
            product_id,
            section_id,
        );
    }
}
