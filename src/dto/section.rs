use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::section;
use crate::errors::ServiceResult;
use crate::utils::Patch;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSectionRequest {
    #[validate(range(min = 1))]
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    #[validate(range(min = 0))]
    pub current_capacity: Option<i32>,
    #[validate(range(min = 0))]
    pub minimum_capacity: Option<i32>,
    #[validate(range(min = 1))]
    pub maximum_capacity: Option<i32>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_type_id: Option<i32>,
}

impl CreateSectionRequest {
    pub fn into_model(self) -> ServiceResult<section::Model> {
        Ok(section::Model {
            id: 0,
            section_number: require(self.section_number, "section_number")?,
            current_temperature: require(self.current_temperature, "current_temperature")?,
            minimum_temperature: require(self.minimum_temperature, "minimum_temperature")?,
            current_capacity: require(self.current_capacity, "current_capacity")?,
            minimum_capacity: require(self.minimum_capacity, "minimum_capacity")?,
            maximum_capacity: require(self.maximum_capacity, "maximum_capacity")?,
            warehouse_id: require(self.warehouse_id, "warehouse_id")?,
            product_type_id: require(self.product_type_id, "product_type_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSectionRequest {
    #[validate(range(min = 1))]
    pub section_number: Option<i32>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    #[validate(range(min = 0))]
    pub current_capacity: Option<i32>,
    #[validate(range(min = 0))]
    pub minimum_capacity: Option<i32>,
    #[validate(range(min = 1))]
    pub maximum_capacity: Option<i32>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
    #[validate(range(min = 1))]
    pub product_type_id: Option<i32>,
}

impl Patch<section::Model> for UpdateSectionRequest {
    fn apply_to(self, target: &mut section::Model) {
        apply_patch!(self => target;
            section_number,
            current_temperature,
            minimum_temperature,
            current_capacity,
            minimum_capacity,
            maximum_capacity,
            warehouse_id,
            product_type_id,
        );
    }
}
