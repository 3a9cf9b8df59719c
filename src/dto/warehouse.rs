use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::warehouse;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::validate_not_blank;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateWarehouseRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "WH-01")]
    pub warehouse_code: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub address: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub telephone: Option<String>,
    #[validate(range(min = 1, message = "minimum_capacity must be greater than 0"))]
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
}

impl CreateWarehouseRequest {
    pub fn into_model(self) -> ServiceResult<warehouse::Model> {
        Ok(warehouse::Model {
            id: 0,
            warehouse_code: require(self.warehouse_code, "warehouse_code")?,
            address: require(self.address, "address")?,
            telephone: require(self.telephone, "telephone")?,
            minimum_capacity: require(self.minimum_capacity, "minimum_capacity")?,
            minimum_temperature: require(self.minimum_temperature, "minimum_temperature")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateWarehouseRequest {
    #[validate(custom = "validate_not_blank")]
    pub warehouse_code: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub address: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub telephone: Option<String>,
    #[validate(range(min = 1, message = "minimum_capacity must be greater than 0"))]
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
}

impl Patch<warehouse::Model> for UpdateWarehouseRequest {
    fn apply_to(self, target: &mut warehouse::Model) {
        apply_patch!(self => target;
            warehouse_code,
            address,
            telephone,
            minimum_capacity,
            minimum_temperature,
        );
    }
}
