use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::employee;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::{validate_letters, validate_not_blank};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateEmployeeRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "EMP-0042")]
    pub card_number_id: Option<String>,
    #[validate(custom = "validate_letters")]
    pub first_name: Option<String>,
    #[validate(custom = "validate_letters")]
    pub last_name: Option<String>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
}

impl CreateEmployeeRequest {
    pub fn into_model(self) -> ServiceResult<employee::Model> {
        Ok(employee::Model {
            id: 0,
            card_number_id: require(self.card_number_id, "card_number_id")?,
            first_name: require(self.first_name, "first_name")?,
            last_name: require(self.last_name, "last_name")?,
            warehouse_id: require(self.warehouse_id, "warehouse_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    #[validate(custom = "validate_not_blank")]
    pub card_number_id: Option<String>,
    #[validate(custom = "validate_letters")]
    pub first_name: Option<String>,
    #[validate(custom = "validate_letters")]
    pub last_name: Option<String>,
    #[validate(range(min = 1))]
    pub warehouse_id: Option<i32>,
}

impl Patch<employee::Model> for UpdateEmployeeRequest {
    fn apply_to(self, target: &mut employee::Model) {
        apply_patch!(self => target; card_number_id, first_name, last_name, warehouse_id);
    }
}
