use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::carry;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::validate_not_blank;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCarryRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "CAR-7")]
    pub cid: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub company_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub address: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub telephone: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub locality_id: Option<String>,
}

impl CreateCarryRequest {
    pub fn into_model(self) -> ServiceResult<carry::Model> {
        Ok(carry::Model {
            id: 0,
            cid: require(self.cid, "cid")?,
            company_name: require(self.company_name, "company_name")?,
            address: require(self.address, "address")?,
            telephone: require(self.telephone, "telephone")?,
            locality_id: require(self.locality_id, "locality_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateCarryRequest {
    #[validate(custom = "validate_not_blank")]
    pub cid: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub company_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub address: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub telephone: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub locality_id: Option<String>,
}

impl Patch<carry::Model> for UpdateCarryRequest {
    fn apply_to(self, target: &mut carry::Model) {
        apply_patch!(self => target; cid, company_name, address, telephone, locality_id);
    }
}
