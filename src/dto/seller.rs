use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require_present;
use crate::entities::seller;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::validate_not_blank;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateSellerRequest {
    #[validate(range(min = 1))]
    #[schema(example = 1001)]
    pub cid: Option<i32>,
    #[validate(custom = "validate_not_blank")]
    pub company_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub address: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub telephone: Option<String>,
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "1414")]
    pub locality_id: Option<String>,
}

impl CreateSellerRequest {
    /// Sellers are only accepted complete; a missing attribute is a bad request.
    pub fn into_model(self) -> ServiceResult<seller::Model> {
        Ok(seller::Model {
            id: 0,
            cid: require_present(self.cid, "cid")?,
            company_name: require_present(self.company_name, "company_name")?,
            address: require_present(self.address, "address")?,
            telephone: require_present(self.telephone, "telephone")?,
            locality_id: require_present(self.locality_id, "locality_id")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateSellerRequest {
    #[validate(range(min = 1))]
    pub cid: Option<i32>,
    #[validate(custom = "validate_not_blank")]
    pub company_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub address: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub telephone: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub locality_id: Option<String>,
}

impl Patch<seller::Model> for UpdateSellerRequest {
    fn apply_to(self, target: &mut seller::Model) {
        apply_patch!(self => target; cid, company_name, address, telephone, locality_id);
    }
}
