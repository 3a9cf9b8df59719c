use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::locality;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::validate_not_blank;

/// The locality id is chosen by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateLocalityRequest {
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "1414")]
    pub id: Option<String>,
    #[schema(example = "Palermo")]
    pub locality_name: Option<String>,
    #[schema(example = "Buenos Aires")]
    pub province_name: Option<String>,
    #[schema(example = "Argentina")]
    pub country_name: Option<String>,
}

impl CreateLocalityRequest {
    pub fn into_model(self) -> ServiceResult<locality::Model> {
        Ok(locality::Model {
            id: require(self.id, "id")?,
            locality_name: require(self.locality_name, "locality_name")?,
            province_name: require(self.province_name, "province_name")?,
            country_name: require(self.country_name, "country_name")?,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateLocalityRequest {
    pub locality_name: Option<String>,
    pub province_name: Option<String>,
    pub country_name: Option<String>,
}

impl Patch<locality::Model> for UpdateLocalityRequest {
    fn apply_to(self, target: &mut locality::Model) {
        apply_patch!(self => target; locality_name, province_name, country_name);
    }
}
