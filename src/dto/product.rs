use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::product;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::validate_not_blank;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRequest {
    #[validate(custom = "validate_not_blank")]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub expiration_rate: Option<f64>,
    #[validate(range(min = 0.0))]
    pub freezing_rate: Option<f64>,
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0))]
    pub length: Option<f64>,
    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
    #[validate(range(min = 0.0))]
    pub net_weight: Option<f64>,
    #[validate(custom = "validate_not_blank")]
    #[schema(example = "PRD-0001")]
    pub product_code: Option<String>,
    pub recommended_freezing_temperature: Option<f64>,
    #[validate(range(min = 1))]
    pub product_type_id: Option<i32>,
    /// Optional owning seller.
    pub seller_id: Option<i32>,
}

impl CreateProductRequest {
    pub fn into_model(self) -> ServiceResult<product::Model> {
        Ok(product::Model {
            id: 0,
            description: require(self.description, "description")?,
            expiration_rate: require(self.expiration_rate, "expiration_rate")?,
            freezing_rate: require(self.freezing_rate, "freezing_rate")?,
            height: require(self.height, "height")?,
            length: require(self.length, "length")?,
            width: require(self.width, "width")?,
            net_weight: require(self.net_weight, "net_weight")?,
            product_code: require(self.product_code, "product_code")?,
            recommended_freezing_temperature: require(
                self.recommended_freezing_temperature,
                "recommended_freezing_temperature",
            )?,
            product_type_id: require(self.product_type_id, "product_type_id")?,
            seller_id: self.seller_id,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    #[validate(custom = "validate_not_blank")]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub expiration_rate: Option<f64>,
    #[validate(range(min = 0.0))]
    pub freezing_rate: Option<f64>,
    #[validate(range(min = 0.0))]
    pub height: Option<f64>,
    #[validate(range(min = 0.0))]
    pub length: Option<f64>,
    #[validate(range(min = 0.0))]
    pub width: Option<f64>,
    #[validate(range(min = 0.0))]
    pub net_weight: Option<f64>,
    #[validate(custom = "validate_not_blank")]
    pub product_code: Option<String>,
    pub recommended_freezing_temperature: Option<f64>,
    #[validate(range(min = 1))]
    pub product_type_id: Option<i32>,
    pub seller_id: Option<i32>,
}

impl Patch<product::Model> for UpdateProductRequest {
    fn apply_to(self, target: &mut product::Model) {
        apply_patch!(self => target;
            description,
            expiration_rate,
            freezing_rate,
            height,
            length,
            width,
            net_weight,
            product_code,
            recommended_freezing_temperature,
            product_type_id,
        );
        apply_patch!(self => target; opt seller_id);
    }
}
