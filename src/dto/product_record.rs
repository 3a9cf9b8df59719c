use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::apply_patch;
use crate::dto::require;
use crate::entities::product_record;
use crate::errors::ServiceResult;
use crate::utils::Patch;
use crate::validators::flexible_date_opt;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRecordRequest {
    #[serde(default, deserialize_with = "flexible_date_opt")]
    #[schema(example = "2024-03-01")]
    pub last_update_date: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    pub purchase_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub sale_price: Option<f64>,
    #[validate(range(min = 1))]
    pub product_id: Option<i32>,
}

impl CreateProductRecordRequest {
    pub fn into_model(self) -> ServiceResult<product_record::Model> {
        Ok(product_record::Model {
            id: 0,
            last_update_date: require(self.last_update_date, "last_update_date")?,
            purchase_price: require(self.purchase_price, "purchase_price")?,
            sale_price: require(self.sale_price, "sale_price")?,
            product_id: require(self.product_id, "product_id")?,
        })
    }
}

/// Price changes are checked against the merged record, not the patch alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRecordRequest {
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub last_update_date: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    pub purchase_price: Option<f64>,
    #[validate(range(min = 0.0))]
    pub sale_price: Option<f64>,
    #[validate(range(min = 1))]
    pub product_id: Option<i32>,
}

impl Patch<product_record::Model> for UpdateProductRecordRequest {
    fn apply_to(self, target: &mut product_record::Model) {
        apply_patch!(self => target; last_update_date, purchase_price, sale_price, product_id);
    }
}
