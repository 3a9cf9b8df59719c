use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::validators::flexible_date;

/// A price snapshot for a product.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema)]
#[sea_orm(table_name = "product_records")]
#[schema(as = ProductRecord)]
#[validate(schema(function = "validate_prices", skip_on_field_errors = false))]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[serde(deserialize_with = "flexible_date")]
    pub last_update_date: NaiveDate,
    #[validate(range(min = 0.0))]
    pub purchase_price: f64,
    #[validate(range(min = 0.0))]
    pub sale_price: f64,
    #[validate(range(min = 1))]
    pub product_id: i32,
}

fn validate_prices(record: &Model) -> Result<(), ValidationError> {
    if record.sale_price < record.purchase_price {
        let mut err = ValidationError::new("sale_price");
        err.message = Some("sale_price must be greater than or equal to purchase_price".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Product,
    #[sea_orm(has_many = "super::purchase_order::Entity")]
    PurchaseOrders,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::purchase_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
