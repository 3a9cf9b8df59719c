use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_not_blank;

/// Catalogue entry. Dimensions are in centimetres, weight in kilograms.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema)]
#[sea_orm(table_name = "products")]
#[schema(as = Product)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[validate(custom = "validate_not_blank")]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub expiration_rate: f64,
    #[validate(range(min = 0.0))]
    pub freezing_rate: f64,
    #[validate(range(min = 0.0))]
    pub height: f64,
    #[validate(range(min = 0.0))]
    pub length: f64,
    #[validate(range(min = 0.0))]
    pub width: f64,
    #[validate(range(min = 0.0))]
    pub net_weight: f64,
    #[sea_orm(unique)]
    #[validate(custom = "validate_not_blank")]
    pub product_code: String,
    pub recommended_freezing_temperature: f64,
    #[validate(range(min = 1))]
    pub product_type_id: i32,
    pub seller_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seller::Entity",
        from = "Column::SellerId",
        to = "super::seller::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Seller,
    #[sea_orm(has_many = "super::product_record::Entity")]
    ProductRecords,
    #[sea_orm(has_many = "super::product_batch::Entity")]
    ProductBatches,
}

impl Related<super::seller::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seller.def()
    }
}

impl Related<super::product_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductRecords.def()
    }
}

impl Related<super::product_batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductBatches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
