use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::flexible_date;

/// A lot of one product stored in one section.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema)]
#[sea_orm(table_name = "product_batches")]
#[schema(as = ProductBatch)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    #[validate(range(min = 1))]
    pub batch_number: i32,
    #[validate(range(min = 0))]
    pub current_quantity: i32,
    pub current_temperature: f64,
    #[serde(deserialize_with = "flexible_date")]
    pub due_date: NaiveDate,
    #[validate(range(min = 0))]
    pub initial_quantity: i32,
    #[serde(deserialize_with = "flexible_date")]
    pub manufacturing_date: NaiveDate,
    #[validate(range(min = 0, max = 23, message = "manufacturing_hour must be between 0 and 23"))]
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    #[validate(range(min = 1))]
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub section_id: i32,
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
    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Section,
    #[sea_orm(has_many = "super::inbound_order::Entity")]
    InboundOrders,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl Related<super::inbound_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InboundOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
