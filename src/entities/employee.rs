use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{validate_letters, validate_not_blank};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema)]
#[sea_orm(table_name = "employees")]
#[schema(as = Employee)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    #[validate(custom = "validate_not_blank")]
    pub card_number_id: String,
    #[validate(custom = "validate_letters")]
    pub first_name: String,
    #[validate(custom = "validate_letters")]
    pub last_name: String,
    #[validate(range(min = 1))]
    pub warehouse_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::warehouse::Entity",
        from = "Column::WarehouseId",
        to = "super::warehouse::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Warehouse,
    #[sea_orm(has_many = "super::inbound_order::Entity")]
    InboundOrders,
}

impl Related<super::warehouse::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Warehouse.def()
    }
}

impl Related<super::inbound_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InboundOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
