use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::{flexible_datetime, validate_not_blank, validate_not_in_future};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema)]
#[sea_orm(table_name = "purchase_orders")]
#[schema(as = PurchaseOrder)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    #[validate(custom = "validate_not_blank")]
    pub order_number: String,
    /// Stored in UTC; must not be later than the time of the write.
    #[serde(deserialize_with = "flexible_datetime")]
    #[validate(custom = "validate_not_in_future")]
    pub order_date: NaiveDateTime,
    #[validate(custom = "validate_not_blank")]
    pub tracking_code: String,
    #[validate(range(min = 1))]
    pub buyer_id: i32,
    #[validate(range(min = 1))]
    pub product_record_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::buyer::Entity",
        from = "Column::BuyerId",
        to = "super::buyer::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Buyer,
    #[sea_orm(
        belongs_to = "super::product_record::Entity",
        from = "Column::ProductRecordId",
        to = "super::product_record::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ProductRecord,
}

impl Related<super::buyer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Buyer.def()
    }
}

impl Related<super::product_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
