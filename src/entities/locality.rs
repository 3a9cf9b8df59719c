use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_not_blank;

/// Localities are keyed by a caller-supplied code such as a postal code.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema)]
#[sea_orm(table_name = "localities")]
#[schema(as = Locality)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[validate(custom = "validate_not_blank")]
    pub id: String,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seller::Entity")]
    Sellers,
    #[sea_orm(has_many = "super::carry::Entity")]
    Carries,
}

impl Related<super::seller::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sellers.def()
    }
}

impl Related<super::carry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
