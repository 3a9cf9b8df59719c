use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validators::validate_not_blank;

/// A carrier company operating out of a locality.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, Validate, ToSchema)]
#[sea_orm(table_name = "carries")]
#[schema(as = Carry)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    #[validate(custom = "validate_not_blank")]
    pub cid: String,
    #[validate(custom = "validate_not_blank")]
    pub company_name: String,
    #[validate(custom = "validate_not_blank")]
    pub address: String,
    #[validate(custom = "validate_not_blank")]
    pub telephone: String,
    #[validate(custom = "validate_not_blank")]
    pub locality_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locality::Entity",
        from = "Column::LocalityId",
        to = "super::locality::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Locality,
}

impl Related<super::locality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
