use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use tracing::instrument;

use crate::dto::reports::{LocalityCarriesReport, LocalitySellersReport};
use crate::entities::{carry, locality, seller};
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "Locality",
    unique: "LocalityID already in use",
    foreign_key: "Locality references a missing record",
};

/// Localities carry a natural string key, so nothing here touches auto-increment.
#[derive(Debug, Clone)]
pub struct LocalityRepository {
    base: BaseRepository,
}

impl LocalityRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, locality), fields(id = %locality.id))]
    pub async fn create(&self, locality: locality::Model) -> ServiceResult<locality::Model> {
        locality
            .into_active_model()
            .reset_all()
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<locality::Model>> {
        locality::Entity::find()
            .order_by_asc(locality::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: &str) -> ServiceResult<locality::Model> {
        locality::Entity::find_by_id(id.to_owned())
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, locality), fields(id = %locality.id))]
    pub async fn update(&self, locality: locality::Model) -> ServiceResult<locality::Model> {
        locality
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> ServiceResult<()> {
        let result = locality::Entity::delete_by_id(id.to_owned())
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists_by_id(&self, id: &str) -> ServiceResult<bool> {
        let found = locality::Entity::find_by_id(id.to_owned())
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(found.is_some())
    }

    pub async fn report_sellers(&self, id: Option<&str>) -> ServiceResult<Vec<LocalitySellersReport>> {
        let mut query = locality::Entity::find()
            .select_only()
            .column_as(locality::Column::Id, "locality_id")
            .column(locality::Column::LocalityName)
            .column_as(seller::Column::Id.count(), "sellers_count")
            .join(JoinType::LeftJoin, locality::Relation::Sellers.def())
            .group_by(locality::Column::Id)
            .group_by(locality::Column::LocalityName)
            .order_by_asc(locality::Column::Id);

        if let Some(id) = id {
            query = query.filter(locality::Column::Id.eq(id));
        }

        let rows = query
            .into_model::<LocalitySellersReport>()
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;

        if id.is_some() && rows.is_empty() {
            return Err(ERRORS.not_found());
        }
        Ok(rows)
    }

    pub async fn report_carries(&self, id: Option<&str>) -> ServiceResult<Vec<LocalityCarriesReport>> {
        let mut query = locality::Entity::find()
            .select_only()
            .column_as(locality::Column::Id, "locality_id")
            .column(locality::Column::LocalityName)
            .column_as(carry::Column::Id.count(), "carries_count")
            .join(JoinType::LeftJoin, locality::Relation::Carries.def())
            .group_by(locality::Column::Id)
            .group_by(locality::Column::LocalityName)
            .order_by_asc(locality::Column::Id);

        if let Some(id) = id {
            query = query.filter(locality::Column::Id.eq(id));
        }

        let rows = query
            .into_model::<LocalityCarriesReport>()
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;

        if id.is_some() && rows.is_empty() {
            return Err(ERRORS.not_found());
        }
        Ok(rows)
    }
}
