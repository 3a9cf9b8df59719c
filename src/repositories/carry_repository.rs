use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::instrument;

use crate::entities::carry;
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "Carry",
    unique: "Cid already in use",
    foreign_key: "Locality does not exist",
};

#[derive(Debug, Clone)]
pub struct CarryRepository {
    base: BaseRepository,
}

impl CarryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, carry))]
    pub async fn create(&self, carry: carry::Model) -> ServiceResult<carry::Model> {
        let mut active = carry.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<carry::Model>> {
        carry::Entity::find()
            .order_by_asc(carry::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<carry::Model> {
        carry::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, carry), fields(id = carry.id))]
    pub async fn update(&self, carry: carry::Model) -> ServiceResult<carry::Model> {
        carry
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = carry::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists_by_cid(&self, cid: &str, exclude_id: Option<i32>) -> ServiceResult<bool> {
        let mut query = carry::Entity::find().filter(carry::Column::Cid.eq(cid));
        if let Some(id) = exclude_id {
            query = query.filter(carry::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }
}
