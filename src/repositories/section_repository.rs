use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use tracing::instrument;

use crate::dto::reports::SectionProductsReport;
use crate::entities::{product_batch, section};
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "Section",
    unique: "SectionNumber already in use",
    foreign_key: "Warehouse does not exist",
};

#[derive(Debug, Clone)]
pub struct SectionRepository {
    base: BaseRepository,
}

impl SectionRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, section))]
    pub async fn create(&self, section: section::Model) -> ServiceResult<section::Model> {
        let mut active = section.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<section::Model>> {
        section::Entity::find()
            .order_by_asc(section::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<section::Model> {
        section::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, section), fields(id = section.id))]
    pub async fn update(&self, section: section::Model) -> ServiceResult<section::Model> {
        section
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = section::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists_by_section_number(
        &self,
        section_number: i32,
        exclude_id: Option<i32>,
    ) -> ServiceResult<bool> {
        let mut query = section::Entity::find().filter(section::Column::SectionNumber.eq(section_number));
        if let Some(id) = exclude_id {
            query = query.filter(section::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }

    /// Product batches stored per section.
    pub async fn report_products(&self, id: Option<i32>) -> ServiceResult<Vec<SectionProductsReport>> {
        let mut query = section::Entity::find()
            .select_only()
            .column_as(section::Column::Id, "section_id")
            .column(section::Column::SectionNumber)
            .column_as(product_batch::Column::Id.count(), "products_count")
            .join(JoinType::LeftJoin, section::Relation::ProductBatches.def())
            .group_by(section::Column::Id)
            .group_by(section::Column::SectionNumber)
            .order_by_asc(section::Column::Id);

        if let Some(id) = id {
            query = query.filter(section::Column::Id.eq(id));
        }

        let rows = query
            .into_model::<SectionProductsReport>()
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;

        if id.is_some() && rows.is_empty() {
            return Err(ERRORS.not_found());
        }
        Ok(rows)
    }
}
