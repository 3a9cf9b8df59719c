use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;
use tracing::instrument;

use crate::dto::reports::ProductRecordsReport;
use crate::entities::{product, product_record};
use crate::errors::ServiceResult;
use crate::repositories::{BaseRepository, DbErrorMapper, Repository};

const ERRORS: DbErrorMapper = DbErrorMapper {
    entity: "Product",
    unique: "ProductCode already in use",
    foreign_key: "Seller does not exist",
};

#[derive(Debug, Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    #[instrument(skip(self, product))]
    pub async fn create(&self, product: product::Model) -> ServiceResult<product::Model> {
        let mut active = product.into_active_model().reset_all();
        active.id = NotSet;
        active
            .insert(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<product::Model>> {
        product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<product::Model> {
        product::Entity::find_by_id(id)
            .one(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?
            .ok_or_else(|| ERRORS.not_found())
    }

    #[instrument(skip(self, product), fields(id = product.id))]
    pub async fn update(&self, product: product::Model) -> ServiceResult<product::Model> {
        product
            .into_active_model()
            .reset_all()
            .update(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_write(e))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let result = product::Entity::delete_by_id(id)
            .exec(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_delete(e))?;

        if result.rows_affected == 0 {
            return Err(ERRORS.not_found());
        }
        Ok(())
    }

    pub async fn exists_by_product_code(
        &self,
        product_code: &str,
        exclude_id: Option<i32>,
    ) -> ServiceResult<bool> {
        let mut query = product::Entity::find().filter(product::Column::ProductCode.eq(product_code));
        if let Some(id) = exclude_id {
            query = query.filter(product::Column::Id.ne(id));
        }

        let count = query
            .count(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;
        Ok(count > 0)
    }

    /// Price records kept per product.
    pub async fn report_records(&self, id: Option<i32>) -> ServiceResult<Vec<ProductRecordsReport>> {
        let mut query = product::Entity::find()
            .select_only()
            .column_as(product::Column::Id, "product_id")
            .column(product::Column::Description)
            .column_as(product_record::Column::Id.count(), "records_count")
            .join(JoinType::LeftJoin, product::Relation::ProductRecords.def())
            .group_by(product::Column::Id)
            .group_by(product::Column::Description)
            .order_by_asc(product::Column::Id);

        if let Some(id) = id {
            query = query.filter(product::Column::Id.eq(id));
        }

        let rows = query
            .into_model::<ProductRecordsReport>()
            .all(self.base.get_db())
            .await
            .map_err(|e| ERRORS.on_read(e))?;

        if id.is_some() && rows.is_empty() {
            return Err(ERRORS.not_found());
        }
        Ok(rows)
    }
}
