use sea_orm::sqlx::{self, error::DatabaseError, mysql::MySqlDatabaseError, sqlite::SqliteError};
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlErr};
use std::sync::Arc;
use tracing::error;

use crate::errors::ServiceError;

pub mod buyer_repository;
pub mod carry_repository;
pub mod employee_repository;
pub mod inbound_order_repository;
pub mod locality_repository;
pub mod product_batch_repository;
pub mod product_record_repository;
pub mod product_repository;
pub mod purchase_order_repository;
pub mod section_repository;
pub mod seller_repository;
pub mod warehouse_repository;

pub use buyer_repository::BuyerRepository;
pub use carry_repository::CarryRepository;
pub use employee_repository::EmployeeRepository;
pub use inbound_order_repository::InboundOrderRepository;
pub use locality_repository::LocalityRepository;
pub use product_batch_repository::ProductBatchRepository;
pub use product_record_repository::ProductRecordRepository;
pub use product_repository::ProductRepository;
pub use purchase_order_repository::PurchaseOrderRepository;
pub use section_repository::SectionRepository;
pub use seller_repository::SellerRepository;
pub use warehouse_repository::WarehouseRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Translates storage failures of one table into domain errors.
///
/// Callers never see a `DbErr`: constraint violations become `Conflict` with the
/// table's own wording, missing rows become `NotFound`, everything else is logged
/// and masked as `Internal`.
#[derive(Debug, Clone, Copy)]
pub struct DbErrorMapper {
    /// Display name used in "<entity> not Found".
    pub entity: &'static str,
    /// Message for a unique index violation.
    pub unique: &'static str,
    /// Message for a write pointing at a missing parent row.
    pub foreign_key: &'static str,
}

impl DbErrorMapper {
    pub fn not_found(&self) -> ServiceError {
        ServiceError::not_found(self.entity)
    }

    /// Inserts and updates.
    pub fn on_write(&self, err: DbErr) -> ServiceError {
        match constraint_violation(&err) {
            Some(Constraint::Unique) => ServiceError::Conflict(self.unique.to_string()),
            Some(Constraint::ForeignKey) => ServiceError::Conflict(self.foreign_key.to_string()),
            None => self.on_read(err),
        }
    }

    /// Deletes. A foreign key failure here means children still point at the row.
    pub fn on_delete(&self, err: DbErr) -> ServiceError {
        match constraint_violation(&err) {
            Some(Constraint::ForeignKey) => ServiceError::Conflict(format!(
                "{} is referenced by other records",
                self.entity
            )),
            _ => self.on_read(err),
        }
    }

    pub fn on_read(&self, err: DbErr) -> ServiceError {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => self.not_found(),
            other => {
                error!(entity = self.entity, error = %other, "database operation failed");
                ServiceError::from(other)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint {
    Unique,
    ForeignKey,
}

/// Classifies a constraint failure across the supported backends.
///
/// `DbErr::sql_err` misses a restricted delete on both drivers: MySQL reports it
/// as 1451 and SQLite as the extended code 1811.
fn constraint_violation(err: &DbErr) -> Option<Constraint> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(Constraint::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => return Some(Constraint::ForeignKey),
        _ => {}
    }

    let database_error = match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => e,
        _ => return None,
    };

    if let Some(mysql) = database_error.try_downcast_ref::<MySqlDatabaseError>() {
        return match mysql.number() {
            1451 | 1452 => Some(Constraint::ForeignKey),
            1062 | 1586 => Some(Constraint::Unique),
            _ => None,
        };
    }

    if let Some(sqlite) = database_error.try_downcast_ref::<SqliteError>() {
        return match sqlite.code().as_deref() {
            Some("787") | Some("1811") => Some(Constraint::ForeignKey),
            Some("1555") | Some("2067") => Some(Constraint::Unique),
            _ => None,
        };
    }

    None
}
