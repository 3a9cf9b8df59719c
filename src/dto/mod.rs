//! Request bodies. Every field is optional at the wire level so that a missing
//! attribute surfaces as a domain error instead of a decoder error.

pub mod buyer;
pub mod carry;
pub mod employee;
pub mod inbound_order;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod purchase_order;
pub mod reports;
pub mod section;
pub mod seller;
pub mod warehouse;

pub use buyer::{CreateBuyerRequest, UpdateBuyerRequest};
pub use carry::{CreateCarryRequest, UpdateCarryRequest};
pub use employee::{CreateEmployeeRequest, UpdateEmployeeRequest};
pub use inbound_order::{CreateInboundOrderRequest, UpdateInboundOrderRequest};
pub use locality::{CreateLocalityRequest, UpdateLocalityRequest};
pub use product::{CreateProductRequest, UpdateProductRequest};
pub use product_batch::{CreateProductBatchRequest, UpdateProductBatchRequest};
pub use product_record::{CreateProductRecordRequest, UpdateProductRecordRequest};
pub use purchase_order::{CreatePurchaseOrderRequest, UpdatePurchaseOrderRequest};
pub use section::{CreateSectionRequest, UpdateSectionRequest};
pub use seller::{CreateSellerRequest, UpdateSellerRequest};
pub use warehouse::{CreateWarehouseRequest, UpdateWarehouseRequest};

use crate::errors::{ServiceError, ServiceResult};

/// Unwraps a create attribute; absence is a validation failure (422).
pub(crate) fn require<T>(value: Option<T>, field: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::UnprocessableEntity(format!("{field} is required")))
}

/// Like [`require`] but for resources where absence is a malformed request (400).
pub(crate) fn require_present<T>(value: Option<T>, field: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::BadRequest(format!("{field} is required")))
}
