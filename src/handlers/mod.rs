pub mod common;
pub mod health;

// Resources
pub mod buyers;
pub mod carries;
pub mod employees;
pub mod inbound_orders;
pub mod localities;
pub mod product_batches;
pub mod product_records;
pub mod products;
pub mod purchase_orders;
pub mod sections;
pub mod sellers;
pub mod warehouses;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::services::{
    buyers::BuyerService, carries::CarryService, employees::EmployeeService,
    inbound_orders::InboundOrderService, localities::LocalityService,
    product_batches::ProductBatchService, product_records::ProductRecordService,
    products::ProductService, purchase_orders::PurchaseOrderService, sections::SectionService,
    sellers::SellerService, warehouses::WarehouseService,
};

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub sellers: Arc<SellerService>,
    pub localities: Arc<LocalityService>,
    pub buyers: Arc<BuyerService>,
    pub warehouses: Arc<WarehouseService>,
    pub employees: Arc<EmployeeService>,
    pub products: Arc<ProductService>,
    pub product_records: Arc<ProductRecordService>,
    pub product_batches: Arc<ProductBatchService>,
    pub sections: Arc<SectionService>,
    pub carries: Arc<CarryService>,
    pub inbound_orders: Arc<InboundOrderService>,
    pub purchase_orders: Arc<PurchaseOrderService>,
}

impl AppServices {
    /// Builds every resource service over one shared connection pool.
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            sellers: Arc::new(SellerService::new(db.clone())),
            localities: Arc::new(LocalityService::new(db.clone())),
            buyers: Arc::new(BuyerService::new(db.clone())),
            warehouses: Arc::new(WarehouseService::new(db.clone())),
            employees: Arc::new(EmployeeService::new(db.clone())),
            products: Arc::new(ProductService::new(db.clone())),
            product_records: Arc::new(ProductRecordService::new(db.clone())),
            product_batches: Arc::new(ProductBatchService::new(db.clone())),
            sections: Arc::new(SectionService::new(db.clone())),
            carries: Arc::new(CarryService::new(db.clone())),
            inbound_orders: Arc::new(InboundOrderService::new(db.clone())),
            purchase_orders: Arc::new(PurchaseOrderService::new(db)),
        }
    }
}
