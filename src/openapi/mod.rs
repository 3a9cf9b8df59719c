use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

/// Path of the generated schema document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warehouse API",
        description = r#"
# Warehouse back-office API

CRUD endpoints under `/api/v1` for sellers, localities, buyers, warehouses,
employees, products, product records, product batches, sections, carries,
inbound orders and purchase orders, plus per-entity aggregation reports.

Successful payloads are wrapped as `{"data": ...}`. Errors are
`{"status": "<reason phrase>", "message": "..."}`.
"#
    ),
    paths(
        crate::handlers::health::healthcheck,
        crate::handlers::health::status,
        crate::handlers::buyers::create_buyer,
        crate::handlers::buyers::list_buyers,
        crate::handlers::buyers::get_buyer,
        crate::handlers::buyers::update_buyer,
        crate::handlers::buyers::delete_buyer,
        crate::handlers::buyers::report_purchase_orders,
        crate::handlers::carries::create_carry,
        crate::handlers::carries::list_carries,
        crate::handlers::carries::get_carry,
        crate::handlers::carries::update_carry,
        crate::handlers::carries::delete_carry,
        crate::handlers::employees::create_employee,
        crate::handlers::employees::list_employees,
        crate::handlers::employees::get_employee,
        crate::handlers::employees::update_employee,
        crate::handlers::employees::delete_employee,
        crate::handlers::employees::report_inbound_orders,
        crate::handlers::inbound_orders::create_inbound_order,
        crate::handlers::inbound_orders::list_inbound_orders,
        crate::handlers::inbound_orders::get_inbound_order,
        crate::handlers::inbound_orders::update_inbound_order,
        crate::handlers::inbound_orders::delete_inbound_order,
        crate::handlers::localities::create_locality,
        crate::handlers::localities::list_localities,
        crate::handlers::localities::get_locality,
        crate::handlers::localities::update_locality,
        crate::handlers::localities::delete_locality,
        crate::handlers::localities::report_sellers,
        crate::handlers::localities::report_carries,
        crate::handlers::product_batches::create_product_batch,
        crate::handlers::product_batches::list_product_batches,
        crate::handlers::product_batches::get_product_batch,
        crate::handlers::product_batches::update_product_batch,
        crate::handlers::product_batches::delete_product_batch,
        crate::handlers::product_records::create_product_record,
        crate::handlers::product_records::list_product_records,
        crate::handlers::product_records::get_product_record,
        crate::handlers::product_records::update_product_record,
        crate::handlers::product_records::delete_product_record,
        crate::handlers::products::create_product,
        crate::handlers::products::list_products,
        crate::handlers::products::get_product,
        crate::handlers::products::update_product,
        crate::handlers::products::delete_product,
        crate::handlers::products::report_records,
        crate::handlers::purchase_orders::create_purchase_order,
        crate::handlers::purchase_orders::list_purchase_orders,
        crate::handlers::purchase_orders::get_purchase_order,
        crate::handlers::purchase_orders::update_purchase_order,
        crate::handlers::purchase_orders::delete_purchase_order,
        crate::handlers::sections::create_section,
        crate::handlers::sections::list_sections,
        crate::handlers::sections::get_section,
        crate::handlers::sections::update_section,
        crate::handlers::sections::delete_section,
        crate::handlers::sections::report_products,
        crate::handlers::sellers::create_seller,
        crate::handlers::sellers::list_sellers,
        crate::handlers::sellers::get_seller,
        crate::handlers::sellers::update_seller,
        crate::handlers::sellers::delete_seller,
        crate::handlers::warehouses::create_warehouse,
        crate::handlers::warehouses::list_warehouses,
        crate::handlers::warehouses::get_warehouse,
        crate::handlers::warehouses::update_warehouse,
        crate::handlers::warehouses::delete_warehouse
    ),
    components(
        schemas(
            // Entities
            crate::entities::seller::Model,
            crate::entities::locality::Model,
            crate::entities::buyer::Model,
            crate::entities::warehouse::Model,
            crate::entities::employee::Model,
            crate::entities::product::Model,
            crate::entities::product_record::Model,
            crate::entities::product_batch::Model,
            crate::entities::section::Model,
            crate::entities::carry::Model,
            crate::entities::inbound_order::Model,
            crate::entities::purchase_order::Model,

            // Requests
            crate::dto::CreateSellerRequest,
            crate::dto::UpdateSellerRequest,
            crate::dto::CreateLocalityRequest,
            crate::dto::UpdateLocalityRequest,
            crate::dto::CreateBuyerRequest,
            crate::dto::UpdateBuyerRequest,
            crate::dto::CreateWarehouseRequest,
            crate::dto::UpdateWarehouseRequest,
            crate::dto::CreateEmployeeRequest,
            crate::dto::UpdateEmployeeRequest,
            crate::dto::CreateProductRequest,
            crate::dto::UpdateProductRequest,
            crate::dto::CreateProductRecordRequest,
            crate::dto::UpdateProductRecordRequest,
            crate::dto::CreateProductBatchRequest,
            crate::dto::UpdateProductBatchRequest,
            crate::dto::CreateSectionRequest,
            crate::dto::UpdateSectionRequest,
            crate::dto::CreateCarryRequest,
            crate::dto::UpdateCarryRequest,
            crate::dto::CreateInboundOrderRequest,
            crate::dto::UpdateInboundOrderRequest,
            crate::dto::CreatePurchaseOrderRequest,
            crate::dto::UpdatePurchaseOrderRequest,

            // Reports
            crate::dto::reports::BuyerPurchaseOrdersReport,
            crate::dto::reports::EmployeeInboundOrdersReport,
            crate::dto::reports::SectionProductsReport,
            crate::dto::reports::ProductRecordsReport,
            crate::dto::reports::LocalitySellersReport,
            crate::dto::reports::LocalityCarriesReport,

            // Status
        crate::handlers::health::StatusResponse,
        crate::handlers::health::ComponentHealth,
        crate::handlers::health::ComponentStatus,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

/// Serves the schema document as JSON.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDocV1::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_domain_schemas() {
        let json = serde_json::to_value(ApiDocV1::openapi()).unwrap();
        let schemas = &json["components"]["schemas"];
        for name in ["Buyer", "Locality", "PurchaseOrder", "ErrorResponse", "CreateBuyerRequest"] {
            assert!(schemas.get(name).is_some(), "missing schema {name}");
        }
        assert_eq!(json["info"]["title"], "Warehouse API");
    }

    #[test]
    fn document_lists_resource_paths() {
        let json = serde_json::to_value(ApiDocV1::openapi()).unwrap();
        let paths = &json["paths"];

        for method in ["get", "patch", "delete"] {
            assert!(paths["/api/v1/buyers/{id}"][method].is_object(), "buyers {method}");
        }
        for method in ["get", "post"] {
            assert!(paths["/api/v1/purchaseOrders"][method].is_object(), "purchaseOrders {method}");
        }
        for report in [
            "/api/v1/buyers/reportPurchaseOrders",
            "/api/v1/employees/reportInboundOrders",
            "/api/v1/sections/reportProducts",
            "/api/v1/products/reportRecords",
            "/api/v1/localities/reportSellers",
            "/api/v1/localities/reportCarries",
        ] {
            assert!(paths[report]["get"].is_object(), "missing {report}");
        }
        assert!(paths["/healthcheck"]["get"].is_object());
        assert!(paths["/api/v1/status"]["get"].is_object());
    }
}
