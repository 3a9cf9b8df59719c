//! Rows returned by the aggregation endpoints.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A report is one row when the caller names an id, every row otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportOutput<T> {
    One(T),
    All(Vec<T>),
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct BuyerPurchaseOrdersReport {
    pub id: i32,
    pub card_number_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct EmployeeInboundOrdersReport {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
    pub inbound_orders_count: i64,
}

/// Product batches currently stored per section.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct SectionProductsReport {
    pub section_id: i32,
    pub section_number: i32,
    pub products_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct ProductRecordsReport {
    pub product_id: i32,
    pub description: String,
    pub records_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct LocalitySellersReport {
    pub locality_id: String,
    pub locality_name: String,
    pub sellers_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize, Deserialize, ToSchema)]
pub struct LocalityCarriesReport {
    pub locality_id: String,
    pub locality_name: String,
    pub carries_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_report_serializes_as_object() {
        let row = LocalitySellersReport {
            locality_id: "L2".into(),
            locality_name: "Palermo".into(),
            sellers_count: 0,
        };
        assert_eq!(
            serde_json::to_value(ReportOutput::One(row.clone())).unwrap(),
            json!({"locality_id": "L2", "locality_name": "Palermo", "sellers_count": 0})
        );
        assert_eq!(
            serde_json::to_value(ReportOutput::All(vec![row])).unwrap()[0]["sellers_count"],
            json!(0)
        );
    }
}
