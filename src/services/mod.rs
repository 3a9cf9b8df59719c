// Resource services: business rules on top of the repositories
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

use crate::dto::reports::ReportOutput;
use crate::errors::{ServiceError, ServiceResult};

/// Shapes repository report rows: a single object when the caller asked for one id.
pub(crate) fn report_output<T>(
    rows: Vec<T>,
    single: bool,
    entity: &str,
) -> ServiceResult<ReportOutput<T>> {
    if !single {
        return Ok(ReportOutput::All(rows));
    }
    rows.into_iter()
        .next()
        .map(ReportOutput::One)
        .ok_or_else(|| ServiceError::not_found(entity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_without_id_may_be_empty() {
        assert_eq!(
            report_output(Vec::<i64>::new(), false, "Buyer"),
            Ok(ReportOutput::All(vec![]))
        );
    }

    #[test]
    fn single_report_takes_the_row() {
        assert_eq!(report_output(vec![7i64], true, "Buyer"), Ok(ReportOutput::One(7)));
        assert_eq!(
            report_output(Vec::<i64>::new(), true, "Buyer"),
            Err(ServiceError::NotFound("Buyer not Found".into()))
        );
    }
}
