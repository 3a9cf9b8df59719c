pub mod buyer;
pub mod carry;
pub mod employee;
pub mod inbound_order;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod purchase_order;
pub mod schema_migration;
pub mod section;
pub mod seller;
pub mod warehouse;

use crate::utils::Identified;

macro_rules! identified_by_surrogate_id {
    ($($entity:ident),+ $(,)?) => {
        $(
            impl Identified for $entity::Model {
                type Key = i32;

                fn key(&self) -> i32 {
                    self.id
                }
            }
        )+
    };
}

identified_by_surrogate_id!(
    buyer,
    carry,
    employee,
    inbound_order,
    product,
    product_batch,
    product_record,
    purchase_order,
    section,
    seller,
    warehouse,
);

impl Identified for locality::Model {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}
