pub mod aggregate;
pub mod classify;
pub mod columns;
pub mod create;
pub mod page;
pub mod store;
pub mod view;

pub use aggregate::{count_matching, sum_of};
pub use classify::{
    DeliveryTiming, WARRANTY_WARNING_DAYS, WarrantyState, WarrantyStatus, delivery_timing,
    warranty_status,
};
pub use create::{create_delivery, create_equipment, create_order};
pub use page::{Page, Paginator};
pub use store::{RecordStore, StoredRecord};
pub use view::{Selection, SortDirection, SortKey, SortSpec, TableRecord, ViewQuery, apply};
