//! sea-orm entities for the purchasing, receiving and quotation records the
//! scorecard variables aggregate over.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod purchase_order_items;
pub mod purchase_orders;
pub mod purchase_receipt_items;
pub mod purchase_receipts;
pub mod request_for_quotation_items;
pub mod request_for_quotation_suppliers;
pub mod request_for_quotations;
pub mod scorecard_variables;
pub mod supplier_quotation_items;
pub mod supplier_quotations;
pub mod supplier_scores;
pub mod suppliers;

/// Document lifecycle state shared by every transactional table.
///
/// Only `Submitted` documents count as confirmed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum DocStatus {
    #[default]
    #[sea_orm(num_value = 0)]
    Draft,
    #[sea_orm(num_value = 1)]
    Submitted,
    #[sea_orm(num_value = 2)]
    Cancelled,
}
