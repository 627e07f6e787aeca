use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::DocStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_receipt_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    /// Owning purchase receipt.
    pub parent: String,
    /// Purchase order line this receipt line fulfils, if any.
    pub purchase_order_item: Option<String>,
    pub item_code: String,
    /// Accepted quantity.
    pub qty: Decimal,
    pub received_qty: Decimal,
    pub rejected_qty: Decimal,
    pub base_rate: Decimal,
    pub base_amount: Decimal,
    pub docstatus: DocStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::purchase_receipts::Entity",
        from = "Column::Parent",
        to = "super::purchase_receipts::Column::Name"
    )]
    PurchaseReceipt,
    #[sea_orm(
        belongs_to = "super::purchase_order_items::Entity",
        from = "Column::PurchaseOrderItem",
        to = "super::purchase_order_items::Column::Name"
    )]
    PurchaseOrderItem,
}

impl Related<super::purchase_receipts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseReceipt.def()
    }
}

impl Related<super::purchase_order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrderItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
