use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::DocStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    /// Owning purchase order.
    pub parent: String,
    pub item_code: String,
    pub qty: Decimal,
    pub received_qty: Decimal,
    /// Line amount in company currency.
    pub base_amount: Decimal,
    pub schedule_date: NaiveDate,
    pub docstatus: DocStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::purchase_orders::Entity",
        from = "Column::Parent",
        to = "super::purchase_orders::Column::Name"
    )]
    PurchaseOrder,
    #[sea_orm(has_many = "super::purchase_receipt_items::Entity")]
    PurchaseReceiptItems,
}

impl Related<super::purchase_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrder.def()
    }
}

impl Related<super::purchase_receipt_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseReceiptItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
