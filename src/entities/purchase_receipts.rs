use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::DocStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_receipts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub supplier: String,
    pub posting_date: NaiveDate,
    pub docstatus: DocStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::purchase_receipt_items::Entity")]
    PurchaseReceiptItems,
}

impl Related<super::purchase_receipt_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseReceiptItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
