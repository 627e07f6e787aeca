use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::DocStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_quotation_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub parent: String,
    /// RFQ line this quotation line answers, if any.
    pub request_for_quotation_item: Option<String>,
    pub item_code: String,
    pub qty: Decimal,
    pub docstatus: DocStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier_quotations::Entity",
        from = "Column::Parent",
        to = "super::supplier_quotations::Column::Name"
    )]
    SupplierQuotation,
    #[sea_orm(
        belongs_to = "super::request_for_quotation_items::Entity",
        from = "Column::RequestForQuotationItem",
        to = "super::request_for_quotation_items::Column::Name"
    )]
    RequestForQuotationItem,
}

impl Related<super::supplier_quotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierQuotation.def()
    }
}

impl Related<super::request_for_quotation_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestForQuotationItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
