use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::DocStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_for_quotation_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub parent: String,
    pub item_code: String,
    pub qty: Decimal,
    pub docstatus: DocStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::request_for_quotations::Entity",
        from = "Column::Parent",
        to = "super::request_for_quotations::Column::Name"
    )]
    RequestForQuotation,
    #[sea_orm(has_many = "super::supplier_quotation_items::Entity")]
    SupplierQuotationItems,
}

impl Related<super::request_for_quotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestForQuotation.def()
    }
}

impl Related<super::supplier_quotation_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierQuotationItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
