use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One supplier an RFQ was sent to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "request_for_quotation_suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub parent: String,
    pub supplier: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::request_for_quotations::Entity",
        from = "Column::Parent",
        to = "super::request_for_quotations::Column::Name"
    )]
    RequestForQuotation,
}

impl Related<super::request_for_quotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestForQuotation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
