use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A configured scorecard variable. `path` names the metric that
/// produces its value and is validated before every save.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_scorecard_variables")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub variable_label: String,
    pub param_name: String,
    pub path: String,
    pub description: Option<String>,
    pub is_custom: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
