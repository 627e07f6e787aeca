use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Manually entered sub-scores for one supplier. Unset fields count as 0.
#[derive(Clone, Debug, Default, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_scores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub supplier: String,

    // quality
    pub compliance_of_service: Option<Decimal>,
    pub quality_certificate: Option<Decimal>,
    pub technological_infrastructure: Option<Decimal>,
    pub financial_capacity: Option<Decimal>,
    pub market_image: Option<Decimal>,

    // delivery
    pub on_time_delivery: Option<Decimal>,
    pub fast_response_to_urgent_requests: Option<Decimal>,
    pub shipping_document: Option<Decimal>,
    pub capacity_adequacy: Option<Decimal>,

    // price
    pub payment_terms: Option<Decimal>,
    pub competitive_pricing: Option<Decimal>,
    pub on_time_offer: Option<Decimal>,
    pub revised_offer: Option<Decimal>,

    // customer satisfaction
    pub number_of_complaints: Option<Decimal>,
    pub approach_to_complaints: Option<Decimal>,
    pub quick_solution: Option<Decimal>,
    pub effective_solution: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
