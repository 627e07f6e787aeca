//! Aggregates over the manually entered supplier score record.

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, EntityTrait};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{entities::supplier_scores, errors::ServiceError, period::ScorecardPeriod};

/// A group of sub-scores on the supplier score record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGroup {
    Quality,
    Delivery,
    Price,
    CustomerSatisfaction,
}

impl ScoreGroup {
    /// The group's sub-scores on `record`, in field order.
    pub fn fields(self, record: &supplier_scores::Model) -> Vec<Option<Decimal>> {
        match self {
            ScoreGroup::Quality => vec![
                record.compliance_of_service,
                record.quality_certificate,
                record.technological_infrastructure,
                record.financial_capacity,
                record.market_image,
            ],
            ScoreGroup::Delivery => vec![
                record.on_time_delivery,
                record.fast_response_to_urgent_requests,
                record.shipping_document,
                record.capacity_adequacy,
            ],
            ScoreGroup::Price => vec![
                record.payment_terms,
                record.competitive_pricing,
                record.on_time_offer,
                record.revised_offer,
            ],
            ScoreGroup::CustomerSatisfaction => vec![
                record.number_of_complaints,
                record.approach_to_complaints,
                record.quick_solution,
                record.effective_solution,
            ],
        }
    }

    /// Sum of the group's sub-scores; unset fields count as zero.
    pub fn total(self, record: &supplier_scores::Model) -> Decimal {
        self.fields(record)
            .into_iter()
            .map(Option::unwrap_or_default)
            .sum()
    }
}

/// Loads the score record for `supplier`.
pub async fn score_record<C>(db: &C, supplier: &str) -> Result<supplier_scores::Model, ServiceError>
where
    C: ConnectionTrait,
{
    supplier_scores::Entity::find_by_id(supplier.to_string())
        .one(db)
        .await
        .map_err(ServiceError::db_error)?
        .ok_or_else(|| ServiceError::MissingSupplierScore(supplier.to_string()))
}

async fn group_total<C>(
    db: &C,
    period: &ScorecardPeriod,
    group: ScoreGroup,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    let record = score_record(db, &period.supplier).await?;
    Ok(group.total(&record))
}

#[instrument(skip(db))]
pub async fn all_quality_score<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    group_total(db, period, ScoreGroup::Quality).await
}

#[instrument(skip(db))]
pub async fn all_delivery_score<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    group_total(db, period, ScoreGroup::Delivery).await
}

#[instrument(skip(db))]
pub async fn all_price_score<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    group_total(db, period, ScoreGroup::Price).await
}

#[instrument(skip(db))]
pub async fn all_customer_satisfaction_score<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    group_total(db, period, ScoreGroup::CustomerSatisfaction).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn unset_fields_count_as_zero() {
        let record = supplier_scores::Model {
            supplier: "S2".into(),
            compliance_of_service: Some(dec!(3)),
            ..Default::default()
        };
        assert_eq!(ScoreGroup::Quality.total(&record), dec!(3));
        assert_eq!(ScoreGroup::Delivery.total(&record), Decimal::ZERO);
    }

    #[test]
    fn groups_cover_every_sub_score() {
        let record = supplier_scores::Model {
            supplier: "S2".into(),
            compliance_of_service: Some(dec!(1)),
            quality_certificate: Some(dec!(1)),
            technological_infrastructure: Some(dec!(1)),
            financial_capacity: Some(dec!(1)),
            market_image: Some(dec!(1)),
            on_time_delivery: Some(dec!(1)),
            fast_response_to_urgent_requests: Some(dec!(1)),
            shipping_document: Some(dec!(1)),
            capacity_adequacy: Some(dec!(1)),
            payment_terms: Some(dec!(1)),
            competitive_pricing: Some(dec!(1)),
            on_time_offer: Some(dec!(1)),
            revised_offer: Some(dec!(1)),
            number_of_complaints: Some(dec!(1)),
            approach_to_complaints: Some(dec!(1)),
            quick_solution: Some(dec!(1)),
            effective_solution: Some(dec!(1)),
        };
        let total: Decimal = [
            ScoreGroup::Quality,
            ScoreGroup::Delivery,
            ScoreGroup::Price,
            ScoreGroup::CustomerSatisfaction,
        ]
        .into_iter()
        .map(|g| g.total(&record))
        .sum();
        assert_eq!(total, dec!(17));
        assert_eq!(ScoreGroup::Quality.total(&record), dec!(5));
    }
}
