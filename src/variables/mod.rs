//! The scorecard variable catalogue.
//!
//! Every variable a scorecard can reference is a [`Metric`]: a named query
//! over one supplier's purchasing, receiving and quotation records for a
//! [`ScorecardPeriod`]. The catalogue is closed; a variable path either
//! names one of these metrics or does not resolve (see [`path`]).
//!
//! Aggregates over no matching rows are `0`, never an error.

use std::time::Instant;

use metrics::{counter, histogram};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, EntityTrait};
use strum::{EnumCount, EnumIter, EnumMessage, EnumString, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, warn};

use crate::{entities::suppliers, errors::ServiceError, period::ScorecardPeriod};

pub mod delivery;
pub mod orders;
pub mod path;
pub mod quotations;
pub mod receiving;
pub mod scores;

pub use path::{
    resolve_path, validate_path, NamespaceResolver, PathResolutionError, PathResolver,
    DEFAULT_NAMESPACE,
};

/// A scorecard variable. The string form is the variable path that
/// configuration records store, e.g. `get_total_workdays`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    EnumCount,
    EnumMessage,
    IntoStaticStr,
    strum::Display,
)]
pub enum Metric {
    #[strum(
        serialize = "get_total_workdays",
        message = "Total Workdays",
        detailed_message = "Number of calendar days in the period"
    )]
    TotalWorkdays,
    #[strum(
        serialize = "get_item_workdays",
        message = "Total Item Days",
        detailed_message = "Open order quantity weighted by days from schedule date to period end"
    )]
    ItemWorkdays,
    #[strum(
        serialize = "get_total_cost_of_shipments",
        message = "Total Cost of Shipments",
        detailed_message = "Company-currency amount of confirmed order lines scheduled in the period"
    )]
    TotalCostOfShipments,
    #[strum(
        serialize = "get_cost_of_delayed_shipments",
        message = "Cost of Delayed Shipments",
        detailed_message = "Total cost of shipments minus cost of on-time shipments"
    )]
    CostOfDelayedShipments,
    #[strum(
        serialize = "get_cost_of_on_time_shipments",
        message = "Cost of On Time Shipments",
        detailed_message = "Receipt amount of lines posted on or before the order line's schedule date"
    )]
    CostOfOnTimeShipments,
    #[strum(
        serialize = "get_total_days_late",
        message = "Total Days Late",
        detailed_message = "Item-days late across late receipts and still-open overdue order lines"
    )]
    TotalDaysLate,
    #[strum(
        serialize = "get_on_time_shipments",
        message = "On Time Shipments",
        detailed_message = "Receipt lines delivering the full ordered quantity on or before schedule"
    )]
    OnTimeShipments,
    #[strum(
        serialize = "get_late_shipments",
        message = "Late Shipments",
        detailed_message = "Total shipments minus on-time shipments"
    )]
    LateShipments,
    #[strum(
        serialize = "get_total_received",
        message = "Total Shipments Received",
        detailed_message = "Confirmed receipt lines posted in the period"
    )]
    TotalReceived,
    #[strum(
        serialize = "get_total_received_amount",
        message = "Total Received Amount",
        detailed_message = "Received quantity times company-currency rate over receipts in the period"
    )]
    TotalReceivedAmount,
    #[strum(
        serialize = "get_total_received_items",
        message = "Total Received Items",
        detailed_message = "Received quantity over receipts in the period"
    )]
    TotalReceivedItems,
    #[strum(
        serialize = "get_total_rejected_amount",
        message = "Total Rejected Amount",
        detailed_message = "Rejected quantity times company-currency rate over receipts in the period"
    )]
    TotalRejectedAmount,
    #[strum(
        serialize = "get_total_rejected_items",
        message = "Total Rejected Items",
        detailed_message = "Rejected quantity over receipts in the period"
    )]
    TotalRejectedItems,
    #[strum(
        serialize = "get_total_accepted_amount",
        message = "Total Accepted Amount",
        detailed_message = "Accepted quantity times company-currency rate over receipts in the period"
    )]
    TotalAcceptedAmount,
    #[strum(
        serialize = "get_total_accepted_items",
        message = "Total Accepted Items",
        detailed_message = "Accepted quantity over receipts in the period"
    )]
    TotalAcceptedItems,
    #[strum(
        serialize = "get_total_shipments",
        message = "Total Shipments",
        detailed_message = "Confirmed order lines scheduled to arrive in the period"
    )]
    TotalShipments,
    #[strum(
        serialize = "get_ordered_qty",
        message = "Ordered Qty",
        detailed_message = "Total quantity of confirmed purchase orders placed in the period"
    )]
    OrderedQty,
    #[strum(
        serialize = "get_rfq_total_number",
        message = "Total RFQs",
        detailed_message = "Requests for quotation sent to the supplier in the period"
    )]
    RfqTotalNumber,
    #[strum(
        serialize = "get_rfq_total_items",
        message = "Total RFQ Items",
        detailed_message = "Request for quotation lines sent to the supplier in the period"
    )]
    RfqTotalItems,
    #[strum(
        serialize = "get_sq_total_number",
        message = "Total Supplier Quotations",
        detailed_message = "Supplier quotations answering the period's requests for quotation"
    )]
    SqTotalNumber,
    #[strum(
        serialize = "get_sq_total_items",
        message = "Total Supplier Quotation Items",
        detailed_message = "Supplier quotation lines answering the period's RFQ lines"
    )]
    SqTotalItems,
    #[strum(
        serialize = "get_rfq_response_days",
        message = "RFQ Response Days",
        detailed_message = "Days between each RFQ and the supplier quotation answering it"
    )]
    RfqResponseDays,
    #[strum(
        serialize = "get_all_quality_score",
        message = "Quality Score",
        detailed_message = "Sum of the supplier's manual quality sub-scores"
    )]
    AllQualityScore,
    #[strum(
        serialize = "get_all_delivery_score",
        message = "Delivery Score",
        detailed_message = "Sum of the supplier's manual delivery sub-scores"
    )]
    AllDeliveryScore,
    #[strum(
        serialize = "get_all_price_score",
        message = "Price Score",
        detailed_message = "Sum of the supplier's manual price sub-scores"
    )]
    AllPriceScore,
    #[strum(
        serialize = "get_all_customer_satisfaction_score",
        message = "Customer Satisfaction Score",
        detailed_message = "Sum of the supplier's manual customer satisfaction sub-scores"
    )]
    AllCustomerSatisfactionScore,
}

impl Metric {
    /// Every catalogue entry, in declaration order.
    pub fn all() -> impl Iterator<Item = Metric> {
        Metric::iter()
    }

    /// Bare variable path, e.g. `get_total_workdays`.
    pub fn path(self) -> &'static str {
        self.into()
    }

    /// Parameter name a scorecard formula refers to the value by.
    pub fn param_name(self) -> &'static str {
        let path = self.path();
        path.strip_prefix("get_").unwrap_or(path)
    }

    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.path())
    }

    pub fn description(self) -> &'static str {
        self.get_detailed_message().unwrap_or_default()
    }

    /// Looks up a bare catalogue name.
    pub fn from_path(path: &str) -> Option<Metric> {
        path.parse().ok()
    }

    /// Manual score aggregates read the supplier score record instead of
    /// transactional documents.
    pub fn is_score(self) -> bool {
        matches!(
            self,
            Metric::AllQualityScore
                | Metric::AllDeliveryScore
                | Metric::AllPriceScore
                | Metric::AllCustomerSatisfactionScore
        )
    }

    /// Evaluates the metric for `period`.
    pub async fn evaluate<C>(self, db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
    where
        C: ConnectionTrait,
    {
        let path = self.path();
        let started = Instant::now();

        let result = self.dispatch(db, period).await;

        histogram!("scorecard.variable.duration", started.elapsed(), "path" => path);
        match &result {
            Ok(value) => {
                counter!("scorecard.variable.evaluated", 1, "path" => path);
                debug!(
                    path,
                    supplier = %period.supplier,
                    value = %value,
                    "Scorecard variable evaluated"
                );
            }
            Err(e) => {
                counter!("scorecard.variable.error", 1, "path" => path);
                warn!(path, supplier = %period.supplier, error = %e, "Scorecard variable failed");
            }
        }

        result
    }

    async fn dispatch<C>(self, db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
    where
        C: ConnectionTrait,
    {
        match self {
            Metric::TotalWorkdays => Ok(orders::total_workdays(period)),
            Metric::ItemWorkdays => orders::item_workdays(db, period).await,
            Metric::OrderedQty => orders::ordered_qty(db, period).await,

            Metric::TotalCostOfShipments => delivery::total_cost_of_shipments(db, period).await,
            Metric::CostOfDelayedShipments => delivery::cost_of_delayed_shipments(db, period).await,
            Metric::CostOfOnTimeShipments => delivery::cost_of_on_time_shipments(db, period).await,
            Metric::TotalDaysLate => delivery::total_days_late(db, period).await,
            Metric::OnTimeShipments => delivery::on_time_shipments(db, period).await,
            Metric::LateShipments => delivery::late_shipments(db, period).await,
            Metric::TotalShipments => delivery::total_shipments(db, period).await,

            Metric::TotalReceived => receiving::total_received(db, period).await,
            Metric::TotalReceivedAmount => receiving::total_received_amount(db, period).await,
            Metric::TotalReceivedItems => receiving::total_received_items(db, period).await,
            Metric::TotalRejectedAmount => receiving::total_rejected_amount(db, period).await,
            Metric::TotalRejectedItems => receiving::total_rejected_items(db, period).await,
            Metric::TotalAcceptedAmount => receiving::total_accepted_amount(db, period).await,
            Metric::TotalAcceptedItems => receiving::total_accepted_items(db, period).await,

            Metric::RfqTotalNumber => quotations::rfq_total_number(db, period).await,
            Metric::RfqTotalItems => quotations::rfq_total_items(db, period).await,
            Metric::SqTotalNumber => quotations::sq_total_number(db, period).await,
            Metric::SqTotalItems => quotations::sq_total_items(db, period).await,
            Metric::RfqResponseDays => quotations::rfq_response_days(db, period).await,

            Metric::AllQualityScore => scores::all_quality_score(db, period).await,
            Metric::AllDeliveryScore => scores::all_delivery_score(db, period).await,
            Metric::AllPriceScore => scores::all_price_score(db, period).await,
            Metric::AllCustomerSatisfactionScore => {
                scores::all_customer_satisfaction_score(db, period).await
            }
        }
    }
}

/// Number of entries in the catalogue.
pub const CATALOGUE_SIZE: usize = Metric::COUNT;

/// Loads the supplier a period refers to. Query-backed variables fail on
/// an unknown supplier instead of reporting zero activity.
pub(crate) async fn require_supplier<C>(
    db: &C,
    supplier: &str,
) -> Result<suppliers::Model, ServiceError>
where
    C: ConnectionTrait,
{
    suppliers::Entity::find_by_id(supplier.to_string())
        .one(db)
        .await
        .map_err(ServiceError::db_error)?
        .ok_or_else(|| ServiceError::SupplierNotFound(supplier.to_string()))
}

/// Converts a signed day count into a metric value.
pub(crate) fn days(n: i64) -> Decimal {
    Decimal::from(n)
}

/// Converts a row count into a metric value.
pub(crate) fn count(n: usize) -> Decimal {
    Decimal::from(n as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_path_round_trips() {
        for metric in Metric::all() {
            assert_eq!(Metric::from_path(metric.path()), Some(metric));
            assert_eq!(metric.to_string(), metric.path());
        }
    }

    #[test]
    fn paths_and_param_names_are_unique() {
        let paths: HashSet<_> = Metric::all().map(Metric::path).collect();
        let params: HashSet<_> = Metric::all().map(Metric::param_name).collect();
        assert_eq!(paths.len(), CATALOGUE_SIZE);
        assert_eq!(params.len(), CATALOGUE_SIZE);
    }

    #[test]
    fn param_name_strips_get_prefix() {
        assert_eq!(Metric::TotalWorkdays.param_name(), "total_workdays");
        assert_eq!(
            Metric::AllCustomerSatisfactionScore.param_name(),
            "all_customer_satisfaction_score"
        );
    }

    #[test]
    fn every_metric_is_documented() {
        for metric in Metric::all() {
            assert!(!metric.label().is_empty());
            assert!(!metric.description().is_empty(), "{metric} has no description");
        }
    }

    #[test]
    fn unknown_names_do_not_parse() {
        assert_eq!(Metric::from_path("not_a_real_function"), None);
        assert_eq!(Metric::from_path("total_workdays"), None);
        assert_eq!(Metric::from_path(""), None);
    }

    #[test]
    fn score_metrics_are_flagged() {
        let scores: Vec<_> = Metric::all().filter(|m| m.is_score()).collect();
        assert_eq!(scores.len(), 4);
        assert!(!Metric::TotalShipments.is_score());
    }
}
