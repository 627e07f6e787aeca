//! Delivery timeliness metrics.
//!
//! Receipts are matched to the order lines they fulfil. A receipt is on
//! time when it was posted on or before the order line's schedule date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QuerySelect, RelationTrait,
};
use tracing::instrument;

use super::{count, days, orders, require_supplier};
use crate::{
    entities::{
        purchase_order_items, purchase_orders, purchase_receipt_items, purchase_receipts,
        DocStatus,
    },
    errors::ServiceError,
    period::ScorecardPeriod,
};

/// A submitted receipt line joined to the order line it fulfils.
#[derive(Debug, Clone, FromQueryResult)]
pub struct LinkedReceiptLine {
    pub schedule_date: NaiveDate,
    pub posting_date: NaiveDate,
    pub ordered_qty: Decimal,
    pub accepted_qty: Decimal,
    pub base_amount: Decimal,
}

impl LinkedReceiptLine {
    pub fn is_on_time(&self) -> bool {
        self.posting_date <= self.schedule_date
    }

    /// Days between the schedule date and the posting date; negative when
    /// the goods arrived early.
    pub fn days_late(&self) -> i64 {
        (self.posting_date - self.schedule_date).num_days()
    }
}

/// Receipt lines matched to the supplier's order lines scheduled in the period.
pub(crate) async fn linked_receipt_lines<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Vec<LinkedReceiptLine>, ServiceError>
where
    C: ConnectionTrait,
{
    purchase_receipt_items::Entity::find()
        .select_only()
        .column_as(purchase_order_items::Column::ScheduleDate, "schedule_date")
        .column_as(purchase_receipts::Column::PostingDate, "posting_date")
        .column_as(purchase_order_items::Column::Qty, "ordered_qty")
        .column_as(purchase_receipt_items::Column::Qty, "accepted_qty")
        .column_as(purchase_receipt_items::Column::BaseAmount, "base_amount")
        .join(
            JoinType::InnerJoin,
            purchase_receipt_items::Relation::PurchaseReceipt.def(),
        )
        .join(
            JoinType::InnerJoin,
            purchase_receipt_items::Relation::PurchaseOrderItem.def(),
        )
        .join(
            JoinType::InnerJoin,
            purchase_order_items::Relation::PurchaseOrder.def(),
        )
        .filter(purchase_orders::Column::Supplier.eq(period.supplier.as_str()))
        .filter(purchase_order_items::Column::ScheduleDate.between(period.start_date, period.end_date))
        .filter(purchase_receipt_items::Column::Docstatus.eq(DocStatus::Submitted))
        .into_model::<LinkedReceiptLine>()
        .all(db)
        .await
        .map_err(ServiceError::db_error)
}

/// Submitted order lines scheduled to arrive in the period.
#[instrument(skip(db))]
pub async fn total_shipments<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let n = orders::scheduled_lines(period)
        .filter(purchase_order_items::Column::Docstatus.eq(DocStatus::Submitted))
        .count(db)
        .await
        .map_err(ServiceError::db_error)?;

    Ok(Decimal::from(n))
}

#[instrument(skip(db))]
pub async fn total_cost_of_shipments<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let lines = orders::scheduled_lines(period)
        .filter(purchase_order_items::Column::Docstatus.eq(DocStatus::Submitted))
        .all(db)
        .await
        .map_err(ServiceError::db_error)?;

    Ok(lines.iter().map(|l| l.base_amount).sum())
}

#[instrument(skip(db))]
pub async fn cost_of_on_time_shipments<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let lines = linked_receipt_lines(db, period).await?;
    Ok(lines
        .iter()
        .filter(|l| l.is_on_time())
        .map(|l| l.base_amount)
        .sum())
}

/// Total cost minus on-time cost. Goes negative when receipts of an
/// on-time line are valued above the order line.
#[instrument(skip(db))]
pub async fn cost_of_delayed_shipments<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    let total = total_cost_of_shipments(db, period).await?;
    let on_time = cost_of_on_time_shipments(db, period).await?;
    Ok(total - on_time)
}

/// Receipt lines that delivered the full ordered quantity on time.
#[instrument(skip(db))]
pub async fn on_time_shipments<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let lines = linked_receipt_lines(db, period).await?;
    Ok(count(
        lines
            .iter()
            .filter(|l| l.is_on_time() && l.ordered_qty == l.accepted_qty)
            .count(),
    ))
}

#[instrument(skip(db))]
pub async fn late_shipments<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    let total = total_shipments(db, period).await?;
    let on_time = on_time_shipments(db, period).await?;
    Ok(total - on_time)
}

/// Item-days late: late receipts weighted by accepted quantity, plus order
/// lines still open at period end weighted by their outstanding quantity.
///
/// A line that was partially received late and is still open contributes
/// to both halves, so this over-counts such lines.
#[instrument(skip(db))]
pub async fn total_days_late<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let late: Decimal = linked_receipt_lines(db, period)
        .await?
        .iter()
        .filter(|l| !l.is_on_time())
        .map(|l| days(l.days_late()) * l.accepted_qty)
        .sum();

    let overdue: Decimal = orders::open_lines(db, period)
        .await?
        .iter()
        .map(|l| days((period.end_date - l.schedule_date).num_days()) * (l.qty - l.received_qty))
        .sum();

    Ok(late + overdue)
}
