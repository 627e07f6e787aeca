//! Order-side workload metrics.

use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Select,
};
use tracing::instrument;

use super::{days, require_supplier};
use crate::{
    entities::{purchase_order_items, purchase_orders, DocStatus},
    errors::ServiceError,
    period::ScorecardPeriod,
};

/// Calendar days from the period start to its end. Negative for an
/// inverted period.
pub fn total_workdays(period: &ScorecardPeriod) -> Decimal {
    days(period.span_days())
}

/// Order lines for the supplier scheduled inside the period, any status.
pub(crate) fn scheduled_lines(period: &ScorecardPeriod) -> Select<purchase_order_items::Entity> {
    purchase_order_items::Entity::find()
        .join(
            JoinType::InnerJoin,
            purchase_order_items::Relation::PurchaseOrder.def(),
        )
        .filter(purchase_orders::Column::Supplier.eq(period.supplier.as_str()))
        .filter(purchase_order_items::Column::ScheduleDate.between(period.start_date, period.end_date))
}

/// Scheduled lines that have not been fully received yet.
pub(crate) async fn open_lines<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Vec<purchase_order_items::Model>, ServiceError>
where
    C: ConnectionTrait,
{
    scheduled_lines(period)
        .filter(
            Expr::col((
                purchase_order_items::Entity,
                purchase_order_items::Column::ReceivedQty,
            ))
            .lt(Expr::col((
                purchase_order_items::Entity,
                purchase_order_items::Column::Qty,
            ))),
        )
        .all(db)
        .await
        .map_err(ServiceError::db_error)
}

/// Open quantity weighted by the days each line has been due at period end.
///
/// Uses the full ordered quantity, not the outstanding remainder.
#[instrument(skip(db))]
pub async fn item_workdays<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let lines = open_lines(db, period).await?;
    Ok(lines
        .iter()
        .map(|line| days((period.end_date - line.schedule_date).num_days()) * line.qty)
        .sum())
}

/// Total quantity on submitted purchase orders placed in the period.
#[instrument(skip(db))]
pub async fn ordered_qty<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let orders = purchase_orders::Entity::find()
        .filter(purchase_orders::Column::Supplier.eq(period.supplier.as_str()))
        .filter(purchase_orders::Column::Docstatus.eq(DocStatus::Submitted))
        .filter(purchase_orders::Column::TransactionDate.between(period.start_date, period.end_date))
        .all(db)
        .await
        .map_err(ServiceError::db_error)?;

    Ok(orders.iter().map(|o| o.total_qty).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn workdays_follow_period_span() {
        let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
        assert_eq!(
            total_workdays(&ScorecardPeriod::new("S1", d(1, 1), d(1, 31))),
            Decimal::from(30)
        );
        assert_eq!(
            total_workdays(&ScorecardPeriod::new("S1", d(1, 1), d(1, 1))),
            Decimal::ZERO
        );
        assert_eq!(
            total_workdays(&ScorecardPeriod::new("S1", d(2, 1), d(1, 1))),
            Decimal::from(-31)
        );
    }
}
