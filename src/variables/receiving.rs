//! Receiving metrics over submitted purchase receipt lines posted in the
//! period.

use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QuerySelect,
    RelationTrait, Select,
};
use tracing::instrument;

use super::require_supplier;
use crate::{
    entities::{purchase_receipt_items, purchase_receipts, DocStatus},
    errors::ServiceError,
    period::ScorecardPeriod,
};

fn received_lines(period: &ScorecardPeriod) -> Select<purchase_receipt_items::Entity> {
    purchase_receipt_items::Entity::find()
        .join(
            JoinType::InnerJoin,
            purchase_receipt_items::Relation::PurchaseReceipt.def(),
        )
        .filter(purchase_receipts::Column::Supplier.eq(period.supplier.as_str()))
        .filter(purchase_receipts::Column::PostingDate.between(period.start_date, period.end_date))
        .filter(purchase_receipt_items::Column::Docstatus.eq(DocStatus::Submitted))
}

async fn sum_lines<C, F>(db: &C, period: &ScorecardPeriod, f: F) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
    F: Fn(&purchase_receipt_items::Model) -> Decimal,
{
    require_supplier(db, &period.supplier).await?;

    let lines = received_lines(period)
        .all(db)
        .await
        .map_err(ServiceError::db_error)?;

    Ok(lines.iter().map(f).sum())
}

/// Number of receipt lines.
#[instrument(skip(db))]
pub async fn total_received<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let n = received_lines(period)
        .count(db)
        .await
        .map_err(ServiceError::db_error)?;

    Ok(Decimal::from(n))
}

#[instrument(skip(db))]
pub async fn total_received_amount<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    sum_lines(db, period, |l| l.received_qty * l.base_rate).await
}

#[instrument(skip(db))]
pub async fn total_received_items<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    sum_lines(db, period, |l| l.received_qty).await
}

#[instrument(skip(db))]
pub async fn total_rejected_amount<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    sum_lines(db, period, |l| l.rejected_qty * l.base_rate).await
}

#[instrument(skip(db))]
pub async fn total_rejected_items<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    sum_lines(db, period, |l| l.rejected_qty).await
}

#[instrument(skip(db))]
pub async fn total_accepted_amount<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    sum_lines(db, period, |l| l.qty * l.base_rate).await
}

#[instrument(skip(db))]
pub async fn total_accepted_items<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    sum_lines(db, period, |l| l.qty).await
}
