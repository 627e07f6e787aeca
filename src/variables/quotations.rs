//! Request-for-quotation responsiveness metrics.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QuerySelect,
    RelationTrait, Select,
};
use tracing::instrument;

use super::{count, days, require_supplier};
use crate::{
    entities::{
        request_for_quotation_items, request_for_quotation_suppliers, request_for_quotations,
        supplier_quotation_items, supplier_quotations, DocStatus,
    },
    errors::ServiceError,
    period::ScorecardPeriod,
};

/// An RFQ line sent to the supplier.
#[derive(Debug, Clone, FromQueryResult)]
struct RfqLine {
    rfq_item: String,
}

/// An RFQ line the supplier answered with a quotation line.
#[derive(Debug, Clone, FromQueryResult)]
pub struct QuotedLine {
    pub rfq: String,
    pub rfq_date: NaiveDate,
    pub quotation: String,
    pub quotation_item: String,
    pub quotation_date: NaiveDate,
}

impl QuotedLine {
    pub fn response_days(&self) -> i64 {
        (self.quotation_date - self.rfq_date).num_days()
    }
}

/// Submitted RFQ lines, from RFQs in the period that list the supplier.
fn rfq_lines(period: &ScorecardPeriod) -> Select<request_for_quotation_items::Entity> {
    request_for_quotation_items::Entity::find()
        .join(
            JoinType::InnerJoin,
            request_for_quotation_items::Relation::RequestForQuotation.def(),
        )
        .join(
            JoinType::InnerJoin,
            request_for_quotations::Relation::Suppliers.def(),
        )
        .filter(request_for_quotation_suppliers::Column::Supplier.eq(period.supplier.as_str()))
        .filter(
            request_for_quotations::Column::TransactionDate
                .between(period.start_date, period.end_date),
        )
        .filter(request_for_quotation_items::Column::Docstatus.eq(DocStatus::Submitted))
}

/// One row per RFQ line. A supplier listed twice on the same RFQ does not
/// duplicate its lines.
async fn sent_lines<C>(db: &C, period: &ScorecardPeriod) -> Result<Vec<RfqLine>, ServiceError>
where
    C: ConnectionTrait,
{
    let rows = rfq_lines(period)
        .select_only()
        .column_as(request_for_quotation_items::Column::Name, "rfq_item")
        .into_model::<RfqLine>()
        .all(db)
        .await
        .map_err(ServiceError::db_error)?;

    let mut seen = HashSet::new();
    Ok(rows
        .into_iter()
        .filter(|row| seen.insert(row.rfq_item.clone()))
        .collect())
}

/// One row per quotation line answering an RFQ line, deduplicated the same
/// way as [`sent_lines`].
pub(crate) async fn quoted_lines<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Vec<QuotedLine>, ServiceError>
where
    C: ConnectionTrait,
{
    let rows = rfq_lines(period)
        .join(
            JoinType::InnerJoin,
            request_for_quotation_items::Relation::SupplierQuotationItems.def(),
        )
        .join(
            JoinType::InnerJoin,
            supplier_quotation_items::Relation::SupplierQuotation.def(),
        )
        .filter(supplier_quotation_items::Column::Docstatus.eq(DocStatus::Submitted))
        .filter(supplier_quotations::Column::Supplier.eq(period.supplier.as_str()))
        .select_only()
        .column_as(request_for_quotations::Column::Name, "rfq")
        .column_as(request_for_quotations::Column::TransactionDate, "rfq_date")
        .column_as(supplier_quotations::Column::Name, "quotation")
        .column_as(supplier_quotation_items::Column::Name, "quotation_item")
        .column_as(supplier_quotations::Column::TransactionDate, "quotation_date")
        .into_model::<QuotedLine>()
        .all(db)
        .await
        .map_err(ServiceError::db_error)?;

    let mut seen = HashSet::new();
    Ok(rows
        .into_iter()
        .filter(|row| seen.insert(row.quotation_item.clone()))
        .collect())
}

/// RFQs sent to the supplier, counted once per RFQ line.
#[instrument(skip(db))]
pub async fn rfq_total_number<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    Ok(count(sent_lines(db, period).await?.len()))
}

#[instrument(skip(db))]
pub async fn rfq_total_items<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    Ok(count(sent_lines(db, period).await?.len()))
}

/// Quotations answering the period's RFQs, counted once per quotation line.
#[instrument(skip(db))]
pub async fn sq_total_number<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    Ok(count(quoted_lines(db, period).await?.len()))
}

#[instrument(skip(db))]
pub async fn sq_total_items<C>(db: &C, period: &ScorecardPeriod) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    Ok(count(quoted_lines(db, period).await?.len()))
}

/// Sum over answered RFQ lines of the days from RFQ to quotation.
#[instrument(skip(db))]
pub async fn rfq_response_days<C>(
    db: &C,
    period: &ScorecardPeriod,
) -> Result<Decimal, ServiceError>
where
    C: ConnectionTrait,
{
    require_supplier(db, &period.supplier).await?;

    let lines = quoted_lines(db, period).await?;
    Ok(lines.iter().map(|l| days(l.response_days())).sum())
}
