#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use supplier_scorecard::{
    db::{self, DbConfig},
    entities::{
        purchase_order_items, purchase_orders, purchase_receipt_items, purchase_receipts,
        request_for_quotation_items, request_for_quotation_suppliers, request_for_quotations,
        supplier_quotation_items, supplier_quotations, supplier_scores, suppliers, DocStatus,
    },
    period::ScorecardPeriod,
};

/// Fresh in-memory SQLite database with the schema applied.
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let pool = db::establish_connection_with_config(&DbConfig::in_memory_sqlite())
        .await
        .expect("failed to create test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    Arc::new(pool)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// January 2024 for `supplier`.
pub fn january(supplier: &str) -> ScorecardPeriod {
    ScorecardPeriod::new(supplier, date(2024, 1, 1), date(2024, 1, 31))
}

pub fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

pub async fn insert_supplier(db: &DatabaseConnection, name: &str) {
    suppliers::ActiveModel {
        name: Set(name.to_string()),
        supplier_name: Set(format!("{name} Ltd")),
        disabled: Set(false),
        created_at: Set(Utc::now()),
    }
    .insert(db)
    .await
    .expect("insert supplier");
}

pub async fn insert_order(
    db: &DatabaseConnection,
    name: &str,
    supplier: &str,
    transaction_date: NaiveDate,
    total_qty: i64,
    docstatus: DocStatus,
) {
    purchase_orders::ActiveModel {
        name: Set(name.to_string()),
        supplier: Set(supplier.to_string()),
        transaction_date: Set(transaction_date),
        total_qty: Set(dec(total_qty)),
        docstatus: Set(docstatus),
    }
    .insert(db)
    .await
    .expect("insert purchase order");
}

/// An order line; `docstatus` defaults to submitted.
pub struct OrderLine<'a> {
    pub name: &'a str,
    pub order: &'a str,
    pub qty: i64,
    pub received_qty: i64,
    pub base_amount: i64,
    pub schedule_date: NaiveDate,
    pub docstatus: DocStatus,
}

impl<'a> OrderLine<'a> {
    pub fn new(name: &'a str, order: &'a str, qty: i64, schedule_date: NaiveDate) -> Self {
        Self {
            name,
            order,
            qty,
            received_qty: 0,
            base_amount: qty * 10,
            schedule_date,
            docstatus: DocStatus::Submitted,
        }
    }

    pub fn received(mut self, received_qty: i64) -> Self {
        self.received_qty = received_qty;
        self
    }

    pub fn amount(mut self, base_amount: i64) -> Self {
        self.base_amount = base_amount;
        self
    }

    pub fn status(mut self, docstatus: DocStatus) -> Self {
        self.docstatus = docstatus;
        self
    }

    pub async fn insert(self, db: &DatabaseConnection) {
        purchase_order_items::ActiveModel {
            name: Set(self.name.to_string()),
            parent: Set(self.order.to_string()),
            item_code: Set("ITEM-001".to_string()),
            qty: Set(dec(self.qty)),
            received_qty: Set(dec(self.received_qty)),
            base_amount: Set(dec(self.base_amount)),
            schedule_date: Set(self.schedule_date),
            docstatus: Set(self.docstatus),
        }
        .insert(db)
        .await
        .expect("insert purchase order line");
    }
}

pub async fn insert_receipt(
    db: &DatabaseConnection,
    name: &str,
    supplier: &str,
    posting_date: NaiveDate,
) {
    purchase_receipts::ActiveModel {
        name: Set(name.to_string()),
        supplier: Set(supplier.to_string()),
        posting_date: Set(posting_date),
        docstatus: Set(DocStatus::Submitted),
    }
    .insert(db)
    .await
    .expect("insert purchase receipt");
}

/// A receipt line accepting `qty` at `base_rate`; defaults to submitted
/// with nothing rejected.
pub struct ReceiptLine<'a> {
    pub name: &'a str,
    pub receipt: &'a str,
    pub order_line: Option<&'a str>,
    pub qty: i64,
    pub rejected_qty: i64,
    pub base_rate: i64,
    pub docstatus: DocStatus,
}

impl<'a> ReceiptLine<'a> {
    pub fn new(name: &'a str, receipt: &'a str, qty: i64) -> Self {
        Self {
            name,
            receipt,
            order_line: None,
            qty,
            rejected_qty: 0,
            base_rate: 10,
            docstatus: DocStatus::Submitted,
        }
    }

    pub fn against(mut self, order_line: &'a str) -> Self {
        self.order_line = Some(order_line);
        self
    }

    pub fn rejected(mut self, rejected_qty: i64) -> Self {
        self.rejected_qty = rejected_qty;
        self
    }

    pub fn rate(mut self, base_rate: i64) -> Self {
        self.base_rate = base_rate;
        self
    }

    pub fn status(mut self, docstatus: DocStatus) -> Self {
        self.docstatus = docstatus;
        self
    }

    pub async fn insert(self, db: &DatabaseConnection) {
        purchase_receipt_items::ActiveModel {
            name: Set(self.name.to_string()),
            parent: Set(self.receipt.to_string()),
            purchase_order_item: Set(self.order_line.map(str::to_string)),
            item_code: Set("ITEM-001".to_string()),
            qty: Set(dec(self.qty)),
            received_qty: Set(dec(self.qty + self.rejected_qty)),
            rejected_qty: Set(dec(self.rejected_qty)),
            base_rate: Set(dec(self.base_rate)),
            base_amount: Set(dec(self.qty * self.base_rate)),
            docstatus: Set(self.docstatus),
        }
        .insert(db)
        .await
        .expect("insert purchase receipt line");
    }
}

/// An RFQ sent to `suppliers`.
pub async fn insert_rfq(
    db: &DatabaseConnection,
    name: &str,
    transaction_date: NaiveDate,
    suppliers: &[&str],
) {
    request_for_quotations::ActiveModel {
        name: Set(name.to_string()),
        transaction_date: Set(transaction_date),
        docstatus: Set(DocStatus::Submitted),
    }
    .insert(db)
    .await
    .expect("insert rfq");

    for supplier in suppliers {
        add_rfq_supplier(db, &format!("{name}-{supplier}"), name, supplier).await;
    }
}

pub async fn add_rfq_supplier(db: &DatabaseConnection, name: &str, rfq: &str, supplier: &str) {
    request_for_quotation_suppliers::ActiveModel {
        name: Set(name.to_string()),
        parent: Set(rfq.to_string()),
        supplier: Set(supplier.to_string()),
    }
    .insert(db)
    .await
    .expect("insert rfq supplier");
}

pub async fn insert_rfq_item(db: &DatabaseConnection, name: &str, rfq: &str, docstatus: DocStatus) {
    request_for_quotation_items::ActiveModel {
        name: Set(name.to_string()),
        parent: Set(rfq.to_string()),
        item_code: Set("ITEM-001".to_string()),
        qty: Set(dec(5)),
        docstatus: Set(docstatus),
    }
    .insert(db)
    .await
    .expect("insert rfq item");
}

pub async fn insert_quotation(
    db: &DatabaseConnection,
    name: &str,
    supplier: &str,
    transaction_date: NaiveDate,
) {
    supplier_quotations::ActiveModel {
        name: Set(name.to_string()),
        supplier: Set(supplier.to_string()),
        transaction_date: Set(transaction_date),
        docstatus: Set(DocStatus::Submitted),
    }
    .insert(db)
    .await
    .expect("insert supplier quotation");
}

pub async fn insert_quotation_item(
    db: &DatabaseConnection,
    name: &str,
    quotation: &str,
    rfq_item: &str,
) {
    supplier_quotation_items::ActiveModel {
        name: Set(name.to_string()),
        parent: Set(quotation.to_string()),
        request_for_quotation_item: Set(Some(rfq_item.to_string())),
        item_code: Set("ITEM-001".to_string()),
        qty: Set(dec(5)),
        docstatus: Set(DocStatus::Submitted),
    }
    .insert(db)
    .await
    .expect("insert supplier quotation item");
}

/// Score record with only the given quality sub-score set.
pub async fn insert_scores(db: &DatabaseConnection, supplier: &str, compliance_of_service: i64) {
    supplier_scores::ActiveModel {
        supplier: Set(supplier.to_string()),
        compliance_of_service: Set(Some(dec(compliance_of_service))),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert supplier scores");
}
