use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_suppliers_table::Migration),
            Box::new(m20240101_000002_create_purchase_order_tables::Migration),
            Box::new(m20240101_000003_create_purchase_receipt_tables::Migration),
            Box::new(m20240101_000004_create_quotation_tables::Migration),
            Box::new(m20240101_000005_create_supplier_scores_table::Migration),
            Box::new(m20240101_000006_create_scorecard_variables_table::Migration),
        ]
    }
}

/// Creates a non-unique index on a single column.
fn index_on<T, C>(name: &str, table: T, col: C) -> IndexCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden + 'static,
{
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(col)
        .to_owned()
}

mod m20240101_000001_create_suppliers_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_suppliers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Suppliers::SupplierName).string().not_null())
                        .col(
                            ColumnDef::new(Suppliers::Disabled)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Suppliers::CreatedAt).timestamp_with_time_zone().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Suppliers {
        Table,
        Name,
        SupplierName,
        Disabled,
        CreatedAt,
    }
}

mod m20240101_000002_create_purchase_order_tables {

    use super::index_on;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_purchase_order_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PurchaseOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseOrders::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PurchaseOrders::Supplier).string().not_null())
                        .col(
                            ColumnDef::new(PurchaseOrders::TransactionDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::TotalQty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::Docstatus)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PurchaseOrderItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseOrderItems::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PurchaseOrderItems::Parent).string().not_null())
                        .col(
                            ColumnDef::new(PurchaseOrderItems::ItemCode)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::Qty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::ReceivedQty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::BaseAmount)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::ScheduleDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::Docstatus)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index_on(
                    "idx_purchase_orders_supplier",
                    PurchaseOrders::Table,
                    PurchaseOrders::Supplier,
                ))
                .await?;
            manager
                .create_index(index_on(
                    "idx_purchase_order_items_parent",
                    PurchaseOrderItems::Table,
                    PurchaseOrderItems::Parent,
                ))
                .await?;
            manager
                .create_index(index_on(
                    "idx_purchase_order_items_schedule_date",
                    PurchaseOrderItems::Table,
                    PurchaseOrderItems::ScheduleDate,
                ))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PurchaseOrderItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PurchaseOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PurchaseOrders {
        Table,
        Name,
        Supplier,
        TransactionDate,
        TotalQty,
        Docstatus,
    }

    #[derive(DeriveIden)]
    enum PurchaseOrderItems {
        Table,
        Name,
        Parent,
        ItemCode,
        Qty,
        ReceivedQty,
        BaseAmount,
        ScheduleDate,
        Docstatus,
    }
}

mod m20240101_000003_create_purchase_receipt_tables {

    use super::index_on;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_purchase_receipt_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PurchaseReceipts::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseReceipts::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReceipts::Supplier)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReceipts::PostingDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReceipts::Docstatus)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            let mut items = Table::create();
            items
                .table(PurchaseReceiptItems::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(PurchaseReceiptItems::Name)
                        .string()
                        .primary_key()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(PurchaseReceiptItems::Parent)
                        .string()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(PurchaseReceiptItems::PurchaseOrderItem)
                        .string()
                        .null(),
                )
                .col(
                    ColumnDef::new(PurchaseReceiptItems::ItemCode)
                        .string()
                        .not_null(),
                );
            for qty_col in [
                PurchaseReceiptItems::Qty,
                PurchaseReceiptItems::ReceivedQty,
                PurchaseReceiptItems::RejectedQty,
                PurchaseReceiptItems::BaseRate,
                PurchaseReceiptItems::BaseAmount,
            ] {
                items.col(ColumnDef::new(qty_col).decimal().not_null().default(0));
            }
            items.col(
                ColumnDef::new(PurchaseReceiptItems::Docstatus)
                    .integer()
                    .not_null()
                    .default(0),
            );
            manager.create_table(items.to_owned()).await?;

            manager
                .create_index(index_on(
                    "idx_purchase_receipts_supplier",
                    PurchaseReceipts::Table,
                    PurchaseReceipts::Supplier,
                ))
                .await?;
            manager
                .create_index(index_on(
                    "idx_purchase_receipt_items_parent",
                    PurchaseReceiptItems::Table,
                    PurchaseReceiptItems::Parent,
                ))
                .await?;
            manager
                .create_index(index_on(
                    "idx_purchase_receipt_items_po_item",
                    PurchaseReceiptItems::Table,
                    PurchaseReceiptItems::PurchaseOrderItem,
                ))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PurchaseReceiptItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PurchaseReceipts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PurchaseReceipts {
        Table,
        Name,
        Supplier,
        PostingDate,
        Docstatus,
    }

    #[derive(DeriveIden)]
    enum PurchaseReceiptItems {
        Table,
        Name,
        Parent,
        PurchaseOrderItem,
        ItemCode,
        Qty,
        ReceivedQty,
        RejectedQty,
        BaseRate,
        BaseAmount,
        Docstatus,
    }
}

mod m20240101_000004_create_quotation_tables {

    use super::index_on;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_quotation_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(RequestForQuotations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RequestForQuotations::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotations::TransactionDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotations::Docstatus)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(RequestForQuotationItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RequestForQuotationItems::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotationItems::Parent)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotationItems::ItemCode)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotationItems::Qty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotationItems::Docstatus)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(RequestForQuotationSuppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RequestForQuotationSuppliers::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotationSuppliers::Parent)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(RequestForQuotationSuppliers::Supplier)
                                .string()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SupplierQuotations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierQuotations::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotations::Supplier)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotations::TransactionDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotations::Docstatus)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(SupplierQuotationItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierQuotationItems::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotationItems::Parent)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotationItems::RequestForQuotationItem)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotationItems::ItemCode)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotationItems::Qty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(SupplierQuotationItems::Docstatus)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(index_on(
                    "idx_rfq_items_parent",
                    RequestForQuotationItems::Table,
                    RequestForQuotationItems::Parent,
                ))
                .await?;
            manager
                .create_index(index_on(
                    "idx_rfq_suppliers_supplier",
                    RequestForQuotationSuppliers::Table,
                    RequestForQuotationSuppliers::Supplier,
                ))
                .await?;
            manager
                .create_index(index_on(
                    "idx_supplier_quotations_supplier",
                    SupplierQuotations::Table,
                    SupplierQuotations::Supplier,
                ))
                .await?;
            manager
                .create_index(index_on(
                    "idx_supplier_quotation_items_rfq_item",
                    SupplierQuotationItems::Table,
                    SupplierQuotationItems::RequestForQuotationItem,
                ))
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierQuotationItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(SupplierQuotations::Table).to_owned())
                .await?;
            manager
                .drop_table(
                    Table::drop()
                        .table(RequestForQuotationSuppliers::Table)
                        .to_owned(),
                )
                .await?;
            manager
                .drop_table(Table::drop().table(RequestForQuotationItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(RequestForQuotations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum RequestForQuotations {
        Table,
        Name,
        TransactionDate,
        Docstatus,
    }

    #[derive(DeriveIden)]
    enum RequestForQuotationItems {
        Table,
        Name,
        Parent,
        ItemCode,
        Qty,
        Docstatus,
    }

    #[derive(DeriveIden)]
    enum RequestForQuotationSuppliers {
        Table,
        Name,
        Parent,
        Supplier,
    }

    #[derive(DeriveIden)]
    enum SupplierQuotations {
        Table,
        Name,
        Supplier,
        TransactionDate,
        Docstatus,
    }

    #[derive(DeriveIden)]
    enum SupplierQuotationItems {
        Table,
        Name,
        Parent,
        RequestForQuotationItem,
        ItemCode,
        Qty,
        Docstatus,
    }
}

mod m20240101_000005_create_supplier_scores_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_supplier_scores_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            let mut table = Table::create();
            table.table(SupplierScores::Table).if_not_exists().col(
                ColumnDef::new(SupplierScores::Supplier)
                    .string()
                    .primary_key()
                    .not_null(),
            );
            for score in [
                SupplierScores::ComplianceOfService,
                SupplierScores::QualityCertificate,
                SupplierScores::TechnologicalInfrastructure,
                SupplierScores::FinancialCapacity,
                SupplierScores::MarketImage,
                SupplierScores::OnTimeDelivery,
                SupplierScores::FastResponseToUrgentRequests,
                SupplierScores::ShippingDocument,
                SupplierScores::CapacityAdequacy,
                SupplierScores::PaymentTerms,
                SupplierScores::CompetitivePricing,
                SupplierScores::OnTimeOffer,
                SupplierScores::RevisedOffer,
                SupplierScores::NumberOfComplaints,
                SupplierScores::ApproachToComplaints,
                SupplierScores::QuickSolution,
                SupplierScores::EffectiveSolution,
            ] {
                table.col(ColumnDef::new(score).decimal().null());
            }

            manager.create_table(table.to_owned()).await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SupplierScores::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SupplierScores {
        Table,
        Supplier,
        ComplianceOfService,
        QualityCertificate,
        TechnologicalInfrastructure,
        FinancialCapacity,
        MarketImage,
        OnTimeDelivery,
        FastResponseToUrgentRequests,
        ShippingDocument,
        CapacityAdequacy,
        PaymentTerms,
        CompetitivePricing,
        OnTimeOffer,
        RevisedOffer,
        NumberOfComplaints,
        ApproachToComplaints,
        QuickSolution,
        EffectiveSolution,
    }
}

mod m20240101_000006_create_scorecard_variables_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_scorecard_variables_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SupplierScorecardVariables::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SupplierScorecardVariables::Name)
                                .string()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierScorecardVariables::VariableLabel)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierScorecardVariables::ParamName)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(SupplierScorecardVariables::Path)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SupplierScorecardVariables::Description)
                                .text()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SupplierScorecardVariables::IsCustom)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(SupplierScorecardVariables::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SupplierScorecardVariables {
        Table,
        Name,
        VariableLabel,
        ParamName,
        Path,
        Description,
        IsCustom,
    }
}
