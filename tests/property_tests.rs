//! Property-based tests for the scorecard variables.
//!
//! Covers the derived-metric identities over randomly generated delivery
//! histories and the path validator over arbitrary input.

mod common;

use proptest::prelude::*;
use rust_decimal::Decimal;
use supplier_scorecard::{
    entities::DocStatus,
    services::variables::param_name_from_label,
    variables::{resolve_path, Metric, NamespaceResolver, DEFAULT_NAMESPACE},
    ScorecardPeriod,
};

use common::*;

/// (ordered qty, received qty, schedule day, posting day offset, receipt rate)
fn delivery_strategy() -> impl Strategy<Value = (i64, i64, u32, i64, i64)> {
    (1i64..50, 0i64..50, 1u32..=28, -5i64..10, 1i64..20)
}

fn run<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
        .block_on(fut)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn derived_metrics_match_their_operands(
        deliveries in prop::collection::vec(delivery_strategy(), 0..6)
    ) {
        let (late, total, on_time, delayed_cost, total_cost, on_time_cost, days_late) = run(async {
            let db = setup_db().await;
            insert_supplier(&db, "S1").await;
            insert_order(&db, "PO-1", "S1", date(2024, 1, 1), 1, DocStatus::Submitted).await;

            for (i, &(qty, received, day, offset, rate)) in deliveries.iter().enumerate() {
                let line = format!("POI-{i}");
                let received = received.min(qty);
                OrderLine::new(&line, "PO-1", qty, date(2024, 1, day))
                    .received(received)
                    .insert(&db)
                    .await;
                if received > 0 {
                    let receipt = format!("PR-{i}");
                    let posting = date(2024, 1, day) + chrono::Duration::days(offset);
                    insert_receipt(&db, &receipt, "S1", posting).await;
                    ReceiptLine::new(&format!("PRI-{i}"), &receipt, received)
                        .against(&line)
                        .rate(rate)
                        .insert(&db)
                        .await;
                }
            }

            let period = january("S1");
            let eval = |m: Metric| {
                let db = db.clone();
                let period = period.clone();
                async move { m.evaluate(&*db, &period).await.expect("evaluate") }
            };
            (
                eval(Metric::LateShipments).await,
                eval(Metric::TotalShipments).await,
                eval(Metric::OnTimeShipments).await,
                eval(Metric::CostOfDelayedShipments).await,
                eval(Metric::TotalCostOfShipments).await,
                eval(Metric::CostOfOnTimeShipments).await,
                eval(Metric::TotalDaysLate).await,
            )
        });

        prop_assert_eq!(late, total - on_time);
        prop_assert_eq!(delayed_cost, total_cost - on_time_cost);
        prop_assert!(on_time <= total);
        prop_assert!(days_late >= Decimal::ZERO);
    }

    #[test]
    fn workdays_are_the_signed_span(start in 0i64..400, len in -60i64..60) {
        let start_date = date(2024, 1, 1) + chrono::Duration::days(start);
        let period = ScorecardPeriod::new("S1", start_date, start_date + chrono::Duration::days(len));
        let value = run(async {
            let db = setup_db().await;
            Metric::TotalWorkdays.evaluate(&*db, &period).await.expect("evaluate")
        });
        prop_assert_eq!(value, dec(len));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn bare_paths_resolve_only_to_catalogue_entries(path in "[a-z_]{0,40}") {
        match resolve_path(&path, NamespaceResolver::standard()) {
            Ok(metric) => prop_assert_eq!(metric.path(), path.as_str()),
            Err(e) => {
                prop_assert!(Metric::from_path(&path).is_none());
                prop_assert!(e.to_string().ends_with(&path));
            }
        }
    }

    #[test]
    fn dotted_paths_never_panic(path in "[a-z_.]{0,60}") {
        let _ = resolve_path(&path, NamespaceResolver::standard());
    }

    #[test]
    fn qualified_paths_round_trip(idx in 0usize..Metric::all().count()) {
        let metric = Metric::all().nth(idx).expect("in range");
        let path = NamespaceResolver::qualified(DEFAULT_NAMESPACE, metric);
        prop_assert_eq!(resolve_path(&path, NamespaceResolver::standard()).ok(), Some(metric));
    }

    #[test]
    fn derived_param_names_are_formula_safe(label in "\\PC{0,40}") {
        let param = param_name_from_label(&label);
        prop_assert!(param.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!param.starts_with('_') && !param.ends_with('_'));
        prop_assert!(!param.contains("__"));
    }
}
