use std::sync::Arc;

use chrono::{DateTime, Utc};
use metrics::counter;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    entities::scorecard_variables,
    errors::ServiceError,
    period::ScorecardPeriod,
    variables::{resolve_path, Metric, NamespaceResolver, PathResolver},
};

/// A variable's value for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableValue {
    pub param_name: String,
    pub path: String,
    pub value: Decimal,
}

impl VariableValue {
    pub fn for_metric(metric: Metric, value: Decimal) -> Self {
        Self {
            param_name: metric.param_name().to_string(),
            path: metric.path().to_string(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardReport {
    pub period: ScorecardPeriod,
    pub values: Vec<VariableValue>,
    pub generated_at: DateTime<Utc>,
}

impl ScorecardReport {
    /// Value bound to `param_name`, if the report has one.
    pub fn get(&self, param_name: &str) -> Option<Decimal> {
        self.values
            .iter()
            .find(|v| v.param_name == param_name)
            .map(|v| v.value)
    }
}

/// Evaluates scorecard variables for a supplier period.
#[derive(Clone)]
pub struct ScorecardService {
    db: Arc<DatabaseConnection>,
    resolver: Arc<dyn PathResolver>,
}

impl ScorecardService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self::with_resolver(db, Arc::new(NamespaceResolver::standard().clone()))
    }

    pub fn with_resolver(db: Arc<DatabaseConnection>, resolver: Arc<dyn PathResolver>) -> Self {
        Self { db, resolver }
    }

    #[instrument(skip(self))]
    pub async fn evaluate_metric(
        &self,
        metric: Metric,
        period: &ScorecardPeriod,
    ) -> Result<Decimal, ServiceError> {
        metric.evaluate(&*self.db, period).await
    }

    /// Evaluates `metrics` in order; the first failure aborts the call.
    #[instrument(skip(self, metrics))]
    pub async fn evaluate_metrics(
        &self,
        period: &ScorecardPeriod,
        metrics: &[Metric],
    ) -> Result<ScorecardReport, ServiceError> {
        let mut values = Vec::with_capacity(metrics.len());
        for &metric in metrics {
            let value = metric.evaluate(&*self.db, period).await?;
            values.push(VariableValue::for_metric(metric, value));
        }
        Ok(self.report(period, values))
    }

    /// Evaluates configured variables in input order. Each value is bound to
    /// the variable's own parameter name. The first failure aborts the call.
    #[instrument(skip(self, variables), fields(count = variables.len()))]
    pub async fn evaluate_variables(
        &self,
        period: &ScorecardPeriod,
        variables: &[scorecard_variables::Model],
    ) -> Result<Vec<VariableValue>, ServiceError> {
        let mut values = Vec::with_capacity(variables.len());
        for variable in variables {
            let metric = resolve_path(&variable.path, self.resolver.as_ref())?;
            let value = metric.evaluate(&*self.db, period).await?;
            values.push(VariableValue {
                param_name: variable.param_name.clone(),
                path: variable.path.clone(),
                value,
            });
        }
        Ok(values)
    }

    /// Evaluates every stored variable, ordered by name.
    #[instrument(skip(self))]
    pub async fn evaluate_configured(
        &self,
        period: &ScorecardPeriod,
    ) -> Result<ScorecardReport, ServiceError> {
        let variables = scorecard_variables::Entity::find()
            .order_by_asc(scorecard_variables::Column::Name)
            .all(&*self.db)
            .await
            .map_err(ServiceError::db_error)?;

        let values = self.evaluate_variables(period, &variables).await?;
        Ok(self.report(period, values))
    }

    /// Evaluates the whole catalogue.
    #[instrument(skip(self))]
    pub async fn evaluate_catalogue(
        &self,
        period: &ScorecardPeriod,
    ) -> Result<ScorecardReport, ServiceError> {
        let metrics: Vec<Metric> = Metric::all().collect();
        self.evaluate_metrics(period, &metrics).await
    }

    fn report(&self, period: &ScorecardPeriod, values: Vec<VariableValue>) -> ScorecardReport {
        counter!("scorecard.report.generated", 1);
        if period.is_inverted() {
            warn!(
                supplier = %period.supplier,
                "Scorecard period ends before it starts; day counts are negative"
            );
        }
        info!(
            supplier = %period.supplier,
            values = values.len(),
            "Scorecard report generated"
        );
        ScorecardReport {
            period: period.clone(),
            values,
            generated_at: Utc::now(),
        }
    }
}
