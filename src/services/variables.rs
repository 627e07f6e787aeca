use std::collections::HashSet;
use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::{
    entities::scorecard_variables::{self, Entity as VariableEntity},
    errors::ServiceError,
    variables::{validate_path, Metric, NamespaceResolver, PathResolver},
};

/// Fields accepted when creating or updating a scorecard variable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VariableInput {
    #[validate(length(min = 1, message = "Variable label is required"))]
    pub variable_label: String,
    /// Derived from the label when not given.
    #[serde(default)]
    pub param_name: Option<String>,
    #[validate(length(min = 1, message = "Variable path is required"))]
    pub path: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_is_custom")]
    pub is_custom: bool,
}

fn default_is_custom() -> bool {
    true
}

impl VariableInput {
    pub fn new(variable_label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            variable_label: variable_label.into(),
            param_name: None,
            path: path.into(),
            description: None,
            is_custom: true,
        }
    }

    pub fn with_param_name(mut self, param_name: impl Into<String>) -> Self {
        self.param_name = Some(param_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Formula-safe parameter name for a label: lowercase, with every run of
/// characters other than ASCII letters and digits collapsed to `_`.
pub fn param_name_from_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.trim().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// Stores scorecard variable configuration. Every save is gated on the
/// variable's path resolving to a catalogue metric.
#[derive(Clone)]
pub struct VariableService {
    db: Arc<DatabaseConnection>,
    resolver: Arc<dyn PathResolver>,
}

impl VariableService {
    /// Uses the standard namespace resolver for dotted paths.
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self::with_resolver(db, Arc::new(NamespaceResolver::standard().clone()))
    }

    pub fn with_resolver(db: Arc<DatabaseConnection>, resolver: Arc<dyn PathResolver>) -> Self {
        Self { db, resolver }
    }

    /// Validates and upserts a variable, keyed by its trimmed label.
    #[instrument(skip(self), fields(label = %input.variable_label, path = %input.path))]
    pub async fn save_variable(
        &self,
        input: VariableInput,
    ) -> Result<scorecard_variables::Model, ServiceError> {
        input.validate()?;

        let label = input.variable_label.trim().to_string();
        let path = input.path.trim().to_string();
        if label.is_empty() {
            return Err(ServiceError::ValidationError(
                "Variable label is required".to_string(),
            ));
        }

        validate_path(&path, self.resolver.as_ref())?;

        let param_name = match input.param_name.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => param_name_from_label(&label),
        };
        if param_name.is_empty() {
            return Err(ServiceError::ValidationError(format!(
                "Could not derive a parameter name from label '{}'",
                label
            )));
        }

        let db = &*self.db;
        let txn = db.begin().await.map_err(ServiceError::db_error)?;

        let clash = VariableEntity::find()
            .filter(scorecard_variables::Column::ParamName.eq(param_name.as_str()))
            .filter(scorecard_variables::Column::Name.ne(label.as_str()))
            .one(&txn)
            .await
            .map_err(ServiceError::db_error)?;
        if let Some(other) = clash {
            return Err(ServiceError::ValidationError(format!(
                "Parameter name '{}' is already used by variable '{}'",
                param_name, other.name
            )));
        }

        let existing = VariableEntity::find_by_id(label.clone())
            .one(&txn)
            .await
            .map_err(ServiceError::db_error)?;

        let saved = match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                active.param_name = Set(param_name);
                active.path = Set(path);
                active.description = Set(input.description);
                active.is_custom = Set(input.is_custom);
                active.update(&txn).await
            }
            None => {
                scorecard_variables::ActiveModel {
                    name: Set(label.clone()),
                    variable_label: Set(label.clone()),
                    param_name: Set(param_name),
                    path: Set(path),
                    description: Set(input.description),
                    is_custom: Set(input.is_custom),
                }
                .insert(&txn)
                .await
            }
        }
        .map_err(|e| {
            error!("Failed to save scorecard variable {}: {}", label, e);
            ServiceError::db_error(e)
        })?;

        txn.commit().await.map_err(ServiceError::db_error)?;

        info!(name = %saved.name, param_name = %saved.param_name, "Scorecard variable saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn get_variable(&self, name: &str) -> Result<scorecard_variables::Model, ServiceError> {
        VariableEntity::find_by_id(name.to_string())
            .one(&*self.db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Scorecard variable {} not found", name)))
    }

    /// All variables ordered by name.
    #[instrument(skip(self))]
    pub async fn list_variables(&self) -> Result<Vec<scorecard_variables::Model>, ServiceError> {
        VariableEntity::find()
            .order_by_asc(scorecard_variables::Column::Name)
            .all(&*self.db)
            .await
            .map_err(ServiceError::db_error)
    }

    /// Inserts one standard variable per catalogue metric, skipping any
    /// whose name or parameter name is already taken. Returns how many
    /// were inserted.
    #[instrument(skip(self))]
    pub async fn install_standard_variables(&self) -> Result<usize, ServiceError> {
        let db = &*self.db;
        let txn = db.begin().await.map_err(ServiceError::db_error)?;

        let existing = VariableEntity::find()
            .all(&txn)
            .await
            .map_err(ServiceError::db_error)?;
        let names: HashSet<String> = existing.iter().map(|v| v.name.clone()).collect();
        let params: HashSet<String> = existing.iter().map(|v| v.param_name.clone()).collect();

        let mut inserted = 0;
        for metric in Metric::all() {
            let label = metric.label();
            if names.contains(label) {
                continue;
            }
            if params.contains(metric.param_name()) {
                warn!(
                    param_name = metric.param_name(),
                    "Skipping standard variable; parameter name already in use"
                );
                continue;
            }

            scorecard_variables::ActiveModel {
                name: Set(label.to_string()),
                variable_label: Set(label.to_string()),
                param_name: Set(metric.param_name().to_string()),
                path: Set(metric.path().to_string()),
                description: Set(Some(metric.description().to_string())),
                is_custom: Set(false),
            }
            .insert(&txn)
            .await
            .map_err(ServiceError::db_error)?;
            inserted += 1;
        }

        txn.commit().await.map_err(ServiceError::db_error)?;

        info!("Installed {} standard scorecard variables", inserted);
        Ok(inserted)
    }
}
