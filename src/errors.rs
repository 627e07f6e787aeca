use sea_orm::error::DbErr;
use serde::Serialize;

#[derive(Debug, thiserror::Error, Serialize)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(
        #[from]
        #[serde(skip)]
        sea_orm::error::DbErr,
    ),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A scorecard variable path names neither a catalogue metric nor a
    /// resolvable dotted attribute.
    #[error("Could not find path for {0}")]
    UnresolvablePath(String),

    #[error("Supplier '{0}' does not exist in Supplier Score List. Please select a created supplier")]
    MissingSupplierScore(String),

    #[error("Supplier {0} not found")]
    SupplierNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    Other(
        #[from]
        #[serde(skip)]
        anyhow::Error,
    ),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

pub trait IntoDbErr {
    fn into_db_err(self) -> DbErr;
}

impl IntoDbErr for DbErr {
    fn into_db_err(self) -> DbErr {
        self
    }
}

impl IntoDbErr for String {
    fn into_db_err(self) -> DbErr {
        DbErr::Custom(self)
    }
}

impl IntoDbErr for &str {
    fn into_db_err(self) -> DbErr {
        DbErr::Custom(self.to_string())
    }
}

impl ServiceError {
    /// Generic constructor that normalizes any supported database error input.
    pub fn db_error<E: IntoDbErr>(error: E) -> Self {
        ServiceError::DatabaseError(error.into_db_err())
    }

    /// Whether the error should block a configuration save rather than
    /// signal an infrastructure fault.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::UnresolvablePath(_)
                | Self::MissingSupplierScore(_)
                | Self::SupplierNotFound(_)
                | Self::InvalidInput(_)
        )
    }

    /// Short machine-readable code, used by the CLI's JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatabaseError(_) => "database_error",
            Self::NotFound(_) => "not_found",
            Self::ValidationError(_) => "validation_error",
            Self::UnresolvablePath(_) => "variable_path_not_found",
            Self::MissingSupplierScore(_) => "supplier_score_not_found",
            Self::SupplierNotFound(_) => "supplier_not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::InternalError(_) | Self::Other(_) => "internal_error",
        }
    }
}

// Result extensions for easier error handling
pub trait ResultExt<T> {
    fn map_err_to_service(self) -> Result<T, ServiceError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<ServiceError>,
{
    fn map_err_to_service(self) -> Result<T, ServiceError> {
        self.map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolvable_path_message_names_the_path() {
        let err = ServiceError::UnresolvablePath("not_a_real_function".into());
        assert_eq!(err.to_string(), "Could not find path for not_a_real_function");
        assert_eq!(err.code(), "variable_path_not_found");
    }

    #[test]
    fn missing_score_message_names_the_supplier() {
        let err = ServiceError::MissingSupplierScore("S2".into());
        assert!(err.to_string().contains("'S2'"));
        assert!(err.is_validation());
    }

    #[test]
    fn database_errors_are_not_validation_failures() {
        let err = ServiceError::db_error("connection reset");
        assert!(!err.is_validation());
        assert_eq!(err.code(), "database_error");
        assert!(matches!(err, ServiceError::DatabaseError(DbErr::Custom(_))));
    }

    #[test]
    fn result_ext_converts_db_errors() {
        let res: Result<(), DbErr> = Err(DbErr::RecordNotFound("x".into()));
        let mapped = res.map_err_to_service();
        assert!(matches!(mapped, Err(ServiceError::DatabaseError(_))));
    }
}
