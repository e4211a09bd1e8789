use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::financing::SelectionError;
use crate::leads::LeadGatewayError;
use crate::savings::SavingsError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Selection(SelectionError),
    Savings(SavingsError),
    Csv(csv::Error),
    Leads(LeadGatewayError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Selection(err) => write!(f, "invalid selection: {}", err),
            AppError::Savings(err) => write!(f, "savings error: {}", err),
            AppError::Csv(err) => write!(f, "csv error: {}", err),
            AppError::Leads(err) => write!(f, "lead gateway error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Selection(err) => Some(err),
            AppError::Savings(err) => Some(err),
            AppError::Csv(err) => Some(err),
            AppError::Leads(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Selection(_) | AppError::Savings(SavingsError::InvalidDistance(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Savings(_) => StatusCode::NOT_FOUND,
            AppError::Leads(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Catalog(_)
            | AppError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<SelectionError> for AppError {
    fn from(value: SelectionError) -> Self {
        Self::Selection(value)
    }
}

impl From<SavingsError> for AppError {
    fn from(value: SavingsError) -> Self {
        Self::Savings(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<LeadGatewayError> for AppError {
    fn from(value: LeadGatewayError) -> Self {
        Self::Leads(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_input_errors_to_client_statuses() {
        let invalid = AppError::from(SavingsError::InvalidDistance(-1.0));
        assert_eq!(invalid.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let unknown = AppError::from(SavingsError::UnknownFuel("solar".to_string()));
        assert_eq!(unknown.into_response().status(), StatusCode::NOT_FOUND);

        let selection = AppError::from(SelectionError::StaleSelection("gone".to_string()));
        assert_eq!(selection.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn server_faults_are_internal() {
        let err = AppError::from(CatalogError::MissingDefaultModel("edpower".to_string()));
        assert!(err.to_string().starts_with("catalog error:"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
