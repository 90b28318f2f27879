use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use payment_recon_engine::{traits::GatewayError, ReconciliationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Invalid request. {0}")]
    ValidationError(String),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
    #[error("Payment gateway error. {0}")]
    GatewayError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    PersistenceError(String),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            // Every aborting failure, including input validation, surfaces as a 500
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ValidationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::GatewayError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PersistenceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "success": false, "error": self.to_string() }).to_string())
    }
}

impl From<ReconciliationError> for ServerError {
    fn from(e: ReconciliationError) -> Self {
        match e {
            ReconciliationError::GatewayError(GatewayError::NotConfigured) => {
                Self::ConfigurationError(GatewayError::NotConfigured.to_string())
            },
            ReconciliationError::GatewayError(e) => Self::GatewayError(e.to_string()),
            ReconciliationError::StoreError(e) => Self::PersistenceError(e.to_string()),
        }
    }
}
