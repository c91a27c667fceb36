//! Conversions from external infrastructure errors into domain errors.

use fauxapi_domain::FauxApiError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub FauxApiError);

impl From<InfraError> for FauxApiError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<FauxApiError> for InfraError {
    fn from(value: FauxApiError) -> Self {
        InfraError(value)
    }
}

trait IntoFauxApiError {
    fn into_fauxapi(self) -> FauxApiError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → FauxApiError */
/* -------------------------------------------------------------------------- */

impl IntoFauxApiError for HttpError {
    fn into_fauxapi(self) -> FauxApiError {
        if self.is_builder() {
            return FauxApiError::Config(format!("invalid HTTP client or request setup: {self}"));
        }

        if self.is_timeout() {
            return FauxApiError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return FauxApiError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                400..=499 => FauxApiError::InvalidInput(message),
                _ => FauxApiError::Network(message),
            };
        }

        FauxApiError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_fauxapi())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
