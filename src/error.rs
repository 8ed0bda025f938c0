use reqwest::StatusCode;
use thiserror::Error;

/// Result type for IONOS DNS API operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned while talking to the IONOS Cloud DNS API.
#[derive(Debug, Error)]
pub enum Error {
    /// The account has no zone whose name is exactly the requested domain.
    #[error("Domain not known")]
    ZoneNotFound { domain: String },

    /// The API answered with a status outside of `200 OK` and `202 Accepted`.
    #[error("Received non OK status from IONOS API {}", .status.as_u16())]
    ApiStatus { status: StatusCode },

    /// The API answered with a success status but the body could not be parsed.
    #[error("API response with non JSON: {body}")]
    ApiResponseFormat { body: String },

    /// The credentials cannot be sent as an `Authorization` header.
    #[error("credentials cannot be used as an authorization header")]
    InvalidCredentials(#[from] reqwest::header::InvalidHeaderValue),

    /// The request never produced a response.
    #[error("request to IONOS API failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// Returns true if the domain has no zone in the account.
    pub fn is_zone_not_found(&self) -> bool {
        matches!(self, Error::ZoneNotFound { .. })
    }

    /// HTTP status of a rejected request, if that is what this error is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::ApiStatus { status } => Some(*status),
            Error::Transport(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ZoneNotFound {
            domain: "test_domain.de".to_owned(),
        };
        assert_eq!(err.to_string(), "Domain not known");
        assert!(err.is_zone_not_found());

        let err = Error::ApiStatus {
            status: StatusCode::UNAUTHORIZED,
        };
        assert_eq!(
            err.to_string(),
            "Received non OK status from IONOS API 401"
        );
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

        let err = Error::ApiResponseFormat {
            body: "<html>".to_owned(),
        };
        assert_eq!(err.to_string(), "API response with non JSON: <html>");
        assert_eq!(err.status(), None);
    }
}
