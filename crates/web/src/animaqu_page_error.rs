//! The error page returned to the view layer whenever a route can't produce its payload.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

const ERROR_TITLE: &str = "Terjadi Kesalahan - Animaqu";

#[derive(Debug, Serialize, PartialEq)]
pub struct ErrorDetail {
    pub status: u16,
    pub message: String,
}

/// Represents an error page to send back to the view layer, rendered as
/// `{ "title": .., "error": { "status": .., "message": .. } }`.
#[derive(Debug, Serialize, PartialEq)]
pub struct AnimaquPageError {
    pub title: String,
    pub error: ErrorDetail,
}

impl ResponseError for AnimaquPageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

impl AnimaquPageError {
    /// Create a new instance of [AnimaquPageError] with a given [StatusCode].
    /// Before creating a new [AnimaquPageError], check for dedicated methods
    /// to return the appropriate status code.
    pub fn new(title: &str, message: &str, status: StatusCode) -> Self {
        AnimaquPageError {
            title: String::from(title),
            error: ErrorDetail {
                status: status.as_u16(),
                message: String::from(message),
            },
        }
    }

    pub fn not_found(title: &str, message: &str) -> Self {
        Self::new(title, message, StatusCode::NOT_FOUND)
    }

    pub fn internal(message: &str) -> Self {
        Self::new(ERROR_TITLE, message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new(ERROR_TITLE, message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized() -> Self {
        Self::new(
            "Akses Ditolak - Animaqu",
            "Silakan masuk terlebih dahulu",
            StatusCode::UNAUTHORIZED,
        )
    }

    pub fn forbidden() -> Self {
        Self::new(
            "Akses Ditolak - Animaqu",
            "Anda tidak memiliki akses ke halaman ini",
            StatusCode::FORBIDDEN,
        )
    }
}

impl Display for AnimaquPageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            serde_json::to_string(self)
                .unwrap_or_else(|_| String::from("{ \"title\": \"Fatal Error\" }"))
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_code_matches_error_status() {
        assert_eq!(
            StatusCode::NOT_FOUND,
            AnimaquPageError::not_found("t", "m").status_code()
        );
        assert_eq!(
            StatusCode::FORBIDDEN,
            AnimaquPageError::forbidden().status_code()
        );
    }

    #[actix_rt::test]
    async fn error_response_renders_error_page_json() {
        // Arrange
        let error = AnimaquPageError::internal("Tidak dapat memuat episode");

        // Act
        let response = error.error_response();
        let status = response.status();
        let body = to_bytes(response.into_body()).await.unwrap();
        let actual: serde_json::Value = serde_json::from_slice(&body).unwrap();

        // Assert
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
        assert_eq!("Terjadi Kesalahan - Animaqu", actual["title"]);
        assert_eq!(500, actual["error"]["status"]);
        assert_eq!("Tidak dapat memuat episode", actual["error"]["message"]);
    }
}
