//! Identifies the account making a request from the header set by the identity provider's
//! gateway.

use crate::animaqu_page_error::AnimaquPageError;
use actix_web::dev::Payload;
use actix_web::web::Data;
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use animaqu_common::{AccountRole, AccountRoles};
use futures::future::{err, ok, Ready};
use tracing::{error, warn};
use tracing_actix_web::RootSpan;

pub const ACCOUNT_HEADER: &str = "X-Animaqu-Account";

/// The signed-in account making the request. Extracting it from a request without the account
/// header fails with 401.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub account_id: String,
}

/// A signed-in account that holds an [AccountRole]. Fails with 401 without the account header and
/// with 403 for accounts without a role.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminViewer {
    pub account_id: String,
    pub role: AccountRole,
}

fn get_viewer_account(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(ACCOUNT_HEADER)?.to_str().ok()?.trim();
    if value.is_empty() {
        return None;
    }
    Some(String::from(value))
}

fn record_account(req: &HttpRequest, account_id: &str) {
    if let Some(span) = req.extensions().get::<RootSpan>() {
        span.record("account_id", &account_id);
    }
}

impl FromRequest for Viewer {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match get_viewer_account(req) {
            Some(account_id) => {
                record_account(req, &account_id);
                ok(Viewer { account_id })
            }
            None => err(AnimaquPageError::unauthorized().into()),
        }
    }
}

impl FromRequest for AdminViewer {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let account_id = match get_viewer_account(req) {
            Some(a) => a,
            None => return err(AnimaquPageError::unauthorized().into()),
        };
        record_account(req, &account_id);

        let roles = match req.app_data::<Data<AccountRoles>>() {
            Some(r) => r,
            None => {
                error!("Account roles were missing while processing the AdminViewer extractor.");
                return err(AnimaquPageError::internal("Konfigurasi server tidak lengkap").into());
            }
        };

        match roles.role_of(&account_id) {
            Some(role) => ok(AdminViewer { account_id, role }),
            None => {
                warn!(
                    "Account \"{}\" without a role tried to use an admin route.",
                    account_id
                );
                err(AnimaquPageError::forbidden().into())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn roles() -> Data<AccountRoles> {
        Data::new(AccountRoles::parse("root=system_administrator,mod=administrator").unwrap())
    }

    #[::core::prelude::v1::test]
    fn get_viewer_account_returns_none_given_no_header() {
        // Arrange
        let req = test::TestRequest::default().to_http_request();

        // Act
        let actual = get_viewer_account(&req);

        // Assert
        assert!(actual.is_none());
    }

    #[::core::prelude::v1::test]
    fn get_viewer_account_returns_none_given_blank_header() {
        // Arrange
        let req = test::TestRequest::default()
            .insert_header((ACCOUNT_HEADER, "   "))
            .to_http_request();

        // Act
        let actual = get_viewer_account(&req);

        // Assert
        assert!(actual.is_none());
    }

    #[::core::prelude::v1::test]
    fn get_viewer_account_returns_trimmed_account() {
        // Arrange
        let req = test::TestRequest::default()
            .insert_header((ACCOUNT_HEADER, " reader-1 "))
            .to_http_request();

        // Act
        let actual = get_viewer_account(&req);

        // Assert
        assert_eq!(Some(String::from("reader-1")), actual);
    }

    #[actix_rt::test]
    async fn viewer_extractor_fails_with_401_given_no_header() {
        // Arrange
        let (req, mut payload) = test::TestRequest::default().to_http_parts();

        // Act
        let actual = Viewer::from_request(&req, &mut payload).await;

        // Assert
        let error = actual.unwrap_err();
        assert_eq!(
            StatusCode::UNAUTHORIZED,
            error.as_response_error().status_code()
        );
    }

    #[actix_rt::test]
    async fn admin_viewer_extractor_returns_role_given_privileged_account() {
        // Arrange
        let (req, mut payload) = test::TestRequest::default()
            .insert_header((ACCOUNT_HEADER, "mod"))
            .app_data(roles())
            .to_http_parts();

        // Act
        let actual = AdminViewer::from_request(&req, &mut payload).await.unwrap();

        // Assert
        assert_eq!("mod", actual.account_id);
        assert_eq!(AccountRole::Administrator, actual.role);
    }

    #[actix_rt::test]
    async fn admin_viewer_extractor_fails_with_403_given_account_without_role() {
        // Arrange
        let (req, mut payload) = test::TestRequest::default()
            .insert_header((ACCOUNT_HEADER, "reader-1"))
            .app_data(roles())
            .to_http_parts();

        // Act
        let actual = AdminViewer::from_request(&req, &mut payload).await;

        // Assert
        let error = actual.unwrap_err();
        assert_eq!(
            StatusCode::FORBIDDEN,
            error.as_response_error().status_code()
        );
    }
}
