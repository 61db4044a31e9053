//! The request plumbing shared by both content API clients.

use crate::ContentApiError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

#[derive(Clone)]
pub(crate) struct ContentHttp {
    client: reqwest::Client,
    base_url: String,
}

impl ContentHttp {
    pub fn new(client: reqwest::Client, base_url: &Url) -> Self {
        ContentHttp {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET some path and decode the body. Every non-success status is an error.
    pub async fn get<T>(&self, path: &str, operation: &'static str) -> Result<T, ContentApiError>
    where
        T: DeserializeOwned,
    {
        match self.get_value(path, operation).await? {
            Some(value) => decode(value, operation),
            None => Err(ContentApiError::Status {
                operation,
                status: StatusCode::NOT_FOUND.as_u16(),
            }),
        }
    }

    /// GET some path, treating a 404 (or an enveloped `null`) as [None]. The payload may be wrapped
    /// in a `{ "data": ... }` envelope or sent bare.
    pub async fn get_optional<T>(
        &self,
        path: &str,
        operation: &'static str,
    ) -> Result<Option<T>, ContentApiError>
    where
        T: DeserializeOwned,
    {
        let value = match self.get_value(path, operation).await? {
            Some(v) => v,
            None => return Ok(None),
        };
        match unwrap_envelope(value) {
            Some(inner) => Ok(Some(decode(inner, operation)?)),
            None => Ok(None),
        }
    }

    async fn get_value(
        &self,
        path: &str,
        operation: &'static str,
    ) -> Result<Option<Value>, ContentApiError> {
        let url = self.url(path);
        debug!(%url, operation, "Requesting content API.");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ContentApiError::Transport { operation, source })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, operation, "Content API answered 404.");
            return Ok(None);
        }
        if !status.is_success() {
            warn!(%url, operation, status = status.as_u16(), "Content API answered with an error status.");
            return Err(ContentApiError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ContentApiError::Transport { operation, source })?;
        let value = serde_json::from_slice::<Value>(&bytes)
            .map_err(|source| ContentApiError::Decode { operation, source })?;
        Ok(Some(value))
    }
}

fn decode<T: DeserializeOwned>(value: Value, operation: &'static str) -> Result<T, ContentApiError> {
    serde_json::from_value(value).map_err(|source| ContentApiError::Decode { operation, source })
}

/// Strip a `{ "data": ... }` envelope if one is present. An enveloped `null` means "nothing here".
pub(crate) fn unwrap_envelope(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(mut map) if map.contains_key("data") => match map.remove("data") {
            Some(Value::Null) | None => None,
            Some(inner) => Some(inner),
        },
        other => Some(other),
    }
}

/// Percent-encode a caller supplied value so it stays a single path segment.
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwrap_envelope_returns_inner_data() {
        // Arrange
        let input = json!({ "status": "Ok", "data": { "title": "Frieren" } });

        // Act
        let actual = unwrap_envelope(input);

        // Assert
        assert_eq!(Some(json!({ "title": "Frieren" })), actual);
    }

    #[test]
    fn unwrap_envelope_returns_none_given_null_data() {
        // Arrange
        let input = json!({ "status": "Ok", "data": null });

        // Act
        let actual = unwrap_envelope(input);

        // Assert
        assert!(actual.is_none());
    }

    #[test]
    fn unwrap_envelope_returns_bare_payload_unchanged() {
        // Arrange
        let input = json!({ "title": "Frieren", "episodes": [] });

        // Act
        let actual = unwrap_envelope(input.clone());

        // Assert
        assert_eq!(Some(input), actual);
    }

    #[test]
    fn url_joins_base_and_path_without_doubling_slashes() {
        // Arrange
        let base = Url::parse("http://localhost:3000/v1/").unwrap();
        let http = ContentHttp::new(reqwest::Client::new(), &base);

        // Act
        let actual = http.url("/anime/one-piece");

        // Assert
        assert_eq!("http://localhost:3000/v1/anime/one-piece", actual);
    }

    #[test]
    fn segment_encodes_spaces_and_slashes() {
        // Act
        let actual = segment("solo leveling/2");

        // Assert
        assert_eq!("solo%20leveling%2F2", actual);
    }
}
