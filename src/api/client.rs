//! API client for communicating with the gatepass account service.
//!
//! This module provides the `ApiClient` struct for exchanging credentials
//! for a bearer token, fetching the current user's profile, and creating
//! accounts. Every request shares one timeout and transport-retry policy
//! taken from [`ApiConfig`].

use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::User;

use super::ApiError;

/// Login endpoint. Exchanges credentials for a bearer token.
const LOGIN_PATH: &str = "/api/auth/login";

/// Current-user endpoint. Requires a bearer token.
const CURRENT_USER_PATH: &str = "/api/auth/me";

/// Registration endpoint.
const REGISTER_PATH: &str = "/api/users/";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    username: &'a str,
    full_name: &'a str,
    password: &'a str,
}

/// API client for the account service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config,
            token: None,
        })
    }

    /// Replace the stored bearer token; `None` clears it.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Whether a bearer token is currently stored.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Exchange credentials for a bearer token.
    ///
    /// The stored token is never attached here - this is the
    /// pre-authentication call.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let url = format!("{}{}", self.config.base_url, LOGIN_PATH);
        let body = LoginRequest { email, password };

        let response = self.post_with_retry(&url, &body, false).await?;
        let response = Self::check(response, "login failed").await?;

        let token: TokenResponse = response.json().await?;
        debug!("token obtained");
        Ok(token.access_token)
    }

    /// Fetch the profile the stored token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let url = format!("{}{}", self.config.base_url, CURRENT_USER_PATH);

        let response = self.get_with_retry(&url).await?;
        let response = Self::check(response, "failed to fetch current user").await?;

        Ok(response.json().await?)
    }

    /// Create a new account and return its profile.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        full_name: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let url = format!("{}{}", self.config.base_url, REGISTER_PATH);
        let body = RegisterRequest {
            email,
            username,
            full_name,
            password,
        };

        let response = self.post_with_retry(&url, &body, true).await?;
        let response = Self::check(response, "registration failed").await?;

        Ok(response.json().await?)
    }

    /// Send a GET request, retrying transport failures.
    ///
    /// Only failures to obtain a response at all (timeout, connection
    /// error) consume the retry budget; any response the server manages to
    /// send is returned as-is for the caller to inspect.
    async fn get_with_retry(&self, url: &str) -> Result<reqwest::Response, ApiError> {
        let mut attempt: u32 = 0;

        loop {
            let mut request = self
                .client
                .get(url)
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(ref token) = self.token {
                request = request.bearer_auth(token);
            }

            match request.send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if attempt >= self.config.retry_attempts {
                        return Err(err.into());
                    }
                    attempt += 1;
                    warn!(url, attempt, max = self.config.retry_attempts, error = %err, "request failed, retrying");
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }
    }

    /// Send a POST request with a JSON body, retrying transport failures.
    ///
    /// `with_token` controls whether the stored bearer token is attached;
    /// the login call sends without it.
    async fn post_with_retry<B: Serialize>(
        &self,
        url: &str,
        body: &B,
        with_token: bool,
    ) -> Result<reqwest::Response, ApiError> {
        let mut attempt: u32 = 0;

        loop {
            let mut request = self.client.post(url).json(body);
            if with_token {
                if let Some(ref token) = self.token {
                    request = request.bearer_auth(token);
                }
            }

            match request.send().await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if attempt >= self.config.retry_attempts {
                        return Err(err.into());
                    }
                    attempt += 1;
                    warn!(url, attempt, max = self.config.retry_attempts, error = %err, "request failed, retrying");
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }
    }

    /// Check if response is successful, returning a rejection built from
    /// the body if not.
    async fn check(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body, fallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let json = r#"{"access_token": "eyJhbGciOi.payload.sig", "token_type": "bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json)
            .expect("Failed to parse token test JSON");
        assert_eq!(token.access_token, "eyJhbGciOi.payload.sig");
    }

    #[test]
    fn test_login_request_shape() {
        let body = LoginRequest {
            email: "a@b.com",
            password: "pw",
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"email": "a@b.com", "password": "pw"})
        );
    }

    #[test]
    fn test_register_request_shape() {
        let body = RegisterRequest {
            email: "n@b.com",
            username: "newbie",
            full_name: "New Bee",
            password: "pw12345678",
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "email": "n@b.com",
                "username": "newbie",
                "full_name": "New Bee",
                "password": "pw12345678"
            })
        );
    }
}
