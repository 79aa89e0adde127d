use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use reqwest::Client;
use ring::rand::SystemRandom;
use ring::signature::{RsaKeyPair, RSA_PKCS1_SHA256};
use serde::{Deserialize, Serialize};
use tracing::debug;
use yatra_core::ResponderError;

const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Clone)]
pub struct ServiceAccount {
    pub client_email: Option<String>,
    pub private_key_pem: String,
    pub token_uri: String,
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    refresh_at: DateTime<Utc>,
}

/// Mints and caches OAuth access tokens for a Google service account.
/// Concurrent callers that find the cache stale share a single exchange.
pub struct TokenProvider {
    account: ServiceAccount,
    http: Client,
    cached: Mutex<Option<CachedToken>>,
    refresh: tokio::sync::Mutex<()>,
}

impl TokenProvider {
    pub fn new(account: ServiceAccount, http: Client) -> Self {
        Self {
            account,
            http,
            cached: Mutex::new(None),
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    pub async fn access_token(&self) -> Result<String, ResponderError> {
        if let Some(token) = self.fresh_token(Utc::now()) {
            return Ok(token);
        }

        let _refresh = self.refresh.lock().await;
        let now = Utc::now();
        if let Some(token) = self.fresh_token(now) {
            return Ok(token);
        }

        let assertion = sign_assertion(&self.account, now)?;
        let response = self
            .http
            .post(&self.account.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|err| unavailable(format!("token request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!(
                "token endpoint returned status {}",
                status.as_u16()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| unavailable(format!("token response parse failed: {err}")))?;

        let lifetime = token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS);
        let refresh_at = now + Duration::seconds((lifetime - REFRESH_MARGIN_SECS).max(0));
        debug!(expires_in = lifetime, "minted dialogflow access token");

        *self.cached.lock() = Some(CachedToken {
            value: token.access_token.clone(),
            refresh_at,
        });
        Ok(token.access_token)
    }

    fn fresh_token(&self, now: DateTime<Utc>) -> Option<String> {
        self.cached
            .lock()
            .as_ref()
            .filter(|token| token.refresh_at > now)
            .map(|token| token.value.clone())
    }
}

/// Builds the signed RS256 JWT exchanged for an access token.
pub fn sign_assertion(account: &ServiceAccount, now: DateTime<Utc>) -> Result<String, ResponderError> {
    let client_email = account
        .client_email
        .as_deref()
        .ok_or_else(|| unavailable("DIALOGFLOW_CLIENT_EMAIL not configured".to_string()))?;

    let der = pem_to_der(&account.private_key_pem)?;
    let key_pair = RsaKeyPair::from_pkcs8(&der)
        .map_err(|err| unavailable(format!("private key rejected: {err}")))?;

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let claims = AssertionClaims {
        iss: client_email,
        scope: CLOUD_PLATFORM_SCOPE,
        aud: &account.token_uri,
        iat: now.timestamp(),
        exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
    };
    let claims = serde_json::to_vec(&claims)
        .map_err(|err| unavailable(format!("claims encoding failed: {err}")))?;
    let signing_input = format!("{}.{}", header, URL_SAFE_NO_PAD.encode(claims));

    let mut signature = vec![0_u8; key_pair.public().modulus_len()];
    key_pair
        .sign(
            &RSA_PKCS1_SHA256,
            &SystemRandom::new(),
            signing_input.as_bytes(),
            &mut signature,
        )
        .map_err(|_| unavailable("assertion signing failed".to_string()))?;

    Ok(format!("{}.{}", signing_input, URL_SAFE_NO_PAD.encode(signature)))
}

/// Accepts keys whose newlines arrived as literal `\n` escapes.
fn pem_to_der(pem: &str) -> Result<Vec<u8>, ResponderError> {
    let pem = pem.replace("\\n", "\n");
    let body = pem
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("-----"))
        .collect::<String>();

    if body.is_empty() {
        return Err(unavailable("private key is empty".to_string()));
    }

    STANDARD
        .decode(body)
        .map_err(|err| unavailable(format!("private key is not valid PEM: {err}")))
}

fn unavailable(message: String) -> ResponderError {
    ResponderError::DelegateUnavailable(message)
}
