use std::time::Duration;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};

use crate::{config::JwtConfig, error::ApiError, state::AppState};

/// Identity payload carried by a session token. The serialized field names
/// are part of the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

/// Signing and verification keys derived from the injected secret. One
/// secret for the process lifetime, no rotation.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let JwtConfig {
            secret,
            ttl_minutes,
        } = state.config.jwt.clone();
        Self::new(&secret, Duration::from_secs((ttl_minutes as u64) * 60))
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn sign(&self, user_id: i32, username: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            user_id,
            username: username.to_string(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id, username, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        debug!(user_id = data.claims.user_id, "jwt verified");
        Ok(data.claims)
    }
}

/// Extractor guarding protected routes: pulls the bearer token out of the
/// Authorization header, verifies it and hands the decoded claims to the
/// handler. Missing header rejects with 401, failed verification with 403.
pub struct AuthUser(pub Claims);

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(ApiError::NoToken)?;

        match keys.verify(token) {
            Ok(claims) => Ok(AuthUser(claims)),
            Err(_) => {
                warn!("invalid or expired token");
                Err(ApiError::InvalidToken)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_keys(secret: &str) -> JwtKeys {
        JwtKeys::new(secret, Duration::from_secs(3600))
    }

    #[test]
    fn sign_and_verify_roundtrip() {
        let keys = make_keys("dev-secret");
        let token = keys.sign(7, "x").expect("sign");
        let claims = keys.verify(&token).expect("verify token");
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "x");
        assert!(claims.exp >= claims.iat + 3600);
    }

    #[test]
    fn claims_serialize_with_wire_names() {
        let claims = Claims {
            user_id: 7,
            username: "x".into(),
            iat: 0,
            exp: 1,
        };
        let json = serde_json::to_value(&claims).expect("serialize");
        assert_eq!(json["userId"], 7);
        assert_eq!(json["username"], "x");
    }

    #[test]
    fn verify_rejects_tampered_signature() {
        let keys = make_keys("dev-secret");
        let mut token = keys.sign(1, "alice").expect("sign");
        // flip the last signature character
        let last = token.pop().expect("nonempty token");
        token.push(if last == 'A' { 'B' } else { 'A' });
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = make_keys("secret-one").sign(1, "alice").expect("sign");
        assert!(make_keys("secret-two").verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let keys = make_keys("dev-secret");
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let claims = Claims {
            user_id: 1,
            username: "alice".into(),
            iat: (now - 7200) as usize,
            exp: (now - 3600) as usize,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).expect("encode");
        assert!(keys.verify(&token).is_err());
    }
}
