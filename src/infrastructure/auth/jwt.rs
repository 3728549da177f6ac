// HS256 bearer tokens: issuance and verification.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Jwt;
use crate::domain::value_objects::ids::TokenId;
use crate::domain::value_objects::timestamps::Timestamp;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Display name of the caller.
    pub name: String,
    pub sub: String,
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub token_id: TokenId,
    pub expires_at: Timestamp,
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("invalid token: {0}")]
    Invalid(String),
}

/// Signs and verifies bearer tokens with a shared symmetric key.
pub struct JwtService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    expiry_in_minutes: i64,
}

impl JwtService {
    pub fn new(settings: &Jwt) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[settings.issuer.as_str()]);
        validation.set_audience(&[settings.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.validate_nbf = true;

        Self {
            encoding: EncodingKey::from_secret(settings.key.as_bytes()),
            decoding: DecodingKey::from_secret(settings.key.as_bytes()),
            validation,
            issuer: settings.issuer.clone(),
            audience: settings.audience.clone(),
            expiry_in_minutes: settings.expiry_in_minutes,
        }
    }

    /// Issues a token for `username` valid from now.
    pub fn issue(&self, username: &str) -> Result<IssuedToken, TokenError> {
        self.issue_at(username, Timestamp::now_utc())
    }

    pub fn issue_at(&self, username: &str, now: Timestamp) -> Result<IssuedToken, TokenError> {
        let token_id = TokenId::new();
        let expires_at = now
            .plus_minutes(self.expiry_in_minutes)
            .ok_or_else(|| TokenError::Signing("token expiry out of range".to_string()))?;
        let claims = Claims {
            name: username.to_string(),
            sub: username.to_string(),
            jti: token_id.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.unix_seconds(),
            nbf: now.unix_seconds(),
            exp: expires_at.unix_seconds(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))?;
        Ok(IssuedToken {
            token,
            token_id,
            expires_at,
        })
    }

    /// Checks signature, expiry, issuer and audience and returns the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}
