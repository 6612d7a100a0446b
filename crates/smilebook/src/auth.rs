//! Session token claims and the access decision for protected routes.
//!
//! The token is an opaque JWT-shaped string issued by the remote API. The
//! client decodes the payload segment to read the claims but never verifies
//! the signature; that is the issuer's job, the token only reaches us over a
//! channel the API controls.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Claims carried in the token payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Claims {
    #[serde(default)]
    pub email: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
    #[serde(default)]
    pub iat: u64,
}

/// Decode the claims from a token without verifying its signature.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Outcome of checking the stored session before rendering protected content.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionDecision {
    /// Token present, decodable and not expired: render.
    Active(Claims),
    /// No token stored: redirect to login, leave storage untouched.
    Missing,
    /// Token present but undecodable: clear it and redirect to login.
    Invalid,
    /// Token decoded but `exp` is in the past: clear it and redirect to login.
    Expired(Claims),
}

impl SessionDecision {
    /// Whether the stored token must be cleared as a side effect.
    pub fn clears_token(&self) -> bool {
        matches!(self, SessionDecision::Invalid | SessionDecision::Expired(_))
    }
}

/// Decide whether a protected view may render.
///
/// `exp` is compared strictly against `now_secs`; a token is accepted until
/// the exact boundary and no clock skew is compensated. There is no refresh
/// mechanism, expiry always forces re-authentication.
pub fn evaluate(token: Option<&str>, now_secs: u64) -> SessionDecision {
    let Some(token) = token else {
        return SessionDecision::Missing;
    };
    match decode_claims(token) {
        Ok(claims) if claims.exp < now_secs => SessionDecision::Expired(claims),
        Ok(claims) => SessionDecision::Active(claims),
        Err(_) => SessionDecision::Invalid,
    }
}
