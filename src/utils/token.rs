use crate::config::JwtConfig;
use crate::types::user::Role;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime. The original service never expired tokens; bounding
/// them keeps the verifier's expiry check meaningful.
const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The account's email.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtConfig {
    fn secret_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_secret,
            Role::Editor => &self.editor_secret,
            Role::ReadOnly => &self.readonly_secret,
        }
    }

    /// Secrets an incoming token may verify under, highest tier first,
    /// cut off at the minimum acceptable role.
    fn secrets_down_to(&self, min_role: Role) -> Vec<&str> {
        let ordered = [Role::Admin, Role::Editor, Role::ReadOnly];
        ordered
            .iter()
            .take_while(|r| **r != min_role)
            .chain(std::iter::once(&min_role))
            .map(|r| self.secret_for(*r))
            .collect()
    }
}

/// Sign a token under the secret belonging to `role`. The role is not a
/// claim: which secret the token verifies under IS the role proof.
pub fn issue_token(
    email: &str,
    role: Role,
    jwt: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt.secret_for(role).as_ref()),
    )
}

/// Tiered verification: try each acceptable secret from admin downward
/// and accept on the first that validates signature and expiry. A token
/// signed with the wrong secret and an expired token reject identically.
pub fn verify_tier(
    token: &str,
    min_role: Role,
    jwt: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);

    let mut last_error = None;
    for secret in jwt.secrets_down_to(min_role) {
        match decode::<Claims>(token, &DecodingKey::from_secret(secret.as_ref()), &validation) {
            Ok(data) => return Ok(data.claims),
            Err(e) => last_error = Some(e),
        }
    }

    Err(last_error.unwrap_or_else(|| jsonwebtoken::errors::ErrorKind::InvalidToken.into()))
}
