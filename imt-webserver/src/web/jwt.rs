use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{Duration, OffsetDateTime};

/// The two token purposes issued by this service. A token is only
/// accepted by operations expecting its exact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The account email
    sub: String,
    /// Token purpose
    #[serde(rename = "type")]
    kind: TokenKind,
    /// Issued at as Unix timestamp
    iat: i64,
    /// Expiry time as Unix timestamp
    exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("The token has expired")]
    Expired,
    #[error("Unexpected token kind")]
    WrongKind,
    #[error("The token is invalid")]
    Invalid,
}

/// Issues and validates the signed, time-limited tokens of the API.
///
/// There is no revocation: a token stays trusted until its declared
/// expiry.
pub struct JwtState {
    jwt_service: jwt_service::JwtService,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtState {
    pub fn new(secret: Option<&str>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            jwt_service: jwt_service::JwtService::new(secret),
            access_ttl,
            refresh_ttl,
        }
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    pub fn generate_token(&self, email: &str, kind: TokenKind) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let claims = Claims {
            sub: email.to_string(),
            kind,
            iat: now.unix_timestamp(),
            exp: (now + self.ttl(kind)).unix_timestamp(),
        };
        let token = self.jwt_service.encode(&claims)?;
        Ok(token)
    }

    pub fn validate_token_and_get_email(
        &self,
        token: &str,
        expected_kind: TokenKind,
    ) -> Result<String, TokenError> {
        let claims = self.jwt_service.decode(token)?;
        if claims.kind != expected_kind {
            return Err(TokenError::WrongKind);
        }
        Ok(claims.sub)
    }
}

mod jwt_service {
    use jsonwebtoken::{
        decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
    };

    use super::{Claims, TokenError};

    /// 256 bits of randomness as a base64 encoded string.
    fn generate_secret() -> String {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.encode(rand::random::<[u8; 32]>())
    }

    pub struct JwtService {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
        validation: Validation,
    }

    impl JwtService {
        pub fn new(secret: Option<&str>) -> Self {
            let secret = secret.map(ToOwned::to_owned).unwrap_or_else(|| {
                log::warn!(
                    "No token secret configured, generating a random one; \
                     issued tokens will not survive a restart"
                );
                generate_secret()
            });
            let mut validation = Validation::default();
            // Expiry checks must be exact.
            validation.leeway = 0;
            Self {
                encoding_key: EncodingKey::from_secret(secret.as_ref()),
                decoding_key: DecodingKey::from_secret(secret.as_ref()),
                validation,
            }
        }

        pub fn encode(&self, claims: &Claims) -> jsonwebtoken::errors::Result<String> {
            encode(&Header::default(), claims, &self.encoding_key)
        }

        pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
            decode::<Claims>(token, &self.decoding_key, &self.validation)
                .map(|data| data.claims)
                .map_err(|err| match err.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_state() -> JwtState {
        JwtState::new(
            Some("test-secret"),
            Duration::minutes(15),
            Duration::days(7),
        )
    }

    #[test]
    fn validation_works() {
        let jwt_state = jwt_state();
        let token = jwt_state
            .generate_token("foo@bar.org", TokenKind::Access)
            .unwrap();
        let email = jwt_state
            .validate_token_and_get_email(&token, TokenKind::Access)
            .unwrap();
        assert_eq!(email, "foo@bar.org");
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let jwt_state = jwt_state();
        let access = jwt_state
            .generate_token("foo@bar.org", TokenKind::Access)
            .unwrap();
        let refresh = jwt_state
            .generate_token("foo@bar.org", TokenKind::Refresh)
            .unwrap();
        assert_eq!(
            jwt_state.validate_token_and_get_email(&access, TokenKind::Refresh),
            Err(TokenError::WrongKind)
        );
        assert_eq!(
            jwt_state.validate_token_and_get_email(&refresh, TokenKind::Access),
            Err(TokenError::WrongKind)
        );
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let jwt_state = JwtState::new(
            Some("test-secret"),
            Duration::seconds(-10),
            Duration::days(7),
        );
        let token = jwt_state
            .generate_token("foo@bar.org", TokenKind::Access)
            .unwrap();
        assert_eq!(
            jwt_state.validate_token_and_get_email(&token, TokenKind::Access),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn foreign_signatures_are_rejected() {
        let jwt_state = jwt_state();
        let other = JwtState::new(
            Some("other-secret"),
            Duration::minutes(15),
            Duration::days(7),
        );
        let token = other
            .generate_token("foo@bar.org", TokenKind::Access)
            .unwrap();
        assert_eq!(
            jwt_state.validate_token_and_get_email(&token, TokenKind::Access),
            Err(TokenError::Invalid)
        );
        assert_eq!(
            jwt_state.validate_token_and_get_email("dubidubidu", TokenKind::Access),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn access_and_refresh_tokens_differ() {
        let jwt_state = jwt_state();
        let access = jwt_state
            .generate_token("foo@bar.org", TokenKind::Access)
            .unwrap();
        let refresh = jwt_state
            .generate_token("foo@bar.org", TokenKind::Refresh)
            .unwrap();
        assert!(!access.is_empty());
        assert!(!refresh.is_empty());
        assert_ne!(access, refresh);
    }
}
