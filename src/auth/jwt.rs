use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
};

/// Verifies session tokens signed by the auth provider with a shared secret.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    audience: Option<String>,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, audience: Option<&str>, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::default();
        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            audience: audience.map(str::to_string),
            expiration_hours,
        }
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("Session has expired".to_string())
                }
                _ => AppError::Unauthorized(format!("Invalid token: {}", e)),
            })
    }

    /// Signs a token the way the auth provider does. Used by local tooling
    /// and tests; production tokens come from the provider.
    pub fn issue_token(&self, user_id: &str, email: &str) -> AppResult<String> {
        let mut claims = Claims::new(user_id, email, self.expiration_hours);
        claims.aud = self.audience.clone();

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_jwt_issue_and_validate() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, None, 1);

        let token = jwt_service.issue_token("user-1", "ada@example.com").unwrap();
        assert!(!token.is_empty());

        let claims = jwt_service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email, "ada@example.com");
    }

    #[test]
    fn test_jwt_invalid_token() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, None, 1);

        let result = jwt_service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_jwt_expired_token_is_rejected() {
        let config = Config::test_config();
        let jwt_service = JwtService::new(&config.jwt_secret, None, -2);

        let token = jwt_service.issue_token("user-1", "ada@example.com").unwrap();
        match jwt_service.validate_token(&token) {
            Err(AppError::Unauthorized(msg)) => assert!(msg.contains("expired")),
            other => panic!("Expected expired session, got {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_jwt_audience_must_match() {
        let config = Config::test_config();
        let issuer = JwtService::new(&config.jwt_secret, Some("other-app"), 1);
        let verifier = JwtService::new(&config.jwt_secret, Some("authenticated"), 1);

        let token = issuer.issue_token("user-1", "ada@example.com").unwrap();
        assert!(verifier.validate_token(&token).is_err());
        assert!(issuer.validate_token(&token).is_ok());
    }

    #[test]
    fn test_jwt_wrong_secret_is_rejected() {
        let issuer = JwtService::new(&SecretString::from("one-secret".to_string()), None, 1);
        let verifier = JwtService::new(&SecretString::from("another-secret".to_string()), None, 1);

        let token = issuer.issue_token("user-1", "ada@example.com").unwrap();
        assert!(verifier.validate_token(&token).is_err());
    }
}
