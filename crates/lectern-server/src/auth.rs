use jsonwebtoken::{Algorithm, DecodingKey, TokenData, Validation, decode};
use lectern_core::account::Identity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum AuthError {
    #[error("Invalid identity token")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Identity token has an empty subject")]
    EmptySubject,
}

#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct IdentityClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Checks identity tokens signed with the shared secret of the identity provider.
pub(crate) struct TokenValidator {
    key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub(crate) fn new(secret: &str, audience: &[String]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(audience);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub(crate) fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let token: TokenData<IdentityClaims> = decode(token.trim(), &self.key, &self.validation)?;
        let claims = token.claims;
        if claims.sub.trim().is_empty() {
            return Err(AuthError::EmptySubject);
        }
        Ok(Identity {
            subject: claims.sub,
            name: claims.name.filter(|name| !name.trim().is_empty()),
            email: claims.email.filter(|email| !email.trim().is_empty()),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    pub(crate) const SECRET: &str = "test-secret";
    pub(crate) const AUDIENCE: &str = "lectern-web";

    pub(crate) fn sign(claims: &serde_json::Value, secret: &str) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
    }

    pub(crate) fn identity_token(subject: &str, name: Option<&str>) -> String {
        sign(
            &json!({
                "sub": subject,
                "aud": AUDIENCE,
                "exp": Utc::now().timestamp() + 3600,
                "name": name,
            }),
            SECRET,
        )
    }

    fn validator() -> TokenValidator {
        TokenValidator::new(SECRET, &[AUDIENCE.to_owned()])
    }

    #[test]
    fn test_valid_token() {
        let identity = validator().validate(&identity_token("student-1", Some("Ada"))).unwrap();
        assert_eq!(identity.subject, "student-1");
        assert_eq!(identity.name.as_deref(), Some("Ada"));
        assert_eq!(identity.email, None);
    }

    #[test]
    fn test_wrong_secret() {
        let token = sign(
            &json!({ "sub": "student-1", "aud": AUDIENCE, "exp": Utc::now().timestamp() + 3600 }),
            "other-secret",
        );
        assert!(matches!(validator().validate(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_audience() {
        let token = sign(
            &json!({ "sub": "student-1", "aud": "other", "exp": Utc::now().timestamp() + 3600 }),
            SECRET,
        );
        assert!(validator().validate(&token).is_err());
    }

    #[test]
    fn test_expired() {
        let token = sign(
            &json!({ "sub": "student-1", "aud": AUDIENCE, "exp": Utc::now().timestamp() - 3600 }),
            SECRET,
        );
        assert!(validator().validate(&token).is_err());
    }

    #[test]
    fn test_empty_subject() {
        let token = sign(
            &json!({ "sub": " ", "aud": AUDIENCE, "exp": Utc::now().timestamp() + 3600 }),
            SECRET,
        );
        assert!(matches!(validator().validate(&token), Err(AuthError::EmptySubject)));
    }
}
