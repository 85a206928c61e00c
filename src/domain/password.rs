//! Password value object - Domain layer password handling.
//!
//! Enforces the account password rules on the plain text and keeps only
//! the Argon2 hash afterwards.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Well-formed hash used when no account matches, so a failed lookup costs
/// the same as a failed verification.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$Gq0NSsWKYGLu6dEKcdzFxVXqZcU0bp2l2mUcHh6LYfY";

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns a validation error if the plain text breaks the password rules.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        if !Self::is_acceptable(plain_text) {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters and cannot contain spaces",
                MIN_PASSWORD_LENGTH
            )));
        }

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Check the password rules: not empty, at least `MIN_PASSWORD_LENGTH`
    /// characters, no whitespace.
    pub fn is_acceptable(plain_text: &str) -> bool {
        !plain_text.is_empty()
            && plain_text.chars().count() >= MIN_PASSWORD_LENGTH
            && !plain_text.chars().any(char::is_whitespace)
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Placeholder hash for verifying against when no account was found.
    pub fn dummy() -> Self {
        Self::from_hash(DUMMY_HASH.to_string())
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "secret";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("Secret"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "abcd1234";
        let password = Password::new(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let pass1 = Password::new("same-one").unwrap();
        let pass2 = Password::new("same-one").unwrap();

        assert_ne!(pass1, pass2);
        assert!(pass1.verify("same-one"));
        assert!(pass2.verify("same-one"));
    }

    #[test]
    fn test_minimum_length() {
        assert!(Password::is_acceptable("abcd"));
        assert!(!Password::is_acceptable("abc"));
        assert!(Password::new("abc").is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Three characters, six bytes
        assert!(!Password::is_acceptable("ção"));
        assert!(Password::is_acceptable("ação"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(!Password::is_acceptable(""));
        assert!(matches!(Password::new(""), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(!Password::is_acceptable("pass word"));
        assert!(!Password::is_acceptable("password\t"));
        assert!(!Password::is_acceptable("    "));
    }

    #[test]
    fn test_dummy_never_verifies() {
        assert!(!Password::dummy().verify("secret"));
        assert!(!Password::dummy().verify(""));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("secret").unwrap();
        let rendered = format!("{:?}", password);
        assert!(!rendered.contains(password.as_str()));
    }
}
