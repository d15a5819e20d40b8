//! Password hashing using bcrypt
//!
//! Provides salted password hashing and verification.
//!
//! # Performance Considerations
//!
//! Bcrypt at cost 12 is intentionally CPU-intensive (tens of milliseconds
//! on commodity hardware). Use the `_async` variants in request handlers to
//! avoid blocking the async runtime.

use anyhow::Result;

/// Cost factor for bcrypt hashing. Raised over time to track hardware
/// speedups.
pub const HASH_COST: u32 = 12;

/// Password hashing service
///
/// Bcrypt generates a random salt per call, so two hashes of the same
/// plaintext differ. Verification uses bcrypt's constant-time comparison.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password at the default cost factor (blocking operation)
    pub fn hash(password: &str) -> Result<String> {
        Self::hash_with_cost(password, HASH_COST)
    }

    /// Hash a password at an explicit cost factor (blocking operation)
    pub fn hash_with_cost(password: &str, cost: u32) -> Result<String> {
        bcrypt::hash(password, cost).map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored digest (blocking operation)
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cost 4 is bcrypt's minimum; production cost makes these tests crawl.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hash = PasswordService::hash_with_cost(password, TEST_COST).unwrap();

        assert!(PasswordService::verify(password, &hash).unwrap());
        assert!(!PasswordService::verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let password = "test_password";
        let hash1 = PasswordService::hash_with_cost(password, TEST_COST).unwrap();
        let hash2 = PasswordService::hash_with_cost(password, TEST_COST).unwrap();

        // Hashes should be different due to random salt
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(PasswordService::verify(password, &hash1).unwrap());
        assert!(PasswordService::verify(password, &hash2).unwrap());
    }

    #[test]
    fn test_default_cost_is_twelve() {
        assert_eq!(HASH_COST, 12);
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = "async_test_password".to_string();
        let hash = PasswordService::hash_async(password.clone()).await.unwrap();

        assert!(PasswordService::verify_async(password.clone(), hash.clone()).await.unwrap());
        assert!(!PasswordService::verify_async("wrong".to_string(), hash).await.unwrap());
    }
}
