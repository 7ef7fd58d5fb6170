//! Password hashing
//!
//! Passwords are stored as salted bcrypt hashes and compared with
//! `bcrypt::verify`. Plaintext never reaches the database.

/// Hash a password with the default bcrypt cost
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

/// Hash a password with an explicit bcrypt cost (4..=31)
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, cost)
}

/// Check a password against a stored hash
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, password_hash)
}
