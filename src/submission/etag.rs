use chrono::Utc;
use sha2::{Digest, Sha256};

/// New opaque etag: hex SHA-256 over random bytes and the current time.
pub fn generate() -> String {
    let salt: [u8; 32] = rand::random();
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(Utc::now().to_rfc3339().as_bytes());
    hex::encode(hasher.finalize())
}
