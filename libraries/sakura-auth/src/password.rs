//! Password hashing and id generation
//!
//! Hashes are `hex(sha256(password + salt))` with one static salt shared by
//! every account. Stored hashes are compared verbatim, so the scheme must
//! not change.

use chrono::Utc;
use rand::Rng;
use sha2::{Digest, Sha256};

const SALT: &str = "spotify_salt_2024";

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Hash a password for storage or comparison
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(SALT.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generate a user id of the form `user_<unix millis>_<9 base36 chars>`
pub fn generate_user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..9)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!("user_{}_{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hash_is_salted_sha256_hex() {
        let hash = hash_password("secret1");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(hash, hash_password("secret1"));
        assert_ne!(hash, hash_password("secret2"));
    }

    #[test]
    fn hash_matches_concatenation() {
        let mut hasher = Sha256::new();
        hasher.update(b"hunter22spotify_salt_2024");
        assert_eq!(hash_password("hunter22"), hex::encode(hasher.finalize()));
    }

    #[test]
    fn user_id_format() {
        let mut rng = StdRng::seed_from_u64(9);
        let id = generate_user_id(&mut rng);

        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "user");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    }
}
