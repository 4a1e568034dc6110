use bcrypt::BcryptError;

/// Work factor matching the original deployment's hashes.
const COST: u32 = 10;

pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, COST)
}

pub fn verify(plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_accepts_the_same_plaintext() {
        let hashed = hash("secret123").expect("hashing failed");
        assert!(verify("secret123", &hashed).unwrap());
    }

    #[test]
    fn verify_rejects_a_different_plaintext() {
        let hashed = hash("secret123").expect("hashing failed");
        assert!(!verify("secret124", &hashed).unwrap());
    }

    #[test]
    fn each_hash_gets_a_fresh_salt() {
        let a = hash("secret123").unwrap();
        let b = hash("secret123").unwrap();
        assert_ne!(a, b);
    }
}
