//! Per-request nonce generation.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random alphanumeric string of length `len`.
///
/// Draws from the 62-symbol `[a-zA-Z0-9]` alphabet using the thread-local
/// RNG. Good enough to keep consecutive requests from colliding on the same
/// signature; not meant to resist adversarial prediction.
pub fn nonce(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_length() {
        for len in [0, 1, 16, 42] {
            assert_eq!(nonce(len).len(), len);
        }
    }

    #[test]
    fn test_nonce_alphabet() {
        assert!(nonce(256).chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_nonce_uniqueness() {
        let mut prev = String::new();
        for _ in 0..10 {
            let n = nonce(42);
            assert_ne!(n, prev, "consecutive nonces collided");
            prev = n;
        }
    }
}
