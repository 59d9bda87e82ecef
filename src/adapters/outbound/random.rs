use rand::{TryRngCore, rngs::OsRng};

use crate::{domain::errors::BoxError, ports::ReferenceGenerator};

/// Hex reference generator backed by the operating system CSPRNG
#[derive(Debug, Clone, Copy)]
pub struct OsRandomHex {
    bytes: usize,
}

impl OsRandomHex {
    /// Generator producing `bytes` random bytes, i.e. `2 * bytes` hex characters
    pub fn new(bytes: usize) -> Self {
        Self { bytes }
    }
}

impl Default for OsRandomHex {
    fn default() -> Self {
        Self::new(16)
    }
}

impl ReferenceGenerator for OsRandomHex {
    fn generate(&self) -> Result<String, BoxError> {
        let mut buf = vec![0u8; self.bytes];
        OsRng.try_fill_bytes(&mut buf)?;
        Ok(hex::encode(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_lowercase_hex() {
        let reference = OsRandomHex::default().generate().unwrap();
        assert_eq!(reference.len(), 32);
        assert!(reference
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_references_differ() {
        let generator = OsRandomHex::new(8);
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_eq!(first.len(), 16);
        assert_ne!(first, second);
    }
}
