//! Repeating-key XOR cipher with URL-safe base64 text encoding

use base64::{engine::general_purpose::URL_SAFE, Engine};

use crate::error::{GradeError, GradeResult};

/// Key used when settings don't provide one
pub const DEFAULT_KEY: &str = "CheckMyGradeKey";

/// Reversible, deterministic password obfuscation. Not a security boundary.
#[derive(Debug, Clone)]
pub struct XorCipher {
    key: Vec<u8>,
}

impl XorCipher {
    /// Create a cipher with the given key
    pub fn new(key: impl Into<Vec<u8>>) -> GradeResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(GradeError::Config("Cipher key cannot be empty".into()));
        }
        Ok(Self { key })
    }

    /// XOR the UTF-8 bytes of `plaintext` with the key, then base64 them
    pub fn encrypt(&self, plaintext: &str) -> String {
        URL_SAFE.encode(self.apply_key(plaintext.as_bytes()))
    }

    /// Inverse of [`encrypt`](Self::encrypt)
    pub fn decrypt(&self, ciphertext: &str) -> GradeResult<String> {
        let bytes = URL_SAFE
            .decode(ciphertext.as_bytes())
            .map_err(|e| GradeError::Decode(format!("Invalid ciphertext encoding: {}", e)))?;

        String::from_utf8(self.apply_key(&bytes))
            .map_err(|e| GradeError::Decode(format!("Invalid UTF-8 in decrypted data: {}", e)))
    }

    fn apply_key(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .zip(self.key.iter().cycle())
            .map(|(byte, key)| byte ^ key)
            .collect()
    }
}

impl Default for XorCipher {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.as_bytes().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt() {
        let cipher = XorCipher::default();
        let encrypted = cipher.encrypt("Welcome12#_");
        assert_ne!(encrypted, "Welcome12#_");
        assert_eq!(cipher.decrypt(&encrypted).unwrap(), "Welcome12#_");
    }

    #[test]
    fn test_deterministic() {
        let cipher = XorCipher::default();
        assert_eq!(cipher.encrypt("NewP@ss1"), cipher.encrypt("NewP@ss1"));
    }

    #[test]
    fn test_known_vector() {
        // 'W' ^ 'C' = 0x14, 'e' ^ 'h' = 0x0d
        let cipher = XorCipher::default();
        assert_eq!(cipher.encrypt("We"), "FA0=");
    }

    #[test]
    fn test_key_repeats_past_its_length() {
        let cipher = XorCipher::new("ab").unwrap();
        let long = "a much longer password than the key";
        assert_eq!(cipher.decrypt(&cipher.encrypt(long)).unwrap(), long);
    }

    #[test]
    fn test_output_is_delimiter_safe() {
        let cipher = XorCipher::default();
        let encrypted = cipher.encrypt("p,a\"s\ns");
        assert!(!encrypted.contains(','));
        assert!(!encrypted.contains('"'));
        assert!(!encrypted.contains('\n'));
    }

    #[test]
    fn test_unicode_round_trip() {
        let cipher = XorCipher::default();
        for password in ["", "pässwörd", "密码123", "emoji 🎓 ok"] {
            assert_eq!(cipher.decrypt(&cipher.encrypt(password)).unwrap(), password);
        }
    }

    #[test]
    fn test_invalid_encoding_fails() {
        let cipher = XorCipher::default();
        let result = cipher.decrypt("not base64!!");
        assert!(matches!(result, Err(GradeError::Decode(_))));
    }

    #[test]
    fn test_invalid_utf8_fails() {
        let cipher = XorCipher::default();
        // 0xff ^ 'C' = 0xbc, a lone continuation byte
        let bogus = URL_SAFE.encode([0xffu8]);
        assert!(matches!(cipher.decrypt(&bogus), Err(GradeError::Decode(_))));
    }

    #[test]
    fn test_different_key_does_not_recover_plaintext() {
        let a = XorCipher::default();
        let b = XorCipher::new("another key").unwrap();
        let encrypted = a.encrypt("Welcome12#_");
        assert_ne!(b.decrypt(&encrypted).ok().as_deref(), Some("Welcome12#_"));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(XorCipher::new("").is_err());
    }
}
