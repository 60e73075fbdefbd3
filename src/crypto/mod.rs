//! Password obfuscation for CheckMyGrade
//!
//! Stored passwords are XORed against a repeating key and written as
//! URL-safe base64. This keeps plaintext out of login.csv and nothing more;
//! anyone holding the key recovers every password.

pub mod cipher;

pub use cipher::{XorCipher, DEFAULT_KEY};
