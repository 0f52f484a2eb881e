// Rust guideline compliant 2026-02-06

//! String helpers.

use sha2::{Digest, Sha512};

/// Extension methods for string slices.
pub trait StringExt {
    /// Uppercases the first character and leaves the rest untouched.
    ///
    /// An empty string yields an empty string.
    fn uppercase_first_letter(&self) -> String;

    /// Computes the SHA-512 digest of the UTF-8 bytes.
    ///
    /// # Returns
    ///
    /// The 128-character lowercase hexadecimal digest.
    fn hash_sha512(&self) -> String;
}

impl StringExt for str {
    fn uppercase_first_letter(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn hash_sha512(&self) -> String {
        format!("{:x}", Sha512::digest(self.as_bytes()))
    }
}
