//
// Copyright (c) 2025 Nathan Fiedler
//

//! Cryptographic digests of the same content that is fuzzy hashed.
//!
//! These are thin wrappers around the RustCrypto `sha1` and `sha2` crates,
//! producing lowercase hexadecimal strings. They are useful alongside a fuzzy
//! hash to tell exact duplicates apart from merely similar content.
use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

///
/// The supported digest algorithms.
///
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// SHA-1, 20 byte digest.
    Sha1,
    /// SHA-256, 32 byte digest.
    Sha256,
}

impl Algorithm {
    /// Length of the raw digest in bytes.
    pub fn digest_size(&self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Sha1 => write!(f, "sha1"),
            Algorithm::Sha256 => write!(f, "sha256"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            _ => Err(Error::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

///
/// The error type returned when naming a digest algorithm.
///
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// The named algorithm is not one of those in `Algorithm`.
    UnsupportedAlgorithm(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "digest error: {self:?}")
    }
}

impl std::error::Error for Error {}

///
/// Compute the digest of the source using the given algorithm, returned as a
/// lowercase hexadecimal string of `2 * digest_size()` characters.
///
pub fn hex_digest(algorithm: Algorithm, source: &[u8]) -> String {
    match algorithm {
        Algorithm::Sha1 => format!("{:x}", Sha1::digest(source)),
        Algorithm::Sha256 => format!("{:x}", Sha256::digest(source)),
    }
}

/// SHA-1 of the source as lowercase hex.
pub fn sha1_hex(source: &[u8]) -> String {
    hex_digest(Algorithm::Sha1, source)
}

/// SHA-256 of the source as lowercase hex.
pub fn sha256_hex(source: &[u8]) -> String {
    hex_digest(Algorithm::Sha256, source)
}
