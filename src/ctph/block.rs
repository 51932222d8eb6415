//
// Copyright (c) 2025 Nathan Fiedler
//

//! Piecewise block hashing and the alphabet used to encode it.

use super::{HASH_INIT, HASH_PRIME};

///
/// The 64 printable characters used to encode the low 6 bits of a block hash,
/// in the order used by spamsum and ssdeep.
///
pub const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Map a 6-bit value to its alphabet character. Higher bits are ignored.
#[inline]
pub fn encode(value: u32) -> char {
    BASE64_ALPHABET[(value & 0x3f) as usize] as char
}

/// Returns true if the character belongs to the encoding alphabet.
#[inline]
pub fn is_alphabet(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '+' || ch == '/'
}

///
/// FNV-style accumulator for a single piece of the input.
///
/// Every byte is folded into the running value; when the rolling hash
/// signals a block boundary the caller invokes `emit()` to take one encoded
/// character and start the next piece.
///
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BlockHash {
    h: u32,
    /// True when bytes have been folded in since the last emit.
    pending: bool,
}

impl BlockHash {
    pub fn new() -> Self {
        Self {
            h: HASH_INIT,
            pending: false,
        }
    }

    #[inline]
    pub fn update(&mut self, byte: u8) {
        self.h = self.h.wrapping_mul(HASH_PRIME) ^ u32::from(byte);
        self.pending = true;
    }

    ///
    /// Encode the current value as a single character and reset the
    /// accumulator to its seed.
    ///
    #[inline]
    pub fn emit(&mut self) -> char {
        let ch = encode(self.h);
        self.h = HASH_INIT;
        self.pending = false;
        ch
    }

    /// Current accumulator value.
    pub fn value(&self) -> u32 {
        self.h
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for BlockHash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet() {
        assert_eq!(encode(0), 'A');
        assert_eq!(encode(25), 'Z');
        assert_eq!(encode(26), 'a');
        assert_eq!(encode(51), 'z');
        assert_eq!(encode(52), '0');
        assert_eq!(encode(61), '9');
        assert_eq!(encode(62), '+');
        assert_eq!(encode(63), '/');
        // only the low 6 bits matter
        assert_eq!(encode(64), 'A');
        assert_eq!(encode(0xffff_ffff), '/');
        for ch in BASE64_ALPHABET.iter() {
            assert!(is_alphabet(*ch as char));
        }
        assert!(!is_alphabet(':'));
        assert!(!is_alphabet('='));
        assert!(!is_alphabet('é'));
    }

    #[test]
    fn test_fnv_step() {
        let mut hasher = BlockHash::new();
        assert_eq!(hasher.value(), HASH_INIT);
        assert!(!hasher.is_pending());
        hasher.update(0x41);
        let expected = HASH_INIT.wrapping_mul(HASH_PRIME) ^ 0x41;
        assert_eq!(hasher.value(), expected);
        assert!(hasher.is_pending());
        hasher.update(0x00);
        assert_eq!(hasher.value(), expected.wrapping_mul(HASH_PRIME));
    }

    #[test]
    fn test_emit_resets() {
        let mut hasher = BlockHash::new();
        for byte in b"spamsum" {
            hasher.update(*byte);
        }
        let value = hasher.value();
        let ch = hasher.emit();
        assert_eq!(ch, encode(value));
        assert_eq!(hasher.value(), HASH_INIT);
        assert!(!hasher.is_pending());
        assert_eq!(hasher, BlockHash::default());
    }
}
