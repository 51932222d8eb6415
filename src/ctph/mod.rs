//
// Copyright (c) 2025 Nathan Fiedler
//

//! This module implements context triggered piecewise hashing (CTPH), the
//! technique behind the spamsum and ssdeep tools.
//!
//! A rolling checksum over the last seven bytes of input decides where the
//! piece boundaries fall. Every byte is also folded into two FNV-style block
//! hashes, and each time the rolling checksum hits a boundary the low six bits
//! of the corresponding block hash are emitted as one character of output.
//! Because the boundaries depend only on local context, a small edit to the
//! input disturbs only a few characters of the result.
//!
//! The first part of a signature uses the block size `B` for its boundaries,
//! the second part uses `2B`. The block size is picked from the input length
//! so that roughly `SPAMSUM_LENGTH` boundaries are expected; should a pass
//! find more boundaries than fit, the block size is doubled and the pass is
//! repeated.
//!
//! There are two ways to use this module. The simplest is [`fuzzy_hash()`]
//! which returns the familiar `blocksize:part1:part2` text. The other is
//! [`FuzzyHash`], which retains the individual parts and can also be parsed
//! back from that text form. For manual control over the block size, see
//! [`run_pass()`].
use log::{debug, trace};
use std::fmt;
use std::io::Read;
use std::str::FromStr;

mod block;
mod rolling;

#[cfg(any(feature = "tokio", feature = "futures"))]
mod async_reader;

#[cfg(any(feature = "tokio", feature = "futures"))]
pub use async_reader::hash_async_reader;

pub use block::{BASE64_ALPHABET, BlockHash};
pub use rolling::RollingHash;

/// Maximum number of characters in either part of a signature.
pub const SPAMSUM_LENGTH: usize = 64;
/// Smallest block size, and the base of every other block size.
pub const MIN_BLOCKSIZE: u32 = 3;
/// Number of distinct block sizes, `MIN_BLOCKSIZE << 0` through `<< 30`.
pub const NUM_BLOCKSIZES: usize = 31;
/// Largest block size that fits in 32 bits.
pub const MAX_BLOCKSIZE: u32 = MIN_BLOCKSIZE << (NUM_BLOCKSIZES - 1);
/// FNV-1 32-bit prime used by the block hash.
pub const HASH_PRIME: u32 = 0x0100_0193;
/// Seed value of the block hash.
pub const HASH_INIT: u32 = 0x2802_1967;
/// Number of bytes covered by the rolling checksum.
pub const ROLLING_WINDOW: usize = 7;

///
/// Choose the block size for input of the given length: the smallest
/// `MIN_BLOCKSIZE * 2^i` for which `SPAMSUM_LENGTH` blocks cover the input.
///
pub fn initial_block_size(length: usize) -> u32 {
    let mut block_size = MIN_BLOCKSIZE;
    while (block_size as u64) * (SPAMSUM_LENGTH as u64) < length as u64
        && block_size < MAX_BLOCKSIZE
    {
        block_size *= 2;
    }
    block_size
}

///
/// Returns true if the value is one of the block sizes this algorithm can
/// produce.
///
pub fn is_valid_block_size(block_size: u32) -> bool {
    block_size >= MIN_BLOCKSIZE
        && block_size <= MAX_BLOCKSIZE
        && block_size % MIN_BLOCKSIZE == 0
        && (block_size / MIN_BLOCKSIZE).is_power_of_two()
}

///
/// The outcome of a single pass over the input with a fixed block size.
///
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Pass {
    /// Characters emitted at boundaries of the block size.
    pub part1: String,
    /// Characters emitted at boundaries of twice the block size.
    pub part2: String,
    /// True if more boundaries were found than `part1` can hold.
    pub truncated: bool,
}

///
/// Run one pass over the source using the given block size.
///
/// Each part holds at most `SPAMSUM_LENGTH` characters; boundaries found once
/// a part is full are ignored (and for the first part, `truncated` is set).
/// After the last byte, any block hash that has consumed input since its last
/// emission contributes one final character, if there is room for it. Empty
/// input thus yields two empty parts.
///
pub fn run_pass(source: &[u8], block_size: u32) -> Pass {
    assert!(block_size >= MIN_BLOCKSIZE);
    let double_size = u64::from(block_size) * 2;
    let mut roller = RollingHash::new();
    let mut hash1 = BlockHash::new();
    let mut hash2 = BlockHash::new();
    let mut part1 = String::with_capacity(SPAMSUM_LENGTH);
    let mut part2 = String::with_capacity(SPAMSUM_LENGTH);
    let mut truncated = false;
    for byte in source.iter().copied() {
        hash1.update(byte);
        hash2.update(byte);
        let checksum = roller.update(byte);
        // zero never triggers since block sizes are at least 3
        if checksum % block_size == block_size - 1 {
            if part1.len() < SPAMSUM_LENGTH {
                part1.push(hash1.emit());
            } else {
                truncated = true;
            }
        }
        if u64::from(checksum) % double_size == double_size - 1 && part2.len() < SPAMSUM_LENGTH {
            part2.push(hash2.emit());
        }
    }
    if hash1.is_pending() && part1.len() < SPAMSUM_LENGTH {
        part1.push(hash1.emit());
    }
    if hash2.is_pending() && part2.len() < SPAMSUM_LENGTH {
        part2.push(hash2.emit());
    }
    trace!(
        "pass over {} bytes with block size {}: {}+{} characters, truncated: {}",
        source.len(),
        block_size,
        part1.len(),
        part2.len(),
        truncated
    );
    Pass {
        part1,
        part2,
        truncated,
    }
}

///
/// A fuzzy hash (spamsum/ssdeep signature) of some content.
///
/// Use `new` to hash a slice of bytes, or parse an existing signature from
/// its text form. The `Display` form is `blocksize:part1:part2`.
///
/// ```
/// use fuzzydigest::ctph::FuzzyHash;
/// let hash = FuzzyHash::new(b"The quick brown fox jumps over the lazy dog");
/// assert_eq!(hash.to_string(), "3:FJKKIUKact:FHIGi");
/// let parsed: FuzzyHash = "3:FJKKIUKact:FHIGi".parse().unwrap();
/// assert_eq!(hash, parsed);
/// ```
///
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct FuzzyHash {
    block_size: u32,
    part1: String,
    part2: String,
}

impl FuzzyHash {
    ///
    /// Compute the fuzzy hash of the given bytes.
    ///
    /// Starts with the block size from `initial_block_size()` and doubles it
    /// until a pass is no longer truncated, or the largest block size has been
    /// tried.
    ///
    pub fn new(source: &[u8]) -> Self {
        let mut block_size = initial_block_size(source.len());
        let mut pass = run_pass(source, block_size);
        for _ in 1..NUM_BLOCKSIZES {
            if !pass.truncated || block_size >= MAX_BLOCKSIZE {
                break;
            }
            debug!(
                "block size {} too small for {} bytes, retrying with {}",
                block_size,
                source.len(),
                block_size * 2
            );
            block_size *= 2;
            pass = run_pass(source, block_size);
        }
        Self {
            block_size,
            part1: pass.part1,
            part2: pass.part2,
        }
    }

    ///
    /// Read the entire source into memory and compute its fuzzy hash.
    ///
    pub fn from_reader<R: Read>(mut source: R) -> Result<Self, Error> {
        let mut buffer: Vec<u8> = Vec::new();
        source.read_to_end(&mut buffer)?;
        Ok(Self::new(&buffer))
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Signature part computed with the block size.
    pub fn part1(&self) -> &str {
        &self.part1
    }

    /// Signature part computed with twice the block size.
    pub fn part2(&self) -> &str {
        &self.part2
    }
}

impl fmt::Display for FuzzyHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.block_size, self.part1, self.part2)
    }
}

impl FromStr for FuzzyHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(':');
        let (Some(size), Some(part1), Some(part2), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::Malformed(format!(
                "expected blocksize:part1:part2, got {s:?}"
            )));
        };
        if size.is_empty() || !size.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Malformed(format!("block size {size:?} is not a number")));
        }
        let block_size = size
            .parse::<u32>()
            .ok()
            .filter(|value| is_valid_block_size(*value))
            .ok_or_else(|| Error::Malformed(format!("block size {size} is not valid")))?;
        for part in [part1, part2] {
            if part.len() > SPAMSUM_LENGTH {
                return Err(Error::Malformed(format!(
                    "signature part longer than {} characters",
                    SPAMSUM_LENGTH
                )));
            }
            if let Some(ch) = part.chars().find(|ch| !block::is_alphabet(*ch)) {
                return Err(Error::Malformed(format!("invalid character {ch:?} in signature")));
            }
        }
        Ok(Self {
            block_size,
            part1: part1.to_owned(),
            part2: part2.to_owned(),
        })
    }
}

///
/// Compute the fuzzy hash of the given bytes in its `blocksize:part1:part2`
/// text form. This never fails, even for empty input.
///
pub fn fuzzy_hash(source: &[u8]) -> String {
    FuzzyHash::new(source).to_string()
}

///
/// The error type for reading sources and parsing signatures.
///
#[derive(Debug)]
pub enum Error {
    /// An I/O error occurred.
    IoError(std::io::Error),
    /// The text is not a well-formed signature.
    Malformed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fuzzy hash error: {self:?}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::IoError(error)
    }
}

impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::IoError(ioerr) => ioerr,
            Error::Malformed(str) => Self::new(std::io::ErrorKind::InvalidData, str),
        }
    }
}
