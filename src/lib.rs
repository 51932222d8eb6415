//
// Copyright (c) 2025 Nathan Fiedler
//

//! This crate implements context triggered piecewise hashing (CTPH) in pure
//! Rust, producing fuzzy hashes in the format made popular by the spamsum and
//! [ssdeep](https://ssdeep-project.github.io/ssdeep/) tools. A critical aspect
//! of the behavior of this algorithm is that it returns exactly the same
//! results for the same input.
//!
//! Unlike a cryptographic hash, where flipping a single bit changes the entire
//! output, a fuzzy hash stays largely the same when the content changes only
//! slightly. To learn more about the technique, see [Identifying almost
//! identical files using context triggered piecewise
//! hashing](https://doi.org/10.1016/j.diin.2006.06.015) by Jesse Kornblum.
//!
//! ## Examples
//!
//! A short example of hashing a file is shown below:
//!
//! ```no_run
//! use std::fs;
//! use fuzzydigest::ctph;
//! let contents = fs::read("test/fixtures/SekienAkashita.jpg").unwrap();
//! println!("{}", ctph::fuzzy_hash(&contents));
//! ```
//!
//! The result has the form `blocksize:part1:part2`, such as
//! `3:FJKKIUKact:FHIGi`. The block size determines how finely the input was
//! divided; two hashes can only be meaningfully compared when their block
//! sizes are equal or differ by a factor of two, which is why every hash
//! carries parts for both the block size and its double.
//!
//! To keep the individual parts, or to read a hash back from its text form,
//! use [`ctph::FuzzyHash`]:
//!
//! ```
//! use fuzzydigest::ctph::FuzzyHash;
//! let hash: FuzzyHash = "3:FJKKIUKact:FHIGi".parse().unwrap();
//! assert_eq!(hash.block_size(), 3);
//! assert_eq!(hash.part2(), "FHIGi");
//! ```
//!
//! ## Cryptographic Digests
//!
//! Fuzzy hashes are often stored next to exact digests of the same content.
//! The `crypto` module offers SHA-1 and SHA-256 as lowercase hex strings:
//!
//! ```
//! use fuzzydigest::crypto;
//! assert_eq!(crypto::sha1_hex(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
//! ```
//!
//! ## Large Data
//!
//! The algorithm needs the length of the input before it can choose a block
//! size, and may need more than one pass when the first guess produces too
//! many pieces, so the entire input is held in memory. Using a crate such as
//! `memmap2` avoids copying a file into a buffer first; see the programs in
//! the `demos` directory. With the `tokio` or `futures` feature enabled,
//! `ctph::hash_async_reader` reads an asynchronous source to completion and
//! then hashes it.
//!
//! Every call owns its own hashing state, so hashing many inputs in parallel
//! from multiple threads is safe without any locking.

pub mod crypto;
pub mod ctph;
