//
// Copyright (c) 2025 Nathan Fiedler
//

use super::*;

#[cfg(all(feature = "futures", not(feature = "tokio")))]
use futures::io::{AsyncRead, AsyncReadExt};

#[cfg(all(feature = "tokio", not(feature = "futures")))]
use tokio::io::{AsyncRead, AsyncReadExt};

///
/// Read the entire asynchronous source into memory and compute its fuzzy
/// hash.
///
/// Both `futures` and `tokio`-based [AsyncRead] inputs are supported via
/// feature flags. The hashing itself happens synchronously once the data has
/// been read; for very large inputs consider running it on a blocking thread.
///
/// ```no_run
/// # use fuzzydigest::ctph::hash_async_reader;
/// async fn run() {
///     let source = std::fs::read("test/fixtures/SekienAkashita.jpg").unwrap();
///     let hash = hash_async_reader(source.as_slice()).await.unwrap();
///     println!("{}", hash);
/// }
/// ```
///
pub async fn hash_async_reader<R: AsyncRead + Unpin>(mut source: R) -> Result<FuzzyHash, Error> {
    let mut buffer: Vec<u8> = Vec::new();
    let count = source.read_to_end(&mut buffer).await?;
    debug!("read {} bytes from async source", count);
    Ok(FuzzyHash::new(&buffer))
}
