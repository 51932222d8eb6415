//
// Copyright (c) 2025 Nathan Fiedler
//

use super::ROLLING_WINDOW;

///
/// Rolling checksum over the last `ROLLING_WINDOW` bytes of input, used only
/// to decide where the piecewise block boundaries fall.
///
/// All arithmetic wraps at 32 bits. A fresh instance must be used for every
/// pass over the input.
///
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RollingHash {
    window: [u8; ROLLING_WINDOW],
    h1: u32,
    h2: u32,
    h3: u32,
    /// Number of bytes consumed so far.
    n: u64,
}

impl RollingHash {
    pub fn new() -> Self {
        Self {
            window: [0; ROLLING_WINDOW],
            h1: 0,
            h2: 0,
            h3: 0,
            n: 0,
        }
    }

    ///
    /// Slide the window forward by one byte and return the checksum for the
    /// new position.
    ///
    #[inline]
    pub fn update(&mut self, byte: u8) -> u32 {
        let b = u32::from(byte);
        let index = (self.n % ROLLING_WINDOW as u64) as usize;
        self.h2 = self.h2.wrapping_sub(self.h1);
        self.h2 = self.h2.wrapping_add((ROLLING_WINDOW as u32).wrapping_mul(b));
        self.h1 = self
            .h1
            .wrapping_add(b)
            .wrapping_sub(u32::from(self.window[index]));
        self.window[index] = byte;
        self.n += 1;
        // 7 shifts of 5 bits push a byte out of the 32-bit word entirely
        self.h3 = (self.h3 << 5) ^ b;
        self.value()
    }

    /// The checksum as of the most recent byte.
    #[inline]
    pub fn value(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }

    /// Number of bytes that have passed through the window.
    pub fn count(&self) -> u64 {
        self.n
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::new()
    }
}
