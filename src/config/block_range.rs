// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for the `eth_getLogs` chunk size

use std::fmt;

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};

/// Maximum number of blocks covered by one `eth_getLogs` call
///
/// Never zero: [`MaxBlockRange::new`] raises zero to one block.
///
/// # Examples
///
/// ```
/// use transferscan::config::MaxBlockRange;
///
/// let range = MaxBlockRange::new(1000);
/// let chunks: Vec<_> = range.descending_chunks(0, 2500).collect();
///
/// assert_eq!(chunks, vec![(1501, 2500), (501, 1500), (0, 500)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxBlockRange(u64);

impl MaxBlockRange {
    /// Default for public RPC endpoints
    pub const DEFAULT: Self = Self(500);

    /// Create a new max block range
    pub const fn new(blocks: u64) -> Self {
        if blocks == 0 {
            Self(1)
        } else {
            Self(blocks)
        }
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Split `start..=end` into inclusive chunks, newest chunk first.
    ///
    /// Yields nothing when `end < start`.
    pub fn descending_chunks(
        &self,
        start: BlockNumber,
        end: BlockNumber,
    ) -> impl Iterator<Item = (BlockNumber, BlockNumber)> {
        let size = self.0;
        let first = (end >= start).then(|| (end.saturating_sub(size - 1).max(start), end));

        std::iter::successors(first, move |&(lo, _)| {
            (lo > start).then(|| {
                let hi = lo - 1;
                (hi.saturating_sub(size - 1).max(start), hi)
            })
        })
    }
}

impl Default for MaxBlockRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for MaxBlockRange {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for MaxBlockRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}
