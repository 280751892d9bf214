// File:    pad.rs
// Author:  apezoo
// Date:    2025-07-22
//
// Description: The shuffle table backing the cipher, and its deterministic seeded generation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::alphabet;

/// The number of rows in a generated pad.
pub const PAD_ROWS: usize = 2048;

/// A table of alphabet permutations, one per row.
///
/// Rows are consulted by message position modulo the row count, so messages
/// longer than the table reuse rows cyclically. Row order and within-row
/// order are significant: any serialization must round-trip both exactly,
/// which the serde representation does.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pad {
    rows: Vec<Vec<u8>>,
}

impl Pad {
    /// Builds the full [`PAD_ROWS`]-row table from a derived seed.
    ///
    /// A single generator is seeded once and advances across all rows, so
    /// the entire table is a pure function of the seed. Each row is an
    /// independent shuffle of a fresh alphabet copy.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = (0..PAD_ROWS)
            .map(|_| {
                let mut row: Vec<u8> = alphabet::codes().collect();
                row.shuffle(&mut rng);
                row
            })
            .collect();
        debug!("generated {PAD_ROWS}-row pad from seed {seed}");
        Self { rows }
    }

    /// Wraps caller-supplied rows, e.g. a pad reconstructed on the
    /// receiving side.
    ///
    /// The caller is responsible for supplying rows that are permutations
    /// of the alphabet; codes outside it decode to the replacement byte.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Returns the row for a message position, cycling past the last row.
    ///
    /// # Panics
    ///
    /// Panics if the pad has no rows. [`crate::cipher::PadCipher`] guards
    /// this with [`crate::error::CipherError::MissingPad`] before indexing.
    #[must_use]
    pub fn row(&self, position: usize) -> &[u8] {
        &self.rows[position % self.rows.len()]
    }

    /// The number of rows held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the pad holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Hex-encoded SHA-256 over the rows in order.
    ///
    /// Two pads fingerprint identically exactly when their tables match,
    /// which lets a decoding party check it holds the right pad before
    /// producing garbage output.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for row in &self.rows {
            hasher.update(row);
        }
        format!("{:x}", hasher.finalize())
    }
}
