// File:    cipher.rs
// Author:  apezoo
// Date:    2025-07-22
//
// Description: The stateful shuffle-pad cipher: pad ownership, position-keyed substitution, and its inverse.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{ALPHABET_END, ALPHABET_START, REPLACEMENT};
use crate::error::{CipherError, Result};
use crate::pad::Pad;
use crate::seed::{Clock, SeedSource, SystemClock};

/// A substitution cipher keyed by a shuffle-table pad.
///
/// An instance owns at most one pad. The pad is either generated from the
/// configured seed source (falling back to the clock) or supplied directly
/// by the caller, and stays fixed until the next [`PadCipher::generate`]
/// call replaces it wholesale.
///
/// Instances are single-threaded by design: no internal synchronization is
/// provided, and callers sharing one across threads must serialize access.
pub struct PadCipher {
    pad: Option<Pad>,
    seed_source: Option<SeedSource>,
    clock: Box<dyn Clock>,
}

impl PadCipher {
    /// Creates a cipher with no pad, no seed source, and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pad: None,
            seed_source: None,
            clock: Box::new(SystemClock),
        }
    }

    /// Creates a cipher around an existing pad, e.g. on the receiving side
    /// of an exchange.
    #[must_use]
    pub fn with_pad(pad: Pad) -> Self {
        Self {
            pad: Some(pad),
            ..Self::new()
        }
    }

    /// Creates a cipher that reads the given clock when no explicit seed
    /// source is configured.
    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            pad: None,
            seed_source: None,
            clock,
        }
    }

    /// Configures the seed source used by the next [`PadCipher::generate`].
    pub fn set_seed_source(&mut self, source: SeedSource) {
        self.seed_source = Some(source);
    }

    /// The currently held pad, if any.
    #[must_use]
    pub fn pad(&self) -> Option<&Pad> {
        self.pad.as_ref()
    }

    /// Derives the seed from the configured source, or from the clock when
    /// none is set. The result is not cached; with no source configured,
    /// consecutive calls follow the advancing clock.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed_source
            .unwrap_or_else(|| self.clock.now())
            .derive()
    }

    /// Builds a fresh pad from the current seed and installs it, replacing
    /// any pad held before.
    pub fn generate(&mut self) -> &Pad {
        let seed = self.seed();
        self.pad.insert(Pad::from_seed(seed))
    }

    /// Encodes a message into its substituted form.
    ///
    /// Characters outside ASCII are replaced with `_` before substitution;
    /// ASCII characters outside the printable range are clamped into it.
    /// The result has exactly one output character per input character and
    /// consists only of printable-ASCII codes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MissingPad`] when no pad is held or the held
    /// pad has no rows.
    pub fn encode(&self, message: &str) -> Result<String> {
        let pad = self.usable_pad()?;
        let encoded = message
            .chars()
            .map(normalize)
            .enumerate()
            .map(|(position, byte)| {
                let row = pad.row(position);
                char::from(row[usize::from(byte - ALPHABET_START)])
            })
            .collect();
        Ok(encoded)
    }

    /// Decodes a substituted message back to the original alphabet.
    ///
    /// Accepts either an encoded string or a raw sequence of integer codes.
    /// Each code is searched in its position's row; codes absent from the
    /// row (never producible by [`PadCipher::encode`] under this pad) decode
    /// to `_` rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MissingPad`] when no pad is held or the held
    /// pad has no rows.
    pub fn decode<M: AsRef<[u8]>>(&self, message: M) -> Result<String> {
        let pad = self.usable_pad()?;
        let decoded = message
            .as_ref()
            .iter()
            .enumerate()
            .map(|(position, &code)| {
                let row = pad.row(position);
                row.iter()
                    .position(|&candidate| candidate == code)
                    .map_or(REPLACEMENT, |offset| ALPHABET_START + offset as u8)
            })
            .map(char::from)
            .collect();
        Ok(decoded)
    }

    fn usable_pad(&self) -> Result<&Pad> {
        match &self.pad {
            Some(pad) if !pad.is_empty() => Ok(pad),
            _ => Err(CipherError::MissingPad),
        }
    }
}

impl Default for PadCipher {
    fn default() -> Self {
        Self::new()
    }
}

/// Projects one character onto the alphabet.
///
/// Non-ASCII characters become the replacement byte; ASCII characters keep
/// their code, clamped into the printable range. Clamping (rather than
/// replacement) for out-of-range ASCII is deliberate and matches decode's
/// inverse only on the printable range.
fn normalize(c: char) -> u8 {
    if c.is_ascii() {
        (c as u8).clamp(ALPHABET_START, ALPHABET_END)
    } else {
        REPLACEMENT
    }
}
