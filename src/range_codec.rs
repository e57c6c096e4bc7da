//! Range-set codec: packs a sorted set of code points into a (dictionary,
//! symbol string) pair and reconstructs the set from that pair.
//!
//! # How it works
//!
//! The set is first reduced to its run-length view: maximal contiguous runs
//! of code points. A running cursor starts at 0, and each run contributes two
//! deltas, the gap from the cursor to the run's first code point and then the
//! run's length, after which the cursor sits on the run's last code point.
//! A ten-thousand-entry run collapses to two small numbers.
//!
//! Category data repeats the same deltas constantly (runs of letters broken
//! by single combining marks, alternating-case letter pairs, and so on), so
//! the distinct delta values are ranked by how often they occur and the
//! stream is rewritten as dictionary indices. Index 0 goes to the single most
//! common delta, ties broken by ascending value. Each index is shifted up by
//! 32 so the stream lands in printable ASCII and can be embedded as a string
//! literal (see [`crate::escape`] for the characters that still need help).
//!
//! # The U+FFFF boundary
//!
//! The delta stream cannot address code points above U+FFFF. When the encoder
//! is about to consume a value past that boundary it emits one final delta
//! that parks the cursor exactly on 65535 and stops; every remaining value is
//! dropped and counted in [`Encoded::dropped`]. A run that crosses the
//! boundary is clipped at 65535. Decoding is therefore an exact inverse only
//! for sets fully inside the Basic Multilingual Plane.

use rustc_hash::FxHashMap;

use crate::escape::{self, EscapeStyle};
use crate::CatpackError;

/// Highest code point the delta stream can address.
pub const BMP_MAX: u32 = 0xFFFF;

/// Highest valid Unicode code point accepted by the encoder.
pub const UNICODE_MAX: u32 = 0x10FFFF;

/// Offset added to dictionary indices so symbols start at ASCII space.
pub const SYMBOL_BASE: u32 = 32;

/// Largest dictionary whose indices still fit in a byte after the shift.
pub const MAX_DICTIONARY: usize = (0xFF - SYMBOL_BASE as usize) + 1;

/// The encoded form of a code-point set: two artifacts ready to embed as
/// source literals, plus a record of anything the U+FFFF boundary dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// Distinct delta values, most frequent first.
    pub dictionary: Vec<u32>,
    /// One byte per delta: its dictionary index plus [`SYMBOL_BASE`]. Raw,
    /// not yet escaped for embedding.
    pub symbols: Vec<u8>,
    /// Count of input code points above U+FFFF discarded by the sentinel.
    pub dropped: usize,
}

impl Encoded {
    /// True when the input reached past U+FFFF and lost code points.
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// Reconstruct the (possibly truncated) code-point set.
    pub fn decode(&self) -> Result<Vec<u32>, CatpackError> {
        decode(&self.dictionary, &self.symbols)
    }

    /// Render the symbol string as the body of a double-quoted literal.
    pub fn literal(&self, style: EscapeStyle) -> String {
        escape::escape(&self.symbols, style)
    }
}

/// Encode a strictly increasing sequence of code points.
///
/// Fails with `NotSorted` if the input is not strictly increasing and with
/// `ValueOutOfRange` if a value exceeds U+10FFFF, or if the stream needs more
/// distinct deltas than a byte-sized symbol can index (never the case for
/// real category data).
pub fn encode(set: &[u32]) -> Result<Encoded, CatpackError> {
    validate(set)?;
    let (deltas, dropped) = delta_stream(set);
    let dictionary = rank_by_frequency(&deltas);
    if dictionary.len() > MAX_DICTIONARY {
        return Err(CatpackError::ValueOutOfRange(format!(
            "{} distinct deltas exceed the {} a byte-sized symbol can index",
            dictionary.len(),
            MAX_DICTIONARY
        )));
    }
    let index: FxHashMap<u32, u8> = dictionary
        .iter()
        .enumerate()
        .map(|(i, &d)| (d, i as u8 + SYMBOL_BASE as u8))
        .collect();
    let symbols = deltas.iter().map(|d| index[d]).collect();
    Ok(Encoded {
        dictionary,
        symbols,
        dropped,
    })
}

/// Reconstruct a code-point set from a dictionary and raw symbol bytes.
///
/// Never fails on pairs produced by [`encode`]; fails fast with
/// `MalformedDecodeInput` when a symbol is below the shift base or indexes
/// past the end of the dictionary.
pub fn decode(dictionary: &[u32], symbols: &[u8]) -> Result<Vec<u32>, CatpackError> {
    let bounds = cumulative(dictionary, symbols.iter().map(|&b| b as u32))?;
    Ok(expand(&bounds))
}

/// [`decode`] for a symbol string stored as text, one symbol per character.
/// The text must already be unescaped (see [`crate::escape::unescape`]).
pub fn decode_str(dictionary: &[u32], symbols: &str) -> Result<Vec<u32>, CatpackError> {
    let bounds = cumulative(dictionary, symbols.chars().map(|c| c as u32))?;
    Ok(expand(&bounds))
}

/// Union several sorted-or-not code-point sequences into one strictly
/// increasing sequence, ready for [`encode`]. Composite classes (word
/// characters, identifier characters) are built this way from category sets.
pub fn compose(sets: &[&[u32]]) -> Vec<u32> {
    let mut all: Vec<u32> = sets.iter().flat_map(|s| s.iter().copied()).collect();
    all.sort_unstable();
    all.dedup();
    all
}

/// The run-length view of a sorted set: maximal contiguous inclusive ranges.
pub fn runs(set: &[u32]) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut iter = set.iter().copied();
    let Some(first) = iter.next() else {
        return out;
    };
    let (mut lo, mut hi) = (first, first);
    for cp in iter {
        if cp == hi + 1 {
            hi = cp;
        } else {
            out.push((lo, hi));
            lo = cp;
            hi = cp;
        }
    }
    out.push((lo, hi));
    out
}

fn validate(set: &[u32]) -> Result<(), CatpackError> {
    for (i, &cp) in set.iter().enumerate() {
        if cp > UNICODE_MAX {
            return Err(CatpackError::ValueOutOfRange(format!(
                "code point {:#x} at index {} is above U+10FFFF",
                cp, i
            )));
        }
        if i > 0 && set[i - 1] >= cp {
            return Err(CatpackError::NotSorted(format!(
                "{} at index {} does not increase on {}",
                cp,
                i,
                set[i - 1]
            )));
        }
    }
    Ok(())
}

/// Rewrite a validated set as alternating gap/run-length deltas, stopping at
/// the U+FFFF sentinel. Returns the stream and the count of dropped values.
///
/// Truncation at the gap position leaves the stream odd-length; the dangling
/// cumulative entry decodes to nothing. Truncation mid-run clips the run at
/// 65535 and the clipped length completes the pair.
fn delta_stream(set: &[u32]) -> (Vec<u32>, usize) {
    let mut deltas = Vec::new();
    let mut cursor: u32 = 0;
    let mut idx = 0;
    while idx < set.len() {
        let mut j = set[idx];
        if j > BMP_MAX {
            deltas.push(BMP_MAX - cursor);
            return (deltas, set.len() - idx);
        }
        idx += 1;
        deltas.push(j - cursor);
        cursor = j;
        while idx < set.len() && set[idx] == j + 1 {
            j = set[idx];
            idx += 1;
        }
        if j > BMP_MAX {
            deltas.push(BMP_MAX - cursor);
            return (deltas, (j - BMP_MAX) as usize + (set.len() - idx));
        }
        deltas.push(j - cursor);
        cursor = j;
    }
    (deltas, 0)
}

/// Distinct delta values ordered by descending frequency, ties broken by
/// ascending value. Index 0, the cheapest symbol, lands on the delta the
/// stream repeats most.
fn rank_by_frequency(deltas: &[u32]) -> Vec<u32> {
    let mut hist: FxHashMap<u32, usize> = FxHashMap::default();
    for &d in deltas {
        *hist.entry(d).or_insert(0) += 1;
    }
    let mut dictionary: Vec<u32> = hist.keys().copied().collect();
    dictionary.sort_unstable_by(|a, b| hist[b].cmp(&hist[a]).then_with(|| a.cmp(b)));
    dictionary
}

/// Cumulative-sum a symbol stream back into run bounds. Shared by [`decode`]
/// and [`crate::category::Category`], which keeps the bounds instead of
/// expanding them.
pub(crate) fn cumulative<I>(dictionary: &[u32], symbols: I) -> Result<Vec<u32>, CatpackError>
where
    I: IntoIterator<Item = u32>,
{
    let mut bounds = Vec::new();
    let mut cursor: u32 = 0;
    for (i, s) in symbols.into_iter().enumerate() {
        let idx = s.checked_sub(SYMBOL_BASE).ok_or_else(|| {
            CatpackError::MalformedDecodeInput(format!(
                "symbol {} at offset {} is below the shift base",
                s, i
            ))
        })?;
        let delta = dictionary.get(idx as usize).copied().ok_or_else(|| {
            CatpackError::MalformedDecodeInput(format!(
                "symbol at offset {} indexes dictionary entry {} of {}",
                i,
                idx,
                dictionary.len()
            ))
        })?;
        cursor = cursor.checked_add(delta).ok_or_else(|| {
            CatpackError::MalformedDecodeInput(format!(
                "cumulative cursor overflows at offset {}",
                i
            ))
        })?;
        bounds.push(cursor);
    }
    Ok(bounds)
}

/// Expand run bounds into the full member list. A dangling odd entry is the
/// gap-position truncation sentinel and contributes nothing.
fn expand(bounds: &[u32]) -> Vec<u32> {
    let mut out = Vec::new();
    for pair in bounds.chunks_exact(2) {
        for cp in pair[0]..=pair[1] {
            out.push(cp);
        }
    }
    out
}
