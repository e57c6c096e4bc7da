//! catpack: compact compressed tables for Unicode character classes
//!
//! Unicode category data is bulky: a single general category can span tens of
//! thousands of code points. This crate packs a sorted code-point set into a
//! (dictionary, symbol string) pair small enough to live as a literal inside
//! compiled code, and reconstructs the set (or a constant-time membership
//! structure) from that pair. A sorted key/value pair map covers the other
//! table shape such data needs: integer-to-integer relations like case
//! folding and bracket pairing.
//!
//! Everything here is a pure function over immutable input. Encoding runs
//! once, offline; decoded tables are immutable after construction and can be
//! shared across threads without synchronization.

pub mod brackets;
pub mod category;
pub mod classes;
pub mod escape;
pub mod pair_map;
pub mod range_codec;

use std::fmt;

pub use category::Category;
pub use escape::EscapeStyle;
pub use pair_map::PairMap;
pub use range_codec::{compose, decode, encode, Encoded};

/// Errors that can occur while encoding or decoding tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatpackError {
    NotSorted(String),
    ValueOutOfRange(String),
    MalformedDecodeInput(String),
}

impl fmt::Display for CatpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatpackError::NotSorted(msg) => write!(f, "input not sorted: {}", msg),
            CatpackError::ValueOutOfRange(msg) => write!(f, "value out of range: {}", msg),
            CatpackError::MalformedDecodeInput(msg) => {
                write!(f, "malformed decode input: {}", msg)
            }
        }
    }
}

impl std::error::Error for CatpackError {}
