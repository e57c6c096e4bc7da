//! Sorted key/value map for integer-to-integer relations.
//!
//! A finite relation is stored as two parallel arrays ordered by key, so a
//! lookup is one binary search with no per-entry overhead and the whole
//! structure embeds as two flat literals. A missing key is reported as
//! `None`; whether that means "folds to itself" or "no matching bracket" is
//! the caller's contract.

use crate::CatpackError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMap {
    keys: Vec<u32>,
    values: Vec<u32>,
}

impl PairMap {
    /// Build from (key, value) pairs in any order. Fails with
    /// `ValueOutOfRange` if a key appears twice.
    pub fn new(pairs: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, CatpackError> {
        let mut pairs: Vec<(u32, u32)> = pairs.into_iter().collect();
        pairs.sort_unstable_by_key(|&(k, _)| k);
        for w in pairs.windows(2) {
            if w[0].0 == w[1].0 {
                return Err(CatpackError::ValueOutOfRange(format!(
                    "duplicate key {}",
                    w[0].0
                )));
            }
        }
        let (keys, values) = pairs.into_iter().unzip();
        Ok(Self { keys, values })
    }

    /// Build from parallel arrays already ordered by key, the shape an
    /// embedded literal pair arrives in. Validates the lengths match and the
    /// keys strictly increase.
    pub fn from_parallel(keys: Vec<u32>, values: Vec<u32>) -> Result<Self, CatpackError> {
        if keys.len() != values.len() {
            return Err(CatpackError::MalformedDecodeInput(format!(
                "{} keys but {} values",
                keys.len(),
                values.len()
            )));
        }
        for (i, w) in keys.windows(2).enumerate() {
            if w[0] >= w[1] {
                return Err(CatpackError::NotSorted(format!(
                    "key {} at index {} does not increase on {}",
                    w[1],
                    i + 1,
                    w[0]
                )));
            }
        }
        Ok(Self { keys, values })
    }

    /// The value mapped to `key`, or `None` if the relation has no entry.
    pub fn get(&self, key: u32) -> Option<u32> {
        self.keys.binary_search(&key).ok().map(|i| self.values[i])
    }

    pub fn contains_key(&self, key: u32) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The ordered key array, as it would be embedded.
    pub fn keys(&self) -> &[u32] {
        &self.keys
    }

    /// The value array, parallel to [`keys`](Self::keys).
    pub fn values(&self) -> &[u32] {
        &self.values
    }
}
