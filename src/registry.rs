use crate::error::{PrepError, PrepResult};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Reserved ID ranges for the classic sets. Offsets are strictly increasing;
/// ranges are non-overlapping by convention (the maximum ordinal within a set
/// must stay below the next set's offset, which is maintained by hand, not
/// checked here).
static CLASSIC_SET_OFFSETS: Lazy<IndexMap<String, i64>> = Lazy::new(|| {
    [
        ("base1", 1_000),
        ("base2", 2_000),
        ("base3", 3_000),
        ("base4", 4_000),
        ("base5", 5_000),
        ("base6", 6_000),
        ("gym1", 7_000),
        ("gym2", 8_000),
        ("neo1", 9_000),
        ("neo2", 10_000),
        ("neo3", 11_000),
        ("neo4", 12_000),
        ("ecard1", 13_000),
        ("ecard2", 14_000),
        ("ecard3", 15_000),
        ("basep", 16_000),
        ("bp", 17_000),
        ("si1", 18_000),
    ]
    .into_iter()
    .map(|(code, offset)| (code.to_string(), offset))
    .collect()
});

/// Static table mapping a set's short code to its reserved numeric ID offset.
///
/// Supplied at run configuration time and read-only for the lifetime of a run;
/// every ID computation in the pipeline is a pure function of an offset from
/// this table plus an in-set ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetRegistry {
    offsets: IndexMap<String, i64>,
}

impl SetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            offsets: IndexMap::new(),
        }
    }

    /// The production registry covering the classic sets.
    pub fn classic() -> Self {
        Self {
            offsets: CLASSIC_SET_OFFSETS.clone(),
        }
    }

    /// Register a set's reserved offset.
    pub fn insert(&mut self, set_code: impl Into<String>, offset: i64) {
        self.offsets.insert(set_code.into(), offset);
    }

    /// Look up a set's reserved offset.
    pub fn lookup(&self, set_code: &str) -> PrepResult<i64> {
        self.offsets
            .get(set_code)
            .copied()
            .ok_or_else(|| PrepError::UnknownSet(set_code.to_string()))
    }

    /// Registered set codes, in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.offsets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for SetRegistry {
    fn default() -> Self {
        Self::classic()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for SetRegistry {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            offsets: iter
                .into_iter()
                .map(|(code, offset)| (code.into(), offset))
                .collect(),
        }
    }
}
