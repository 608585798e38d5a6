use crate::error::{PrepError, PrepResult};
use crate::registry::SetRegistry;
use std::fmt;

/// A numeric identifier unique across the entire merged catalog, computed as
/// a set's reserved offset plus an in-set ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalId(pub i64);

impl GlobalId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for GlobalId {
    /// Canonical string form: zero-padded to four digits while the value
    /// fits, natural decimal beyond that. Every producer in the pipeline
    /// (card assigner, reference rewriter, deck assigner) emits this one
    /// format, so resolved references compare equal to assigned IDs as
    /// strings as well as numerically.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9_999).contains(&self.0) {
            write!(f, "{:04}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A parsed composite reference: a set code plus an in-set ordinal.
///
/// Both composite-key shapes in the data funnel through the two parsers here
/// rather than being re-split ad hoc at each call site. Set codes containing
/// the `-` separator are tolerated: the ordinal is always the last segment
/// and the prefix rule of each shape pins down the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardReference {
    pub set_code: String,
    pub ordinal: i64,
}

impl CardReference {
    /// Parse a `<setCode>-<ordinal>` reference, the shape used by card
    /// entries inside a deck's card list.
    pub fn parse_card(raw: &str) -> PrepResult<Self> {
        let segments: Vec<&str> = raw.split('-').collect();
        if segments.len() < 2 {
            return Err(PrepError::MalformedReference(raw.to_string()));
        }
        Ok(Self {
            set_code: segments[..segments.len() - 1].join("-"),
            ordinal: parse_ordinal_segment(raw, segments[segments.len() - 1])?,
        })
    }

    /// Parse a `<prefix>-<setCode>-<ordinal>` reference, the shape used by a
    /// deck's own `id` field. The leading segment is discarded.
    pub fn parse_deck_id(raw: &str) -> PrepResult<Self> {
        let segments: Vec<&str> = raw.split('-').collect();
        if segments.len() < 3 {
            return Err(PrepError::MalformedReference(raw.to_string()));
        }
        Ok(Self {
            set_code: segments[1..segments.len() - 1].join("-"),
            ordinal: parse_ordinal_segment(raw, segments[segments.len() - 1])?,
        })
    }

    /// Resolve this reference to the same global ID the card assigner would
    /// have produced for the referenced card.
    pub fn resolve(&self, registry: &SetRegistry) -> PrepResult<GlobalId> {
        let offset = registry.lookup(&self.set_code)?;
        Ok(GlobalId(offset + self.ordinal))
    }
}

fn parse_ordinal_segment(raw: &str, segment: &str) -> PrepResult<i64> {
    segment
        .parse::<i64>()
        .map_err(|_| PrepError::MalformedReference(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_id_padding() {
        assert_eq!(GlobalId(1004).to_string(), "1004");
        assert_eq!(GlobalId(47).to_string(), "0047");
        assert_eq!(GlobalId(18_500).to_string(), "18500");
    }

    #[test]
    fn test_parse_card_reference() {
        let reference = CardReference::parse_card("base1-47").unwrap();
        assert_eq!(reference.set_code, "base1");
        assert_eq!(reference.ordinal, 47);
    }

    #[test]
    fn test_parse_card_reference_hyphenated_set_code() {
        let reference = CardReference::parse_card("neo-destiny-12").unwrap();
        assert_eq!(reference.set_code, "neo-destiny");
        assert_eq!(reference.ordinal, 12);
    }

    #[test]
    fn test_parse_deck_id() {
        let reference = CardReference::parse_deck_id("dp-base1-2").unwrap();
        assert_eq!(reference.set_code, "base1");
        assert_eq!(reference.ordinal, 2);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(matches!(
            CardReference::parse_card("base1"),
            Err(PrepError::MalformedReference(_))
        ));
        assert!(matches!(
            CardReference::parse_card("base1-four"),
            Err(PrepError::MalformedReference(_))
        ));
        assert!(matches!(
            CardReference::parse_deck_id("base1-2"),
            Err(PrepError::MalformedReference(_))
        ));
    }

    #[test]
    fn test_resolve() {
        let registry: SetRegistry = [("base1", 1000)].into_iter().collect();
        let id = CardReference::parse_card("base1-47")
            .unwrap()
            .resolve(&registry)
            .unwrap();
        assert_eq!(id, GlobalId(1047));
        assert_eq!(id.to_string(), "1047");
    }

    #[test]
    fn test_resolve_unknown_set() {
        let registry: SetRegistry = [("base1", 1000)].into_iter().collect();
        let err = CardReference::parse_card("unknownset-7")
            .unwrap()
            .resolve(&registry)
            .unwrap_err();
        assert!(matches!(err, PrepError::UnknownSet(_)));
    }
}
