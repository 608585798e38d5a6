use crate::card::Record;

/// Field names removed from every card record before it is persisted. The
/// game client never reads these, so they only bloat the asset database.
pub const STRIPPED_CARD_FIELDS: &[&str] = &[
    "level",
    "artist",
    "flavorText",
    "legalities",
    "nationalPokedexNumbers",
];

/// Fields dropped from a deck's card entries once the composite reference is
/// resolved; the master catalog is the source of truth for them.
pub const STRIPPED_DECK_ENTRY_FIELDS: &[&str] = &["rarity", "name"];

/// Remove the unused fields from one card record.
pub fn strip_record(record: &mut Record) {
    for field in STRIPPED_CARD_FIELDS {
        record.remove(*field);
    }
}

/// Remove the redundant fields from one deck card entry.
pub fn strip_deck_entry(entry: &mut Record) {
    for field in STRIPPED_DECK_ENTRY_FIELDS {
        entry.remove(*field);
    }
}

/// Strip every record in a set file.
pub fn strip_all(records: &mut [Record]) {
    for record in records.iter_mut() {
        strip_record(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_record_removes_only_listed_fields() {
        let mut record = json!({
            "id": "1004",
            "name": "Charizard",
            "level": "76",
            "artist": "Mitsuhiro Arita",
            "flavorText": "Spits fire.",
            "legalities": {"unlimited": "Legal"},
            "nationalPokedexNumbers": [6],
            "rarity": "Rare Holo"
        })
        .as_object()
        .unwrap()
        .clone();
        strip_record(&mut record);
        assert_eq!(record.len(), 3);
        assert!(record.contains_key("id"));
        assert!(record.contains_key("name"));
        assert!(record.contains_key("rarity"));
    }

    #[test]
    fn test_strip_missing_fields_is_a_no_op() {
        let mut record = json!({"id": "1004"}).as_object().unwrap().clone();
        strip_record(&mut record);
        assert_eq!(record.len(), 1);
    }
}
