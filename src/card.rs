use crate::error::{PrepError, PrepResult};
use crate::id::GlobalId;
use log::warn;
use serde_json::{Map, Value};

/// JSON object type shared by every record in the pipeline. Records are
/// schemaless: the core interprets only `number`, `id` and `images`, and
/// passes every other field through untouched.
pub type Record = Map<String, Value>;

/// Assign a card's global ID from its set offset and its own `number` field,
/// overwriting the record's `id` in place. When `number` is absent or not a
/// valid integer the card's 1-based position in its file is used instead, and
/// a diagnostic is emitted so the reassignment is auditable. Never fails, so
/// one bad record cannot halt the rest of the file.
pub fn assign(card: &mut Record, offset: i64, fallback_ordinal: i64) -> GlobalId {
    let ordinal = match card.get("number") {
        Some(number) => match declared_ordinal(number) {
            Ok(ordinal) => ordinal,
            Err(e) => {
                warn!("{}, using file position {}", e, fallback_ordinal);
                fallback_ordinal
            }
        },
        None => {
            warn!(
                "card has no number field, using file position {}",
                fallback_ordinal
            );
            fallback_ordinal
        }
    };
    let id = GlobalId(offset + ordinal);
    card.insert("id".to_string(), Value::String(id.to_string()));
    id
}

/// Assign global IDs to every card in a set file, threading the explicit
/// 1-based file position as the fallback ordinal.
pub fn assign_all(records: &mut [Record], offset: i64) {
    for (index, card) in records.iter_mut().enumerate() {
        assign(card, offset, (index + 1) as i64);
    }
}

/// Parse a card's declared `number` field as an in-set ordinal. The field is
/// usually a JSON string, occasionally a bare number; anything else is a
/// malformed ordinal, which the assigner answers with the positional
/// fallback rather than a failure.
pub fn declared_ordinal(number: &Value) -> PrepResult<i64> {
    match number {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| PrepError::MalformedOrdinal(number.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| PrepError::MalformedOrdinal(s.clone())),
        other => Err(PrepError::MalformedOrdinal(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_assign_from_number_field() {
        let mut card = record(json!({"name": "Charizard", "number": "4"}));
        let id = assign(&mut card, 1000, 7);
        assert_eq!(id, GlobalId(1004));
        assert_eq!(card["id"], json!("1004"));
        // Only `id` is touched.
        assert_eq!(card["name"], json!("Charizard"));
        assert_eq!(card["number"], json!("4"));
    }

    #[test]
    fn test_assign_accepts_bare_json_number() {
        let mut card = record(json!({"number": 12}));
        assert_eq!(assign(&mut card, 2000, 1), GlobalId(2012));
    }

    #[test]
    fn test_assign_falls_back_on_non_numeric_number() {
        let mut card = record(json!({"number": "forty"}));
        let id = assign(&mut card, 1000, 3);
        assert_eq!(id, GlobalId(1003));
        assert_eq!(card["id"], json!("1003"));
    }

    #[test]
    fn test_assign_falls_back_on_missing_number() {
        let mut card = record(json!({"name": "Promo"}));
        assert_eq!(assign(&mut card, 16_000, 2), GlobalId(16_002));
        assert_eq!(card["id"], json!("16002"));
    }

    #[test]
    fn test_assign_all_uses_one_based_positions() {
        let mut records = vec![
            record(json!({"number": "10"})),
            record(json!({"number": "bad"})),
            record(json!({})),
        ];
        assign_all(&mut records, 1000);
        assert_eq!(records[0]["id"], json!("1010"));
        assert_eq!(records[1]["id"], json!("1002"));
        assert_eq!(records[2]["id"], json!("1003"));
    }

    #[test]
    fn test_declared_ordinal_rejects_non_integers() {
        assert!(matches!(
            declared_ordinal(&json!("forty")),
            Err(PrepError::MalformedOrdinal(_))
        ));
        assert!(matches!(
            declared_ordinal(&json!(4.5)),
            Err(PrepError::MalformedOrdinal(_))
        ));
        assert_eq!(declared_ordinal(&json!("47")).unwrap(), 47);
        assert_eq!(declared_ordinal(&json!(47)).unwrap(), 47);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut records = vec![record(json!({"number": "4"})), record(json!({"number": "9"}))];
        assign_all(&mut records, 1000);
        let first_pass = records.clone();
        assign_all(&mut records, 1000);
        assert_eq!(records, first_pass);
    }
}
