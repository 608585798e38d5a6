use crate::card::Record;
use crate::error::PrepError;
use log::error;
use serde_json::Value;

/// Merge per-set card catalogs into one master catalog: tag every record
/// with its origin set code, concatenate, and sort ascending by the numeric
/// value of `id`.
///
/// The set code comes from the input pairing (derived from each file's name
/// by the caller), not from record contents, so the merge does not depend on
/// the ID assigner having run first. A record whose `id` is non-numeric is
/// excluded from the merge and reported; the rest of its file still merges.
/// The sort is stable, so supplying inputs in sorted filename order makes
/// reruns byte-identical even when IDs collide.
pub fn merge(inputs: Vec<(String, Vec<Record>)>) -> Vec<Record> {
    let mut combined: Vec<(i64, Record)> = Vec::new();
    for (set_code, records) in inputs {
        for mut record in records {
            match numeric_id(&record, &set_code) {
                Ok(id) => {
                    record.insert("setCode".to_string(), Value::String(set_code.clone()));
                    combined.push((id, record));
                }
                Err(e) => error!("excluding record from master catalog: {}", e),
            }
        }
    }
    combined.sort_by_key(|(id, _)| *id);
    combined.into_iter().map(|(_, record)| record).collect()
}

fn numeric_id(record: &Record, set_code: &str) -> Result<i64, PrepError> {
    let parsed = match record.get("id") {
        Some(Value::String(s)) => s.parse::<i64>().ok(),
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    };
    parsed.ok_or_else(|| PrepError::InvalidCatalogEntry {
        set_code: set_code.to_string(),
        id: record
            .get("id")
            .map(|id| id.to_string())
            .unwrap_or_else(|| "<missing>".to_string()),
    })
}
