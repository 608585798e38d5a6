use crate::card::Record;
use crate::error::{PrepError, PrepResult};
use crate::id::{CardReference, GlobalId};
use crate::registry::SetRegistry;
use crate::strip::strip_deck_entry;
use log::warn;
use serde_json::Value;

/// Rewrite a deck's own `id` from its `<prefix>-<setCode>-<ordinal>` form to
/// a global deck ID: set offset + deck offset + deck ordinal. `deck_offset`
/// is a single run-level constant, not per-set.
pub fn assign_deck_id(
    deck: &mut Record,
    registry: &SetRegistry,
    deck_offset: i64,
) -> PrepResult<GlobalId> {
    let raw = match deck.get("id").and_then(Value::as_str) {
        Some(raw) => raw.to_string(),
        None => {
            return Err(PrepError::MalformedReference(
                "deck id missing or not a string".to_string(),
            ))
        }
    };
    let reference = CardReference::parse_deck_id(&raw)?;
    let offset = registry.lookup(&reference.set_code)?;
    let id = GlobalId(offset + deck_offset + reference.ordinal);
    deck.insert("id".to_string(), Value::String(id.to_string()));
    Ok(id)
}

/// Rewrite every composite card reference inside a deck's card list to the
/// resolved global card ID, and drop the redundant `rarity`/`name` fields
/// from each rewritten entry. A malformed reference or unknown set skips that
/// one entry, leaving it unmodified, and the rest of the list proceeds.
pub fn rewrite_card_refs(deck: &mut Record, registry: &SetRegistry) {
    let Some(cards) = deck.get_mut("cards").and_then(Value::as_array_mut) else {
        return;
    };
    for entry in cards {
        let Some(card) = entry.as_object_mut() else {
            continue;
        };
        match rewrite_entry(card, registry) {
            Ok(()) => strip_deck_entry(card),
            Err(e) => warn!("skipping card reference: {}", e),
        }
    }
}

fn rewrite_entry(card: &mut Record, registry: &SetRegistry) -> PrepResult<()> {
    let Some(raw) = card.get("id").and_then(Value::as_str).map(str::to_string) else {
        return Ok(());
    };
    let id = CardReference::parse_card(&raw)?.resolve(registry)?;
    card.insert("id".to_string(), Value::String(id.to_string()));
    Ok(())
}

/// Process every deck in a file: deck ID first, then the card list. Failures
/// are logged per record and never halt the file.
pub fn assign_all(decks: &mut [Record], registry: &SetRegistry, deck_offset: i64) {
    for deck in decks.iter_mut() {
        if let Err(e) = assign_deck_id(deck, registry, deck_offset) {
            warn!("skipping deck id rewrite: {}", e);
        }
        rewrite_card_refs(deck, registry);
    }
}
