//! Offline data-preparation pipeline for the NeoTCG card asset database.
//!
//! Normalizes per-set card catalogs stored as JSON, assigns globally unique
//! numeric IDs to cards and decks from a static set registry, rewrites the
//! composite references inside deck files to those same IDs, strips unused
//! fields, merges the per-set catalogs into one ID-sorted master catalog and
//! fetches the referenced card artwork.

pub mod card;
pub mod catalog;
pub mod deck;
pub mod error;
pub mod id;
pub mod images;
pub mod pipeline;
pub mod registry;
pub mod settings;
pub mod strip;

pub use card::Record;
pub use error::{PrepError, PrepResult};
pub use id::{CardReference, GlobalId};
pub use images::ImageFetcher;
pub use registry::SetRegistry;
pub use settings::PrepSettings;
