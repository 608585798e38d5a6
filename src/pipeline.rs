use crate::card::Record;
use crate::error::{PrepError, PrepResult};
use crate::images::ImageFetcher;
use crate::registry::SetRegistry;
use crate::{card, catalog, deck, strip};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Read one catalog file: a JSON array of record objects.
pub fn read_records(path: &Path) -> PrepResult<Vec<Record>> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Persist records as a UTF-8 JSON array with 2-space indentation. The body
/// is serialized fully before the file is touched, so a failure cannot
/// clobber the previous contents.
pub fn write_records(path: &Path, records: &[Record]) -> PrepResult<()> {
    let body = serde_json::to_string_pretty(records)?;
    fs::write(path, body)?;
    Ok(())
}

/// The filename stem is the set code (`base1.json` -> `base1`).
pub fn set_code_of(path: &Path) -> PrepResult<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| PrepError::MalformedReference(path.display().to_string()))
}

/// Every `*.json` file under `dir`, recursively, in sorted path order so a
/// batch visits files identically across runs.
pub fn json_files(dir: &Path) -> PrepResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_json_files(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> PrepResult<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path);
        }
    }
    Ok(())
}

/// Assign global IDs and strip unused fields in one per-set card file,
/// rewriting it in place.
pub fn process_card_file(path: &Path, registry: &SetRegistry) -> PrepResult<()> {
    let set_code = set_code_of(path)?;
    let offset = registry.lookup(&set_code)?;
    let mut records = read_records(path)?;
    card::assign_all(&mut records, offset);
    strip::strip_all(&mut records);
    write_records(path, &records)?;
    info!("updated ids in {}", path.display());
    Ok(())
}

/// Rewrite deck IDs and card references in one deck file, in place.
pub fn process_deck_file(path: &Path, registry: &SetRegistry, deck_offset: i64) -> PrepResult<()> {
    let mut decks = read_records(path)?;
    deck::assign_all(&mut decks, registry, deck_offset);
    write_records(path, &decks)?;
    info!("processed decks in {}", path.display());
    Ok(())
}

/// Strip unused fields from every card file under `dir`, without touching
/// IDs.
pub fn strip_card_dir(dir: &Path) -> PrepResult<()> {
    for path in json_files(dir)? {
        let outcome = read_records(&path).and_then(|mut records| {
            strip::strip_all(&mut records);
            write_records(&path, &records)
        });
        if let Err(e) = outcome {
            error!("skipping {}: {}", path.display(), e);
        }
    }
    Ok(())
}

/// Process every per-set card file under `dir`. A file-level failure is
/// logged and the batch continues with the next file.
pub fn process_card_dir(dir: &Path, registry: &SetRegistry) -> PrepResult<()> {
    for path in json_files(dir)? {
        if let Err(e) = process_card_file(&path, registry) {
            error!("skipping {}: {}", path.display(), e);
        }
    }
    Ok(())
}

/// Process every deck file under `dir`.
pub fn process_deck_dir(dir: &Path, registry: &SetRegistry, deck_offset: i64) -> PrepResult<()> {
    for path in json_files(dir)? {
        if let Err(e) = process_deck_file(&path, registry, deck_offset) {
            error!("skipping {}: {}", path.display(), e);
        }
    }
    Ok(())
}

/// Rebuild the master catalog from every per-set file under `input_dir` and
/// overwrite `output_path` with it.
pub fn write_master_catalog(input_dir: &Path, output_path: &Path) -> PrepResult<()> {
    let mut inputs = Vec::new();
    for path in json_files(input_dir)? {
        if path.as_path() == output_path {
            continue;
        }
        let set_code = set_code_of(&path)?;
        match read_records(&path) {
            Ok(records) => inputs.push((set_code, records)),
            Err(e) => error!("excluding {} from master catalog: {}", path.display(), e),
        }
    }
    let master = catalog::merge(inputs);
    write_records(output_path, &master)?;
    info!(
        "master catalog written to {} ({} records)",
        output_path.display(),
        master.len()
    );
    Ok(())
}

/// Download artwork for every set file under `dir` into `output_root`. Fetch
/// failures skip that image; file failures skip that file.
pub fn fetch_images(dir: &Path, output_root: &Path) -> PrepResult<()> {
    let fetcher = ImageFetcher::new();
    for path in json_files(dir)? {
        let set_code = set_code_of(&path)?;
        match read_records(&path) {
            Ok(records) => {
                if let Err(e) = fetcher.fetch_set_images(&records, &set_code, output_root) {
                    error!("failed to fetch images for {}: {}", set_code, e);
                }
            }
            Err(e) => error!("skipping {}: {}", path.display(), e),
        }
    }
    Ok(())
}
