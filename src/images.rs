use crate::card::Record;
use crate::error::PrepResult;
use log::warn;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Downloads card artwork referenced by URL into a directory tree keyed by
/// the already-assigned global IDs. One synchronous request at a time, no
/// retries: a failed fetch is logged and leaves no file at the target path.
pub struct ImageFetcher {
    client: Client,
}

impl ImageFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// GET `url` and write the body to `dest`. The file exists iff the
    /// request succeeded.
    pub fn fetch(&self, url: &str, dest: &Path) -> PrepResult<()> {
        let body = self.client.get(url).send()?.error_for_status()?.bytes()?;
        fs::write(dest, &body)?;
        Ok(())
    }

    /// Fetch the small and large artwork for every record in one set.
    /// Records must carry their final global `id`; it names the files
    /// (`<id>.png` and `<id>-hd.png`).
    pub fn fetch_set_images(
        &self,
        records: &[Record],
        set_code: &str,
        output_root: &Path,
    ) -> PrepResult<()> {
        let small_dir = output_root.join(set_code).join("Small");
        let large_dir = output_root.join(set_code).join("Large");
        fs::create_dir_all(&small_dir)?;
        fs::create_dir_all(&large_dir)?;

        for record in records {
            let Some(id) = record.get("id").and_then(Value::as_str) else {
                warn!("card in set {} has no id, skipping artwork", set_code);
                continue;
            };
            let Some(images) = record.get("images").and_then(Value::as_object) else {
                continue;
            };
            if let Some(url) = images.get("small").and_then(Value::as_str) {
                let dest = small_dir.join(format!("{}.png", id));
                if let Err(e) = self.fetch(url, &dest) {
                    warn!("failed to fetch {}: {}", url, e);
                }
            }
            if let Some(url) = images.get("large").and_then(Value::as_str) {
                let dest = large_dir.join(format!("{}-hd.png", id));
                if let Err(e) = self.fetch(url, &dest) {
                    warn!("failed to fetch {}: {}", url, e);
                }
            }
        }
        Ok(())
    }
}

impl Default for ImageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
