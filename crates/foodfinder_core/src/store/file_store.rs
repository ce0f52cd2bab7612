//! JSON-lines implementation of [`RestaurantStore`].
//!
//! # Invariants
//! - One record per line, encoded as a JSON object.
//! - Appends never rewrite existing bytes.
//! - Blank lines are ignored; malformed lines are skipped and counted.

use super::{LoadReport, RestaurantStore, StoreError, StoreResult};
use crate::model::restaurant::Restaurant;
use log::{debug, error, info, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Record store backed by a single flat file.
#[derive(Debug, Clone)]
pub struct FileRestaurantStore {
    path: PathBuf,
}

impl FileRestaurantStore {
    /// Creates a store for `path`. No I/O happens until an operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RestaurantStore for FileRestaurantStore {
    fn file_usable(&self) -> bool {
        let is_file = fs::metadata(&self.path)
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        is_file
            && File::open(&self.path).is_ok()
            && OpenOptions::new().append(true).open(&self.path).is_ok()
    }

    fn create_file(&self) -> StoreResult<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| {
                error!(
                    "event=store_create module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                self.io_error(err)
            })?;

        info!(
            "event=store_create module=store status=ok path={}",
            self.path.display()
        );
        Ok(())
    }

    fn load_all(&self) -> StoreResult<LoadReport> {
        let file = File::open(&self.path).map_err(|err| self.io_error(err))?;
        let mut report = LoadReport::default();

        for (index, raw) in BufReader::new(file).split(b'\n').enumerate() {
            let raw = raw.map_err(|err| self.io_error(err))?;
            let line_no = index + 1;

            let Ok(line) = String::from_utf8(raw) else {
                warn!("event=store_load module=store status=skip line={line_no} reason=invalid_utf8");
                report.skipped += 1;
                continue;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match serde_json::from_str::<Restaurant>(line) {
                Ok(restaurant) => report.restaurants.push(restaurant),
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=skip line={line_no} reason={}",
                        err
                    );
                    report.skipped += 1;
                }
            }
        }

        debug!(
            "event=store_load module=store status=ok records={} skipped={}",
            report.restaurants.len(),
            report.skipped
        );
        Ok(report)
    }

    fn append(&self, restaurant: &Restaurant) -> StoreResult<()> {
        restaurant.validate()?;
        let mut encoded = serde_json::to_string(restaurant)?;
        encoded.push('\n');

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.io_error(err))?;

        // A hand-edited file may lack the final newline.
        if needs_leading_newline(&mut file).map_err(|err| self.io_error(err))? {
            encoded.insert(0, '\n');
        }

        if let Err(err) = file.write_all(encoded.as_bytes()).and_then(|()| file.flush()) {
            error!(
                "event=store_append module=store status=error path={} error={}",
                self.path.display(),
                err
            );
            return Err(self.io_error(err));
        }

        info!("event=store_append module=store status=ok");
        Ok(())
    }
}

fn needs_leading_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0_u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
