//! Startup bootstrap for the backing file.
//!
//! # Responsibility
//! - Locate the backing file or create an empty one.
//! - Report the outcome as a typed value; the caller decides whether to exit.
//!
//! # Invariants
//! - Never terminates the process.
//! - `Ready` stores always have a usable backing file.

use super::{FileRestaurantStore, RestaurantStore, StoreError};
use crate::config::GuideConfig;
use log::{error, info};
use std::io;
use std::time::Instant;

/// How the backing file was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOrigin {
    /// An existing file was found.
    Found,
    /// No usable file existed; an empty one was created.
    Created,
}

/// Outcome of store initialization.
#[derive(Debug)]
pub enum Startup {
    Ready {
        store: FileRestaurantStore,
        origin: StoreOrigin,
    },
    /// The backing file can neither be found nor created.
    Fatal(StoreError),
}

/// Opens the store described by `config`, creating the file when missing.
///
/// # Side effects
/// - May create an empty backing file.
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(config: &GuideConfig) -> Startup {
    let started_at = Instant::now();
    let store = FileRestaurantStore::new(config.data_path());
    info!(
        "event=store_open module=store status=start path={}",
        store.path().display()
    );

    if store.file_usable() {
        info!(
            "event=store_open module=store status=ok origin=found duration_ms={}",
            started_at.elapsed().as_millis()
        );
        return Startup::Ready {
            store,
            origin: StoreOrigin::Found,
        };
    }

    if let Err(err) = store.create_file() {
        error!(
            "event=store_open module=store status=error duration_ms={} error_code=store_create_failed error={}",
            started_at.elapsed().as_millis(),
            err
        );
        return Startup::Fatal(err);
    }

    // Creation can succeed on a path that still cannot be read back.
    if !store.file_usable() {
        error!(
            "event=store_open module=store status=error duration_ms={} error_code=store_unusable",
            started_at.elapsed().as_millis()
        );
        return Startup::Fatal(StoreError::Io {
            path: store.path().to_path_buf(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "file is not readable"),
        });
    }

    info!(
        "event=store_open module=store status=ok origin=created duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Startup::Ready {
        store,
        origin: StoreOrigin::Created,
    }
}
