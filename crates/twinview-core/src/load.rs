//! Asynchronous choose/open/decode, handed back to the control surface.
//!
//! Each `request_load` runs on its own background thread and produces exactly
//! one `LoadResult`. Results travel through a single-slot channel: one result
//! can wait for the consumer, any further producer blocks until the slot is
//! drained. The consumer side is non-blocking and is called once per frame.

use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result, ViewerError};
use crate::frame::{DecodedImage, ImageSize};
use crate::io::decode::ImageDecoder;
use crate::io::source::FileSource;
use crate::store::ImageStore;

/// Wakes the consuming surface so it runs a frame and drains the pipeline.
pub trait RepaintHandle: Send + Sync {
    fn request_repaint(&self);
}

impl<F> RepaintHandle for F
where
    F: Fn() + Send + Sync,
{
    fn request_repaint(&self) {
        self()
    }
}

/// What to do with the store when a picked file fails to decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Clear the store and notify, so `loaded` never claims a stale image.
    #[default]
    ClearAndNotify,
    /// Keep showing the last good image; no notification.
    KeepPrevious,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClearAndNotify => write!(f, "Clear and notify"),
            Self::KeepPrevious => write!(f, "Keep previous"),
        }
    }
}

/// One finished load attempt.
#[derive(Debug)]
pub struct LoadResult {
    /// File name if the picker got that far, otherwise empty.
    pub label: String,
    pub outcome: Result<DecodedImage>,
}

/// What `consume_ready` did with a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { label: String, size: ImageSize },
    Cleared { label: String, error: String },
    Unchanged { label: String, error: String },
}

impl std::fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded { label, size } => write!(f, "Loaded: {label} ({size})"),
            Self::Cleared { label, error } => write!(f, "ERROR: {label}: {error} (image cleared)"),
            Self::Unchanged { label, error } if label.is_empty() => write!(f, "{error}"),
            Self::Unchanged { label, error } => write!(f, "ERROR: {label}: {error}"),
        }
    }
}

pub struct LoadPipeline {
    tx: SyncSender<LoadResult>,
    rx: Receiver<LoadResult>,
    decoder: Arc<dyn ImageDecoder>,
    extensions: Arc<[String]>,
    waker: Arc<dyn RepaintHandle>,
    policy: FailurePolicy,
    in_flight: usize,
}

impl LoadPipeline {
    pub fn new(
        decoder: Arc<dyn ImageDecoder>,
        extensions: Vec<String>,
        policy: FailurePolicy,
        waker: Arc<dyn RepaintHandle>,
    ) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        Self {
            tx,
            rx,
            decoder,
            extensions: extensions.into(),
            waker,
            policy,
            in_flight: 0,
        }
    }

    /// Start choose/open/decode on a background thread. Returns immediately.
    pub fn request_load<S>(&mut self, mut source: S) -> std::io::Result<()>
    where
        S: FileSource + 'static,
    {
        let tx = self.tx.clone();
        let decoder = Arc::clone(&self.decoder);
        let extensions = Arc::clone(&self.extensions);
        let waker = Arc::clone(&self.waker);

        std::thread::Builder::new()
            .name("twinview-loader".into())
            .spawn(move || {
                let result = run_load(&mut source, decoder.as_ref(), &extensions);
                // Blocks while an earlier result still occupies the slot.
                if tx.send(result).is_err() {
                    tracing::debug!("load pipeline dropped before result was delivered");
                    return;
                }
                waker.request_repaint();
            })?;

        self.in_flight += 1;
        Ok(())
    }

    /// Loads requested but not yet consumed.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Non-blocking drain of every result that is ready right now.
    pub fn drain_ready(&mut self) -> Vec<LoadResult> {
        let mut ready = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(result) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    ready.push(result);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        ready
    }

    /// Drain ready results and apply each one to `store`.
    pub fn consume_ready(&mut self, store: &ImageStore) -> Vec<LoadOutcome> {
        self.drain_ready()
            .into_iter()
            .map(|result| apply_result(result, store, self.policy))
            .collect()
    }

    /// Block for the next result and apply it. `None` if nothing is in flight.
    pub fn consume_next(&mut self, store: &ImageStore) -> Option<LoadOutcome> {
        if self.in_flight == 0 {
            return None;
        }
        let result = self.rx.recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(apply_result(result, store, self.policy))
    }
}

fn run_load(
    source: &mut dyn FileSource,
    decoder: &dyn ImageDecoder,
    extensions: &[String],
) -> LoadResult {
    let mut opened = match source.open(extensions) {
        Ok(opened) => opened,
        Err(e) => {
            return LoadResult {
                label: String::new(),
                outcome: Err(e.into()),
            }
        }
    };

    let outcome = decoder.decode(opened.reader.as_mut(), &opened.label);
    LoadResult {
        label: opened.label,
        outcome,
    }
}

/// Apply one result to the store according to `policy`.
pub fn apply_result(result: LoadResult, store: &ImageStore, policy: FailurePolicy) -> LoadOutcome {
    let LoadResult { label, outcome } = result;
    match outcome {
        Ok(image) => {
            let size = image.size();
            tracing::info!(%label, %size, "image loaded");
            store.write(Some(image));
            LoadOutcome::Loaded { label, size }
        }
        Err(ViewerError::Picker(PickerError::Cancelled)) => {
            tracing::info!("file selection cancelled");
            LoadOutcome::Unchanged {
                label,
                error: PickerError::Cancelled.to_string(),
            }
        }
        Err(e) if e.is_picker() => {
            tracing::warn!("failed to open image: {e}");
            LoadOutcome::Unchanged {
                label,
                error: e.to_string(),
            }
        }
        Err(e) => match policy {
            FailurePolicy::ClearAndNotify => {
                tracing::warn!(%label, "failed to decode image, clearing viewer: {e}");
                store.write(None);
                LoadOutcome::Cleared {
                    label,
                    error: e.to_string(),
                }
            }
            FailurePolicy::KeepPrevious => {
                tracing::warn!(%label, "failed to decode image, keeping previous: {e}");
                LoadOutcome::Unchanged {
                    label,
                    error: e.to_string(),
                }
            }
        },
    }
}
