//! The one piece of state shared by both surfaces.

use std::sync::{Arc, PoisonError, RwLock, TryLockError};

use crate::frame::DecodedImage;
use crate::notify::{Notifier, StoreChanged};

#[derive(Debug, Default)]
struct Slot {
    image: Option<DecodedImage>,
    loaded: bool,
    generation: u64,
}

/// Consistent copy of the store contents at one instant.
#[derive(Clone, Debug, Default)]
pub struct StoreSnapshot {
    pub image: Option<DecodedImage>,
    pub loaded: bool,
    /// Number of writes the store had seen when this snapshot was taken.
    pub generation: u64,
}

impl StoreSnapshot {
    /// `loaded` always agrees with image presence; checked in tests.
    pub fn is_consistent(&self) -> bool {
        self.loaded == self.image.is_some()
    }
}

/// Lock-guarded current image.
///
/// Cheap to clone; every clone refers to the same slot and notifies through
/// the same channel.
#[derive(Clone, Debug)]
pub struct ImageStore {
    slot: Arc<RwLock<Slot>>,
    notifier: Notifier,
}

impl ImageStore {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot::default())),
            notifier,
        }
    }

    /// Replace the image (or clear it with `None`), then signal the change.
    ///
    /// The write lock is released before signalling, so the viewer can read
    /// the new image as soon as it wakes up. Blocks until the notification is
    /// taken by the receiver.
    pub fn write(&self, image: Option<DecodedImage>) -> StoreChanged {
        let change = {
            let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
            slot.loaded = image.is_some();
            slot.image = image;
            slot.generation += 1;
            StoreChanged {
                generation: slot.generation,
                loaded: slot.loaded,
            }
        };

        if !self.notifier.notify(change) {
            tracing::warn!(
                generation = change.generation,
                "image store changed but nobody is listening"
            );
        }
        change
    }

    /// Blocking read. Waits for an in-flight write to finish.
    pub fn read_snapshot(&self) -> StoreSnapshot {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        snapshot_of(&slot)
    }

    /// Non-blocking read; `None` while a write holds the lock.
    pub fn try_read_snapshot(&self) -> Option<StoreSnapshot> {
        match self.slot.try_read() {
            Ok(slot) => Some(snapshot_of(&slot)),
            Err(TryLockError::Poisoned(e)) => Some(snapshot_of(&e.into_inner())),
            Err(TryLockError::WouldBlock) => None,
        }
    }

    /// Current generation without cloning the image handle.
    pub fn generation(&self) -> u64 {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }
}

fn snapshot_of(slot: &Slot) -> StoreSnapshot {
    StoreSnapshot {
        image: slot.image.clone(),
        loaded: slot.loaded,
        generation: slot.generation,
    }
}
