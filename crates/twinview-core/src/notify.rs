//! Store-changed signalling between the loader side and the viewer side.
//!
//! The channel is a rendezvous (`sync_channel(0)`): a writer blocks until the
//! other end takes the signal, so no change is ever coalesced or lost. The
//! receiving end is normally owned by a relay thread which forwards each
//! signal into the viewer's own queue and wakes the viewer up.

use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::JoinHandle;

/// Emitted once per `ImageStore::write`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreChanged {
    /// Store generation after the write.
    pub generation: u64,
    /// Whether the store now holds an image.
    pub loaded: bool,
}

/// Sending half of the notification channel.
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: SyncSender<StoreChanged>,
}

/// Receiving half of the notification channel.
#[derive(Debug)]
pub struct NotificationReceiver {
    rx: Receiver<StoreChanged>,
}

/// Create a rendezvous notification channel.
pub fn notification_channel() -> (Notifier, NotificationReceiver) {
    let (tx, rx) = mpsc::sync_channel(0);
    (Notifier { tx }, NotificationReceiver { rx })
}

impl Notifier {
    /// Blocks until the receiver takes the signal. Returns `false` if the
    /// receiver has been dropped.
    pub fn notify(&self, change: StoreChanged) -> bool {
        self.tx.send(change).is_ok()
    }
}

impl NotificationReceiver {
    /// Blocks for the next signal; `None` once every notifier is gone.
    pub fn recv(&self) -> Option<StoreChanged> {
        self.rx.recv().ok()
    }
}

/// Spawn the relay thread. It receives every signal and hands it to
/// `on_change`, and exits when all notifiers are dropped.
pub fn spawn_relay<F>(
    receiver: NotificationReceiver,
    mut on_change: F,
) -> std::io::Result<JoinHandle<()>>
where
    F: FnMut(StoreChanged) + Send + 'static,
{
    std::thread::Builder::new()
        .name("twinview-relay".into())
        .spawn(move || {
            while let Some(change) = receiver.recv() {
                tracing::debug!(
                    generation = change.generation,
                    loaded = change.loaded,
                    "relaying store change"
                );
                on_change(change);
            }
            tracing::debug!("notification relay finished");
        })
}
