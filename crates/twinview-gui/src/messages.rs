use twinview_core::notify::StoreChanged;

/// Events delivered to the viewer surface by the notification relay.
#[derive(Clone, Copy, Debug)]
pub enum ViewerEvent {
    /// The image store was written; reset navigation and re-read it.
    ImageChanged(StoreChanged),
}
