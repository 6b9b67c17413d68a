#![allow(dead_code)]

use std::io::Cursor;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use twinview_core::frame::DecodedImage;
use twinview_core::io::decode::{ImageDecoder, RasterDecoder};
use twinview_core::load::{FailurePolicy, LoadPipeline, RepaintHandle};
use twinview_core::notify::{notification_channel, spawn_relay, StoreChanged};
use twinview_core::store::ImageStore;

/// Milliseconds since an arbitrary epoch, as an event timestamp.
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Encode a solid-color RGBA image as PNG bytes.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Build a decoded image directly, without going through a codec.
pub fn solid_image(width: u32, height: u32) -> DecodedImage {
    DecodedImage::new(
        image::RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 0, 255])),
        format!("{width}x{height}"),
    )
}

/// A store whose notifications are relayed into a plain mpsc receiver.
pub fn store_with_relay() -> (ImageStore, mpsc::Receiver<StoreChanged>) {
    let (notifier, receiver) = notification_channel();
    let (tx, rx) = mpsc::channel();
    spawn_relay(receiver, move |change| {
        let _ = tx.send(change);
    })
    .unwrap();
    (ImageStore::new(notifier), rx)
}

/// A pipeline with the default decoder and a no-op waker.
pub fn pipeline(policy: FailurePolicy) -> LoadPipeline {
    let decoder: Arc<dyn ImageDecoder> = Arc::new(RasterDecoder);
    let waker: Arc<dyn RepaintHandle> = Arc::new(|| {});
    LoadPipeline::new(
        decoder,
        vec!["png".into(), "jpg".into(), "gif".into()],
        policy,
        waker,
    )
}

pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);
