//! # Image Encoding
//!
//! Turning an uploaded file into a displayable string is an external concern.
//! The core only consumes whatever string the encoder delivers: it does not
//! check its size or format, and a record may have no image at all.
//!
//! Encoding runs on a worker thread and is tracked by a [`PendingImage`] that
//! the form owns. Polling never blocks. If the form is submitted before the
//! result arrives, the submission goes out without an image. Dropping the
//! handle (or calling [`PendingImage::cancel`]) discards the result.

use crate::error::{Result, RosterError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use tracing::debug;

/// Converts raw file bytes into a displayable string.
pub trait ImageEncoder {
    fn encode(&self, bytes: &[u8], media_type: &str) -> Result<String>;
}

/// Encodes images as `data:` URLs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataUrlEncoder;

impl ImageEncoder for DataUrlEncoder {
    fn encode(&self, bytes: &[u8], media_type: &str) -> Result<String> {
        Ok(format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)))
    }
}

/// Guesses a media type from the file extension.
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Reads and encodes `path` on the current thread.
pub fn encode_file<E: ImageEncoder + ?Sized>(encoder: &E, path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| RosterError::Image(format!("{}: {}", path.display(), e)))?;
    encoder.encode(&bytes, media_type_for(path))
}

/// What a [`PendingImage`] has produced so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePoll {
    Pending,
    Ready(String),
    Failed(String),
}

/// Handle to an encoding running in the background.
#[derive(Debug)]
pub struct PendingImage {
    source: PathBuf,
    rx: Receiver<Result<String>>,
    cancelled: Arc<AtomicBool>,
}

impl PendingImage {
    pub fn spawn<E>(encoder: E, source: impl Into<PathBuf>) -> Self
    where
        E: ImageEncoder + Send + 'static,
    {
        let source = source.into();
        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));

        let path = source.clone();
        let flag = Arc::clone(&cancelled);
        thread::spawn(move || {
            let result = encode_file(&encoder, &path);
            if flag.load(Ordering::SeqCst) {
                debug!(path = %path.display(), "discarding cancelled image encoding");
                return;
            }
            // The form may already be gone.
            let _ = tx.send(result);
        });

        Self {
            source,
            rx,
            cancelled,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Checks for a result without waiting.
    pub fn poll(&self) -> ImagePoll {
        if self.is_cancelled() {
            return ImagePoll::Failed("cancelled".to_string());
        }
        match self.rx.try_recv() {
            Ok(Ok(encoded)) => ImagePoll::Ready(encoded),
            Ok(Err(e)) => ImagePoll::Failed(e.to_string()),
            Err(TryRecvError::Empty) => ImagePoll::Pending,
            Err(TryRecvError::Disconnected) => {
                ImagePoll::Failed("encoder stopped without a result".to_string())
            }
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for PendingImage {
    fn drop(&mut self) {
        self.cancel();
    }
}
