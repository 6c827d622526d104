//! Camera/QR decoder seam: a stream of decoded payload strings.

use crossbeam::channel::{Receiver, TryRecvError};

/// Source of decoded QR payload frames while the camera view is open.
///
/// Implementations wrap whatever decoder the platform provides; the core
/// only ever sees payload strings.
pub trait QrFrameSource {
    /// Next decoded frame, if one is pending. `None` means no frame right
    /// now, not end of stream.
    fn try_next_frame(&mut self) -> Option<String>;
}

/// Frame source backed by a crossbeam channel.
///
/// The decoder thread sends each decoded payload; the consumer drains
/// pending frames between UI ticks. A disconnected channel simply stops
/// yielding frames (the camera view was torn down).
pub struct ChannelFrameSource {
    rx: Receiver<String>,
}

impl ChannelFrameSource {
    /// Wrap a receiver of decoded payloads.
    pub fn new(rx: Receiver<String>) -> Self {
        Self { rx }
    }
}

impl QrFrameSource for ChannelFrameSource {
    fn try_next_frame(&mut self) -> Option<String> {
        match self.rx.try_recv() {
            Ok(payload) => Some(payload),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded;

    #[test]
    fn test_drains_pending_frames_in_order() {
        let (tx, rx) = unbounded();
        let mut source = ChannelFrameSource::new(rx);

        tx.send("frame-1".to_string()).unwrap();
        tx.send("frame-2".to_string()).unwrap();

        assert_eq!(source.try_next_frame().as_deref(), Some("frame-1"));
        assert_eq!(source.try_next_frame().as_deref(), Some("frame-2"));
        assert_eq!(source.try_next_frame(), None);
    }

    #[test]
    fn test_disconnected_channel_yields_nothing() {
        let (tx, rx) = unbounded::<String>();
        let mut source = ChannelFrameSource::new(rx);
        drop(tx);
        assert_eq!(source.try_next_frame(), None);
    }
}
