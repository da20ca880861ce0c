//! Tokio driver that advances a [`TextRotator`] on its own timer

use crate::rotator::{Frame, TextRotator};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::debug;

/// Receiving end of a running rotation.
///
/// Dropping it cancels the pending timer; no tick runs after that.
pub struct RotationReceiver {
    rx: mpsc::UnboundedReceiver<Frame>,
    task: JoinHandle<()>,
}

/// Type alias for a rotation consumed as a stream
pub type RotationStream = UnboundedReceiverStream<Frame>;

/// Start ticking `rotator` on the current tokio runtime.
///
/// Each tick waits for the delay held by the machine at that point, so the
/// interval always follows the latest state.
pub fn spawn_rotation(mut rotator: TextRotator) -> RotationReceiver {
    let (tx, rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(async move {
        loop {
            let delay = rotator.delay();
            tokio::select! {
                _ = tx.closed() => {
                    debug!("Rotation receiver dropped, cancelling timer");
                    break;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            let frame = rotator.tick();
            if tx.send(frame).is_err() {
                break; // Receiver dropped
            }
        }
    });

    RotationReceiver { rx, task }
}

impl RotationReceiver {
    /// Wait for the next frame
    pub async fn recv(&mut self) -> Option<Frame> {
        self.rx.recv().await
    }

    /// Stop the rotation, returning the task handle so callers can await its end
    pub fn cancel(self) -> JoinHandle<()> {
        let RotationReceiver { rx, task } = self;
        drop(rx);
        task
    }

    pub fn into_stream(self) -> RotationStream {
        UnboundedReceiverStream::new(self.rx)
    }
}

impl Stream for RotationReceiver {
    type Item = Frame;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Frame>> {
        self.rx.poll_recv(cx)
    }
}
