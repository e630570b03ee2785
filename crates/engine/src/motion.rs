//! Completion handles for animations
//!
//! The animation collaborator hands back a [`Motion`] for every animation it
//! starts and keeps the matching [`MotionDone`]. Finishing (or dropping) the
//! `MotionDone` completes the `Motion`. These handles are the orchestrator's
//! only suspension points.

use tokio::sync::oneshot;

/// Awaitable end of one animation
#[derive(Debug)]
pub struct Motion {
    rx: Option<oneshot::Receiver<()>>,
}

/// Signalling side of a [`Motion`], held by the animator
#[derive(Debug)]
pub struct MotionDone {
    tx: oneshot::Sender<()>,
}

impl Motion {
    /// A pending motion and the handle that completes it
    pub fn channel() -> (MotionDone, Motion) {
        let (tx, rx) = oneshot::channel();
        (MotionDone { tx }, Motion { rx: Some(rx) })
    }

    /// A motion that is already complete
    pub fn done() -> Self {
        Self { rx: None }
    }

    /// Non-blocking check
    pub fn is_done(&mut self) -> bool {
        match self.rx.as_mut() {
            None => true,
            Some(rx) => !matches!(rx.try_recv(), Err(oneshot::error::TryRecvError::Empty)),
        }
    }

    /// Wait until the animator signals completion or drops its handle
    pub async fn wait(self) {
        if let Some(rx) = self.rx {
            // A dropped sender counts as finished.
            let _ = rx.await;
        }
    }
}

impl MotionDone {
    pub fn finish(self) {
        let _ = self.tx.send(());
    }
}

/// Wait for every motion in `motions`
pub async fn wait_all(motions: impl IntoIterator<Item = Motion>) {
    for motion in motions {
        motion.wait().await;
    }
}
