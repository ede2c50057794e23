// Background asset loading with a startup deadline

use super::AssetError;
use log::{info, warn};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// A load running on its own thread whose result can be awaited once
pub struct PendingAssets<T> {
    receiver: Receiver<Result<T, AssetError>>,
    started: Instant,
}

impl<T: Send + 'static> PendingAssets<T> {
    /// Start `load` on a loader thread
    pub fn spawn<F>(load: F) -> Self
    where
        F: FnOnce() -> Result<T, AssetError> + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // The receiver may have given up already
            let _ = sender.send(load());
        });

        Self {
            receiver,
            started: Instant::now(),
        }
    }

    /// Block until the load finishes or `timeout` passes
    pub fn wait(self, timeout: Duration) -> Result<T, AssetError> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => {
                info!("Assets ready after {:?}", self.started.elapsed());
                result
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!("Asset loading timed out after {:?}", timeout);
                Err(AssetError::Timeout(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(AssetError::LoadError(
                "asset loader thread exited without a result".to_string(),
            )),
        }
    }
}
