//! Shared line-oriented input.
//!
//! Both human players (and the rematch prompt) read from the same terminal,
//! so stdin is pumped into one channel and handed around behind a lock.

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// A cloneable handle on a stream of input lines.
#[derive(Clone)]
pub struct LineInput {
    rx: Arc<Mutex<mpsc::UnboundedReceiver<String>>>,
}

impl LineInput {
    /// Wraps an existing line channel.
    pub fn new(rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
        }
    }

    /// Pumps stdin into a fresh `LineInput`.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("Stdin closed");
        });
        Self::new(rx)
    }

    /// Next line, `None` once the source is exhausted.
    pub async fn next_line(&self) -> Option<String> {
        self.rx.lock().await.recv().await
    }
}
