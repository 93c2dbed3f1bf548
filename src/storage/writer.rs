use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

use super::{KeyValueStore, StorageError};

#[derive(Debug)]
enum WriteOp {
    Set(String),
    Remove,
}

#[derive(Debug)]
struct WriteRequest {
    key: String,
    op: WriteOp,
    done: oneshot::Sender<Result<(), StorageError>>,
}

/// Applies persistence writes one at a time, in submission order
///
/// Mutations enqueue their serialized state while still holding their own
/// lock, so the last write to reach the backend is always the latest state.
#[derive(Debug, Clone)]
pub struct PersistenceWriter {
    sender: mpsc::UnboundedSender<WriteRequest>,
}

impl PersistenceWriter {
    /// Spawns the background writer task on the current tokio runtime
    pub fn spawn(store: Arc<dyn KeyValueStore>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<WriteRequest>();

        tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let result = match &request.op {
                    WriteOp::Set(value) => store.set(&request.key, value).await,
                    WriteOp::Remove => store.remove(&request.key).await,
                };

                match &result {
                    Ok(()) => debug!(key = %request.key, "Persisted key"),
                    Err(err) => error!(?err, key = %request.key, "Failed to persist key"),
                }

                // Nobody waiting is the fire-and-forget case
                let _ = request.done.send(result);
            }
            debug!("Persistence writer stopped");
        });

        Self { sender }
    }

    /// Queues a write of `value` under `key`
    pub fn set(&self, key: &str, value: String) -> PersistTicket {
        self.submit(key, WriteOp::Set(value))
    }

    /// Serializes `value` as JSON and queues it under `key`
    pub fn set_json<T: serde::Serialize>(&self, key: &str, value: &T) -> PersistTicket {
        match serde_json::to_string(value) {
            Ok(json) => self.set(key, json),
            Err(err) => {
                error!(?err, key, "Failed to serialize value for persistence");
                PersistTicket::failed(StorageError::from(err))
            }
        }
    }

    /// Queues removal of `key`
    pub fn remove(&self, key: &str) -> PersistTicket {
        self.submit(key, WriteOp::Remove)
    }

    fn submit(&self, key: &str, op: WriteOp) -> PersistTicket {
        let (done, receiver) = oneshot::channel();
        let request = WriteRequest {
            key: key.to_string(),
            op,
            done,
        };

        if self.sender.send(request).is_err() {
            error!(key, "Persistence writer is closed, dropping write");
            return PersistTicket::failed(StorageError::WriterClosed);
        }

        PersistTicket {
            pending: vec![receiver],
            failure: None,
        }
    }
}

/// Completion signal for the writes submitted by one mutation
///
/// Dropping the ticket leaves the writes running in the background.
#[derive(Debug)]
#[must_use = "await `wait()` to observe persistence failures, or drop explicitly"]
pub struct PersistTicket {
    pending: Vec<oneshot::Receiver<Result<(), StorageError>>>,
    failure: Option<StorageError>,
}

impl PersistTicket {
    fn failed(err: StorageError) -> Self {
        Self {
            pending: Vec::new(),
            failure: Some(err),
        }
    }

    /// Combines two tickets into one that completes when both have
    pub fn join(mut self, other: PersistTicket) -> Self {
        self.pending.extend(other.pending);
        if self.failure.is_none() {
            self.failure = other.failure;
        }
        self
    }

    /// Waits for every write and returns the first failure, if any
    pub async fn wait(self) -> Result<(), StorageError> {
        let results = join_all(self.pending).await;

        if let Some(err) = self.failure {
            return Err(err);
        }

        for result in results {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(err)) => return Err(err),
                Err(_) => return Err(StorageError::WriterClosed),
            }
        }

        Ok(())
    }
}
