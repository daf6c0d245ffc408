use super::DbPool;
use crate::errors::{IntoCore, StorageError};
use diesel::SqliteConnection;
use log::{debug, error};
use std::any::Any;
use teller_core::errors::{DatabaseError, Error, Result};
use tokio::sync::{mpsc, oneshot};

// A write job runs against the writer's dedicated connection and returns a core Result.
type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction: if it returns `Err`,
    /// everything it wrote is rolled back and the error is returned as-is.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| writer_stopped("Writer actor is no longer accepting jobs"))?;

        let boxed = ret_rx
            .await
            .map_err(|_| writer_stopped("Writer actor dropped the reply without a result"))??;

        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| writer_stopped("Writer actor returned a result of an unexpected type"))
    }
}

fn writer_stopped(message: &str) -> Error {
    error!("{}", message);
    Error::Database(DatabaseError::Internal(message.to_string()))
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor owns one connection from the pool for its whole lifetime and
/// processes jobs serially, so writes never contend with each other for the
/// SQLite write lock. Must be called from within a Tokio runtime.
pub fn spawn_writer(pool: DbPool) -> Result<WriteHandle> {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    let mut conn = pool.get().into_core()?;

    tokio::spawn(async move {
        while let Some((job, reply_tx)) = rx.recv().await {
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c).map_err(StorageError::from))
                .map_err(|e: StorageError| e.into());

            // The requester may have gone away (timeout, cancellation).
            let _ = reply_tx.send(result);
        }
        debug!("All write handles dropped, stopping writer actor");
    });

    Ok(WriteHandle { tx })
}
