//! Deferred execution.
//!
//! Turns a synchronous callback into one that runs after the current
//! synchronous code finishes, on the ambient tokio runtime. The only ordering
//! guarantee is "later than now"; no handle is returned, so a deferred callback
//! cannot be cancelled.

use crate::{Error, Result};

/// Schedules `callback` to run after the caller yields to the runtime.
///
/// Fails with [`Error::NoRuntime`] when called outside a tokio runtime.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> colltools::Result<()> {
/// let (tx, rx) = tokio::sync::oneshot::channel();
/// colltools::defer::defer(move || {
///     let _ = tx.send("later");
/// })?;
/// assert_eq!(rx.await.unwrap(), "later");
/// # Ok(())
/// # }
/// ```
pub fn defer<F>(callback: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime)?;
    tracing::trace!("deferring callback");
    handle.spawn(async move {
        tokio::task::yield_now().await;
        callback();
    });
    Ok(())
}

/// Like [`defer`], with `args` bound as the callback's argument.
pub fn defer_with<F, A>(callback: F, args: A) -> Result<()>
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    defer(move || callback(args))
}
