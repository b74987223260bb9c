//! Driving async tool work from synchronous callers

use crate::error::{DiscoveryError, DiscoveryResult};
use std::future::Future;

/// Run a future to completion on a private current-thread runtime.
///
/// Callers already inside a tokio runtime cannot start another one on the
/// same thread, so in that case the work moves to a scoped helper thread and
/// the caller blocks on it.
pub fn block_on<F>(future: F) -> DiscoveryResult<F::Output>
where
    F: Future + Send,
    F::Output: Send,
{
    if tokio::runtime::Handle::try_current().is_ok() {
        std::thread::scope(|scope| {
            scope
                .spawn(|| drive(future))
                .join()
                .unwrap_or_else(|_| Err(DiscoveryError::runtime("blocking tool call panicked")))
        })
    } else {
        drive(future)
    }
}

fn drive<F: Future>(future: F) -> DiscoveryResult<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| DiscoveryError::runtime(format!("failed to start runtime: {e}")))?;
    Ok(runtime.block_on(future))
}
