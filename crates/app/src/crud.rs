use std::future::Future;

use client::ApiError;

/// Runs `delete` once and then `reload` once, but only when the user
/// confirmed. Returns whether anything was deleted.
///
/// A failed delete skips the reload and hands the error back.
pub async fn delete_then_reload<D, DF, R, RF>(
    confirmed: bool,
    delete: D,
    reload: R,
) -> Result<bool, ApiError>
where
    D: FnOnce() -> DF,
    DF: Future<Output = Result<(), ApiError>>,
    R: FnOnce() -> RF,
    RF: Future<Output = ()>,
{
    if !confirmed {
        return Ok(false);
    }

    delete().await?;
    reload().await;
    Ok(true)
}
