//! Border resolution - one concurrent lookup per border code

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::join_all;

use crate::models::Country;

/// Resolves every code with `lookup` concurrently and returns the records
/// that resolved, in the order of `codes`. Failed codes are logged and skipped.
pub async fn resolve_borders<F, Fut, E>(codes: &[String], lookup: F) -> Vec<Arc<Country>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Country, E>>,
    E: Display,
{
    let lookups = codes.iter().map(|code| {
        let fut = lookup(code.clone());
        async move { (code, fut.await) }
    });

    join_all(lookups)
        .await
        .into_iter()
        .filter_map(|(code, result)| match result {
            Ok(country) => Some(Arc::new(country)),
            Err(e) => {
                tracing::warn!(code = %code, error = %e, "Border country lookup failed");
                None
            }
        })
        .collect()
}
