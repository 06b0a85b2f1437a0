use contracts::shared::normalize::Normalize;
use serde_json::Value;

use super::cache::QueryCache;
use super::keys::QueryKey;
use crate::api::{ApiError, Transport};

/// GET through the cache: a fresh snapshot is returned as is, otherwise the
/// collection is fetched and stored under a new ticket.
pub async fn fetch<T>(transport: &T, cache: &QueryCache, key: &QueryKey) -> Result<Value, ApiError>
where
    T: Transport + ?Sized,
{
    if let Some(body) = cache.fresh(key) {
        tracing::debug!("{} served from cache", key);
        return Ok(body);
    }

    let ticket = cache.begin(key);
    let body = transport.get(&key.path()).await?;
    if cache.complete(&ticket, body.clone()) {
        Ok(body)
    } else {
        // A newer fetch already landed; show its data.
        Ok(cache.fresh(key).unwrap_or(body))
    }
}

/// Fetches a collection and normalizes every item.
pub async fn fetch_records<T, R>(
    transport: &T,
    cache: &QueryCache,
    key: &QueryKey,
) -> Result<Vec<R>, ApiError>
where
    T: Transport + ?Sized,
    R: Normalize,
{
    let body = fetch(transport, cache, key).await?;
    let records = R::from_response(body);
    tracing::debug!("{}: {} records", key, records.len());
    Ok(records)
}
