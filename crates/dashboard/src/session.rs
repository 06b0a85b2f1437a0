use contracts::shared::assets::AssetResolver;
use contracts::shared::normalize::Normalize;
use serde_json::Value;

use crate::api::{ApiError, Transport};
use crate::mutations::PendingGuard;
use crate::queries::{self, QueryCache, QueryKey};
use crate::shared::config::Config;

/// Everything one dashboard run works against: the API transport, the
/// query cache, the in-flight mutation guard and display settings.
pub struct Session<T: Transport> {
    pub(crate) transport: T,
    pub(crate) cache: QueryCache,
    pub(crate) pending: PendingGuard,
    pub assets: AssetResolver,
    pub page_size: usize,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            cache: QueryCache::new(),
            pending: PendingGuard::default(),
            assets: AssetResolver::new(&config.assets.host, &config.assets.placeholder),
            page_size: config.lists.page_size,
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub async fn fetch(&self, key: &QueryKey) -> Result<Value, ApiError> {
        queries::fetch(&self.transport, &self.cache, key).await
    }

    pub async fn load<R: Normalize>(&self, key: &QueryKey) -> Result<Vec<R>, ApiError> {
        queries::fetch_records(&self.transport, &self.cache, key).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::api::mock::MockTransport;
    use crate::shared::config::parse_config;

    pub fn session(transport: MockTransport) -> Session<MockTransport> {
        let config = parse_config(
            r#"
[api]
base_url = "http://api.test"

[assets]
host = "http://assets.test"
placeholder = "/placeholder.jpg"
"#,
        )
        .unwrap();
        Session::new(transport, &config)
    }
}
