use std::env;

use crate::domain::HarvestQuery;

const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/v2";

#[derive(Debug)]
pub struct HarvestUrl(String);

impl AsRef<str> for HarvestUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl HarvestUrl {
    /// Creates a new HarvestUrl, honoring a `HARVEST_URL` override from the
    /// environment (used to point the client at a test server).
    pub fn new() -> Self {
        Self(env::var("HARVEST_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }

    pub fn with_query(&self, query: &impl HarvestQuery) -> Self {
        let mut url = self.0.clone();
        for (key, value) in query.as_query_pairs() {
            let sep = if url.contains('?') { '&' } else { '?' };
            url.push(sep);
            url.push_str(key);
            url.push('=');
            url.push_str(&value);
        }
        Self(url)
    }
}

impl Default for HarvestUrl {
    fn default() -> Self {
        Self::new()
    }
}
