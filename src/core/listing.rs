use super::currency::Currency;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// The currencies most recently fetched from upstream.
///
/// Empty (`None`) until the first successful fetch, Populated afterwards even
/// when upstream lists nothing. Replaced as a whole on every refresh, so a
/// reader sees either the previous complete listing or the new one.
#[derive(Clone, Default)]
pub struct CurrencyListing {
    inner: Arc<RwLock<Option<Arc<[Currency]>>>>,
}

impl CurrencyListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Arc<[Currency]> {
        match &*self.inner.read().await {
            Some(currencies) => Arc::clone(currencies),
            None => Arc::from(Vec::new()),
        }
    }

    pub async fn is_populated(&self) -> bool {
        self.inner.read().await.is_some()
    }

    pub async fn replace(&self, currencies: Vec<Currency>) {
        let mut listing = self.inner.write().await;
        debug!(count = currencies.len(), "Listing REPLACE");
        *listing = Some(currencies.into());
    }

    pub async fn find(&self, code: &str) -> Option<Currency> {
        let listing = self.inner.read().await;
        let found = listing
            .iter()
            .flat_map(|currencies| currencies.iter())
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned();
        if found.is_none() {
            debug!(code, "Listing MISS");
        }
        found
    }
}
