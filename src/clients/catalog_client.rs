use tracing::{debug, instrument};

use crate::actor_framework::StorefrontHandle;
use crate::app_system::StorefrontError;
use crate::domain::{Category, Item};

/// Category buttons and the search box.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StorefrontHandle,
}

impl CatalogClient {
    pub fn new(inner: StorefrontHandle) -> Self {
        Self { inner }
    }

    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn select_category(&self, category: Option<Category>) -> Result<Vec<Item>, StorefrontError> {
        debug!("Sending request");
        self.inner.select_category(category).await
    }

    /// Same as [`select_category`](Self::select_category), from a button tag
    /// such as `"gummies"` or `"all"`.
    #[instrument(skip(self))]
    pub async fn select_category_tag(&self, tag: &str) -> Result<Vec<Item>, StorefrontError> {
        let category = Category::parse_filter(tag)?;
        self.inner.select_category(category).await
    }

    #[instrument(skip(self, query))]
    pub async fn search(&self, query: impl Into<String> + Send) -> Result<Vec<Item>, StorefrontError> {
        let query = query.into();
        debug!(query = %query, "Sending request");
        self.inner.search(query).await
    }
}
