use crate::error::ServiceError;
use linkvault_core::{LinkRecord, LinkStore, RequestedIdentifier, ShortCode, Strength};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, ServiceError>;

/// The operations the serving layer calls into.
///
/// This service wraps a [`LinkStore`] to handle:
/// - destination normalization
/// - custom vs. generated identifier selection
/// - fire-and-forget click recording
/// - mapping store errors onto [`ServiceError`]
#[derive(Debug)]
pub struct LinkService<S> {
    store: Arc<S>,
}

impl<S> Clone for LinkService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: LinkStore> LinkService<S> {
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Trims the destination and defaults its scheme to `https://`.
    fn normalize_destination(url: &str) -> Result<String> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ServiceError::InvalidUrl("URL is required".to_string()));
        }

        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(url.to_string())
        } else {
            Ok(format!("https://{url}"))
        }
    }

    /// Creates a link and returns the identifier it is reachable under.
    ///
    /// A blank `custom_id` is treated as absent. When a custom id is given,
    /// `strength` has no effect.
    pub async fn create_link(
        &self,
        destination: &str,
        strength: Strength,
        custom_id: Option<&str>,
    ) -> Result<ShortCode> {
        let destination = Self::normalize_destination(destination)?;
        let requested = RequestedIdentifier::from_parts(custom_id, strength);

        let code = self.store.create(&destination, requested).await?;
        debug!(code = %code, destination = %destination, "link created");
        Ok(code)
    }

    /// Returns the destination for `code`.
    pub async fn resolve_link(&self, code: &str) -> Result<String> {
        trace!(code, "resolving link");
        let destination = self
            .store
            .get(&ShortCode::new_unchecked(code))
            .await?;
        Ok(destination)
    }

    /// Counts a click on `code` in the background.
    ///
    /// The returned handle may be dropped. A missing link is ignored; other
    /// failures are logged since there is no caller left to report to.
    pub fn record_click(&self, code: &str) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let code = ShortCode::new_unchecked(code);
        tokio::spawn(async move {
            if let Err(err) = store.increment_clicks(&code).await {
                warn!(code = %code, error = %err, "failed to record click");
            }
        })
    }

    /// Resolves `code` and records a click when it exists.
    pub async fn follow(&self, code: &str) -> Result<String> {
        let destination = self.resolve_link(code).await?;
        // Detached: the redirect never waits for the counter.
        drop(self.record_click(code));
        Ok(destination)
    }

    pub async fn list_links(&self) -> Result<Vec<LinkRecord>> {
        Ok(self.store.list_all().await?)
    }

    pub async fn link_details(&self, code: &str) -> Result<LinkRecord> {
        Ok(self.store.find(&ShortCode::new_unchecked(code)).await?)
    }

    /// Deletes `code`; fails with [`ServiceError::NotFound`] if it is absent.
    pub async fn remove_link(&self, code: &str) -> Result<()> {
        self.store.delete(&ShortCode::new_unchecked(code)).await?;
        debug!(code, "link removed");
        Ok(())
    }
}
