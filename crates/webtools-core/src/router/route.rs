//! A single navigable location.

use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::LocalBoxFuture;

use crate::error::LoadError;

/// Deferred reference to a page implementation.
///
/// Invoked at most once per successful load; the produced page is cached on
/// the [`Route`] afterwards.
pub type Loader<P> = fn() -> LocalBoxFuture<'static, Result<P, LoadError>>;

/// Declarative binding of a URL path and a symbolic name to a page loader.
pub struct Route<P> {
    path: &'static str,
    name: &'static str,
    loader: Loader<P>,
    page: OnceLock<P>,
    loads: AtomicUsize,
}

impl<P> Route<P> {
    /// Creates an unloaded route.
    pub const fn new(path: &'static str, name: &'static str, loader: Loader<P>) -> Self {
        Self {
            path,
            name,
            loader,
            page: OnceLock::new(),
            loads: AtomicUsize::new(0),
        }
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the page has been loaded and cached.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.page.get().is_some()
    }

    /// Number of times the deferred loader has been invoked.
    #[inline]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Returns the page, invoking the loader on first use.
    ///
    /// Failures are not cached: the next call invokes the loader again.
    pub async fn load(&self) -> Result<P, LoadError>
    where
        P: Clone,
    {
        if let Some(page) = self.page.get() {
            tracing::debug!(route = self.name, "page already loaded");
            return Ok(page.clone());
        }

        self.loads.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(route = self.name, path = self.path, "loading page");
        let page = (self.loader)().await?;

        // A concurrent load may have finished first; the stored page wins.
        Ok(self.page.get_or_init(|| page).clone())
    }
}

impl<P> fmt::Debug for Route<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .field("loads", &self.load_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    fn ok_loader() -> LocalBoxFuture<'static, Result<u32, LoadError>> {
        async { Ok(7) }.boxed_local()
    }

    fn failing_loader() -> LocalBoxFuture<'static, Result<u32, LoadError>> {
        async {
            Err(LoadError::Unavailable {
                reason: "chunk missing".to_string(),
            })
        }
        .boxed_local()
    }

    #[tokio::test]
    async fn test_load_caches_page() {
        let route = Route::new("/a", "a", ok_loader);
        assert!(!route.is_loaded());

        assert_eq!(route.load().await, Ok(7));
        assert_eq!(route.load().await, Ok(7));
        assert!(route.is_loaded());
        assert_eq!(route.load_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let route = Route::new("/b", "b", failing_loader);

        assert!(route.load().await.is_err());
        assert!(route.load().await.is_err());
        assert!(!route.is_loaded());
        assert_eq!(route.load_count(), 2);
    }

    static RACE_LOADS: AtomicUsize = AtomicUsize::new(0);

    fn yielding_loader() -> LocalBoxFuture<'static, Result<u32, LoadError>> {
        async {
            let n = RACE_LOADS.fetch_add(1, Ordering::SeqCst) as u32;
            tokio::task::yield_now().await;
            Ok(100 + n)
        }
        .boxed_local()
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_first_stored_page() {
        let route = Route::new("/c", "c", yielding_loader);

        let (first, second) = futures::join!(route.load(), route.load());

        assert_eq!(route.load_count(), 2);
        assert!(route.is_loaded());
        assert!(first.is_ok() && second.is_ok());
        assert_eq!(first, second);
        assert_eq!(route.load().await, first);
        assert_eq!(route.load_count(), 2);
    }

    #[test]
    fn test_debug_omits_loader() {
        let route = Route::new("/a", "a", ok_loader);
        let debug = format!("{:?}", route);
        assert!(debug.contains("\"/a\""));
        assert!(debug.contains("loaded: false"));
    }
}
