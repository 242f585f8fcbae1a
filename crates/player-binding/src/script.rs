//! Page-wide vendor script loading
//!
//! Some platforms need an external script on the page before their iframes
//! become players. The script is a page-wide singleton: no matter how many
//! embeds mount, each URL is injected at most once per loader.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Performs the actual script-tag injection into the page
#[cfg_attr(test, mockall::automock)]
pub trait ScriptInjector: Send + Sync {
    /// Append an async script tag for `url` to the document
    fn inject(&self, url: &str);
}

/// Idempotent loader for external vendor scripts.
///
/// The loaded-set check and insertion happen under one lock, so concurrent
/// embeds on the same loader cannot double-inject a URL.
pub struct ScriptLoader {
    injector: Arc<dyn ScriptInjector>,
    loaded: Mutex<HashSet<String>>,
}

impl ScriptLoader {
    /// Create a loader backed by the given injector
    pub fn new(injector: Arc<dyn ScriptInjector>) -> Self {
        Self {
            injector,
            loaded: Mutex::new(HashSet::new()),
        }
    }

    /// Ensure `url` has been injected, returning whether an injection
    /// happened on this call.
    pub fn ensure_loaded(&self, url: &str) -> bool {
        let newly_added = self.loaded.lock().insert(url.to_string());
        if newly_added {
            self.injector.inject(url);
        }
        newly_added
    }

    /// Whether `url` has already been injected through this loader
    pub fn is_loaded(&self, url: &str) -> bool {
        self.loaded.lock().contains(url)
    }
}
