//! Short-lived, revocable references to in-memory archives
//!
//! A reference (`blob:creativeforge/<n>`) stays resolvable until it is
//! revoked, either explicitly or by the one-shot timer scheduled with
//! [`ObjectUrlStore::revoke_after`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const URL_PREFIX: &str = "blob:creativeforge/";

#[derive(Debug, Clone, Default)]
pub struct ObjectUrlStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    next_id: AtomicU64,
    objects: Mutex<HashMap<String, Arc<Vec<u8>>>>,
}

impl ObjectUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, bytes: Vec<u8>) -> String {
        let id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let href = format!("{}{}", URL_PREFIX, id);
        self.objects().insert(href.clone(), Arc::new(bytes));
        href
    }

    pub fn resolve(&self, href: &str) -> Option<Arc<Vec<u8>>> {
        self.objects().get(href).cloned()
    }

    /// Returns true if the reference was still live
    pub fn revoke(&self, href: &str) -> bool {
        self.objects().remove(href).is_some()
    }

    /// Fire-and-forget release of `href` after `delay`
    pub fn revoke_after(&self, href: String, delay: Duration) {
        let store = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if store.revoke(&href) {
                log::info!("object_url: released {}", href);
            }
        });
    }

    pub fn live_count(&self) -> usize {
        self.objects().len()
    }

    fn objects(&self) -> std::sync::MutexGuard<'_, HashMap<String, Arc<Vec<u8>>>> {
        self.inner
            .objects
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
