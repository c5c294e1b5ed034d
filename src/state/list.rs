//! Resource list controller
//!
//! Every screen follows the same pattern: fetch the whole collection on
//! mount, re-fetch it wholesale after every successful mutation. The
//! in-memory list is a cache of server state, never patched locally.
//! This module is that pattern, written once instead of six times.

use std::future::Future;

use futures_util::future;
use leptos::{create_rw_signal, spawn_local, RwSignal, SignalSet};

use crate::api::ApiError;

/// A screen's collection plus its loading flag. Cheap to copy into
/// closures and async blocks; all writes in completion paths tolerate the
/// screen having been unmounted in the meantime.
pub struct ResourceList<T: 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
}

// Signals are plain handles; a derive would wrongly demand `T: Copy`.
impl<T> Clone for ResourceList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ResourceList<T> {}

impl<T: Clone> ResourceList<T> {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            loading: create_rw_signal(true),
        }
    }

    /// Apply a fetch result. Failures are logged and leave an empty
    /// collection, so the screen still reaches ready instead of hanging
    /// on its spinner.
    pub fn settle(&self, what: &str, result: Result<Vec<T>, ApiError>) {
        match result {
            Ok(items) => {
                let _ = self.items.try_set(items);
            }
            Err(err) => {
                log_load_failure(what, &err);
                let _ = self.items.try_set(Vec::new());
            }
        }
    }
}

fn log_load_failure(what: &str, err: &ApiError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("Failed to load {}: {}", what, err).into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("Failed to load {}: {}", what, err);
}

/// Mount/reload sequence for a screen backed by a single list.
pub fn load_one<T>(
    list: ResourceList<T>,
    what: &'static str,
    fetch: impl Future<Output = Result<Vec<T>, ApiError>> + 'static,
) where
    T: Clone + 'static,
{
    let _ = list.loading.try_set(true);
    spawn_local(async move {
        list.settle(what, fetch.await);
        let _ = list.loading.try_set(false);
    });
}

/// Mount/reload sequence for a screen that also needs a foreign key's
/// option set. Both requests are issued concurrently and the screen
/// leaves loading only once both have settled; either may fail without
/// blocking the other.
pub fn load_pair<A, B>(
    a: ResourceList<A>,
    what_a: &'static str,
    fetch_a: impl Future<Output = Result<Vec<A>, ApiError>> + 'static,
    b: ResourceList<B>,
    what_b: &'static str,
    fetch_b: impl Future<Output = Result<Vec<B>, ApiError>> + 'static,
) where
    A: Clone + 'static,
    B: Clone + 'static,
{
    let _ = a.loading.try_set(true);
    let _ = b.loading.try_set(true);
    spawn_local(async move {
        let (result_a, result_b) = future::join(fetch_a, fetch_b).await;
        a.settle(what_a, result_a);
        b.settle(what_b, result_b);
        let _ = a.loading.try_set(false);
        let _ = b.loading.try_set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::SignalGetUntracked;

    #[test]
    fn test_settle_replaces_the_cache_wholesale() {
        let runtime = leptos::create_runtime();

        let list = ResourceList::<u32>::new();
        list.items.set(vec![1]);
        list.settle("numbers", Ok(vec![2, 3]));
        assert_eq!(list.items.get_untracked(), vec![2, 3]);

        runtime.dispose();
    }

    #[test]
    fn test_settle_failure_leaves_an_empty_ready_list() {
        let runtime = leptos::create_runtime();

        let list = ResourceList::<u32>::new();
        list.items.set(vec![1, 2, 3]);
        list.settle(
            "numbers",
            Err(ApiError::Network("connection refused".to_string())),
        );
        assert!(list.items.get_untracked().is_empty());

        runtime.dispose();
    }
}
