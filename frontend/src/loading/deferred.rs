//! Per-key async cache for content that is only built on first request.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::rc::{Rc, Weak};

use futures::future::{self, FutureExt, LocalBoxFuture, Shared};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("section {section} failed to load: {reason}")]
pub struct LoadError {
    pub section: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(section: impl Display, reason: impl Display) -> Self {
        Self { section: section.to_string(), reason: reason.to_string() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModuleState<V> {
    NotRequested,
    Loading,
    Ready(V),
    Failed(LoadError),
}

pub type LoadFuture<V> = LocalBoxFuture<'static, Result<V, LoadError>>;

type Loader<K, V> = Rc<dyn Fn(K) -> LoadFuture<V>>;

enum Entry<V> {
    Loading(Shared<LoadFuture<V>>),
    Ready(V),
    Failed(LoadError),
}

type Entries<K, V> = RefCell<HashMap<K, Entry<V>>>;

/// Modules are materialised through `loader` at most once per successful load.
/// Concurrent requests for the same key share a single in-flight load.
pub struct DeferredModules<K, V> {
    loader: Loader<K, V>,
    entries: Rc<Entries<K, V>>,
}

impl<K, V> DeferredModules<K, V>
where
    K: Clone + Eq + Hash + Display + 'static,
    V: Clone + 'static,
{
    pub fn new(loader: impl Fn(K) -> LoadFuture<V> + 'static) -> Self {
        Self { loader: Rc::new(loader), entries: Rc::new(RefCell::new(HashMap::new())) }
    }

    pub fn state(&self, key: &K) -> ModuleState<V> {
        match self.entries.borrow().get(key) {
            None => ModuleState::NotRequested,
            Some(Entry::Loading(_)) => ModuleState::Loading,
            Some(Entry::Ready(value)) => ModuleState::Ready(value.clone()),
            Some(Entry::Failed(e)) => ModuleState::Failed(e.clone()),
        }
    }

    /// Resolves the module for `key`. A failed module is loaded again.
    pub fn load(&self, key: K) -> LoadFuture<V> {
        match self.entries.borrow().get(&key) {
            Some(Entry::Ready(value)) => return future::ready(Ok(value.clone())).boxed_local(),
            Some(Entry::Loading(pending)) => return pending.clone().boxed_local(),
            Some(Entry::Failed(_)) => log::info!("Retrying section {}", key),
            None => log::debug!("Loading section {}", key),
        }

        // the loader may look at this cache, so no borrow is held across it
        let load = (self.loader)(key.clone());
        let pending = settle(Rc::downgrade(&self.entries), key.clone(), load).shared();
        self.entries.borrow_mut().insert(key, Entry::Loading(pending.clone()));
        pending.boxed_local()
    }
}

fn settle<K, V>(entries: Weak<Entries<K, V>>, key: K, load: LoadFuture<V>) -> LoadFuture<V>
where
    K: Eq + Hash + Display + 'static,
    V: Clone + 'static,
{
    async move {
        let result = load.await;
        if let Some(entries) = entries.upgrade() {
            let entry = match &result {
                Ok(value) => Entry::Ready(value.clone()),
                Err(e) => {
                    log::error!("{}", e);
                    Entry::Failed(e.clone())
                }
            };
            entries.borrow_mut().insert(key, entry);
        }
        result
    }
    .boxed_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use std::cell::Cell;

    struct Harness {
        calls: Rc<Cell<u32>>,
        senders: Rc<RefCell<Vec<oneshot::Sender<Result<String, LoadError>>>>>,
        modules: DeferredModules<&'static str, String>,
    }

    /// Each loader call parks until the test answers it through `senders`.
    fn harness() -> Harness {
        let calls = Rc::new(Cell::new(0));
        let senders = Rc::new(RefCell::new(Vec::new()));
        let modules = {
            let calls = calls.clone();
            let senders = senders.clone();
            DeferredModules::new(move |key: &'static str| {
                calls.set(calls.get() + 1);
                let (tx, rx) = oneshot::channel();
                senders.borrow_mut().push(tx);
                async move {
                    rx.await.unwrap_or_else(|_| Err(LoadError::new(key, "loader dropped")))
                }
                .boxed_local()
            })
        };
        Harness { calls, senders, modules }
    }

    impl Harness {
        fn answer(&self, result: Result<String, LoadError>) {
            let tx = self.senders.borrow_mut().remove(0);
            let _ = tx.send(result);
        }
    }

    #[test]
    fn concurrent_requests_share_one_load() {
        let h = harness();
        let mut pool = LocalPool::new();

        let first = h.modules.load("about");
        let second = h.modules.load("about");
        assert_eq!(h.calls.get(), 1);
        assert_eq!(h.modules.state(&"about"), ModuleState::Loading);

        h.answer(Ok("about content".into()));
        let (a, b) = pool.run_until(future::join(first, second));
        assert_eq!(a, Ok("about content".to_string()));
        assert_eq!(a, b);
        assert_eq!(h.calls.get(), 1);
        assert_eq!(h.modules.state(&"about"), ModuleState::Ready("about content".into()));
    }

    #[test]
    fn ready_module_is_not_loaded_again() {
        let h = harness();
        let mut pool = LocalPool::new();

        let first = h.modules.load("blog");
        h.answer(Ok("posts".into()));
        pool.run_until(first).unwrap();

        let again = pool.run_until(h.modules.load("blog"));
        assert_eq!(again, Ok("posts".to_string()));
        assert_eq!(h.calls.get(), 1);
    }

    #[test]
    fn failure_is_recorded_and_retry_reloads() {
        let h = harness();
        let mut pool = LocalPool::new();

        let first = h.modules.load("contact");
        h.answer(Err(LoadError::new("contact", "chunk missing")));
        let err = pool.run_until(first).unwrap_err();
        assert_eq!(err.to_string(), "section contact failed to load: chunk missing");
        assert_eq!(h.modules.state(&"contact"), ModuleState::Failed(err));

        let retry = h.modules.load("contact");
        assert_eq!(h.calls.get(), 2);
        assert_eq!(h.modules.state(&"contact"), ModuleState::Loading);
        h.answer(Ok("form".into()));
        assert_eq!(pool.run_until(retry), Ok("form".to_string()));
    }

    #[test]
    fn sections_resolve_in_any_order() {
        let h = harness();
        let mut pool = LocalPool::new();

        let services = h.modules.load("services");
        let footer = h.modules.load("footer");
        assert_eq!(h.modules.state(&"portfolio"), ModuleState::NotRequested);

        // answer footer first
        let services_tx = h.senders.borrow_mut().remove(0);
        h.answer(Ok("footer".into()));
        assert_eq!(pool.run_until(footer), Ok("footer".to_string()));
        assert_eq!(h.modules.state(&"services"), ModuleState::Loading);

        let _ = services_tx.send(Ok("services".into()));
        assert_eq!(pool.run_until(services), Ok("services".to_string()));
    }

    #[test]
    fn loader_can_inspect_the_cache_it_belongs_to() {
        let slot: Rc<RefCell<Weak<DeferredModules<&'static str, String>>>> = Rc::new(RefCell::new(Weak::new()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let modules = {
            let slot = slot.clone();
            let seen = seen.clone();
            Rc::new(DeferredModules::new(move |key: &'static str| {
                if let Some(modules) = slot.borrow().upgrade() {
                    seen.borrow_mut().push(modules.state(&"about"));
                }
                future::ready(Ok(key.to_uppercase())).boxed_local()
            }))
        };
        *slot.borrow_mut() = Rc::downgrade(&modules);
        let mut pool = LocalPool::new();

        assert_eq!(pool.run_until(modules.load("about")), Ok("ABOUT".to_string()));
        assert_eq!(pool.run_until(modules.load("blog")), Ok("BLOG".to_string()));
        assert_eq!(
            *seen.borrow(),
            vec![ModuleState::NotRequested, ModuleState::Ready("ABOUT".to_string())]
        );
    }
}
