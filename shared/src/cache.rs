//! Typed cache keys and the invalidation listener registry.
//!
//! Listing views register interest in a [`CacheKey`]; a successful update
//! publishes an invalidation for the exact key it affects. Keys are compared
//! by equality only, so invalidating [`CacheKey::Posts`] never reaches
//! listeners of filtered or paginated listings.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::PostId;

/// Identity of a cached query result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The general post listing.
    Posts,
    /// Listing filtered by category.
    PostsByCategory(PostId),
    /// One page of the listing.
    PostsPage(u32),
    /// A single post.
    Post(PostId),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Posts => f.write_str("posts"),
            CacheKey::PostsByCategory(id) => write!(f, "posts?categoryId={id}"),
            CacheKey::PostsPage(page) => write!(f, "posts?page={page}"),
            CacheKey::Post(id) => write!(f, "posts/{id}"),
        }
    }
}

type Listener = Rc<dyn Fn(&CacheKey)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, CacheKey, Listener)>,
}

/// Single-threaded publish/subscribe registry for cache invalidations.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct InvalidationBus {
    registry: Rc<RefCell<Registry>>,
}

impl InvalidationBus {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `listener` whenever `key` is invalidated. The listener stays
    /// registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, key: CacheKey, listener: impl Fn(&CacheKey) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, key, Rc::new(listener)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notify every listener registered for exactly `key`. Returns how many
    /// were notified.
    pub fn invalidate(&self, key: &CacheKey) -> usize {
        // Collect first: listeners may subscribe or unsubscribe while running.
        let matched: Vec<Listener> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, registered, _)| registered == key)
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        for listener in &matched {
            listener(key);
        }
        debug!(%key, notified = matched.len(), "cache key invalidated");
        matched.len()
    }

    /// Number of live listeners for `key`.
    pub fn listener_count(&self, key: &CacheKey) -> usize {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|(_, registered, _)| registered == key)
            .count()
    }
}

impl PartialEq for InvalidationBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl fmt::Debug for InvalidationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvalidationBus")
            .field("listeners", &self.registry.borrow().listeners.len())
            .finish()
    }
}

/// Registration guard returned by [`InvalidationBus::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.retain(|(id, _, _)| *id != self.id);
        }
    }
}
