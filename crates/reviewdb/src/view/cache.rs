use std::{
    cell::{Cell, RefCell},
    sync::Arc,
};

///
/// CacheStats
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

///
/// DerivationCache
///
/// Single-slot cache for one derivation, keyed by the version tuple of the
/// collections the derivation reads. A matching key returns the previously
/// derived `Arc` unchanged; a mismatch recomputes and replaces the slot.
///
/// Interior mutability only; the cache is not `Sync` and belongs to the
/// single-threaded read path.
///

#[derive(Debug, Default)]
pub(crate) struct DerivationCache<K, V> {
    slot: RefCell<Option<(K, Arc<V>)>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<K, V> DerivationCache<K, V>
where
    K: Copy + PartialEq,
{
    /// Return the cached value for `key`, deriving it on miss.
    ///
    /// The slot borrow is released before `compute` runs so composed
    /// derivations can recurse into sibling caches from inside the closure.
    pub(crate) fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> Arc<V> {
        if let Some((cached_key, value)) = self.slot.borrow().as_ref()
            && *cached_key == key
        {
            self.hits.set(self.hits.get() + 1);
            return Arc::clone(value);
        }

        let value = Arc::new(compute());
        *self.slot.borrow_mut() = Some((key, Arc::clone(&value)));
        self.misses.set(self.misses.get() + 1);

        value
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
        }
    }
}
