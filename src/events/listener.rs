// Shared callback handle used by the event bus and the input action table
use std::fmt;
use std::sync::Arc;

/// Identity of a registered callback. Two handles compare equal only when one
/// was cloned from the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerKey(usize);

/// Reference-counted callback accepting a payload of type `T`.
///
/// Clone the handle to keep a copy for later removal; every clone refers to the
/// same registration.
pub struct Listener<T: ?Sized> {
    callback: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T: ?Sized> Listener<T> {
    pub fn new(callback: impl Fn(&T) + Send + Sync + 'static) -> Self {
        Self { callback: Arc::new(callback) }
    }

    /// Identity of this handle, shared by all of its clones
    pub fn key(&self) -> ListenerKey {
        ListenerKey(Arc::as_ptr(&self.callback) as *const () as usize)
    }

    #[inline]
    pub fn call(&self, payload: &T) {
        (self.callback)(payload)
    }
}

impl<T: ?Sized> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self { callback: Arc::clone(&self.callback) }
    }
}

impl<T: ?Sized> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener").field(&self.key()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let a = Listener::<u32>::new(|_| {});
        let b = a.clone();
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn identical_closures_are_distinct_handles() {
        // Zero-sized closures still get their own allocation
        let a = Listener::<u32>::new(|_| {});
        let b = Listener::<u32>::new(|_| {});
        assert_ne!(a.key(), b.key());
    }
}
