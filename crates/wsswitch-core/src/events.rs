//! Refresh signal: "the set of workspace files changed".
//!
//! Owned by the application context and cleared on shutdown. Views subscribe to
//! re-render; save/delete/reload notify.

/// Handle returned by [`RefreshRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut() + Send>;

#[derive(Default)]
pub struct RefreshRegistry {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl RefreshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, f: F) -> SubscriptionId
    where
        F: FnMut() + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(f)));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Call every listener in subscription order.
    pub fn notify(&mut self) {
        tracing::debug!(listeners = self.listeners.len(), "Workspace set changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop all listeners.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl std::fmt::Debug for RefreshRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_fans_out_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut reg = RefreshRegistry::new();
        for tag in ["tree", "list"] {
            let log = Arc::clone(&log);
            reg.subscribe(move || log.lock().unwrap().push(tag));
        }
        reg.notify();
        reg.notify();
        assert_eq!(*log.lock().unwrap(), vec!["tree", "list", "tree", "list"]);
    }

    #[test]
    fn test_unsubscribe_and_clear() {
        let hits = Arc::new(Mutex::new(0));
        let mut reg = RefreshRegistry::new();
        let h = Arc::clone(&hits);
        let id = reg.subscribe(move || *h.lock().unwrap() += 1);
        reg.subscribe(|| {});
        assert!(reg.unsubscribe(id));
        assert!(!reg.unsubscribe(id));
        reg.notify();
        assert_eq!(*hits.lock().unwrap(), 0);
        assert_eq!(reg.len(), 1);
        reg.clear();
        assert!(reg.is_empty());
    }
}
