// Owned listener handles with replace-on-assign semantics.

// Release runs exactly once: on cancel() or on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.release.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct SubscriptionSlot {
    current: Option<Subscription>,
}

impl SubscriptionSlot {
    /// The old handle is released before `subscribe` runs.
    pub fn replace_with(&mut self, subscribe: impl FnOnce() -> Subscription) {
        self.clear();
        self.current = Some(subscribe());
    }

    pub fn clear(&mut self) -> bool {
        match self.current.take() {
            Some(sub) => {
                sub.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{Subscription, SubscriptionSlot};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracked(log: &Rc<RefCell<Vec<String>>>, name: &str) -> Subscription {
        log.borrow_mut().push(format!("sub {name}"));
        let log = log.clone();
        let name = name.to_string();
        Subscription::new(move || log.borrow_mut().push(format!("unsub {name}")))
    }

    #[test]
    fn release_runs_once_on_cancel() {
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let sub = Subscription::new(move || *c.borrow_mut() += 1);
        sub.cancel();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn dropping_releases() {
        let count = Rc::new(RefCell::new(0));
        {
            let c = count.clone();
            let _sub = Subscription::new(move || *c.borrow_mut() += 1);
        }
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn replace_releases_old_before_subscribing_new() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = SubscriptionSlot::default();
        slot.replace_with(|| tracked(&log, "a"));
        slot.replace_with(|| tracked(&log, "b"));
        assert_eq!(*log.borrow(), vec!["sub a", "unsub a", "sub b"]);
        assert!(slot.is_active());
    }

    #[test]
    fn clear_on_empty_slot_is_a_no_op() {
        let mut slot = SubscriptionSlot::default();
        assert!(!slot.clear());
        assert!(!slot.is_active());
    }

    #[test]
    fn dropping_slot_releases_held_subscription() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut slot = SubscriptionSlot::default();
            slot.replace_with(|| tracked(&log, "a"));
        }
        assert_eq!(*log.borrow(), vec!["sub a", "unsub a"]);
    }
}
