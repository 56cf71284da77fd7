use tokio::sync::watch;

/// Contents of a [`StateHolder`]: the current snapshot, if any, plus whether
/// a push has ever landed. The flag is what lets a late-resolving initial
/// fetch be told apart from live data.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    value: Option<T>,
    pushed: bool,
}

impl<T> Slot<T> {
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot {
            value: None,
            pushed: false,
        }
    }
}

/// Holder for the latest snapshot of one entity.
///
/// Starts unset, is only ever written by full replacement, and notifies all
/// watchers on each write. Two write paths exist: [`replace`](Self::replace)
/// for pushed snapshots, and [`seed`](Self::seed) for the one-shot initial
/// fetch, which is ignored once any push has landed so that a slow fetch can
/// never overwrite live data.
#[derive(Debug)]
pub struct StateHolder<T> {
    tx: watch::Sender<Slot<T>>,
}

impl<T: Clone> StateHolder<T> {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Slot::default());
        StateHolder { tx }
    }

    /// Replaces the current snapshot with a pushed one.
    pub fn replace(&self, value: T) {
        self.tx.send_modify(|slot| {
            slot.value = Some(value);
            slot.pushed = true;
        });
    }

    /// Applies the initial-fetch result. Returns false (and leaves the holder
    /// untouched) if a push already landed.
    pub fn seed(&self, value: T) -> bool {
        let mut applied = false;
        self.tx.send_modify(|slot| {
            if !slot.pushed {
                slot.value = Some(value);
                applied = true;
            }
        });
        applied
    }

    /// Clones the current snapshot, or None if nothing has arrived yet.
    pub fn get(&self) -> Option<T> {
        self.tx.borrow().value.clone()
    }

    pub fn watch(&self) -> watch::Receiver<Slot<T>> {
        self.tx.subscribe()
    }
}

impl<T: Clone> Default for StateHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let holder: StateHolder<u32> = StateHolder::new();
        assert_eq!(holder.get(), None);
    }

    #[test]
    fn replace_overwrites_in_full() {
        let holder = StateHolder::new();
        holder.replace(1);
        holder.replace(2);
        assert_eq!(holder.get(), Some(2));
    }

    #[test]
    fn seed_applies_while_unpushed() {
        let holder = StateHolder::new();
        assert!(holder.seed(7));
        assert_eq!(holder.get(), Some(7));
    }

    #[test]
    fn late_seed_does_not_overwrite_push() {
        let holder = StateHolder::new();
        holder.replace(42);
        assert!(!holder.seed(7));
        assert_eq!(holder.get(), Some(42));
    }

    #[test]
    fn zero_value_push_is_distinguishable_from_unset() {
        let holder = StateHolder::new();
        holder.replace(0u32);
        assert_eq!(holder.get(), Some(0));
    }

    #[tokio::test]
    async fn watchers_see_replacements() {
        let holder = StateHolder::new();
        let mut rx = holder.watch();
        assert!(rx.borrow_and_update().value().is_none());

        holder.replace("a");
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().value(), Some(&"a"));
    }
}
