/// Cookie decision of the visitor. Nothing but the decision itself is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsentState {
    #[default]
    Undecided,
    Accepted,
    Rejected,
}

impl ConsentState {
    fn stored_value(self) -> Option<&'static str> {
        match self {
            ConsentState::Undecided => None,
            ConsentState::Accepted => Some("ACCEPTED"),
            ConsentState::Rejected => Some("REJECTED"),
        }
    }

    fn from_stored(value: &str) -> Self {
        match value {
            "ACCEPTED" => ConsentState::Accepted,
            "REJECTED" => ConsentState::Rejected,
            _ => ConsentState::Undecided,
        }
    }
}

/// Durable key-value slot for the consent decision. Implementations swallow
/// storage errors; an unreadable slot simply reads as undecided.
pub trait ConsentStore {
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str);
}

impl<S: ConsentStore + ?Sized> ConsentStore for &S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn store(&self, value: &str) {
        (**self).store(value)
    }
}

pub struct LocalStorageConsent {
    key: &'static str,
}

impl LocalStorageConsent {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl ConsentStore for LocalStorageConsent {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(self.key).ok()?
    }

    fn store(&self, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(self.key, value) {
                    log::debug!("Could not persist consent: {:?}", e);
                }
            }
            None => log::debug!("Local storage unavailable, consent not persisted"),
        }
    }
}

pub struct ConsentGate<S> {
    store: S,
}

impl<S: ConsentStore> ConsentGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn get_consent(&self) -> ConsentState {
        self.store
            .load()
            .map(|value| ConsentState::from_stored(&value))
            .unwrap_or_default()
    }

    pub fn accept(&self) -> ConsentState {
        self.record(ConsentState::Accepted)
    }

    /// Rejection is persisted too, so a returning visitor lands on the
    /// restricted screen until they accept.
    pub fn reject(&self) -> ConsentState {
        self.record(ConsentState::Rejected)
    }

    pub fn allows_form(state: ConsentState) -> bool {
        state == ConsentState::Accepted
    }

    fn record(&self, state: ConsentState) -> ConsentState {
        if let Some(value) = state.stored_value() {
            self.store.store(value);
        }
        log::info!("Cookie consent recorded: {:?}", state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
    }

    impl ConsentStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn store(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn defaults_to_undecided() {
        let store = MemoryStore::default();
        assert_eq!(ConsentGate::new(&store).get_consent(), ConsentState::Undecided);
    }

    #[test]
    fn accept_survives_a_fresh_load() {
        let store = MemoryStore::default();
        assert_eq!(ConsentGate::new(&store).accept(), ConsentState::Accepted);

        let reloaded = ConsentGate::new(&store);
        assert_eq!(reloaded.get_consent(), ConsentState::Accepted);
        assert_eq!(store.load().as_deref(), Some("ACCEPTED"));
    }

    #[test]
    fn reject_survives_a_fresh_load() {
        let store = MemoryStore::default();
        ConsentGate::new(&store).reject();
        assert_eq!(ConsentGate::new(&store).get_consent(), ConsentState::Rejected);
    }

    #[test]
    fn accepting_after_rejecting_overrides() {
        let store = MemoryStore::default();
        let gate = ConsentGate::new(&store);
        gate.reject();
        gate.accept();
        assert_eq!(ConsentGate::new(&store).get_consent(), ConsentState::Accepted);
    }

    #[test]
    fn garbage_reads_as_undecided() {
        let store = MemoryStore::default();
        store.store("maybe");
        assert_eq!(ConsentGate::new(&store).get_consent(), ConsentState::Undecided);
    }

    #[test]
    fn only_accepted_reaches_the_form() {
        assert!(ConsentGate::<MemoryStore>::allows_form(ConsentState::Accepted));
        assert!(!ConsentGate::<MemoryStore>::allows_form(ConsentState::Undecided));
        assert!(!ConsentGate::<MemoryStore>::allows_form(ConsentState::Rejected));
    }
}
