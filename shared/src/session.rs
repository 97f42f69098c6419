/// Whether the visitor holds an access token
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated { token: String },
}

impl SessionState {
    pub fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.trim().is_empty() => SessionState::Authenticated { token },
            _ => SessionState::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated { token } => Some(token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn Fn(&SessionState)>;

/// Owns the session state and tells every subscriber when it changes
#[derive(Default)]
pub struct SessionBus {
    state: SessionState,
    next_id: u32,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl SessionBus {
    pub fn new(state: SessionState) -> Self {
        Self {
            state,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn subscribe(&mut self, listener: impl Fn(&SessionState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn sign_in(&mut self, token: String) {
        self.set(SessionState::from_token(Some(token)));
    }

    pub fn sign_out(&mut self) {
        self.set(SessionState::Anonymous);
    }

    /// Listeners are only called on an actual change
    pub fn set(&mut self, state: SessionState) {
        if self.state == state {
            return;
        }
        self.state = state;

        for (_, listener) in self.listeners.iter() {
            listener(&self.state);
        }
    }
}

impl std::fmt::Debug for SessionBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionBus")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{SessionBus, SessionState},
        std::{cell::RefCell, rc::Rc},
    };

    #[test]
    fn subscribers_see_changes() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = SessionBus::default();

        let sink = Rc::clone(&seen);
        let id = bus.subscribe(move |state| sink.borrow_mut().push(state.is_authenticated()));

        bus.sign_in(String::from("token"));
        bus.sign_in(String::from("token")); // same state, no event
        bus.sign_out();

        assert_eq!(*seen.borrow(), vec![true, false]);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.sign_in(String::from("other"));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(bus.state().token(), Some("other"));
    }

    #[test]
    fn blank_tokens_are_anonymous() {
        assert_eq!(SessionState::from_token(Some(String::from("  "))), SessionState::Anonymous);
        assert_eq!(SessionState::from_token(None), SessionState::Anonymous);
        assert!(SessionState::from_token(Some(String::from("abc"))).is_authenticated());
    }
}
