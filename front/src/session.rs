use {
    gloo::storage::{LocalStorage, Storage as _},
    shared::{SessionBus, SessionState},
    std::{cell::RefCell, rc::Rc},
    yew::{hook, use_context, use_effect_with, use_state},
};

const TOKEN_KEY: &str = "access_token";
pub const EMAIL_KEY: &str = "userEmail";

/// The session bus, handed down the tree as a context
#[derive(Clone)]
pub struct SessionStore(Rc<RefCell<SessionBus>>);

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SessionStore {
    /// Picks up a token left by a previous visit
    pub fn load() -> Self {
        let token = LocalStorage::get::<String>(TOKEN_KEY).ok();

        Self(Rc::new(RefCell::new(SessionBus::new(SessionState::from_token(token)))))
    }

    pub fn state(&self) -> SessionState {
        self.0.borrow().state().clone()
    }

    pub fn sign_in(&self, token: String, email: &str) {
        if let Err(e) = LocalStorage::set(TOKEN_KEY, &token) {
            error!(format!("Could not store the session token: {e}"));
        }
        if let Err(e) = LocalStorage::set(EMAIL_KEY, email) {
            warn!(format!("Could not store the session email: {e}"));
        }

        self.0.borrow_mut().sign_in(token);
    }

    pub fn sign_out(&self) {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(EMAIL_KEY);

        self.0.borrow_mut().sign_out();
    }
}

/// Current session state, re-rendering the caller whenever it changes
#[hook]
pub fn use_session() -> (SessionState, Option<SessionStore>) {
    let store = use_context::<SessionStore>();
    let state = use_state(|| {
        store
            .as_ref()
            .map(SessionStore::state)
            .unwrap_or_default()
    });

    {
        let state = state.clone();
        use_effect_with(store.clone(), move |store| {
            let subscription = store.as_ref().map(|store| {
                let id = store
                    .0
                    .borrow_mut()
                    .subscribe(move |new_state| state.set(new_state.clone()));
                (store.clone(), id)
            });

            move || {
                if let Some((store, id)) = subscription {
                    store.0.borrow_mut().unsubscribe(id);
                }
            }
        });
    }

    ((*state).clone(), store)
}
