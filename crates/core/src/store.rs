//! Observable stores: counter, session, posts.
//!
//! A [`Store`] is a shared cell of state plus a listener registry. Listeners
//! receive the new state after every mutation, including mutations that
//! leave the value unchanged.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::events::{AppEvent, EventBus};
use crate::platform::KeyValueStorage;
use crate::result::ResultExt;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type StoreListener<S> = Rc<dyn Fn(&S)>;

struct StoreInner<S> {
    state: RefCell<S>,
    listeners: RefCell<Vec<(SubscriptionId, StoreListener<S>)>>,
    next_id: Cell<u64>,
}

/// Cloneable handle to shared observable state.
pub struct Store<S> {
    inner: Rc<StoreInner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

impl<S: Default + Clone + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Clone + 'static> Store<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Replace the state and notify.
    pub fn set(&self, state: S) {
        *self.inner.state.borrow_mut() = state;
        self.notify();
    }

    /// Mutate the state in place and notify.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.inner.state.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0.wrapping_add(1));
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        let state = self.get();
        let snapshot: Vec<StoreListener<S>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(&state);
        }
    }
}

// ---------------------------------------------------------------------------
// Counter
// ---------------------------------------------------------------------------

/// The home page's demo counter.
#[derive(Debug, Clone, Default)]
pub struct CounterStore {
    store: Store<i64>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> i64 {
        self.store.get()
    }

    pub fn increment(&self) -> i64 {
        self.store.update(|count| *count = count.saturating_add(1));
        self.count()
    }

    pub fn decrement(&self) -> i64 {
        self.store.update(|count| *count = count.saturating_sub(1));
        self.count()
    }

    pub fn reset(&self) {
        self.store.set(0);
    }

    pub const fn store(&self) -> &Store<i64> {
        &self.store
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The signed-in user, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// User whose display name is the local part of `email`.
    pub fn from_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = email
            .split_once('@')
            .map_or(email.as_str(), |(local, _)| local)
            .to_string();
        Self { name, email }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

/// Session state backed by key-value storage.
#[derive(Clone)]
pub struct AuthStore {
    store: Store<AuthState>,
    storage: Rc<dyn KeyValueStorage>,
    bus: EventBus,
    storage_key: String,
}

impl fmt::Debug for AuthStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &self.store.get())
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

impl AuthStore {
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        bus: EventBus,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            store: Store::default(),
            storage,
            bus,
            storage_key: storage_key.into(),
        }
    }

    pub fn state(&self) -> AuthState {
        self.store.get()
    }

    pub fn user(&self) -> Option<User> {
        self.store.get().user
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_authenticated
    }

    pub const fn store(&self) -> &Store<AuthState> {
        &self.store
    }

    /// Persist `user` and mark the session authenticated.
    pub fn login(&self, user: User) {
        match serde_json::to_string(&user) {
            Ok(json) => {
                let _ = self
                    .storage
                    .set(&self.storage_key, &json)
                    .into_option_logged();
            }
            Err(e) => warn!(error = %e, "failed to serialize session user"),
        }
        info!(email = %user.email, "user logged in");
        self.set_user(Some(user));
    }

    /// Forget the session user.
    pub fn logout(&self) {
        let _ = self.storage.remove(&self.storage_key).into_option_logged();
        info!("user logged out");
        self.set_user(None);
    }

    /// Restore the session from storage. Returns whether a user was found.
    ///
    /// A malformed stored value is removed.
    pub fn check_auth(&self) -> bool {
        let Some(raw) = self
            .storage
            .get(&self.storage_key)
            .or_default_logged(None)
        else {
            return false;
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                debug!(email = %user.email, "session restored");
                self.set_user(Some(user));
                true
            }
            Err(e) => {
                warn!(error = %e, key = %self.storage_key, "discarding malformed session");
                let _ = self.storage.remove(&self.storage_key).into_option_logged();
                false
            }
        }
    }

    fn set_user(&self, user: Option<User>) {
        self.store.set(AuthState {
            is_authenticated: user.is_some(),
            user: user.clone(),
        });
        self.bus.publish(&AppEvent::SessionChanged { user });
    }
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

/// A blog post as served by the posts API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Identifies one fetch started with [`PostsStore::begin_loading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// Loading state of the blog listing.
///
/// Only the most recently started fetch may write its outcome; older
/// tickets are ignored when they resolve.
#[derive(Debug, Clone, Default)]
pub struct PostsStore {
    store: Store<PostsState>,
    latest: Rc<Cell<u64>>,
}

impl PostsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PostsState {
        self.store.get()
    }

    pub const fn store(&self) -> &Store<PostsState> {
        &self.store
    }

    fn issue(&self) -> FetchTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        FetchTicket(next)
    }

    /// Whether `ticket` belongs to the latest fetch.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Mark a fetch as in flight, clearing the previous error.
    pub fn begin_loading(&self) -> FetchTicket {
        let ticket = self.issue();
        self.store.update(|state| {
            state.is_loading = true;
            state.error = None;
        });
        ticket
    }

    /// Record the outcome of the fetch behind `ticket`. Posts from an
    /// earlier success are kept on failure.
    ///
    /// Returns `false`, leaving the state untouched, if a newer fetch was
    /// started or the fetch was abandoned.
    pub fn finish(
        &self,
        ticket: FetchTicket,
        outcome: std::result::Result<Vec<Post>, String>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.latest.get(), "discarding stale posts fetch");
            return false;
        }
        self.store.update(|state| {
            state.is_loading = false;
            match outcome {
                Ok(posts) => {
                    state.posts = posts;
                    state.error = None;
                }
                Err(message) => state.error = Some(message),
            }
        });
        true
    }

    /// Invalidate any fetch in flight.
    pub fn abandon(&self) {
        self.issue();
        if self.store.get().is_loading {
            self.store.update(|state| state.is_loading = false);
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::events::EventKind;
    use crate::headless::MemoryStorage;

    fn auth(storage: &Rc<MemoryStorage>) -> (AuthStore, EventBus) {
        let bus = EventBus::new();
        let store = AuthStore::new(
            Rc::clone(storage) as Rc<dyn KeyValueStorage>,
            bus.clone(),
            "user",
        );
        (store, bus)
    }

    #[test]
    fn given_listener_when_state_set_then_receives_new_state() {
        let store = Store::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |value| sink.borrow_mut().push(*value));

        store.set(5);
        store.update(|v| *v += 1);

        assert_eq!(*seen.borrow(), vec![5, 6]);
    }

    #[test]
    fn given_unsubscribed_listener_when_set_then_not_called() {
        let store = Store::new(0);
        let calls = Rc::new(Cell::new(0));
        let sink = Rc::clone(&calls);
        let id = store.subscribe(move |_| sink.set(sink.get() + 1));

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(3);

        assert_eq!(calls.get(), 0);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn given_listener_reading_store_when_notified_then_no_borrow_conflict() {
        let store = Store::new(0);
        let reader = store.clone();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        store.subscribe(move |_| sink.set(reader.get()));

        store.set(9);

        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn given_counter_when_incremented_and_reset_then_counts() {
        let counter = CounterStore::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.decrement(), 1);
        counter.reset();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.decrement(), -1);
    }

    #[test]
    fn given_login_when_called_then_user_persisted_and_event_published() {
        let storage = Rc::new(MemoryStorage::new());
        let (store, bus) = auth(&storage);
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        bus.subscribe(EventKind::SessionChanged, move |e| sink.borrow_mut().push(e.clone()));

        let user = User::from_email("ada@example.com");
        store.login(user.clone());

        assert!(store.is_authenticated());
        assert_eq!(user.name, "ada");
        let raw = storage.get("user").unwrap().unwrap();
        assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
        assert_eq!(
            *events.borrow(),
            vec![AppEvent::SessionChanged { user: Some(user) }]
        );
    }

    #[test]
    fn given_logged_in_when_logout_then_key_removed() {
        let storage = Rc::new(MemoryStorage::new());
        let (store, _) = auth(&storage);
        store.login(User::new("Ada", "ada@example.com"));

        store.logout();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(storage.get("user").unwrap().is_none());
    }

    #[test]
    fn given_stored_user_when_check_auth_then_restored() {
        let storage = Rc::new(MemoryStorage::with_entries([(
            "user",
            r#"{"name":"Ada","email":"ada@example.com"}"#,
        )]));
        let (store, _) = auth(&storage);

        assert!(store.check_auth());
        assert_eq!(store.user(), Some(User::new("Ada", "ada@example.com")));
    }

    #[test]
    fn given_malformed_user_when_check_auth_then_key_removed() {
        let storage = Rc::new(MemoryStorage::with_entries([("user", "{not json")]));
        let (store, _) = auth(&storage);

        assert!(!store.check_auth());
        assert!(storage.get("user").unwrap().is_none());
    }

    #[test]
    fn given_unavailable_storage_when_login_then_in_memory_session() {
        let storage = Rc::new(MemoryStorage::unavailable());
        let (store, _) = auth(&storage);

        store.login(User::new("Ada", "ada@example.com"));

        assert!(store.is_authenticated());
        assert!(!store.check_auth());
    }

    #[test]
    fn given_posts_json_when_deserialized_then_camel_case_fields() {
        let post: Post =
            serde_json::from_str(r#"{"userId":1,"id":7,"title":"Hello","body":"World"}"#)
                .unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 7);
    }

    #[test]
    fn given_failed_fetch_after_success_when_finished_then_posts_kept() {
        let posts = PostsStore::new();
        let first = posts.begin_loading();
        assert!(posts.state().is_loading);
        assert!(posts.finish(first, Ok(vec![sample_post(1)])));

        let second = posts.begin_loading();
        assert!(posts.finish(second, Err("offline".to_string())));

        let state = posts.state();
        assert!(!state.is_loading);
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.error.as_deref(), Some("offline"));
    }

    fn sample_post(id: u64) -> Post {
        Post {
            user_id: 1,
            id,
            title: format!("post {id}"),
            body: "b".into(),
        }
    }

    #[test]
    fn given_newer_fetch_when_older_resolves_last_then_older_ignored() {
        let posts = PostsStore::new();
        let older = posts.begin_loading();
        let newer = posts.begin_loading();

        assert!(posts.finish(newer, Ok(vec![sample_post(2)])));
        assert!(!posts.finish(older, Err("late failure".to_string())));

        let state = posts.state();
        assert_eq!(state.posts, vec![sample_post(2)]);
        assert_eq!(state.error, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn given_newer_fetch_pending_when_older_resolves_then_still_loading() {
        let posts = PostsStore::new();
        let older = posts.begin_loading();
        let _newer = posts.begin_loading();

        assert!(!posts.finish(older, Ok(vec![sample_post(1)])));

        let state = posts.state();
        assert!(state.is_loading);
        assert!(state.posts.is_empty());
    }

    #[test]
    fn given_abandoned_fetch_when_resolved_then_ignored_and_not_loading() {
        let posts = PostsStore::new();
        let ticket = posts.begin_loading();
        posts.abandon();

        assert!(!posts.state().is_loading);
        assert!(!posts.is_current(ticket));
        assert!(!posts.finish(ticket, Ok(vec![sample_post(3)])));
        assert!(posts.state().posts.is_empty());
    }
}
