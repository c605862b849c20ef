//! View-facing application state
//!
//! Views never touch the [`AppContext`] directly. They read reactive
//! signals mirrored from the core stores and send [`AppCommand`]s through
//! an unbounded channel that a single task drains on the event loop.

use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use leptos::prelude::*;
use tracing::{debug, warn};
use vanilla_core::{
    AppCommand, AppContext, AppEvent, EventKind, PostsState, ThemeMode, User,
};

use crate::browser::Page;

/// Signals mirrored from the core.
#[derive(Debug, Clone, Copy)]
pub struct UiSignals {
    /// Path of the last route change.
    pub path: RwSignal<String>,
    pub theme: RwSignal<ThemeMode>,
    pub count: RwSignal<i64>,
    pub user: RwSignal<Option<User>>,
    pub posts: RwSignal<PostsState>,
}

impl Default for UiSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl UiSignals {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new("/".to_string()),
            theme: RwSignal::new(ThemeMode::System),
            count: RwSignal::new(0),
            user: RwSignal::new(None),
            posts: RwSignal::new(PostsState::default()),
        }
    }
}

/// What every view receives: signals to read and a command sender.
#[derive(Debug, Clone, Copy)]
pub struct UiHandle {
    commands: StoredValue<UnboundedSender<AppCommand>>,
    pub signals: UiSignals,
}

impl UiHandle {
    /// A handle and the receiving end of its command channel.
    pub fn channel() -> (Self, UnboundedReceiver<AppCommand>) {
        let (tx, rx) = mpsc::unbounded();
        let handle = Self {
            commands: StoredValue::new(tx),
            signals: UiSignals::new(),
        };
        (handle, rx)
    }

    /// Queue `command` for the context.
    pub fn send(&self, command: AppCommand) {
        match self
            .commands
            .try_with_value(|tx| tx.unbounded_send(command))
        {
            Some(Ok(())) => {}
            Some(Err(e)) => warn!(error = %e, "command channel closed"),
            None => warn!("command sender disposed"),
        }
    }

    pub fn navigate(&self, path: &str) {
        self.send(AppCommand::Navigate(path.to_string()));
    }
}

/// Mirror store and bus changes into `signals`.
pub fn bridge(ctx: &AppContext<Page>, signals: UiSignals) {
    let stores = ctx.stores();
    stores.counter.store().subscribe(move |count| signals.count.set(*count));
    stores
        .auth
        .store()
        .subscribe(move |state| signals.user.set(state.user.clone()));
    stores
        .posts
        .store()
        .subscribe(move |state| signals.posts.set(state.clone()));

    ctx.bus().subscribe(EventKind::RouteChanged, move |event| {
        if let AppEvent::RouteChanged { path } = event {
            signals.path.set(path.clone());
        }
    });
    ctx.bus().subscribe(EventKind::ThemeChanged, move |event| {
        if let AppEvent::ThemeChanged { mode, .. } = event {
            signals.theme.set(*mode);
        }
    });
}

/// Copy state that changed without an announcement (startup).
pub fn sync(ctx: &AppContext<Page>, signals: UiSignals) {
    signals.theme.set(ctx.theme().mode());
    signals.count.set(ctx.stores().counter.count());
    signals.user.set(ctx.stores().auth.user());
    signals.path.set(ctx.router().current_path());
}

/// Dispatch commands until every sender is gone.
pub async fn run_commands(ctx: Rc<AppContext<Page>>, mut commands: UnboundedReceiver<AppCommand>) {
    while let Some(command) = commands.next().await {
        ctx.dispatch(command);
    }
    debug!("command channel drained");
}
