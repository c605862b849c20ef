//! Behavioral tests for the signal bridge and command handle

use futures::StreamExt;
use leptos::prelude::*;
use vanilla_core::{paths, AppCommand, ThemeMode, User};

use super::Harness;
use crate::state::{sync, UiHandle};

#[test]
fn given_handle_when_sending_then_command_received_in_order() {
    let (ui, mut commands) = UiHandle::channel();
    ui.send(AppCommand::Increment);
    ui.navigate(paths::ABOUT);

    let received = futures::executor::block_on(async {
        vec![commands.next().await, commands.next().await]
    });
    assert_eq!(
        received,
        vec![
            Some(AppCommand::Increment),
            Some(AppCommand::Navigate(paths::ABOUT.to_string())),
        ]
    );
}

#[test]
fn given_closed_receiver_when_sending_then_no_panic() {
    let (ui, commands) = UiHandle::channel();
    drop(commands);
    ui.send(AppCommand::Increment);
}

#[test]
fn given_counter_commands_when_dispatched_then_signal_follows() {
    let harness = Harness::at(paths::HOME);
    harness.ctx.dispatch(AppCommand::Increment);
    harness.ctx.dispatch(AppCommand::Increment);
    harness.ctx.dispatch(AppCommand::Decrement);
    assert_eq!(harness.ui.signals.count.get_untracked(), 1);

    harness.ctx.dispatch(AppCommand::ResetCounter);
    assert_eq!(harness.ui.signals.count.get_untracked(), 0);
}

#[test]
fn given_navigation_when_route_changes_then_path_signal_updates() {
    let harness = Harness::at(paths::HOME);
    harness.ctx.start();
    harness.ctx.dispatch(AppCommand::Navigate(paths::ABOUT.to_string()));
    assert_eq!(harness.ui.signals.path.get_untracked(), paths::ABOUT);
}

#[test]
fn given_theme_toggle_when_dispatched_then_theme_signal_updates() {
    let harness = Harness::at(paths::HOME);
    harness.ctx.start();
    sync(&harness.ctx, harness.ui.signals);
    assert_eq!(harness.ui.signals.theme.get_untracked(), ThemeMode::System);

    harness.ctx.dispatch(AppCommand::ToggleTheme);
    assert_eq!(
        harness.ui.signals.theme.get_untracked(),
        ThemeMode::System.next()
    );
}

#[test]
fn given_login_when_dispatched_then_user_signal_set_and_dashboard_shown() {
    let harness = Harness::at(paths::LOGIN);
    harness.ctx.start();

    harness
        .ctx
        .dispatch(AppCommand::Login(User::from_email("ada@example.com")));

    let user = harness.ui.signals.user.get_untracked().expect("signed in");
    assert_eq!(user.name, "ada");
    assert_eq!(harness.ui.signals.path.get_untracked(), paths::DASHBOARD);
}

#[test]
fn given_session_when_logout_dispatched_then_user_cleared_and_login_shown() {
    let harness = Harness::at(paths::HOME);
    harness.ctx.start();
    harness
        .ctx
        .dispatch(AppCommand::Login(User::new("Ada", "ada@example.com")));

    harness.ctx.dispatch(AppCommand::Logout);

    assert!(harness.ui.signals.user.get_untracked().is_none());
    assert_eq!(harness.ui.signals.path.get_untracked(), paths::LOGIN);
}
