//! Page components for the Vanilla UI
//!
//! One component per route. Each takes the [`UiHandle`](crate::state::UiHandle)
//! and is wrapped into a [`Page`](crate::browser::Page) by the route table.

pub mod about;
pub mod blog;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

pub use about::About;
pub use blog::Blog;
pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
