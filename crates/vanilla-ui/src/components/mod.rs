//! Reusable UI components
//!
//! Layout chrome (navbar, footer) and the small widgets pages are built
//! from.

pub mod alert;
pub mod counter;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod post_list;

pub use alert::{Alert, AlertKind};
pub use counter::Counter;
pub use footer::Footer;
pub use layout::Layout;
pub use navbar::Navbar;
pub use post_list::PostList;
