//! Chat session state
//!
//! This module owns the sidebar's session list: the `ChatSession` record,
//! the display ordering rule, and the `SessionStore` that maintains the
//! ordered set of sessions and the active-session pointer.

pub mod store;
pub mod types;

pub use store::SessionStore;
pub use types::{display_order, new_session_id, ChatSession};
