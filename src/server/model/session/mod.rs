//! Session data models.
//!
//! Type-safe wrappers over tower-sessions storage. The session store itself is injected by
//! the `SessionManagerLayer` built at startup; these wrappers only define what is stored
//! under which key.

pub mod user;
