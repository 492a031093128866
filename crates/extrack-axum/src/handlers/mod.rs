//! HTTP handlers, one module per resource.
//!
//! Handlers only translate between HTTP and the tracker service; all
//! validation happens in `extrack-core`.

pub mod exercises;
pub mod users;
