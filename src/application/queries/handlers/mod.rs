//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod profile_handlers;

pub use profile_handlers::*;
