//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod memory;
pub mod persistence;
pub mod state;

pub use memory::InMemoryActiveProfileRegistry;
pub use state::AppState;
