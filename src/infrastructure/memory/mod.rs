//! Memory Layer - In-Memory State Management
//!
//! 实现 ActiveProfile 注册表，管理当前激活语音配置的内存状态

mod active_profile;

pub use active_profile::InMemoryActiveProfileRegistry;
