//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ActiveProfile、Repository、VoiceGenerator、AssetStorage）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Profile commands
    BootstrapProfile,
    InferProfile,
    SaveProfile,
    SwitchCompanion,
    // Handlers
    handlers::{
        BootstrapProfileHandler, InferProfileHandler, InferProfileResponse, SaveProfileHandler,
        SaveProfileResponse, SwitchCompanionHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Active profile registry
    ActiveProfilePort,
    PersistOutcome,
    // Asset storage
    AssetStorageError,
    AssetStoragePort,
    // Repositories
    ProfileRepositoryPort,
    RepositoryError,
    // Voice generator
    GeneratedVoice,
    GeneratorError,
    VoiceGeneratorPort,
};

pub use queries::{
    // Profile queries
    GetActiveProfile,
    GetEditableProfile,
    // Handlers
    handlers::{GetActiveProfileHandler, GetEditableProfileHandler, ProfileResponse},
};
