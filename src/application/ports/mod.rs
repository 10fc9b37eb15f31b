//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod active_profile;
mod asset_storage;
mod repositories;
mod voice_generator;

pub use active_profile::{ActiveProfilePort, PersistOutcome};
pub use asset_storage::{AssetStorageError, AssetStoragePort};
pub use repositories::{ProfileRepositoryPort, RepositoryError};
pub use voice_generator::{GeneratedVoice, GeneratorError, VoiceGeneratorPort};
