//! 应用层错误定义
//!
//! 统一的命令/查询错误类型，对外映射为四类：
//! 推理失败 / 生成失败 / 存储失败 / 缺少激活配置

use thiserror::Error;

use crate::domain::profile::CompanionId;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 推理失败
    #[error("Inference error: {0}")]
    InferenceError(String),

    /// 语音生成失败
    #[error("Generation error: {0}")]
    GenerationError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 缺少激活配置
    #[error("No active profile for companion: {0}")]
    NoActiveProfile(CompanionId),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<crate::application::ports::GeneratorError> for ApplicationError {
    fn from(err: crate::application::ports::GeneratorError) -> Self {
        Self::GenerationError(err.to_string())
    }
}

impl From<crate::application::ports::AssetStorageError> for ApplicationError {
    fn from(err: crate::application::ports::AssetStorageError) -> Self {
        Self::StorageError(err.to_string())
    }
}
