//! Profile Context - Errors

use thiserror::Error;

use super::CompanionId;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("推理失败: {0}")]
    InferenceFailed(String),

    #[error("语音生成失败: {0}")]
    GenerationFailed(String),

    #[error("存储错误: {0}")]
    StorageError(String),

    #[error("没有激活的语音配置: {0}")]
    NoActiveProfile(CompanionId),
}
