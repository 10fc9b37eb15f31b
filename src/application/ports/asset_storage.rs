//! Asset Storage Port - 出站端口
//!
//! 定义陪伴者媒体资产目录与音频文件存储的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::profile::{CompanionId, VoiceProfile};

/// 资产存储错误
#[derive(Debug, Error)]
pub enum AssetStorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Asset Storage Port - 出站端口
///
/// 管理陪伴者资产目录和渲染音频文件
#[async_trait]
pub trait AssetStoragePort: Send + Sync {
    /// 获取陪伴者的资产目录（不触碰文件系统）
    fn companion_dir(&self, companion_id: CompanionId) -> PathBuf;

    /// 确保陪伴者资产目录存在
    ///
    /// 幂等，缺失则创建。创建失败不向调用方报错，
    /// 按请求路径原样返回，后续写入自会暴露问题
    async fn ensure_dir(&self, companion_id: CompanionId) -> PathBuf;

    /// 把渲染音频写入配置对应的资产路径
    async fn save_asset(
        &self,
        profile: &VoiceProfile,
        data: &[u8],
    ) -> Result<PathBuf, AssetStorageError>;

    /// 读取配置对应的渲染音频
    async fn read_asset(&self, profile: &VoiceProfile) -> Result<Vec<u8>, AssetStorageError>;

    /// 检查配置对应的渲染音频是否存在
    async fn asset_exists(&self, profile: &VoiceProfile) -> bool;
}
