//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::{CompanionId, VoiceProfile};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

// ============================================================================
// Profile Repository
// ============================================================================

/// Profile Repository Port
///
/// 每个陪伴者只有一条激活记录，后写覆盖，无版本无历史
#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    /// 保存激活配置，按 companion_id 覆盖已有记录
    async fn save_active(&self, profile: &VoiceProfile) -> Result<(), RepositoryError>;

    /// 读取激活配置
    ///
    /// 无记录或记录损坏都返回 None，调用方把缺失当作常态处理
    async fn load_active(
        &self,
        companion_id: CompanionId,
    ) -> Result<Option<VoiceProfile>, RepositoryError>;
}
