//! Active Profile Port - 激活配置注册表抽象
//!
//! 定义"当前激活语音配置"的状态管理接口，具体实现在 infrastructure/memory 层

use async_trait::async_trait;

use crate::domain::profile::{CompanionId, VoiceProfile};

/// 持久化结果状态
///
/// set_active 的内存转移无条件发生；写盘失败不抛错，由本状态对内部可见
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// 已落盘
    Persisted,
    /// 写盘失败，内存状态仍已前进
    Failed,
}

impl PersistOutcome {
    pub fn is_persisted(&self) -> bool {
        matches!(self, PersistOutcome::Persisted)
    }
}

/// Active Profile Port
///
/// 进程内单一激活配置的注册表。状态机只有两态：
/// `Unset`（初始）与 `Set(profile)`。
///
/// 约束:
/// - 单写者共享读，bootstrap/switch/set/get 互为临界区串行执行
/// - 下游一律经由本接口读取激活配置，不绕过去读存储
#[async_trait]
pub trait ActiveProfilePort: Send + Sync {
    /// 启动恢复：从存储整体重载，有记录则激活，无记录则清空
    async fn bootstrap(&self, companion_id: CompanionId) -> Option<VoiceProfile>;

    /// 切换陪伴者：转移规则与 bootstrap 一致，旧缓存无条件丢弃
    ///
    /// 新陪伴者没有记录时进入 `Unset` 是正常结果
    async fn switch_companion(&self, companion_id: CompanionId) -> Option<VoiceProfile>;

    /// 提交激活配置：先更新内存，再同步写穿存储
    async fn set_active(&self, profile: VoiceProfile) -> PersistOutcome;

    /// 读取当前激活配置，纯内存读，不触发 IO
    async fn get_active(&self) -> Option<VoiceProfile>;
}
