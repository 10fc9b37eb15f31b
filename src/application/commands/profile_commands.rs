//! Profile Commands - V2 架构

use crate::domain::profile::{CompanionId, VoiceSpeed, VoiceStyle, VoiceTone};
use crate::domain::FacialFeatures;

/// 推导初始配置命令（陪伴者创建时）
#[derive(Debug, Clone)]
pub struct InferProfile {
    pub companion_id: CompanionId,
    pub features: FacialFeatures,
}

/// 提交编辑后的配置命令
///
/// 两阶段提交：先等外部生成完成并落盘资产，再激活
#[derive(Debug, Clone)]
pub struct SaveProfile {
    pub companion_id: CompanionId,
    pub style: VoiceStyle,
    pub tone: VoiceTone,
    pub speed: VoiceSpeed,
}

/// 启动恢复命令
#[derive(Debug, Clone)]
pub struct BootstrapProfile {
    pub companion_id: CompanionId,
}

/// 切换陪伴者命令
#[derive(Debug, Clone)]
pub struct SwitchCompanion {
    pub companion_id: CompanionId,
}
