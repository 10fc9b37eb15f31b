//! Profile Context - Aggregate Root

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CompanionId, SpeechParams, VoiceSpeed, VoiceStyle, VoiceTone};

/// VoiceProfile 聚合根
///
/// 不变量:
/// - 五个配置字段全量填充，不存在部分构造的 profile
/// - 值对象语义：修改即构造新值，调用方不原地改字段
/// - 相等性只看配置字段，updated_at 仅作记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceProfile {
    companion_id: CompanionId,
    style: VoiceStyle,
    tone: VoiceTone,
    speed: VoiceSpeed,
    asset_folder: PathBuf,
    updated_at: DateTime<Utc>,
}

impl VoiceProfile {
    /// 创建新配置
    pub fn new(
        companion_id: CompanionId,
        style: VoiceStyle,
        tone: VoiceTone,
        speed: VoiceSpeed,
        asset_folder: PathBuf,
    ) -> Self {
        Self {
            companion_id,
            style,
            tone,
            speed,
            asset_folder,
            updated_at: Utc::now(),
        }
    }

    /// 从持久化记录重建，保留原 updated_at
    pub fn restore(
        companion_id: CompanionId,
        style: VoiceStyle,
        tone: VoiceTone,
        speed: VoiceSpeed,
        asset_folder: PathBuf,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            companion_id,
            style,
            tone,
            speed,
            asset_folder,
            updated_at,
        }
    }

    /// 兜底默认配置 - 编辑器在没有激活 profile 时的起点
    pub fn fallback(companion_id: CompanionId, asset_folder: PathBuf) -> Self {
        Self::new(
            companion_id,
            VoiceStyle::Gentle,
            VoiceTone::Neutral,
            VoiceSpeed::Normal,
            asset_folder,
        )
    }

    /// 替换说话风格，返回新值
    pub fn with_style(self, style: VoiceStyle) -> Self {
        Self {
            style,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// 替换声调，返回新值
    pub fn with_tone(self, tone: VoiceTone) -> Self {
        Self {
            tone,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// 替换语速，返回新值
    pub fn with_speed(self, speed: VoiceSpeed) -> Self {
        Self {
            speed,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// 渲染资产文件名，由三个配置轴拼接
    pub fn asset_filename(&self) -> String {
        format!(
            "{}_{}_{}.wav",
            self.style.as_str(),
            self.tone.as_str(),
            self.speed.as_str()
        )
    }

    /// 渲染资产完整路径
    pub fn asset_path(&self) -> PathBuf {
        self.asset_folder.join(self.asset_filename())
    }

    /// 预览播放与生成共用的合成参数
    pub fn speech_params(&self) -> SpeechParams {
        SpeechParams {
            rate: self.speed.utterance_rate(),
            pitch: self.tone.pitch_multiplier(),
        }
    }

    // Getters
    pub fn companion_id(&self) -> &CompanionId {
        &self.companion_id
    }

    pub fn style(&self) -> VoiceStyle {
        self.style
    }

    pub fn tone(&self) -> VoiceTone {
        self.tone
    }

    pub fn speed(&self) -> VoiceSpeed {
        self.speed
    }

    pub fn asset_folder(&self) -> &Path {
        &self.asset_folder
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl PartialEq for VoiceProfile {
    fn eq(&self, other: &Self) -> bool {
        self.companion_id == other.companion_id
            && self.style == other.style
            && self.tone == other.tone
            && self.speed == other.speed
            && self.asset_folder == other.asset_folder
    }
}

impl Eq for VoiceProfile {}
