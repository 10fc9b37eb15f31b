//! 语音配置推理
//!
//! 从面部特征向量推导默认语音配置。固定规则决策，非学习模型：
//! 三个配置轴各自独立求值，每轴按声明顺序取第一个命中的分支。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::profile::{CompanionId, VoiceProfile, VoiceSpeed, VoiceStyle, VoiceTone};

/// 面部特征向量
///
/// 四个独立测量值，约定归一化到 [0.0, 1.0]。推理本身不做范围校验，
/// 越界值只是无法命中阈值分支。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FacialFeatures {
    /// 下颌锐度
    pub jaw_sharpness: f32,
    /// 眼睛大小
    pub eye_size: f32,
    /// 柔和度
    pub softness: f32,
    /// 活力值
    pub energy: f32,
}

/// 风格轴：高活力或锐利下颌 → 有力，柔和 → 温柔，否则沉稳
///
/// 阈值为严格大于，特征值恰好等于阈值时落入下一分支
fn infer_style(features: &FacialFeatures) -> VoiceStyle {
    if features.energy > 0.7 || features.jaw_sharpness > 0.7 {
        VoiceStyle::Energetic
    } else if features.softness > 0.7 {
        VoiceStyle::Gentle
    } else {
        VoiceStyle::Calm
    }
}

/// 声调轴：大眼 → 明亮，锐利下颌 → 低沉，否则标准
fn infer_tone(features: &FacialFeatures) -> VoiceTone {
    if features.eye_size > 0.6 {
        VoiceTone::Bright
    } else if features.jaw_sharpness > 0.7 {
        VoiceTone::Deep
    } else {
        VoiceTone::Neutral
    }
}

/// 语速轴：高活力 → 快，柔和 → 慢，否则标准
fn infer_speed(features: &FacialFeatures) -> VoiceSpeed {
    if features.energy > 0.8 {
        VoiceSpeed::Fast
    } else if features.softness > 0.7 {
        VoiceSpeed::Slow
    } else {
        VoiceSpeed::Normal
    }
}

/// 从面部特征推导语音配置
///
/// `asset_folder` 由调用方先经目录确保服务处理，这里只做赋值
pub fn infer_profile(
    companion_id: CompanionId,
    features: &FacialFeatures,
    asset_folder: PathBuf,
) -> VoiceProfile {
    VoiceProfile::new(
        companion_id,
        infer_style(features),
        infer_tone(features),
        infer_speed(features),
        asset_folder,
    )
}
