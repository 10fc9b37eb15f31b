//! Profile Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 陪伴者唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanionId(Uuid);

impl CompanionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CompanionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CompanionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 说话风格 - 对应陪伴者的人格印象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceStyle {
    Calm,
    Energetic,
    Gentle,
    Lively,
    Sexy,
    Mentor,
    Friendly,
    Coach,
}

impl VoiceStyle {
    /// 全部风格（供编辑器选择列表遍历）
    pub const ALL: [VoiceStyle; 8] = [
        VoiceStyle::Calm,
        VoiceStyle::Energetic,
        VoiceStyle::Gentle,
        VoiceStyle::Lively,
        VoiceStyle::Sexy,
        VoiceStyle::Mentor,
        VoiceStyle::Friendly,
        VoiceStyle::Coach,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceStyle::Calm => "calm",
            VoiceStyle::Energetic => "energetic",
            VoiceStyle::Gentle => "gentle",
            VoiceStyle::Lively => "lively",
            VoiceStyle::Sexy => "sexy",
            VoiceStyle::Mentor => "mentor",
            VoiceStyle::Friendly => "friendly",
            VoiceStyle::Coach => "coach",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "calm" => Some(VoiceStyle::Calm),
            "energetic" => Some(VoiceStyle::Energetic),
            "gentle" => Some(VoiceStyle::Gentle),
            "lively" => Some(VoiceStyle::Lively),
            "sexy" => Some(VoiceStyle::Sexy),
            "mentor" => Some(VoiceStyle::Mentor),
            "friendly" => Some(VoiceStyle::Friendly),
            "coach" => Some(VoiceStyle::Coach),
            _ => None,
        }
    }
}

/// 声调 - 推理与 TTS 参数映射使用的工作集
///
/// 更宽的声乐音域分类见 [`VocalRegister`]（预留，尚未接入推理）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceTone {
    /// 明亮・高音
    Bright,
    /// 低沉
    Deep,
    /// 沙哑
    Husky,
    /// 柔和
    Soft,
    /// 标准
    Neutral,
}

impl VoiceTone {
    /// 全部声调（供编辑器选择列表遍历）
    pub const ALL: [VoiceTone; 5] = [
        VoiceTone::Bright,
        VoiceTone::Deep,
        VoiceTone::Husky,
        VoiceTone::Soft,
        VoiceTone::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceTone::Bright => "bright",
            VoiceTone::Deep => "deep",
            VoiceTone::Husky => "husky",
            VoiceTone::Soft => "soft",
            VoiceTone::Neutral => "neutral",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bright" => Some(VoiceTone::Bright),
            "deep" => Some(VoiceTone::Deep),
            "husky" => Some(VoiceTone::Husky),
            "soft" => Some(VoiceTone::Soft),
            "neutral" => Some(VoiceTone::Neutral),
            _ => None,
        }
    }

    /// 声调到合成器 pitch multiplier 的映射
    pub fn pitch_multiplier(&self) -> f32 {
        match self {
            VoiceTone::Bright => 1.20,
            VoiceTone::Deep => 0.85,
            VoiceTone::Husky => 0.95,
            VoiceTone::Soft => 1.05,
            VoiceTone::Neutral => 1.00,
        }
    }
}

/// 声乐音域分类（预留）
///
/// 比 [`VoiceTone`] 更细的分类轴：
/// - 沟通语境分类（权威/亲切/正式/共情/热情）
/// - 声乐音域分类（女声/男声）
///
/// 按名称序列化，追加新值不影响已有记录。推理与 TTS 参数映射
/// 目前只覆盖 [`VoiceTone`] 工作集，本枚举不参与任何决策路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocalRegister {
    // 基本高低分类
    High,
    Low,

    // 沟通语境分类
    Authoritative,
    Friendly,
    Formal,
    Empathetic,
    Enthusiastic,

    // 声乐音域分类（女声）
    Soprano,
    MezzoSoprano,
    Alto,

    // 声乐音域分类（男声）
    Tenor,
    Baritone,
    Bass,

    // 默认
    Neutral,
}

impl VocalRegister {
    pub fn as_str(&self) -> &'static str {
        match self {
            VocalRegister::High => "high",
            VocalRegister::Low => "low",
            VocalRegister::Authoritative => "authoritative",
            VocalRegister::Friendly => "friendly",
            VocalRegister::Formal => "formal",
            VocalRegister::Empathetic => "empathetic",
            VocalRegister::Enthusiastic => "enthusiastic",
            VocalRegister::Soprano => "soprano",
            VocalRegister::MezzoSoprano => "mezzo_soprano",
            VocalRegister::Alto => "alto",
            VocalRegister::Tenor => "tenor",
            VocalRegister::Baritone => "baritone",
            VocalRegister::Bass => "bass",
            VocalRegister::Neutral => "neutral",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(VocalRegister::High),
            "low" => Some(VocalRegister::Low),
            "authoritative" => Some(VocalRegister::Authoritative),
            "friendly" => Some(VocalRegister::Friendly),
            "formal" => Some(VocalRegister::Formal),
            "empathetic" => Some(VocalRegister::Empathetic),
            "enthusiastic" => Some(VocalRegister::Enthusiastic),
            "soprano" => Some(VocalRegister::Soprano),
            "mezzo_soprano" => Some(VocalRegister::MezzoSoprano),
            "alto" => Some(VocalRegister::Alto),
            "tenor" => Some(VocalRegister::Tenor),
            "baritone" => Some(VocalRegister::Baritone),
            "bass" => Some(VocalRegister::Bass),
            "neutral" => Some(VocalRegister::Neutral),
            _ => None,
        }
    }
}

/// 语速
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceSpeed {
    Slow,
    Normal,
    Fast,
}

impl VoiceSpeed {
    /// 全部语速（供编辑器选择列表遍历）
    pub const ALL: [VoiceSpeed; 3] = [VoiceSpeed::Slow, VoiceSpeed::Normal, VoiceSpeed::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceSpeed::Slow => "slow",
            VoiceSpeed::Normal => "normal",
            VoiceSpeed::Fast => "fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "slow" => Some(VoiceSpeed::Slow),
            "normal" => Some(VoiceSpeed::Normal),
            "fast" => Some(VoiceSpeed::Fast),
            _ => None,
        }
    }

    /// 语速到合成器 utterance rate 的映射
    pub fn utterance_rate(&self) -> f32 {
        match self {
            VoiceSpeed::Slow => 0.40,
            VoiceSpeed::Normal => 0.50,
            VoiceSpeed::Fast => 0.65,
        }
    }
}

/// 合成参数 - 预览播放与语音生成共用
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechParams {
    /// 发声速率
    pub rate: f32,
    /// 音高倍率
    pub pitch: f32,
}
