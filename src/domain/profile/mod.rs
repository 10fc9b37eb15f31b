//! Profile Context - 语音配置限界上下文
//!
//! 职责:
//! - 陪伴者语音配置的数据模型
//! - 配置枚举与合成参数映射
//! - 兜底默认配置

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::VoiceProfile;
pub use errors::ProfileError;
pub use value_objects::{
    CompanionId, SpeechParams, VocalRegister, VoiceSpeed, VoiceStyle, VoiceTone,
};
