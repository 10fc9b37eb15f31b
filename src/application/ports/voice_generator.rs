//! Voice Generator Port - 语音生成引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::VoiceProfile;

/// 语音生成错误
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 语音生成结果
///
/// 返回的 profile 配置字段与请求一致，作为最终提交给注册表的值
#[derive(Debug, Clone)]
pub struct GeneratedVoice {
    /// 生成完成的配置
    pub profile: VoiceProfile,
    /// 渲染的音频数据（WAV/PCM）
    pub audio_data: Vec<u8>,
    /// 音频时长（毫秒）
    pub duration_ms: Option<u64>,
    /// 采样率
    pub sample_rate: Option<u32>,
}

/// Voice Generator Port
///
/// 外部语音生成服务的抽象接口
#[async_trait]
pub trait VoiceGeneratorPort: Send + Sync {
    /// 按配置渲染语音样本
    ///
    /// 把配置的合成参数发送到外部生成服务，返回渲染后的音频数据
    async fn generate(&self, profile: &VoiceProfile) -> Result<GeneratedVoice, GeneratorError>;

    /// 检查生成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
