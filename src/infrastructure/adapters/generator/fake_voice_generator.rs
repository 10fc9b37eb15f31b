//! Fake Voice Generator - 用于测试的生成客户端
//!
//! 始终返回占位静音音频，不实际调用生成服务

use async_trait::async_trait;

use crate::application::ports::{GeneratedVoice, GeneratorError, VoiceGeneratorPort};
use crate::domain::profile::VoiceProfile;

/// Fake Voice Generator 配置
#[derive(Debug, Clone)]
pub struct FakeVoiceGeneratorConfig {
    /// 固定返回的音频时长（毫秒）
    pub duration_ms: u64,
    /// 采样率
    pub sample_rate: u32,
    /// 模拟生成延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for FakeVoiceGeneratorConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1000,
            sample_rate: 22050,
            latency_ms: 50,
        }
    }
}

/// Fake Voice Generator
///
/// 用于测试，按配置时长合成一段静音 WAV
pub struct FakeVoiceGenerator {
    config: FakeVoiceGeneratorConfig,
}

impl FakeVoiceGenerator {
    pub fn new(config: FakeVoiceGeneratorConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(FakeVoiceGeneratorConfig::default())
    }

    /// 合成静音 WAV（16-bit mono PCM），编辑器的预览播放也能直接使用
    fn silent_wav(&self) -> Vec<u8> {
        let sample_rate = self.config.sample_rate;
        let sample_count = (sample_rate as u64 * self.config.duration_ms / 1000) as u32;
        let data_len = sample_count * 2;

        let mut wav = Vec::with_capacity(44 + data_len as usize);
        wav.extend_from_slice(b"RIFF");
        wav.extend_from_slice(&(36 + data_len).to_le_bytes());
        wav.extend_from_slice(b"WAVE");
        wav.extend_from_slice(b"fmt ");
        wav.extend_from_slice(&16u32.to_le_bytes());
        wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
        wav.extend_from_slice(&1u16.to_le_bytes()); // mono
        wav.extend_from_slice(&sample_rate.to_le_bytes());
        wav.extend_from_slice(&(sample_rate * 2).to_le_bytes());
        wav.extend_from_slice(&2u16.to_le_bytes());
        wav.extend_from_slice(&16u16.to_le_bytes());
        wav.extend_from_slice(b"data");
        wav.extend_from_slice(&data_len.to_le_bytes());
        wav.resize(44 + data_len as usize, 0);
        wav
    }
}

#[async_trait]
impl VoiceGeneratorPort for FakeVoiceGenerator {
    async fn generate(&self, profile: &VoiceProfile) -> Result<GeneratedVoice, GeneratorError> {
        tracing::debug!(
            companion_id = %profile.companion_id(),
            style = profile.style().as_str(),
            "FakeVoiceGenerator: returning silent audio"
        );

        // 模拟生成延迟
        tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;

        Ok(GeneratedVoice {
            profile: profile.clone(),
            audio_data: self.silent_wav(),
            duration_ms: Some(self.config.duration_ms),
            sample_rate: Some(self.config.sample_rate),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
