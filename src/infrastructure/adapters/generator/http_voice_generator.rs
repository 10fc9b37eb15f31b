//! HTTP Voice Generator - 调用外部语音生成 HTTP 服务
//!
//! 实现 VoiceGeneratorPort trait，通过 HTTP 调用外部生成服务
//!
//! 外部生成 API:
//! POST http://localhost:8000/api/voice/generate
//! Request: {"companion_id": "...", "style": "...", "tone": "...", "speed": "...", "rate": 0.5, "pitch": 1.0}  (JSON)
//! Response: audio/wav binary, metadata in headers

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{GeneratedVoice, GeneratorError, VoiceGeneratorPort};
use crate::domain::profile::VoiceProfile;

/// 生成请求体 (JSON)
#[derive(Debug, Serialize)]
struct GenerateHttpRequest {
    /// 所属陪伴者
    companion_id: String,
    /// 三个配置轴，按符号名传输
    style: &'static str,
    tone: &'static str,
    speed: &'static str,
    /// 合成参数
    rate: f32,
    pitch: f32,
}

/// HTTP 生成客户端配置
#[derive(Debug, Clone)]
pub struct HttpGeneratorConfig {
    /// 生成服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpGeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 60,
        }
    }
}

impl HttpGeneratorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 生成客户端
///
/// 通过 HTTP 调用外部语音生成服务
pub struct HttpVoiceGenerator {
    client: Client,
    config: HttpGeneratorConfig,
}

impl HttpVoiceGenerator {
    /// 创建新的 HTTP 生成客户端
    pub fn new(config: HttpGeneratorConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, GeneratorError> {
        Self::new(HttpGeneratorConfig::default())
    }

    /// 获取生成 URL
    fn generate_url(&self) -> String {
        format!("{}/api/voice/generate", self.config.base_url)
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }
}

#[async_trait]
impl VoiceGeneratorPort for HttpVoiceGenerator {
    async fn generate(&self, profile: &VoiceProfile) -> Result<GeneratedVoice, GeneratorError> {
        let params = profile.speech_params();
        let http_request = GenerateHttpRequest {
            companion_id: profile.companion_id().to_string(),
            style: profile.style().as_str(),
            tone: profile.tone().as_str(),
            speed: profile.speed().as_str(),
            rate: params.rate,
            pitch: params.pitch,
        };

        tracing::debug!(
            url = %self.generate_url(),
            companion_id = %http_request.companion_id,
            style = http_request.style,
            "Sending voice generate request"
        );

        let response = self
            .client
            .post(&self.generate_url())
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout
                } else if e.is_connect() {
                    GeneratorError::NetworkError(format!(
                        "Cannot connect to generator service: {}",
                        e
                    ))
                } else {
                    GeneratorError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 从 headers 提取元数据
        let headers = response.headers();
        let duration_ms = headers
            .get("X-Voice-Duration-Ms")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let sample_rate = headers
            .get("X-Voice-Sample-Rate")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        // 直接获取音频字节
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            companion_id = %profile.companion_id(),
            duration_ms = ?duration_ms,
            sample_rate = ?sample_rate,
            audio_size = audio_data.len(),
            "Voice generation completed"
        );

        Ok(GeneratedVoice {
            profile: profile.clone(),
            audio_data,
            duration_ms,
            sample_rate,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
