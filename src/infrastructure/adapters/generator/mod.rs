//! Generator Adapter - HTTP 语音生成客户端实现

mod fake_voice_generator;
mod http_voice_generator;

pub use fake_voice_generator::{FakeVoiceGenerator, FakeVoiceGeneratorConfig};
pub use http_voice_generator::*;
