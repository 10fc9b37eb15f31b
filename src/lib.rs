//! Covoice - 陪伴者语音配置引擎
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Profile Context: 语音配置上下文（配置聚合、音色值对象）
//! - Inference: 面部特征到语音配置的规则推理
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ActiveProfile, ProfileRepository, VoiceGenerator, AssetStorage）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - Memory: 激活配置注册表内存实现
//! - Persistence: SQLite 存储
//! - Adapters: 语音生成客户端、文件资产存储
//! - State: 组合根

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use infrastructure::AppState;

/// 初始化日志订阅器
///
/// 过滤器优先使用 `RUST_LOG` 环境变量，否则按配置的日志级别构造
pub fn init_tracing(config: &config::LogConfig) {
    let default_filter = format!("{},covoice={}", config.level, config.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_filter));

    if config.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
