//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Profile Context: 语音配置管理
//!
//! 以及与之配套的纯函数推理规则。

pub mod profile;

// 面部特征到配置的推理规则
mod inference;

pub use inference::{infer_profile, FacialFeatures};
