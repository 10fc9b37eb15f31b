//! Profile Queries - V2 架构

use crate::domain::profile::CompanionId;

/// 获取当前激活配置查询
#[derive(Debug, Clone)]
pub struct GetActiveProfile;

/// 获取编辑器基准配置查询
///
/// 有激活配置时返回它，否则给兜底默认值
#[derive(Debug, Clone)]
pub struct GetEditableProfile {
    pub companion_id: CompanionId,
}
