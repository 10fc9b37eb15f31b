//! In-Memory Active Profile Registry Implementation

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ActiveProfilePort, PersistOutcome, ProfileRepositoryPort};
use crate::domain::profile::{CompanionId, VoiceProfile};

/// 内存激活配置注册表
///
/// 单一可变单元加写穿存储。显式构造注入，不做进程级单例。
/// 写锁覆盖每个转移操作的完整过程（含仓储调用），
/// 四个操作因此互为临界区，内存与存储不会指向不同陪伴者。
pub struct InMemoryActiveProfileRegistry {
    /// 当前激活配置，None 即 Unset
    current: RwLock<Option<VoiceProfile>>,
    repo: Arc<dyn ProfileRepositoryPort>,
}

impl InMemoryActiveProfileRegistry {
    pub fn new(repo: Arc<dyn ProfileRepositoryPort>) -> Self {
        Self {
            current: RwLock::new(None),
            repo,
        }
    }

    /// 从存储整体重载，不与既有内存状态合并
    async fn reload(&self, companion_id: CompanionId) -> Option<VoiceProfile> {
        let mut guard = self.current.write().await;

        // 读失败与缺失同样按 Unset 处理
        let loaded = match self.repo.load_active(companion_id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(
                    companion_id = %companion_id,
                    error = %e,
                    "Profile load failed, treating as absent"
                );
                None
            }
        };

        *guard = loaded.clone();
        loaded
    }
}

#[async_trait]
impl ActiveProfilePort for InMemoryActiveProfileRegistry {
    async fn bootstrap(&self, companion_id: CompanionId) -> Option<VoiceProfile> {
        let restored = self.reload(companion_id).await;
        match &restored {
            Some(profile) => tracing::info!(
                companion_id = %companion_id,
                style = profile.style().as_str(),
                tone = profile.tone().as_str(),
                speed = profile.speed().as_str(),
                "Active profile restored"
            ),
            None => tracing::info!(
                companion_id = %companion_id,
                "No stored profile, registry starts unset"
            ),
        }
        restored
    }

    async fn switch_companion(&self, companion_id: CompanionId) -> Option<VoiceProfile> {
        let switched = self.reload(companion_id).await;
        tracing::info!(
            companion_id = %companion_id,
            has_profile = switched.is_some(),
            "Companion switched"
        );
        switched
    }

    async fn set_active(&self, profile: VoiceProfile) -> PersistOutcome {
        let mut guard = self.current.write().await;
        *guard = Some(profile.clone());

        // 内存状态已前进；写失败降级为状态值，不回滚不抛错
        match self.repo.save_active(&profile).await {
            Ok(()) => {
                tracing::debug!(
                    companion_id = %profile.companion_id(),
                    "Active profile persisted"
                );
                PersistOutcome::Persisted
            }
            Err(e) => {
                tracing::warn!(
                    companion_id = %profile.companion_id(),
                    error = %e,
                    "Active profile persist failed, in-memory state kept"
                );
                PersistOutcome::Failed
            }
        }
    }

    async fn get_active(&self) -> Option<VoiceProfile> {
        self.current.read().await.clone()
    }
}
