//! Profile Query Handlers - V2 架构

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{ActiveProfilePort, AssetStoragePort};
use crate::application::queries::{GetActiveProfile, GetEditableProfile};
use crate::domain::profile::{CompanionId, SpeechParams, VoiceProfile, VoiceSpeed, VoiceStyle, VoiceTone};

// ============================================================================
// Response DTOs
// ============================================================================

/// 激活配置响应
#[derive(Debug, Clone)]
pub struct ProfileResponse {
    pub companion_id: CompanionId,
    pub style: VoiceStyle,
    pub tone: VoiceTone,
    pub speed: VoiceSpeed,
    pub asset_folder: PathBuf,
    pub speech_params: SpeechParams,
    pub updated_at: String,
}

impl From<VoiceProfile> for ProfileResponse {
    fn from(profile: VoiceProfile) -> Self {
        Self {
            companion_id: *profile.companion_id(),
            style: profile.style(),
            tone: profile.tone(),
            speed: profile.speed(),
            asset_folder: profile.asset_folder().to_path_buf(),
            speech_params: profile.speech_params(),
            updated_at: profile.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetActiveProfile Handler
///
/// 纯内存读，缺失是常态不是错误
pub struct GetActiveProfileHandler {
    registry: Arc<dyn ActiveProfilePort>,
}

impl GetActiveProfileHandler {
    pub fn new(registry: Arc<dyn ActiveProfilePort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, _query: GetActiveProfile) -> Option<ProfileResponse> {
        self.registry.get_active().await.map(ProfileResponse::from)
    }
}

/// GetEditableProfile Handler
///
/// 编辑器预填：激活配置优先，缺失时退回兜底默认值
pub struct GetEditableProfileHandler {
    registry: Arc<dyn ActiveProfilePort>,
    asset_storage: Arc<dyn AssetStoragePort>,
}

impl GetEditableProfileHandler {
    pub fn new(
        registry: Arc<dyn ActiveProfilePort>,
        asset_storage: Arc<dyn AssetStoragePort>,
    ) -> Self {
        Self {
            registry,
            asset_storage,
        }
    }

    pub async fn handle(&self, query: GetEditableProfile) -> ProfileResponse {
        if let Some(active) = self.registry.get_active().await {
            return ProfileResponse::from(active);
        }

        let fallback = VoiceProfile::fallback(
            query.companion_id,
            self.asset_storage.companion_dir(query.companion_id),
        );

        tracing::debug!(
            companion_id = %query.companion_id,
            "No active profile, editor falls back to default"
        );

        ProfileResponse::from(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::application::ports::{AssetStorageError, PersistOutcome};

    #[derive(Default)]
    struct StubRegistry {
        current: Mutex<Option<VoiceProfile>>,
    }

    #[async_trait]
    impl ActiveProfilePort for StubRegistry {
        async fn bootstrap(&self, _companion_id: CompanionId) -> Option<VoiceProfile> {
            self.current.lock().unwrap().clone()
        }

        async fn switch_companion(&self, _companion_id: CompanionId) -> Option<VoiceProfile> {
            *self.current.lock().unwrap() = None;
            None
        }

        async fn set_active(&self, profile: VoiceProfile) -> PersistOutcome {
            *self.current.lock().unwrap() = Some(profile);
            PersistOutcome::Persisted
        }

        async fn get_active(&self) -> Option<VoiceProfile> {
            self.current.lock().unwrap().clone()
        }
    }

    struct StubStorage;

    #[async_trait]
    impl AssetStoragePort for StubStorage {
        fn companion_dir(&self, companion_id: CompanionId) -> PathBuf {
            PathBuf::from("/tmp/companions").join(companion_id.to_string())
        }

        async fn ensure_dir(&self, companion_id: CompanionId) -> PathBuf {
            self.companion_dir(companion_id)
        }

        async fn save_asset(
            &self,
            profile: &VoiceProfile,
            _data: &[u8],
        ) -> Result<PathBuf, AssetStorageError> {
            Ok(profile.asset_path())
        }

        async fn read_asset(&self, _profile: &VoiceProfile) -> Result<Vec<u8>, AssetStorageError> {
            Err(AssetStorageError::FileNotFound("stub".to_string()))
        }

        async fn asset_exists(&self, _profile: &VoiceProfile) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_get_active_returns_none_when_unset() {
        let handler = GetActiveProfileHandler::new(Arc::new(StubRegistry::default()));
        assert!(handler.handle(GetActiveProfile).await.is_none());
    }

    #[tokio::test]
    async fn test_editable_prefers_active_profile() {
        let registry = Arc::new(StubRegistry::default());
        let companion_id = CompanionId::new();
        let active = VoiceProfile::new(
            companion_id,
            VoiceStyle::Sexy,
            VoiceTone::Husky,
            VoiceSpeed::Slow,
            PathBuf::from("/tmp/companions/x"),
        );
        registry.set_active(active.clone()).await;

        let handler = GetEditableProfileHandler::new(registry, Arc::new(StubStorage));
        let response = handler.handle(GetEditableProfile { companion_id }).await;

        assert_eq!(response.style, VoiceStyle::Sexy);
        assert_eq!(response.tone, VoiceTone::Husky);
        assert_eq!(response.speed, VoiceSpeed::Slow);
    }

    #[tokio::test]
    async fn test_editable_falls_back_when_unset() {
        let handler =
            GetEditableProfileHandler::new(Arc::new(StubRegistry::default()), Arc::new(StubStorage));
        let companion_id = CompanionId::new();
        let response = handler.handle(GetEditableProfile { companion_id }).await;

        assert_eq!(response.companion_id, companion_id);
        assert_eq!(response.style, VoiceStyle::Gentle);
        assert_eq!(response.tone, VoiceTone::Neutral);
        assert_eq!(response.speed, VoiceSpeed::Normal);
        assert_eq!(response.speech_params.rate, 0.50);
        assert_eq!(response.speech_params.pitch, 1.00);
    }
}
