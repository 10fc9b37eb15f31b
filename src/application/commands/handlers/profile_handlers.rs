//! Profile Command Handlers - V2 架构

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::{BootstrapProfile, InferProfile, SaveProfile, SwitchCompanion};
use crate::application::error::ApplicationError;
use crate::application::ports::{ActiveProfilePort, AssetStoragePort, VoiceGeneratorPort};
use crate::domain::infer_profile;
use crate::domain::profile::VoiceProfile;

// ============================================================================
// InferProfile
// ============================================================================

/// 推导初始配置响应
#[derive(Debug, Clone)]
pub struct InferProfileResponse {
    pub profile: VoiceProfile,
    pub persisted: bool,
}

/// InferProfile Handler
///
/// 陪伴者创建流程：确保资产目录 → 规则推理 → 激活
pub struct InferProfileHandler {
    registry: Arc<dyn ActiveProfilePort>,
    asset_storage: Arc<dyn AssetStoragePort>,
}

impl InferProfileHandler {
    pub fn new(
        registry: Arc<dyn ActiveProfilePort>,
        asset_storage: Arc<dyn AssetStoragePort>,
    ) -> Self {
        Self {
            registry,
            asset_storage,
        }
    }

    pub async fn handle(&self, command: InferProfile) -> InferProfileResponse {
        // 目录确保是尽力而为的副作用，不构成推理前置条件
        let asset_folder = self.asset_storage.ensure_dir(command.companion_id).await;

        let profile = infer_profile(command.companion_id, &command.features, asset_folder);

        tracing::info!(
            companion_id = %command.companion_id,
            style = profile.style().as_str(),
            tone = profile.tone().as_str(),
            speed = profile.speed().as_str(),
            "Profile inferred"
        );

        let outcome = self.registry.set_active(profile.clone()).await;

        InferProfileResponse {
            profile,
            persisted: outcome.is_persisted(),
        }
    }
}

// ============================================================================
// SaveProfile
// ============================================================================

/// 保存配置响应
#[derive(Debug, Clone)]
pub struct SaveProfileResponse {
    pub profile: VoiceProfile,
    pub asset_path: PathBuf,
    pub duration_ms: Option<u64>,
    pub persisted: bool,
}

/// SaveProfile Handler
///
/// 两阶段提交：
/// 1. 组装候选配置
/// 2. 等待外部生成完成，渲染音频落盘
/// 3. 生成成功后才经注册表激活
///
/// 生成或落盘失败时注册表不被触碰，激活状态保持原样
pub struct SaveProfileHandler {
    registry: Arc<dyn ActiveProfilePort>,
    generator: Arc<dyn VoiceGeneratorPort>,
    asset_storage: Arc<dyn AssetStoragePort>,
}

impl SaveProfileHandler {
    pub fn new(
        registry: Arc<dyn ActiveProfilePort>,
        generator: Arc<dyn VoiceGeneratorPort>,
        asset_storage: Arc<dyn AssetStoragePort>,
    ) -> Self {
        Self {
            registry,
            generator,
            asset_storage,
        }
    }

    pub async fn handle(&self, command: SaveProfile) -> Result<SaveProfileResponse, ApplicationError> {
        let asset_folder = self.asset_storage.ensure_dir(command.companion_id).await;

        let candidate = VoiceProfile::new(
            command.companion_id,
            command.style,
            command.tone,
            command.speed,
            asset_folder,
        );

        // 生成在注册表临界区之外等待
        let generated = self.generator.generate(&candidate).await?;

        let asset_path = self
            .asset_storage
            .save_asset(&generated.profile, &generated.audio_data)
            .await?;

        tracing::info!(
            companion_id = %command.companion_id,
            asset = %asset_path.display(),
            size = generated.audio_data.len(),
            "Voice asset generated"
        );

        let outcome = self.registry.set_active(generated.profile.clone()).await;

        Ok(SaveProfileResponse {
            profile: generated.profile,
            asset_path,
            duration_ms: generated.duration_ms,
            persisted: outcome.is_persisted(),
        })
    }
}

// ============================================================================
// BootstrapProfile
// ============================================================================

/// BootstrapProfile Handler - 启动时从存储恢复激活配置
pub struct BootstrapProfileHandler {
    registry: Arc<dyn ActiveProfilePort>,
}

impl BootstrapProfileHandler {
    pub fn new(registry: Arc<dyn ActiveProfilePort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: BootstrapProfile) -> Option<VoiceProfile> {
        self.registry.bootstrap(command.companion_id).await
    }
}

// ============================================================================
// SwitchCompanion
// ============================================================================

/// SwitchCompanion Handler - 切换当前陪伴者
pub struct SwitchCompanionHandler {
    registry: Arc<dyn ActiveProfilePort>,
}

impl SwitchCompanionHandler {
    pub fn new(registry: Arc<dyn ActiveProfilePort>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, command: SwitchCompanion) -> Option<VoiceProfile> {
        self.registry.switch_companion(command.companion_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::application::ports::{
        AssetStorageError, GeneratedVoice, GeneratorError, PersistOutcome,
    };
    use crate::domain::profile::{CompanionId, VoiceSpeed, VoiceStyle, VoiceTone};
    use crate::domain::FacialFeatures;

    /// 只记内存状态的注册表替身
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

    struct StubStorage {
        base: PathBuf,
    }

    #[async_trait]
    impl AssetStoragePort for StubStorage {
        fn companion_dir(&self, companion_id: CompanionId) -> PathBuf {
            self.base.join(companion_id.to_string())
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

    struct StubGenerator {
        fail: bool,
    }

    #[async_trait]
    impl VoiceGeneratorPort for StubGenerator {
        async fn generate(&self, profile: &VoiceProfile) -> Result<GeneratedVoice, GeneratorError> {
            if self.fail {
                return Err(GeneratorError::ServiceError("boom".to_string()));
            }
            Ok(GeneratedVoice {
                profile: profile.clone(),
                audio_data: vec![0u8; 16],
                duration_ms: Some(1200),
                sample_rate: Some(32000),
            })
        }
    }

    fn wired_save_handler(
        registry: Arc<StubRegistry>,
        fail_generation: bool,
    ) -> SaveProfileHandler {
        SaveProfileHandler::new(
            registry,
            Arc::new(StubGenerator {
                fail: fail_generation,
            }),
            Arc::new(StubStorage {
                base: PathBuf::from("/tmp/companions"),
            }),
        )
    }

    #[tokio::test]
    async fn test_infer_activates_derived_profile() {
        let registry = Arc::new(StubRegistry::default());
        let handler = InferProfileHandler::new(
            registry.clone(),
            Arc::new(StubStorage {
                base: PathBuf::from("/tmp/companions"),
            }),
        );

        let companion_id = CompanionId::new();
        let response = handler
            .handle(InferProfile {
                companion_id,
                features: FacialFeatures {
                    jaw_sharpness: 0.8,
                    eye_size: 0.5,
                    softness: 0.3,
                    energy: 0.9,
                },
            })
            .await;

        assert_eq!(response.profile.style(), VoiceStyle::Energetic);
        assert_eq!(response.profile.tone(), VoiceTone::Deep);
        assert_eq!(response.profile.speed(), VoiceSpeed::Fast);
        assert!(response.persisted);

        let active = registry.get_active().await;
        assert_eq!(active, Some(response.profile));
    }

    #[tokio::test]
    async fn test_save_commits_after_generation() {
        let registry = Arc::new(StubRegistry::default());
        let handler = wired_save_handler(registry.clone(), false);

        let companion_id = CompanionId::new();
        let response = handler
            .handle(SaveProfile {
                companion_id,
                style: VoiceStyle::Mentor,
                tone: VoiceTone::Husky,
                speed: VoiceSpeed::Slow,
            })
            .await
            .unwrap();

        assert_eq!(response.profile.style(), VoiceStyle::Mentor);
        assert!(response
            .asset_path
            .ends_with("mentor_husky_slow.wav"));
        assert_eq!(registry.get_active().await, Some(response.profile));
    }

    #[tokio::test]
    async fn test_generation_failure_leaves_registry_untouched() {
        let registry = Arc::new(StubRegistry::default());
        let previous = VoiceProfile::fallback(CompanionId::new(), PathBuf::from("/tmp/p"));
        registry.set_active(previous.clone()).await;

        let handler = wired_save_handler(registry.clone(), true);
        let result = handler
            .handle(SaveProfile {
                companion_id: CompanionId::new(),
                style: VoiceStyle::Coach,
                tone: VoiceTone::Bright,
                speed: VoiceSpeed::Fast,
            })
            .await;

        assert!(matches!(result, Err(ApplicationError::GenerationError(_))));
        assert_eq!(registry.get_active().await, Some(previous));
    }
}
