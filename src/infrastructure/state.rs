//! Application State
//!
//! 组合根：装配所有端口适配器与 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    BootstrapProfileHandler, InferProfileHandler, SaveProfileHandler, SwitchCompanionHandler,
    // Query handlers
    GetActiveProfileHandler, GetEditableProfileHandler,
    // Ports
    ActiveProfilePort, ApplicationError, AssetStoragePort, ProfileRepositoryPort,
    VoiceGeneratorPort,
};
use crate::config::AppConfig;
use crate::infrastructure::adapters::{
    FileAssetStorage, HttpGeneratorConfig, HttpVoiceGenerator,
};
use crate::infrastructure::memory::InMemoryActiveProfileRegistry;
use crate::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteProfileRepository,
};

/// 应用状态
///
/// 注册表是唯一的激活状态持有者，所有 Handler 共享同一实例
pub struct AppState {
    // ========== Ports ==========
    pub registry: Arc<dyn ActiveProfilePort>,
    pub profile_repo: Arc<dyn ProfileRepositoryPort>,
    pub generator: Arc<dyn VoiceGeneratorPort>,
    pub asset_storage: Arc<dyn AssetStoragePort>,

    // ========== Command Handlers ==========
    pub infer_profile_handler: InferProfileHandler,
    pub save_profile_handler: SaveProfileHandler,
    pub bootstrap_profile_handler: BootstrapProfileHandler,
    pub switch_companion_handler: SwitchCompanionHandler,

    // ========== Query Handlers ==========
    pub get_active_profile_handler: GetActiveProfileHandler,
    pub get_editable_profile_handler: GetEditableProfileHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        registry: Arc<dyn ActiveProfilePort>,
        profile_repo: Arc<dyn ProfileRepositoryPort>,
        generator: Arc<dyn VoiceGeneratorPort>,
        asset_storage: Arc<dyn AssetStoragePort>,
    ) -> Self {
        Self {
            // Ports
            registry: registry.clone(),
            profile_repo: profile_repo.clone(),
            generator: generator.clone(),
            asset_storage: asset_storage.clone(),

            // Command handlers
            infer_profile_handler: InferProfileHandler::new(
                registry.clone(),
                asset_storage.clone(),
            ),
            save_profile_handler: SaveProfileHandler::new(
                registry.clone(),
                generator.clone(),
                asset_storage.clone(),
            ),
            bootstrap_profile_handler: BootstrapProfileHandler::new(registry.clone()),
            switch_companion_handler: SwitchCompanionHandler::new(registry.clone()),

            // Query handlers
            get_active_profile_handler: GetActiveProfileHandler::new(registry.clone()),
            get_editable_profile_handler: GetEditableProfileHandler::new(
                registry.clone(),
                asset_storage.clone(),
            ),
        }
    }

    /// 按配置装配完整应用状态
    ///
    /// 初始化顺序：数据目录 → 数据库连接池与迁移 → 仓储 → 注册表 → 生成客户端
    pub async fn from_config(config: &AppConfig) -> Result<Self, ApplicationError> {
        // 确保数据目录存在
        tokio::fs::create_dir_all(&config.storage.assets_dir)
            .await
            .map_err(|e| ApplicationError::StorageError(e.to_string()))?;
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApplicationError::StorageError(e.to_string()))?;
        }

        // 初始化数据库
        let db_config = DatabaseConfig {
            database_url: config.database.database_url(),
            max_connections: config.database.max_connections,
        };
        let pool = create_pool(&db_config)
            .await
            .map_err(|e| ApplicationError::RepositoryError(e.to_string()))?;
        run_migrations(&pool)
            .await
            .map_err(|e| ApplicationError::RepositoryError(e.to_string()))?;

        // 创建 Repository 适配器
        let profile_repo: Arc<dyn ProfileRepositoryPort> =
            Arc::new(SqliteProfileRepository::new(pool));

        // 创建激活配置注册表
        let registry: Arc<dyn ActiveProfilePort> =
            Arc::new(InMemoryActiveProfileRegistry::new(profile_repo.clone()));

        // 创建文件资产存储
        let asset_storage: Arc<dyn AssetStoragePort> =
            Arc::new(FileAssetStorage::new(config.storage.assets_dir.clone()).await?);

        // 创建 HTTP 生成客户端
        let generator_config = HttpGeneratorConfig {
            base_url: config.generator.url.clone(),
            timeout_secs: config.generator.timeout_secs,
        };
        let generator: Arc<dyn VoiceGeneratorPort> =
            Arc::new(HttpVoiceGenerator::new(generator_config)?);

        Ok(Self::new(registry, profile_repo, generator, asset_storage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use crate::application::ports::{GeneratedVoice, GeneratorError};
    use crate::application::{GetActiveProfile, InferProfile, SaveProfile};
    use crate::domain::profile::{CompanionId, VoiceProfile, VoiceSpeed, VoiceStyle, VoiceTone};
    use crate::domain::FacialFeatures;
    use crate::infrastructure::adapters::{FakeVoiceGenerator, FakeVoiceGeneratorConfig};

    struct TimeoutGenerator;

    #[async_trait]
    impl VoiceGeneratorPort for TimeoutGenerator {
        async fn generate(
            &self,
            _profile: &VoiceProfile,
        ) -> Result<GeneratedVoice, GeneratorError> {
            Err(GeneratorError::Timeout)
        }
    }

    async fn state_with_temp_dirs(dir: &TempDir) -> AppState {
        let mut config = AppConfig::default();
        config.database.path = dir
            .path()
            .join("covoice.db")
            .to_string_lossy()
            .to_string();
        config.storage.assets_dir = dir.path().join("companions");
        AppState::from_config(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_from_config_wires_all_handlers() {
        let dir = TempDir::new().unwrap();
        let state = state_with_temp_dirs(&dir).await;

        assert!(state.registry.get_active().await.is_none());
        assert!(state
            .get_active_profile_handler
            .handle(GetActiveProfile)
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_infer_through_wired_state() {
        let dir = TempDir::new().unwrap();
        let state = state_with_temp_dirs(&dir).await;

        let companion_id = CompanionId::new();
        let response = state
            .infer_profile_handler
            .handle(InferProfile {
                companion_id,
                features: FacialFeatures {
                    jaw_sharpness: 0.2,
                    eye_size: 0.9,
                    softness: 0.8,
                    energy: 0.1,
                },
            })
            .await;

        assert_eq!(response.profile.style(), VoiceStyle::Gentle);
        assert_eq!(response.profile.tone(), VoiceTone::Bright);
        assert_eq!(response.profile.speed(), VoiceSpeed::Slow);
        assert!(response.persisted);

        let active = state.registry.get_active().await.unwrap();
        assert_eq!(active, response.profile);
    }

    #[tokio::test]
    async fn test_save_lands_asset_registry_and_record() {
        let dir = TempDir::new().unwrap();

        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo: Arc<dyn ProfileRepositoryPort> = Arc::new(SqliteProfileRepository::new(pool));
        let registry: Arc<dyn ActiveProfilePort> =
            Arc::new(InMemoryActiveProfileRegistry::new(repo.clone()));
        let asset_storage: Arc<dyn AssetStoragePort> =
            Arc::new(FileAssetStorage::new(dir.path()).await.unwrap());
        let generator: Arc<dyn VoiceGeneratorPort> =
            Arc::new(FakeVoiceGenerator::new(FakeVoiceGeneratorConfig {
                duration_ms: 100,
                sample_rate: 8000,
                latency_ms: 0,
            }));

        let state = AppState::new(registry, repo.clone(), generator, asset_storage);

        let companion_id = CompanionId::new();
        let response = state
            .save_profile_handler
            .handle(SaveProfile {
                companion_id,
                style: VoiceStyle::Sexy,
                tone: VoiceTone::Husky,
                speed: VoiceSpeed::Slow,
            })
            .await
            .unwrap();

        assert!(response.persisted);
        assert!(response.asset_path.exists());
        assert_eq!(response.duration_ms, Some(100));

        assert_eq!(
            state.registry.get_active().await,
            Some(response.profile.clone())
        );
        assert_eq!(
            repo.load_active(companion_id).await.unwrap(),
            Some(response.profile)
        );
    }

    #[tokio::test]
    async fn test_failed_generation_leaves_registry_and_record_untouched() {
        let dir = TempDir::new().unwrap();

        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo: Arc<dyn ProfileRepositoryPort> = Arc::new(SqliteProfileRepository::new(pool));
        let registry: Arc<dyn ActiveProfilePort> =
            Arc::new(InMemoryActiveProfileRegistry::new(repo.clone()));
        let asset_storage: Arc<dyn AssetStoragePort> =
            Arc::new(FileAssetStorage::new(dir.path()).await.unwrap());

        let state = AppState::new(registry, repo.clone(), Arc::new(TimeoutGenerator), asset_storage);

        let companion_id = CompanionId::new();
        let previous = VoiceProfile::new(
            companion_id,
            VoiceStyle::Calm,
            VoiceTone::Neutral,
            VoiceSpeed::Normal,
            PathBuf::from(dir.path()),
        );
        state.registry.set_active(previous.clone()).await;

        let result = state
            .save_profile_handler
            .handle(SaveProfile {
                companion_id,
                style: VoiceStyle::Lively,
                tone: VoiceTone::Bright,
                speed: VoiceSpeed::Fast,
            })
            .await;

        assert!(result.is_err());
        assert_eq!(state.registry.get_active().await, Some(previous.clone()));
        assert_eq!(
            repo.load_active(companion_id).await.unwrap(),
            Some(previous)
        );
    }
}
