//! File Storage - 文件系统资产存储实现
//!
//! 实现 AssetStoragePort trait，陪伴者目录布局: {base}/{companion_id}/

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AssetStorageError, AssetStoragePort};
use crate::domain::profile::{CompanionId, VoiceProfile};

/// 文件系统资产存储
pub struct FileAssetStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAssetStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AssetStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保根目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AssetStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AssetStoragePort for FileAssetStorage {
    fn companion_dir(&self, companion_id: CompanionId) -> PathBuf {
        self.base_dir.join(companion_id.to_string())
    }

    async fn ensure_dir(&self, companion_id: CompanionId) -> PathBuf {
        let dir = self.companion_dir(companion_id);

        // 创建失败不阻断调用方，按请求路径原样返回
        if let Err(e) = fs::create_dir_all(&dir).await {
            tracing::warn!(
                companion_id = %companion_id,
                path = %dir.display(),
                error = %e,
                "Asset dir creation failed, proceeding with requested path"
            );
        }

        dir
    }

    async fn save_asset(
        &self,
        profile: &VoiceProfile,
        data: &[u8],
    ) -> Result<PathBuf, AssetStorageError> {
        // 写入以配置自带的目录为准
        fs::create_dir_all(profile.asset_folder())
            .await
            .map_err(|e| AssetStorageError::IoError(e.to_string()))?;

        let asset_path = profile.asset_path();

        fs::write(&asset_path, data)
            .await
            .map_err(|e| AssetStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved voice asset: companion={}, file={}, size={} bytes",
            profile.companion_id(),
            asset_path.display(),
            data.len()
        );

        Ok(asset_path)
    }

    async fn read_asset(&self, profile: &VoiceProfile) -> Result<Vec<u8>, AssetStorageError> {
        let asset_path = profile.asset_path();

        if !asset_path.exists() {
            return Err(AssetStorageError::FileNotFound(
                asset_path.to_string_lossy().to_string(),
            ));
        }

        fs::read(&asset_path)
            .await
            .map_err(|e| AssetStorageError::IoError(e.to_string()))
    }

    async fn asset_exists(&self, profile: &VoiceProfile) -> bool {
        profile.asset_path().exists()
    }
}
