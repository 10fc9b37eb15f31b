//! SQLite Profile Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::path::PathBuf;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{ProfileRepositoryPort, RepositoryError};
use crate::domain::profile::{CompanionId, VoiceProfile, VoiceSpeed, VoiceStyle, VoiceTone};

/// SQLite Profile Repository
pub struct SqliteProfileRepository {
    pool: DbPool,
}

impl SqliteProfileRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProfileRow {
    companion_id: String,
    style: String,
    tone: String,
    speed: String,
    asset_folder: String,
    updated_at: String,
}

impl TryFrom<ProfileRow> for VoiceProfile {
    type Error = RepositoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let companion_id = Uuid::parse_str(&row.companion_id)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        let style = VoiceStyle::from_str(&row.style).ok_or_else(|| {
            RepositoryError::SerializationError(format!("unknown style: {}", row.style))
        })?;
        let tone = VoiceTone::from_str(&row.tone).ok_or_else(|| {
            RepositoryError::SerializationError(format!("unknown tone: {}", row.tone))
        })?;
        let speed = VoiceSpeed::from_str(&row.speed).ok_or_else(|| {
            RepositoryError::SerializationError(format!("unknown speed: {}", row.speed))
        })?;
        let updated_at = DateTime::parse_from_rfc3339(&row.updated_at)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
            .with_timezone(&Utc);

        Ok(VoiceProfile::restore(
            CompanionId::from_uuid(companion_id),
            style,
            tone,
            speed,
            PathBuf::from(row.asset_folder),
            updated_at,
        ))
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn save_active(&self, profile: &VoiceProfile) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO voice_profiles (companion_id, style, tone, speed, asset_folder, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(companion_id) DO UPDATE SET
                style = excluded.style,
                tone = excluded.tone,
                speed = excluded.speed,
                asset_folder = excluded.asset_folder,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(profile.companion_id().to_string())
        .bind(profile.style().as_str())
        .bind(profile.tone().as_str())
        .bind(profile.speed().as_str())
        .bind(profile.asset_folder().to_string_lossy().to_string())
        .bind(profile.updated_at().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn load_active(
        &self,
        companion_id: CompanionId,
    ) -> Result<Option<VoiceProfile>, RepositoryError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT companion_id, style, tone, speed, asset_folder, updated_at FROM voice_profiles WHERE companion_id = ?",
        )
        .bind(companion_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        // 损坏记录按缺失处理，上层把它当首次使用对待
        match VoiceProfile::try_from(row) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!(
                    companion_id = %companion_id,
                    error = %e,
                    "Stored profile failed to decode, treating as absent"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn test_repo() -> SqliteProfileRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteProfileRepository::new(pool)
    }

    fn sample_profile(companion_id: CompanionId) -> VoiceProfile {
        VoiceProfile::new(
            companion_id,
            VoiceStyle::Energetic,
            VoiceTone::Bright,
            VoiceSpeed::Fast,
            PathBuf::from("/tmp/companions/a"),
        )
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let repo = test_repo().await;
        let companion_id = CompanionId::new();
        let profile = sample_profile(companion_id);

        repo.save_active(&profile).await.unwrap();
        let loaded = repo.load_active(companion_id).await.unwrap();

        assert_eq!(loaded, Some(profile));
    }

    #[tokio::test]
    async fn test_load_missing_returns_none() {
        let repo = test_repo().await;
        let loaded = repo.load_active(CompanionId::new()).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_record() {
        let repo = test_repo().await;
        let companion_id = CompanionId::new();

        repo.save_active(&sample_profile(companion_id)).await.unwrap();

        let edited = VoiceProfile::new(
            companion_id,
            VoiceStyle::Gentle,
            VoiceTone::Soft,
            VoiceSpeed::Slow,
            PathBuf::from("/tmp/companions/a"),
        );
        repo.save_active(&edited).await.unwrap();

        let loaded = repo.load_active(companion_id).await.unwrap().unwrap();
        assert_eq!(loaded.style(), VoiceStyle::Gentle);
        assert_eq!(loaded.tone(), VoiceTone::Soft);
        assert_eq!(loaded.speed(), VoiceSpeed::Slow);
    }

    #[tokio::test]
    async fn test_corrupt_record_decodes_as_absent() {
        let repo = test_repo().await;
        let companion_id = CompanionId::new();

        // 直接写入带未知枚举值的记录
        sqlx::query(
            "INSERT INTO voice_profiles (companion_id, style, tone, speed, asset_folder, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(companion_id.to_string())
        .bind("operatic")
        .bind("neutral")
        .bind("normal")
        .bind("/tmp/c")
        .bind(Utc::now().to_rfc3339())
        .execute(&repo.pool)
        .await
        .unwrap();

        let loaded = repo.load_active(companion_id).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_updated_at_survives_roundtrip() {
        let repo = test_repo().await;
        let companion_id = CompanionId::new();
        let profile = sample_profile(companion_id);

        repo.save_active(&profile).await.unwrap();
        let loaded = repo.load_active(companion_id).await.unwrap().unwrap();

        assert_eq!(loaded.updated_at(), profile.updated_at());
    }
}
