use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use vidgallery_core::models::{NewVideoRecord, VideoRecord};
use vidgallery_core::AppError;

/// Row shape for the `videos` table.
#[derive(Debug, sqlx::FromRow)]
struct VideoRow {
    id: Uuid,
    title: String,
    video_url: String,
    thumbnail_url: String,
    content_type: String,
    size: i64,
    width: i32,
    height: i32,
    upload_date: DateTime<Utc>,
}

impl From<VideoRow> for VideoRecord {
    fn from(row: VideoRow) -> Self {
        VideoRecord {
            id: row.id,
            title: row.title,
            video_url: row.video_url,
            thumbnail_url: row.thumbnail_url,
            content_type: row.content_type,
            size: row.size,
            width: row.width,
            height: row.height,
            upload_date: row.upload_date,
        }
    }
}

/// Video metadata repository.
///
/// Ids are assigned here on insert and never reused or mutated afterwards.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new video record, assigning its id and upload date.
    #[tracing::instrument(skip(self, record), fields(db.table = "videos", db.operation = "insert"))]
    pub async fn insert(&self, record: NewVideoRecord) -> Result<VideoRecord, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row: VideoRow = sqlx::query_as::<Postgres, VideoRow>(
            r#"
            INSERT INTO videos (
                id, title, video_url, thumbnail_url, content_type,
                size, width, height, upload_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&record.title)
        .bind(&record.video_url)
        .bind(&record.thumbnail_url)
        .bind(&record.content_type)
        .bind(record.size)
        .bind(record.width)
        .bind(record.height)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Fetch a single video by id.
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<VideoRecord>, AppError> {
        let row: Option<VideoRow> =
            sqlx::query_as::<Postgres, VideoRow>("SELECT * FROM videos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Into::into))
    }

    /// All videos, newest first.
    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select"))]
    pub async fn list_all(&self) -> Result<Vec<VideoRecord>, AppError> {
        let rows: Vec<VideoRow> =
            sqlx::query_as::<Postgres, VideoRow>("SELECT * FROM videos ORDER BY upload_date DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
