use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::post::models::Comment;
use crate::domain::post::models::CommentId;
use crate::domain::post::models::Like;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostText;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn likes_for(&self, id: &PostId) -> Result<Vec<Like>, PostError> {
        let rows = sqlx::query_as::<_, LikeRow>(
            "SELECT post_id, user_id FROM post_likes WHERE post_id = $1",
        )
        .bind(id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(LikeRow::into_domain).collect())
    }

    async fn comments_for(&self, id: &PostId) -> Result<Vec<Comment>, PostError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, user_id, name, avatar, text, created_at
             FROM post_comments WHERE post_id = $1 ORDER BY created_at DESC",
        )
        .bind(id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(CommentRow::into_domain).collect()
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    avatar: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_domain(self, likes: Vec<Like>, comments: Vec<Comment>) -> Result<Post, PostError> {
        Ok(Post {
            id: PostId(self.id),
            user_id: UserId(self.user_id),
            name: self.name,
            avatar: self.avatar,
            text: PostText::new(self.text)?,
            likes,
            comments,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct LikeRow {
    post_id: Uuid,
    user_id: Uuid,
}

impl LikeRow {
    fn into_domain(self) -> Like {
        Like {
            user_id: UserId(self.user_id),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    post_id: Uuid,
    user_id: Uuid,
    name: String,
    avatar: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_domain(self) -> Result<Comment, PostError> {
        Ok(Comment {
            id: CommentId(self.id),
            user_id: UserId(self.user_id),
            name: self.name,
            avatar: self.avatar,
            text: PostText::new(self.text)?,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, PostError> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, user_id, name, avatar, text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.id.0)
        .bind(post.user_id.0)
        .bind(&post.name)
        .bind(&post.avatar)
        .bind(post.text.as_str())
        .bind(post.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, user_id, name, avatar, text, created_at FROM posts WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let likes = self.likes_for(id).await?;
        let comments = self.comments_for(id).await?;

        row.into_domain(likes, comments).map(Some)
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let rows = sqlx::query_as::<_, PostRow>(
            "SELECT id, user_id, name, avatar, text, created_at
             FROM posts ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let like_rows = sqlx::query_as::<_, LikeRow>("SELECT post_id, user_id FROM post_likes")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let comment_rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, post_id, user_id, name, avatar, text, created_at
             FROM post_comments ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        let mut likes: HashMap<Uuid, Vec<Like>> = HashMap::new();
        for row in like_rows {
            likes.entry(row.post_id).or_default().push(row.into_domain());
        }

        let mut comments: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for row in comment_rows {
            let post_id = row.post_id;
            comments.entry(post_id).or_default().push(row.into_domain()?);
        }

        rows.into_iter()
            .map(|row| {
                let post_likes = likes.remove(&row.id).unwrap_or_default();
                let post_comments = comments.remove(&row.id).unwrap_or_default();
                row.into_domain(post_likes, post_comments)
            })
            .collect()
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        // Likes and comments removed by ON DELETE CASCADE
        sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn add_like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError> {
        sqlx::query("INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2)")
            .bind(id.0)
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    // Composite key catches the losing side of a concurrent
                    // double-like
                    if db_err.is_unique_violation() {
                        return PostError::AlreadyLiked;
                    }
                }
                PostError::DatabaseError(e.to_string())
            })?;

        self.likes_for(id).await
    }

    async fn remove_like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError> {
        sqlx::query("DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2")
            .bind(id.0)
            .bind(user_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        self.likes_for(id).await
    }

    async fn add_comment(&self, id: &PostId, comment: Comment) -> Result<Vec<Comment>, PostError> {
        sqlx::query(
            r#"
            INSERT INTO post_comments (id, post_id, user_id, name, avatar, text, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.id.0)
        .bind(id.0)
        .bind(comment.user_id.0)
        .bind(&comment.name)
        .bind(&comment.avatar)
        .bind(comment.text.as_str())
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        self.comments_for(id).await
    }

    async fn remove_comment(
        &self,
        id: &PostId,
        comment_id: &CommentId,
    ) -> Result<Vec<Comment>, PostError> {
        sqlx::query("DELETE FROM post_comments WHERE post_id = $1 AND id = $2")
            .bind(id.0)
            .bind(comment_id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        self.comments_for(id).await
    }
}
