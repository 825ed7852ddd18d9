//! MySQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};

use postboard_core::domain::{Post, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// MySQL post repository.
///
/// Counter and flag changes are single conditional `UPDATE`s, so they are
/// atomic in the store. The updated row is read back by id afterwards.
pub struct MySqlPostRepository {
    db: DbConn,
}

impl MySqlPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn find_any(&self, id: PostId) -> Result<Option<post::Model>, RepoError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn require_active(&self, id: PostId) -> Result<Post, RepoError> {
        self.find_by_id(id).await?.ok_or(RepoError::NotFound)
    }

    async fn adjust_likes(&self, id: PostId, delta: i64) -> Result<Post, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Likes, Expr::col(post::Column::Likes).add(delta))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, delta, "Adjusted post likes");
        self.require_active(id).await
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Removed.eq(false))
            .order_by_desc(post::Column::Created)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .filter(post::Column::Removed.eq(false))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, content: String) -> Result<Post, RepoError> {
        let model = post::ActiveModel {
            content: Set(content),
            likes: Set(0),
            created: Set(Utc::now()),
            removed: Set(false),
            ..Default::default()
        };

        let result = PostEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        let id = result.last_insert_id;
        tracing::debug!(post_id = id, "Created post");

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::Query(format!("inserted post {} could not be read back", id)))
    }

    async fn edit(&self, id: PostId, content: String) -> Result<Post, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Content, Expr::value(content))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        // MySQL counts unchanged rows as unaffected, so an edit to the same
        // content reports zero rows; the read-back decides not-found.
        if result.rows_affected > 0 {
            tracing::debug!(post_id = id, "Edited post");
        }
        self.require_active(id).await
    }

    async fn soft_delete(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Removed, Expr::value(true))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(false))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Removed post");
        Ok(())
    }

    async fn restore(&self, id: PostId) -> Result<Post, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(post::Column::Removed, Expr::value(false))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Removed.eq(true))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return match self.find_any(id).await? {
                Some(_) => Err(RepoError::InvalidState(format!("post {} is not removed", id))),
                None => Err(RepoError::NotFound),
            };
        }

        tracing::debug!(post_id = id, "Restored post");
        self.require_active(id).await
    }

    async fn like(&self, id: PostId) -> Result<Post, RepoError> {
        self.adjust_likes(id, 1).await
    }

    async fn dislike(&self, id: PostId) -> Result<Post, RepoError> {
        self.adjust_likes(id, -1).await
    }
}
