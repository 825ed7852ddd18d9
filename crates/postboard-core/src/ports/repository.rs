use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::RepoError;

/// Post repository with soft-delete semantics.
///
/// Every operation except `restore` treats a removed post as absent.
/// Mutations that match no active post fail with [`RepoError::NotFound`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All active posts, newest first (`created` desc, then `id` desc).
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find an active post by its id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Insert a new post and return it as stored.
    async fn create(&self, content: String) -> Result<Post, RepoError>;

    /// Replace the content of an active post.
    async fn edit(&self, id: PostId, content: String) -> Result<Post, RepoError>;

    /// Mark an active post as removed.
    async fn soft_delete(&self, id: PostId) -> Result<(), RepoError>;

    /// Bring a removed post back.
    ///
    /// Fails with [`RepoError::NotFound`] if no post has this id and with
    /// [`RepoError::InvalidState`] if the post is not currently removed.
    async fn restore(&self, id: PostId) -> Result<Post, RepoError>;

    /// Atomically add one like to an active post.
    async fn like(&self, id: PostId) -> Result<Post, RepoError>;

    /// Atomically take one like from an active post.
    async fn dislike(&self, id: PostId) -> Result<Post, RepoError>;
}
