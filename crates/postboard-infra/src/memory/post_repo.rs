//! In-memory post repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{Post, PostId};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

struct PostStore {
    next_id: PostId,
    posts: Vec<Post>,
}

impl PostStore {
    fn active_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id && p.is_active())
    }
}

/// In-memory post repository using a Vec behind an async RwLock.
///
/// Every mutation runs under the write lock, so concurrent likes and edits
/// never lose updates. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<PostStore>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(PostStore {
                next_id: 1,
                posts: Vec::new(),
            }),
        }
    }

    async fn adjust_likes(&self, id: PostId, delta: i64) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.active_mut(id).ok_or(RepoError::NotFound)?;
        post.likes += delta;
        tracing::debug!(post_id = id, likes = post.likes, "Adjusted post likes");
        Ok(post.clone())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .posts
            .iter()
            .filter(|p| p.is_active())
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created.cmp(&a.created).then(b.id.cmp(&a.id)));
        Ok(posts)
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store
            .posts
            .iter()
            .find(|p| p.id == id && p.is_active())
            .cloned())
    }

    async fn create(&self, content: String) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let post = Post::new(id, content);
        store.posts.push(post.clone());
        tracing::debug!(post_id = id, "Created post");
        Ok(post)
    }

    async fn edit(&self, id: PostId, content: String) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.active_mut(id).ok_or(RepoError::NotFound)?;
        post.content = content;
        tracing::debug!(post_id = id, "Edited post");
        Ok(post.clone())
    }

    async fn soft_delete(&self, id: PostId) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let post = store.active_mut(id).ok_or(RepoError::NotFound)?;
        post.removed = true;
        tracing::debug!(post_id = id, "Removed post");
        Ok(())
    }

    async fn restore(&self, id: PostId) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        if !post.removed {
            return Err(RepoError::InvalidState(format!("post {} is not removed", id)));
        }

        post.removed = false;
        tracing::debug!(post_id = id, "Restored post");
        Ok(post.clone())
    }

    async fn like(&self, id: PostId) -> Result<Post, RepoError> {
        self.adjust_likes(id, 1).await
    }

    async fn dislike(&self, id: PostId) -> Result<Post, RepoError> {
        self.adjust_likes(id, -1).await
    }
}
