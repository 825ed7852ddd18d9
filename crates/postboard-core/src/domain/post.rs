use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned post identifier. Always positive, never reused.
pub type PostId = i64;

/// Post entity - a short piece of text that can be liked and soft-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub likes: i64,
    pub created: DateTime<Utc>,
    pub removed: bool,
}

impl Post {
    /// Create a fresh post with no likes, stamped with the current time.
    pub fn new(id: PostId, content: String) -> Self {
        Self {
            id,
            content,
            likes: 0,
            created: Utc::now(),
            removed: false,
        }
    }

    /// Whether the post is visible to normal reads and mutations.
    pub fn is_active(&self) -> bool {
        !self.removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_active_with_no_likes() {
        let post = Post::new(7, "hello".to_string());
        assert_eq!(post.id, 7);
        assert_eq!(post.likes, 0);
        assert!(!post.removed);
        assert!(post.is_active());
    }

    #[test]
    fn serializes_all_fields() {
        let post = Post::new(1, "hello".to_string());
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["content"], "hello");
        assert_eq!(json["likes"], 0);
        assert_eq!(json["removed"], false);
        assert!(json["created"].is_string());
    }
}
