use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::models::AddCommentCommand;
use crate::domain::post::models::Comment;
use crate::domain::post::models::CommentId;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Like;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;
use crate::post::errors::PostError;
use crate::post::ports::PostRepository;
use crate::post::ports::PostServicePort;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Domain service implementation for post operations.
///
/// Holds the user repository to capture the author's name and avatar at
/// creation time (posts and comments keep that snapshot even after later
/// profile edits).
pub struct PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    repository: Arc<PR>,
    user_repository: Arc<UR>,
}

impl<PR, UR> PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    /// Create a new post service with injected dependencies.
    pub fn new(repository: Arc<PR>, user_repository: Arc<UR>) -> Self {
        Self {
            repository,
            user_repository,
        }
    }
}

#[async_trait]
impl<PR, UR> PostServicePort for PostService<PR, UR>
where
    PR: PostRepository,
    UR: UserRepository,
{
    async fn create(&self, command: CreatePostCommand) -> Result<Post, PostError> {
        let author = self
            .user_repository
            .find_by_id(&command.user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(command.user_id.to_string()))?;

        let post = Post {
            id: PostId::new(),
            user_id: author.id,
            name: author.name,
            avatar: author.avatar,
            text: command.text,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        };

        self.repository.create(post).await
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_all().await
    }

    async fn get(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound)
    }

    async fn delete(&self, id: &PostId, requester: &UserId) -> Result<(), PostError> {
        let post = self.get(id).await?;

        if post.user_id != *requester {
            return Err(PostError::NotPostOwner);
        }

        self.repository.delete(id).await
    }

    async fn like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError> {
        let post = self.get(id).await?;

        // At most one like per user per post
        if post.is_liked_by(user_id) {
            return Err(PostError::AlreadyLiked);
        }

        self.repository.add_like(id, user_id).await
    }

    async fn unlike(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError> {
        let post = self.get(id).await?;

        if !post.is_liked_by(user_id) {
            return Err(PostError::NotYetLiked);
        }

        self.repository.remove_like(id, user_id).await
    }

    async fn add_comment(&self, command: AddCommentCommand) -> Result<Vec<Comment>, PostError> {
        // NotFound for a missing post takes priority over a stale commenter
        self.get(&command.post_id).await?;

        let commenter = self
            .user_repository
            .find_by_id(&command.user_id)
            .await?
            .ok_or_else(|| UserError::NotFound(command.user_id.to_string()))?;

        let comment = Comment {
            id: CommentId::new(),
            user_id: commenter.id,
            name: commenter.name,
            avatar: commenter.avatar,
            text: command.text,
            created_at: Utc::now(),
        };

        self.repository.add_comment(&command.post_id, comment).await
    }

    async fn remove_comment(
        &self,
        id: &PostId,
        comment_id: &CommentId,
        requester: &UserId,
    ) -> Result<Vec<Comment>, PostError> {
        let post = self.get(id).await?;

        // Direct lookup by identifier
        let comment = post.comment(comment_id).ok_or(PostError::CommentNotFound)?;

        if comment.user_id != *requester {
            return Err(PostError::NotCommentOwner);
        }

        self.repository.remove_comment(id, comment_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::post::models::PostText;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::User;

    mock! {
        pub TestPostRepository {}

        #[async_trait]
        impl PostRepository for TestPostRepository {
            async fn create(&self, post: Post) -> Result<Post, PostError>;
            async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;
            async fn list_all(&self) -> Result<Vec<Post>, PostError>;
            async fn delete(&self, id: &PostId) -> Result<(), PostError>;
            async fn add_like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError>;
            async fn remove_like(&self, id: &PostId, user_id: &UserId) -> Result<Vec<Like>, PostError>;
            async fn add_comment(&self, id: &PostId, comment: Comment) -> Result<Vec<Comment>, PostError>;
            async fn remove_comment(&self, id: &PostId, comment_id: &CommentId) -> Result<Vec<Comment>, PostError>;
        }
    }

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError>;
            async fn delete(&self, id: &UserId) -> Result<(), UserError>;
        }
    }

    fn test_user(id: UserId) -> User {
        User {
            id,
            name: "Alice".to_string(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            avatar: "https://www.gravatar.com/avatar/alice".to_string(),
            created_at: Utc::now(),
        }
    }

    fn test_post(id: PostId, owner: UserId) -> Post {
        Post {
            id,
            user_id: owner,
            name: "Alice".to_string(),
            avatar: "https://www.gravatar.com/avatar/alice".to_string(),
            text: PostText::new("hello world".to_string()).unwrap(),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    fn test_comment(id: CommentId, owner: UserId) -> Comment {
        Comment {
            id,
            user_id: owner,
            name: "Bob".to_string(),
            avatar: "https://www.gravatar.com/avatar/bob".to_string(),
            text: PostText::new("nice post".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_captures_author_snapshot() {
        let mut repository = MockTestPostRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        let author_id = UserId::new();
        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_user(author_id))));

        repository
            .expect_create()
            .withf(move |post| {
                post.user_id == author_id
                    && post.name == "Alice"
                    && post.avatar == "https://www.gravatar.com/avatar/alice"
                    && post.likes.is_empty()
                    && post.comments.is_empty()
            })
            .times(1)
            .returning(|post| Ok(post));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let command = CreatePostCommand {
            user_id: author_id,
            text: PostText::new("hello world".to_string()).unwrap(),
        };

        let result = service.create(command).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_with_stale_author() {
        let repository = MockTestPostRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let command = CreatePostCommand {
            user_id: UserId::new(),
            text: PostText::new("hello".to_string()).unwrap(),
        };

        let result = service.create(command).await;
        assert!(matches!(
            result.unwrap_err(),
            PostError::User(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.get(&PostId::new()).await;
        assert!(matches!(result.unwrap_err(), PostError::NotFound));
    }

    #[tokio::test]
    async fn test_like_adds_user_once() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();
        let liker = UserId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_post(post_id, UserId::new()))));
        repository
            .expect_add_like()
            .withf(move |id, user| *id == post_id && *user == liker)
            .times(1)
            .returning(move |_, user| Ok(vec![Like { user_id: *user }]));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let likes = service.like(&post_id, &liker).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].user_id, liker);
    }

    #[tokio::test]
    async fn test_like_twice_rejected() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();
        let liker = UserId::new();

        // Post already carries the user's like; no insert may happen
        repository.expect_find_by_id().times(1).returning(move |_| {
            let mut post = test_post(post_id, UserId::new());
            post.likes.push(Like { user_id: liker });
            Ok(Some(post))
        });
        repository.expect_add_like().times(0);

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.like(&post_id, &liker).await;
        assert!(matches!(result.unwrap_err(), PostError::AlreadyLiked));
    }

    #[tokio::test]
    async fn test_unlike_removes_only_caller() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();
        let caller = UserId::new();
        let other = UserId::new();

        repository.expect_find_by_id().times(1).returning(move |_| {
            let mut post = test_post(post_id, UserId::new());
            post.likes.push(Like { user_id: other });
            post.likes.push(Like { user_id: caller });
            Ok(Some(post))
        });
        repository
            .expect_remove_like()
            .withf(move |id, user| *id == post_id && *user == caller)
            .times(1)
            .returning(move |_, _| Ok(vec![Like { user_id: other }]));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let likes = service.unlike(&post_id, &caller).await.unwrap();
        assert_eq!(likes.len(), 1);
        assert_eq!(likes[0].user_id, other);
    }

    #[tokio::test]
    async fn test_unlike_without_like_rejected() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_post(post_id, UserId::new()))));
        repository.expect_remove_like().times(0);

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.unlike(&post_id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), PostError::NotYetLiked));
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();
        let owner = UserId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_post(post_id, owner))));
        repository
            .expect_delete()
            .withf(move |id| *id == post_id)
            .times(1)
            .returning(|_| Ok(()));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.delete(&post_id, &owner).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_forbidden() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_post(post_id, UserId::new()))));
        repository.expect_delete().times(0);

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service.delete(&post_id, &UserId::new()).await;
        assert!(matches!(result.unwrap_err(), PostError::NotPostOwner));
    }

    #[tokio::test]
    async fn test_add_comment_prepends_with_snapshot() {
        let mut repository = MockTestPostRepository::new();
        let mut user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();
        let commenter = UserId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_post(post_id, UserId::new()))));
        user_repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_user(commenter))));
        repository
            .expect_add_comment()
            .withf(move |id, comment| {
                *id == post_id && comment.user_id == commenter && comment.name == "Alice"
            })
            .times(1)
            .returning(|_, comment| Ok(vec![comment]));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let command = AddCommentCommand {
            post_id,
            user_id: commenter,
            text: PostText::new("nice post".to_string()).unwrap(),
        };

        let comments = service.add_comment(command).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].user_id, commenter);
    }

    #[tokio::test]
    async fn test_add_comment_to_missing_post() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let command = AddCommentCommand {
            post_id: PostId::new(),
            user_id: UserId::new(),
            text: PostText::new("hello".to_string()).unwrap(),
        };

        let result = service.add_comment(command).await;
        assert!(matches!(result.unwrap_err(), PostError::NotFound));
    }

    #[tokio::test]
    async fn test_remove_comment_by_author() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();
        let comment_id = CommentId::new();
        let keep_id = CommentId::new();
        let author = UserId::new();

        repository.expect_find_by_id().times(1).returning(move |_| {
            let mut post = test_post(post_id, UserId::new());
            post.comments.push(test_comment(comment_id, author));
            post.comments.push(test_comment(keep_id, UserId::new()));
            Ok(Some(post))
        });
        repository
            .expect_remove_comment()
            .withf(move |id, cid| *id == post_id && *cid == comment_id)
            .times(1)
            .returning(move |_, _| Ok(vec![test_comment(keep_id, UserId::new())]));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let comments = service
            .remove_comment(&post_id, &comment_id, &author)
            .await
            .unwrap();
        // The removed comment is gone, the other remains
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, keep_id);
    }

    #[tokio::test]
    async fn test_remove_comment_by_non_author_forbidden() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();
        let comment_id = CommentId::new();

        repository.expect_find_by_id().times(1).returning(move |_| {
            let mut post = test_post(post_id, UserId::new());
            post.comments.push(test_comment(comment_id, UserId::new()));
            Ok(Some(post))
        });
        repository.expect_remove_comment().times(0);

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service
            .remove_comment(&post_id, &comment_id, &UserId::new())
            .await;
        assert!(matches!(result.unwrap_err(), PostError::NotCommentOwner));
    }

    #[tokio::test]
    async fn test_remove_missing_comment() {
        let mut repository = MockTestPostRepository::new();
        let user_repository = MockTestUserRepository::new();

        let post_id = PostId::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(test_post(post_id, UserId::new()))));

        let service = PostService::new(Arc::new(repository), Arc::new(user_repository));

        let result = service
            .remove_comment(&post_id, &CommentId::new(), &UserId::new())
            .await;
        assert!(matches!(result.unwrap_err(), PostError::CommentNotFound));
    }
}
