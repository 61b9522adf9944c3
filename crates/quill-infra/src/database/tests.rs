#[cfg(test)]
mod tests {
    use crate::database::{DatabaseConfig, SqliteBlogPostRepository, connect};
    use quill_core::domain::NewBlogPost;
    use quill_core::ports::BlogPostRepository;

    /// A single pooled connection keeps every acquisition on the same
    /// in-memory database.
    async fn memory_repo() -> SqliteBlogPostRepository {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        };

        let db = connect(&config).await.unwrap();
        SqliteBlogPostRepository::new(db)
    }

    #[tokio::test]
    async fn test_create_assigns_generated_id() {
        let repo = memory_repo().await;

        let draft = NewBlogPost::new("Alice".to_string(), "first post".to_string()).unwrap();
        let post = repo.create(draft).await.unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.name, "Alice");
        assert_eq!(post.description, "first post");
    }

    #[tokio::test]
    async fn test_identical_payloads_get_distinct_ids() {
        let repo = memory_repo().await;

        let first = repo
            .create(NewBlogPost::new("Alice".to_string(), "first post".to_string()).unwrap())
            .await
            .unwrap();
        let second = repo
            .create(NewBlogPost::new("Alice".to_string(), "first post".to_string()).unwrap())
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, second.name);
    }
}
