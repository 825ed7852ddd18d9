use chrono::{TimeZone, Utc};
use sea_orm::{
    DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr, Transaction, Value,
};

use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::mysql_repo::MySqlPostRepository;

const SELECT_POSTS: &str = "SELECT `posts`.`id`, `posts`.`content`, `posts`.`likes`, `posts`.`created`, `posts`.`removed` FROM `posts`";

fn model(id: i64, content: &str, likes: i64, removed: bool) -> post::Model {
    post::Model {
        id,
        content: content.to_owned(),
        likes,
        created: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        removed,
    }
}

fn affected(rows: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: rows,
    }
}

fn statement(sql: &str, values: Vec<Value>) -> Transaction {
    Transaction::from_sql_and_values(DatabaseBackend::MySql, sql, values)
}

fn select_active(id: i64) -> Transaction {
    statement(
        &format!(
            "{} WHERE `posts`.`id` = ? AND `posts`.`removed` = ? LIMIT ?",
            SELECT_POSTS
        ),
        vec![id.into(), false.into(), 1u64.into()],
    )
}

fn adjust_likes(id: i64, delta: i64) -> Transaction {
    statement(
        "UPDATE `posts` SET `likes` = `likes` + ? WHERE `posts`.`id` = ? AND `posts`.`removed` = ?",
        vec![delta.into(), id.into(), false.into()],
    )
}

fn set_removed(id: i64, removed: bool) -> Transaction {
    statement(
        "UPDATE `posts` SET `removed` = ? WHERE `posts`.`id` = ? AND `posts`.`removed` = ?",
        vec![removed.into(), id.into(), (!removed).into()],
    )
}

#[tokio::test]
async fn test_find_post_by_id() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![model(1, "Test Post", 3, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    let post = repo.find_by_id(1).await.unwrap().unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.content, "Test Post");
    assert_eq!(post.likes, 3);

    assert_eq!(db.into_transaction_log(), [select_active(1)]);
}

#[tokio::test]
async fn test_list_filters_removed_and_orders_newest_first() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![model(2, "b", 0, false), model(1, "a", 1, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    let posts = repo.list().await.unwrap();

    let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 1]);

    assert_eq!(
        db.into_transaction_log(),
        [statement(
            &format!(
                "{} WHERE `posts`.`removed` = ? ORDER BY `posts`.`created` DESC, `posts`.`id` DESC",
                SELECT_POSTS
            ),
            vec![false.into()],
        )]
    );
}

#[tokio::test]
async fn test_create_reads_back_generated_id() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([MockExecResult {
            last_insert_id: 7,
            rows_affected: 1,
        }])
        .append_query_results([vec![model(7, "hello", 0, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    let post = repo.create("hello".to_string()).await.unwrap();

    assert_eq!(post.id, 7);
    assert_eq!(post.content, "hello");
    assert_eq!(post.likes, 0);
    assert!(!post.removed);

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1], select_active(7));
}

#[tokio::test]
async fn test_like_is_one_conditional_update() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(1)])
        .append_query_results([vec![model(1, "x", 5, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    let post = repo.like(1).await.unwrap();
    assert_eq!(post.likes, 5);

    assert_eq!(
        db.into_transaction_log(),
        [adjust_likes(1, 1), select_active(1)]
    );
}

#[tokio::test]
async fn test_dislike_is_one_conditional_update() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(1)])
        .append_query_results([vec![model(4, "x", -1, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    let post = repo.dislike(4).await.unwrap();
    assert_eq!(post.likes, -1);

    assert_eq!(
        db.into_transaction_log(),
        [adjust_likes(4, -1), select_active(4)]
    );
}

#[tokio::test]
async fn test_dislike_on_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(0)])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    assert!(matches!(repo.dislike(9).await, Err(RepoError::NotFound)));

    // No read-back after a miss.
    assert_eq!(db.into_transaction_log(), [adjust_likes(9, -1)]);
}

#[tokio::test]
async fn test_soft_delete_twice_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(1), affected(0)])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    repo.soft_delete(1).await.unwrap();
    assert!(matches!(repo.soft_delete(1).await, Err(RepoError::NotFound)));

    assert_eq!(
        db.into_transaction_log(),
        [set_removed(1, true), set_removed(1, true)]
    );
}

#[tokio::test]
async fn test_restore_active_post_is_invalid_state() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(0)])
        .append_query_results([vec![model(1, "x", 0, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    assert!(matches!(
        repo.restore(1).await,
        Err(RepoError::InvalidState(_))
    ));

    // The existence check ignores the removed flag.
    assert_eq!(
        db.into_transaction_log(),
        [
            set_removed(1, false),
            statement(
                &format!("{} WHERE `posts`.`id` = ? LIMIT ?", SELECT_POSTS),
                vec![1i64.into(), 1u64.into()],
            ),
        ]
    );
}

#[tokio::test]
async fn test_restore_unknown_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(0)])
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    assert!(matches!(repo.restore(3).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_restore_removed_post() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(1)])
        .append_query_results([vec![model(1, "x", 2, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    let post = repo.restore(1).await.unwrap();

    assert!(!post.removed);
    assert_eq!(post.likes, 2);

    assert_eq!(
        db.into_transaction_log(),
        [set_removed(1, false), select_active(1)]
    );
}

#[tokio::test]
async fn test_edit_same_content_still_succeeds() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(0)])
        .append_query_results([vec![model(1, "same", 0, false)]])
        .into_connection();

    let repo = MySqlPostRepository::new(db.clone());
    let post = repo.edit(1, "same".to_string()).await.unwrap();

    assert_eq!(post.content, "same");

    assert_eq!(
        db.into_transaction_log(),
        [
            statement(
                "UPDATE `posts` SET `content` = ? WHERE `posts`.`id` = ? AND `posts`.`removed` = ?",
                vec!["same".into(), 1i64.into(), false.into()],
            ),
            select_active(1),
        ]
    );
}

#[tokio::test]
async fn test_edit_removed_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_exec_results([affected(0)])
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    assert!(matches!(
        repo.edit(1, "new".to_string()).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_store_errors_are_classified() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_errors([
            DbErr::Conn(RuntimeErr::Internal("connection refused".to_string())),
            DbErr::Custom("unknown column".to_string()),
        ])
        .into_connection();

    let repo = MySqlPostRepository::new(db);
    assert!(matches!(repo.list().await, Err(RepoError::Connection(_))));
    assert!(matches!(repo.find_by_id(1).await, Err(RepoError::Query(_))));
}
