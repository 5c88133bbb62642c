use std::sync::Arc;

use career_core::models::turn::{Role, Turn};
use career_storage::history::{ChatHistoryStore, MemoryChatHistoryStore};

#[tokio::test]
async fn unknown_session_is_empty() {
    let store = MemoryChatHistoryStore::new();
    assert!(store.fetch("nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn appends_keep_call_order() {
    let store = MemoryChatHistoryStore::new();
    store
        .append("s1", vec![Turn::user("첫 질문"), Turn::assistant("첫 답변")])
        .await
        .unwrap();
    store
        .append("s1", vec![Turn::user("두 번째 질문")])
        .await
        .unwrap();

    let turns = store.fetch("s1").await.unwrap();
    let contents: Vec<&str> = turns.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["첫 질문", "첫 답변", "두 번째 질문"]);
    assert_eq!(turns[1].role, Role::Assistant);
}

#[tokio::test]
async fn sessions_are_isolated() {
    let store = MemoryChatHistoryStore::new();
    store.append("a", vec![Turn::user("a")]).await.unwrap();
    store.append("b", vec![Turn::user("b1"), Turn::user("b2")]).await.unwrap();

    assert_eq!(store.fetch("a").await.unwrap().len(), 1);
    assert_eq!(store.fetch("b").await.unwrap().len(), 2);
}

#[tokio::test]
async fn usable_as_trait_object() {
    let store: Arc<dyn ChatHistoryStore> = Arc::new(MemoryChatHistoryStore::new());
    store.check().await.unwrap();
    store.append("s", vec![Turn::user("hi")]).await.unwrap();
    assert_eq!(store.fetch("s").await.unwrap()[0].content, "hi");
}
