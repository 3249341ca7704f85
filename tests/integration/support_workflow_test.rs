//! End-to-end support workflow: a user chats, asks for a human, care takes over

use caredesk_auth::AuthRole;
use caredesk_conversations::{
    ConversationFilters, ConversationStatus, EscalationRepository, SenderRole,
};
use caredesk_documents::{DocumentVisibility, NewDocument};

use crate::common::TestApp;

#[tokio::test]
#[ignore] // Requires database setup
async fn test_user_escalates_and_care_resolves() {
    let app = TestApp::new().await.unwrap();
    let user = app.create_user(AuthRole::User).await.unwrap();
    let care = app.create_user(AuthRole::Care).await.unwrap();
    let desk = &app.app;

    // User opens a conversation and talks to the bot
    let older = desk.conversations.create_conversation(user.id).await.unwrap();
    let conv = desk.conversations.create_conversation(user.id).await.unwrap();
    assert_eq!(conv.status, ConversationStatus::Open);

    desk.messages
        .add_message(conv.id, SenderRole::User, Some(user.id), "hello".to_string())
        .await
        .unwrap();
    desk.messages
        .add_message(conv.id, SenderRole::Bot, None, "Hi! How can I help?".to_string())
        .await
        .unwrap();

    let mine = desk
        .conversations
        .list_conversations(&user.identity(), ConversationFilters::default())
        .await
        .unwrap();
    assert_eq!(mine[0].id, conv.id);
    assert!(mine[0].last_message_at.is_some());
    assert_eq!(mine[1].id, older.id);

    // Escalate twice; only one record is kept
    let escalation_rows = EscalationRepository::new(app.pool.clone());
    for _ in 0..2 {
        let outcome = desk
            .escalations
            .request_escalation(conv.id, user.id)
            .await
            .unwrap();
        assert_eq!(outcome.conversation.status, ConversationStatus::Escalated);
        assert_eq!(
            escalation_rows.count_for_conversation(conv.id).await.unwrap(),
            1
        );
    }

    // Care sees it at the top of the priority queue and replies
    let queue = desk
        .conversations
        .list_conversations(
            &care.identity(),
            ConversationFilters::parse(Some("ESCALATED"), None).unwrap(),
        )
        .await
        .unwrap();
    assert!(queue.iter().any(|c| c.id == conv.id));
    assert!(queue
        .iter()
        .all(|c| c.status == ConversationStatus::Escalated));

    desk.messages
        .add_message(
            conv.id,
            SenderRole::Care,
            Some(care.id),
            "A care agent here, looking into it".to_string(),
        )
        .await
        .unwrap();

    let closed = desk
        .conversations
        .set_status(conv.id, ConversationStatus::Closed)
        .await
        .unwrap();
    assert_eq!(closed.status, ConversationStatus::Closed);

    let transcript = desk
        .messages
        .list_messages(conv.id, &user.identity())
        .await
        .unwrap();
    let roles: Vec<_> = transcript.iter().map(|m| m.sender_role).collect();
    assert_eq!(
        roles,
        vec![SenderRole::User, SenderRole::Bot, SenderRole::Care]
    );

    app.cleanup().await.unwrap();
}

#[tokio::test]
#[ignore] // Requires database setup
async fn test_admin_only_document_hidden_from_user_listing() {
    let app = TestApp::new().await.unwrap();
    let user = app.identity(AuthRole::User).await.unwrap();
    let care = app.identity(AuthRole::Care).await.unwrap();

    let doc = app
        .app
        .documents
        .create_document(
            NewDocument::new(
                "escalation-runbook.pdf",
                "application/pdf",
                "internal/escalation-runbook.pdf",
                DocumentVisibility::AdminOnly,
                None,
            )
            .unwrap(),
        )
        .await
        .unwrap();

    let for_user = app.app.documents.list_documents(&user).await.unwrap();
    assert!(!for_user.ids().contains(&doc.id));

    let for_care = app.app.documents.list_documents(&care).await.unwrap();
    assert!(for_care.ids().contains(&doc.id));

    app.app.documents.delete_document(doc.id).await.unwrap();
    app.cleanup().await.unwrap();
}

mod common;
