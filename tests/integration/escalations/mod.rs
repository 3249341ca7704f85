//! Escalation integration tests

use caredesk_auth::AuthRole;
use caredesk_common::Error;
use caredesk_conversations::{ConversationStatus, EscalationRepository};
use uuid::Uuid;

use crate::common::TestApp;

mod test_request_escalation {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_first_request_records_and_escalates() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::User).await.unwrap();
        let conv = app.app.conversations.create_conversation(user.id).await.unwrap();

        let outcome = app
            .app
            .escalations
            .request_escalation(conv.id, user.id)
            .await
            .unwrap();

        assert!(outcome.newly_escalated());
        assert_eq!(outcome.conversation.status, ConversationStatus::Escalated);

        let recorded = app
            .app
            .escalations
            .find_escalation(conv.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(recorded.requested_by_user_id, user.id);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_repeat_request_reapplies_status_only() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::User).await.unwrap();
        let conv = app.app.conversations.create_conversation(user.id).await.unwrap();
        let escalations = &app.app.escalations;

        let first = escalations.request_escalation(conv.id, user.id).await.unwrap();
        app.app
            .conversations
            .set_status(conv.id, ConversationStatus::Closed)
            .await
            .unwrap();

        let second = escalations.request_escalation(conv.id, user.id).await.unwrap();

        assert!(!second.newly_escalated());
        assert_eq!(second.conversation.status, ConversationStatus::Escalated);

        let recorded = escalations.find_escalation(conv.id).await.unwrap().unwrap();
        assert_eq!(Some(recorded), first.escalation);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_concurrent_requests_create_one_record() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::User).await.unwrap();
        let conv = app.app.conversations.create_conversation(user.id).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..10 {
            let escalations = app.app.escalations.clone();
            let (conv_id, user_id) = (conv.id, user.id);
            handles.push(tokio::spawn(async move {
                escalations.request_escalation(conv_id, user_id).await
            }));
        }

        let mut newly_escalated = 0;
        for handle in handles {
            let outcome = handle.await.unwrap().unwrap();
            assert_eq!(outcome.conversation.status, ConversationStatus::Escalated);
            if outcome.newly_escalated() {
                newly_escalated += 1;
            }
        }
        assert_eq!(newly_escalated, 1);

        let count = EscalationRepository::new(app.pool.clone())
            .count_for_conversation(conv.id)
            .await
            .unwrap();
        assert_eq!(count, 1);

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_missing_conversation_is_not_found_and_writes_nothing() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::User).await.unwrap();
        let missing = Uuid::new_v4();

        let result = app.app.escalations.request_escalation(missing, user.id).await;
        assert!(matches!(result, Err(Error::NotFound(ref m)) if m.contains("Conversation")));

        let recorded = app.app.escalations.find_escalation(missing).await.unwrap();
        assert!(recorded.is_none());

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_unknown_requester_is_not_found() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::User).await.unwrap();
        let conv = app.app.conversations.create_conversation(user.id).await.unwrap();

        let result = app
            .app
            .escalations
            .request_escalation(conv.id, Uuid::new_v4())
            .await;
        assert!(matches!(result, Err(Error::NotFound(ref m)) if m.contains("User")));

        let reloaded = app
            .app
            .conversations
            .get_conversation(conv.id, &user.identity())
            .await
            .unwrap();
        assert_eq!(reloaded.status, ConversationStatus::Open);

        app.cleanup().await.unwrap();
    }
}
