//! Document visibility integration tests

use caredesk_auth::AuthRole;
use caredesk_common::Error;
use caredesk_documents::{Document, DocumentListing, DocumentView, DocumentVisibility, NewDocument};
use uuid::Uuid;

use crate::common::{only_ids, TestApp};

async fn store(
    app: &TestApp,
    filename: &str,
    visibility: DocumentVisibility,
    owner: Option<Uuid>,
) -> Document {
    let new_doc = NewDocument::new(
        filename,
        "application/pdf",
        &format!("uploads/{}/{filename}", Uuid::new_v4()),
        visibility,
        owner,
    )
    .unwrap();
    app.app.documents.create_document(new_doc).await.unwrap()
}

async fn remove(app: &TestApp, docs: &[&Document]) {
    for doc in docs {
        app.app.documents.delete_document(doc.id).await.unwrap();
    }
}

mod test_create_document {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_create_user_specific_document() {
        let app = TestApp::new().await.unwrap();
        let owner = app.create_user(AuthRole::User).await.unwrap();

        let doc = store(&app, "plan.pdf", DocumentVisibility::UserSpecific, Some(owner.id)).await;

        assert_eq!(doc.visibility, DocumentVisibility::UserSpecific);
        assert_eq!(doc.owner_user_id, Some(owner.id));

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_hand_built_document_without_owner_rejected() {
        let app = TestApp::new().await.unwrap();

        let doc = NewDocument {
            filename: "plan.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            storage_path: "uploads/plan.pdf".to_string(),
            visibility: DocumentVisibility::UserSpecific,
            owner_user_id: None,
        };
        let result = app.app.documents.create_document(doc).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_unknown_owner_is_not_found() {
        let app = TestApp::new().await.unwrap();

        let doc = NewDocument::new(
            "plan.pdf",
            "application/pdf",
            "uploads/plan.pdf",
            DocumentVisibility::UserSpecific,
            Some(Uuid::new_v4()),
        )
        .unwrap();
        let result = app.app.documents.create_document(doc).await;

        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}

mod test_get_document {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_user_specific_visibility() {
        let app = TestApp::new().await.unwrap();
        let u1 = app.create_user(AuthRole::User).await.unwrap();
        let u2 = app.identity(AuthRole::User).await.unwrap();
        let care = app.identity(AuthRole::Care).await.unwrap();
        let doc = store(&app, "plan.pdf", DocumentVisibility::UserSpecific, Some(u1.id)).await;
        let documents = &app.app.documents;

        let hidden = documents.get_document(doc.id, &u2).await;
        assert!(matches!(hidden, Err(ref e) if e.is_not_found()));

        let own = documents.get_document(doc.id, &u1.identity()).await.unwrap();
        assert!(matches!(own, DocumentView::User(ref v) if v.id == doc.id));

        let staff = documents.get_document(doc.id, &care).await.unwrap();
        assert_eq!(staff, DocumentView::Staff(doc.clone()));

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_admin_only_hidden_from_users() {
        let app = TestApp::new().await.unwrap();
        let user = app.identity(AuthRole::User).await.unwrap();
        let admin = app.identity(AuthRole::Admin).await.unwrap();
        let doc = store(&app, "runbook.pdf", DocumentVisibility::AdminOnly, None).await;

        let hidden = app.app.documents.get_document(doc.id, &user).await;
        assert!(matches!(hidden, Err(ref e) if e.is_not_found()));

        let visible = app.app.documents.get_document(doc.id, &admin).await.unwrap();
        assert_eq!(visible.id(), doc.id);

        remove(&app, &[&doc]).await;
        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_missing_document_is_not_found() {
        let app = TestApp::new().await.unwrap();
        let care = app.identity(AuthRole::Care).await.unwrap();

        let result = app.app.documents.get_document(Uuid::new_v4(), &care).await;
        assert!(matches!(result, Err(ref e) if e.is_not_found()));

        app.cleanup().await.unwrap();
    }
}

mod test_list_documents {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_user_listing_is_public_plus_own() {
        let app = TestApp::new().await.unwrap();
        let u1 = app.create_user(AuthRole::User).await.unwrap();
        let u2 = app.create_user(AuthRole::User).await.unwrap();

        let public = store(&app, "faq.pdf", DocumentVisibility::Public, None).await;
        let admin_only = store(&app, "runbook.pdf", DocumentVisibility::AdminOnly, None).await;
        let mine = store(&app, "mine.pdf", DocumentVisibility::UserSpecific, Some(u1.id)).await;
        let theirs = store(&app, "theirs.pdf", DocumentVisibility::UserSpecific, Some(u2.id)).await;
        let ids = [public.id, admin_only.id, mine.id, theirs.id];

        let listing = app.app.documents.list_documents(&u1.identity()).await.unwrap();
        assert!(matches!(listing, DocumentListing::User(_)));
        assert_eq!(only_ids(listing.ids(), &ids), vec![mine.id, public.id]);

        let json = serde_json::to_value(&listing).unwrap();
        for entry in json.as_array().unwrap() {
            assert!(entry.get("storage_path").is_none());
            assert!(entry.get("owner_user_id").is_none());
        }

        remove(&app, &[&public, &admin_only]).await;
        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_staff_listing_is_complete_and_newest_first() {
        let app = TestApp::new().await.unwrap();
        let owner = app.create_user(AuthRole::User).await.unwrap();
        let care = app.identity(AuthRole::Care).await.unwrap();

        let first = store(&app, "a.pdf", DocumentVisibility::AdminOnly, None).await;
        let second = store(&app, "b.pdf", DocumentVisibility::UserSpecific, Some(owner.id)).await;
        let third = store(&app, "c.pdf", DocumentVisibility::Public, None).await;
        let ids = [first.id, second.id, third.id];

        let listing = app.app.documents.list_documents(&care).await.unwrap();
        assert!(matches!(listing, DocumentListing::Staff(_)));
        assert_eq!(only_ids(listing.ids(), &ids), vec![third.id, second.id, first.id]);

        remove(&app, &[&first, &third]).await;
        app.cleanup().await.unwrap();
    }
}

mod test_delete_document {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_delete_then_not_found() {
        let app = TestApp::new().await.unwrap();
        let care = app.identity(AuthRole::Care).await.unwrap();
        let doc = store(&app, "old.pdf", DocumentVisibility::Public, None).await;

        app.app.documents.delete_document(doc.id).await.unwrap();

        let gone = app.app.documents.get_document(doc.id, &care).await;
        assert!(matches!(gone, Err(ref e) if e.is_not_found()));

        let again = app.app.documents.delete_document(doc.id).await;
        assert!(matches!(again, Err(Error::NotFound(_))));

        app.cleanup().await.unwrap();
    }
}
