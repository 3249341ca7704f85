//! User account integration tests

use caredesk_auth::AuthRole;
use caredesk_common::Error;
use caredesk_users::NewUser;
use uuid::Uuid;

use crate::common::TestApp;

mod test_create_user {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_create_returns_public_user() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::Care).await.unwrap();

        assert_eq!(user.role, AuthRole::Care);
        assert!(user.email.ends_with("@caredesk.test"));

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_duplicate_email_is_conflict() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::User).await.unwrap();

        let dup = NewUser::new(
            &user.email.to_uppercase(),
            "$argon2id$other".to_string(),
            AuthRole::User,
        )
        .unwrap();
        let result = app.app.users.create(&dup).await;

        assert!(matches!(result, Err(Error::Conflict(_))));

        app.cleanup().await.unwrap();
    }
}

mod test_find_user {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_find_by_id() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::Admin).await.unwrap();

        let found = app.app.users.find_by_id(user.id).await.unwrap();
        assert_eq!(found, Some(user));

        let missing = app.app.users.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());

        app.cleanup().await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires database setup
    async fn test_find_by_email_returns_hash() {
        let app = TestApp::new().await.unwrap();
        let user = app.create_user(AuthRole::User).await.unwrap();

        let creds = app
            .app
            .users
            .find_by_email(&format!("  {}  ", user.email.to_uppercase()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(creds.id, user.id);
        assert_eq!(creds.password_hash, "$argon2id$test-hash");

        app.cleanup().await.unwrap();
    }
}
