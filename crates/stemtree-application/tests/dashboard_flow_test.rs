//! End-to-end flow over the full service graph: login, routing, chat with
//! the mock bot, management data, and restart rehydration, all against a
//! temporary storage directory.

use stemtree_application::AppContext;
use stemtree_core::chat::Sender;
use stemtree_core::config::AppConfig;
use stemtree_core::directory::{ActivityKind, UserScope};
use stemtree_core::identity::Role;
use stemtree_core::routing::{Route, RouteDecision};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> AppConfig {
    AppConfig {
        login_delay_ms: 1,
        reply_delay_ms: 5,
        canned_replies: vec!["mock reply".to_string()],
        source_document: Some("Physics_Chapter_5.pdf".to_string()),
        storage_dir: Some(dir.path().to_string_lossy().into_owned()),
    }
}

#[tokio::test]
async fn test_login_chat_and_restart_flow() {
    let dir = TempDir::new().unwrap();
    let app = AppContext::init(&test_config(&dir)).await.unwrap();

    // Unauthenticated: every dashboard redirects to login
    for route in [Route::Dashboard, Route::Admin, Route::Superadmin] {
        assert_eq!(app.auth.route(route).await, RouteDecision::RedirectToLogin);
    }

    // Login as a regular user and chat
    assert!(app.auth.login("alice@example.com", "secret").await.unwrap());
    assert_eq!(
        app.auth.route(Route::Dashboard).await,
        RouteDecision::Render(Route::Dashboard)
    );
    assert_eq!(
        app.auth.route(Route::Admin).await,
        RouteDecision::Redirect(Route::Dashboard)
    );

    let session = app.chat.start_session().await.unwrap();
    let sent = app
        .chat
        .send_message(&session.id, "Explain Newton's third law")
        .await
        .unwrap();
    sent.reply_task.await.unwrap();

    let stored = app.chat.select_session(&session.id).await.unwrap();
    assert_eq!(stored.messages.len(), 2);
    assert_eq!(stored.messages[0].sender, Sender::User);
    assert_eq!(stored.messages[1].sender, Sender::Bot);
    assert_eq!(stored.messages[1].content, "mock reply");
    assert_eq!(stored.title, "Explain Newton's third law");

    app.teardown();

    // Restart over the same storage: identity and sessions rehydrate
    let app = AppContext::init(&test_config(&dir)).await.unwrap();
    let identity = app.auth.current_identity().await.unwrap();
    assert_eq!(identity.email, "alice@example.com");
    assert_eq!(identity.role, Role::User);

    let sessions = app.chat.list_sessions().await.unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].messages.len(), 2);
    app.teardown();
}

#[tokio::test]
async fn test_admin_management_flow() {
    let dir = TempDir::new().unwrap();
    let app = AppContext::init(&test_config(&dir)).await.unwrap();

    assert!(
        app.auth
            .login_as("admin@stemtree.com", "pw", Role::Admin)
            .await
            .unwrap()
    );
    assert_eq!(
        app.auth.route(Route::Admin).await,
        RouteDecision::Render(Route::Admin)
    );
    assert_eq!(
        app.auth.route(Route::Superadmin).await,
        RouteDecision::Redirect(Route::Admin)
    );

    // Seeded tables on first load
    let users = app.directory.users(UserScope::Admin).await.unwrap();
    assert_eq!(users.len(), 2);
    let documents = app.directory.documents().await.unwrap();
    assert_eq!(documents[0].name, "Physics_Chapter_5.pdf");

    // Whole-list replace plus an activity record
    let remaining: Vec<_> = users.into_iter().take(1).collect();
    app.directory
        .replace_users(UserScope::Admin, &remaining)
        .await
        .unwrap();
    app.directory
        .record_activity(
            "User Deleted",
            "admin@stemtree.com",
            "Removed student2@example.com",
            ActivityKind::Delete,
        )
        .await
        .unwrap();

    assert_eq!(app.directory.users(UserScope::Admin).await.unwrap().len(), 1);
    let log = app.directory.activity_log().await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].kind, ActivityKind::Delete);
    app.teardown();
}

#[tokio::test]
async fn test_logout_returns_to_login_routing() {
    let dir = TempDir::new().unwrap();
    let app = AppContext::init(&test_config(&dir)).await.unwrap();

    app.auth
        .login_as("root@stemtree.com", "pw", Role::Superadmin)
        .await
        .unwrap();
    assert_eq!(
        app.auth.route(Route::Login).await,
        RouteDecision::Redirect(Route::Superadmin)
    );

    app.auth.logout().await.unwrap();
    assert_eq!(
        app.auth.route(Route::Superadmin).await,
        RouteDecision::RedirectToLogin
    );
    assert_eq!(
        app.auth.route(Route::Login).await,
        RouteDecision::Render(Route::Login)
    );
    app.teardown();
}
