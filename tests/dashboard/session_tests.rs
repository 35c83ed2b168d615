//! Session and permission flows across the client and the backend.

use std::sync::Arc;

use backoffice::access::domain::{AccessDenied, Action, Route};
use backoffice::access::services::AccessState;
use backoffice::api::{Backoffice, DashboardClient};
use backoffice::auth::domain::LoginRequest;
use backoffice::user::domain::UserId;
use rstest::rstest;

use super::helpers::backend;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_editor_sees_projects_but_not_users(backend: Arc<Backoffice>) {
    let client = DashboardClient::new(backend, 100);
    assert_eq!(
        client.open_route(Route::Projects).await,
        Err(AccessDenied::Unauthenticated)
    );

    client
        .login("jane@smith.com")
        .await
        .expect("login should succeed");

    assert!(client.open_route(Route::Projects).await.is_ok());
    assert!(client.can_perform(Action::EditProjects).await);
    assert!(client.can_perform(Action::DeleteProject).await);
    assert!(!client.can_perform(Action::DeleteUser).await);
    assert!(matches!(
        client.open_route(Route::Users).await,
        Err(AccessDenied::Unauthorized { .. })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn super_user_session_ends_on_logout(backend: Arc<Backoffice>) {
    let client = DashboardClient::new(backend, 100);
    client
        .login("super@admin.com")
        .await
        .expect("login should succeed");
    for route in [Route::Users, Route::Projects, Route::Tasks, Route::EditTask] {
        assert!(client.open_route(route).await.is_ok());
    }

    client.logout().await.expect("logout should succeed");

    assert_eq!(client.access_state().await, AccessState::Unauthenticated);
    assert!(!client.can_perform(Action::EditUser).await);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_user_ends_their_session(backend: Arc<Backoffice>) {
    let credentials = backend
        .login(LoginRequest::new("jane@smith.com"))
        .await
        .expect("login should succeed")
        .body;
    let admin = DashboardClient::new(Arc::clone(&backend), 100);
    admin
        .login("super@admin.com")
        .await
        .expect("login should succeed");

    admin
        .delete_user(UserId::new(2))
        .await
        .expect("delete should succeed");

    let check = backend
        .check_authenticated(Some(credentials.token.as_str()))
        .await
        .expect("check should succeed")
        .body;
    assert!(!check.is_authenticated());
    assert!(check.user().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sessions_are_independent_per_client(backend: Arc<Backoffice>) {
    let editor = DashboardClient::new(Arc::clone(&backend), 100);
    let visitor = DashboardClient::new(backend, 100);

    editor
        .login("jane@smith.com")
        .await
        .expect("login should succeed");

    assert!(editor.token().is_some());
    assert!(visitor.token().is_none());
    assert!(!visitor.can_perform(Action::EditProjects).await);
}
