//! Tests for authorization parsing and serialization.

use crate::access::domain::{Authorization, AuthorizationSet, Route};
use rstest::rstest;

#[rstest]
#[case("VIEW_USERS", Authorization::ViewUsers)]
#[case(" delete_projects ", Authorization::DeleteProjects)]
#[case("SUPER", Authorization::Super)]
fn authorization_parses_wire_names(#[case] raw: &str, #[case] expected: Authorization) {
    assert_eq!(Authorization::try_from(raw), Ok(expected));
}

#[rstest]
fn authorization_rejects_unknown_names() {
    let err = Authorization::try_from("ADMIN").expect_err("unknown name should fail");
    assert_eq!(err.0, "ADMIN");
}

#[rstest]
fn authorization_set_serializes_as_wire_names() {
    let set = AuthorizationSet::from([Authorization::EditProjects, Authorization::ViewProjects]);

    let json = serde_json::to_value(&set).expect("serialization should succeed");

    assert_eq!(json, serde_json::json!(["VIEW_PROJECTS", "EDIT_PROJECTS"]));
}

#[rstest]
fn authorization_set_deduplicates_roles() {
    let set: AuthorizationSet =
        serde_json::from_str(r#"["SUPER","SUPER","VIEW_TASKS"]"#).expect("valid roles");

    assert_eq!(set.iter().count(), 2);
    assert!(set.is_super());
}

#[rstest]
#[case(Route::Users, Authorization::ViewUsers)]
#[case(Route::Projects, Authorization::ViewProjects)]
#[case(Route::Tasks, Authorization::ViewTasks)]
#[case(Route::EditTask, Authorization::EditTasks)]
fn routes_require_their_view_permission(#[case] route: Route, #[case] expected: Authorization) {
    assert_eq!(route.requirement().authorizations(), &[expected]);
}
