//! Tests for `has_permission` and the state-aware wrappers.

use crate::access::{
    domain::{AccessDenied, Action, Authorization, AuthorizationSet, Requirement, Route},
    services::{AccessState, can_perform, has_permission, require, require_route},
};
use rstest::rstest;

fn set(authorizations: &[Authorization]) -> AuthorizationSet {
    authorizations.iter().copied().collect()
}

#[rstest]
#[case(Requirement::authenticated())]
#[case(Requirement::from(Authorization::DeleteUsers))]
#[case(Requirement::any_of([Authorization::EditTasks, Authorization::ViewProjects]))]
fn super_satisfies_any_requirement(#[case] required: Requirement) {
    let held = set(&[Authorization::Super]);
    assert!(has_permission(Some(&held), &required));
}

#[rstest]
fn missing_permission_is_denied() {
    let held = set(&[Authorization::ViewUsers]);
    let required = Requirement::from([Authorization::EditUsers]);
    assert!(!has_permission(Some(&held), &required));
}

#[rstest]
fn any_listed_permission_is_enough() {
    let held = set(&[Authorization::ViewUsers, Authorization::EditUsers]);
    let required = Requirement::from([Authorization::EditUsers, Authorization::DeleteUsers]);
    assert!(has_permission(Some(&held), &required));
}

#[rstest]
fn empty_requirement_only_needs_authentication() {
    let nobody = AuthorizationSet::new();
    assert!(has_permission(Some(&nobody), &Requirement::authenticated()));
    assert!(has_permission(Some(&nobody), &Requirement::from(None)));
}

#[rstest]
#[case(Requirement::authenticated())]
#[case(Requirement::from(Authorization::ViewUsers))]
fn unauthenticated_caller_is_always_denied(#[case] required: Requirement) {
    assert!(!has_permission(None, &required));
}

#[rstest]
#[case(AccessState::Pending)]
#[case(AccessState::Failed)]
#[case(AccessState::Unauthenticated)]
fn non_authenticated_states_fail_closed(#[case] state: AccessState) {
    let result = require(&state, &Requirement::authenticated());
    assert_eq!(result, Err(AccessDenied::Unauthenticated));
}

#[rstest]
fn require_reports_unmet_requirement() {
    let state = AccessState::Authenticated(set(&[Authorization::ViewTasks]));

    let result = require_route(&state, Route::EditTask);

    assert_eq!(
        result,
        Err(AccessDenied::Unauthorized {
            required: Requirement::from(Authorization::EditTasks),
        })
    );
}

#[rstest]
fn actions_follow_project_roles() {
    let state = AccessState::Authenticated(set(&[
        Authorization::DeleteProjects,
        Authorization::EditProjects,
        Authorization::ViewProjects,
    ]));

    assert!(can_perform(&state, Action::EditProjects));
    assert!(can_perform(&state, Action::DeleteProject));
    assert!(!can_perform(&state, Action::DeleteUser));
    assert!(require_route(&state, Route::Projects).is_ok());
    assert!(require_route(&state, Route::Users).is_err());
}
