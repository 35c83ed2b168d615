//! The single permission predicate consumed by every route and action.

use crate::access::domain::{AccessDenied, Action, AuthorizationSet, Requirement, Route};

/// Caller authentication state as observed at evaluation time.
///
/// States other than [`AccessState::Authenticated`] always deny.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AccessState {
    /// The auth check has not resolved yet.
    #[default]
    Pending,
    /// The auth check failed.
    Failed,
    /// The caller is known to be anonymous.
    Unauthenticated,
    /// The caller is authenticated with the given authorizations.
    Authenticated(AuthorizationSet),
}

impl AccessState {
    /// Returns the caller authorizations when authenticated.
    #[must_use]
    pub const fn authorizations(&self) -> Option<&AuthorizationSet> {
        match self {
            Self::Authenticated(authorizations) => Some(authorizations),
            Self::Pending | Self::Failed | Self::Unauthenticated => None,
        }
    }
}

/// Evaluates a requirement against the caller authorizations.
///
/// `None` stands for an unauthenticated caller and always denies. An empty
/// requirement passes for any authenticated caller; otherwise the caller
/// passes when holding `SUPER` or at least one listed permission.
///
/// # Examples
///
/// ```rust
/// use backoffice::access::domain::{Authorization, AuthorizationSet, Requirement};
/// use backoffice::access::services::has_permission;
///
/// let viewer = AuthorizationSet::from([Authorization::ViewUsers]);
/// let required = Requirement::from(Authorization::EditUsers);
/// assert!(!has_permission(Some(&viewer), &required));
/// ```
#[must_use]
pub fn has_permission(authorizations: Option<&AuthorizationSet>, required: &Requirement) -> bool {
    let Some(held) = authorizations else {
        return false;
    };
    if required.is_empty() || held.is_super() {
        return true;
    }
    required
        .authorizations()
        .iter()
        .any(|authorization| held.contains(*authorization))
}

/// Evaluates a requirement against an access state.
#[must_use]
pub fn is_allowed(state: &AccessState, required: &Requirement) -> bool {
    has_permission(state.authorizations(), required)
}

/// Evaluates a requirement and reports why access is denied.
///
/// # Errors
///
/// Returns [`AccessDenied::Unauthenticated`] for any state other than
/// authenticated, and [`AccessDenied::Unauthorized`] when the caller holds
/// none of the required permissions.
pub fn require(state: &AccessState, required: &Requirement) -> Result<(), AccessDenied> {
    let Some(held) = state.authorizations() else {
        return Err(AccessDenied::Unauthenticated);
    };
    if has_permission(Some(held), required) {
        Ok(())
    } else {
        Err(AccessDenied::Unauthorized {
            required: required.clone(),
        })
    }
}

/// Evaluates the requirement of a dashboard route.
///
/// # Errors
///
/// See [`require`].
pub fn require_route(state: &AccessState, route: Route) -> Result<(), AccessDenied> {
    require(state, &route.requirement())
}

/// Returns `true` when the caller may perform the action.
#[must_use]
pub fn can_perform(state: &AccessState, action: Action) -> bool {
    is_allowed(state, &action.requirement())
}
