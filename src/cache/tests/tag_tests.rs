//! Tests for tag matching and the endpoint tag tables.

use crate::cache::{CacheKey, EntityKind, Mutation, Query, QueryTag, TagIndex};
use crate::project::domain::ProjectId;
use crate::task::domain::TaskId;
use crate::user::domain::UserId;
use rstest::rstest;

#[rstest]
#[case(QueryTag::kind(EntityKind::Task), QueryTag::list(EntityKind::Task), true)]
#[case(QueryTag::kind(EntityKind::Task), QueryTag::entity(EntityKind::Task, 3), true)]
#[case(QueryTag::list(EntityKind::Task), QueryTag::list(EntityKind::Task), true)]
#[case(QueryTag::list(EntityKind::Task), QueryTag::entity(EntityKind::Task, 3), false)]
#[case(QueryTag::entity(EntityKind::Task, 3), QueryTag::entity(EntityKind::Task, 3), true)]
#[case(QueryTag::entity(EntityKind::Task, 3), QueryTag::entity(EntityKind::Task, 4), false)]
#[case(QueryTag::kind(EntityKind::User), QueryTag::list(EntityKind::Task), false)]
fn tag_coverage(#[case] invalidated: QueryTag, #[case] provided: QueryTag, #[case] expected: bool) {
    assert_eq!(invalidated.covers(provided), expected);
}

#[rstest]
#[case(QueryTag::list(EntityKind::Project), "Project:PARTIAL-LIST")]
#[case(QueryTag::entity(EntityKind::User, 7), "User:7")]
#[case(QueryTag::kind(EntityKind::Auth), "Auth")]
fn tags_display_as_type_and_id(#[case] tag: QueryTag, #[case] expected: &str) {
    assert_eq!(tag.to_string(), expected);
}

#[rstest]
#[case(Mutation::CreateProject, vec![QueryTag::list(EntityKind::Project)])]
#[case(Mutation::RunProjects, vec![QueryTag::list(EntityKind::Project)])]
#[case(Mutation::ReorderProject, vec![QueryTag::list(EntityKind::Project)])]
#[case(
    Mutation::DeleteProject(ProjectId::new(2)),
    vec![QueryTag::list(EntityKind::Project), QueryTag::entity(EntityKind::Project, 2)]
)]
#[case(Mutation::CreateTask, vec![QueryTag::list(EntityKind::Task)])]
#[case(
    Mutation::EditTask(TaskId::new(5)),
    vec![QueryTag::list(EntityKind::Task), QueryTag::entity(EntityKind::Task, 5)]
)]
#[case(
    Mutation::EditUser(UserId::new(4)),
    vec![
        QueryTag::list(EntityKind::User),
        QueryTag::entity(EntityKind::User, 4),
        QueryTag::kind(EntityKind::Auth),
    ]
)]
#[case(
    Mutation::DeleteUser(UserId::new(1)),
    vec![
        QueryTag::list(EntityKind::User),
        QueryTag::entity(EntityKind::User, 1),
        QueryTag::kind(EntityKind::Auth),
    ]
)]
#[case(Mutation::CheckUserEmail, Vec::new())]
#[case(Mutation::Login, vec![QueryTag::kind(EntityKind::Auth)])]
fn mutations_declare_their_invalidations(
    #[case] mutation: Mutation,
    #[case] expected: Vec<QueryTag>,
) {
    assert_eq!(mutation.invalidates(), expected);
}

#[rstest]
fn only_login_resets_the_cache() {
    assert!(Mutation::Login.resets_cache());
    assert!(!Mutation::CreateUser.resets_cache());
}

#[rstest]
fn list_invalidation_leaves_entity_reads_indexed_apart() {
    let mut index = TagIndex::default();
    for query in [Query::Tasks, Query::Task(TaskId::new(1)), Query::Users] {
        index.register(&query, &query.provides());
    }

    let list_only = index.matching(&Mutation::CreateTask.invalidates());
    let mut per_id = index.matching(&Mutation::EditTask(TaskId::new(1)).invalidates());
    per_id.sort_by_key(|query| format!("{query:?}"));

    assert_eq!(list_only, vec![Query::Tasks]);
    assert_eq!(per_id, vec![Query::Task(TaskId::new(1)), Query::Tasks]);
}

#[rstest]
fn auth_invalidation_matches_session_reads() {
    let mut index = TagIndex::default();
    index.register(&Query::CheckAuthenticated, &Query::CheckAuthenticated.provides());

    assert_eq!(
        index.matching(&Mutation::Login.invalidates()),
        vec![Query::CheckAuthenticated]
    );
}
