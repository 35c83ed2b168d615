//! Then steps for project ordering BDD scenarios.

use super::world::ProjectWorld;
use backoffice::project::domain::{ProjectId, ProjectView};
use rstest_bdd_macros::then;

fn find(views: &[ProjectView], id: u64) -> Result<&ProjectView, eyre::Report> {
    views
        .iter()
        .find(|view| view.project().id() == ProjectId::new(id))
        .ok_or_else(|| eyre::eyre!("project {id} is not listed"))
}

#[then("the project order is {order}")]
fn the_project_order_is(world: &mut ProjectWorld, order: String) -> Result<(), eyre::Report> {
    let expected = order
        .split(',')
        .map(|part| part.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;
    let actual: Vec<u64> = world
        .projects()?
        .iter()
        .map(|view| view.project().id().value())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected order {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("project {id:u64} has a result below {bound:u64}")]
fn project_has_result_below(world: &mut ProjectWorld, id: u64, bound: u64) -> Result<(), eyre::Report> {
    let views = world.projects()?;
    let score = find(&views, id)?
        .project()
        .result()
        .ok_or_else(|| eyre::eyre!("project {id} has no result"))?;
    let limit = u32::try_from(bound)?;
    let in_range = score >= 0.0 && score < f64::from(limit);
    if !in_range {
        return Err(eyre::eyre!("project {id} scored {score}, outside [0, {bound})"));
    }
    Ok(())
}

#[then("project {id:u64} has no result")]
fn project_has_no_result(world: &mut ProjectWorld, id: u64) -> Result<(), eyre::Report> {
    let views = world.projects()?;
    if let Some(score) = find(&views, id)?.project().result() {
        return Err(eyre::eyre!("project {id} unexpectedly scored {score}"));
    }
    Ok(())
}

#[then("project {id:u64} has no task")]
fn project_has_no_task(world: &mut ProjectWorld, id: u64) -> Result<(), eyre::Report> {
    let views = world.projects()?;
    if find(&views, id)?.task().is_some() {
        return Err(eyre::eyre!("project {id} still joins its task"));
    }
    Ok(())
}

#[then("the request fails with {kind}")]
fn the_request_fails_with(world: &mut ProjectWorld, kind: String) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the last request to fail"))?;
    if error.kind().to_string() != kind {
        return Err(eyre::eyre!("expected {kind}, got {error}"));
    }
    Ok(())
}
