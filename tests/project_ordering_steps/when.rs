//! When steps for project ordering BDD scenarios.

use super::world::{ProjectWorld, run_async};
use backoffice::api::{CreateProjectBody, ReorderProjectBody, RunProjectsBody};
use backoffice::project::domain::{MoveDirection, ProjectId, RunParameters};
use backoffice::task::domain::TaskId;
use eyre::WrapErr;
use rstest_bdd_macros::when;

fn reorder(world: &mut ProjectWorld, id: u64, direction: MoveDirection) -> Result<(), eyre::Report> {
    let body = ReorderProjectBody::new(ProjectId::new(id), direction);
    let result = run_async(world.backoffice()?.reorder_project(body));
    world.last_error = result.err();
    Ok(())
}

#[when("project {id:u64} is moved up")]
fn project_moved_up(world: &mut ProjectWorld, id: u64) -> Result<(), eyre::Report> {
    reorder(world, id, MoveDirection::Up)
}

#[when("project {id:u64} is moved down")]
fn project_moved_down(world: &mut ProjectWorld, id: u64) -> Result<(), eyre::Report> {
    reorder(world, id, MoveDirection::Down)
}

#[when("projects {first:u64} and {second:u64} are run")]
fn projects_are_run(world: &mut ProjectWorld, first: u64, second: u64) -> Result<(), eyre::Report> {
    let body = RunProjectsBody {
        task_ids: vec![ProjectId::new(first), ProjectId::new(second)],
        parameters: RunParameters::default(),
    };
    run_async(world.backoffice()?.run_projects(body)).wrap_err("run projects")?;
    Ok(())
}

#[when("project {id:u64} is deleted")]
fn project_is_deleted(world: &mut ProjectWorld, id: u64) -> Result<(), eyre::Report> {
    run_async(world.backoffice()?.delete_project(ProjectId::new(id))).wrap_err("delete project")?;
    Ok(())
}

#[when("a project is created for task {task:u64}")]
fn project_is_created(world: &mut ProjectWorld, task: u64) -> Result<(), eyre::Report> {
    let body = CreateProjectBody {
        task_id: TaskId::new(task),
    };
    run_async(world.backoffice()?.create_project(body)).wrap_err("create project")?;
    Ok(())
}

#[when("task {id:u64} is deleted")]
fn task_is_deleted(world: &mut ProjectWorld, id: u64) -> Result<(), eyre::Report> {
    run_async(world.backoffice()?.delete_task(TaskId::new(id))).wrap_err("delete task")?;
    Ok(())
}
