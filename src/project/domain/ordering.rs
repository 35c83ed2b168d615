//! Neighbour-swap reordering over the live project set.
//!
//! Reordering never renumbers: it exchanges the `order` values of the moved
//! project and its neighbour in the sorted sequence, so every other project
//! keeps its value and its relative position.

use super::{MoveDirection, Project, ProjectId, ProjectOrder};

/// Result of planning a reorder.
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderOutcome {
    /// The target sat at the boundary in the requested direction.
    Unchanged,
    /// The target and its neighbour exchanged their `order` values.
    Swapped {
        /// The requested project with its new order.
        moved: Project,
        /// The neighbour with the order previously held by `moved`.
        displaced: Project,
    },
}

impl ReorderOutcome {
    /// Returns the projects whose order changed.
    #[must_use]
    pub fn changed(&self) -> Vec<Project> {
        match self {
            Self::Unchanged => Vec::new(),
            Self::Swapped { moved, displaced } => vec![moved.clone(), displaced.clone()],
        }
    }
}

/// Returns the projects sorted by ascending order, ties broken by id.
#[must_use]
pub fn sorted_by_order(projects: &[Project]) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    sorted.sort_by_key(|project| (project.order(), project.id()));
    sorted
}

/// Returns the order assigned to a newly created project: one past the
/// largest live order, which is `count + 1` for a dense set.
#[must_use]
pub fn next_order(projects: &[Project]) -> ProjectOrder {
    projects
        .iter()
        .map(Project::order)
        .max()
        .map_or(ProjectOrder::new(1), ProjectOrder::next)
}

/// Plans moving `target` one step in `direction`.
///
/// Returns `None` when `target` is not in the live set. Moving the first
/// project up or the last project down yields
/// [`ReorderOutcome::Unchanged`].
#[must_use]
pub fn plan_reorder(
    projects: &[Project],
    target: ProjectId,
    direction: MoveDirection,
) -> Option<ReorderOutcome> {
    let sorted = sorted_by_order(projects);
    let position = sorted.iter().position(|project| project.id() == target)?;
    let neighbour_position = match direction {
        MoveDirection::Up => position.checked_sub(1),
        MoveDirection::Down => position.checked_add(1),
    };
    let (Some(current), Some(neighbour)) = (
        sorted.get(position),
        neighbour_position.and_then(|index| sorted.get(index)),
    ) else {
        return Some(ReorderOutcome::Unchanged);
    };

    let mut moved = current.clone();
    let mut displaced = neighbour.clone();
    moved.set_order(neighbour.order());
    displaced.set_order(current.order());
    Some(ReorderOutcome::Swapped { moved, displaced })
}
