//! Application services for task management.

mod catalog;

pub use catalog::{
    CreateTaskRequest, EditTaskRequest, ParameterInput, TaskCatalogService, TaskServiceError,
    TaskServiceResult,
};
