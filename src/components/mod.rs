//! UI Components
//!
//! Pages and the pieces they are built from.

mod new_todo_form;
mod todo_row;
mod todo_list_view;
mod env_inspector_view;
mod not_found_view;

pub use new_todo_form::NewTodoForm;
pub use todo_row::TodoRow;
pub use todo_list_view::TodoListView;
pub use env_inspector_view::EnvInspectorView;
pub use not_found_view::NotFoundView;
