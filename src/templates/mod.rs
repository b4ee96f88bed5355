pub mod components;
pub mod layouts;
pub mod links;
pub mod pages;

// Re-exports for convenience
pub use components::{html_error_response, load_failed_response, plans_list};
pub use layouts::desktop::desktop_layout;
pub use links::Links;
