pub mod health;
pub mod get;
pub mod post;
pub mod delete;
pub mod example;

pub use health::health_handler;
pub use get::{get_by_name_handler, get_default_handler};
pub use post::post_handler;
pub use delete::delete_handler;
pub use example::example_handler;
