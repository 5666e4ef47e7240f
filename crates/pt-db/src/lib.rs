pub mod error;
pub mod repositories;
pub mod schema;

pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use schema::initialize_schema;
