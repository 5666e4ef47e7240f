pub mod models;

#[cfg(test)]
mod tests;

pub use models::project::Project;
