pub mod project_repository;
