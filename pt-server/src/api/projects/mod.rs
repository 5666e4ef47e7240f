pub mod create_project_request;
pub mod project_dto;
pub mod projects;
pub mod update_project_request;
