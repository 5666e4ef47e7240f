use pt_core::Project;

use serde::Serialize;

/// Project DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: i64,
    pub project_name: String,
    pub project_owner: String,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            project_name: p.project_name,
            project_owner: p.project_owner,
        }
    }
}
