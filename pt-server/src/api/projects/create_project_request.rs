use serde::Deserialize;

/// Create body. Both fields are required; a client-supplied `id` is an
/// unknown field and is ignored by deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: String,
    pub project_owner: String,
}
