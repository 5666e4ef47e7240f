use serde::Deserialize;

/// Update body. Updates are full overwrites: a missing field overwrites
/// the stored value with the empty string.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub project_name: String,

    #[serde(default)]
    pub project_owner: String,
}
