//! Project repository for CRUD operations on the `Project` table.
//!
//! All statements are parameterized via `.bind()`; user input is never
//! concatenated into SQL. `update` and `delete` return the affected-row
//! count and leave the zero-rows policy to the caller.

use crate::{DbError, Result as DbErrorResult};

use pt_core::Project;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new row and return the project with its assigned id.
    pub async fn create(&self, project_name: &str, project_owner: &str) -> DbErrorResult<Project> {
        let result = sqlx::query("INSERT INTO Project (ProjectName, ProjectOwner) VALUES (?, ?)")
            .bind(project_name)
            .bind(project_owner)
            .execute(&self.pool)
            .await?;

        Ok(Project {
            id: result.last_insert_rowid(),
            project_name: project_name.to_string(),
            project_owner: project_owner.to_string(),
        })
    }

    /// All rows, in storage order (no ORDER BY).
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query("SELECT ID, ProjectName, ProjectOwner FROM Project")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(decode_project).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query("SELECT ID, ProjectName, ProjectOwner FROM Project WHERE ID = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(decode_project).transpose()
    }

    /// Overwrite both mutable fields on the matching row.
    /// Returns the number of rows affected (0 when the id does not exist).
    pub async fn update(
        &self,
        id: i64,
        project_name: &str,
        project_owner: &str,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query("UPDATE Project SET ProjectName = ?, ProjectOwner = ? WHERE ID = ?")
            .bind(project_name)
            .bind(project_owner)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Hard delete. Returns the number of rows affected (0 when the id
    /// does not exist).
    pub async fn delete(&self, id: i64) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM Project WHERE ID = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn decode_project(row: SqliteRow) -> DbErrorResult<Project> {
    let decode = |e: sqlx::Error, column: &str| DbError::Decode {
        message: format!("Invalid value in Project.{column}: {e}"),
        location: ErrorLocation::from(Location::caller()),
    };

    Ok(Project {
        id: row.try_get("ID").map_err(|e| decode(e, "ID"))?,
        project_name: row
            .try_get("ProjectName")
            .map_err(|e| decode(e, "ProjectName"))?,
        project_owner: row
            .try_get("ProjectOwner")
            .map_err(|e| decode(e, "ProjectOwner"))?,
    })
}
