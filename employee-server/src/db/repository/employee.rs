//! Employee Repository

use serde::Deserialize;
use serde::de::IgnoredAny;
use std::time::Duration;

use super::{BaseRepository, EmployeeFilter, StoreError, StoreResult};
use crate::db::Store;
use crate::db::models::{Employee, EmployeeFields, EmployeeId, EmployeeInput};

const SELECT_EMPLOYEE: &str =
    "SELECT record::id(id) AS oid, username, password, skills FROM $target";
const CREATE_EMPLOYEE: &str = "CREATE $target CONTENT $fields RETURN AFTER";
const UPDATE_EMPLOYEE: &str = r#"UPDATE $target SET
        username = $username,
        password = $password,
        skills = $skills
    RETURN AFTER"#;
const DELETE_EMPLOYEE: &str = "DELETE $target RETURN BEFORE";

/// Row shape returned by [`SELECT_EMPLOYEE`]
#[derive(Debug, Deserialize)]
struct EmployeeRow {
    oid: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: i64,
    #[serde(default)]
    skills: Vec<String>,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = StoreError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let id = EmployeeId::parse_hex(&row.oid).map_err(|_| {
            StoreError::Unexpected(format!("record key {:?} is not an employee id", row.oid))
        })?;
        Ok(Employee {
            id,
            username: row.username,
            password: row.password,
            skills: row.skills,
        })
    }
}

/// Touched record, as returned by CREATE / UPDATE / DELETE; only counted
type AffectedRow = IgnoredAny;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Store, table: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base: BaseRepository::new(db, table, timeout),
        }
    }

    /// Find all employees, in the store's natural order
    pub async fn find_all(&self) -> StoreResult<Vec<Employee>> {
        let rows = self.select(EmployeeFilter::All).await?;
        rows.into_iter().map(Employee::try_from).collect()
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: EmployeeId) -> StoreResult<Option<Employee>> {
        let rows = self.select(EmployeeFilter::ById(id)).await?;
        rows.into_iter().next().map(Employee::try_from).transpose()
    }

    /// Insert a new employee, generating its id when the caller gave none
    ///
    /// A caller-supplied id is written as-is; a clash surfaces as a store error.
    pub async fn insert(&self, input: EmployeeInput) -> StoreResult<EmployeeId> {
        let (id, fields) = input.into_parts();
        let id = id.filter(|id| !id.is_zero()).unwrap_or_else(EmployeeId::new);

        let mut response = self
            .base
            .bounded(
                self.base
                    .query(CREATE_EMPLOYEE, EmployeeFilter::ById(id))
                    .bind(("fields", fields)),
            )
            .await?;
        let created: Vec<AffectedRow> = response.take(0)?;
        if created.is_empty() {
            return Err(StoreError::Unexpected(format!("employee {id} was not created")));
        }

        tracing::debug!(employee_id = %id, "Employee inserted");
        Ok(id)
    }

    /// Replace `username`, `password` and `skills` of one record
    ///
    /// Returns the number of matched records (0 or 1). The id is never touched.
    pub async fn update_by_id(&self, id: EmployeeId, fields: EmployeeFields) -> StoreResult<u64> {
        let EmployeeFields {
            username,
            password,
            skills,
        } = fields;

        let mut response = self
            .base
            .bounded(
                self.base
                    .query(UPDATE_EMPLOYEE, EmployeeFilter::ById(id))
                    .bind(("username", username))
                    .bind(("password", password))
                    .bind(("skills", skills)),
            )
            .await?;
        let updated: Vec<AffectedRow> = response.take(0)?;
        Ok(updated.len() as u64)
    }

    /// Hard delete one record; returns the number deleted (0 or 1)
    pub async fn delete_by_id(&self, id: EmployeeId) -> StoreResult<u64> {
        let mut response = self
            .base
            .bounded(self.base.query(DELETE_EMPLOYEE, EmployeeFilter::ById(id)))
            .await?;
        let deleted: Vec<AffectedRow> = response.take(0)?;
        Ok(deleted.len() as u64)
    }

    /// Store liveness probe
    pub async fn ping(&self) -> StoreResult<()> {
        self.base.bounded(self.base.db().health()).await
    }

    async fn select(&self, filter: EmployeeFilter) -> StoreResult<Vec<EmployeeRow>> {
        let mut response = self
            .base
            .bounded(self.base.query(SELECT_EMPLOYEE, filter))
            .await?;
        Ok(response.take(0)?)
    }
}
