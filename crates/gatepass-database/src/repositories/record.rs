//! Record repository implementation.
//!
//! Both record shapes live in the `records` table, discriminated by `kind`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use gatepass_core::error::{AppError, ErrorKind};
use gatepass_core::result::AppResult;
use gatepass_entity::account::Role;
use gatepass_entity::record::{CheckInRecord, NewCheckInRecord, NewPassRecord, PassRecord, Record};

use crate::store::RecordStore;

const KIND_PASS: &str = "pass";
const KIND_CHECK_IN: &str = "check_in";

/// Raw `records` row before it is split into its document shape.
#[derive(Debug, FromRow)]
struct RecordRow {
    id: Uuid,
    kind: String,
    name: String,
    ic_number: Option<String>,
    pass_identifier: Option<String>,
    host_number: Option<String>,
    host_username: Option<String>,
    current_check_in: Option<String>,
    records: Option<Vec<String>>,
    role: Option<Role>,
    record_id: Option<String>,
    purpose: Option<String>,
    check_in_time: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RecordRow> for Record {
    type Error = AppError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        match row.kind.as_str() {
            KIND_PASS => Ok(Record::Pass(PassRecord {
                id: row.id,
                name: row.name,
                ic_number: row.ic_number.unwrap_or_default(),
                pass_identifier: row.pass_identifier.unwrap_or_default(),
                host_number: row.host_number.unwrap_or_default(),
                host_username: row.host_username.unwrap_or_default(),
                current_check_in: row.current_check_in.unwrap_or_default(),
                records: row.records.unwrap_or_default(),
                role: row.role.unwrap_or(Role::Visitor),
                created_at: row.created_at,
            })),
            KIND_CHECK_IN => Ok(Record::CheckIn(CheckInRecord {
                id: row.id,
                name: row.name,
                record_id: row.record_id.unwrap_or_default(),
                purpose: row.purpose.unwrap_or_default(),
                check_in_time: row.check_in_time.unwrap_or(row.created_at),
            })),
            other => Err(AppError::database(format!(
                "Record {} has unknown kind '{other}'",
                row.id
            ))),
        }
    }
}

/// Repository for the `records` table.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    pool: PgPool,
}

impl RecordRepository {
    /// Create a new record repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for RecordRepository {
    async fn insert_pass(&self, data: &NewPassRecord) -> AppResult<PassRecord> {
        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO records \
             (id, kind, name, ic_number, pass_identifier, host_number, host_username, \
              current_check_in, records, role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'Visitor') \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(KIND_PASS)
        .bind(&data.name)
        .bind(&data.ic_number)
        .bind(&data.pass_identifier)
        .bind(&data.host_number)
        .bind(&data.host_username)
        .bind(&data.record_id)
        .bind(vec![data.record_id.clone()])
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to store pass record", e))?;

        match Record::try_from(row)? {
            Record::Pass(pass) => Ok(pass),
            Record::CheckIn(_) => Err(AppError::database("Stored pass record came back as check-in")),
        }
    }

    async fn insert_check_in(&self, data: &NewCheckInRecord) -> AppResult<CheckInRecord> {
        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO records (id, kind, name, record_id, purpose, check_in_time) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(KIND_CHECK_IN)
        .bind(&data.name)
        .bind(&data.record_id)
        .bind(&data.purpose)
        .bind(data.check_in_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store check-in record", e)
        })?;

        match Record::try_from(row)? {
            Record::CheckIn(check_in) => Ok(check_in),
            Record::Pass(_) => Err(AppError::database("Stored check-in record came back as pass")),
        }
    }

    async fn list_all(&self) -> AppResult<Vec<Record>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT * FROM records ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list records", e))?;

        rows.into_iter().map(Record::try_from).collect()
    }
}
