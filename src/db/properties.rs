use crate::domain::ListingRecord;
use crate::errors::StoreError;
use crate::store::StoredListing;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

/// Inserts a new row into `properties`.
///
/// The `slug` column is UNIQUE, so a duplicate identifier fails with
/// `StoreError::Conflict` and leaves the existing row alone.
pub fn insert_property(
    conn: &Connection,
    slug: &str,
    record: &ListingRecord,
    address: &str,
    now: DateTime<Utc>,
) -> Result<StoredListing, StoreError> {
    let data = serde_json::to_string(record)
        .map_err(|e| StoreError::Malformed(format!("serialize listing failed: {e}")))?;

    conn.execute(
        r#"
        INSERT INTO properties (slug, data, address, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
        params![slug, data, address, now],
    )
    .map_err(|e| match e {
        rusqlite::Error::SqliteFailure(ref err, _) if err.code == ErrorCode::ConstraintViolation => {
            StoreError::Conflict(slug.to_string())
        }
        other => StoreError::Unavailable(format!("insert property failed: {other}")),
    })?;

    Ok(StoredListing {
        slug: slug.to_string(),
        data: record.clone(),
        address: Some(address.to_string()),
        created_at: Some(now),
    })
}

/// Looks a row up by exact slug match.
pub fn find_property_by_slug(
    conn: &Connection,
    slug: &str,
) -> Result<Option<StoredListing>, StoreError> {
    let row = conn
        .query_row(
            r#"
            SELECT slug, data, address, created_at
            FROM properties
            WHERE slug = ?1
            "#,
            params![slug],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, DateTime<Utc>>(3)?,
                ))
            },
        )
        .optional()
        .map_err(|e| match e {
            rusqlite::Error::FromSqlConversionFailure(..)
            | rusqlite::Error::InvalidColumnType(..) => {
                StoreError::Malformed(format!("property row for {slug}: {e}"))
            }
            other => StoreError::Unavailable(format!("find property failed: {other}")),
        })?;

    let Some((slug, data, address, created_at)) = row else {
        return Ok(None);
    };

    let data: ListingRecord = serde_json::from_str(&data)
        .map_err(|e| StoreError::Malformed(format!("property data for {slug}: {e}")))?;

    Ok(Some(StoredListing {
        slug,
        data,
        address,
        created_at: Some(created_at),
    }))
}
