use crate::domain::errors::DomainError;

const CNT_CONTENT_WORKSPACE: &str = "contents_workspace_id_fkey";
const CNT_CONTENT_DEFINITION: &str = "contents_content_definition_id_fkey";
const CNT_CONTENT_PKEY: &str = "contents_pkey";
const CNT_CONTENT_DEFINITION_PKEY: &str = "content_definitions_pkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_CONTENT_WORKSPACE => DomainError::NotFound("workspace not found".into()),
                    CNT_CONTENT_DEFINITION => {
                        DomainError::NotFound("content definition not found".into())
                    }
                    CNT_CONTENT_PKEY => DomainError::Conflict("content already exists".into()),
                    CNT_CONTENT_DEFINITION_PKEY => {
                        DomainError::Conflict("content definition already exists".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Revisions are stored as BIGINT.
pub fn revision_from_db(value: i64) -> Result<u64, DomainError> {
    u64::try_from(value)
        .map_err(|_| DomainError::Persistence(format!("negative revision {value} in store")))
}

pub fn revision_to_db(value: u64) -> Result<i64, DomainError> {
    i64::try_from(value)
        .map_err(|_| DomainError::Persistence(format!("revision {value} overflows store")))
}
