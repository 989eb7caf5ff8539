//! Classification of database driver errors.

/// Name of the unique constraint on `short_urls.short_id`.
pub const SHORT_ID_UNIQUE_CONSTRAINT: &str = "short_urls_short_id_key";

/// Returns true if `e` is a unique violation on the short id constraint.
pub fn is_unique_violation_on_short_id(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SHORT_ID_UNIQUE_CONSTRAINT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_violations() {
        assert!(!is_unique_violation_on_short_id(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_short_id(&sqlx::Error::PoolTimedOut));
    }
}
