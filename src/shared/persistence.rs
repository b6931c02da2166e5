use sea_orm::DbErr;

/// True when the database rejected a write because of a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// Same as [`is_unique_violation`], restricted to a constraint whose name contains `hint`.
pub fn is_unique_violation_on(err: &DbErr, hint: &str) -> bool {
    is_unique_violation(err) && err.to_string().to_lowercase().contains(hint)
}

/// `%term%` for ILIKE, with the LIKE wildcards inside `term` escaped.
pub fn contains_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern(" dra "), "%dra%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn detects_postgres_duplicate_key_message() {
        let err = DbErr::Custom(
            "duplicate key value violates unique constraint \"idx_reviews_author_title_unique\""
                .to_string(),
        );

        assert!(is_unique_violation(&err));
        assert!(is_unique_violation_on(&err, "author_title"));
        assert!(!is_unique_violation_on(&err, "slug"));
    }

    #[test]
    fn ignores_other_errors() {
        let err = DbErr::Custom("connection refused".to_string());
        assert!(!is_unique_violation(&err));
    }
}
