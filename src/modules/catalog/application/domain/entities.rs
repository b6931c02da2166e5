use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use uuid::Uuid;

pub const TERM_NAME_MAX_LEN: usize = 256;
pub const SLUG_MAX_LEN: usize = 50;
pub const TITLE_NAME_MAX_LEN: usize = 256;

//
// ──────────────────────────────────────────────────────────
// Vocabulary
// ──────────────────────────────────────────────────────────
//

/// Categories and genres share one shape and one set of rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularyKind {
    Category,
    Genre,
}

impl VocabularyKind {
    pub fn label(&self) -> &'static str {
        match self {
            VocabularyKind::Category => "category",
            VocabularyKind::Genre => "genre",
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub name: String,
    pub slug: String,
}

//
// ──────────────────────────────────────────────────────────
// Titles
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleResult {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub rating: Option<i16>,
    pub description: String,
    pub genre: Vec<Term>,
    pub category: Option<Term>,
}

//
// ──────────────────────────────────────────────────────────
// Field rules
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogFieldError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at most 256 characters")]
    NameTooLong,
    #[error("slug must not be empty")]
    EmptySlug,
    #[error("slug must be at most 50 characters")]
    SlugTooLong,
    #[error("slug may only contain letters, digits, hyphens and underscores")]
    InvalidSlug,
    #[error("year must be between 0 and the current year")]
    YearOutOfRange,
}

impl CatalogFieldError {
    pub fn field(&self) -> &'static str {
        match self {
            CatalogFieldError::EmptyName | CatalogFieldError::NameTooLong => "name",
            CatalogFieldError::EmptySlug
            | CatalogFieldError::SlugTooLong
            | CatalogFieldError::InvalidSlug => "slug",
            CatalogFieldError::YearOutOfRange => "year",
        }
    }
}

fn slug_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[-a-zA-Z0-9_]+$").expect("slug pattern compiles"))
}

pub fn check_name(raw: &str, max_len: usize) -> Result<String, CatalogFieldError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CatalogFieldError::EmptyName);
    }
    if name.chars().count() > max_len {
        return Err(CatalogFieldError::NameTooLong);
    }
    Ok(name.to_string())
}

pub fn check_slug(raw: &str) -> Result<String, CatalogFieldError> {
    let slug = raw.trim();
    if slug.is_empty() {
        return Err(CatalogFieldError::EmptySlug);
    }
    if slug.chars().count() > SLUG_MAX_LEN {
        return Err(CatalogFieldError::SlugTooLong);
    }
    if !slug_pattern().is_match(slug) {
        return Err(CatalogFieldError::InvalidSlug);
    }
    Ok(slug.to_string())
}

pub fn check_year(year: i32, current_year: i32) -> Result<i32, CatalogFieldError> {
    if year < 0 || year > current_year {
        return Err(CatalogFieldError::YearOutOfRange);
    }
    Ok(year)
}
