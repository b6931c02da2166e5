//! Process-local port implementations for use-case tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Role, User, UserId};
use crate::auth::application::ports::outgoing::{
    ConfirmationCodeGenerator, ConfirmationCodeRepository, ConfirmationCodeRepositoryError,
    CreateUserData, UpdateUserData, UserListFilter, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};
use crate::catalog::application::domain::entities::{Term, TitleResult, VocabularyKind};
use crate::catalog::application::ports::outgoing::{
    PatchTitleData, TitleData, TitleFilter, TitleQuery, TitleQueryError, TitleRepository,
    TitleRepositoryError, VocabularyQuery, VocabularyQueryError, VocabularyRepository,
    VocabularyRepositoryError,
};
use crate::comment::application::domain::entities::CommentResult;
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRepository, CommentRepositoryError, CreateCommentData,
};
use crate::review::application::domain::entities::ReviewResult;
use crate::review::application::domain::rating::mean_rating;
use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewQuery, ReviewQueryError, ReviewRepository, ReviewRepositoryError,
    UpdateReviewData,
};
use crate::shared::api::{PageRequest, PageResult};
use crate::shared::patch::PatchField;

fn paginate<T: Clone>(items: &[T], page: PageRequest) -> PageResult<T> {
    PageResult {
        items: items
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect(),
        page: page.page,
        per_page: page.per_page,
        total: items.len() as u64,
    }
}

//
// ──────────────────────────────────────────────────────────
// Confirmation codes
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct CodeRecord {
    code_hash: String,
    issued_at: DateTime<Utc>,
    confirmed: bool,
}

#[derive(Clone, Default)]
pub struct InMemoryConfirmationCodes {
    records: Arc<Mutex<HashMap<String, CodeRecord>>>,
}

impl InMemoryConfirmationCodes {
    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn stored_hash(&self, email: &str) -> Option<String> {
        self.records
            .lock()
            .unwrap()
            .get(email)
            .map(|r| r.code_hash.clone())
    }

    pub fn is_confirmed(&self, email: &str) -> bool {
        self.records
            .lock()
            .unwrap()
            .get(email)
            .is_some_and(|r| r.confirmed)
    }

    /// Moves `issued_at` of the record `seconds` into the past.
    pub fn backdate(&self, email: &str, seconds: i64) {
        if let Some(record) = self.records.lock().unwrap().get_mut(email) {
            record.issued_at -= Duration::seconds(seconds);
        }
    }
}

#[async_trait]
impl ConfirmationCodeRepository for InMemoryConfirmationCodes {
    async fn upsert(
        &self,
        email: &str,
        code_hash: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<(), ConfirmationCodeRepositoryError> {
        self.records.lock().unwrap().insert(
            email.to_string(),
            CodeRecord {
                code_hash: code_hash.to_string(),
                issued_at,
                confirmed: false,
            },
        );
        Ok(())
    }

    async fn consume(
        &self,
        email: &str,
        code_hash: &str,
        issued_after: DateTime<Utc>,
    ) -> Result<bool, ConfirmationCodeRepositoryError> {
        let mut records = self.records.lock().unwrap();
        match records.get_mut(email) {
            Some(r) if r.code_hash == code_hash && !r.confirmed && r.issued_at > issued_after => {
                r.confirmed = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn matches(
        &self,
        email: &str,
        code_hash: &str,
        issued_after: DateTime<Utc>,
    ) -> Result<bool, ConfirmationCodeRepositoryError> {
        let records = self.records.lock().unwrap();
        Ok(records
            .get(email)
            .is_some_and(|r| r.code_hash == code_hash && r.issued_at > issued_after))
    }
}

/// Hands out the given codes in order, repeating the last one when exhausted.
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: Mutex::new("ZZZZZZZZZZZZZZZZ".to_string()),
        }
    }
}

impl ConfirmationCodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.codes.lock().unwrap().pop_front() {
            *last = next;
        }
        last.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct UserStore {
    users: Vec<User>,
    competitor: Option<CreateUserData>,
}

/// Implements both user ports over one shared vector.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    store: Arc<Mutex<UserStore>>,
}

impl InMemoryUsers {
    pub fn all(&self) -> Vec<User> {
        self.store.lock().unwrap().users.clone()
    }

    pub fn insert(&self, data: CreateUserData) -> User {
        let user = build_user(data);
        self.store.lock().unwrap().users.push(user.clone());
        user
    }

    pub fn insert_with_role(&self, email: &str, role: Role) -> User {
        self.insert(CreateUserData {
            role,
            ..CreateUserData::from_email(email)
        })
    }

    /// The next `create_user` call loses a race: `data` is stored first and
    /// the call reports the email as taken.
    pub fn insert_on_next_create(&self, data: CreateUserData) {
        self.store.lock().unwrap().competitor = Some(data);
    }
}

fn build_user(data: CreateUserData) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(Uuid::new_v4()),
        username: data.username,
        email: data.email,
        first_name: data.first_name,
        last_name: data.last_name,
        bio: data.bio,
        role: data.role,
        is_staff: data.is_staff,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let store = self.store.lock().unwrap();
        Ok(store.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<User>, UserQueryError> {
        let store = self.store.lock().unwrap();
        let needle = filter.search.map(|s| s.to_lowercase());
        let mut users: Vec<User> = store
            .users
            .iter()
            .filter(|u| {
                needle
                    .as_deref()
                    .map_or(true, |n| u.username.to_lowercase().contains(n))
            })
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(paginate(&users, page))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut store = self.store.lock().unwrap();
        if let Some(competitor) = store.competitor.take() {
            store.users.push(build_user(competitor));
            return Err(UserRepositoryError::EmailTaken);
        }
        if store.users.iter().any(|u| u.username == data.username) {
            return Err(UserRepositoryError::UsernameTaken);
        }
        if store.users.iter().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::EmailTaken);
        }
        let user = build_user(data);
        store.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        data: UpdateUserData,
    ) -> Result<User, UserRepositoryError> {
        let mut store = self.store.lock().unwrap();
        if let Some(username) = &data.username {
            if store
                .users
                .iter()
                .any(|u| u.id != user_id && &u.username == username)
            {
                return Err(UserRepositoryError::UsernameTaken);
            }
        }
        if let Some(email) = &data.email {
            if store.users.iter().any(|u| u.id != user_id && &u.email == email) {
                return Err(UserRepositoryError::EmailTaken);
            }
        }
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        if let Some(v) = data.username {
            user.username = v;
        }
        if let Some(v) = data.email {
            user.email = v;
        }
        if let Some(v) = data.first_name {
            user.first_name = v;
        }
        if let Some(v) = data.last_name {
            user.last_name = v;
        }
        if let Some(v) = data.bio {
            user.bio = v;
        }
        if let Some(v) = data.role {
            user.role = v;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut store = self.store.lock().unwrap();
        let before = store.users.len();
        store.users.retain(|u| u.id != user_id);
        if store.users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

//
// ──────────────────────────────────────────────────────────
// Reviews
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct LedgerState {
    /// title id -> rating
    titles: HashMap<Uuid, Option<i16>>,
    reviews: Vec<ReviewResult>,
    clock: i64,
}

impl LedgerState {
    fn refresh_rating(&mut self, title_id: Uuid) {
        let rating = mean_rating(
            self.reviews
                .iter()
                .filter(|r| r.title_id == title_id)
                .filter_map(|r| r.score),
        );
        self.titles.insert(title_id, rating);
    }
}

/// Review ledger that recomputes the title rating on every write, like the
/// Postgres adapter does inside its transaction.
#[derive(Clone, Default)]
pub struct InMemoryReviewLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl InMemoryReviewLedger {
    pub fn add_title(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().titles.insert(id, None);
        id
    }

    pub fn rating(&self, title_id: Uuid) -> Option<i16> {
        self.state
            .lock()
            .unwrap()
            .titles
            .get(&title_id)
            .copied()
            .flatten()
    }

    pub fn review_count(&self, title_id: Uuid) -> usize {
        self.state
            .lock()
            .unwrap()
            .reviews
            .iter()
            .filter(|r| r.title_id == title_id)
            .count()
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewLedger {
    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.titles.contains_key(&data.title_id) {
            return Err(ReviewRepositoryError::TitleNotFound);
        }
        if state
            .reviews
            .iter()
            .any(|r| r.title_id == data.title_id && r.author_id == data.author_id)
        {
            return Err(ReviewRepositoryError::DuplicateReview);
        }
        state.clock += 1;
        let review = ReviewResult {
            id: Uuid::new_v4(),
            title_id: data.title_id,
            author_id: data.author_id,
            author: format!("user-{}", data.author_id),
            text: data.text,
            score: data.score,
            pub_date: Utc::now() + Duration::seconds(state.clock),
        };
        state.reviews.push(review.clone());
        state.refresh_rating(data.title_id);
        Ok(review)
    }

    async fn update_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        data: UpdateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let review = state
            .reviews
            .iter_mut()
            .find(|r| r.id == review_id && r.title_id == title_id)
            .ok_or(ReviewRepositoryError::ReviewNotFound)?;
        if let Some(text) = data.text {
            review.text = text;
        }
        if let Some(score) = data.score {
            review.score = score;
        }
        let updated = review.clone();
        state.refresh_rating(title_id);
        Ok(updated)
    }

    async fn delete_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<(), ReviewRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.reviews.len();
        state
            .reviews
            .retain(|r| !(r.id == review_id && r.title_id == title_id));
        if state.reviews.len() == before {
            return Err(ReviewRepositoryError::ReviewNotFound);
        }
        state.refresh_rating(title_id);
        Ok(())
    }
}

#[async_trait]
impl ReviewQuery for InMemoryReviewLedger {
    async fn find_review(
        &self,
        title_id: Uuid,
        review_id: Uuid,
    ) -> Result<Option<ReviewResult>, ReviewQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .reviews
            .iter()
            .find(|r| r.id == review_id && r.title_id == title_id)
            .cloned())
    }

    async fn list_reviews(
        &self,
        title_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<ReviewResult>, ReviewQueryError> {
        let state = self.state.lock().unwrap();
        if !state.titles.contains_key(&title_id) {
            return Err(ReviewQueryError::TitleNotFound);
        }
        let mut reviews: Vec<ReviewResult> = state
            .reviews
            .iter()
            .filter(|r| r.title_id == title_id)
            .cloned()
            .collect();
        reviews.sort_by_key(|r| (r.pub_date, r.id));
        Ok(paginate(&reviews, page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Catalog
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct StoredTitle {
    id: Uuid,
    name: String,
    year: i32,
    rating: Option<i16>,
    description: String,
    category: Option<String>,
    genres: Vec<String>,
}

#[derive(Default)]
struct CatalogState {
    terms: HashMap<VocabularyKind, Vec<Term>>,
    titles: Vec<StoredTitle>,
}

impl CatalogState {
    fn term(&self, kind: VocabularyKind, slug: &str) -> Option<Term> {
        self.terms
            .get(&kind)
            .and_then(|terms| terms.iter().find(|t| t.slug == slug))
            .cloned()
    }

    fn check_slugs(
        &self,
        category: Option<&String>,
        genres: Option<&Vec<String>>,
    ) -> Result<(), TitleRepositoryError> {
        if let Some(slug) = category {
            if self.term(VocabularyKind::Category, slug).is_none() {
                return Err(TitleRepositoryError::UnknownCategory(slug.clone()));
            }
        }
        for slug in genres.into_iter().flatten() {
            if self.term(VocabularyKind::Genre, slug).is_none() {
                return Err(TitleRepositoryError::UnknownGenre(slug.clone()));
            }
        }
        Ok(())
    }

    fn to_result(&self, title: &StoredTitle) -> TitleResult {
        let mut genre: Vec<Term> = title
            .genres
            .iter()
            .filter_map(|slug| self.term(VocabularyKind::Genre, slug))
            .collect();
        genre.sort_by(|a, b| a.name.cmp(&b.name));
        TitleResult {
            id: title.id,
            name: title.name.clone(),
            year: title.year,
            rating: title.rating,
            description: title.description.clone(),
            genre,
            category: title
                .category
                .as_deref()
                .and_then(|slug| self.term(VocabularyKind::Category, slug)),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Vocabulary and title ports over shared maps, with the same
/// unknown-slug and cascade rules as the Postgres adapters.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    state: Arc<Mutex<CatalogState>>,
}

impl InMemoryCatalog {
    pub fn add_term(&self, kind: VocabularyKind, name: &str, slug: &str) {
        self.state
            .lock()
            .unwrap()
            .terms
            .entry(kind)
            .or_default()
            .push(Term {
                name: name.to_string(),
                slug: slug.to_string(),
            });
    }

    pub fn term_slugs(&self, kind: VocabularyKind) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .terms
            .get(&kind)
            .map(|terms| terms.iter().map(|t| t.slug.clone()).collect())
            .unwrap_or_default()
    }

    pub fn add_title(&self, name: &str, year: i32, category: Option<&str>, genres: &[&str]) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().titles.push(StoredTitle {
            id,
            name: name.to_string(),
            year,
            rating: None,
            description: String::new(),
            category: category.map(str::to_string),
            genres: genres.iter().map(|s| s.to_string()).collect(),
        });
        id
    }

    pub fn has_title(&self, title_id: Uuid) -> bool {
        self.state
            .lock()
            .unwrap()
            .titles
            .iter()
            .any(|t| t.id == title_id)
    }

    pub fn title(&self, title_id: Uuid) -> Option<TitleResult> {
        let state = self.state.lock().unwrap();
        state
            .titles
            .iter()
            .find(|t| t.id == title_id)
            .map(|t| state.to_result(t))
    }
}

#[async_trait]
impl VocabularyRepository for InMemoryCatalog {
    async fn create_term(
        &self,
        kind: VocabularyKind,
        term: Term,
    ) -> Result<Term, VocabularyRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.term(kind, &term.slug).is_some() {
            return Err(VocabularyRepositoryError::SlugTaken);
        }
        state.terms.entry(kind).or_default().push(term.clone());
        Ok(term)
    }

    async fn delete_term(
        &self,
        kind: VocabularyKind,
        slug: &str,
    ) -> Result<(), VocabularyRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let terms = state.terms.entry(kind).or_default();
        let before = terms.len();
        terms.retain(|t| t.slug != slug);
        if terms.len() == before {
            return Err(VocabularyRepositoryError::TermNotFound);
        }
        for title in state.titles.iter_mut() {
            match kind {
                VocabularyKind::Category => {
                    if title.category.as_deref() == Some(slug) {
                        title.category = None;
                    }
                }
                VocabularyKind::Genre => title.genres.retain(|g| g != slug),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl VocabularyQuery for InMemoryCatalog {
    async fn list_terms(
        &self,
        kind: VocabularyKind,
        name: Option<String>,
        page: PageRequest,
    ) -> Result<PageResult<Term>, VocabularyQueryError> {
        let state = self.state.lock().unwrap();
        let mut terms: Vec<Term> = state
            .terms
            .get(&kind)
            .map(|terms| {
                terms
                    .iter()
                    .filter(|t| name.as_deref().map_or(true, |n| t.name == n))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        terms.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(paginate(&terms, page))
    }
}

#[async_trait]
impl TitleRepository for InMemoryCatalog {
    async fn create_title(&self, data: TitleData) -> Result<TitleResult, TitleRepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.check_slugs(data.category.as_ref(), Some(&data.genres))?;
        let title = StoredTitle {
            id: Uuid::new_v4(),
            name: data.name,
            year: data.year,
            rating: None,
            description: data.description,
            category: data.category,
            genres: data.genres,
        };
        state.titles.push(title.clone());
        Ok(state.to_result(&title))
    }

    async fn replace_title(
        &self,
        title_id: Uuid,
        data: TitleData,
    ) -> Result<TitleResult, TitleRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.titles.iter().any(|t| t.id == title_id) {
            return Err(TitleRepositoryError::TitleNotFound);
        }
        state.check_slugs(data.category.as_ref(), Some(&data.genres))?;
        let title = state
            .titles
            .iter_mut()
            .find(|t| t.id == title_id)
            .ok_or(TitleRepositoryError::TitleNotFound)?;
        title.name = data.name;
        title.year = data.year;
        title.description = data.description;
        title.category = data.category;
        title.genres = data.genres;
        let title = title.clone();
        Ok(state.to_result(&title))
    }

    async fn patch_title(
        &self,
        title_id: Uuid,
        data: PatchTitleData,
    ) -> Result<TitleResult, TitleRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.titles.iter().any(|t| t.id == title_id) {
            return Err(TitleRepositoryError::TitleNotFound);
        }
        let category = match &data.category {
            PatchField::Value(slug) => Some(slug),
            _ => None,
        };
        state.check_slugs(category, data.genres.as_ref())?;
        let title = state
            .titles
            .iter_mut()
            .find(|t| t.id == title_id)
            .ok_or(TitleRepositoryError::TitleNotFound)?;
        if let Some(name) = data.name {
            title.name = name;
        }
        if let Some(year) = data.year {
            title.year = year;
        }
        if let Some(description) = data.description {
            title.description = description;
        }
        if let Some(category) = data.category.into_change() {
            title.category = category;
        }
        if let Some(genres) = data.genres {
            title.genres = genres;
        }
        let title = title.clone();
        Ok(state.to_result(&title))
    }

    async fn delete_title(&self, title_id: Uuid) -> Result<(), TitleRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.titles.len();
        state.titles.retain(|t| t.id != title_id);
        if state.titles.len() == before {
            return Err(TitleRepositoryError::TitleNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl TitleQuery for InMemoryCatalog {
    async fn find_title(&self, title_id: Uuid) -> Result<Option<TitleResult>, TitleQueryError> {
        Ok(self.title(title_id))
    }

    async fn list_titles(
        &self,
        filter: TitleFilter,
        page: PageRequest,
    ) -> Result<PageResult<TitleResult>, TitleQueryError> {
        let state = self.state.lock().unwrap();
        let mut titles: Vec<TitleResult> = state
            .titles
            .iter()
            .filter(|t| {
                filter
                    .genre
                    .as_deref()
                    .map_or(true, |g| t.genres.iter().any(|s| contains_ignore_case(s, g)))
            })
            .filter(|t| {
                filter.category.as_deref().map_or(true, |c| {
                    t.category
                        .as_deref()
                        .is_some_and(|s| contains_ignore_case(s, c))
                })
            })
            .filter(|t| filter.year.map_or(true, |y| t.year == y))
            .filter(|t| {
                filter
                    .name
                    .as_deref()
                    .map_or(true, |n| contains_ignore_case(&t.name, n))
            })
            .map(|t| state.to_result(t))
            .collect();
        titles.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(paginate(&titles, page))
    }
}

//
// ──────────────────────────────────────────────────────────
// Comments
// ──────────────────────────────────────────────────────────
//

#[derive(Default)]
struct BoardState {
    /// review id -> title id
    reviews: HashMap<Uuid, Uuid>,
    comments: Vec<CommentResult>,
    clock: i64,
}

impl BoardState {
    fn review_in_title(&self, title_id: Uuid, review_id: Uuid) -> bool {
        self.reviews.get(&review_id) == Some(&title_id)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryCommentBoard {
    state: Arc<Mutex<BoardState>>,
}

impl InMemoryCommentBoard {
    pub fn add_review(&self, title_id: Uuid) -> Uuid {
        let id = Uuid::new_v4();
        self.state.lock().unwrap().reviews.insert(id, title_id);
        id
    }

    pub fn comment_count(&self, review_id: Uuid) -> usize {
        self.state
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|c| c.review_id == review_id)
            .count()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentBoard {
    async fn create_comment(
        &self,
        data: CreateCommentData,
    ) -> Result<CommentResult, CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.review_in_title(data.title_id, data.review_id) {
            return Err(CommentRepositoryError::ReviewNotFound);
        }
        state.clock += 1;
        let comment = CommentResult {
            id: Uuid::new_v4(),
            review_id: data.review_id,
            author_id: data.author_id,
            author: format!("user-{}", data.author_id),
            text: data.text,
            pub_date: Utc::now() + Duration::seconds(state.clock),
        };
        state.comments.push(comment.clone());
        Ok(comment)
    }

    async fn update_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
        text: String,
    ) -> Result<CommentResult, CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.review_in_title(title_id, review_id) {
            return Err(CommentRepositoryError::ReviewNotFound);
        }
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id && c.review_id == review_id)
            .ok_or(CommentRepositoryError::CommentNotFound)?;
        comment.text = text;
        Ok(comment.clone())
    }

    async fn delete_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<(), CommentRepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.review_in_title(title_id, review_id) {
            return Err(CommentRepositoryError::ReviewNotFound);
        }
        let before = state.comments.len();
        state
            .comments
            .retain(|c| !(c.id == comment_id && c.review_id == review_id));
        if state.comments.len() == before {
            return Err(CommentRepositoryError::CommentNotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentQuery for InMemoryCommentBoard {
    async fn find_comment(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        comment_id: Uuid,
    ) -> Result<Option<CommentResult>, CommentQueryError> {
        let state = self.state.lock().unwrap();
        if !state.review_in_title(title_id, review_id) {
            return Ok(None);
        }
        Ok(state
            .comments
            .iter()
            .find(|c| c.id == comment_id && c.review_id == review_id)
            .cloned())
    }

    async fn list_comments(
        &self,
        title_id: Uuid,
        review_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<CommentResult>, CommentQueryError> {
        let state = self.state.lock().unwrap();
        if !state.review_in_title(title_id, review_id) {
            return Err(CommentQueryError::ReviewNotFound);
        }
        let mut comments: Vec<CommentResult> = state
            .comments
            .iter()
            .filter(|c| c.review_id == review_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.pub_date, c.id));
        Ok(paginate(&comments, page))
    }
}
