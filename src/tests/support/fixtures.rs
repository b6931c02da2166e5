//! SeaORM model builders for `MockDatabase` results.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use sea_orm::Value;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::catalog::adapter::outgoing::sea_orm_entity::{categories, genres, title_genres, titles};
use crate::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::review::adapter::outgoing::sea_orm_entity::reviews;

pub fn fixed_time() -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .unwrap()
        .fixed_offset()
}

/// Row returned by `PaginatorTrait::count`.
pub fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
}

pub fn user_model(id: Uuid, username: &str) -> users::Model {
    let email = if username.contains('@') {
        username.to_string()
    } else {
        format!("{username}@example.com")
    };
    users::Model {
        id,
        username: username.to_string(),
        email,
        first_name: String::new(),
        last_name: String::new(),
        bio: String::new(),
        role: "user".to_string(),
        is_staff: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn category_model(id: Uuid, name: &str, slug: &str) -> categories::Model {
    categories::Model {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn genre_model(id: Uuid, name: &str, slug: &str) -> genres::Model {
    genres::Model {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
    }
}

pub fn title_model(id: Uuid, name: &str, rating: Option<i16>) -> titles::Model {
    titles::Model {
        id,
        name: name.to_string(),
        year: 1999,
        rating,
        description: String::new(),
        category_id: None,
    }
}

pub fn title_genre_model(title_id: Uuid, genre_id: Uuid) -> title_genres::Model {
    title_genres::Model { title_id, genre_id }
}

pub fn review_model(id: Uuid, title_id: Uuid, author_id: Uuid, score: Option<i16>) -> reviews::Model {
    reviews::Model {
        id,
        title_id: Some(title_id),
        author_id,
        text: "Worth watching".to_string(),
        score,
        pub_date: fixed_time(),
    }
}

pub fn comment_model(id: Uuid, review_id: Uuid, author_id: Uuid, text: &str) -> comments::Model {
    comments::Model {
        id,
        review_id: Some(review_id),
        author_id,
        text: text.to_string(),
        pub_date: fixed_time(),
    }
}
