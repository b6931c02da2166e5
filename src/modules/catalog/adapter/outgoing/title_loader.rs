//! Builds the title read representation from stored rows.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::catalog::application::domain::entities::{Term, TitleResult};

use super::sea_orm_entity::{categories, genres, title_genres, titles};

/// Loads categories and genres for the given titles, preserving their order.
/// Genres of a title are sorted by name.
pub(crate) async fn assemble<C: ConnectionTrait>(
    conn: &C,
    models: Vec<titles::Model>,
) -> Result<Vec<TitleResult>, DbErr> {
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let category_ids: Vec<Uuid> = models
        .iter()
        .filter_map(|m| m.category_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();

    let categories: HashMap<Uuid, Term> = if category_ids.is_empty() {
        HashMap::new()
    } else {
        categories::Entity::find()
            .filter(categories::Column::Id.is_in(category_ids))
            .all(conn)
            .await?
            .into_iter()
            .map(|c| (c.id, Term { name: c.name, slug: c.slug }))
            .collect()
    };

    let links = title_genres::Entity::find()
        .filter(title_genres::Column::TitleId.is_in(models.iter().map(|m| m.id)))
        .all(conn)
        .await?;

    let genres: Vec<genres::Model> = if links.is_empty() {
        Vec::new()
    } else {
        let genre_ids: HashSet<Uuid> = links.iter().map(|l| l.genre_id).collect();
        genres::Entity::find()
            .filter(genres::Column::Id.is_in(genre_ids))
            .order_by_asc(genres::Column::Name)
            .all(conn)
            .await?
    };

    let mut linked: HashMap<Uuid, HashSet<Uuid>> = HashMap::new();
    for link in links {
        linked.entry(link.title_id).or_default().insert(link.genre_id);
    }

    Ok(models
        .into_iter()
        .map(|m| {
            let genre = linked
                .get(&m.id)
                .map(|ids| {
                    genres
                        .iter()
                        .filter(|g| ids.contains(&g.id))
                        .map(|g| Term {
                            name: g.name.clone(),
                            slug: g.slug.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default();

            TitleResult {
                id: m.id,
                category: m.category_id.and_then(|id| categories.get(&id).cloned()),
                name: m.name,
                year: m.year,
                rating: m.rating,
                description: m.description,
                genre,
            }
        })
        .collect())
}
