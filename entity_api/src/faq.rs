//! Lookup and insert operations for the faq table.

use super::error::Error;
use chrono::{DateTime, Utc};
use entity::faqs::{ActiveModel, Column, Entity, Model};
use log::*;
use sea_orm::{
    entity::prelude::*,
    sea_query::{extension::postgres::PgExpr, Expr, LikeExpr},
    ActiveValue::Set,
    DatabaseConnection, QueryOrder,
};

const LIKE_ESCAPE: char = '\\';

/// Finds the first FAQ entry whose stored question contains `needle`, ignoring case
/// (Postgres `ILIKE`, so both sides are folded by the database).
///
/// The incoming question is the needle and the stored question is the haystack, so a hit
/// only happens when the caller's text is a literal substring of a stored question.
/// `%` and `_` in the needle are matched literally.
pub async fn find_first_containing(
    db: &DatabaseConnection,
    needle: &str,
) -> Result<Option<Model>, Error> {
    debug!("Searching FAQ for: {needle}");

    let pattern = format!("%{}%", escape_like(needle));

    Ok(Entity::find()
        .filter(Expr::col(Column::Question).ilike(LikeExpr::new(pattern).escape(LIKE_ESCAPE)))
        .order_by_asc(Column::CreatedAt)
        .one(db)
        .await?)
}

/// Creates a new FAQ entry
pub async fn create(
    db: &DatabaseConnection,
    question: &str,
    answer: &str,
    created_at: DateTime<Utc>,
) -> Result<Model, Error> {
    debug!("Creating FAQ entry: {question}");

    let active_model = ActiveModel {
        id: Set(entity::Id::new_v4()),
        question: Set(question.to_owned()),
        answer: Set(answer.to_owned()),
        created_at: Set(created_at.into()),
    };

    Ok(active_model.insert(db).await?)
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
