//! Append and read operations for the conversations table.

use super::error::Error;
use entity::conversations::{ActiveModel, Column, Entity, Model};
use entity::source::Source;
use entity::Id;
use log::*;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder};

/// Input for recording a single question/answer exchange
#[derive(Debug, Clone)]
pub struct ConversationInput {
    pub session_id: String,
    pub question: String,
    pub answer: String,
    pub source: Source,
}

/// Appends a conversation turn
pub async fn create(db: &DatabaseConnection, input: ConversationInput) -> Result<Model, Error> {
    debug!(
        "Recording {} conversation turn for session: {}",
        input.source, input.session_id
    );

    let active_model = ActiveModel {
        id: Set(Id::new_v4()),
        session_id: Set(input.session_id),
        question: Set(input.question),
        answer: Set(input.answer),
        source: Set(input.source),
        created_at: Set(chrono::Utc::now().into()),
    };

    Ok(active_model.insert(db).await?)
}

/// Finds every turn recorded for a session, oldest first
pub async fn find_by_session_id(
    db: &DatabaseConnection,
    session_id: &str,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::SessionId.eq(session_id))
        .order_by_asc(Column::CreatedAt)
        .all(db)
        .await?)
}
