//! Append operation for the meeting_summaries table.

use super::error::Error;
use entity::meeting_summaries::{ActiveModel, Model};
use entity::Id;
use log::*;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection};

/// Input for storing a generated meeting summary
#[derive(Debug, Clone)]
pub struct MeetingSummaryInput {
    pub session_id: String,
    pub summary: String,
    pub total_messages: i32,
    pub duration: String,
    pub key_topics: Vec<String>,
}

/// Stores a meeting summary. No uniqueness is enforced per session, so repeated calls for
/// the same session each add a row.
pub async fn create(db: &DatabaseConnection, input: MeetingSummaryInput) -> Result<Model, Error> {
    debug!(
        "Storing meeting summary for session: {} ({} messages)",
        input.session_id, input.total_messages
    );

    let active_model = ActiveModel {
        id: Set(Id::new_v4()),
        session_id: Set(input.session_id),
        summary: Set(input.summary),
        total_messages: Set(input.total_messages),
        duration: Set(input.duration),
        key_topics: Set(input.key_topics),
        created_at: Set(chrono::Utc::now().into()),
    };

    Ok(active_model.insert(db).await?)
}
