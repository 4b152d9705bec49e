//! SeaORM Entity for the meeting_summaries table.
//! Multiple summaries may exist for the same session.

use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::meeting_summaries::Model)]
#[sea_orm(table_name = "meeting_summaries")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    pub session_id: String,

    /// Generated narrative recap
    #[sea_orm(column_type = "Text")]
    pub summary: String,

    /// Number of conversation turns the summary was built from
    pub total_messages: i32,

    /// Free-form duration label supplied by the caller (e.g. "45 minutes")
    pub duration: String,

    /// Topic labels detected in the session's questions
    pub key_topics: Vec<String>,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
