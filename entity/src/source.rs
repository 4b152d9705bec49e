use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Provenance of a recorded answer.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    EnumIter,
    Deserialize,
    Serialize,
    DeriveActiveEnum,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Source {
    /// Answer was copied from a stored FAQ entry
    #[sea_orm(string_value = "dataset")]
    Dataset,
    /// Answer was generated by the language model
    #[sea_orm(string_value = "llm")]
    Llm,
}

impl std::fmt::Display for Source {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Dataset => write!(fmt, "dataset"),
            Source::Llm => write!(fmt, "llm"),
        }
    }
}
