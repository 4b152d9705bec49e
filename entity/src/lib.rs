use uuid::Uuid;

pub mod conversations;
pub mod faqs;
pub mod meeting_summaries;
pub mod source;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
