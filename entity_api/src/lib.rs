use chrono::Utc;
use log::*;
use sea_orm::DatabaseConnection;

pub use entity::{conversations, faqs, meeting_summaries, source, Id};

pub mod conversation;
pub mod error;
pub mod faq;
pub mod meeting_summary;

/// Starter FAQ entries loaded by the `seed_db` binary.
const SEED_FAQ: &[(&str, &str)] = &[
    (
        "What is this assistant?",
        "I'm an AI assistant that joins your video calls to answer questions, transcribe what you say, and write a summary when the meeting ends.",
    ),
    (
        "How do I get a meeting summary?",
        "Click **End Meeting** and a summary of every question asked during the session is generated and saved for you.",
    ),
    (
        "How do I ask a question by voice?",
        "Press the microphone button, speak your question, then press it again. The recording is transcribed and placed in the chat box.",
    ),
    (
        "Which browsers are supported?",
        "Recent versions of Chrome, Edge, Firefox and Safari are supported. Microphone access must be allowed for voice questions.",
    ),
    (
        "Is my conversation stored?",
        "Each question and answer is stored with your session id so the meeting summary can be generated from it.",
    ),
];

/// Inserts the starter FAQ entries. Existing rows are left untouched, so running this twice
/// produces duplicate entries.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), error::Error> {
    let now = Utc::now();
    info!("Seeding {} FAQ entries", SEED_FAQ.len());

    for (question, answer) in SEED_FAQ {
        faq::create(db, question, answer, now).await?;
    }

    Ok(())
}
