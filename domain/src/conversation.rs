use crate::conversations::Model;
use crate::error::Error;
use entity_api::conversation;
use sea_orm::DatabaseConnection;

/// Every recorded turn for `session_id`, oldest first. Unknown sessions yield an empty list.
pub async fn find_by_session_id(
    db: &DatabaseConnection,
    session_id: &str,
) -> Result<Vec<Model>, Error> {
    Ok(conversation::find_by_session_id(db, session_id).await?)
}
