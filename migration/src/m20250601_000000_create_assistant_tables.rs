use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reference data consulted before falling back to the language model
        let create_faq_sql = r#"
            CREATE TABLE IF NOT EXISTS faq (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_faq_sql)
            .await?;

        let create_conversations_sql = r#"
            CREATE TABLE IF NOT EXISTS conversations (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                session_id TEXT NOT NULL,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                source TEXT NOT NULL CHECK (source IN ('dataset', 'llm')),
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_conversations_sql)
            .await?;

        // Summaries read a session's turns in creation order
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE INDEX IF NOT EXISTS conversations_session_id_created_at_idx
                    ON conversations (session_id, created_at)",
            )
            .await?;

        // No unique constraint on session_id: a session may be summarized more than once
        let create_summaries_sql = r#"
            CREATE TABLE IF NOT EXISTS meeting_summaries (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                session_id TEXT NOT NULL,
                summary TEXT NOT NULL,
                total_messages INTEGER NOT NULL,
                duration TEXT NOT NULL,
                key_topics TEXT[] NOT NULL DEFAULT '{}',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        manager
            .get_connection()
            .execute_unprepared(create_summaries_sql)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS meeting_summaries")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS conversations_session_id_created_at_idx")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS conversations")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP TABLE IF EXISTS faq")
            .await?;

        Ok(())
    }
}
