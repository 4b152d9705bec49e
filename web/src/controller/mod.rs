pub(crate) mod conversation_controller;
pub(crate) mod health_check_controller;
pub(crate) mod question_controller;
pub(crate) mod summary_controller;
pub(crate) mod transcription_controller;
