pub mod chat_message_actions;
pub mod comment_actions;
pub mod favorite_actions;
pub mod quote_actions;
pub mod reading_history_actions;
pub mod user_profile_actions;
