use crate::models::{ChatMessage, NewChatMessage};
use crate::schema::chat_messages::dsl::*;
use crate::DbPoolConnection;
use diesel::insert_into;
use diesel::prelude::*;
use diesel::result::Error;

pub trait ChatMessageActions {
    /// Create a new [ChatMessage] and return the result.
    ///
    /// # Remarks
    ///
    /// This function takes ownership of the [NewChatMessage].
    fn create_message(
        connection: &DbPoolConnection,
        new_message: NewChatMessage,
    ) -> Result<ChatMessage, diesel::result::Error>;

    /// Retrieve the latest `limit` messages, oldest first.
    fn get_recent(
        connection: &DbPoolConnection,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, diesel::result::Error>;
}

impl ChatMessageActions for ChatMessage {
    fn create_message(
        connection: &DbPoolConnection,
        new_message: NewChatMessage,
    ) -> Result<ChatMessage, Error> {
        insert_into(chat_messages)
            .values(&new_message)
            .execute(connection)?;
        Ok(ChatMessage::from(new_message))
    }

    fn get_recent(connection: &DbPoolConnection, limit: i64) -> Result<Vec<ChatMessage>, Error> {
        let mut messages: Vec<ChatMessage> = chat_messages
            .order(created_at.desc())
            .limit(limit)
            .load(connection)?;
        messages.reverse();
        Ok(messages)
    }
}
