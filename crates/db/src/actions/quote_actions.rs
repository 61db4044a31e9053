use crate::models::{NewQuote, Quote, QuoteChanges};
use crate::schema::quotes::dsl::*;
use crate::DbPoolConnection;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::{delete, insert_into, update};
use uuid::Uuid;

pub trait QuoteActions {
    /// Create a new [Quote] in the database and return the result.
    fn create_quote(
        connection: &DbPoolConnection,
        new_quote: NewQuote,
    ) -> Result<Quote, diesel::result::Error>;

    /// Retrieve every [Quote] in the order they were added.
    fn get_all(connection: &DbPoolConnection) -> Result<Vec<Quote>, diesel::result::Error>;

    /// Replace the editable fields of a [Quote]. Returns [None] if there's no such quote.
    fn update_by_id(
        connection: &DbPoolConnection,
        identifier: &Uuid,
        changes: &QuoteChanges,
    ) -> Result<Option<Quote>, diesel::result::Error>;

    /// Delete a [Quote] by its ID. Returns `true` if something was deleted.
    fn delete_by_id(
        connection: &DbPoolConnection,
        identifier: &Uuid,
    ) -> Result<bool, diesel::result::Error>;
}

impl QuoteActions for Quote {
    fn create_quote(connection: &DbPoolConnection, new_quote: NewQuote) -> Result<Quote, Error> {
        insert_into(quotes).values(&new_quote).execute(connection)?;
        Ok(Quote::from(new_quote))
    }

    fn get_all(connection: &DbPoolConnection) -> Result<Vec<Quote>, Error> {
        quotes.order((created_at.asc(), id.asc())).load(connection)
    }

    fn update_by_id(
        connection: &DbPoolConnection,
        identifier: &Uuid,
        changes: &QuoteChanges,
    ) -> Result<Option<Quote>, Error> {
        update(quotes.filter(id.eq(identifier)))
            .set(changes)
            .get_result(connection)
            .optional()
    }

    fn delete_by_id(connection: &DbPoolConnection, identifier: &Uuid) -> Result<bool, Error> {
        let deleted = delete(quotes.filter(id.eq(identifier))).execute(connection)?;
        Ok(deleted > 0)
    }
}
