use crate::actions::user_profile_actions::UserProfileActions;
use crate::models::{ReadingHistoryEntry, UserProfile};
use crate::schema::reading_history::dsl::*;
use crate::DbPoolConnection;
use diesel::insert_into;
use diesel::pg::upsert::excluded;
use diesel::prelude::*;
use diesel::result::Error;

pub trait ReadingHistoryActions {
    /// Record that a reader opened a chapter: the comic's history row now points at this chapter
    /// and the reader's chapter count goes up by one. Returns the new chapter count.
    fn record_chapter_read(&self, connection: &DbPoolConnection)
        -> Result<i64, diesel::result::Error>;

    /// Retrieve a reader's history, most recently read first.
    fn get_all_by_account(
        connection: &DbPoolConnection,
        account: &str,
    ) -> Result<Vec<ReadingHistoryEntry>, diesel::result::Error>;
}

impl ReadingHistoryActions for ReadingHistoryEntry {
    fn record_chapter_read(&self, connection: &DbPoolConnection) -> Result<i64, Error> {
        connection.transaction::<_, Error, _>(|| {
            insert_into(reading_history)
                .values(self)
                .on_conflict((account_id, comic_slug))
                .do_update()
                .set((
                    comic_title.eq(excluded(comic_title)),
                    comic_image.eq(excluded(comic_image)),
                    last_chapter_slug.eq(excluded(last_chapter_slug)),
                    last_chapter_title.eq(excluded(last_chapter_title)),
                    read_at.eq(excluded(read_at)),
                ))
                .execute(connection)?;
            UserProfile::increment_chapters_read(connection, &self.account_id)
        })
    }

    fn get_all_by_account(
        connection: &DbPoolConnection,
        account: &str,
    ) -> Result<Vec<ReadingHistoryEntry>, Error> {
        reading_history
            .filter(account_id.eq(account))
            .order(read_at.desc())
            .load(connection)
    }
}
