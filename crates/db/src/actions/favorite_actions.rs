use crate::models::Favorite;
use crate::schema::favorites::dsl::*;
use crate::DbPoolConnection;
use diesel::pg::upsert::excluded;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::{delete, insert_into, select};

pub trait FavoriteActions {
    /// Store a [Favorite], refreshing its title and image if it already exists.
    fn save(&self, connection: &DbPoolConnection) -> Result<(), diesel::result::Error>;

    /// Remove a comic from a reader's favorites. Returns `true` if something was removed.
    fn remove(
        connection: &DbPoolConnection,
        account: &str,
        slug: &str,
    ) -> Result<bool, diesel::result::Error>;

    /// Check whether a reader has a comic in their favorites.
    fn exists(
        connection: &DbPoolConnection,
        account: &str,
        slug: &str,
    ) -> Result<bool, diesel::result::Error>;

    /// Retrieve all of a reader's [Favorite]s, most recently added first.
    fn get_all_by_account(
        connection: &DbPoolConnection,
        account: &str,
    ) -> Result<Vec<Favorite>, diesel::result::Error>;
}

impl FavoriteActions for Favorite {
    fn save(&self, connection: &DbPoolConnection) -> Result<(), Error> {
        insert_into(favorites)
            .values(self)
            .on_conflict((account_id, comic_slug))
            .do_update()
            .set((title.eq(excluded(title)), image_url.eq(excluded(image_url))))
            .execute(connection)?;
        Ok(())
    }

    fn remove(connection: &DbPoolConnection, account: &str, slug: &str) -> Result<bool, Error> {
        let removed = delete(favorites)
            .filter(account_id.eq(account))
            .filter(comic_slug.eq(slug))
            .execute(connection)?;
        Ok(removed > 0)
    }

    fn exists(connection: &DbPoolConnection, account: &str, slug: &str) -> Result<bool, Error> {
        select(diesel::dsl::exists(
            favorites
                .filter(account_id.eq(account))
                .filter(comic_slug.eq(slug)),
        ))
        .get_result(connection)
    }

    fn get_all_by_account(connection: &DbPoolConnection, account: &str) -> Result<Vec<Favorite>, Error> {
        favorites
            .filter(account_id.eq(account))
            .order(added_at.desc())
            .load(connection)
    }
}
