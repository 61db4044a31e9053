use crate::models::{Comment, NewComment};
use crate::schema::comments::dsl::*;
use crate::DbPoolConnection;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::{delete, insert_into};
use uuid::Uuid;

pub trait CommentActions {
    /// Create a new [Comment] in the database and return the result.
    ///
    /// # Remarks
    ///
    /// This function takes ownership of the [NewComment].
    fn create_comment(
        connection: &DbPoolConnection,
        new_comment: NewComment,
    ) -> Result<Comment, diesel::result::Error>;

    /// Retrieve every [Comment] on a comic, newest first.
    fn get_for_comic(
        connection: &DbPoolConnection,
        slug: &str,
    ) -> Result<Vec<Comment>, diesel::result::Error>;

    /// Delete a [Comment] by its ID, returning the deleted [Comment] if there was one.
    fn delete_by_id(
        connection: &DbPoolConnection,
        identifier: &Uuid,
    ) -> Result<Option<Comment>, diesel::result::Error>;
}

impl CommentActions for Comment {
    fn create_comment(connection: &DbPoolConnection, new_comment: NewComment) -> Result<Comment, Error> {
        insert_into(comments).values(&new_comment).execute(connection)?;
        Ok(Comment::from(new_comment))
    }

    fn get_for_comic(connection: &DbPoolConnection, slug: &str) -> Result<Vec<Comment>, Error> {
        comments
            .filter(comic_slug.eq(slug))
            .order(created_at.desc())
            .load(connection)
    }

    fn delete_by_id(connection: &DbPoolConnection, identifier: &Uuid) -> Result<Option<Comment>, Error> {
        delete(comments.filter(id.eq(identifier)))
            .get_result(connection)
            .optional()
    }
}
