use crate::enums::Verification;
use crate::models::{LeaderboardEntry, ProfileChanges, UserProfile};
use crate::schema::user_profiles::dsl::*;
use crate::DbPoolConnection;
use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;
use diesel::{insert_into, update};

/// Most profiles offered when completing an `@mention`.
pub const MENTION_SUGGESTION_LIMIT: i64 = 5;

pub trait UserProfileActions {
    /// Retrieve a [UserProfile] by its account ID if it exists.
    fn try_get(
        connection: &DbPoolConnection,
        account: &str,
    ) -> Result<Option<UserProfile>, diesel::result::Error>;

    /// Create the [UserProfile] or replace its editable fields, returning the stored row.
    ///
    /// # Remarks
    ///
    /// This function takes ownership of the [ProfileChanges].
    fn upsert(
        connection: &DbPoolConnection,
        changes: ProfileChanges,
    ) -> Result<UserProfile, diesel::result::Error>;

    /// Retrieve every [UserProfile], ordered by nickname.
    fn get_all(connection: &DbPoolConnection) -> Result<Vec<UserProfile>, diesel::result::Error>;

    /// Change the verification badge of a user. Returns [None] if the user doesn't exist.
    fn set_verification(
        connection: &DbPoolConnection,
        account: &str,
        badge: Option<Verification>,
    ) -> Result<Option<UserProfile>, diesel::result::Error>;

    /// Add one to a reader's chapter count, creating a bare profile if they don't have one yet.
    fn increment_chapters_read(
        connection: &DbPoolConnection,
        account: &str,
    ) -> Result<i64, diesel::result::Error>;

    /// Find the profiles whose nickname is exactly one of `names`.
    fn get_by_nicknames(
        connection: &DbPoolConnection,
        names: &[String],
    ) -> Result<Vec<UserProfile>, diesel::result::Error>;

    /// Suggest profiles whose nickname starts with `prefix`, leaving out `excluded_account`.
    fn search_by_nickname_prefix(
        connection: &DbPoolConnection,
        prefix: &str,
        excluded_account: &str,
    ) -> Result<Vec<UserProfile>, diesel::result::Error>;

    /// The readers with the most chapters read, best first. Readers with no chapters are left out.
    fn leaderboard(
        connection: &DbPoolConnection,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, diesel::result::Error>;
}

impl UserProfileActions for UserProfile {
    fn try_get(connection: &DbPoolConnection, account: &str) -> Result<Option<UserProfile>, Error> {
        user_profiles.find(account).first(connection).optional()
    }

    fn upsert(connection: &DbPoolConnection, changes: ProfileChanges) -> Result<UserProfile, Error> {
        insert_into(user_profiles)
            .values(&changes)
            .on_conflict(account_id)
            .do_update()
            .set(&changes)
            .get_result(connection)
    }

    fn get_all(connection: &DbPoolConnection) -> Result<Vec<UserProfile>, Error> {
        user_profiles.order(nickname.asc()).load(connection)
    }

    fn set_verification(
        connection: &DbPoolConnection,
        account: &str,
        badge: Option<Verification>,
    ) -> Result<Option<UserProfile>, Error> {
        update(user_profiles.find(account))
            .set((verification.eq(badge), updated_at.eq(Utc::now())))
            .get_result(connection)
            .optional()
    }

    fn increment_chapters_read(connection: &DbPoolConnection, account: &str) -> Result<i64, Error> {
        let now = Utc::now();
        insert_into(user_profiles)
            .values((
                account_id.eq(account),
                chapters_read.eq(1i64),
                created_at.eq(now),
                updated_at.eq(now),
            ))
            .on_conflict(account_id)
            .do_update()
            .set((chapters_read.eq(chapters_read + 1i64), updated_at.eq(now)))
            .returning(chapters_read)
            .get_result(connection)
    }

    fn get_by_nicknames(
        connection: &DbPoolConnection,
        names: &[String],
    ) -> Result<Vec<UserProfile>, Error> {
        if names.is_empty() {
            return Ok(vec![]);
        }
        user_profiles.filter(nickname.eq_any(names)).load(connection)
    }

    fn search_by_nickname_prefix(
        connection: &DbPoolConnection,
        prefix: &str,
        excluded_account: &str,
    ) -> Result<Vec<UserProfile>, Error> {
        user_profiles
            .filter(nickname.like(format!("{}%", escape_like(prefix))))
            .filter(account_id.ne(excluded_account))
            .order(nickname.asc())
            .limit(MENTION_SUGGESTION_LIMIT)
            .load(connection)
    }

    fn leaderboard(connection: &DbPoolConnection, limit: i64) -> Result<Vec<LeaderboardEntry>, Error> {
        user_profiles
            .select((account_id, nickname, photo_url, chapters_read))
            .filter(chapters_read.gt(0i64))
            .order((chapters_read.desc(), nickname.asc()))
            .limit(limit)
            .load(connection)
    }
}

/// Escape the LIKE wildcards (and the escape character itself) in user input.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
