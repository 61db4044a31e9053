//! Community services. Every database call runs on the blocking thread pool.

use crate::mentions::extract_mentions;
use crate::models::community::{ChapterReadForm, FavoriteForm};
use actix_web::web::block;
use animaqu_db::actions::chat_message_actions::ChatMessageActions;
use animaqu_db::actions::comment_actions::CommentActions;
use animaqu_db::actions::favorite_actions::FavoriteActions;
use animaqu_db::actions::quote_actions::QuoteActions;
use animaqu_db::actions::reading_history_actions::ReadingHistoryActions;
use animaqu_db::actions::user_profile_actions::UserProfileActions;
use animaqu_db::enums::Verification;
use animaqu_db::models::{
    AuthorSnapshot, ChatMessage, Comment, Favorite, LeaderboardEntry, NewChatMessage, NewComment,
    NewQuote, ProfileChanges, Quote, QuoteChanges, ReadingHistoryEntry, UserProfile,
};
use animaqu_db::DbPool;
use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

/// The chat only ever shows this many of the latest messages.
pub const CHAT_HISTORY_LIMIT: i64 = 200;

pub async fn get_profile(pool: &DbPool, account_id: &str) -> Result<Option<UserProfile>> {
    let conn = pool.get()?;
    let account_id = String::from(account_id);
    let profile = block(move || UserProfile::try_get(&conn, &account_id)).await??;
    Ok(profile)
}

pub async fn save_profile(pool: &DbPool, changes: ProfileChanges) -> Result<UserProfile> {
    let conn = pool.get()?;
    let profile = block(move || UserProfile::upsert(&conn, changes)).await??;
    Ok(profile)
}

async fn author_snapshot(pool: &DbPool, account_id: &str) -> Result<AuthorSnapshot> {
    let profile = get_profile(pool, account_id).await?;
    Ok(AuthorSnapshot::new(account_id, profile.as_ref()))
}

pub async fn list_comments(pool: &DbPool, comic_slug: &str) -> Result<Vec<Comment>> {
    let conn = pool.get()?;
    let comic_slug = String::from(comic_slug);
    let comments = block(move || Comment::get_for_comic(&conn, &comic_slug)).await??;
    Ok(comments)
}

/// Post a comment as `account_id`, copying their current name, photo and badge onto it.
pub async fn post_comment(
    pool: &DbPool,
    account_id: &str,
    comic_slug: &str,
    text: &str,
) -> Result<Comment> {
    let author = author_snapshot(pool, account_id).await?;
    let new_comment = NewComment::new(comic_slug, author, text);
    let conn = pool.get()?;
    let comment = block(move || Comment::create_comment(&conn, new_comment)).await??;
    Ok(comment)
}

/// Delete a comment, returning it so its comic's subscribers can be notified. [None] if it
/// doesn't exist.
pub async fn delete_comment(pool: &DbPool, comment_id: Uuid) -> Result<Option<Comment>> {
    let conn = pool.get()?;
    let deleted = block(move || Comment::delete_by_id(&conn, &comment_id)).await??;
    Ok(deleted)
}

pub async fn recent_chat(pool: &DbPool) -> Result<Vec<ChatMessage>> {
    let conn = pool.get()?;
    let messages = block(move || ChatMessage::get_recent(&conn, CHAT_HISTORY_LIMIT)).await??;
    Ok(messages)
}

/// Post a chat message as `account_id`. Mentioned nicknames that belong to a profile are stored
/// as that profile's account ID, in the order they were mentioned.
pub async fn post_chat_message(pool: &DbPool, account_id: &str, text: &str) -> Result<ChatMessage> {
    let author = author_snapshot(pool, account_id).await?;
    let nicknames = extract_mentions(text);
    let conn = pool.get()?;
    let text = String::from(text);
    let message = block(move || {
        let profiles = UserProfile::get_by_nicknames(&conn, &nicknames)?;
        let mentions = nicknames
            .iter()
            .filter_map(|n| profiles.iter().find(|p| &p.nickname == n))
            .map(|p| p.account_id.clone())
            .collect();
        ChatMessage::create_message(&conn, NewChatMessage::new(author, &text, mentions))
    })
    .await??;
    Ok(message)
}

/// Profiles to offer while the viewer types `@prefix`. An empty prefix suggests nobody.
pub async fn suggest_mentions(
    pool: &DbPool,
    viewer_account_id: &str,
    prefix: &str,
) -> Result<Vec<UserProfile>> {
    let prefix = prefix.trim().trim_start_matches('@');
    if prefix.is_empty() {
        return Ok(vec![]);
    }
    let conn = pool.get()?;
    let prefix = String::from(prefix);
    let viewer = String::from(viewer_account_id);
    let profiles =
        block(move || UserProfile::search_by_nickname_prefix(&conn, &prefix, &viewer)).await??;
    Ok(profiles)
}

pub async fn list_favorites(pool: &DbPool, account_id: &str) -> Result<Vec<Favorite>> {
    let conn = pool.get()?;
    let account_id = String::from(account_id);
    let favorites = block(move || Favorite::get_all_by_account(&conn, &account_id)).await??;
    Ok(favorites)
}

pub async fn add_favorite(
    pool: &DbPool,
    account_id: &str,
    comic_slug: &str,
    form: FavoriteForm,
) -> Result<Favorite> {
    let favorite = Favorite::new(account_id, comic_slug, &form.title, form.image_url);
    let conn = pool.get()?;
    let saved = favorite.clone();
    block(move || saved.save(&conn)).await??;
    Ok(favorite)
}

pub async fn remove_favorite(pool: &DbPool, account_id: &str, comic_slug: &str) -> Result<bool> {
    let conn = pool.get()?;
    let account_id = String::from(account_id);
    let comic_slug = String::from(comic_slug);
    let removed = block(move || Favorite::remove(&conn, &account_id, &comic_slug)).await??;
    Ok(removed)
}

pub async fn is_favorite(pool: &DbPool, account_id: &str, comic_slug: &str) -> Result<bool> {
    let conn = pool.get()?;
    let account_id = String::from(account_id);
    let comic_slug = String::from(comic_slug);
    let exists = block(move || Favorite::exists(&conn, &account_id, &comic_slug)).await??;
    Ok(exists)
}

/// Record a chapter read and return the viewer's new chapter count.
pub async fn record_chapter_read(
    pool: &DbPool,
    account_id: &str,
    form: ChapterReadForm,
) -> Result<i64> {
    let entry = ReadingHistoryEntry {
        account_id: String::from(account_id),
        comic_slug: form.comic_slug,
        comic_title: form.comic_title,
        comic_image: form.comic_image,
        last_chapter_slug: form.chapter_slug,
        last_chapter_title: form.chapter_title,
        read_at: Utc::now(),
    };
    let conn = pool.get()?;
    let chapters_read = block(move || entry.record_chapter_read(&conn)).await??;
    Ok(chapters_read)
}

pub async fn reading_history(pool: &DbPool, account_id: &str) -> Result<Vec<ReadingHistoryEntry>> {
    let conn = pool.get()?;
    let account_id = String::from(account_id);
    let history =
        block(move || ReadingHistoryEntry::get_all_by_account(&conn, &account_id)).await??;
    Ok(history)
}

pub async fn leaderboard(pool: &DbPool, limit: i64) -> Result<Vec<LeaderboardEntry>> {
    let conn = pool.get()?;
    let entries = block(move || UserProfile::leaderboard(&conn, limit)).await??;
    Ok(entries)
}

pub async fn list_users(pool: &DbPool) -> Result<Vec<UserProfile>> {
    let conn = pool.get()?;
    let users = block(move || UserProfile::get_all(&conn)).await??;
    Ok(users)
}

/// [None] when there is no profile for `account_id`.
pub async fn set_verification(
    pool: &DbPool,
    account_id: &str,
    verification: Option<Verification>,
) -> Result<Option<UserProfile>> {
    let conn = pool.get()?;
    let account_id = String::from(account_id);
    let profile =
        block(move || UserProfile::set_verification(&conn, &account_id, verification)).await??;
    Ok(profile)
}

pub async fn list_quotes(pool: &DbPool) -> Result<Vec<Quote>> {
    let conn = pool.get()?;
    let quotes = block(move || Quote::get_all(&conn)).await??;
    Ok(quotes)
}

pub async fn add_quote(pool: &DbPool, fields: QuoteChanges) -> Result<Quote> {
    let conn = pool.get()?;
    let quote = block(move || Quote::create_quote(&conn, NewQuote::new(fields))).await??;
    Ok(quote)
}

/// [None] when there is no quote with `quote_id`.
pub async fn update_quote(
    pool: &DbPool,
    quote_id: Uuid,
    changes: QuoteChanges,
) -> Result<Option<Quote>> {
    let conn = pool.get()?;
    let quote = block(move || Quote::update_by_id(&conn, &quote_id, &changes)).await??;
    Ok(quote)
}

pub async fn delete_quote(pool: &DbPool, quote_id: Uuid) -> Result<bool> {
    let conn = pool.get()?;
    let deleted = block(move || Quote::delete_by_id(&conn, &quote_id)).await??;
    Ok(deleted)
}
