//! Defines the models that represent database objects belonging to Animaqu.

use crate::enums::*;
use crate::schema::*;
use chrono::{DateTime, Utc};
use diesel::Queryable;
use serde::Serialize;
use uuid::Uuid;

/// A reader's public profile. `account_id` is the identifier issued by the identity provider.
#[derive(Queryable, Identifiable, Serialize, Debug, Clone, PartialEq)]
#[primary_key(account_id)]
#[table_name = "user_profiles"]
pub struct UserProfile {
    pub account_id: String,
    pub nickname: String,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub banner_url: Option<String>,
    pub bio: Option<String>,
    pub whatsapp: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub other_link: Option<String>,

    /// How many chapters the reader has opened, used for the leaderboard.
    pub chapters_read: i64,
    pub verification: Option<Verification>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Model for creating a [UserProfile] or replacing its editable fields. Absent optional fields
/// clear the stored value.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[primary_key(account_id)]
#[table_name = "user_profiles"]
#[changeset_options(treat_none_as_null = "true")]
pub struct ProfileChanges {
    pub account_id: String,
    pub nickname: String,
    pub email: Option<String>,
    pub photo_url: Option<String>,
    pub banner_url: Option<String>,
    pub bio: Option<String>,
    pub whatsapp: Option<String>,
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    pub other_link: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// One row of the leaderboard, projected from [UserProfile].
#[derive(Queryable, Serialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub account_id: String,
    pub nickname: String,
    pub photo_url: Option<String>,
    pub chapters_read: i64,
}

/// The name, picture and badge copied onto comments and chat messages when they're posted.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorSnapshot {
    pub account_id: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub verification: Option<Verification>,
}

impl AuthorSnapshot {
    pub const ANONYMOUS: &'static str = "Anonymous";

    /// Build the snapshot from the author's profile, if they have one. A blank nickname counts as
    /// no nickname.
    pub fn new(account_id: &str, profile: Option<&UserProfile>) -> Self {
        let display_name = profile
            .map(|p| p.nickname.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or(Self::ANONYMOUS)
            .to_string();
        AuthorSnapshot {
            account_id: String::from(account_id),
            display_name,
            photo_url: profile.and_then(|p| p.photo_url.clone()),
            verification: profile.and_then(|p| p.verification),
        }
    }
}

/// A comment left under a comic.
#[derive(Queryable, Identifiable, Serialize, Debug, Clone, PartialEq)]
#[table_name = "comments"]
pub struct Comment {
    pub id: Uuid,
    pub comic_slug: String,
    pub account_id: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub verification: Option<Verification>,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "comments"]
pub struct NewComment {
    id: Uuid,
    pub comic_slug: String,
    pub account_id: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub verification: Option<Verification>,
    pub comment_text: String,
    pub created_at: DateTime<Utc>,
}

impl NewComment {
    pub fn new(comic_slug: &str, author: AuthorSnapshot, text: &str) -> NewComment {
        NewComment {
            id: Uuid::new_v4(),
            comic_slug: String::from(comic_slug),
            account_id: author.account_id,
            display_name: author.display_name,
            photo_url: author.photo_url,
            verification: author.verification,
            comment_text: String::from(text),
            created_at: Utc::now(),
        }
    }
}

impl From<NewComment> for Comment {
    fn from(comment: NewComment) -> Self {
        Comment {
            id: comment.id,
            comic_slug: comment.comic_slug,
            account_id: comment.account_id,
            display_name: comment.display_name,
            photo_url: comment.photo_url,
            verification: comment.verification,
            comment_text: comment.comment_text,
            created_at: comment.created_at,
        }
    }
}

/// A message in the shared chat room.
#[derive(Queryable, Identifiable, Serialize, Debug, Clone, PartialEq)]
#[table_name = "chat_messages"]
pub struct ChatMessage {
    pub id: Uuid,
    pub account_id: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub verification: Option<Verification>,
    pub message_text: String,

    /// Account IDs of the users mentioned with `@nickname`.
    pub mentions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "chat_messages"]
pub struct NewChatMessage {
    id: Uuid,
    pub account_id: String,
    pub display_name: String,
    pub photo_url: Option<String>,
    pub verification: Option<Verification>,
    pub message_text: String,
    pub mentions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl NewChatMessage {
    pub fn new(author: AuthorSnapshot, text: &str, mentions: Vec<String>) -> NewChatMessage {
        NewChatMessage {
            id: Uuid::new_v4(),
            account_id: author.account_id,
            display_name: author.display_name,
            photo_url: author.photo_url,
            verification: author.verification,
            message_text: String::from(text),
            mentions,
            created_at: Utc::now(),
        }
    }
}

impl From<NewChatMessage> for ChatMessage {
    fn from(message: NewChatMessage) -> Self {
        ChatMessage {
            id: message.id,
            account_id: message.account_id,
            display_name: message.display_name,
            photo_url: message.photo_url,
            verification: message.verification,
            message_text: message.message_text,
            mentions: message.mentions,
            created_at: message.created_at,
        }
    }
}

/// A comic a reader bookmarked.
#[derive(Queryable, Insertable, Serialize, Debug, Clone, PartialEq)]
#[table_name = "favorites"]
pub struct Favorite {
    pub account_id: String,
    pub comic_slug: String,
    pub title: String,
    pub image_url: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(account_id: &str, comic_slug: &str, title: &str, image_url: Option<String>) -> Self {
        Favorite {
            account_id: String::from(account_id),
            comic_slug: String::from(comic_slug),
            title: String::from(title),
            image_url,
            added_at: Utc::now(),
        }
    }
}

/// The last chapter a reader opened for one comic.
#[derive(Queryable, Insertable, Serialize, Debug, Clone, PartialEq)]
#[table_name = "reading_history"]
pub struct ReadingHistoryEntry {
    pub account_id: String,
    pub comic_slug: String,
    pub comic_title: String,
    pub comic_image: Option<String>,
    pub last_chapter_slug: String,
    pub last_chapter_title: String,
    pub read_at: DateTime<Utc>,
}

/// A quote shown on the welcome slider. It serializes with the same field names as the form that
/// creates it.
#[derive(Queryable, Identifiable, Serialize, Debug, Clone, PartialEq)]
#[table_name = "quotes"]
pub struct Quote {
    pub id: Uuid,
    #[serde(rename = "text")]
    pub quote_text: String,
    pub author: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
    #[serde(rename = "border")]
    pub border_url: Option<String>,
    pub font_style: FontStyle,
    pub created_at: DateTime<Utc>,
}

/// The editable fields of a [Quote]. An absent border clears the stored one.
#[derive(AsChangeset, Debug, Clone, PartialEq)]
#[table_name = "quotes"]
#[changeset_options(treat_none_as_null = "true")]
pub struct QuoteChanges {
    pub quote_text: String,
    pub author: String,
    pub avatar_url: String,
    pub border_url: Option<String>,
    pub font_style: FontStyle,
}

#[derive(Insertable)]
#[table_name = "quotes"]
pub struct NewQuote {
    id: Uuid,
    pub quote_text: String,
    pub author: String,
    pub avatar_url: String,
    pub border_url: Option<String>,
    pub font_style: FontStyle,
    pub created_at: DateTime<Utc>,
}

impl NewQuote {
    pub fn new(fields: QuoteChanges) -> NewQuote {
        NewQuote {
            id: Uuid::new_v4(),
            quote_text: fields.quote_text,
            author: fields.author,
            avatar_url: fields.avatar_url,
            border_url: fields.border_url,
            font_style: fields.font_style,
            created_at: Utc::now(),
        }
    }
}

impl From<NewQuote> for Quote {
    fn from(quote: NewQuote) -> Self {
        Quote {
            id: quote.id,
            quote_text: quote.quote_text,
            author: quote.author,
            avatar_url: quote.avatar_url,
            border_url: quote.border_url,
            font_style: quote.font_style,
            created_at: quote.created_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn profile(nickname: &str) -> UserProfile {
        let now = Utc::now();
        UserProfile {
            account_id: String::from("reader-1"),
            nickname: String::from(nickname),
            email: None,
            photo_url: Some(String::from("https://img.example/me.png")),
            banner_url: None,
            bio: None,
            whatsapp: None,
            github: None,
            instagram: None,
            tiktok: None,
            other_link: None,
            chapters_read: 3,
            verification: Some(Verification::Verified),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn author_snapshot_copies_profile_fields() {
        // Arrange
        let p = profile("ana");

        // Act
        let actual = AuthorSnapshot::new("reader-1", Some(&p));

        // Assert
        assert_eq!("ana", actual.display_name);
        assert_eq!(Some(String::from("https://img.example/me.png")), actual.photo_url);
        assert_eq!(Some(Verification::Verified), actual.verification);
    }

    #[test]
    fn author_snapshot_is_anonymous_given_no_profile_or_blank_nickname() {
        // Arrange
        let blank = profile("   ");

        // Act
        let without_profile = AuthorSnapshot::new("reader-1", None);
        let with_blank = AuthorSnapshot::new("reader-1", Some(&blank));

        // Assert
        assert_eq!(AuthorSnapshot::ANONYMOUS, without_profile.display_name);
        assert_eq!(None, without_profile.verification);
        assert_eq!(AuthorSnapshot::ANONYMOUS, with_blank.display_name);
    }

    #[test]
    fn new_comment_converts_into_comment() {
        // Arrange
        let author = AuthorSnapshot::new("reader-1", None);

        // Act
        let new_comment = NewComment::new("solo-leveling", author, "Mantap");
        let id = new_comment.id;
        let actual = Comment::from(new_comment);

        // Assert
        assert_eq!(id, actual.id);
        assert_eq!("solo-leveling", actual.comic_slug);
        assert_eq!("Mantap", actual.comment_text);
    }

    #[test]
    fn quote_serializes_text_under_its_display_name() {
        // Arrange
        let new_quote = NewQuote::new(QuoteChanges {
            quote_text: String::from("Jangan menyerah"),
            author: String::from("Naruto"),
            avatar_url: String::from("https://img.example/naruto.png"),
            border_url: None,
            font_style: FontStyle::default(),
        });

        // Act
        let actual = serde_json::to_value(Quote::from(new_quote)).unwrap();

        // Assert
        assert_eq!("Jangan menyerah", actual["text"]);
        assert_eq!("italic", actual["font_style"]);
        assert!(actual.get("quote_text").is_none());
    }
}
