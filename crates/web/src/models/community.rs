//! Request bodies and small responses of the community routes.

use animaqu_db::enums::{FontStyle, Verification};
use animaqu_db::models::{ProfileChanges, QuoteChanges};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The body of `PUT /community/profile`. Fields that are left out or blank are cleared.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProfileForm {
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub other_link: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProfileForm {
    /// Turn the form into the changes to store for `account_id`. Returns [None] when the nickname
    /// is blank.
    pub fn into_changes(self, account_id: &str) -> Option<ProfileChanges> {
        let nickname = self.nickname.trim();
        if nickname.is_empty() {
            return None;
        }
        Some(ProfileChanges {
            account_id: String::from(account_id),
            nickname: String::from(nickname),
            email: non_blank(self.email),
            photo_url: non_blank(self.photo_url),
            banner_url: non_blank(self.banner_url),
            bio: non_blank(self.bio),
            whatsapp: non_blank(self.whatsapp),
            github: non_blank(self.github),
            instagram: non_blank(self.instagram),
            tiktok: non_blank(self.tiktok),
            other_link: non_blank(self.other_link),
            updated_at: Utc::now(),
        })
    }
}

/// The body of comment and chat posts.
#[derive(Deserialize, Debug, Clone)]
pub struct TextForm {
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FavoriteForm {
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FavoriteStatus {
    pub is_favorite: bool,
}

/// The body of `POST /community/history`: the chapter the viewer just opened.
#[derive(Deserialize, Debug, Clone)]
pub struct ChapterReadForm {
    pub comic_slug: String,
    pub comic_title: String,
    #[serde(default)]
    pub comic_image: Option<String>,
    pub chapter_slug: String,
    pub chapter_title: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReadingProgress {
    pub chapters_read: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MentionQuery {
    #[serde(default)]
    pub q: String,
}

pub const LEADERBOARD_DEFAULT_LIMIT: i64 = 50;
pub const LEADERBOARD_MAX_LIMIT: i64 = 100;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

impl LeaderboardQuery {
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(LEADERBOARD_DEFAULT_LIMIT)
            .clamp(1, LEADERBOARD_MAX_LIMIT)
    }
}

/// The body of `PUT /admin/users/{account_id}/verification`. `null` removes the badge.
#[derive(Deserialize, Debug, Clone)]
pub struct VerificationForm {
    pub verification: Option<Verification>,
}

/// The body of `POST /admin/quotes` and `PUT /admin/quotes/{id}`.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct QuoteForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub font_style: FontStyle,
}

impl QuoteForm {
    /// Returns [None] when the text, author or avatar is blank.
    pub fn into_changes(self) -> Option<QuoteChanges> {
        let text = self.text.trim();
        let author = self.author.trim();
        let avatar = self.avatar.trim();
        if text.is_empty() || author.is_empty() || avatar.is_empty() {
            return None;
        }
        Some(QuoteChanges {
            quote_text: String::from(text),
            author: String::from(author),
            avatar_url: String::from(avatar),
            border_url: non_blank(self.border),
            font_style: self.font_style,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn into_changes_returns_none_given_blank_nickname() {
        // Arrange
        let form = ProfileForm {
            nickname: String::from("  "),
            ..ProfileForm::default()
        };

        // Act
        let actual = form.into_changes("reader-1");

        // Assert
        assert!(actual.is_none());
    }

    #[test]
    fn into_changes_trims_values_and_clears_blank_fields() {
        // Arrange
        let form = ProfileForm {
            nickname: String::from(" ana "),
            bio: Some(String::from("  ")),
            github: Some(String::from(" ana-dev ")),
            ..ProfileForm::default()
        };

        // Act
        let actual = form.into_changes("reader-1").unwrap();

        // Assert
        assert_eq!("reader-1", actual.account_id);
        assert_eq!("ana", actual.nickname);
        assert_eq!(None, actual.bio);
        assert_eq!(Some(String::from("ana-dev")), actual.github);
    }

    #[test]
    fn leaderboard_limit_defaults_and_clamps() {
        assert_eq!(50, LeaderboardQuery { limit: None }.limit());
        assert_eq!(100, LeaderboardQuery { limit: Some(500) }.limit());
        assert_eq!(1, LeaderboardQuery { limit: Some(0) }.limit());
        assert_eq!(10, LeaderboardQuery { limit: Some(10) }.limit());
    }

    #[test]
    fn quote_form_into_changes_returns_none_given_any_blank_required_field() {
        // Arrange
        let complete = QuoteForm {
            text: String::from("Jangan menyerah"),
            author: String::from("Naruto"),
            avatar: String::from("https://img.example/naruto.png"),
            ..QuoteForm::default()
        };
        let blank_text = QuoteForm {
            text: String::from(" "),
            ..complete.clone()
        };
        let blank_author = QuoteForm {
            author: String::new(),
            ..complete.clone()
        };
        let blank_avatar = QuoteForm {
            avatar: String::from("\t"),
            ..complete.clone()
        };

        // Act
        let actual = complete.into_changes();

        // Assert
        assert!(actual.is_some());
        assert!(blank_text.into_changes().is_none());
        assert!(blank_author.into_changes().is_none());
        assert!(blank_avatar.into_changes().is_none());
    }

    #[test]
    fn serde_deserialize_quote_form_defaults_to_italic_without_border() {
        // Act
        let form: QuoteForm = serde_json::from_str(
            r#"{ "text": " Jangan menyerah ", "author": "Naruto", "avatar": "a.png", "border": "" }"#,
        )
        .unwrap();
        let bold: QuoteForm = serde_json::from_str(r#"{ "font_style": "bold" }"#).unwrap();
        let changes = form.into_changes().unwrap();

        // Assert
        assert_eq!("Jangan menyerah", changes.quote_text);
        assert_eq!(None, changes.border_url);
        assert_eq!(FontStyle::Italic, changes.font_style);
        assert_eq!(FontStyle::Bold, bold.font_style);
    }

    #[test]
    fn serde_deserialize_verification_form() {
        // Act
        let verified: VerificationForm =
            serde_json::from_str(r#"{ "verification": "verified" }"#).unwrap();
        let cleared: VerificationForm =
            serde_json::from_str(r#"{ "verification": null }"#).unwrap();

        // Assert
        assert_eq!(Some(Verification::Verified), verified.verification);
        assert_eq!(None, cleared.verification);
    }
}
