//! Models for the comics content API behind the manhwa reader.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// The listings the reader offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ComicListKind {
    New,
    Popular,
    Ongoing,
    Manga,
    Manhua,
    Comic,
}

impl ComicListKind {
    /// The request path for one page of this listing.
    pub fn path(&self, page: u32) -> String {
        match self {
            ComicListKind::Popular => format!("/popular?page={}", page),
            ComicListKind::Ongoing => format!("/ongoing?page={}", page),
            ComicListKind::New | ComicListKind::Manga => Self::filtered("manga", page),
            ComicListKind::Manhua => Self::filtered("manhua", page),
            ComicListKind::Comic => Self::filtered("comic", page),
        }
    }

    fn filtered(comic_type: &str, page: u32) -> String {
        format!(
            "/list?type={}&status=ongoing&order=latest&page={}",
            comic_type, page
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComicPagination {
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub next_page: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterLink {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub time_ago: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaListItem {
    pub title: String,
    pub slug: String,
    #[serde(default, alias = "image")]
    pub image_src: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub latest_chapter: Option<String>,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ChapterLink>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomePageResponse {
    #[serde(default)]
    pub trending: Vec<ManhwaListItem>,
    #[serde(default)]
    pub latest_updates: Vec<ManhwaListItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaListResponse {
    #[serde(default)]
    pub pagination: Option<ComicPagination>,
    #[serde(default)]
    pub results: Vec<ManhwaListItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaTopItem {
    pub rank: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopWeeklyResponse {
    #[serde(default)]
    pub recommendations: Vec<ManhwaTopItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenreLink {
    pub name: String,
    pub slug: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailChapter {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaDetail {
    pub title: String,
    #[serde(default)]
    pub alternative: Option<String>,
    #[serde(default)]
    pub image_src: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub comic_type: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub updated_on: Option<String>,
    #[serde(default)]
    pub genres: Vec<GenreLink>,
    #[serde(default)]
    pub chapters: Vec<DetailChapter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChapterData {
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub prev_slug: Option<String>,
    #[serde(default)]
    pub next_slug: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesItem {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub latest_chapter: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub series_list: Vec<SeriesItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Genre {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GenreListResponse {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenreSeriesResponse {
    #[serde(default)]
    pub series_list: Vec<SeriesItem>,
    #[serde(default)]
    pub next_page: Option<String>,
}
