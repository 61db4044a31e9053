//! The manhwa reader's content routes. Payloads are passed through from the comics API, apart
//! from the slugs that get reduced to IDs.

use crate::animaqu_page_error::AnimaquPageError;
use actix_web::{web, HttpResponse};
use animaqu_content_api::models::comic::ComicListKind;
use animaqu_content_api::sanitize::extract_slug_id;
use animaqu_content_api::{ComicApi, ContentApiError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::error;

#[derive(Deserialize)]
pub struct PageQuery {
    page: Option<u32>,
}

impl PageQuery {
    fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

fn render<T: Serialize>(
    result: Result<T, ContentApiError>,
    what: &str,
) -> Result<HttpResponse, AnimaquPageError> {
    match result {
        Ok(payload) => Ok(HttpResponse::Ok().json(payload)),
        Err(e) => {
            error!("Comic {} error: {:?}", what, e);
            Err(AnimaquPageError::internal(&format!(
                "Tidak dapat memuat {}",
                what
            )))
        }
    }
}

pub async fn home<C: ComicApi + 'static>(
    api: web::Data<C>,
) -> Result<HttpResponse, AnimaquPageError> {
    render(api.home().await, "halaman utama")
}

pub async fn list<C: ComicApi + 'static>(
    api: web::Data<C>,
    kind: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AnimaquPageError> {
    let kind = match ComicListKind::from_str(&kind) {
        Ok(k) => k,
        Err(_) => {
            return Err(AnimaquPageError::not_found(
                "Daftar Tidak Ditemukan - Animaqu",
                "Daftar komik yang Anda cari tidak ditemukan",
            ))
        }
    };
    render(api.list(kind, query.page()).await, "daftar komik")
}

pub async fn top_weekly<C: ComicApi + 'static>(
    api: web::Data<C>,
) -> Result<HttpResponse, AnimaquPageError> {
    render(api.top_weekly().await, "komik terpopuler minggu ini")
}

pub async fn recommendation<C: ComicApi + 'static>(
    api: web::Data<C>,
) -> Result<HttpResponse, AnimaquPageError> {
    render(api.recommendation().await, "rekomendasi komik")
}

pub async fn detail<C: ComicApi + 'static>(
    api: web::Data<C>,
    id: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    render(api.detail(extract_slug_id(&id)).await, "detail komik")
}

pub async fn chapter<C: ComicApi + 'static>(
    api: web::Data<C>,
    id: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    let result = api.chapter(extract_slug_id(&id)).await.map(|mut chapter| {
        chapter.prev_slug = chapter.prev_slug.map(|s| String::from(extract_slug_id(&s)));
        chapter.next_slug = chapter.next_slug.map(|s| String::from(extract_slug_id(&s)));
        chapter
    });
    render(result, "chapter")
}

pub async fn search<C: ComicApi + 'static>(
    api: web::Data<C>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AnimaquPageError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AnimaquPageError::bad_request(
            "Kata kunci pencarian tidak boleh kosong",
        ));
    }
    render(api.search(q).await, "hasil pencarian")
}

pub async fn az_list<C: ComicApi + 'static>(
    api: web::Data<C>,
    letter: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AnimaquPageError> {
    render(api.az_list(&letter, query.page()).await, "daftar A-Z")
}

pub async fn genres<C: ComicApi + 'static>(
    api: web::Data<C>,
) -> Result<HttpResponse, AnimaquPageError> {
    render(api.genres().await, "daftar genre")
}

pub async fn by_genre<C: ComicApi + 'static>(
    api: web::Data<C>,
    genre: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    render(api.by_genre(&genre).await, "komik per genre")
}
