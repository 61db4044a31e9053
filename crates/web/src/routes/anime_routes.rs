use crate::animaqu_page_error::AnimaquPageError;
use crate::facades::anime_facade::{
    anime_detail_page, anime_episodes_page, anime_index_page, batch_download_page, complete_page,
    episode_player_page, ongoing_page,
};
use actix_web::{web, HttpResponse};
use animaqu_content_api::AnimeApi;
use serde::Deserialize;
use tracing::error;
use tracing_actix_web::RootSpan;

const ANIME_NOT_FOUND_TITLE: &str = "Anime Tidak Ditemukan - Animaqu";
const ANIME_NOT_FOUND: &str = "Anime yang Anda cari tidak ditemukan";

#[derive(Deserialize)]
pub struct PageQuery {
    page: Option<u32>,
}

impl PageQuery {
    fn page(&self) -> u32 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }
}

fn anime_not_found() -> AnimaquPageError {
    AnimaquPageError::not_found(ANIME_NOT_FOUND_TITLE, ANIME_NOT_FOUND)
}

pub async fn index<A: AnimeApi + 'static>(
    api: web::Data<A>,
) -> Result<HttpResponse, AnimaquPageError> {
    match anime_index_page(api.get_ref()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => {
            error!("Anime page error: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat memuat halaman anime"))
        }
    }
}

pub async fn ongoing<A: AnimeApi + 'static>(
    api: web::Data<A>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AnimaquPageError> {
    match ongoing_page(api.get_ref(), query.page()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => {
            error!("Ongoing anime page error: {:?}", e);
            Err(AnimaquPageError::internal(
                "Tidak dapat memuat halaman anime ongoing",
            ))
        }
    }
}

pub async fn complete<A: AnimeApi + 'static>(
    api: web::Data<A>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AnimaquPageError> {
    match complete_page(api.get_ref(), query.page()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(page)),
        Err(e) => {
            error!("Completed anime page error: {:?}", e);
            Err(AnimaquPageError::internal(
                "Tidak dapat memuat halaman anime completed",
            ))
        }
    }
}

pub async fn detail<A: AnimeApi + 'static>(
    root_span: RootSpan,
    api: web::Data<A>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    root_span.record("anime_slug", &slug.as_str());
    match anime_detail_page(api.get_ref(), &slug).await {
        Ok(Some(page)) => Ok(HttpResponse::Ok().json(page)),
        Ok(None) => Err(anime_not_found()),
        Err(e) => {
            error!("Anime detail page error: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat memuat detail anime"))
        }
    }
}

pub async fn episodes<A: AnimeApi + 'static>(
    root_span: RootSpan,
    api: web::Data<A>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    root_span.record("anime_slug", &slug.as_str());
    match anime_episodes_page(api.get_ref(), &slug).await {
        Ok(Some(page)) => Ok(HttpResponse::Ok().json(page)),
        Ok(None) => Err(anime_not_found()),
        Err(e) => {
            error!("Anime episodes page error: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat memuat daftar episode"))
        }
    }
}

pub async fn episode_player<A: AnimeApi + 'static>(
    root_span: RootSpan,
    api: web::Data<A>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AnimaquPageError> {
    let (slug, episode) = path.into_inner();
    root_span.record("anime_slug", &slug.as_str());
    match episode_player_page(api.get_ref(), &slug, &episode).await {
        Ok(Some(page)) => Ok(HttpResponse::Ok().json(page)),
        Ok(None) => Err(AnimaquPageError::not_found(
            "Episode Tidak Ditemukan - Animaqu",
            "Episode yang Anda cari tidak ditemukan",
        )),
        Err(e) => {
            error!("Episode player page error: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat memuat episode"))
        }
    }
}

pub async fn batch<A: AnimeApi + 'static>(
    root_span: RootSpan,
    api: web::Data<A>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    root_span.record("anime_slug", &slug.as_str());
    match batch_download_page(api.get_ref(), &slug).await {
        Ok(Some(page)) => Ok(HttpResponse::Ok().json(page)),
        Ok(None) => Err(anime_not_found()),
        Err(e) => {
            error!("Batch download page error: {:?}", e);
            Err(AnimaquPageError::internal(
                "Tidak dapat memuat halaman batch download",
            ))
        }
    }
}
