use crate::animaqu_page_error::AnimaquPageError;
use crate::extractors::viewer_extractor::Viewer;
use crate::facades::community_facade;
use crate::models::community::{
    ChapterReadForm, FavoriteForm, FavoriteStatus, LeaderboardQuery, MentionQuery, ProfileForm,
    ReadingProgress, TextForm,
};
use crate::routes::event_stream::event_stream_response;
use crate::snapshot_hub::{comments_topic, snapshots, SnapshotHub, CHAT_TOPIC};
use actix_web::{web, HttpResponse};
use animaqu_db::DbPool;
use tracing::{error, info};

const PROFILE_NOT_FOUND_TITLE: &str = "Profil Tidak Ditemukan - Animaqu";
const PROFILE_NOT_FOUND: &str = "Profil yang Anda cari tidak ditemukan";

/// Log a failed community operation and turn it into a 500 error page.
fn internal(context: &str, e: anyhow::Error) -> AnimaquPageError {
    error!("Failed to {}: {:?}", context, e);
    AnimaquPageError::internal(&format!("Tidak dapat {}", context))
}

fn required_text(form: &TextForm) -> Result<&str, AnimaquPageError> {
    let text = form.text.trim();
    if text.is_empty() {
        return Err(AnimaquPageError::bad_request("Pesan tidak boleh kosong"));
    }
    Ok(text)
}

pub async fn get_own_profile(
    viewer: Viewer,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AnimaquPageError> {
    get_profile_of(pool.get_ref(), &viewer.account_id).await
}

pub async fn get_user_profile(
    pool: web::Data<DbPool>,
    account_id: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    get_profile_of(pool.get_ref(), &account_id).await
}

async fn get_profile_of(pool: &DbPool, account_id: &str) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::get_profile(pool, account_id).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(profile)),
        Ok(None) => Err(AnimaquPageError::not_found(
            PROFILE_NOT_FOUND_TITLE,
            PROFILE_NOT_FOUND,
        )),
        Err(e) => Err(internal("memuat profil", e)),
    }
}

pub async fn put_own_profile(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    form: web::Json<ProfileForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    let changes = match form.into_inner().into_changes(&viewer.account_id) {
        Some(c) => c,
        None => return Err(AnimaquPageError::bad_request("Nickname wajib diisi")),
    };
    match community_facade::save_profile(pool.get_ref(), changes).await {
        Ok(profile) => Ok(HttpResponse::Ok().json(profile)),
        Err(e) => Err(internal("menyimpan profil", e)),
    }
}

pub async fn list_comments(
    pool: web::Data<DbPool>,
    comic_slug: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::list_comments(pool.get_ref(), &comic_slug).await {
        Ok(comments) => Ok(HttpResponse::Ok().json(comments)),
        Err(e) => Err(internal("memuat komentar", e)),
    }
}

pub async fn post_comment(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    hub: web::Data<SnapshotHub>,
    comic_slug: web::Path<String>,
    form: web::Json<TextForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    let text = required_text(&form)?;
    match community_facade::post_comment(pool.get_ref(), &viewer.account_id, &comic_slug, text)
        .await
    {
        Ok(comment) => {
            hub.publish(&comments_topic(&comic_slug));
            Ok(HttpResponse::Created().json(comment))
        }
        Err(e) => Err(internal("mengirim komentar", e)),
    }
}

pub async fn subscribe_comments(
    pool: web::Data<DbPool>,
    hub: web::Data<SnapshotHub>,
    comic_slug: web::Path<String>,
) -> HttpResponse {
    let comic_slug = comic_slug.into_inner();
    let subscription = hub.subscribe(&comments_topic(&comic_slug));
    let pool = pool.into_inner();
    event_stream_response(snapshots(subscription, move || {
        let pool = pool.clone();
        let comic_slug = comic_slug.clone();
        async move { community_facade::list_comments(&pool, &comic_slug).await }
    }))
}

pub async fn list_chat(pool: web::Data<DbPool>) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::recent_chat(pool.get_ref()).await {
        Ok(messages) => Ok(HttpResponse::Ok().json(messages)),
        Err(e) => Err(internal("memuat chat", e)),
    }
}

pub async fn post_chat_message(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    hub: web::Data<SnapshotHub>,
    form: web::Json<TextForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    let text = required_text(&form)?;
    match community_facade::post_chat_message(pool.get_ref(), &viewer.account_id, text).await {
        Ok(message) => {
            hub.publish(CHAT_TOPIC);
            Ok(HttpResponse::Created().json(message))
        }
        Err(e) => Err(internal("mengirim pesan", e)),
    }
}

pub async fn subscribe_chat(pool: web::Data<DbPool>, hub: web::Data<SnapshotHub>) -> HttpResponse {
    let subscription = hub.subscribe(CHAT_TOPIC);
    let pool = pool.into_inner();
    event_stream_response(snapshots(subscription, move || {
        let pool = pool.clone();
        async move { community_facade::recent_chat(&pool).await }
    }))
}

pub async fn suggest_mentions(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    query: web::Query<MentionQuery>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::suggest_mentions(pool.get_ref(), &viewer.account_id, &query.q).await
    {
        Ok(profiles) => Ok(HttpResponse::Ok().json(profiles)),
        Err(e) => Err(internal("mencari pengguna", e)),
    }
}

pub async fn list_favorites(
    viewer: Viewer,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::list_favorites(pool.get_ref(), &viewer.account_id).await {
        Ok(favorites) => Ok(HttpResponse::Ok().json(favorites)),
        Err(e) => Err(internal("memuat favorit", e)),
    }
}

pub async fn check_favorite(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    comic_slug: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::is_favorite(pool.get_ref(), &viewer.account_id, &comic_slug).await {
        Ok(is_favorite) => Ok(HttpResponse::Ok().json(FavoriteStatus { is_favorite })),
        Err(e) => Err(internal("memuat favorit", e)),
    }
}

pub async fn put_favorite(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    comic_slug: web::Path<String>,
    form: web::Json<FavoriteForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::add_favorite(
        pool.get_ref(),
        &viewer.account_id,
        &comic_slug,
        form.into_inner(),
    )
    .await
    {
        Ok(favorite) => Ok(HttpResponse::Ok().json(favorite)),
        Err(e) => Err(internal("menyimpan favorit", e)),
    }
}

pub async fn delete_favorite(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    comic_slug: web::Path<String>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::remove_favorite(pool.get_ref(), &viewer.account_id, &comic_slug).await
    {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Err(internal("menghapus favorit", e)),
    }
}

pub async fn record_chapter_read(
    viewer: Viewer,
    pool: web::Data<DbPool>,
    form: web::Json<ChapterReadForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::record_chapter_read(
        pool.get_ref(),
        &viewer.account_id,
        form.into_inner(),
    )
    .await
    {
        Ok(chapters_read) => {
            info!(chapters_read, "Recorded chapter read.");
            Ok(HttpResponse::Ok().json(ReadingProgress { chapters_read }))
        }
        Err(e) => Err(internal("menyimpan riwayat baca", e)),
    }
}

pub async fn reading_history(
    viewer: Viewer,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::reading_history(pool.get_ref(), &viewer.account_id).await {
        Ok(history) => Ok(HttpResponse::Ok().json(history)),
        Err(e) => Err(internal("memuat riwayat baca", e)),
    }
}

pub async fn leaderboard(
    pool: web::Data<DbPool>,
    query: web::Query<LeaderboardQuery>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::leaderboard(pool.get_ref(), query.limit()).await {
        Ok(entries) => Ok(HttpResponse::Ok().json(entries)),
        Err(e) => Err(internal("memuat leaderboard", e)),
    }
}

pub async fn list_quotes(pool: web::Data<DbPool>) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::list_quotes(pool.get_ref()).await {
        Ok(quotes) => Ok(HttpResponse::Ok().json(quotes)),
        Err(e) => Err(internal("memuat kutipan", e)),
    }
}
