use crate::animaqu_page_error::AnimaquPageError;
use crate::extractors::viewer_extractor::AdminViewer;
use crate::facades::community_facade;
use crate::models::community::{QuoteForm, VerificationForm};
use crate::snapshot_hub::{comments_topic, SnapshotHub};
use actix_web::{web, HttpResponse};
use animaqu_db::models::QuoteChanges;
use animaqu_db::DbPool;
use tracing::{error, info};
use uuid::Uuid;

pub async fn list_users(
    _admin: AdminViewer,
    pool: web::Data<DbPool>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::list_users(pool.get_ref()).await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => {
            error!("Failed to list users: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat memuat daftar pengguna"))
        }
    }
}

pub async fn set_verification(
    admin: AdminViewer,
    pool: web::Data<DbPool>,
    account_id: web::Path<String>,
    form: web::Json<VerificationForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    let verification = form.into_inner().verification;
    match community_facade::set_verification(pool.get_ref(), &account_id, verification).await {
        Ok(Some(profile)) => {
            info!(
                "{} ({}) set the verification of \"{}\" to {:?}.",
                admin.account_id,
                admin.role.as_ref(),
                profile.account_id,
                profile.verification
            );
            Ok(HttpResponse::Ok().json(profile))
        }
        Ok(None) => Err(AnimaquPageError::not_found(
            "Pengguna Tidak Ditemukan - Animaqu",
            "Pengguna yang Anda cari tidak ditemukan",
        )),
        Err(e) => {
            error!("Failed to set verification: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat mengubah verifikasi"))
        }
    }
}

pub async fn delete_comment(
    admin: AdminViewer,
    pool: web::Data<DbPool>,
    hub: web::Data<SnapshotHub>,
    comment_id: web::Path<Uuid>,
) -> Result<HttpResponse, AnimaquPageError> {
    match community_facade::delete_comment(pool.get_ref(), comment_id.into_inner()).await {
        Ok(Some(comment)) => {
            info!(
                "{} deleted comment {} on \"{}\".",
                admin.account_id, comment.id, comment.comic_slug
            );
            hub.publish(&comments_topic(&comment.comic_slug));
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(None) => Err(AnimaquPageError::not_found(
            "Komentar Tidak Ditemukan - Animaqu",
            "Komentar yang Anda cari tidak ditemukan",
        )),
        Err(e) => {
            error!("Failed to delete comment: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat menghapus komentar"))
        }
    }
}

const QUOTE_NOT_FOUND_TITLE: &str = "Kutipan Tidak Ditemukan - Animaqu";
const QUOTE_NOT_FOUND: &str = "Kutipan yang Anda cari tidak ditemukan";

fn quote_changes(form: QuoteForm) -> Result<QuoteChanges, AnimaquPageError> {
    form.into_changes().ok_or_else(|| {
        AnimaquPageError::bad_request("Teks, penulis, dan avatar kutipan wajib diisi")
    })
}

pub async fn add_quote(
    admin: AdminViewer,
    pool: web::Data<DbPool>,
    form: web::Json<QuoteForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    let fields = quote_changes(form.into_inner())?;
    match community_facade::add_quote(pool.get_ref(), fields).await {
        Ok(quote) => {
            info!("{} added quote {} by \"{}\".", admin.account_id, quote.id, quote.author);
            Ok(HttpResponse::Created().json(quote))
        }
        Err(e) => {
            error!("Failed to add quote: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat menambahkan kutipan"))
        }
    }
}

pub async fn update_quote(
    admin: AdminViewer,
    pool: web::Data<DbPool>,
    quote_id: web::Path<Uuid>,
    form: web::Json<QuoteForm>,
) -> Result<HttpResponse, AnimaquPageError> {
    let changes = quote_changes(form.into_inner())?;
    match community_facade::update_quote(pool.get_ref(), quote_id.into_inner(), changes).await {
        Ok(Some(quote)) => {
            info!("{} updated quote {}.", admin.account_id, quote.id);
            Ok(HttpResponse::Ok().json(quote))
        }
        Ok(None) => Err(AnimaquPageError::not_found(
            QUOTE_NOT_FOUND_TITLE,
            QUOTE_NOT_FOUND,
        )),
        Err(e) => {
            error!("Failed to update quote: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat mengubah kutipan"))
        }
    }
}

pub async fn delete_quote(
    admin: AdminViewer,
    pool: web::Data<DbPool>,
    quote_id: web::Path<Uuid>,
) -> Result<HttpResponse, AnimaquPageError> {
    let quote_id = quote_id.into_inner();
    match community_facade::delete_quote(pool.get_ref(), quote_id).await {
        Ok(true) => {
            info!("{} deleted quote {}.", admin.account_id, quote_id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Err(AnimaquPageError::not_found(
            QUOTE_NOT_FOUND_TITLE,
            QUOTE_NOT_FOUND,
        )),
        Err(e) => {
            error!("Failed to delete quote: {:?}", e);
            Err(AnimaquPageError::internal("Tidak dapat menghapus kutipan"))
        }
    }
}
