//! The HTTP surface of Animaqu: anime pages, the manhwa reader, the community layer and its
//! administration.

use actix_web::web;
use animaqu_content_api::{AnimeApi, ComicApi};
use routes::{admin_routes, anime_routes, comic_routes, community_routes};
use tracing::debug;

mod animaqu_page_error;
mod animaqu_root_span;
pub mod extractors;
mod facades;
pub mod mentions;
pub mod models;
mod routes;
pub mod snapshot_hub;

pub use animaqu_page_error::{AnimaquPageError, ErrorDetail};
pub use animaqu_root_span::AnimaquRootSpan;
pub use extractors::viewer_extractor::ACCOUNT_HEADER;
pub use snapshot_hub::SnapshotHub;

const MAX_SIZE: usize = 262_144; // Limit max payload size to 256k.

/// JSON body handling for every route: bodies over 256k or that fail to parse are answered with the
/// error page.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_SIZE)
        .error_handler(|err, _req| {
            debug!("Rejected request body: {:?}", err);
            AnimaquPageError::bad_request("Data yang dikirim tidak valid").into()
        })
}

/// Configure the anime page endpoints.
pub fn anime_config<A: AnimeApi + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/anime")
            .route("", web::get().to(anime_routes::index::<A>))
            .route("/ongoing", web::get().to(anime_routes::ongoing::<A>))
            .route("/complete", web::get().to(anime_routes::complete::<A>))
            .route("/{slug}", web::get().to(anime_routes::detail::<A>))
            .route("/{slug}/episodes", web::get().to(anime_routes::episodes::<A>))
            .route(
                "/{slug}/episode/{episode}",
                web::get().to(anime_routes::episode_player::<A>),
            )
            .route("/{slug}/batch", web::get().to(anime_routes::batch::<A>)),
    );
}

/// Configure the manhwa reader endpoints. The detail route matches any single segment, so it
/// goes last.
pub fn comic_config<C: ComicApi + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/comic")
            .route("/home", web::get().to(comic_routes::home::<C>))
            .route("/list/{kind}", web::get().to(comic_routes::list::<C>))
            .route("/top-weekly", web::get().to(comic_routes::top_weekly::<C>))
            .route(
                "/recommendation",
                web::get().to(comic_routes::recommendation::<C>),
            )
            .route("/search", web::get().to(comic_routes::search::<C>))
            .route("/az/{letter}", web::get().to(comic_routes::az_list::<C>))
            .route("/genres", web::get().to(comic_routes::genres::<C>))
            .route("/genre/{genre}", web::get().to(comic_routes::by_genre::<C>))
            .route("/chapter/{id}", web::get().to(comic_routes::chapter::<C>))
            .route("/{id}", web::get().to(comic_routes::detail::<C>)),
    );
}

/// Configure the community endpoints. They need a [animaqu_db::DbPool] and a [SnapshotHub] in the
/// app data.
pub fn community_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/community")
            .service(
                web::resource("/profile")
                    .route(web::get().to(community_routes::get_own_profile))
                    .route(web::put().to(community_routes::put_own_profile)),
            )
            .route(
                "/users/{account_id}",
                web::get().to(community_routes::get_user_profile),
            )
            .route(
                "/comments/{comic_slug}/subscribe",
                web::get().to(community_routes::subscribe_comments),
            )
            .service(
                web::resource("/comments/{comic_slug}")
                    .route(web::get().to(community_routes::list_comments))
                    .route(web::post().to(community_routes::post_comment)),
            )
            .route(
                "/chat/subscribe",
                web::get().to(community_routes::subscribe_chat),
            )
            .service(
                web::resource("/chat")
                    .route(web::get().to(community_routes::list_chat))
                    .route(web::post().to(community_routes::post_chat_message)),
            )
            .route(
                "/mentions",
                web::get().to(community_routes::suggest_mentions),
            )
            .route(
                "/favorites",
                web::get().to(community_routes::list_favorites),
            )
            .service(
                web::resource("/favorites/{comic_slug}")
                    .route(web::get().to(community_routes::check_favorite))
                    .route(web::put().to(community_routes::put_favorite))
                    .route(web::delete().to(community_routes::delete_favorite)),
            )
            .service(
                web::resource("/history")
                    .route(web::get().to(community_routes::reading_history))
                    .route(web::post().to(community_routes::record_chapter_read)),
            )
            .route(
                "/leaderboard",
                web::get().to(community_routes::leaderboard),
            )
            .route("/quotes", web::get().to(community_routes::list_quotes)),
    );
}

/// Configure the administration endpoints. They need [animaqu_common::AccountRoles] in the app
/// data.
pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/users", web::get().to(admin_routes::list_users))
            .route(
                "/users/{account_id}/verification",
                web::put().to(admin_routes::set_verification),
            )
            .route(
                "/comments/{comment_id}",
                web::delete().to(admin_routes::delete_comment),
            )
            .route("/quotes", web::post().to(admin_routes::add_quote))
            .service(
                web::resource("/quotes/{quote_id}")
                    .route(web::put().to(admin_routes::update_quote))
                    .route(web::delete().to(admin_routes::delete_quote)),
            ),
    );
}
