//! Serves a snapshot sequence as `text/event-stream`, one `data:` JSON line per snapshot.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::web::Bytes;
use actix_web::HttpResponse;
use futures::{Stream, StreamExt};
use serde::Serialize;

pub fn event_stream_response<S, T>(snapshots: S) -> HttpResponse
where
    S: Stream<Item = T> + 'static,
    T: Serialize,
{
    let body = snapshots.map(|snapshot| {
        serde_json::to_string(&snapshot).map(|json| Bytes::from(format!("data: {}\n\n", json)))
    });
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(CacheControl(vec![CacheDirective::NoCache]))
        .streaming(body)
}
