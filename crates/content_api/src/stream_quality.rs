//! Normalises an episode's stream quality map into a resolution-indexed structure the player
//! can rely on.
//!
//! The anime API sends qualities as labels (`"1080p"`, `"720p"`, ...) that may be missing,
//! malformed, or incomplete, plus a single `stream_url`. [resolve_stream_quality] turns that into
//! a list of resolutions in the order the API listed them and a resolution to URL map that
//! always has a `480` entry.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// The slot filled from the fallback stream URL when nothing better is available.
pub const FALLBACK_RESOLUTION: u32 = 480;

/// When a stream at this resolution exists, the API's quality map is considered complete.
pub const PREFERRED_RESOLUTION: u32 = 720;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedQuality {
    /// Resolutions in discovery order. Not sorted and not deduplicated.
    pub available_resolutions: Vec<u32>,
    pub stream_by_resolution: BTreeMap<u32, String>,
}

impl NormalizedQuality {
    /// `true` when at least one mapped stream URL is non-empty.
    pub fn has_playable_source(&self) -> bool {
        self.stream_by_resolution.values().any(|url| !url.is_empty())
    }

    /// Fill the fallback slot unless the map already has one. An entry that came from the API
    /// is never overwritten.
    fn fill_fallback_slot(&mut self, fallback_stream_url: &str) {
        if self.stream_by_resolution.contains_key(&FALLBACK_RESOLUTION) {
            return;
        }
        self.available_resolutions.push(FALLBACK_RESOLUTION);
        self.stream_by_resolution
            .insert(FALLBACK_RESOLUTION, fallback_stream_url.to_string());
    }
}

/// Parse the leading digits of a label such as `"720p"`. Leading whitespace is ignored, as is
/// whatever follows the digits.
pub fn parse_resolution_label(label: &str) -> Option<u32> {
    let trimmed = label.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Build a [NormalizedQuality] from raw `(label, url)` pairs and the episode's fallback stream URL.
///
/// Never fails. Labels without a numeric prefix are skipped, and a missing fallback URL fills the
/// `480` slot with an empty string so the caller can decide what "nothing playable" means.
pub fn resolve_stream_quality<'a, I>(
    raw_stream_map: I,
    fallback_stream_url: Option<&str>,
) -> NormalizedQuality
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut quality = NormalizedQuality::default();
    let mut raw_is_empty = true;

    for (label, url) in raw_stream_map {
        raw_is_empty = false;
        match parse_resolution_label(label) {
            Some(resolution) => {
                quality.available_resolutions.push(resolution);
                quality
                    .stream_by_resolution
                    .insert(resolution, url.to_string());
            }
            None => debug!(label, "Skipping stream quality label without a resolution."),
        }
    }

    let fallback = fallback_stream_url.unwrap_or_default();

    // The API only lists the full ladder when it has a 720p stream.
    if raw_is_empty
        || !quality
            .stream_by_resolution
            .contains_key(&PREFERRED_RESOLUTION)
    {
        quality.fill_fallback_slot(fallback);
    }

    // Whatever the API sent, the player always gets a 480 source.
    quality.fill_fallback_slot(fallback);

    quality
}
