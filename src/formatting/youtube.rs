// src/formatting/youtube.rs
//! YouTube video id extraction for video blocks.

use crate::constants::YOUTUBE_EMBED_BASE;
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    static ref VIDEO_ID: Regex = Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap();
}

const YOUTUBE_HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtube-nocookie.com",
    "www.youtube-nocookie.com",
];

const PATH_PREFIXES: &[&str] = &["embed", "shorts", "live", "v"];

/// Extracts the 11-character video id from a YouTube URL.
///
/// Accepts `youtu.be/{id}`, `/watch?v={id}` and `/{embed,shorts,live,v}/{id}`
/// on the YouTube hosts. Anything else yields `None`.
pub fn parse_youtube_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_ascii_lowercase();
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    let candidate = if host == "youtu.be" || host == "www.youtu.be" {
        segments.next().map(str::to_string)
    } else if YOUTUBE_HOSTS.contains(&host.as_str()) {
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            Some(prefix) if PATH_PREFIXES.contains(&prefix) => segments.next().map(str::to_string),
            _ => None,
        }
    } else {
        None
    };

    candidate.filter(|id| VIDEO_ID.is_match(id))
}

/// The embed markup for a video id.
pub fn youtube_embed_html(video_id: &str) -> String {
    format!(
        "<div class=\"video\"><iframe src=\"{}{}\" title=\"YouTube video player\" frameborder=\"0\" allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" allowfullscreen=\"\"></iframe></div>",
        YOUTUBE_EMBED_BASE, video_id
    )
}
