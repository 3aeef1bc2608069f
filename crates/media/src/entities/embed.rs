//! Link preview embeds produced by the unfurling service.

use serde::{Deserialize, Serialize};

/// How an embedded image should be laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    Large,
    Preview,
}

/// Image found while unfurling a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub size: ImageSize,
}

/// Video found while unfurling a link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedVideo {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Kind of Twitch content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwitchType {
    Channel,
    Video,
    Clip,
}

/// Kind of Bandcamp content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandcampType {
    Album,
    Track,
}

/// Third-party content recognised by the unfurler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EmbedSpecial {
    None,
    YouTube { id: String },
    Twitch { content_type: TwitchType, id: String },
    Spotify { content_type: String, id: String },
    Soundcloud,
    Bandcamp { content_type: BandcampType, id: String },
}

/// Metadata scraped from a website
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteEmbed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<EmbedSpecial>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// CSS colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Embed attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Embed {
    None,
    Website(WebsiteEmbed),
    Image(EmbedImage),
}

impl EmbedSpecial {
    /// Identifier on the third-party platform, where it has one
    pub fn content_id(&self) -> Option<&str> {
        match self {
            EmbedSpecial::YouTube { id }
            | EmbedSpecial::Twitch { id, .. }
            | EmbedSpecial::Spotify { id, .. }
            | EmbedSpecial::Bandcamp { id, .. } => Some(id),
            EmbedSpecial::None | EmbedSpecial::Soundcloud => None,
        }
    }
}

impl Embed {
    /// Check if the unfurler produced nothing for this link
    pub fn is_empty(&self) -> bool {
        matches!(self, Embed::None)
    }

    /// Link the embed points at
    pub fn url(&self) -> Option<&str> {
        match self {
            Embed::None => None,
            Embed::Website(website) => website.url.as_deref(),
            Embed::Image(image) => Some(&image.url),
        }
    }

    /// Recognised third-party content, ignoring the explicit `None` marker
    pub fn special(&self) -> Option<&EmbedSpecial> {
        match self {
            Embed::Website(WebsiteEmbed {
                special: Some(special),
                ..
            }) if *special != EmbedSpecial::None => Some(special),
            _ => None,
        }
    }
}
