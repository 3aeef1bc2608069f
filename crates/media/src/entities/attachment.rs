use serde::{Deserialize, Serialize};

use crate::types::{FileId, MediaError, MediaResult};

/// A file stored by the media service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// File identifier
    #[serde(rename = "_id")]
    pub id: FileId,
    /// Storage bucket the file lives in (attachments, avatars, icons, ...)
    pub tag: String,
    /// File size in bytes
    pub size: u64,
    /// Original filename
    pub filename: String,
    /// Kind-specific metadata
    pub metadata: AttachmentMetadata,
    /// MIME type
    pub content_type: String,
}

/// Metadata describing what kind of file an attachment is.
///
/// Images and videos always carry their pixel dimensions; a payload tagged
/// `Image` or `Video` without them does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AttachmentMetadata {
    File,
    Text,
    Audio,
    Image { width: u32, height: u32 },
    Video { width: u32, height: u32 },
}

/// Resize options understood by the media service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_side: Option<u32>,
}

impl AttachmentMetadata {
    /// Wire tag of this metadata variant
    pub fn kind(&self) -> &'static str {
        match self {
            AttachmentMetadata::File => "File",
            AttachmentMetadata::Text => "Text",
            AttachmentMetadata::Audio => "Audio",
            AttachmentMetadata::Image { .. } => "Image",
            AttachmentMetadata::Video { .. } => "Video",
        }
    }

    /// Pixel dimensions for images and videos
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match *self {
            AttachmentMetadata::Image { width, height }
            | AttachmentMetadata::Video { width, height } => Some((width, height)),
            _ => None,
        }
    }
}

impl Attachment {
    /// Check if this is an image attachment
    pub fn is_image(&self) -> bool {
        matches!(self.metadata, AttachmentMetadata::Image { .. })
    }

    /// Check if this is a video attachment
    pub fn is_video(&self) -> bool {
        matches!(self.metadata, AttachmentMetadata::Video { .. })
    }

    /// Check if this is an audio attachment
    pub fn is_audio(&self) -> bool {
        matches!(self.metadata, AttachmentMetadata::Audio)
    }

    /// Check if this is a text attachment
    pub fn is_text(&self) -> bool {
        matches!(self.metadata, AttachmentMetadata::Text)
    }

    /// Build the download URL for this file on the given media service.
    ///
    /// Resize options are appended as query parameters in a fixed order.
    pub fn url(&self, base: &str, options: &SizeOptions) -> String {
        let mut url = format!("{}/{}/{}", base.trim_end_matches('/'), self.tag, self.id);
        let query = options.query();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    /// Get human-readable file size
    pub fn formatted_size(&self) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = self.size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", self.size, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Validate attachment data
    pub fn validate(&self) -> MediaResult<()> {
        if self.id.trim().is_empty() {
            return Err(MediaError::validation("Attachment id cannot be empty"));
        }

        if self.tag.trim().is_empty() {
            return Err(MediaError::validation("Attachment tag cannot be empty"));
        }

        if self.filename.trim().is_empty() {
            return Err(MediaError::validation("File name cannot be empty"));
        }

        if self.content_type.trim().is_empty() {
            return Err(MediaError::validation("Content type cannot be empty"));
        }

        if let Some((width, height)) = self.metadata.dimensions() {
            if width == 0 || height == 0 {
                return Err(MediaError::validation(format!(
                    "{} dimensions must be positive",
                    self.metadata.kind()
                )));
            }
        }

        Ok(())
    }
}

impl SizeOptions {
    /// Bound the longest side of the returned image
    pub fn max_side(max_side: u32) -> Self {
        Self {
            max_side: Some(max_side),
            ..Self::default()
        }
    }

    /// Check whether no resize option is set
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.size.is_none() && self.max_side.is_none()
    }

    fn query(&self) -> String {
        [
            ("width", self.width),
            ("height", self.height),
            ("size", self.size),
            ("max_side", self.max_side),
        ]
        .iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={value}")))
        .collect::<Vec<_>>()
        .join("&")
    }
}
