//! # Parley Media Crate
//!
//! Shapes for files stored by the media service and the link previews
//! produced by the unfurling service. Other model crates embed these types
//! wherever an entity carries an avatar, icon, banner or message attachment.
//!
//! ## Usage
//!
//! ```rust
//! use parley_media::{Attachment, SizeOptions};
//!
//! let attachment: Attachment = serde_json::from_str(r#"{
//!     "_id": "01FBN6YMVMM4ZYD3CAG1CX0Y9P",
//!     "tag": "attachments",
//!     "size": 2048,
//!     "filename": "cat.png",
//!     "metadata": { "type": "Image", "width": 640, "height": 480 },
//!     "content_type": "image/png"
//! }"#).unwrap();
//!
//! assert_eq!(attachment.metadata.dimensions(), Some((640, 480)));
//! let url = attachment.url("https://autumn.example", &SizeOptions::max_side(256));
//! assert_eq!(url, "https://autumn.example/attachments/01FBN6YMVMM4ZYD3CAG1CX0Y9P?max_side=256");
//! ```

pub mod entities;
pub mod types;

pub use entities::{
    Attachment, AttachmentMetadata, SizeOptions,
    BandcampType, Embed, EmbedImage, EmbedSpecial, EmbedVideo, ImageSize, TwitchType, WebsiteEmbed,
};
pub use types::{MediaError, MediaResult};
