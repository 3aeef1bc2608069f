//! Media entities: stored files and link preview embeds.

pub mod attachment;
pub mod embed;

pub use attachment::{Attachment, AttachmentMetadata, SizeOptions};
pub use embed::{
    BandcampType, Embed, EmbedImage, EmbedSpecial, EmbedVideo, ImageSize, TwitchType, WebsiteEmbed,
};
