//! Configuration a node publishes at its API root.

use serde::{Deserialize, Serialize};

/// Deployment description returned by a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfiguration {
    /// API version reported by the node
    pub revolt: String,
    pub features: NodeFeatures,
    /// Events websocket URL
    pub ws: String,
    /// Web app URL
    pub app: String,
    /// Public VAPID key for web push
    pub vapid: String,
}

/// Features enabled on a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFeatures {
    pub registration: bool,
    pub captcha: CaptchaFeature,
    pub email: bool,
    pub invite_only: String,
    /// Media storage
    pub autumn: ServiceFeature,
    /// Link unfurling
    pub january: ServiceFeature,
    /// Voice signalling
    pub voso: VoiceFeature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptchaFeature {
    pub enabled: bool,
    /// hCaptcha site key
    pub key: String,
}

/// Optional service reachable over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFeature {
    pub enabled: bool,
    pub url: String,
}

/// Voice service, reachable over HTTP and a websocket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceFeature {
    pub enabled: bool,
    pub url: String,
    pub ws: String,
}

impl ServiceFeature {
    /// Base URL when the service is enabled
    pub fn url(&self) -> Option<&str> {
        self.enabled.then_some(self.url.as_str())
    }
}

impl NodeConfiguration {
    /// Media storage base URL, if enabled
    pub fn media_url(&self) -> Option<&str> {
        self.features.autumn.url()
    }

    /// Link unfurling base URL, if enabled
    pub fn unfurl_url(&self) -> Option<&str> {
        self.features.january.url()
    }

    /// Voice HTTP and websocket URLs, if enabled
    pub fn voice_urls(&self) -> Option<(&str, &str)> {
        let voso = &self.features.voso;
        voso.enabled.then_some((voso.url.as_str(), voso.ws.as_str()))
    }
}
