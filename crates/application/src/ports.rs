use std::path::PathBuf;

use mesmur_domain::{BackgroundSentinel, GalleryTarget, ImageRef};
use serde::Serialize;

use crate::ApplicationError;

#[derive(Debug, Clone)]
pub struct DiscoveryRequest {
    pub root: PathBuf,
    pub targets: Vec<GalleryTarget>,
    pub sentinel: BackgroundSentinel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GallerySection {
    pub key: String,
    pub title: String,
    pub images: Vec<ImageRef>,
}

/// Output of one discovery pass. Sections keep the order of the request's targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryResult {
    pub primary_background: Option<ImageRef>,
    pub sections: Vec<GallerySection>,
}

impl DiscoveryResult {
    pub fn section(&self, key: &str) -> Option<&GallerySection> {
        self.sections.iter().find(|section| section.key == key)
    }

    pub fn total_images(&self) -> usize {
        self.sections.iter().map(|section| section.images.len()).sum()
    }
}

pub trait ImageProvider {
    fn discover(&self, request: &DiscoveryRequest) -> Result<DiscoveryResult, ApplicationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    ViewportResize,
    /// Delivered only while the owning widget holds input focus.
    FocusedKeyDown,
    PointerStart,
    PointerEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Capabilities a host environment lends to a mounted widget: the current
/// viewport width and event listener registration.
pub trait HostEnvironment {
    fn viewport_width(&self) -> f32;

    fn attach(&self, owner: &str, kind: ListenerKind) -> ListenerId;

    fn detach(&self, id: ListenerId);
}
