use std::path::PathBuf;

use mesmur_domain::{DEFAULT_BACKGROUND_SENTINEL, DEFAULT_HERO_FOLDER, DEFAULT_WORLD_FOLDER};

#[derive(Debug, Clone)]
pub struct DiscoverGalleriesCommand {
    pub root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ComposePageCommand {
    pub root: PathBuf,
    pub viewport_width: f32,
}

/// Folder names and background sentinel the galleries are discovered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub hero_folder: String,
    pub world_folder: String,
    pub sentinel: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            hero_folder: DEFAULT_HERO_FOLDER.to_string(),
            world_folder: DEFAULT_WORLD_FOLDER.to_string(),
            sentinel: DEFAULT_BACKGROUND_SENTINEL.to_string(),
        }
    }
}
