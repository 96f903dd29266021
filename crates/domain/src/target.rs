use crate::DomainError;

pub const DEFAULT_BACKGROUND_SENTINEL: &str = "mainimage";
pub const DEFAULT_HERO_FOLDER: &str = "HeroImages";
pub const DEFAULT_WORLD_FOLDER: &str = "LevelImages";

/// One gallery section and the folder name its images are collected from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTarget {
    key: String,
    folder_name: String,
    title: String,
}

impl GalleryTarget {
    pub fn new(
        key: impl Into<String>,
        folder_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let key = key.into();
        let folder_name = folder_name.into();
        if key.trim().is_empty() {
            return Err(DomainError::EmptySectionKey);
        }
        if folder_name.trim().is_empty() {
            return Err(DomainError::EmptyFolderName(key));
        }
        Ok(Self {
            key,
            folder_name,
            title: title.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn matches_folder(&self, name: &str) -> bool {
        name.to_lowercase() == self.folder_name.to_lowercase()
    }
}

/// The two galleries of the site: heroes and items, then worlds.
pub fn default_targets() -> Vec<GalleryTarget> {
    vec![
        GalleryTarget {
            key: "heroes".to_string(),
            folder_name: DEFAULT_HERO_FOLDER.to_string(),
            title: "Heroes and Items".to_string(),
        },
        GalleryTarget {
            key: "worlds".to_string(),
            folder_name: DEFAULT_WORLD_FOLDER.to_string(),
            title: "Worlds".to_string(),
        },
    ]
}

/// The site's two galleries read from custom folder names.
pub fn site_targets(
    hero_folder: &str,
    world_folder: &str,
) -> Result<Vec<GalleryTarget>, DomainError> {
    Ok(vec![
        GalleryTarget::new("heroes", hero_folder, "Heroes and Items")?,
        GalleryTarget::new("worlds", world_folder, "Worlds")?,
    ])
}

/// Base name (without extension) of the file used as the hero background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundSentinel(String);

impl BackgroundSentinel {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptySentinelName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches_stem(&self, stem: &str) -> bool {
        stem.to_lowercase() == self.0.to_lowercase()
    }
}

impl Default for BackgroundSentinel {
    fn default() -> Self {
        Self(DEFAULT_BACKGROUND_SENTINEL.to_string())
    }
}
