use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque reference to one image, usually a root-relative URL such as
/// `/art/HeroImages/knight.png`. The carousel never looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered, immutable sequence of image references.
///
/// A list has an identity: clones share it, while two lists built separately
/// are different references even if their contents are equal. The carousel
/// resets its position whenever it is handed a different reference.
#[derive(Debug, Clone)]
pub struct ImageList {
    items: Arc<[ImageRef]>,
}

impl ImageList {
    pub fn new(items: Vec<ImageRef>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[ImageRef] {
        &self.items
    }

    pub fn same_reference(&self, other: &ImageList) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Default for ImageList {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<ImageRef>> for ImageList {
    fn from(items: Vec<ImageRef>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<ImageRef> for ImageList {
    fn from_iter<T: IntoIterator<Item = ImageRef>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Webp,
    Unsupported,
}

impl ImageKind {
    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }
}

pub fn detect_image_kind(path: &Path) -> ImageKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return ImageKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "png" => ImageKind::Png,
        "jpg" | "jpeg" => ImageKind::Jpeg,
        "webp" => ImageKind::Webp,
        _ => ImageKind::Unsupported,
    }
}
