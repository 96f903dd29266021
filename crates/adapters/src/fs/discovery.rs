use std::fs;
use std::path::{Component, Path, PathBuf};

use mesmur_application::{
    ApplicationError, DiscoveryRequest, DiscoveryResult, GallerySection, ImageProvider,
};
use mesmur_domain::{detect_image_kind, BackgroundSentinel, GalleryTarget, ImageRef};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Discovers gallery images below a public directory.
///
/// Traversal is depth first with siblings visited in file-name order, so the
/// result is stable for a given tree regardless of how the filesystem orders
/// directory entries.
#[derive(Debug, Default)]
pub struct WalkdirImageProvider;

impl ImageProvider for WalkdirImageProvider {
    fn discover(&self, request: &DiscoveryRequest) -> Result<DiscoveryResult, ApplicationError> {
        let root = request.root.as_path();
        if !root.is_dir() {
            return Err(ApplicationError::InvalidInput(format!(
                "public directory does not exist or is not a directory: {}",
                root.display()
            )));
        }

        let mut sections = Vec::with_capacity(request.targets.len());
        for target in &request.targets {
            let directories = find_directories(root, target);
            let mut images = Vec::new();
            for directory in &directories {
                for file in list_images(directory)? {
                    images.push(to_public_url(root, &file)?);
                }
            }
            debug!(
                section = target.key(),
                directories = directories.len(),
                images = images.len(),
                "collected gallery section"
            );
            sections.push(GallerySection {
                key: target.key().to_string(),
                title: target.title().to_string(),
                images,
            });
        }

        let primary_background = find_background(root, &request.sentinel)
            .map(|path| to_public_url(root, &path))
            .transpose()?;

        Ok(DiscoveryResult {
            primary_background,
            sections,
        })
    }
}

fn walk(root: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!(%error, "skipping unreadable entry");
                None
            }
        })
}

/// Every directory below `root` whose name matches the target, nested matches included.
fn find_directories(root: &Path, target: &GalleryTarget) -> Vec<PathBuf> {
    walk(root)
        .filter(|entry| entry.file_type().is_dir())
        .filter(|entry| target.matches_folder(&entry.file_name().to_string_lossy()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Supported images directly inside `directory`, sorted by case-folded file name
/// with ties broken on the raw name.
fn list_images(directory: &Path) -> Result<Vec<PathBuf>, ApplicationError> {
    let entries = fs::read_dir(directory).map_err(|error| {
        ApplicationError::Io(format!("failed to read {}: {error}", directory.display()))
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| !kind.is_dir()))
        .map(|entry| entry.path())
        .filter(|path| detect_image_kind(path).is_supported())
        .collect();
    files.sort_by_cached_key(|path| {
        let name = path.file_name().unwrap_or_default().to_os_string();
        (name.to_string_lossy().to_lowercase(), name)
    });
    Ok(files)
}

/// First supported image, in depth-first order, whose stem matches the sentinel.
fn find_background(root: &Path, sentinel: &BackgroundSentinel) -> Option<PathBuf> {
    walk(root)
        .filter(|entry| !entry.file_type().is_dir())
        .find(|entry| {
            let path = entry.path();
            let stem_matches = path
                .file_stem()
                .is_some_and(|stem| sentinel.matches_stem(&stem.to_string_lossy()));
            stem_matches && detect_image_kind(path).is_supported()
        })
        .map(walkdir::DirEntry::into_path)
}

/// `/`-rooted URL of `path` relative to `root`, always with forward slashes.
pub fn to_public_url(root: &Path, path: &Path) -> Result<ImageRef, ApplicationError> {
    let relative = path.strip_prefix(root).map_err(|_| {
        ApplicationError::InvalidInput(format!(
            "{} is not inside {}",
            path.display(),
            root.display()
        ))
    })?;

    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Ok(ImageRef::new(format!("/{}", segments.join("/"))))
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgb};
    use mesmur_domain::default_targets;
    use tempfile::TempDir;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        fs::write(&path, b"not really an image").expect("write");
    }

    fn request(root: &Path) -> DiscoveryRequest {
        DiscoveryRequest {
            root: root.to_path_buf(),
            targets: default_targets(),
            sentinel: BackgroundSentinel::default(),
        }
    }

    fn urls(images: &[ImageRef]) -> Vec<&str> {
        images.iter().map(ImageRef::as_str).collect()
    }

    #[test]
    fn collects_every_matching_directory_in_discovery_order() {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path();
        touch(root, "a/heroimages/zeta.png");
        touch(root, "a/heroimages/Alpha.JPG");
        touch(root, "a/heroimages/notes.txt");
        touch(root, "b/HeroImages/beta.webp");
        touch(root, "b/HeroImages/nested/ignored.png");
        touch(root, "b/HeroImages/HEROIMAGES/inner.jpeg");
        touch(root, "LevelImages/world-1.jpg");

        let result = WalkdirImageProvider
            .discover(&request(root))
            .expect("discovery");

        let heroes = result.section("heroes").expect("heroes");
        assert_eq!(
            urls(&heroes.images),
            vec![
                "/a/heroimages/Alpha.JPG",
                "/a/heroimages/zeta.png",
                "/b/HeroImages/beta.webp",
                "/b/HeroImages/HEROIMAGES/inner.jpeg",
            ]
        );
        let worlds = result.section("worlds").expect("worlds");
        assert_eq!(urls(&worlds.images), vec!["/LevelImages/world-1.jpg"]);
        assert_eq!(result.primary_background, None);
    }

    #[test]
    fn gallery_files_sort_without_regard_to_case() {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path();
        touch(root, "HeroImages/Zeta.png");
        touch(root, "HeroImages/beta.png");
        touch(root, "HeroImages/alpha.png");

        let result = WalkdirImageProvider
            .discover(&request(root))
            .expect("discovery");

        let heroes = result.section("heroes").expect("heroes");
        assert_eq!(
            urls(&heroes.images),
            vec![
                "/HeroImages/alpha.png",
                "/HeroImages/beta.png",
                "/HeroImages/Zeta.png",
            ]
        );
    }

    #[test]
    fn background_is_first_depth_first_match() {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path();
        touch(root, "a/deep/MainImage.webp");
        touch(root, "b/mainimage.png");
        touch(root, "mainimage.txt");

        let result = WalkdirImageProvider
            .discover(&request(root))
            .expect("discovery");
        assert_eq!(
            result.primary_background,
            Some(ImageRef::from("/a/deep/MainImage.webp"))
        );
    }

    #[test]
    fn background_requires_a_supported_image() {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path();
        touch(root, "mainimage.gif");
        touch(root, "mainimage-2.png");

        let result = WalkdirImageProvider
            .discover(&request(root))
            .expect("discovery");
        assert_eq!(result.primary_background, None);
    }

    #[test]
    fn real_images_are_listed_like_any_other_file() {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path();
        fs::create_dir_all(root.join("LevelImages")).expect("mkdir");
        let img = ImageBuffer::from_fn(32, 16, |_x, _y| Rgb([40_u8, 60_u8, 90_u8]));
        img.save(root.join("LevelImages/nebula.png")).expect("save");

        let result = WalkdirImageProvider
            .discover(&request(root))
            .expect("discovery");
        assert_eq!(
            urls(&result.section("worlds").expect("worlds").images),
            vec!["/LevelImages/nebula.png"]
        );
        assert!(result.section("heroes").expect("heroes").images.is_empty());
    }

    #[test]
    fn missing_root_is_invalid_input() {
        let dir = TempDir::new().expect("tempdir");
        let result = WalkdirImageProvider.discover(&request(&dir.path().join("missing")));
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[test]
    fn discovery_is_deterministic() {
        let dir = TempDir::new().expect("tempdir");
        let root = dir.path();
        for name in ["c", "a", "b"] {
            touch(root, &format!("{name}/HeroImages/{name}.png"));
        }
        let first = WalkdirImageProvider.discover(&request(root)).expect("first");
        let second = WalkdirImageProvider.discover(&request(root)).expect("second");
        assert_eq!(first, second);
        assert_eq!(
            urls(&first.section("heroes").expect("heroes").images),
            vec!["/a/HeroImages/a.png", "/b/HeroImages/b.png", "/c/HeroImages/c.png"]
        );
    }

    #[test]
    fn public_urls_use_forward_slashes() {
        let root = Path::new("site").join("public");
        let path = root.join("art").join("HeroImages").join("knight.png");
        assert_eq!(
            to_public_url(&root, &path).expect("url"),
            ImageRef::from("/art/HeroImages/knight.png")
        );
        assert!(to_public_url(&root, Path::new("elsewhere/x.png")).is_err());
    }
}
