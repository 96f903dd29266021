use mesmur_domain::{default_targets, site_targets, BackgroundSentinel, GalleryTarget};
use tracing::info;

use crate::{
    ApplicationError, ComposePageCommand, DiscoverGalleriesCommand, DiscoveryRequest,
    DiscoveryResult, ImageProvider, SitePage, SiteSettings,
};

pub struct SiteService {
    provider: Box<dyn ImageProvider>,
    targets: Vec<GalleryTarget>,
    sentinel: BackgroundSentinel,
}

impl SiteService {
    pub fn new(provider: Box<dyn ImageProvider>) -> Self {
        Self::with_targets(provider, default_targets(), BackgroundSentinel::default())
    }

    pub fn configured(
        provider: Box<dyn ImageProvider>,
        settings: &SiteSettings,
    ) -> Result<Self, ApplicationError> {
        let targets = site_targets(&settings.hero_folder, &settings.world_folder)?;
        let sentinel = BackgroundSentinel::new(settings.sentinel.as_str())?;
        Ok(Self::with_targets(provider, targets, sentinel))
    }

    pub fn with_targets(
        provider: Box<dyn ImageProvider>,
        targets: Vec<GalleryTarget>,
        sentinel: BackgroundSentinel,
    ) -> Self {
        Self {
            provider,
            targets,
            sentinel,
        }
    }

    pub fn targets(&self) -> &[GalleryTarget] {
        &self.targets
    }

    pub fn discover_galleries(
        &self,
        command: DiscoverGalleriesCommand,
    ) -> Result<DiscoveryResult, ApplicationError> {
        if command.root.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "discovery root must not be empty".to_string(),
            ));
        }
        if self.targets.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "at least one gallery target is required".to_string(),
            ));
        }

        let request = DiscoveryRequest {
            root: command.root,
            targets: self.targets.clone(),
            sentinel: self.sentinel.clone(),
        };
        let result = self.provider.discover(&request)?;
        info!(
            root = %request.root.display(),
            sections = result.sections.len(),
            images = result.total_images(),
            background = result.primary_background.is_some(),
            "gallery discovery finished"
        );
        Ok(result)
    }

    pub fn compose_page(&self, command: ComposePageCommand) -> Result<SitePage, ApplicationError> {
        if !command.viewport_width.is_finite() || command.viewport_width <= 0.0 {
            return Err(ApplicationError::InvalidInput(format!(
                "viewport width must be a positive number, got {}",
                command.viewport_width
            )));
        }
        let discovery = self.discover_galleries(DiscoverGalleriesCommand { root: command.root })?;
        Ok(SitePage::compose(
            discovery,
            &self.targets,
            command.viewport_width,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;

    use mesmur_domain::{DomainError, ImageRef, ViewportMode};

    use super::*;
    use crate::GallerySection;

    #[derive(Default)]
    struct FakeProvider {
        requests: RefCell<Vec<DiscoveryRequest>>,
    }

    impl ImageProvider for FakeProvider {
        fn discover(&self, request: &DiscoveryRequest) -> Result<DiscoveryResult, ApplicationError> {
            self.requests.borrow_mut().push(request.clone());
            if !request.root.ends_with("public") {
                return Err(ApplicationError::Io(format!(
                    "failed to read {}",
                    request.root.display()
                )));
            }
            Ok(DiscoveryResult {
                primary_background: None,
                sections: request
                    .targets
                    .iter()
                    .map(|target| GallerySection {
                        key: target.key().to_string(),
                        title: target.title().to_string(),
                        images: vec![
                            ImageRef::new(format!("/{}/1.png", target.folder_name())),
                            ImageRef::new(format!("/{}/2.png", target.folder_name())),
                        ],
                    })
                    .collect(),
            })
        }
    }

    #[test]
    fn discover_passes_default_targets_and_sentinel() {
        let service = SiteService::new(Box::new(FakeProvider::default()));
        let result = service
            .discover_galleries(DiscoverGalleriesCommand {
                root: PathBuf::from("site/public"),
            })
            .expect("discovery should succeed");

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.total_images(), 4);
        assert_eq!(
            result.section("worlds").map(|section| section.images[0].as_str()),
            Some("/LevelImages/1.png")
        );
    }

    #[test]
    fn configured_service_uses_custom_folders() {
        let settings = SiteSettings {
            hero_folder: "Champions".to_string(),
            sentinel: "backdrop".to_string(),
            ..SiteSettings::default()
        };
        let service = SiteService::configured(Box::new(FakeProvider::default()), &settings)
            .expect("settings are valid");
        assert_eq!(service.targets()[0].folder_name(), "Champions");
        assert_eq!(service.targets()[1].folder_name(), "LevelImages");

        let result = service
            .discover_galleries(DiscoverGalleriesCommand {
                root: PathBuf::from("public"),
            })
            .expect("discovery should succeed");
        assert_eq!(
            result.section("heroes").map(|section| section.images[0].as_str()),
            Some("/Champions/1.png")
        );
    }

    #[test]
    fn configured_service_rejects_blank_names() {
        let blank_folder = SiteSettings {
            world_folder: " ".to_string(),
            ..SiteSettings::default()
        };
        let result = SiteService::configured(Box::new(FakeProvider::default()), &blank_folder);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::EmptyFolderName(_)))
        ));

        let blank_sentinel = SiteSettings {
            sentinel: String::new(),
            ..SiteSettings::default()
        };
        let result = SiteService::configured(Box::new(FakeProvider::default()), &blank_sentinel);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::EmptySentinelName))
        ));
    }

    #[test]
    fn discover_rejects_empty_root() {
        let service = SiteService::new(Box::new(FakeProvider::default()));
        let result = service.discover_galleries(DiscoverGalleriesCommand {
            root: PathBuf::new(),
        });
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[test]
    fn provider_errors_propagate() {
        let service = SiteService::new(Box::new(FakeProvider::default()));
        let result = service.discover_galleries(DiscoverGalleriesCommand {
            root: PathBuf::from("elsewhere"),
        });
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }

    #[test]
    fn compose_page_uses_viewport_width() {
        let service = SiteService::new(Box::new(FakeProvider::default()));
        let page = service
            .compose_page(ComposePageCommand {
                root: PathBuf::from("public"),
                viewport_width: 600.0,
            })
            .expect("page should compose");
        assert!(page
            .galleries
            .iter()
            .all(|gallery| gallery.carousel.viewport_mode() == ViewportMode::Narrow));
        assert!(!page.dialog.is_open());
    }

    #[test]
    fn compose_page_rejects_bad_width() {
        let service = SiteService::new(Box::new(FakeProvider::default()));
        for width in [0.0, -10.0, f32::NAN] {
            let result = service.compose_page(ComposePageCommand {
                root: PathBuf::from("public"),
                viewport_width: width,
            });
            assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
        }
    }

    #[test]
    fn discovery_result_serializes_for_the_cli() {
        let result = DiscoveryResult {
            primary_background: Some(ImageRef::from("/mainimage.jpg")),
            sections: vec![GallerySection {
                key: "heroes".to_string(),
                title: "Heroes and Items".to_string(),
                images: vec![ImageRef::from("/HeroImages/a.png")],
            }],
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["primary_background"], "/mainimage.jpg");
        assert_eq!(json["sections"][0]["images"][0], "/HeroImages/a.png");
    }
}
