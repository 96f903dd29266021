use mesmur_domain::{Carousel, GalleryTarget, ImageList, ImageRef};

use crate::DiscoveryResult;

pub const BRAND: &str = "Mesmur";
pub const COMING_SOON_MESSAGE: &str = "Coming soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: "home",
        label: "Home",
    },
    NavItem {
        id: "heroes",
        label: "Heroes & Items",
    },
    NavItem {
        id: "worlds",
        label: "Worlds",
    },
    NavItem {
        id: "gameplay",
        label: "Gameplay",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const FEATURES: [FeatureCard; 5] = [
    FeatureCard {
        title: "Deck-Building Depth",
        body: "Fuse heroes and relics to chain-card effects, crafting outrageous plays that snowball across turns.",
    },
    FeatureCard {
        title: "Reactive AI",
        body: "Adversaries read your patterns, forcing quick pivots, clever bluffs, and clutch saves.",
    },
    FeatureCard {
        title: "Co-op Synergy",
        body: "Drop in with a friend, splice your loadouts, and unlock duo ultimates that reshape the map.",
    },
    FeatureCard {
        title: "Risk & Reward",
        body: "Push deeper for rarities while storms amplify; every encounter is a gamble with teeth.",
    },
    FeatureCard {
        title: "Tactical Battlemaps",
        body: "Cover, elevation, and environmental hazards layer strategy on top of every card you play.",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroBanner {
    pub background: Option<ImageRef>,
    pub headline: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

fn section_copy(key: &str) -> Option<SectionCopy> {
    match key {
        "heroes" => Some(SectionCopy {
            eyebrow: "Heroes & Items",
            heading: "Collect Powerful Heroes and Items",
            body: "Draft radiant champions and void-touched relics into a single deck. Stack synergies, awaken ultimates, and slam into impossible odds.",
        }),
        "worlds" => Some(SectionCopy {
            eyebrow: "Worlds",
            heading: "Explore Strange New Worlds",
            body: "Slipstream through shattered nebulae, crystalline ruins, and living starships. Each realm rewrites hazards, rewards, and the cards that flourish there.",
        }),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct GalleryBlock {
    pub key: String,
    pub eyebrow: String,
    pub heading: String,
    pub body: String,
    pub carousel: Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComingSoonDialog {
    open: bool,
}

impl ComingSoonDialog {
    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn message(&self) -> &'static str {
        COMING_SOON_MESSAGE
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape only matters while the dialog is showing.
    pub fn handle_escape(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        true
    }
}

impl Default for ComingSoonDialog {
    fn default() -> Self {
        Self::closed()
    }
}

#[derive(Debug, Clone)]
pub struct SitePage {
    pub brand: &'static str,
    pub hero: HeroBanner,
    pub nav: &'static [NavItem],
    pub galleries: Vec<GalleryBlock>,
    pub features: &'static [FeatureCard],
    pub dialog: ComingSoonDialog,
}

impl SitePage {
    /// Builds the page from a discovery pass, one carousel per target in target order.
    pub fn compose(discovery: DiscoveryResult, targets: &[GalleryTarget], viewport_width: f32) -> Self {
        let galleries = targets
            .iter()
            .map(|target| {
                let images: ImageList = discovery
                    .section(target.key())
                    .map(|section| section.images.iter().cloned().collect())
                    .unwrap_or_default();
                let copy = section_copy(target.key());
                GalleryBlock {
                    key: target.key().to_string(),
                    eyebrow: copy
                        .map(|copy| copy.eyebrow.to_string())
                        .unwrap_or_else(|| target.title().to_string()),
                    heading: copy
                        .map(|copy| copy.heading.to_string())
                        .unwrap_or_else(|| target.title().to_string()),
                    body: copy.map(|copy| copy.body.to_string()).unwrap_or_default(),
                    carousel: Carousel::new(images, target.title())
                        .with_viewport_width(viewport_width),
                }
            })
            .collect();

        Self {
            brand: BRAND,
            hero: HeroBanner {
                background: discovery.primary_background,
                headline: "Adventure is in the cards",
                tagline: "Command a living deck of mystic rogues and luminous relics. Every draw bends the battlefield, every combo rewrites the run.",
            },
            nav: &NAV_ITEMS,
            galleries,
            features: &FEATURES,
            dialog: ComingSoonDialog::closed(),
        }
    }

    pub fn gallery(&self, key: &str) -> Option<&GalleryBlock> {
        self.galleries.iter().find(|gallery| gallery.key == key)
    }
}

#[cfg(test)]
mod tests {
    use mesmur_domain::{default_targets, ViewportMode};

    use super::*;
    use crate::GallerySection;

    fn discovery() -> DiscoveryResult {
        DiscoveryResult {
            primary_background: Some(ImageRef::from("/mainImage.png")),
            sections: vec![GallerySection {
                key: "heroes".to_string(),
                title: "Heroes and Items".to_string(),
                images: vec![ImageRef::from("/HeroImages/a.png"), ImageRef::from("/HeroImages/b.png")],
            }],
        }
    }

    #[test]
    fn compose_builds_one_gallery_per_target() {
        let page = SitePage::compose(discovery(), &default_targets(), 400.0);

        assert_eq!(page.brand, "Mesmur");
        assert_eq!(page.hero.background, Some(ImageRef::from("/mainImage.png")));
        assert_eq!(page.galleries.len(), 2);
        assert_eq!(page.nav.len(), 4);
        assert_eq!(page.features.len(), 5);

        let heroes = page.gallery("heroes").expect("heroes gallery");
        assert_eq!(heroes.carousel.len(), 2);
        assert_eq!(heroes.carousel.title(), "Heroes and Items");
        assert_eq!(heroes.heading, "Collect Powerful Heroes and Items");
        assert_eq!(heroes.carousel.viewport_mode(), ViewportMode::Narrow);

        let worlds = page.gallery("worlds").expect("worlds gallery");
        assert!(worlds.carousel.is_empty());
        assert_eq!(worlds.eyebrow, "Worlds");
    }

    #[test]
    fn unknown_targets_fall_back_to_their_title() {
        let target = GalleryTarget::new("cards", "CardImages", "Cards").expect("target");
        let page = SitePage::compose(DiscoveryResult::default(), &[target], 1024.0);
        let cards = page.gallery("cards").expect("cards gallery");
        assert_eq!(cards.heading, "Cards");
        assert!(cards.body.is_empty());
    }

    #[test]
    fn dialog_opens_and_escape_closes() {
        let mut dialog = ComingSoonDialog::default();
        assert!(!dialog.handle_escape());
        dialog.open();
        assert!(dialog.is_open());
        assert_eq!(dialog.message(), "Coming soon.");
        assert!(dialog.handle_escape());
        assert!(!dialog.is_open());
        dialog.open();
        dialog.close();
        assert!(!dialog.is_open());
    }
}
