mod error;
mod mount;
mod page;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use mount::{HostEvent, ListenerGuard, MountedCarousel};
pub use page::{
    ComingSoonDialog, FeatureCard, GalleryBlock, HeroBanner, NavItem, SitePage, BRAND,
    COMING_SOON_MESSAGE, FEATURES, NAV_ITEMS,
};
pub use ports::{
    DiscoveryRequest, DiscoveryResult, GallerySection, HostEnvironment, ImageProvider,
    ListenerId, ListenerKind,
};
pub use service::SiteService;
pub use use_cases::{ComposePageCommand, DiscoverGalleriesCommand, SiteSettings};
