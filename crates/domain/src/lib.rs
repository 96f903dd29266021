mod carousel;
mod error;
mod gesture;
mod image;
mod layout;
mod navigation;
mod target;
mod view;
mod viewport;

pub use carousel::{Carousel, NavKey};
pub use error::DomainError;
pub use gesture::{GestureSample, SwipeDirection, SWIPE_THRESHOLD};
pub use image::{detect_image_kind, ImageKind, ImageList, ImageRef};
pub use layout::{layout_for, FullBleedLayout, LayoutStrategy, PeekLayout, Placement, SlotPosition};
pub use navigation::{next_index, previous_index, NavigationState};
pub use target::{
    default_targets, site_targets, BackgroundSentinel, GalleryTarget, DEFAULT_BACKGROUND_SENTINEL,
    DEFAULT_HERO_FOLDER, DEFAULT_WORLD_FOLDER,
};
pub use view::{CarouselView, Indicator, SlideAction, SlideView, EMPTY_GALLERY_MESSAGE};
pub use viewport::{ViewportMode, NARROW_BREAKPOINT};
