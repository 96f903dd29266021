use crate::{ImageRef, SlotPosition, ViewportMode};

pub const EMPTY_GALLERY_MESSAGE: &str = "Drop images into the right folders to see the gallery.";

/// What activating a visible slide does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Retreat,
    Advance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub index: usize,
    pub image: ImageRef,
    pub position: SlotPosition,
    pub label: String,
    pub alt: String,
    pub action: Option<SlideAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// Render model of a carousel, a pure function of its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselView {
    Empty {
        message: &'static str,
    },
    Single {
        slide: SlideView,
    },
    Gallery {
        mode: ViewportMode,
        layout: &'static str,
        slides: Vec<SlideView>,
        indicators: Vec<Indicator>,
        hint: Option<&'static str>,
    },
}

impl CarouselView {
    pub fn slides(&self) -> &[SlideView] {
        match self {
            Self::Empty { .. } => &[],
            Self::Single { slide } => std::slice::from_ref(slide),
            Self::Gallery { slides, .. } => slides,
        }
    }

    pub fn indicators(&self) -> &[Indicator] {
        match self {
            Self::Gallery { indicators, .. } => indicators,
            _ => &[],
        }
    }

    /// Prev/next affordances are only offered for two or more slides.
    pub fn has_controls(&self) -> bool {
        matches!(self, Self::Gallery { .. })
    }

    pub fn center_slide(&self) -> Option<&SlideView> {
        self.slides()
            .iter()
            .find(|slide| slide.position == SlotPosition::Center)
    }
}
