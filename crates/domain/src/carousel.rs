use crate::gesture::{GestureSample, SwipeDirection};
use crate::layout::{layout_for, LayoutStrategy, SlotPosition};
use crate::navigation::{next_index, previous_index, NavigationState};
use crate::view::{CarouselView, Indicator, SlideAction, SlideView, EMPTY_GALLERY_MESSAGE};
use crate::{ImageList, ImageRef, ViewportMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Left,
    Right,
}

/// Gallery navigation state machine.
///
/// Every operation is total: out-of-range jumps, empty lists and stray gesture
/// ends leave the state as it was. Methods report whether anything changed so
/// the host knows when to re-render.
#[derive(Debug, Clone)]
pub struct Carousel {
    images: ImageList,
    title: String,
    state: NavigationState,
    gesture: Option<GestureSample>,
    focused: bool,
}

impl Carousel {
    pub fn new(images: ImageList, title: impl Into<String>) -> Self {
        Self {
            images,
            title: title.into(),
            state: NavigationState::default(),
            gesture: None,
            focused: false,
        }
    }

    pub fn with_viewport_width(mut self, width: f32) -> Self {
        self.on_viewport_change(width);
        self
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        self.state.viewport_mode
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        self.images.get(self.state.current_index)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn gesture_in_progress(&self) -> bool {
        self.gesture.is_some()
    }

    /// Swaps the input list. A different list reference, even one with equal
    /// contents, starts over at the first slide. Returns whether it reset.
    pub fn replace_images(&mut self, images: ImageList) -> bool {
        if self.images.same_reference(&images) {
            return false;
        }
        self.images = images;
        self.state.current_index = 0;
        self.gesture = None;
        true
    }

    pub fn advance(&mut self) -> bool {
        let len = self.len();
        if len <= 1 {
            return false;
        }
        self.state.current_index = next_index(self.state.current_index, len);
        true
    }

    pub fn retreat(&mut self) -> bool {
        let len = self.len();
        if len <= 1 {
            return false;
        }
        self.state.current_index = previous_index(self.state.current_index, len);
        true
    }

    /// Out-of-range targets are rejected rather than clamped.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len() {
            return false;
        }
        self.state.current_index = index;
        true
    }

    pub fn on_viewport_change(&mut self, width: f32) -> ViewportMode {
        self.state.viewport_mode = ViewportMode::from_width(width);
        self.state.viewport_mode
    }

    pub fn on_gesture_start(&mut self, x: f32) {
        self.gesture = Some(GestureSample::begin(x));
    }

    pub fn on_gesture_end(&mut self, x: f32) -> bool {
        let Some(sample) = self.gesture.take() else {
            return false;
        };
        match sample.finish(x) {
            Some(SwipeDirection::Forward) => self.advance(),
            Some(SwipeDirection::Backward) => self.retreat(),
            None => false,
        }
    }

    pub fn cancel_gesture(&mut self) {
        self.gesture = None;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.gesture = None;
    }

    /// Arrow keys only navigate while the carousel holds focus. Returns whether
    /// the key was consumed; unfocused keys are left to the rest of the page.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        if !self.focused {
            return false;
        }
        match key {
            NavKey::Left => self.retreat(),
            NavKey::Right => self.advance(),
        };
        true
    }

    pub fn activate(&mut self, action: SlideAction) -> bool {
        match action {
            SlideAction::Retreat => self.retreat(),
            SlideAction::Advance => self.advance(),
        }
    }

    pub fn view(&self) -> CarouselView {
        self.view_with(layout_for(self.state.viewport_mode))
    }

    pub fn view_with(&self, layout: &dyn LayoutStrategy) -> CarouselView {
        let len = self.len();
        match len {
            0 => CarouselView::Empty {
                message: EMPTY_GALLERY_MESSAGE,
            },
            1 => CarouselView::Single {
                slide: self.slide_view(0, SlotPosition::Center, false),
            },
            _ => {
                let slides = layout
                    .place(self.state.current_index, len)
                    .into_iter()
                    .map(|placement| self.slide_view(placement.index, placement.position, true))
                    .collect();
                let indicators = (0..len)
                    .map(|index| Indicator {
                        index,
                        active: index == self.state.current_index,
                        label: format!("Go to slide {}", index + 1),
                    })
                    .collect();
                CarouselView::Gallery {
                    mode: self.state.viewport_mode,
                    layout: layout.name(),
                    slides,
                    indicators,
                    hint: layout.hint(),
                }
            }
        }
    }

    fn slide_view(&self, index: usize, position: SlotPosition, navigable: bool) -> SlideView {
        let image = self.images.get(index).cloned().unwrap_or_else(|| ImageRef::new(""));
        let action = match position {
            SlotPosition::Left if navigable => Some(SlideAction::Retreat),
            SlotPosition::Right if navigable => Some(SlideAction::Advance),
            _ => None,
        };
        SlideView {
            index,
            image,
            position,
            label: format!("{} slide {}", self.title, index + 1),
            alt: format!("{} {}", self.title, index + 1),
            action,
        }
    }
}
