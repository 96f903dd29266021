use mesmur_domain::{Carousel, CarouselView, ImageList, NavKey, SlideAction, ViewportMode};
use tracing::debug;

use crate::{HostEnvironment, ListenerId, ListenerKind};

/// Releases a host listener when dropped, including during unwinding.
pub struct ListenerGuard<'h> {
    host: &'h dyn HostEnvironment,
    id: ListenerId,
    kind: ListenerKind,
}

impl<'h> ListenerGuard<'h> {
    fn attach(host: &'h dyn HostEnvironment, owner: &str, kind: ListenerKind) -> Self {
        let id = host.attach(owner, kind);
        Self { host, id, kind }
    }
}

impl Drop for ListenerGuard<'_> {
    fn drop(&mut self) {
        self.host.detach(self.id);
    }
}

impl std::fmt::Debug for ListenerGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Resize { width: f32 },
    Focus,
    Blur,
    KeyDown(NavKey),
    PointerStart { x: f32 },
    PointerEnd { x: f32 },
    ActivateSlide(SlideAction),
    SelectIndicator(usize),
}

/// A carousel attached to a host. Listeners are acquired on mount and
/// released when this value is dropped.
pub struct MountedCarousel<'h> {
    carousel: Carousel,
    host: &'h dyn HostEnvironment,
    _resize: ListenerGuard<'h>,
    _keyboard: ListenerGuard<'h>,
    gestures: Vec<ListenerGuard<'h>>,
}

impl std::fmt::Debug for MountedCarousel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedCarousel")
            .field("carousel", &self.carousel)
            .field("gestures", &self.gestures)
            .finish_non_exhaustive()
    }
}

impl<'h> MountedCarousel<'h> {
    pub fn mount(host: &'h dyn HostEnvironment, mut carousel: Carousel) -> Self {
        let mode = carousel.on_viewport_change(host.viewport_width());
        let owner = carousel.title().to_string();
        let resize = ListenerGuard::attach(host, &owner, ListenerKind::ViewportResize);
        let keyboard = ListenerGuard::attach(host, &owner, ListenerKind::FocusedKeyDown);
        let mut mounted = Self {
            carousel,
            host,
            _resize: resize,
            _keyboard: keyboard,
            gestures: Vec::new(),
        };
        mounted.sync_gesture_listeners(mode);
        debug!(
            title = %owner,
            slides = mounted.carousel.len(),
            ?mode,
            "carousel mounted"
        );
        mounted
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn view(&self) -> CarouselView {
        self.carousel.view()
    }

    pub fn gestures_attached(&self) -> bool {
        !self.gestures.is_empty()
    }

    pub fn update_images(&mut self, images: ImageList) -> bool {
        let reset = self.carousel.replace_images(images);
        if reset {
            debug!(title = %self.carousel.title(), slides = self.carousel.len(), "image list replaced");
        }
        reset
    }

    /// Applies one host event. Returns whether the carousel needs a re-render.
    pub fn dispatch(&mut self, event: HostEvent) -> bool {
        let before = self.carousel.state();
        let consumed = match event {
            HostEvent::Resize { width } => {
                let mode = self.carousel.on_viewport_change(width);
                self.sync_gesture_listeners(mode);
                before.viewport_mode != mode
            }
            HostEvent::Focus => {
                self.carousel.focus();
                false
            }
            HostEvent::Blur => {
                self.carousel.blur();
                false
            }
            HostEvent::KeyDown(key) => self.carousel.handle_key(key),
            HostEvent::PointerStart { x } => {
                if !self.gestures_attached() {
                    return false;
                }
                self.carousel.on_gesture_start(x);
                false
            }
            HostEvent::PointerEnd { x } => {
                if !self.gestures_attached() {
                    return false;
                }
                self.carousel.on_gesture_end(x)
            }
            HostEvent::ActivateSlide(action) => self.carousel.activate(action),
            HostEvent::SelectIndicator(index) => self.carousel.jump_to(index),
        };

        let after = self.carousel.state();
        if before != after {
            debug!(
                title = %self.carousel.title(),
                from = before.current_index,
                to = after.current_index,
                mode = ?after.viewport_mode,
                "carousel state changed"
            );
        }
        consumed || before != after
    }

    fn sync_gesture_listeners(&mut self, mode: ViewportMode) {
        match mode {
            ViewportMode::Narrow if self.gestures.is_empty() => {
                let owner = self.carousel.title().to_string();
                self.gestures = vec![
                    ListenerGuard::attach(self.host, &owner, ListenerKind::PointerStart),
                    ListenerGuard::attach(self.host, &owner, ListenerKind::PointerEnd),
                ];
            }
            ViewportMode::Wide if !self.gestures.is_empty() => {
                self.gestures.clear();
                self.carousel.cancel_gesture();
            }
            _ => {}
        }
    }
}
