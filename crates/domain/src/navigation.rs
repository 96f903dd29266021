use crate::ViewportMode;

/// Index after `current` in a ring of `len` slides. Zero for an empty ring.
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1 + len) % len
}

/// Index before `current` in a ring of `len` slides. Zero for an empty ring.
///
/// `len` is added before subtracting so the intermediate never goes negative.
pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub viewport_mode: ViewportMode,
}

impl NavigationState {
    pub fn new(viewport_mode: ViewportMode) -> Self {
        Self {
            current_index: 0,
            viewport_mode,
        }
    }
}
