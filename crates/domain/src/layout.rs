use serde::Serialize;

use crate::navigation::{next_index, previous_index};
use crate::ViewportMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPosition {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub position: SlotPosition,
}

/// Maps the current index of a ring of slides to the slides that are visible
/// and where they sit. Implementations never mutate navigation state.
pub trait LayoutStrategy {
    fn name(&self) -> &'static str;

    fn place(&self, current: usize, len: usize) -> Vec<Placement>;

    fn hint(&self) -> Option<&'static str> {
        None
    }
}

/// Wide viewports: the current slide in the middle with its neighbours peeking
/// in on either side.
#[derive(Debug, Default, Clone, Copy)]
pub struct PeekLayout;

impl LayoutStrategy for PeekLayout {
    fn name(&self) -> &'static str {
        "peek"
    }

    fn place(&self, current: usize, len: usize) -> Vec<Placement> {
        match len {
            0 => Vec::new(),
            1 => vec![Placement {
                index: 0,
                position: SlotPosition::Center,
            }],
            _ => {
                let candidates = [
                    (previous_index(current, len), SlotPosition::Left),
                    (current, SlotPosition::Center),
                    (next_index(current, len), SlotPosition::Right),
                ];
                let mut placements: Vec<Placement> = Vec::with_capacity(candidates.len());
                for (index, position) in candidates {
                    if placements.iter().any(|placed| placed.index == index) {
                        continue;
                    }
                    placements.push(Placement { index, position });
                }
                placements
            }
        }
    }

    fn hint(&self) -> Option<&'static str> {
        Some("Click sides to navigate")
    }
}

/// Narrow viewports: only the current slide, edge to edge.
#[derive(Debug, Default, Clone, Copy)]
pub struct FullBleedLayout;

impl LayoutStrategy for FullBleedLayout {
    fn name(&self) -> &'static str {
        "full-bleed"
    }

    fn place(&self, current: usize, len: usize) -> Vec<Placement> {
        if len == 0 {
            return Vec::new();
        }
        vec![Placement {
            index: current.min(len - 1),
            position: SlotPosition::Center,
        }]
    }
}

pub fn layout_for(mode: ViewportMode) -> &'static dyn LayoutStrategy {
    match mode {
        ViewportMode::Wide => &PeekLayout,
        ViewportMode::Narrow => &FullBleedLayout,
    }
}
