use eframe::egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::util::format_percent;

use super::build::LayoutNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalloutPlacement {
    Top,
    Bottom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Callout {
    pub node_id: usize,
    pub text: String,
    pub anchor: Pos2,
    pub placement: CalloutPlacement,
    pub is_active: bool,
    pub shown_at: f64,
}

impl Callout {
    pub fn opacity(&self, now: f64, fade_secs: f64) -> f32 {
        if fade_secs <= f64::EPSILON {
            return 1.0;
        }
        ((now - self.shown_at) / fade_secs).clamp(0.0, 1.0) as f32
    }

    pub fn panel_rect(&self, text_size: Vec2, padding: f32) -> Rect {
        let size = text_size + vec2(padding, padding) * 2.0;
        let min = match self.placement {
            CalloutPlacement::Top => pos2(self.anchor.x - size.x * 0.5, self.anchor.y - size.y),
            CalloutPlacement::Bottom => pos2(self.anchor.x - size.x * 0.5, self.anchor.y),
        };
        Rect::from_min_size(min, size)
    }
}

fn callout_pair(node: &LayoutNode, gap: f32, is_active: bool, now: f64) -> [Callout; 2] {
    let offset = node.radius + gap;
    [
        Callout {
            node_id: node.id,
            text: node.name.clone(),
            anchor: pos2(node.current_x(), node.position.y - offset),
            placement: CalloutPlacement::Top,
            is_active,
            shown_at: now,
        },
        Callout {
            node_id: node.id,
            text: format_percent(node.value),
            anchor: pos2(node.current_x(), node.position.y + offset),
            placement: CalloutPlacement::Bottom,
            is_active,
            shown_at: now,
        },
    ]
}

#[derive(Default)]
pub(super) struct CalloutLayer {
    gap: f32,
    active: Option<[Callout; 2]>,
    hover: Option<[Callout; 2]>,
}

impl CalloutLayer {
    pub(super) fn new(gap: f32) -> Self {
        Self {
            gap,
            active: None,
            hover: None,
        }
    }

    pub(super) fn show_active(&mut self, node: &LayoutNode, now: f64) {
        self.active = None;
        if self.hovered_id() == Some(node.id) {
            self.hover = None;
        }
        self.active = Some(callout_pair(node, self.gap, true, now));
    }

    pub(super) fn show_hover(&mut self, node: &LayoutNode, now: f64) -> bool {
        if node.active || self.active_id() == Some(node.id) {
            self.hover = None;
            return false;
        }
        if self.hovered_id() == Some(node.id) {
            return true;
        }

        self.hover = None;
        self.hover = Some(callout_pair(node, self.gap, false, now));
        true
    }

    pub(super) fn hide_hover(&mut self) {
        self.hover = None;
    }

    pub(super) fn clear(&mut self) {
        self.active = None;
        self.hover = None;
    }

    pub(super) fn active_id(&self) -> Option<usize> {
        self.active.as_ref().map(|pair| pair[0].node_id)
    }

    pub(super) fn hovered_id(&self) -> Option<usize> {
        self.hover.as_ref().map(|pair| pair[0].node_id)
    }

    pub(super) fn iter(&self) -> impl Iterator<Item = &Callout> {
        self.active.iter().chain(self.hover.iter()).flatten()
    }
}
