use eframe::egui::{self, Rect, Ui};

use crate::strip::MarkerFrame;

use super::super::ViewModel;
use super::super::render_utils::{circle_contains, screen_to_strip};

pub(super) fn marker_at(frames: &[MarkerFrame], pointer: egui::Pos2) -> Option<usize> {
    frames
        .iter()
        .filter(|frame| circle_contains(frame.center, frame.radius, pointer))
        .min_by(|a, b| {
            a.center
                .distance(pointer)
                .total_cmp(&b.center.distance(pointer))
        })
        .map(|frame| frame.id)
}

impl ViewModel {
    pub(in crate::app) fn hovered_marker(
        &self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
        frames: &[MarkerFrame],
    ) -> Option<usize> {
        if !response.hovered() {
            return None;
        }

        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        marker_at(frames, screen_to_strip(rect, pointer))
    }

    pub(in crate::app) fn update_hover(&mut self, hovered: Option<usize>, now: f64) {
        match hovered {
            Some(id) => self.strip.hover(id, now),
            None if self.strip.hovered().is_some() => self.strip.unhover(),
            None => {}
        }
    }

    pub(in crate::app) fn handle_marker_click(
        &mut self,
        response: &egui::Response,
        hovered: Option<usize>,
    ) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }

        if let Some(index) = hovered.and_then(|id| self.strip.click(id)) {
            self.set_active(index);
            response.ctx.request_repaint();
        }
    }
}
