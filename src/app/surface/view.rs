use std::time::Duration;

use eframe::egui::{self, Align2, Color32, FontId, Painter, Rect, Sense, Stroke, Ui, vec2};

use crate::strip::{Callout, MarkerFrame};
use crate::util::initials;

use super::super::ViewModel;
use super::super::render_utils::{
    avatar_color, blend_color, certainty_color, draw_background, draw_grid, strip_to_screen,
    with_opacity,
};

const ACTIVE_RING: Color32 = Color32::from_rgb(245, 206, 93);

impl ViewModel {
    pub(in crate::app) fn draw_strip(&mut self, ui: &mut Ui) {
        let height = self.strip.config().height;
        let (rect, response) =
            ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::click());
        let painter = ui.painter_at(rect);
        let now = ui.input(|input| input.time);

        if self.strip.is_attached() {
            self.strip.observe_width(rect.width(), now);
        } else {
            self.strip.attach(rect.width(), &self.entities, now);
        }
        self.strip.tick(&self.entities, now);

        draw_background(&painter, rect);
        draw_grid(&painter, rect, &self.strip.grid_lines());

        let frames = self.strip.frames(now);
        let hovered = self.hovered_marker(ui, rect, &response, &frames);
        self.update_hover(hovered, now);
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        // Active marker last so it sits on top of its neighbours.
        for frame in frames
            .iter()
            .filter(|frame| !frame.active)
            .chain(frames.iter().filter(|frame| frame.active))
        {
            self.draw_marker(&painter, rect, frame, hovered == Some(frame.id));
        }

        for callout in self.strip.callouts() {
            let opacity = self.strip.callout_opacity(callout, now);
            self.draw_callout(&painter, rect, callout, opacity);
        }

        self.handle_marker_click(&response, hovered);

        if self.strip.is_animating(now) {
            ui.ctx().request_repaint();
        } else if let Some(delay) = self.strip.next_wakeup(now) {
            ui.ctx()
                .request_repaint_after(Duration::from_secs_f64(delay));
        }
    }

    fn draw_marker(&self, painter: &Painter, rect: Rect, frame: &MarkerFrame, is_hovered: bool) {
        let center = strip_to_screen(rect, frame.center);
        let base_color = certainty_color(frame.certainty);
        let color = if is_hovered {
            blend_color(base_color, Color32::WHITE, 0.25)
        } else {
            base_color
        };

        painter.circle_filled(center, frame.radius, color);
        painter.circle_stroke(
            center,
            frame.radius,
            Stroke::new(
                if frame.active { 2.2 } else { 1.0 },
                if frame.active {
                    ACTIVE_RING
                } else {
                    Color32::from_rgba_unmultiplied(15, 15, 15, 190)
                },
            ),
        );

        if frame.image_size <= 0.0 {
            return;
        }
        let name = self
            .strip
            .settled()
            .and_then(|layout| layout.node(frame.id))
            .map(|node| node.name.as_str())
            .unwrap_or_default();
        let image_rect = Rect::from_min_size(
            center + vec2(frame.image_inset, frame.image_inset),
            vec2(frame.image_size, frame.image_size),
        );
        painter.circle_filled(image_rect.center(), frame.image_size * 0.5, avatar_color(name));
        painter.text(
            image_rect.center(),
            Align2::CENTER_CENTER,
            initials(name),
            FontId::proportional((frame.image_size * 0.42).max(6.0)),
            Color32::from_gray(240),
        );
    }

    fn draw_callout(&self, painter: &Painter, rect: Rect, callout: &Callout, opacity: f32) {
        if opacity <= 0.0 {
            return;
        }

        let padding = self.strip.config().callout_padding;
        let font = if callout.is_active {
            FontId::proportional(14.0)
        } else {
            FontId::proportional(12.0)
        };
        let galley = painter.layout_no_wrap(
            callout.text.clone(),
            font,
            with_opacity(Color32::from_gray(240), opacity),
        );
        let panel = callout
            .panel_rect(galley.size(), padding)
            .translate(rect.min.to_vec2());
        let fill = if callout.is_active {
            Color32::from_rgba_unmultiplied(44, 52, 64, 235)
        } else {
            Color32::from_rgba_unmultiplied(32, 38, 46, 215)
        };

        painter.rect_filled(panel, 4.0, with_opacity(fill, opacity));
        painter.galley(
            panel.min + vec2(padding, padding),
            galley,
            Color32::from_gray(240),
        );
    }
}
