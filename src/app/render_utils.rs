use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, pos2};

use crate::entities::Certainty;
use crate::util::stable_unit;

const AVATAR_PALETTE: [Color32; 6] = [
    Color32::from_rgb(86, 120, 168),
    Color32::from_rgb(129, 96, 160),
    Color32::from_rgb(70, 140, 128),
    Color32::from_rgb(168, 112, 82),
    Color32::from_rgb(110, 132, 76),
    Color32::from_rgb(150, 86, 110),
];

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}

pub(super) fn certainty_color(certainty: Certainty) -> Color32 {
    match certainty {
        Certainty::Clear => Color32::from_rgb(94, 186, 125),
        Certainty::Related => Color32::from_rgb(103, 164, 230),
        Certainty::Editor => Color32::from_rgb(236, 170, 84),
    }
}

pub(super) fn avatar_color(name: &str) -> Color32 {
    let slot = (stable_unit(0, name, 0) * AVATAR_PALETTE.len() as f32) as usize;
    AVATAR_PALETTE[slot.min(AVATAR_PALETTE.len() - 1)]
}

pub(super) fn strip_to_screen(rect: Rect, local: Pos2) -> Pos2 {
    rect.min + local.to_vec2()
}

pub(super) fn screen_to_strip(rect: Rect, screen: Pos2) -> Pos2 {
    pos2(screen.x - rect.min.x, screen.y - rect.min.y)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));
    painter.line_segment(
        [rect.left_center(), rect.right_center()],
        Stroke::new(1.0, Color32::from_rgba_unmultiplied(90, 100, 112, 90)),
    );
}

pub(super) fn draw_grid(painter: &Painter, rect: Rect, grid_lines: &[f32]) {
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 110));
    for &x in grid_lines {
        let x = rect.left() + x;
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], stroke);
    }
}

pub(super) fn circle_contains(center: Pos2, radius: f32, point: Pos2) -> bool {
    center.distance(point) <= radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    #[test]
    fn opacity_bounds_are_transparent_and_unchanged() {
        let color = Color32::from_rgb(10, 20, 30);
        assert_eq!(with_opacity(color, 1.0), color);
        assert_eq!(with_opacity(color, 0.0), Color32::TRANSPARENT);
    }

    #[test]
    fn strip_and_screen_coordinates_round_trip() {
        let rect = Rect::from_min_size(pos2(40.0, 80.0), vec2(600.0, 200.0));
        let local = pos2(17.0, 100.0);
        let screen = strip_to_screen(rect, local);
        assert_eq!(screen, pos2(57.0, 180.0));
        assert_eq!(screen_to_strip(rect, screen), local);
    }

    #[test]
    fn avatar_colour_is_stable_per_name() {
        assert_eq!(avatar_color("Ada Lovelace"), avatar_color("Ada Lovelace"));
        assert!(AVATAR_PALETTE.contains(&avatar_color("Grace Hopper")));
    }
}
