mod build;
mod callouts;
mod engine;
mod physics;
mod resize;
mod scale;
mod transition;

pub use build::{LayoutNode, RelayoutMode, SettledLayout};
pub use callouts::Callout;
pub use engine::MarkerStrip;
pub use transition::MarkerFrame;

pub const BASE_RADIUS: f32 = 17.0;
pub const ACTIVE_RADIUS: f32 = 25.0;
pub const MARKER_PADDING: f32 = 3.0;
pub const SURFACE_HEIGHT: f32 = 200.0;
pub const RELAX_TICKS: usize = 120;
pub const TRANSITION_SECS: f64 = 0.9;
pub const RESIZE_QUIET_SECS: f64 = 0.1;

pub const GRID_STEP: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripConfig {
    pub base_radius: f32,
    pub active_radius: f32,
    pub marker_padding: f32,
    pub height: f32,
    pub relax_ticks: usize,
    pub transition_secs: f64,
    pub resize_quiet_secs: f64,
    pub callout_padding: f32,
    pub callout_gap: f32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            base_radius: BASE_RADIUS,
            active_radius: ACTIVE_RADIUS,
            marker_padding: MARKER_PADDING,
            height: SURFACE_HEIGHT,
            relax_ticks: RELAX_TICKS,
            transition_secs: TRANSITION_SECS,
            resize_quiet_secs: RESIZE_QUIET_SECS,
            callout_padding: 6.0,
            callout_gap: 6.0,
        }
    }
}

impl StripConfig {
    pub fn radius_for(&self, active: bool) -> f32 {
        if active {
            self.active_radius
        } else {
            self.base_radius
        }
    }

    pub fn center_y(&self) -> f32 {
        self.height * 0.5
    }

    pub fn callout_fade_secs(&self) -> f64 {
        self.transition_secs / 6.0
    }

    pub fn image_size(&self, radius: f32) -> f32 {
        ((radius - self.marker_padding) * 2.0).max(0.0)
    }
}
