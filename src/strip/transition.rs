use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Pos2, pos2};

use crate::entities::Certainty;

use super::StripConfig;
use super::build::SettledLayout;

const ELASTIC_PERIOD: f64 = 0.3;

pub(super) fn elastic_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let period = ELASTIC_PERIOD / TAU;
    let shift = FRAC_PI_2 * period;
    let decay = (2f64.powf(-10.0 * t) - 0.000_976_562_5) * 1.000_977_517_106_549_4;
    1.0 - decay * ((t + shift) / period).sin()
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct MarkerState {
    x: f32,
    radius: f32,
}

impl MarkerState {
    fn lerp(self, to: Self, amount: f32) -> Self {
        Self {
            x: self.x + (to.x - self.x) * amount,
            radius: self.radius + (to.radius - self.radius) * amount,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct MarkerTween {
    from: MarkerState,
    to: MarkerState,
    started_at: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerFrame {
    pub id: usize,
    pub center: Pos2,
    pub radius: f32,
    pub image_inset: f32,
    pub image_size: f32,
    pub certainty: Certainty,
    pub active: bool,
}

#[derive(Default)]
pub(super) struct MarkerTransitions {
    duration: f64,
    tweens: Vec<MarkerTween>,
}

impl MarkerTransitions {
    pub(super) fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            tweens: Vec::new(),
        }
    }

    pub(super) fn place(&mut self, layout: &SettledLayout, now: f64) {
        self.tweens.clear();
        self.retarget(None, layout, now);
    }

    // A marker still mid-tween continues from where it is drawn; the rest
    // start from the previous settled layout.
    pub(super) fn retarget(
        &mut self,
        previous: Option<&SettledLayout>,
        next: &SettledLayout,
        now: f64,
    ) {
        let tweens = next
            .nodes()
            .iter()
            .map(|node| {
                let to = MarkerState {
                    x: node.current_x(),
                    radius: node.radius,
                };
                let from = self
                    .in_flight(node.id, now)
                    .or_else(|| {
                        previous
                            .and_then(|previous| previous.node(node.id))
                            .map(|prior| MarkerState {
                                x: prior.current_x(),
                                radius: prior.radius,
                            })
                    })
                    .unwrap_or(to);

                MarkerTween {
                    from,
                    to,
                    started_at: now,
                }
            })
            .collect();
        self.tweens = tweens;
    }

    fn in_flight(&self, id: usize, now: f64) -> Option<MarkerState> {
        let tween = self.tweens.get(id)?;
        if tween.from == tween.to || self.progress(tween, now) >= 1.0 {
            return None;
        }
        self.sample(id, now)
    }

    fn progress(&self, tween: &MarkerTween, now: f64) -> f64 {
        if self.duration <= f64::EPSILON {
            return 1.0;
        }
        ((now - tween.started_at) / self.duration).clamp(0.0, 1.0)
    }

    fn sample(&self, id: usize, now: f64) -> Option<MarkerState> {
        let tween = self.tweens.get(id)?;
        let progress = self.progress(tween, now);
        if tween.from == tween.to || progress >= 1.0 {
            return Some(tween.to);
        }

        let eased = elastic_out(progress) as f32;
        Some(tween.from.lerp(tween.to, eased))
    }

    pub(super) fn is_animating(&self, now: f64) -> bool {
        self.tweens
            .iter()
            .any(|tween| tween.from != tween.to && self.progress(tween, now) < 1.0)
    }

    pub(super) fn frames(
        &self,
        layout: &SettledLayout,
        config: &StripConfig,
        now: f64,
    ) -> Vec<MarkerFrame> {
        layout
            .nodes()
            .iter()
            .filter_map(|node| {
                let state = self.sample(node.id, now)?;
                let radius = state.radius.max(0.0);
                Some(MarkerFrame {
                    id: node.id,
                    center: pos2(state.x, node.position.y),
                    radius,
                    image_inset: -radius + config.marker_padding,
                    image_size: config.image_size(radius),
                    certainty: node.certainty,
                    active: node.active,
                })
            })
            .collect()
    }
}
