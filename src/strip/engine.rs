use tracing::debug;

use crate::entities::EntitySet;

use super::build::{LayoutBuilder, RelayoutMode, SettledLayout};
use super::callouts::{Callout, CalloutLayer};
use super::resize::ResizeDebouncer;
use super::scale::ValueScale;
use super::transition::{MarkerFrame, MarkerTransitions};
use super::{GRID_STEP, StripConfig};

pub struct MarkerStrip {
    config: StripConfig,
    builder: LayoutBuilder,
    width: Option<f32>,
    settled: Option<SettledLayout>,
    transitions: MarkerTransitions,
    callouts: CalloutLayer,
    resize: ResizeDebouncer,
}

impl MarkerStrip {
    pub fn new(config: StripConfig) -> Self {
        Self {
            config,
            builder: LayoutBuilder::new(config),
            width: None,
            settled: None,
            transitions: MarkerTransitions::new(config.transition_secs),
            callouts: CalloutLayer::new(config.callout_gap),
            resize: ResizeDebouncer::new(config.resize_quiet_secs),
        }
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.width.is_some()
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn settled(&self) -> Option<&SettledLayout> {
        self.settled.as_ref()
    }

    pub fn attach(&mut self, width: f32, entities: &EntitySet, now: f64) {
        if !width.is_finite() {
            return;
        }
        if self.is_attached() {
            self.observe_width(width, now);
            return;
        }

        debug!(width, "strip attached");
        self.width = Some(width);
        self.resize.settle(width);
        self.sync(entities, now);
    }

    pub fn observe_width(&mut self, width: f32, now: f64) {
        if !self.is_attached() || !width.is_finite() {
            return;
        }
        self.resize.observe(width, now);
    }

    pub fn tick(&mut self, entities: &EntitySet, now: f64) -> Option<RelayoutMode> {
        if let Some(width) = self.resize.poll(now) {
            debug!(from = ?self.width, to = width, "resize settled");
            self.width = Some(width);
        }
        self.sync(entities, now)
    }

    pub fn sync(&mut self, entities: &EntitySet, now: f64) -> Option<RelayoutMode> {
        let width = self.width?;
        let mode = RelayoutMode::plan(self.settled.as_ref(), entities, width)?;
        self.relayout(mode, entities, width, now);
        Some(mode)
    }

    fn relayout(&mut self, mode: RelayoutMode, entities: &EntitySet, width: f32, now: f64) {
        let next = self
            .builder
            .build(mode, self.settled.as_ref(), entities, width);

        match self.settled.as_ref() {
            Some(previous) => self.transitions.retarget(Some(previous), &next, now),
            None => self.transitions.place(&next, now),
        }
        debug!(?mode, nodes = next.nodes().len(), width, "relayout");

        self.callouts.hide_hover();
        match next.active_node() {
            Some(node) => self.callouts.show_active(node, now),
            None => {
                if self
                    .callouts
                    .active_id()
                    .is_some_and(|id| next.node(id).is_none())
                {
                    self.callouts.clear();
                }
            }
        }
        self.settled = Some(next);
    }

    pub fn hover(&mut self, id: usize, now: f64) {
        let Some(node) = self.settled.as_ref().and_then(|layout| layout.node(id)) else {
            return;
        };
        self.callouts.show_hover(node, now);
    }

    pub fn unhover(&mut self) {
        self.callouts.hide_hover();
    }

    pub fn hovered(&self) -> Option<usize> {
        self.callouts.hovered_id()
    }

    pub fn click(&self, id: usize) -> Option<usize> {
        let node = self.settled.as_ref()?.node(id)?;
        (!node.active).then_some(node.id)
    }

    pub fn frames(&self, now: f64) -> Vec<MarkerFrame> {
        self.settled
            .as_ref()
            .map(|layout| self.transitions.frames(layout, &self.config, now))
            .unwrap_or_default()
    }

    pub fn callouts(&self) -> impl Iterator<Item = &Callout> {
        self.callouts.iter()
    }

    pub fn callout_opacity(&self, callout: &Callout, now: f64) -> f32 {
        callout.opacity(now, self.config.callout_fade_secs())
    }

    pub fn grid_lines(&self) -> Vec<f32> {
        let Some(width) = self.width else {
            return Vec::new();
        };
        let scale = ValueScale::for_width(width, self.config.base_radius);
        (0..=100)
            .step_by(GRID_STEP as usize)
            .map(|value| scale.map(value as f32))
            .collect()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.transitions.is_animating(now)
            || self
                .callouts
                .iter()
                .any(|callout| self.callout_opacity(callout, now) < 1.0)
    }

    pub fn next_wakeup(&self, now: f64) -> Option<f64> {
        self.resize
            .next_deadline()
            .map(|deadline| (deadline - now).max(0.0))
    }
}

impl Default for MarkerStrip {
    fn default() -> Self {
        Self::new(StripConfig::default())
    }
}
