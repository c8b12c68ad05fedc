use eframe::egui::{Vec2, vec2};
use tracing::debug;

use crate::entities::{Certainty, Entity, EntitySet};

use super::StripConfig;
use super::physics::{RelaxScratch, relax};
use super::scale::ValueScale;

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
    pub id: usize,
    pub target_x: f32,
    pub position: Vec2,
    pub radius: f32,
    pub certainty: Certainty,
    pub name: String,
    pub value: f32,
    pub active: bool,
}

impl LayoutNode {
    pub fn current_x(&self) -> f32 {
        self.position.x
    }

    pub(super) fn target(&self) -> Vec2 {
        vec2(self.target_x, self.position.y)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettledLayout {
    nodes: Vec<LayoutNode>,
    width: f32,
    revision: u64,
}

impl SettledLayout {
    pub fn nodes(&self) -> &[LayoutNode] {
        &self.nodes
    }

    pub fn node(&self, id: usize) -> Option<&LayoutNode> {
        self.nodes.get(id).filter(|node| node.id == id)
    }

    pub fn active_node(&self) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.active)
    }

    pub fn active_id(&self) -> Option<usize> {
        self.active_node().map(|node| node.id)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayoutMode {
    FullRebuild,
    ActiveReflow,
}

impl RelayoutMode {
    pub fn plan(previous: Option<&SettledLayout>, entities: &EntitySet, width: f32) -> Option<Self> {
        let Some(previous) = previous else {
            return Some(Self::FullRebuild);
        };

        if previous.width != width
            || previous.revision != entities.revision()
            || previous.nodes.len() != entities.len()
        {
            return Some(Self::FullRebuild);
        }

        if previous.active_id() != entities.active_index() {
            return Some(Self::ActiveReflow);
        }

        None
    }
}

#[derive(Default)]
pub(super) struct LayoutBuilder {
    config: StripConfig,
    scratch: RelaxScratch,
}

impl LayoutBuilder {
    pub(super) fn new(config: StripConfig) -> Self {
        Self {
            config,
            scratch: RelaxScratch::default(),
        }
    }

    pub(super) fn build(
        &mut self,
        mode: RelayoutMode,
        previous: Option<&SettledLayout>,
        entities: &EntitySet,
        width: f32,
    ) -> SettledLayout {
        match (mode, previous) {
            (RelayoutMode::ActiveReflow, Some(previous)) if previous.width == width => {
                self.reflow_active(previous, entities)
            }
            _ => self.rebuild(entities, width),
        }
    }

    pub(super) fn rebuild(&mut self, entities: &EntitySet, width: f32) -> SettledLayout {
        let scale = ValueScale::for_width(width, self.config.base_radius);
        let nodes = entities
            .entities()
            .iter()
            .enumerate()
            .map(|(id, entity)| self.make_node(id, entity, scale))
            .collect::<Vec<_>>();

        debug!(nodes = nodes.len(), width, "full layout rebuild");
        self.settle(nodes, width, entities.revision())
    }

    pub(super) fn reflow_active(
        &mut self,
        previous: &SettledLayout,
        entities: &EntitySet,
    ) -> SettledLayout {
        if previous.nodes.len() != entities.len() {
            return self.rebuild(entities, previous.width);
        }

        let scale = ValueScale::for_width(previous.width, self.config.base_radius);
        let nodes = entities
            .entities()
            .iter()
            .zip(&previous.nodes)
            .enumerate()
            .map(|(id, (entity, prior))| {
                let mut node = self.make_node(id, entity, scale);
                if !(entity.active && !prior.active) {
                    node.position = prior.position;
                }
                node
            })
            .collect::<Vec<_>>();

        debug!(
            nodes = nodes.len(),
            from = ?previous.active_id(),
            to = ?entities.active_index(),
            "active reflow"
        );
        self.settle(nodes, previous.width, entities.revision())
    }

    fn make_node(&self, id: usize, entity: &Entity, scale: ValueScale) -> LayoutNode {
        let target_x = scale.map(entity.value);
        LayoutNode {
            id,
            target_x,
            position: vec2(target_x, self.config.center_y()),
            radius: self.config.radius_for(entity.active),
            certainty: entity.certainty,
            name: entity.name.clone(),
            value: entity.value,
            active: entity.active,
        }
    }

    fn settle(&mut self, mut nodes: Vec<LayoutNode>, width: f32, revision: u64) -> SettledLayout {
        let surface_width = width.max(self.config.base_radius * 2.0);
        relax(
            &mut nodes,
            surface_width,
            self.config.relax_ticks,
            &mut self.scratch,
        );
        SettledLayout {
            nodes,
            width,
            revision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strip::scale::map_value_to_x;
    use crate::strip::{ACTIVE_RADIUS, BASE_RADIUS};

    const EPSILON: f32 = 1e-2;

    fn entity_set(values: &[f32], active: Option<usize>) -> EntitySet {
        EntitySet::unchecked(
            values
                .iter()
                .enumerate()
                .map(|(index, &value)| Entity {
                    value,
                    certainty: Certainty::Clear,
                    active: Some(index) == active,
                    avatar: None,
                    name: format!("Entity {index}"),
                })
                .collect(),
        )
    }

    fn assert_no_overlap(layout: &SettledLayout) {
        for (i, a) in layout.nodes().iter().enumerate() {
            for b in &layout.nodes()[i + 1..] {
                assert!((a.current_x() - b.current_x()).abs() >= a.radius + b.radius - EPSILON);
            }
        }
    }

    #[test]
    fn close_values_are_pushed_apart_while_far_value_keeps_its_target() {
        let entities = entity_set(&[10.0, 12.0, 90.0], None);
        let layout = LayoutBuilder::default().rebuild(&entities, 600.0);
        let nodes = layout.nodes();

        assert!(nodes[1].current_x() - nodes[0].current_x() >= BASE_RADIUS * 2.0 - EPSILON);
        assert!((nodes[2].current_x() - map_value_to_x(90.0, 600.0, BASE_RADIUS)).abs() < EPSILON);
        let midpoint = (nodes[0].current_x() + nodes[1].current_x()) * 0.5;
        let target_midpoint = (nodes[0].target_x + nodes[1].target_x) * 0.5;
        assert!((midpoint - target_midpoint).abs() < EPSILON);
    }

    #[test]
    fn single_entity_rests_on_its_scaled_position() {
        let entities = entity_set(&[50.0], None);
        let layout = LayoutBuilder::default().rebuild(&entities, 400.0);

        assert_eq!(layout.nodes()[0].current_x(), map_value_to_x(50.0, 400.0, BASE_RADIUS));
    }

    #[test]
    fn empty_collection_settles_to_empty_layout() {
        let layout = LayoutBuilder::default().rebuild(&EntitySet::default(), 600.0);
        assert!(layout.is_empty());
        assert_eq!(layout.active_node(), None);
    }

    #[test]
    fn active_toggle_swaps_radii_and_keeps_ids() {
        let mut entities = entity_set(&[40.0, 45.0], Some(0));
        let mut builder = LayoutBuilder::default();
        let before = builder.rebuild(&entities, 600.0);

        entities.set_active_index(1);
        assert_eq!(
            RelayoutMode::plan(Some(&before), &entities, 600.0),
            Some(RelayoutMode::ActiveReflow)
        );
        let after = builder.reflow_active(&before, &entities);

        assert_eq!(after.nodes()[0].radius, BASE_RADIUS);
        assert_eq!(after.nodes()[1].radius, ACTIVE_RADIUS);
        assert_eq!(
            after.nodes().iter().map(|node| node.id).collect::<Vec<_>>(),
            before.nodes().iter().map(|node| node.id).collect::<Vec<_>>()
        );
        assert_no_overlap(&after);

        let target = after.nodes()[1].target_x;
        let moved = (after.nodes()[1].current_x() - target).abs();
        let was = (before.nodes()[1].current_x() - target).abs();
        assert!(moved <= was + EPSILON);
        assert!(after.nodes()[0].current_x() < after.nodes()[1].current_x());
    }

    #[test]
    fn reflow_leaves_distant_nodes_where_they_were() {
        let mut entities = entity_set(&[5.0, 50.0, 52.0, 95.0], Some(1));
        let mut builder = LayoutBuilder::default();
        let before = builder.rebuild(&entities, 800.0);

        entities.set_active_index(2);
        let after = builder.reflow_active(&before, &entities);

        for id in [0, 3] {
            let shift = after.nodes()[id].current_x() - before.nodes()[id].current_x();
            assert!(shift.abs() < EPSILON, "node {id} moved by {shift}");
        }
        assert_eq!(
            after.nodes().iter().filter(|node| node.radius == ACTIVE_RADIUS).count(),
            1
        );
        assert_no_overlap(&after);
    }

    #[test]
    fn newly_active_marker_takes_its_place_among_equal_values() {
        let mut entities = entity_set(&[50.0; 5], Some(0));
        let mut builder = LayoutBuilder::default();
        let before = builder.rebuild(&entities, 600.0);
        assert!(before.nodes()[4].current_x() > before.nodes()[3].current_x());

        entities.set_active_index(4);
        let after = builder.reflow_active(&before, &entities);
        let centre = map_value_to_x(50.0, 600.0, BASE_RADIUS);

        let rightmost = after
            .nodes()
            .iter()
            .max_by(|a, b| a.current_x().total_cmp(&b.current_x()))
            .map(|node| node.id);
        assert_ne!(rightmost, Some(4));
        assert!((after.nodes()[4].current_x() - centre).abs() < BASE_RADIUS + ACTIVE_RADIUS);
        assert_no_overlap(&after);
    }

    #[test]
    fn width_change_plans_a_full_rebuild_inside_the_new_range() {
        let entities = entity_set(&[0.0, 20.0, 50.0, 80.0, 100.0], Some(2));
        let mut builder = LayoutBuilder::default();
        let wide = builder.rebuild(&entities, 600.0);

        let mode = RelayoutMode::plan(Some(&wide), &entities, 300.0);
        assert_eq!(mode, Some(RelayoutMode::FullRebuild));

        let narrow = builder.build(RelayoutMode::FullRebuild, Some(&wide), &entities, 300.0);
        assert_eq!(narrow.width(), 300.0);
        for node in narrow.nodes() {
            assert!(node.current_x() >= node.radius - EPSILON);
            assert!(node.current_x() <= 300.0 - node.radius + EPSILON);
        }
        assert_no_overlap(&narrow);
    }

    #[test]
    fn replaced_collection_plans_a_full_rebuild() {
        let mut entities = entity_set(&[10.0, 20.0], Some(0));
        let layout = LayoutBuilder::default().rebuild(&entities, 600.0);
        assert_eq!(RelayoutMode::plan(Some(&layout), &entities, 600.0), None);

        let same_values = entities.entities().to_vec();
        entities.replace(same_values);
        assert_eq!(
            RelayoutMode::plan(Some(&layout), &entities, 600.0),
            Some(RelayoutMode::FullRebuild)
        );
        assert_eq!(
            RelayoutMode::plan(None, &entities, 600.0),
            Some(RelayoutMode::FullRebuild)
        );
    }
}
