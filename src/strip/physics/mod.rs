mod forces;

use forces::{ContactGroup, apply_restoring, separate_contacts};

use super::LayoutNode;

const RESTORING_STRENGTH: f32 = 1.0;
const ALPHA_MIN: f32 = 0.001;
const ALPHA_TARGET: f32 = 0.0;

fn alpha_decay() -> f32 {
    1.0 - ALPHA_MIN.powf(1.0 / 300.0)
}

#[derive(Default)]
pub(super) struct RelaxScratch {
    order: Vec<usize>,
    offsets: Vec<f32>,
    groups: Vec<ContactGroup>,
}

pub(super) fn relax(nodes: &mut [LayoutNode], width: f32, ticks: usize, scratch: &mut RelaxScratch) {
    if nodes.is_empty() {
        return;
    }

    let decay = alpha_decay();
    let mut alpha = 1.0_f32;
    for _ in 0..ticks {
        scratch.order.clear();
        scratch.order.extend(0..nodes.len());
        scratch.order.sort_by(|a, b| {
            nodes[*a]
                .position
                .x
                .total_cmp(&nodes[*b].position.x)
                .then(nodes[*a].id.cmp(&nodes[*b].id))
        });

        apply_restoring(nodes, RESTORING_STRENGTH, alpha);
        separate_contacts(
            nodes,
            &scratch.order,
            width,
            &mut scratch.offsets,
            &mut scratch.groups,
        );

        alpha += (ALPHA_TARGET - alpha) * decay;
    }
}
