use super::super::LayoutNode;

#[derive(Clone, Copy)]
pub(super) struct ContactGroup {
    pub(super) first: usize,
    pub(super) len: usize,
    pub(super) sum: f32,
}

impl ContactGroup {
    fn anchor(self) -> f32 {
        self.sum / self.len as f32
    }
}

pub(super) fn apply_restoring(nodes: &mut [LayoutNode], strength: f32, alpha: f32) {
    let pull = strength * alpha;
    for node in nodes {
        let offset = node.target() - node.position;
        node.position += offset * pull;
    }
}

pub(super) fn separate_contacts(
    nodes: &mut [LayoutNode],
    order: &[usize],
    width: f32,
    offsets: &mut Vec<f32>,
    groups: &mut Vec<ContactGroup>,
) {
    let Some((&first, &last)) = order.first().zip(order.last()) else {
        return;
    };

    // Packed offsets: a node sits exactly against its left neighbour when its
    // offset-free position equals the neighbour's.
    offsets.clear();
    let mut previous_radius = None;
    let mut packed = 0.0_f32;
    for &index in order {
        let radius = nodes[index].radius;
        if let Some(previous_radius) = previous_radius {
            packed += previous_radius + radius;
        }
        offsets.push(packed);
        previous_radius = Some(radius);
    }

    groups.clear();
    for (rank, &index) in order.iter().enumerate() {
        let mut group = ContactGroup {
            first: rank,
            len: 1,
            sum: nodes[index].position.x - offsets[rank],
        };

        while let Some(previous) = groups.last().copied() {
            if previous.anchor() <= group.anchor() {
                break;
            }
            groups.pop();
            group = ContactGroup {
                first: previous.first,
                len: previous.len + group.len,
                sum: previous.sum + group.sum,
            };
        }
        groups.push(group);
    }

    let lower = nodes[first].radius;
    let upper = width - nodes[last].radius - offsets[order.len() - 1];
    let fits = lower <= upper;

    for group in groups.iter() {
        let anchor = if fits {
            group.anchor().clamp(lower, upper)
        } else {
            (lower + upper) * 0.5
        };

        for rank in group.first..group.first + group.len {
            nodes[order[rank]].position.x = anchor + offsets[rank];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Certainty;
    use eframe::egui::vec2;

    fn node(id: usize, x: f32, radius: f32) -> LayoutNode {
        LayoutNode {
            id,
            target_x: x,
            position: vec2(x, 100.0),
            radius,
            certainty: Certainty::Clear,
            name: format!("node {id}"),
            value: 0.0,
            active: false,
        }
    }

    fn separate(nodes: &mut [LayoutNode], width: f32) {
        let mut order = (0..nodes.len()).collect::<Vec<_>>();
        order.sort_by(|a, b| nodes[*a].position.x.total_cmp(&nodes[*b].position.x));
        separate_contacts(nodes, &order, width, &mut Vec::new(), &mut Vec::new());
    }

    #[test]
    fn overlapping_pair_splits_overlap_evenly() {
        let mut nodes = vec![node(0, 100.0, 17.0), node(1, 110.0, 17.0)];
        separate(&mut nodes, 600.0);

        assert!((nodes[0].position.x - 88.0).abs() < 1e-4);
        assert!((nodes[1].position.x - 122.0).abs() < 1e-4);
    }

    #[test]
    fn separated_nodes_stay_put() {
        let mut nodes = vec![node(0, 100.0, 17.0), node(1, 200.0, 25.0)];
        separate(&mut nodes, 600.0);

        assert_eq!(nodes[0].position.x, 100.0);
        assert_eq!(nodes[1].position.x, 200.0);
    }

    #[test]
    fn chain_push_merges_into_one_group() {
        let mut nodes = vec![
            node(0, 100.0, 17.0),
            node(1, 120.0, 17.0),
            node(2, 150.0, 17.0),
        ];
        separate(&mut nodes, 600.0);

        let mean = (nodes[0].position.x + nodes[1].position.x + nodes[2].position.x) / 3.0;
        assert!((mean - 370.0 / 3.0).abs() < 1e-3);
        assert!((nodes[1].position.x - nodes[0].position.x - 34.0).abs() < 1e-3);
        assert!((nodes[2].position.x - nodes[1].position.x - 34.0).abs() < 1e-3);
    }

    #[test]
    fn row_is_pushed_back_inside_the_left_edge() {
        let mut nodes = vec![node(0, 17.0, 17.0), node(1, 17.0, 17.0)];
        separate(&mut nodes, 600.0);

        assert!((nodes[0].position.x - 17.0).abs() < 1e-4);
        assert!((nodes[1].position.x - 51.0).abs() < 1e-4);
    }

    #[test]
    fn oversized_row_is_centred() {
        let mut nodes = (0..4).map(|id| node(id, 20.0, 17.0)).collect::<Vec<_>>();
        separate(&mut nodes, 100.0);

        let left = nodes[0].position.x - 17.0;
        let right = 100.0 - (nodes[3].position.x + 17.0);
        assert!((left - right).abs() < 1e-3);
        for pair in nodes.windows(2) {
            assert!(pair[1].position.x - pair[0].position.x >= 34.0 - 1e-3);
        }
    }
}
