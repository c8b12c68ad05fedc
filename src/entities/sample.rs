use crate::util::stable_unit;

use super::model::{Certainty, Entity};

const MAX_SAMPLE_LEN: usize = 50;

const FIRST_NAMES: [&str; 12] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Frances", "Ken", "Radia", "Tony",
    "Margaret", "Niklaus",
];
const LAST_NAMES: [&str; 12] = [
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Allen", "Thompson",
    "Perlman", "Hoare", "Hamilton", "Wirth",
];

pub fn sample_entities(seed: u64) -> Vec<Entity> {
    let len = 1 + (stable_unit(seed, "len", 0) * MAX_SAMPLE_LEN as f32) as usize;
    let len = len.min(MAX_SAMPLE_LEN);

    let mut values = (0..len)
        .map(|index| (stable_unit(seed, "value", index) * 100.0).floor())
        .collect::<Vec<_>>();
    values.sort_by(f32::total_cmp);

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| Entity {
            value,
            certainty: sample_certainty(stable_unit(seed, "certainty", index)),
            active: index == 0,
            avatar: None,
            name: sample_name(seed, index),
        })
        .collect()
}

fn sample_certainty(roll: f32) -> Certainty {
    if roll < 0.3333 {
        Certainty::Clear
    } else if roll < 0.6666 {
        Certainty::Editor
    } else {
        Certainty::Related
    }
}

fn pick(seed: u64, stream: &str, index: usize, options: &[&'static str]) -> &'static str {
    let slot = (stable_unit(seed, stream, index) * options.len() as f32) as usize;
    options[slot.min(options.len() - 1)]
}

fn sample_name(seed: u64, index: usize) -> String {
    format!(
        "{} {}",
        pick(seed, "first", index, &FIRST_NAMES),
        pick(seed, "last", index, &LAST_NAMES)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_sorted_bounded_and_deterministic() {
        for seed in 0..32 {
            let entities = sample_entities(seed);
            assert!(!entities.is_empty() && entities.len() <= MAX_SAMPLE_LEN);
            assert!(entities.windows(2).all(|pair| pair[0].value <= pair[1].value));
            assert!(entities.iter().all(|e| (0.0..=100.0).contains(&e.value)));
            assert_eq!(entities.iter().filter(|e| e.active).count(), 1);
            assert!(entities[0].active);
            assert_eq!(entities, sample_entities(seed));
        }
    }

    #[test]
    fn names_combine_a_first_and_a_last_name() {
        for seed in 0..8 {
            for entity in sample_entities(seed) {
                let (first, last) = entity.name.split_once(' ').expect("two-part name");
                assert!(FIRST_NAMES.contains(&first));
                assert!(LAST_NAMES.contains(&last));
            }
        }
        assert_eq!(pick(3, "first", 0, &["only"]), "only");
    }

    #[test]
    fn certainty_roll_covers_every_class() {
        assert_eq!(sample_certainty(0.1), Certainty::Clear);
        assert_eq!(sample_certainty(0.5), Certainty::Editor);
        assert_eq!(sample_certainty(0.9), Certainty::Related);
    }
}
