use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

pub fn format_percent(value: f32) -> String {
    format!("{}%", value.round() as i64)
}

pub fn initials(name: &str) -> String {
    let letters = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect::<Vec<_>>();

    match letters.as_slice() {
        [] => "?".to_owned(),
        [only] => only.to_string(),
        [first, .., last] => format!("{first}{last}"),
    }
}

pub fn stable_unit(seed: u64, stream: &str, index: usize) -> f32 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    stream.hash(&mut hasher);
    index.hash(&mut hasher);
    let hash = hasher.finish();

    ((hash >> 40) as f64 / (1u64 << 24) as f64) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_and_last_words() {
        assert_eq!(initials("Ada Byron Lovelace"), "AL");
        assert_eq!(initials("grace"), "G");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn percent_rounds_to_whole_numbers() {
        assert_eq!(format_percent(42.4), "42%");
        assert_eq!(format_percent(99.5), "100%");
    }

    #[test]
    fn stable_unit_is_deterministic_and_bounded() {
        for index in 0..64 {
            let value = stable_unit(7, "value", index);
            assert_eq!(value, stable_unit(7, "value", index));
            assert!((0.0..1.0).contains(&value));
        }
        assert_ne!(stable_unit(7, "value", 0), stable_unit(8, "value", 0));
    }
}
