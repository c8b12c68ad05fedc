use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::entities::Entity;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_lowercase(), &query.to_lowercase()))
}

pub(in crate::app) fn matching_indices(entities: &[Entity], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..entities.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored = entities
        .iter()
        .enumerate()
        .filter_map(|(index, entity)| {
            fuzzy_match_score(&matcher, &entity.name, query).map(|score| (index, score))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(index, _)| index).collect()
}

pub(in crate::app) fn best_match(entities: &[Entity], query: &str) -> Option<usize> {
    if query.trim().is_empty() {
        return None;
    }
    matching_indices(entities, query).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Certainty;

    fn named(names: &[&str]) -> Vec<Entity> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| Entity {
                value: index as f32 * 10.0,
                certainty: Certainty::Related,
                active: index == 0,
                avatar: None,
                name: (*name).to_owned(),
            })
            .collect()
    }

    #[test]
    fn empty_query_lists_everything_and_activates_nothing() {
        let entities = named(&["Ada Lovelace", "Alan Turing"]);
        assert_eq!(matching_indices(&entities, "  "), vec![0, 1]);
        assert_eq!(best_match(&entities, ""), None);
    }

    #[test]
    fn best_match_prefers_the_closest_name() {
        let entities = named(&["Ada Lovelace", "Alan Turing", "Grace Hopper"]);
        assert_eq!(best_match(&entities, "turing"), Some(1));
        assert_eq!(best_match(&entities, "GRACE"), Some(2));
        assert_eq!(best_match(&entities, "zzz"), None);
    }
}
