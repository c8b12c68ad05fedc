use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    Clear,
    Related,
    Editor,
}

impl Certainty {
    pub const ALL: [Self; 3] = [Self::Clear, Self::Related, Self::Editor];

    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Related => "related",
            Self::Editor => "editor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub value: f32,
    pub certainty: Certainty,
    #[serde(default)]
    pub active: bool,
    #[serde(default, rename = "avatarUrl", alias = "avatar")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, Default)]
pub struct EntitySet {
    revision: u64,
    entities: Vec<Entity>,
}

impl EntitySet {
    pub fn new(entities: Vec<Entity>) -> Self {
        let mut set = Self {
            revision: 0,
            entities: Vec::new(),
        };
        set.replace(entities);
        set
    }

    pub fn replace(&mut self, mut entities: Vec<Entity>) {
        normalize_active(&mut entities);
        self.entities = entities;
        self.revision = self.revision.wrapping_add(1);
    }

    #[cfg(test)]
    pub(crate) fn unchecked(entities: Vec<Entity>) -> Self {
        Self {
            revision: 1,
            entities,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.entities.iter().position(|entity| entity.active)
    }

    pub fn set_active_index(&mut self, index: usize) -> bool {
        if index >= self.entities.len() {
            warn!(index, len = self.entities.len(), "ignoring out-of-range active index");
            return false;
        }

        for (position, entity) in self.entities.iter_mut().enumerate() {
            entity.active = position == index;
        }
        true
    }

    pub fn next_active(&mut self) {
        if self.entities.is_empty() {
            return;
        }

        let next = self
            .active_index()
            .map(|index| (index + 1) % self.entities.len())
            .unwrap_or(0);
        self.set_active_index(next);
    }
}

fn normalize_active(entities: &mut [Entity]) {
    let active_count = entities.iter().filter(|entity| entity.active).count();
    if active_count == 1 || entities.is_empty() {
        return;
    }

    let keep = entities.iter().position(|entity| entity.active).unwrap_or(0);
    warn!(
        active_count,
        keep, "entity set must have exactly one active entry; normalizing"
    );
    for (index, entity) in entities.iter_mut().enumerate() {
        entity.active = index == keep;
    }
}
