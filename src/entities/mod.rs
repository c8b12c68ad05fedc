mod load;
mod model;
mod sample;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

pub use load::load_entities;
pub use model::{Certainty, Entity, EntitySet};
pub use sample::sample_entities;

#[derive(Clone, Debug)]
pub enum DataSource {
    File(PathBuf),
    Sample { seed: u64 },
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Sample { seed } => format!("sample #{seed}"),
        }
    }

    pub fn load(&self) -> Result<Vec<Entity>> {
        let entities = match self {
            Self::File(path) => load_entities(path)?,
            Self::Sample { seed } => sample_entities(*seed),
        };
        info!(source = %self.describe(), count = entities.len(), "loaded entities");
        Ok(entities)
    }

    pub fn next_sample(&self) -> Self {
        match self {
            Self::File(_) => Self::Sample { seed: 0 },
            Self::Sample { seed } => Self::Sample {
                seed: seed.wrapping_add(1),
            },
        }
    }
}
