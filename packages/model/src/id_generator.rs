use crate::ComponentId;
use std::fmt;
use uuid::Uuid;

/// Source of component ids
///
/// Implementations must not hand out the same id twice. The tree also refuses
/// ids it already holds, so a generator restarted over a loaded document only
/// costs extra draws.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> ComponentId;
}

/// Random v4 UUIDs, the default for interactive editing
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> ComponentId {
        ComponentId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Sequential ID generator (`seed-1`, `seed-2`, ...) for reproducible documents
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    seed: String,
    count: u32,
}

impl SequentialIdGenerator {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> ComponentId {
        self.count += 1;
        ComponentId::new(format!("{}-{}", self.seed, self.count))
    }
}
