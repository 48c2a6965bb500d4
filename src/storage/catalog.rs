use super::seed::populate;
use crate::model::Tutorial;

/// Read-only owner of the tutorial list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tutorials: Vec<Tutorial>,
}

impl Catalog {
    pub fn new(tutorials: Vec<Tutorial>) -> Self {
        tracing::debug!(count = tutorials.len(), "Loaded tutorial catalog");
        Self { tutorials }
    }

    pub fn seeded() -> Self {
        Self::new(populate())
    }

    /// First tutorial with a matching id, or `None`.
    pub fn get(&self, id: i32) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id == id)
    }

    pub fn list(&self) -> &[Tutorial] {
        &self.tutorials
    }
}
