use crate::config::TutgraphConfig;
use crate::graphql::{TutorialSchema, build_schema};
use crate::storage::Catalog;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: TutgraphConfig,
    pub catalog: Arc<Catalog>,
}

impl CommandContext {
    pub fn new(config: TutgraphConfig) -> Self {
        Self {
            config,
            catalog: Arc::new(Catalog::seeded()),
        }
    }

    pub fn schema(&self) -> TutorialSchema {
        build_schema(Arc::clone(&self.catalog))
    }
}
