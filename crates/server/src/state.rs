use std::sync::Arc;

use service::ModuleStore;

#[derive(Clone)]
pub struct ServerState {
    pub modules: Arc<dyn ModuleStore>,
    /// Validate submitted modules server-side before writing (off by default).
    pub strict_validation: bool,
}

impl ServerState {
    pub fn new(modules: Arc<dyn ModuleStore>) -> Self {
        Self { modules, strict_validation: false }
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }
}
