use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::render::PageConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation seam. Production wires `GeminiClient`; tests script a fake.
    /// The API credential lives inside the client — handlers never see it.
    pub llm: Arc<dyn TextGenerator>,
    /// Layout config for the export renderer — page dimensions, font sizes,
    /// spacer and accent color.
    pub page_config: PageConfig,
}
