// Document rendering: text → classified blocks → paginated layout → PDF bytes.
// The layout pass is pure and CPU-bound; callers in async context run
// `render_resume_pdf` inside tokio::task::spawn_blocking.

pub mod blocks;
pub mod font_metrics;
pub mod paginate;
pub mod pdf;

// Re-export the public API consumed by other modules (handlers, main).
pub use font_metrics::{default_page_config, PageConfig};
pub use pdf::{render_resume_pdf, RenderError};
