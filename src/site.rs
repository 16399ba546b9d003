//! HTTP layer: localized pages, root redirect and the contact form stub.

/// Router, state and server lifecycle
mod app;
/// Request handlers
mod handlers;
/// HTML rendering
mod render;

pub use app::{
    AppState,
    SiteError,
    router,
    run,
};
pub use handlers::{
    ContactResponse,
    ContactSubmission,
};
pub use render::Page;
