use std::sync::Arc;

use moviemate_metadata::provider::MovieProvider;

/// Shared application state passed to all handlers. The provider is the
/// only shared piece, and it is stateless, so concurrent requests never
/// contend.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MovieProvider>,
}
