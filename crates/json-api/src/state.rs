//! Shared handler state.

use std::sync::Arc;

use shopcarts_app::context::AppContext;

pub(crate) struct State {
    pub app: AppContext,
}

impl State {
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
