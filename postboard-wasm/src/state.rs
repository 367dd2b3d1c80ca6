use leptos::logging::warn;
use leptos::prelude::*;
use postboard_core::{DEFAULT_API_BASE_URL, Route, ViewerConfig};

use crate::api::ApiGateway;
use crate::router;

const API_BASE_URL: &str = match option_env!("POSTBOARD_API_URL") {
    Some(value) => value,
    None => DEFAULT_API_BASE_URL,
};

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) route: RwSignal<Route>,
    pub(crate) viewer: ViewerConfig,
    pub(crate) gateway: ApiGateway,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            route: RwSignal::new(Route::parse(&router::current_path())),
            viewer: ViewerConfig::from_raw(option_env!("POSTBOARD_USER_ID")),
            gateway: ApiGateway::new(API_BASE_URL),
        }
    }

    pub(crate) fn navigate(&self, route: Route) {
        if let Err(err) = router::push_path(&route.path()) {
            warn!("{err}");
        }
        self.route.set(route);
    }
}
