pub(crate) mod main_page;
pub(crate) mod not_found;
pub(crate) mod post_details;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Флаг "страница ещё показана": сбрасывается при размонтировании,
/// ответы, пришедшие позже, в состояние не попадают.
#[derive(Debug, Clone)]
pub(crate) struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub(crate) fn track() -> Self {
        let flag = Arc::new(AtomicBool::new(true));
        on_cleanup({
            let flag = Arc::clone(&flag);
            move || flag.store(false, Ordering::Relaxed)
        });
        Self(flag)
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
