//! Global results state: one store signal, written only through [`dispatch`].

use dioxus::prelude::*;
use trademarks_core::{Action, ClientConfig, Store};

use crate::INITIAL_CONFIG;

/// The results store — loading flag, hits, filters.
pub static STORE: GlobalSignal<Store> = Signal::global(Store::new);

/// Apply one action to the store; the filtered list is rebuilt inside.
pub fn dispatch(action: Action) {
    STORE.write().dispatch(action);
}

/// Config stored before launch, or defaults. Left in place so a retry
/// fetches against the same backend.
pub fn initial_config() -> ClientConfig {
    INITIAL_CONFIG
        .lock()
        .ok()
        .and_then(|slot| slot.clone())
        .unwrap_or_default()
}
