//! Browser integration

use leptos::logging;
use storefront::store::{KeyValueStore, StoreError};
use web_sys::Storage;

/// Cart storage backed by the window's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;

        window
            .local_storage()
            .map_err(|error| StoreError::Backend(format!("{error:?}")))?
            .ok_or(StoreError::Unavailable)
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|error| StoreError::Backend(format!("{error:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|error| StoreError::Backend(format!("{error:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|error| StoreError::Backend(format!("{error:?}")))
    }
}

/// Show a blocking notice.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        logging::warn!("no window to show notice: {message}");
        return;
    };

    if let Err(error) = window.alert_with_message(message) {
        logging::error!("failed to show notice: {error:?}");
    }
}

/// Navigate the current page to `url`.
pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        logging::warn!("no window to navigate to {url}");
        return;
    };

    if let Err(error) = window.location().set_href(url) {
        logging::error!("failed to navigate to {url}: {error:?}");
    }
}
