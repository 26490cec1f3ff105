//! Local persistence of the document being written.
//!
//! A document is identified by its page URL, which always carries a `key` query parameter so
//! that every fresh `/new` gets its own storage slot. Edits only flip a dirty flag; the text is
//! written out by a 10 second autosave loop and on page hide.

use crate::storage::{load_string, remove_key, save_string};
use crate::util::now_ms;
use leptos::ev;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos_dom::helpers::{set_interval_with_handle, window_event_listener};
use std::time::Duration;

pub(crate) const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(10);

const KEY_PARAM: &str = "key";

pub(crate) fn storage_key(page_url: &str) -> String {
    format!("notes|{page_url}")
}

/// Make sure the current URL has a document key and return the (possibly rewritten) URL.
fn ensure_document_url() -> Option<String> {
    let window = web_sys::window()?;
    let href = window.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;

    let params = url.search_params();
    if params.has(KEY_PARAM) {
        return Some(href);
    }

    params.set(KEY_PARAM, &now_ms().to_string());
    let next = url.href();
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&js_sys::Object::new(), "notes", Some(&next));
    }
    Some(next)
}

#[derive(Clone)]
pub(crate) struct DocumentStore {
    key: String,
    dirty: RwSignal<bool>,
}

impl DocumentStore {
    /// Resolve the document key for the current page. The URL is rewritten at most once.
    pub fn open() -> Self {
        let url = ensure_document_url().unwrap_or_default();
        Self::with_key(storage_key(&url))
    }

    pub(crate) fn with_key(key: String) -> Self {
        Self {
            key,
            dirty: RwSignal::new(false),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self) -> Option<String> {
        load_string(&self.key)
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get_untracked()
    }

    /// Write `text` if anything changed since the last write. Returns whether it wrote.
    pub fn flush(&self, text: &str) -> bool {
        if !self.is_dirty() {
            return false;
        }

        log!("saving document");
        if text.is_empty() {
            remove_key(&self.key);
        } else if !save_string(&self.key, text) {
            // Keep the flag so the next tick retries.
            warn!("failed to save document {}", self.key);
            return false;
        }

        self.dirty.set(false);
        true
    }

    /// Flush `text` every [`AUTOSAVE_INTERVAL`] and when the page is hidden.
    ///
    /// Both hooks are torn down with the calling reactive owner.
    pub fn start_autosave(&self, text: RwSignal<String>) {
        let store = self.clone();
        match set_interval_with_handle(
            move || {
                store.flush(&text.get_untracked());
            },
            AUTOSAVE_INTERVAL,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(_) => warn!("autosave timer unavailable; saving on page hide only"),
        }

        let store = self.clone();
        let pagehide = window_event_listener(ev::pagehide, move |_ev: web_sys::PageTransitionEvent| {
            store.flush(&text.get_untracked());
        });
        on_cleanup(move || pagehide.remove());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key() {
        assert_eq!(
            storage_key("http://localhost:9999/new?key=1700000000000"),
            "notes|http://localhost:9999/new?key=1700000000000"
        );
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_open_adds_key_param_once() {
        let first = DocumentStore::open();
        assert!(first.key().starts_with("notes|"));
        assert!(first.key().contains("key="));

        // The URL now carries the key, so the same slot is resolved again.
        let second = DocumentStore::open();
        assert_eq!(first.key(), second.key());
    }

    #[wasm_bindgen_test]
    fn test_flush_only_when_dirty() {
        let store = DocumentStore::with_key(storage_key("test://flush"));
        remove_key(store.key());

        assert!(!store.flush("ignored"));
        assert_eq!(store.load(), None);

        store.mark_dirty();
        assert!(store.flush("# Draft\ntext"));
        assert!(!store.is_dirty());
        assert_eq!(store.load().as_deref(), Some("# Draft\ntext"));

        store.mark_dirty();
        assert!(store.flush(""));
        assert_eq!(store.load(), None);
    }
}
