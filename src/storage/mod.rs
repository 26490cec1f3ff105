//! Thin wrappers over `window.localStorage`.
//!
//! Every failure (no window, storage disabled, quota exceeded) is swallowed: the editor keeps
//! working in memory and the caller only sees `None` / `false`.

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub(crate) fn save_string(key: &str, value: &str) -> bool {
    local_storage()
        .map(|s| s.set_item(key, value).is_ok())
        .unwrap_or(false)
}

pub(crate) fn remove_key(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_string_roundtrip() {
        let key = "notes|test-storage-roundtrip";
        remove_key(key);
        assert_eq!(load_string(key), None);

        assert!(save_string(key, "# Title\nbody"));
        assert_eq!(load_string(key).as_deref(), Some("# Title\nbody"));

        remove_key(key);
        assert_eq!(load_string(key), None);
    }
}
