//! Browser `localStorage` token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs `forms::Session` in the browser. The token lives under the fixed
//! `accessToken` key and is read fresh on every access, so a token saved by
//! another tab or page is picked up on the next submit.

use forms::{ACCESS_TOKEN_KEY, StorageError, TokenStore};

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokens;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| StorageError("localStorage unavailable".to_owned()))
}

#[cfg(feature = "csr")]
fn js_error(error: wasm_bindgen::JsValue) -> StorageError {
    StorageError(error.as_string().unwrap_or_else(|| format!("{error:?}")))
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().ok()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(ACCESS_TOKEN_KEY, token).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError(format!("cannot store {ACCESS_TOKEN_KEY} outside the browser")))
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(ACCESS_TOKEN_KEY).map_err(js_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
