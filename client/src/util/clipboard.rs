//! Clipboard writes for shareable verification links.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("Área de transferência indisponível neste navegador.")]
    Unavailable,
    #[error("Não foi possível copiar o link: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns [`ClipboardError::Unavailable`] outside a browser or when the
/// clipboard API is missing, and [`ClipboardError::Rejected`] when the
/// browser refuses the write (permissions, insecure context).
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let navigator = window.navigator();
        require_api(js_sys::Reflect::has(&navigator, &wasm_bindgen::JsValue::from_str("clipboard")))?;
        wasm_bindgen_futures::JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}

/// Map a feature-detection result to `Ok` only when the API is present.
///
/// Insecure contexts omit `navigator.clipboard`; a failed lookup counts the
/// same as a missing property.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn require_api<E>(detected: Result<bool, E>) -> Result<(), ClipboardError> {
    match detected {
        Ok(true) => Ok(()),
        _ => Err(ClipboardError::Unavailable),
    }
}
