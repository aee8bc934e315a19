#![cfg(not(feature = "hydrate"))]

use super::*;

#[tokio::test]
async fn copy_text_is_unavailable_outside_browser() {
    assert_eq!(copy_text("https://selo.fiea.org.br").await, Err(ClipboardError::Unavailable));
}

#[test]
fn errors_render_inline_messages() {
    assert_eq!(ClipboardError::Unavailable.to_string(), "Área de transferência indisponível neste navegador.");
    assert_eq!(
        ClipboardError::Rejected("NotAllowedError".to_owned()).to_string(),
        "Não foi possível copiar o link: NotAllowedError"
    );
}

#[test]
fn require_api_accepts_only_a_detected_api() {
    assert_eq!(require_api::<()>(Ok(true)), Ok(()));
    assert_eq!(require_api::<()>(Ok(false)), Err(ClipboardError::Unavailable));
    assert_eq!(require_api(Err("lookup threw")), Err(ClipboardError::Unavailable));
}
