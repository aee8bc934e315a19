use super::*;

#[test]
fn encode_component_keeps_unreserved_characters() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_url_syntax() {
    assert_eq!(
        encode_component("https://selo.fiea.org.br/verificar/issued-001?x=1&y=2"),
        "https%3A%2F%2Fselo.fiea.org.br%2Fverificar%2Fissued-001%3Fx%3D1%26y%3D2"
    );
    assert_eq!(encode_component("a b"), "a%20b");
}

#[test]
fn encode_component_escapes_utf8_bytes() {
    assert_eq!(encode_component("ç"), "%C3%A7");
}

#[test]
fn verification_url_appends_badge_id() {
    assert_eq!(verification_url("issued-001"), "https://selo.fiea.org.br/verificar/issued-001");
}

#[test]
fn qr_image_url_sets_size_and_encoded_data() {
    let url = qr_image_url("https://selo.fiea.org.br/verificar/issued-001", 150);
    assert_eq!(
        url,
        "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data=https%3A%2F%2Fselo.fiea.org.br%2Fverificar%2Fissued-001"
    );
}

#[test]
fn qr_download_url_requests_attachment() {
    let url = qr_download_url("abc", DEFAULT_QR_SIZE);
    assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=abc"));
    assert!(url.ends_with("&download=1"));
}

#[test]
fn qr_file_name_uses_badge_id() {
    assert_eq!(qr_file_name("issued-002"), "selo-issued-002.png");
}
