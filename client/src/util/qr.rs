//! Verification links and QR image URLs for issued badges.
//!
//! SYSTEM CONTEXT
//! ==============
//! QR rendering is delegated to a public image endpoint; this module only
//! builds the URLs the badge card points at.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use std::fmt::Write as _;

pub const VERIFY_BASE_URL: &str = "https://selo.fiea.org.br/verificar";
pub const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const DEFAULT_QR_SIZE: u32 = 200;

/// Public page where third parties confirm an issued badge.
#[must_use]
pub fn verification_url(digital_badge_id: &str) -> String {
    format!("{VERIFY_BASE_URL}/{}", encode_component(digital_badge_id))
}

/// Image URL for a square QR code of `size` pixels encoding `data`.
#[must_use]
pub fn qr_image_url(data: &str, size: u32) -> String {
    format!("{QR_ENDPOINT}?size={size}x{size}&data={}", encode_component(data))
}

/// Same image as [`qr_image_url`], served as an attachment.
#[must_use]
pub fn qr_download_url(data: &str, size: u32) -> String {
    format!("{}&download=1", qr_image_url(data, size))
}

/// Suggested file name for a downloaded QR image.
#[must_use]
pub fn qr_file_name(digital_badge_id: &str) -> String {
    format!("selo-{digital_badge_id}.png")
}

/// Percent-encode a query/path component with `encodeURIComponent` rules.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}
