//! # Host Normalization
//!
//! Derives the Host-header value sent on the wire from a raw input entry,
//! which may arrive whitespace-padded or URL-shaped (`https://host:port/`).

/// Normalizes a raw host entry into a Host-header value.
///
/// Trims surrounding whitespace and one trailing `/`, then reduces a
/// URL-shaped value to its authority (host plus port, userinfo dropped).
/// Plain hostnames pass through untouched; case is preserved.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let Some((_, rest)) = trimmed.split_once("://") else {
        return trimmed.to_string();
    };

    let authority = rest.split('/').next().unwrap_or(rest);
    let authority = authority.rsplit('@').next().unwrap_or(authority);

    authority.to_string()
}
