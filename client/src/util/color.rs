//! Shared color helpers for category accents.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse a `#rrggbb` value into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Translucent `rgba(...)` form of a hex color.
///
/// `opacity` is clamped to `0.0..=1.0`. Unparseable input falls back to
/// neutral grey so a bad table entry still renders.
pub fn with_alpha(hex: &str, opacity: f32) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((117, 117, 117));
    let a = opacity.clamp(0.0, 1.0);
    format!("rgba({r}, {g}, {b}, {a})")
}

/// Inline `style` declaring the CSS custom properties a category card or
/// header reads for its accent, tint and hover gradient.
pub fn accent_style(color: &str, gradient: &str) -> String {
    format!(
        "--accent: {color}; --accent-gradient: {gradient}; --accent-tint-strong: {}; --accent-tint: {}; \
         --accent-border: {}; --accent-shadow: {};",
        with_alpha(color, 0.1),
        with_alpha(color, 0.05),
        with_alpha(color, 0.2),
        with_alpha(color, 0.3),
    )
}
