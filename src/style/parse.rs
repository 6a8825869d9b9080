//! Textual front-ends for the geometry resolvers.
//!
//! The inputs are live style values copied out of a UI tree; a malformed
//! token degrades to a renderable zero instead of failing the outline.

use crate::geometry::{CornerRadius, Rect};
use crate::math::Point2;

/// Parses a CSS-ish length token against a `relative` basis.
///
/// A `%` suffix resolves to that fraction of `relative`; anything else
/// uses the first embedded signed decimal number and ignores unit suffixes
/// (`"12px"` → 12). Malformed or non-finite tokens resolve to 0.
#[must_use]
pub fn parse_length(token: &str, relative: f64) -> f64 {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(percent) = trimmed.strip_suffix('%') {
        return match percent.trim_end().parse::<f64>() {
            Ok(value) if value.is_finite() => value / 100.0 * relative,
            _ => 0.0,
        };
    }
    embedded_number(trimmed).unwrap_or(0.0)
}

/// Parses an outline-width token: a plain CSS length, or one of the
/// keyword widths `thin` (1), `medium` (3), `thick` (5). Unknown tokens
/// resolve to 0.
#[must_use]
pub fn parse_css_length(token: &str) -> f64 {
    let trimmed = token.trim();
    let starts_numeric = trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.');
    if starts_numeric {
        if let Some(value) = embedded_number(trimmed) {
            return value;
        }
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "thin" => 1.0,
        "medium" => 3.0,
        "thick" => 5.0,
        _ => 0.0,
    }
}

/// Parses a corner-radius declaration: one or two length tokens, the
/// vertical radius defaulting to the horizontal one. Percentages resolve
/// against `width` and `height` respectively.
#[must_use]
pub fn parse_corner_radius(text: &str, width: f64, height: f64) -> CornerRadius {
    let mut parts = text.split_whitespace();
    let first = parts.next().unwrap_or("");
    let second = parts.next().unwrap_or(first);
    CornerRadius::new(parse_length(first, width), parse_length(second, height))
}

/// Parses a `polygon(...)` clip descriptor into absolute vertices over the
/// target rect.
///
/// An optional `nonzero`/`evenodd` fill-rule prefix is skipped up to its
/// trailing comma. Each vertex is two length tokens resolved against the
/// rect's width and height; vertices missing a coordinate are dropped.
/// Returns `None` unless at least three vertices survive, in which case
/// callers fall back to rect geometry.
#[must_use]
pub fn parse_clip_polygon(text: &str, rect: &Rect) -> Option<Vec<Point2>> {
    let trimmed = text.trim();
    let open = trimmed.to_ascii_lowercase().find("polygon(")?;
    let rest = &trimmed[open + "polygon(".len()..];
    let close = rest.rfind(')')?;
    let mut content = rest[..close].trim();

    let lowered = content.to_ascii_lowercase();
    if lowered.starts_with("nonzero") || lowered.starts_with("evenodd") {
        let comma = content.find(',')?;
        content = content[comma + 1..].trim();
    }

    let mut points = Vec::new();
    for raw in content.split(',') {
        let mut tokens = raw.split_whitespace();
        let (Some(raw_x), Some(raw_y)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        let x = rect.x + parse_length(raw_x, rect.width);
        let y = rect.y + parse_length(raw_y, rect.height);
        points.push(Point2::new(x, y));
    }

    (points.len() >= 3).then_some(points)
}

/// Extracts the first signed decimal number embedded in `token`
/// (`"12.5px"` → 12.5, `"calc(3)"` → 3). Returns `None` when no digits are
/// present or the value does not parse to a finite number.
fn embedded_number(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let first_digit = bytes.iter().position(u8::is_ascii_digit)?;

    let mut start = first_digit;
    let mut seen_dot = false;
    if start > 0 && bytes[start - 1] == b'.' {
        start -= 1;
        seen_dot = true;
    }
    if start > 0 && bytes[start - 1] == b'-' {
        start -= 1;
    }

    let mut end = first_digit;
    while end < bytes.len() {
        let b = bytes[end];
        if b.is_ascii_digit() {
            end += 1;
        } else if b == b'.' && !seen_dot && end + 1 < bytes.len() && bytes[end + 1].is_ascii_digit()
        {
            seen_dot = true;
            end += 1;
        } else {
            break;
        }
    }

    token
        .get(start..end)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── parse_length ──

    #[test]
    fn length_percent() {
        assert!((parse_length("50%", 80.0) - 40.0).abs() < TOL);
        assert!((parse_length("-25%", 80.0) + 20.0).abs() < TOL);
        assert!(parse_length("oops%", 80.0).abs() < TOL);
    }

    #[test]
    fn length_with_unit_suffix() {
        assert!((parse_length("30px", 100.0) - 30.0).abs() < TOL);
        assert!((parse_length("  12.5em ", 100.0) - 12.5).abs() < TOL);
        assert!((parse_length("-4px", 100.0) + 4.0).abs() < TOL);
    }

    #[test]
    fn length_malformed_is_zero() {
        assert!(parse_length("", 100.0).abs() < TOL);
        assert!(parse_length("auto", 100.0).abs() < TOL);
        assert!(parse_length("--", 100.0).abs() < TOL);
    }

    // ── parse_css_length ──

    #[test]
    fn css_length_keywords() {
        assert!((parse_css_length("thin") - 1.0).abs() < TOL);
        assert!((parse_css_length("Medium") - 3.0).abs() < TOL);
        assert!((parse_css_length("THICK") - 5.0).abs() < TOL);
        assert!(parse_css_length("chunky").abs() < TOL);
    }

    #[test]
    fn css_length_numbers_win_over_keywords() {
        assert!((parse_css_length("4px") - 4.0).abs() < TOL);
        assert!((parse_css_length("0.5") - 0.5).abs() < TOL);
    }

    // ── parse_corner_radius ──

    #[test]
    fn corner_radius_single_token_applies_to_both() {
        let r = parse_corner_radius("30px", 120.0, 80.0);
        assert!((r.x - 30.0).abs() < TOL);
        assert!((r.y - 30.0).abs() < TOL);
    }

    #[test]
    fn corner_radius_two_tokens_with_percent() {
        let r = parse_corner_radius("10% 25%", 200.0, 80.0);
        assert!((r.x - 20.0).abs() < TOL);
        assert!((r.y - 20.0).abs() < TOL);
    }

    #[test]
    fn corner_radius_negative_clamps_to_zero() {
        let r = parse_corner_radius("-5px", 100.0, 100.0);
        assert!(r.x.abs() < TOL);
        assert!(r.y.abs() < TOL);
    }

    // ── parse_clip_polygon ──

    fn rect() -> Rect {
        Rect::new(50.0, 75.0, 80.0, 80.0)
    }

    #[test]
    fn clip_polygon_triangle() {
        let points = parse_clip_polygon("polygon(50% 0%, 100% 100%, 0% 100%)", &rect()).unwrap();
        assert_eq!(points.len(), 3);
        assert!((points[0].x - 90.0).abs() < TOL);
        assert!((points[0].y - 75.0).abs() < TOL);
        assert!((points[1].x - 130.0).abs() < TOL);
        assert!((points[1].y - 155.0).abs() < TOL);
        assert!((points[2].x - 50.0).abs() < TOL);
    }

    #[test]
    fn clip_polygon_skips_fill_rule_prefix() {
        let points =
            parse_clip_polygon("polygon(evenodd, 0% 0%, 100% 0%, 50% 100%)", &rect()).unwrap();
        assert_eq!(points.len(), 3);
        assert!((points[0].x - 50.0).abs() < TOL);
    }

    #[test]
    fn clip_polygon_mixed_units() {
        let points =
            parse_clip_polygon("polygon(0px 0px, 40px 0px, 40px 40px)", &rect()).unwrap();
        assert!((points[1].x - 90.0).abs() < TOL);
        assert!((points[2].y - 115.0).abs() < TOL);
    }

    #[test]
    fn clip_polygon_drops_incomplete_vertices() {
        // The lone `25%` vertex is skipped; three good vertices remain.
        let points =
            parse_clip_polygon("polygon(0% 0%, 25%, 100% 0%, 50% 100%)", &rect()).unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn clip_polygon_rejects_too_few_vertices() {
        assert!(parse_clip_polygon("polygon(0% 0%, 100% 100%)", &rect()).is_none());
        assert!(parse_clip_polygon("polygon()", &rect()).is_none());
    }

    #[test]
    fn clip_polygon_rejects_other_shapes() {
        assert!(parse_clip_polygon("circle(50%)", &rect()).is_none());
        assert!(parse_clip_polygon("none", &rect()).is_none());
    }
}
