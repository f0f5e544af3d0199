// active-chat-core/active-chat-core-client
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Deterministic gradient avatars. Profile images are never uploaded or
//! stored anywhere — every client derives the same two-color gradient from a
//! participant's identifier on the fly.

use std::borrow::Cow;

use base64::{engine::general_purpose, Engine as _};
use strum_macros::{Display, EnumString};

pub use color::{gradient_colors, HslColor};

mod color;

#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase")]
pub enum AvatarVariant {
    #[default]
    Linear,
    Radial,
    Diagonal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvatarOptions {
    pub size: u32,
    pub variant: AvatarVariant,
    pub show_initials: bool,
    /// Defaults to 40% of `size` when unset.
    pub font_size: Option<f32>,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        AvatarOptions {
            size: 128,
            variant: AvatarVariant::default(),
            show_initials: true,
            font_size: None,
        }
    }
}

/// Renders a circular gradient avatar as a self-contained
/// `data:image/svg+xml;base64,…` URI ready for direct embedding. Identical
/// arguments produce byte-identical output.
pub fn generate_gradient_avatar(
    identifier: &str,
    display_name: Option<&str>,
    options: &AvatarOptions,
) -> String {
    let (color1, color2) = gradient_colors(identifier);
    let size = options.size;
    let gradient_id = format!("grad-{identifier}");

    let gradient_def = match options.variant {
        AvatarVariant::Linear => format!(
            r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="{color1}"/><stop offset="100%" stop-color="{color2}"/></linearGradient>"#,
            id = xml_escape(&gradient_id),
        ),
        AvatarVariant::Diagonal => format!(
            r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="{color1}"/><stop offset="100%" stop-color="{color2}"/></linearGradient>"#,
            id = xml_escape(&gradient_id),
        ),
        AvatarVariant::Radial => format!(
            r#"<radialGradient id="{id}" cx="50%" cy="50%" r="50%"><stop offset="0%" stop-color="{color1}"/><stop offset="100%" stop-color="{color2}"/></radialGradient>"#,
            id = xml_escape(&gradient_id),
        ),
    };

    let text_element = if options.show_initials {
        let font_size = options.font_size.unwrap_or(size as f32 * 0.4);
        format!(
            r#"<text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" fill="white" font-family="system-ui, sans-serif" font-size="{font_size}" font-weight="600">{initials}</text>"#,
            initials = xml_escape(&initials(identifier, display_name)),
        )
    } else {
        String::new()
    };

    let svg = format!(
        r#"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg"><defs>{gradient_def}</defs><circle cx="50%" cy="50%" r="50%" fill="url(#{id})"/>{text_element}</svg>"#,
        id = xml_escape(&gradient_id),
    );

    format!(
        "data:image/svg+xml;base64,{}",
        general_purpose::STANDARD.encode(svg)
    )
}

/// The same gradient as a CSS `background-image` value, for surfaces that
/// style an element instead of embedding an image.
pub fn generate_gradient_background(identifier: &str, variant: AvatarVariant) -> String {
    let (color1, color2) = gradient_colors(identifier);

    match variant {
        AvatarVariant::Linear => format!("linear-gradient(90deg, {color1} 0%, {color2} 100%)"),
        AvatarVariant::Diagonal => format!("linear-gradient(135deg, {color1} 0%, {color2} 100%)"),
        AvatarVariant::Radial => format!("radial-gradient(circle, {color1} 0%, {color2} 100%)"),
    }
}

/// Up to two uppercase characters: the first letter of each of the first two
/// display-name tokens, the first two characters of a single token, or —
/// with no usable display name — the first two characters of the identifier.
fn initials(identifier: &str, display_name: Option<&str>) -> String {
    if let Some(name) = display_name {
        let tokens = name.split_whitespace().collect::<Vec<_>>();

        match tokens.len() {
            0 => {}
            1 => return tokens[0].chars().take(2).collect::<String>().to_uppercase(),
            _ => {
                return tokens
                    .iter()
                    .take(2)
                    .filter_map(|token| token.chars().next())
                    .collect::<String>()
                    .to_uppercase()
            }
        }
    }

    identifier.chars().take(2).collect::<String>().to_uppercase()
}

fn xml_escape(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|c| matches!(c, '&' | '<' | '>' | '"' | '\''))
    {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use base64::{engine::general_purpose, Engine as _};
    use pretty_assertions::assert_eq;

    use super::*;

    fn decoded_svg(data_uri: &str) -> String {
        let encoded = data_uri
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("Unexpected data URI prefix");
        String::from_utf8(general_purpose::STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("user-42", Some("Jane Doe")), "JD");
        assert_eq!(initials("user-42", Some("John")), "JO");
        assert_eq!(initials("user-42", Some("John Michael Doe")), "JM");
        assert_eq!(initials("user-42", Some("  John   Doe  ")), "JD");
        assert_eq!(initials("user-42", Some("   ")), "US");
        assert_eq!(initials("user-42", None), "US");
    }

    #[test]
    fn test_renders_initials_overlay() {
        let svg = decoded_svg(&generate_gradient_avatar(
            "user-42",
            Some("Jane Doe"),
            &AvatarOptions::default(),
        ));

        assert!(svg.contains(">JD</text>"), "got: {svg}");
        assert!(svg.contains(r#"width="128""#));
        assert!(svg.contains(r#"font-size="51.2""#));
        assert!(svg.contains("hsl(150, 75%, 55%)"));
        assert!(svg.contains("hsl(76, 70%, 45%)"));
    }

    #[test]
    fn test_output_is_byte_identical_across_calls() {
        let options = AvatarOptions::default();
        assert_eq!(
            generate_gradient_avatar("user-42", Some("Jane Doe"), &options),
            generate_gradient_avatar("user-42", Some("Jane Doe"), &options)
        );
    }

    #[test]
    fn test_different_initials_produce_different_images() {
        let options = AvatarOptions::default();
        assert_ne!(
            generate_gradient_avatar("user-42", Some("Jane Doe"), &options),
            generate_gradient_avatar("user-42", Some("John Smith"), &options)
        );
    }

    #[test]
    fn test_variants_produce_different_gradients() {
        let linear = AvatarOptions::default();
        let radial = AvatarOptions {
            variant: AvatarVariant::Radial,
            ..Default::default()
        };
        let diagonal = AvatarOptions {
            variant: AvatarVariant::Diagonal,
            ..Default::default()
        };

        let linear_svg = decoded_svg(&generate_gradient_avatar("user-42", None, &linear));
        let radial_svg = decoded_svg(&generate_gradient_avatar("user-42", None, &radial));
        let diagonal_svg = decoded_svg(&generate_gradient_avatar("user-42", None, &diagonal));

        assert!(linear_svg.contains("<linearGradient"));
        assert!(radial_svg.contains("<radialGradient"));
        assert!(diagonal_svg.contains(r#"y2="100%""#));
        assert_ne!(linear_svg, diagonal_svg);
    }

    #[test]
    fn test_escapes_hostile_identifiers() {
        let svg = decoded_svg(&generate_gradient_avatar(
            r#"a&b"<c>"#,
            None,
            &AvatarOptions::default(),
        ));
        assert!(svg.contains("grad-a&amp;b&quot;&lt;c&gt;"));
        assert!(!svg.contains(r#"b"<c"#));
    }

    #[test]
    fn test_empty_identifier_is_defined() {
        let svg = decoded_svg(&generate_gradient_avatar("", None, &AvatarOptions::default()));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("></text>") || svg.contains("<text"));
    }

    #[test]
    fn test_hides_initials_when_disabled() {
        let options = AvatarOptions {
            show_initials: false,
            ..Default::default()
        };
        let svg = decoded_svg(&generate_gradient_avatar("user-42", Some("Jane Doe"), &options));
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_variant_parses_from_str() {
        assert_eq!(
            AvatarVariant::from_str("radial").unwrap(),
            AvatarVariant::Radial
        );
        assert_eq!(AvatarVariant::Linear.to_string(), "linear");
    }

    #[test]
    fn test_gradient_background() {
        assert_eq!(
            generate_gradient_background("user-42", AvatarVariant::Diagonal),
            "linear-gradient(135deg, hsl(150, 75%, 55%) 0%, hsl(76, 70%, 45%) 100%)"
        );
    }
}
