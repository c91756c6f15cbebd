//! Markup rendering for script and stylesheet references.
//!
//! One convention for every code path:
//!
//! ```text
//! <script src="/js/app.js?v=1700000000" defer></script>
//! <link href="/css/site.css?v=1700000000" media="print" rel="stylesheet" />
//! ```

use std::fmt::Write;

use crate::asset::AssetKind;
use crate::utils::html::escape_attr;

/// Extra attributes in render order: `(name, value)`.
pub type Attrs<'a> = [(&'a str, &'a str)];

/// Render attributes as ` name="value"` pairs; empty input renders nothing.
pub fn render_attrs(attrs: &Attrs) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        // Writing to a String cannot fail
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
    out
}

/// Render the reference tag for `http_path` with a `?v=` version token.
pub fn render(kind: AssetKind, http_path: &str, version: u64, attrs: &Attrs) -> String {
    let attrs = render_attrs(attrs);
    match kind {
        AssetKind::Js => format!(r#"<script src="{http_path}?v={version}"{attrs}></script>"#),
        AssetKind::Css => {
            format!(r#"<link href="{http_path}?v={version}"{attrs} rel="stylesheet" />"#)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_attrs_empty() {
        assert_eq!(render_attrs(&[]), "");
    }

    #[test]
    fn test_render_attrs_order_and_escaping() {
        assert_eq!(
            render_attrs(&[("attr1", "some value"), ("data-x", "a\"b")]),
            r#" attr1="some value" data-x="a&quot;b""#
        );
    }

    #[test]
    fn test_render_script() {
        assert_eq!(
            render(AssetKind::Js, "/js/app.js", 42, &[]),
            r#"<script src="/js/app.js?v=42"></script>"#
        );
        assert_eq!(
            render(AssetKind::Js, "/js/app.js", 42, &[("defer", "defer")]),
            r#"<script src="/js/app.js?v=42" defer="defer"></script>"#
        );
    }

    #[test]
    fn test_render_style() {
        assert_eq!(
            render(AssetKind::Css, "/css/test1.css", 7, &[("attr1", "some value"), ("type", "text/css")]),
            r#"<link href="/css/test1.css?v=7" attr1="some value" type="text/css" rel="stylesheet" />"#
        );
        assert_eq!(
            render(AssetKind::Css, "/css/test1.css", 0, &[]),
            r#"<link href="/css/test1.css?v=0" rel="stylesheet" />"#
        );
    }
}
