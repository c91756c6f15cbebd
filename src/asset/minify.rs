//! Asset minification for JS and CSS files.
//!
//! Uses oxc for JavaScript and lightningcss for CSS. [`Minifier`] gathers
//! any number of sources and emits one minified destination file.

use std::fs;
use std::path::{Path, PathBuf};

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier as OxcMinifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use super::{AssetError, AssetKind, write::write_atomic};
use crate::{debug, log};

/// Minify JavaScript source code.
///
/// Sources are loaded through `<script src>`, so they are parsed as classic
/// scripts: top-level declarations are globals and are neither dropped nor
/// renamed.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::script();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions {
            top_level: Some(false),
            ..MangleOptions::default()
        }),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = OxcMinifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Minify content for an asset kind.
///
/// Returns `Some(minified)` if minification succeeded, `None` otherwise.
pub fn minify_source(kind: AssetKind, content: &str) -> Option<String> {
    match kind {
        AssetKind::Js => minify_js(content),
        AssetKind::Css => minify_css(content),
    }
}

/// Accumulates sources of one kind and writes them minified as one file.
///
/// # Example
/// ```ignore
/// let mut minifier = Minifier::new(AssetKind::Css);
/// minifier.add("public/css/a.css").add("public/css/b.css");
/// minifier.minify(Path::new("public/css/compiled/site.css"))?;
/// ```
#[derive(Debug, Clone)]
pub struct Minifier {
    kind: AssetKind,
    sources: Vec<PathBuf>,
}

impl Minifier {
    pub fn new(kind: AssetKind) -> Self {
        Self {
            kind,
            sources: Vec::new(),
        }
    }

    /// Queue a source file. Order is preserved.
    pub fn add(&mut self, source: impl Into<PathBuf>) -> &mut Self {
        self.sources.push(source.into());
        self
    }

    /// Minify all queued sources into `destination`.
    ///
    /// Sources are joined with the kind's bundle separator before minifying.
    /// If the minifier rejects the input, the joined source is written as-is.
    pub fn minify(&self, destination: &Path) -> Result<(), AssetError> {
        let mut combined = String::new();
        for source in &self.sources {
            let content = fs::read_to_string(source)
                .map_err(|err| AssetError::Io(source.clone(), err))?;
            combined.push_str(self.kind.separator());
            combined.push_str(&content);
        }

        let output = minify_source(self.kind, &combined).unwrap_or_else(|| {
            log!("warning"; "could not minify {}, writing unminified", destination.display());
            combined.clone()
        });

        debug!(
            "minify";
            "{} source(s) -> {} ({} -> {} bytes)",
            self.sources.len(),
            destination.display(),
            combined.len(),
            output.len()
        );
        write_atomic(destination, output.as_bytes())
    }
}
