//! Public entry point: tags for single files and bundles.
//!
//! ```text
//! get_style("a.css")                 → builder(kind, mode).build_single
//! get_styles_multi([a, b], "out")    → CompiledAsset → build_compiled
//!                   (debug)          → one plain tag per file
//! ```
//!
//! The mode is `Minified` only when `minify` is on and `debug` is off.

use crate::asset::{Asset, AssetError, AssetKind, CompiledAsset};
use crate::config::AssetConfig;
use crate::debug;
use crate::output::{Attrs, Mode, builder};

/// Renders script and stylesheet tags for one site configuration.
#[derive(Debug, Clone)]
pub struct AssetCompiler {
    config: AssetConfig,
}

impl AssetCompiler {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// `<script>` tag for one file under the js folder.
    pub fn get_script(&self, file: &str, attrs: &Attrs) -> Result<String, AssetError> {
        self.get_single(AssetKind::Js, file, attrs)
    }

    /// `<link>` tag for one file under the css folder.
    pub fn get_style(&self, file: &str, attrs: &Attrs) -> Result<String, AssetError> {
        self.get_single(AssetKind::Css, file, attrs)
    }

    /// One `<script>` tag for `files` bundled into `out_file`.
    pub fn get_scripts_multi<S: AsRef<str>>(
        &self,
        files: &[S],
        out_file: &str,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        self.get_multi(AssetKind::Js, files, out_file, attrs)
    }

    /// One `<link>` tag for `files` bundled into `out_file`.
    pub fn get_styles_multi<S: AsRef<str>>(
        &self,
        files: &[S],
        out_file: &str,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        self.get_multi(AssetKind::Css, files, out_file, attrs)
    }

    pub fn get_single(
        &self,
        kind: AssetKind,
        file: &str,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        let asset = Asset::new(&self.config, kind, file)?;
        builder(kind, Mode::for_config(&self.config)).build_single(&self.config, asset, attrs)
    }

    /// Bundle `files` into `out_file`, or in debug mode emit one tag per file.
    ///
    /// Every source is resolved before the output is touched, so a missing
    /// file aborts without writing anything.
    pub fn get_multi<S: AsRef<str>>(
        &self,
        kind: AssetKind,
        files: &[S],
        out_file: &str,
        attrs: &Attrs,
    ) -> Result<String, AssetError> {
        let builder = builder(kind, Mode::for_config(&self.config));

        if self.config.debug() {
            debug!("debug"; "{} file(s) for {} left unbundled", files.len(), out_file);
            let assets = Asset::resolve_all(&self.config, kind, files)?;
            return Ok(builder.build_compiled_debug(&assets, attrs));
        }

        let mut compiled = CompiledAsset::resolve(&self.config, kind, out_file, files)?;
        builder.build_compiled(&mut compiled, attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{now_secs, set_mtime, test_site};
    use crate::freshness::stat_output;
    use std::fs;

    fn mtime_of(config: &AssetConfig, relative: &str) -> u64 {
        stat_output(&config.root().join(relative)).mtime
    }

    #[test]
    fn test_single_style() {
        let (_dir, config) = test_site();
        let version = mtime_of(&config, "css/test1.css");
        let compiler = AssetCompiler::new(config);

        let out = compiler.get_style("test1.css", &[]).unwrap();

        assert_eq!(
            out,
            format!(r#"<link href="/css/test1.css?v={version}" rel="stylesheet" />"#)
        );
    }

    #[test]
    fn test_single_script_with_attrs() {
        let (_dir, config) = test_site();
        let version = mtime_of(&config, "js/test1.js");
        let compiler = AssetCompiler::new(config.with_http_root("/static"));

        let out = compiler
            .get_script("test1.js", &[("defer", "defer"), ("data-x", "a\"b")])
            .unwrap();

        assert_eq!(
            out,
            format!(
                r#"<script src="/static/js/test1.js?v={version}" defer="defer" data-x="a&quot;b"></script>"#
            )
        );
    }

    #[test]
    fn test_missing_single() {
        let (_dir, config) = test_site();
        let compiler = AssetCompiler::new(config.clone());

        let err = compiler.get_style("nope.css", &[]).unwrap_err();
        assert!(matches!(err, AssetError::ResourceMissing(_)));

        let compiler = AssetCompiler::new(config.with_ignore_missing(true));
        let out = compiler.get_style("nope.css", &[]).unwrap();
        assert_eq!(out, r#"<link href="/css/nope.css?v=0" rel="stylesheet" />"#);
    }

    #[test]
    fn test_styles_multi_bundle() {
        let (dir, config) = test_site();
        let version = mtime_of(&config, "css/test1.css");
        let compiler = AssetCompiler::new(config);

        let out = compiler
            .get_styles_multi(&["test1.css", "test2.css"], "bundle.css", &[])
            .unwrap();

        assert_eq!(
            out,
            format!(r#"<link href="/css/compiled/bundle.css?v={version}" rel="stylesheet" />"#)
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("css/compiled/bundle.css")).unwrap(),
            " body{background:#fff;} div.full{width:100%;}"
        );
    }

    #[test]
    fn test_bundle_not_recreated() {
        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config);
        let files = ["test1.css", "test2.css"];
        let output = dir.path().join("css/compiled/bundle.css");

        let first = compiler.get_styles_multi(&files, "bundle.css", &[]).unwrap();
        let stamp = now_secs() - 500;
        set_mtime(&output, stamp);

        let second = compiler.get_styles_multi(&files, "bundle.css", &[]).unwrap();

        assert_eq!(first, second);
        assert_eq!(stat_output(&output).mtime, stamp);
    }

    #[test]
    fn test_bundle_rebuilt_after_touch() {
        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config);
        let files = ["test1.css", "test2.css"];
        let output = dir.path().join("css/compiled/bundle.css");

        compiler.get_styles_multi(&files, "bundle.css", &[]).unwrap();
        set_mtime(&output, now_secs() - 500);
        let touched = now_secs() - 100;
        set_mtime(&dir.path().join("css/test2.css"), touched);

        let out = compiler.get_styles_multi(&files, "bundle.css", &[]).unwrap();

        assert!(out.contains(&format!("?v={touched}")));
        assert!(stat_output(&output).mtime > now_secs() - 500);
    }

    #[test]
    fn test_scripts_multi_bundle() {
        let (dir, config) = test_site();
        let version = mtime_of(&config, "js/test1.js");
        let compiler = AssetCompiler::new(config);

        let out = compiler
            .get_scripts_multi(&["test1.js", "test2.js"], "all.js", &[("async", "async")])
            .unwrap();

        assert_eq!(
            out,
            format!(r#"<script src="/js/compiled/all.js?v={version}" async="async"></script>"#)
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("js/compiled/all.js")).unwrap(),
            "\n;console.log(\"one\");\n;console.log(\"two\");"
        );
    }

    #[test]
    fn test_alternate_compiled_folder() {
        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config.with_compiled_folder("alternatecompiledfolder"));

        compiler
            .get_styles_multi(&["test1.css", "test2.css"], "bundle.css", &[])
            .unwrap();

        assert!(dir.path().join("css/alternatecompiledfolder/bundle.css").is_file());
        assert!(!dir.path().join("css/compiled").exists());
    }

    #[test]
    fn test_empty_compiled_folder() {
        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config.with_compiled_folder(""));

        let out = compiler
            .get_styles_multi(&["test1.css"], "bundle.css", &[])
            .unwrap();

        assert!(out.starts_with(r#"<link href="/css/bundle.css?v="#));
        assert!(dir.path().join("css/bundle.css").is_file());
    }

    #[test]
    fn test_alternate_css_path() {
        let (dir, config) = test_site();
        let version = mtime_of(&config, "alternatecssfoldername/test3.css");
        let compiler = AssetCompiler::new(config.with_css_path("alternatecssfoldername"));

        let out = compiler
            .get_styles_multi(&["test3.css", "test4.css"], "bundle.css", &[])
            .unwrap();

        assert_eq!(
            out,
            format!(
                r#"<link href="/alternatecssfoldername/compiled/bundle.css?v={version}" rel="stylesheet" />"#
            )
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("alternatecssfoldername/compiled/bundle.css"))
                .unwrap(),
            " p{margin:0;} a{color:red;}"
        );
    }

    #[test]
    fn test_multi_missing_writes_nothing() {
        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config);

        let err = compiler
            .get_styles_multi(&["test1.css", "nope.css"], "bundle.css", &[])
            .unwrap_err();

        assert!(matches!(err, AssetError::ResourceMissing(_)));
        assert!(!dir.path().join("css/compiled/bundle.css").exists());
    }

    #[test]
    fn test_multi_missing_ignored() {
        let (dir, config) = test_site();
        let version = mtime_of(&config, "css/test1.css");
        let compiler = AssetCompiler::new(config.with_ignore_missing(true));

        let out = compiler
            .get_styles_multi(&["nope.css", "test1.css"], "bundle.css", &[])
            .unwrap();

        assert!(out.contains(&format!("?v={version}")));
        assert_eq!(
            fs::read_to_string(dir.path().join("css/compiled/bundle.css")).unwrap(),
            " body{background:#fff;}"
        );
    }

    #[test]
    fn test_debug_multi() {
        let (dir, config) = test_site();
        let v1 = mtime_of(&config, "css/test1.css");
        let v2 = mtime_of(&config, "css/test2.css");
        let compiler = AssetCompiler::new(config.with_debug(true).with_minify(true));

        let out = compiler
            .get_styles_multi(&["test2.css", "test1.css"], "bundle.css", &[])
            .unwrap();

        assert_eq!(
            out,
            format!(
                "<link href=\"/css/test2.css?v={v2}\" rel=\"stylesheet\" />\n<link href=\"/css/test1.css?v={v1}\" rel=\"stylesheet\" />\n"
            )
        );
        assert!(!dir.path().join("css/compiled").exists());
    }

    #[test]
    fn test_debug_overrides_minify_single() {
        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config.with_debug(true).with_minify(true));

        let out = compiler.get_style("test1.css", &[]).unwrap();

        assert!(out.starts_with(r#"<link href="/css/test1.css?v="#));
        assert!(!dir.path().join("css/compiled").exists());
    }

    #[test]
    fn test_minified_single_style() {
        let (dir, config) = test_site();
        let version = mtime_of(&config, "css/test1.css");
        let compiler = AssetCompiler::new(config.with_minify(true));

        let out = compiler.get_style("test1.css", &[]).unwrap();

        assert_eq!(
            out,
            format!(r#"<link href="/css/compiled/test1.min.css?v={version}" rel="stylesheet" />"#)
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("css/compiled/test1.min.css")).unwrap(),
            "body{background:#fff}"
        );
    }

    #[test]
    fn test_minified_styles_multi() {
        let (dir, config) = test_site();
        let version = mtime_of(&config, "css/test1.css");
        let compiler = AssetCompiler::new(config.with_minify(true));

        let out = compiler
            .get_styles_multi(&["test1.css", "test2.css"], "compiledCss.css", &[])
            .unwrap();

        assert_eq!(
            out,
            format!(r#"<link href="/css/compiled/compiledCss.css?v={version}" rel="stylesheet" />"#)
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("css/compiled/compiledCss.css")).unwrap(),
            "body{background:#fff}div.full{width:100%}"
        );
    }

    #[test]
    fn test_minified_missing_ignored() {
        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config.with_minify(true).with_ignore_missing(true));

        let out = compiler.get_script("nope.js", &[]).unwrap();

        assert_eq!(out, r#"<script src="/js/compiled/nope.min.js?v=0"></script>"#);
        assert!(!dir.path().join("js/compiled/nope.min.js").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_outputs_readable_like_sources() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, config) = test_site();
        let compiler = AssetCompiler::new(config.with_minify(true));
        compiler
            .get_styles_multi(&["test1.css", "test2.css"], "bundle.css", &[])
            .unwrap();
        compiler.get_style("test1.css", &[]).unwrap();

        let mode = |relative: &str| {
            fs::metadata(dir.path().join(relative)).unwrap().permissions().mode() & 0o777
        };
        let source = mode("css/test1.css");
        assert_eq!(mode("css/compiled/bundle.css"), source);
        assert_eq!(mode("css/compiled/test1.min.css"), source);
    }

    #[test]
    fn test_minified_script_keeps_globals() {
        let (dir, config) = test_site();
        fs::write(
            dir.path().join("js/lib.js"),
            "function initPage(){ document.title = 'x'; }\nvar SETTINGS = {a:1};\n",
        )
        .unwrap();
        let compiler = AssetCompiler::new(config.with_minify(true));

        let out = compiler.get_script("lib.js", &[]).unwrap();

        assert!(out.starts_with(r#"<script src="/js/compiled/lib.min.js?v="#));
        let minified = fs::read_to_string(dir.path().join("js/compiled/lib.min.js")).unwrap();
        assert!(minified.contains("initPage"), "got: {minified}");
        assert!(minified.contains("SETTINGS"), "got: {minified}");
    }
}
