//! End-to-end tests: configuration, template files, regions and rendering.

use std::fs;
use std::path::Path;

use serde_json::json;
use tableau::{
    MiniJinjaEngine, OutputSink, RenderError, ViewCollection, ViewConfig, ViewContext,
    ViewDescriptor, ViewError, DEFAULT_REGION,
};
use tempfile::TempDir;

fn create_template_file(dir: &Path, relative_path: &str, content: &str) {
    let full_path = dir.join(relative_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(full_path, content).unwrap();
}

fn templates() -> TempDir {
    let dir = TempDir::new().unwrap();
    create_template_file(dir.path(), "header.tpl", "<header>{{ title }}</header>");
    create_template_file(dir.path(), "footer.tpl", "<footer>{{ year }}</footer>");
    dir
}

// ============================================================================
// Page composition
// ============================================================================

#[test]
fn test_header_string_footer_render_by_priority() {
    let dir = templates();
    let mut engine = MiniJinjaEngine::new();
    let config = ViewConfig::new([dir.path()], ".tpl");
    let mut views = ViewCollection::from_config(&config, &mut engine).unwrap();

    views
        .add("header", json!({"title": "Home"}), "main", 10)
        .unwrap()
        .add_string("MID", "main", 5)
        .add("footer", json!({"year": 2026}), "main", 20)
        .unwrap();

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    views.render("main", Some(&ctx), &mut sink).unwrap();

    assert_eq!(
        sink.contents(),
        Some("MID<header>Home</header><footer>2026</footer>")
    );
}

#[test]
fn test_render_buffered_equals_render() {
    let dir = templates();
    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".tpl"), &mut engine).unwrap();

    views
        .add("footer", json!({"year": 1999}), DEFAULT_REGION, 1)
        .unwrap()
        .add_callback(|| "cb".to_string(), json!({}), DEFAULT_REGION, 0)
        .add("header", json!({"title": "T"}), DEFAULT_REGION, 0)
        .unwrap();

    let ctx = ViewContext::new(&engine);

    let mut direct = OutputSink::memory();
    views.render(DEFAULT_REGION, Some(&ctx), &mut direct).unwrap();

    let mut sink = OutputSink::memory();
    let buffered = views
        .render_buffered(DEFAULT_REGION, Some(&ctx), &mut sink)
        .unwrap();

    assert_eq!(Some(buffered.as_str()), direct.contents());
    assert_eq!(buffered, "cb<header>T</header><footer>1999</footer>");
    assert_eq!(sink.contents(), Some(""));
    assert!(!sink.is_capturing());
}

#[test]
fn test_regions_render_independently() {
    let dir = templates();
    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".tpl"), &mut engine).unwrap();

    views
        .add("header", json!({"title": "Page"}), "top", 0)
        .unwrap()
        .add_string("body", DEFAULT_REGION, 0)
        .add(
            ViewDescriptor::new().template("footer").region("bottom").data(json!({"year": 1})),
            json!({}),
            DEFAULT_REGION,
            0,
        )
        .unwrap();

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    let top = views.render_buffered("top", Some(&ctx), &mut sink).unwrap();
    let main = views.render_buffered(DEFAULT_REGION, Some(&ctx), &mut sink).unwrap();
    let bottom = views.render_buffered("bottom", Some(&ctx), &mut sink).unwrap();
    let missing = views.render_buffered("aside", Some(&ctx), &mut sink).unwrap();

    assert_eq!(top, "<header>Page</header>");
    assert_eq!(main, "body");
    assert_eq!(bottom, "<footer>1</footer>");
    assert_eq!(missing, "");
    assert!(!views.has_content("aside"));
}

#[test]
fn test_context_globals_reach_file_views() {
    let dir = TempDir::new().unwrap();
    create_template_file(dir.path(), "nav.html", "{{ site }}:{{ page }}");

    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".html"), &mut engine)
            .unwrap();
    views.add("nav", json!({"page": "about"}), "nav", 0).unwrap();

    let ctx = ViewContext::new(&engine).with_global("site", json!("acme"));
    let mut sink = OutputSink::memory();
    views.render("nav", Some(&ctx), &mut sink).unwrap();
    assert_eq!(sink.contents(), Some("acme:about"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_search_path_order_from_yaml_config() {
    let theme = TempDir::new().unwrap();
    let base = templates();
    create_template_file(theme.path(), "header.tpl", "THEMED {{ title }}");

    let yaml = format!(
        "path:\n  - {}\n  - {}\nsuffix: .tpl\n",
        theme.path().display(),
        base.path().display()
    );
    let config = ViewConfig::from_yaml(&yaml).unwrap();

    let mut engine = MiniJinjaEngine::new();
    let mut views = ViewCollection::from_config(&config, &mut engine).unwrap();
    views
        .add("header", json!({"title": "x"}), "main", 0)
        .unwrap()
        .add("footer", json!({"year": 0}), "main", 1)
        .unwrap();

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    let out = views.render_buffered("main", Some(&ctx), &mut sink).unwrap();
    assert_eq!(out, "THEMED x<footer>0</footer>");
}

#[test]
fn test_includes_are_available_to_views() {
    let dir = TempDir::new().unwrap();
    create_template_file(
        dir.path(),
        "lib/macros.tpl",
        "{% macro item(label) %}<li>{{ label }}</li>{% endmacro %}",
    );
    create_template_file(
        dir.path(),
        "menu.tpl",
        "{% import 'macros' as m %}<ul>{% for i in items %}{{ m.item(i) }}{% endfor %}</ul>",
    );

    let config =
        ViewConfig::new([dir.path()], ".tpl").include(dir.path().join("lib/macros.tpl"));
    let mut engine = MiniJinjaEngine::new();
    let mut views = ViewCollection::from_config(&config, &mut engine).unwrap();
    views
        .add("menu", json!({"items": ["a", "b"]}), "nav", 0)
        .unwrap();

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    let out = views.render_buffered("nav", Some(&ctx), &mut sink).unwrap();
    assert_eq!(out, "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn test_failing_include_aborts_configuration() {
    let config = ViewConfig::default().include("/nonexistent/tableau/macros.tpl");
    let mut engine = MiniJinjaEngine::new();
    assert!(ViewCollection::from_config(&config, &mut engine).is_err());
}

#[test]
fn test_callback_descriptor_with_unresolvable_template() {
    let dir = templates();
    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".tpl"), &mut engine).unwrap();
    views
        .add("header", json!({"title": "Top"}), "side", 0)
        .unwrap()
        .add(
            ViewDescriptor::new()
                .template("no-such-template")
                .callback(|| "<nav/>".to_string())
                .region("side")
                .sort(-1),
            json!({}),
            DEFAULT_REGION,
            0,
        )
        .unwrap();

    assert!(!views.has_content(DEFAULT_REGION));

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    let out = views.render_buffered("side", Some(&ctx), &mut sink).unwrap();
    assert_eq!(out, "<nav/><header>Top</header>");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_template_fails_on_add() {
    let dir = templates();
    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".tpl"), &mut engine).unwrap();

    let err = views.add("sidebar", json!({}), "main", 0).unwrap_err();
    assert!(matches!(err, ViewError::TemplateNotFound(ref name) if name == "sidebar"));
    assert_eq!(views.region_len("main"), 0);
}

#[test]
fn test_descriptor_without_template_fails_at_render() {
    let dir = templates();
    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".tpl"), &mut engine).unwrap();
    views
        .add(ViewDescriptor::new().region("aside").sort(3), json!({}), "main", 0)
        .unwrap();
    assert!(views.has_content("aside"));

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    let err = views
        .render_buffered("aside", Some(&ctx), &mut sink)
        .unwrap_err();
    assert!(matches!(err, ViewError::UnknownVariant(_)));
    assert!(!sink.is_capturing());
}

#[test]
fn test_template_removed_after_add_fails_at_render() {
    let dir = templates();
    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".tpl"), &mut engine).unwrap();
    views
        .add_string("first", "main", 0)
        .add("header", json!({}), "main", 1)
        .unwrap();

    fs::remove_file(dir.path().join("header.tpl")).unwrap();

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    let err = views
        .render_buffered("main", Some(&ctx), &mut sink)
        .unwrap_err();
    assert!(matches!(err, ViewError::Render(RenderError::ReadError { .. })));
    assert!(!sink.is_capturing());
    assert_eq!(sink.contents(), Some(""));
}

#[test]
fn test_engine_error_propagates_and_stops_region() {
    let dir = TempDir::new().unwrap();
    create_template_file(dir.path(), "broken.tpl", "{{ 1 + }}");

    let mut engine = MiniJinjaEngine::new();
    let mut views =
        ViewCollection::from_config(&ViewConfig::new([dir.path()], ".tpl"), &mut engine).unwrap();
    views
        .add_string("before", "main", 0)
        .add("broken", json!({}), "main", 1)
        .unwrap()
        .add_string("after", "main", 2);

    let ctx = ViewContext::new(&engine);
    let mut sink = OutputSink::memory();
    let err = views.render("main", Some(&ctx), &mut sink).unwrap_err();
    assert!(matches!(err, ViewError::Render(_)));
    assert_eq!(sink.contents(), Some("before"));
}
