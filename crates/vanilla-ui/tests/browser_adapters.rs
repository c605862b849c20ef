//! Browser adapter tests
//!
//! Run with `wasm-pack test --headless --firefox crates/vanilla-ui`.
//! Properties verified:
//! - localStorage round-trips through the storage seam
//! - the document root receives the theme class and `data-theme`
//! - the link walker marks exactly the matching routed anchor
//! - routed links outside `<nav>` keep their classes

#![cfg(target_arch = "wasm32")]
#![allow(clippy::expect_used)]

use vanilla_core::{AppConfig, KeyValueStorage, LinkStyles, ResolvedTheme, ThemeRoot};
use vanilla_ui::browser::{BrowserStorage, DocumentRoot, DomLinks};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().expect("window")
}

// ============================================================================
// STORAGE
// ============================================================================

#[wasm_bindgen_test]
fn local_storage_round_trips_values() {
    let storage = BrowserStorage::open(&window()).expect("localStorage");
    storage.set("vanilla-test", "dark").expect("write");
    assert_eq!(storage.get("vanilla-test").expect("read").as_deref(), Some("dark"));
    storage.remove("vanilla-test").expect("remove");
    assert_eq!(storage.get("vanilla-test").expect("read"), None);
}

// ============================================================================
// THEME ROOT
// ============================================================================

#[wasm_bindgen_test]
fn document_root_swaps_theme_class() {
    let root = DocumentRoot::new(&window()).expect("document element");
    root.apply_theme(ResolvedTheme::Dark);
    root.apply_theme(ResolvedTheme::Light);

    let html = window()
        .document()
        .and_then(|d| d.document_element())
        .expect("html");
    assert!(html.class_list().contains("light"));
    assert!(!html.class_list().contains("dark"));
    assert_eq!(html.get_attribute("data-theme").as_deref(), Some("light"));
}

// ============================================================================
// ACTIVE LINKS
// ============================================================================

#[wasm_bindgen_test]
fn link_walker_marks_matching_anchor() {
    let document = window().document().expect("document");
    let body = document.body().expect("body");
    body.set_inner_html(
        r#"<nav><a href="/" data-router class="nav-link">Home</a><a href="/about" data-router class="nav-link">About</a><a href="/elsewhere">Plain</a></nav>"#,
    );

    let links = DomLinks::new(document.clone(), "a[data-router]".to_string(), LinkStyles::default());
    let active = links.refresh_now("/about");

    assert_eq!(active, 1);
    let about = document
        .query_selector("a[href='/about']")
        .expect("query")
        .expect("anchor");
    assert_eq!(about.get_attribute("aria-current").as_deref(), Some("page"));
    assert!(about.class_list().contains("active"));
    let plain = document
        .query_selector("a[href='/elsewhere']")
        .expect("query")
        .expect("anchor");
    assert!(plain.get_attribute("aria-current").is_none());
}

#[wasm_bindgen_test]
fn scoped_link_walker_leaves_links_outside_nav_alone() {
    let document = window().document().expect("document");
    let body = document.body().expect("body");
    body.set_inner_html(
        r#"<header><a id="brand" href="/" data-router class="text-xl font-bold">Brand</a><nav><a href="/" data-router class="nav-link">Home</a></nav></header><main><a id="cta" href="/" data-router class="text-white bg-indigo-600">Go home</a></main>"#,
    );

    let config = AppConfig::default();
    let links = DomLinks::new(document.clone(), config.active_link_selector(), config.link_styles.clone());
    let active = links.refresh_now("/");

    assert_eq!(active, 1);
    let brand = document.get_element_by_id("brand").expect("brand");
    assert_eq!(brand.class_name(), "text-xl font-bold");
    assert!(brand.get_attribute("aria-current").is_none());
    let cta = document.get_element_by_id("cta").expect("cta");
    assert_eq!(cta.class_name(), "text-white bg-indigo-600");
}
