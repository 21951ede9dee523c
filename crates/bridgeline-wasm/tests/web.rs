//! Browser tests. Run with `wasm-pack test --headless --firefox crates/bridgeline-wasm`.

#![cfg(target_arch = "wasm32")]

use bridgeline_core::content::{section, SectionId, HERO};
use bridgeline_core::render::hero::HERO_REVEAL_ID;
use bridgeline_core::render::technical::card_reveal_id;
use bridgeline_wasm::{render_document_html, LandingPage};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn make_root(id: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_id(id);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

/// A root placed far below the viewport, so gated cards never open.
fn make_offscreen_root(id: &str) -> Element {
    let root = make_root(id);
    root.set_attribute("style", "position: absolute; top: 100000px").unwrap();
    root
}

fn text_in(root: &Element, id: &str) -> String {
    root.query_selector(&format!("#{}", id))
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

/// Wait on a real `setTimeout`, letting the page's intervals run.
async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_mount_renders_all_sections() {
    let root = make_root("app-mount");
    let mut page = LandingPage::new("app-mount", "").unwrap();

    let doc = document();
    assert!(doc.get_element_by_id("technical").is_some());
    assert!(doc.get_element_by_id("repository").is_some());
    assert_eq!(page.effect_count(), 5);

    // Hero starts on mount with its first, empty step
    let hero = doc.get_element_by_id("hero-typed-line").unwrap();
    assert_eq!(hero.text_content().unwrap_or_default(), "");

    page.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn test_unmount_releases_effects_and_clears_root() {
    let root = make_root("app-unmount");
    let mut page = LandingPage::new("app-unmount", r#"{"hero_interval_ms": 20}"#).unwrap();
    assert!(!page.status().unwrap().is_undefined());

    page.unmount();
    assert_eq!(page.effect_count(), 0);
    assert_eq!(root.inner_html(), "");
    assert!(document().get_element_by_id("hero-typed-line").is_none());

    // Second unmount is a no-op
    page.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn test_retarget_unknown_slot_fails() {
    let root = make_root("app-retarget");
    let mut page = LandingPage::new("app-retarget", "").unwrap();

    assert!(page.retarget("no-such-slot", "text").is_err());
    assert!(page.retarget("hero-typed-line", "> READY").is_ok());

    page.unmount();
    root.remove();
}

#[wasm_bindgen_test]
fn test_missing_root_is_an_error() {
    assert!(LandingPage::new("does-not-exist", "").is_err());
}

#[wasm_bindgen_test]
fn test_invalid_config_is_an_error() {
    let root = make_root("app-config");
    assert!(LandingPage::new("app-config", r#"{"card_interval_ms": 0}"#).is_err());
    root.remove();
}

#[wasm_bindgen_test]
fn test_render_document_html() {
    let html = render_document_html(r#"{"logo_src": "/logo.svg"}"#).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"src="/logo.svg""#));
}

#[wasm_bindgen_test]
async fn test_hero_types_full_line_over_real_time() {
    let root = make_offscreen_root("app-realtime");
    let mut page = LandingPage::new("app-realtime", r#"{"hero_interval_ms": 5}"#).unwrap();
    let card = card_reveal_id(section(SectionId::TokenMechanics));

    sleep(60).await;
    let partial = text_in(&root, HERO_REVEAL_ID);
    assert!(HERO.typed_line.starts_with(&partial));

    sleep(1500).await;
    assert_eq!(text_in(&root, HERO_REVEAL_ID), HERO.typed_line);
    // Never scrolled into view
    assert_eq!(text_in(&root, &card), "");

    page.unmount();
    root.remove();
}

#[wasm_bindgen_test]
async fn test_unmount_stops_typing_mid_reveal() {
    let root = make_offscreen_root("app-teardown");
    let mut page = LandingPage::new("app-teardown", r#"{"hero_interval_ms": 30}"#).unwrap();
    let hero = root
        .query_selector(&format!("#{}", HERO_REVEAL_ID))
        .unwrap()
        .unwrap();

    sleep(150).await;
    page.unmount();
    let frozen = hero.text_content().unwrap_or_default();
    assert!(frozen.chars().count() < HERO.typed_line.chars().count());

    sleep(300).await;
    assert_eq!(hero.text_content().unwrap_or_default(), frozen);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_pages_in_separate_roots_stay_independent() {
    let root_a = make_offscreen_root("app-first");
    let root_b = make_offscreen_root("app-second");
    let config = r#"{"hero_interval_ms": 5}"#;
    let mut page_a = LandingPage::new("app-first", config).unwrap();
    let mut page_b = LandingPage::new("app-second", config).unwrap();
    assert_eq!(page_a.effect_count(), 5);
    assert_eq!(page_b.effect_count(), 5);

    sleep(1500).await;
    assert_eq!(text_in(&root_a, HERO_REVEAL_ID), HERO.typed_line);
    assert_eq!(text_in(&root_b, HERO_REVEAL_ID), HERO.typed_line);

    page_a.unmount();
    assert_eq!(root_a.inner_html(), "");
    page_b.retarget(HERO_REVEAL_ID, "> OK").unwrap();
    sleep(200).await;
    assert_eq!(text_in(&root_b, HERO_REVEAL_ID), "> OK");

    page_b.unmount();
    root_a.remove();
    root_b.remove();
}
