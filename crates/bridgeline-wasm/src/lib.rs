//! # Bridgeline WASM
//!
//! WebAssembly bindings for the Bridgeline landing page.
//! This crate mounts the markup rendered by `bridgeline-core` into the
//! browser and drives every reveal effect with real timers and
//! `IntersectionObserver`s, via `wasm-bindgen`.
//!
//! ## Architecture
//!
//! - Page content and markup come from `bridgeline-core` (never built in JS)
//! - Each reveal slot gets one [`binding::RevealBinding`], which executes the
//!   effect's commands
//! - Interval and observer handles are RAII guards: dropping the page (or
//!   calling `unmount`) releases all of them
//! - Accepts page configuration as JSON; missing fields take defaults

mod binding;
mod dom;
mod observer;
mod timer;

use bridgeline_core::{render_document, render_page, PageConfig};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use binding::{RevealBinding, SlotStatus};

/// Set up panic hook on WASM initialization.
/// This ensures Rust panics are logged to the browser console with full stack traces.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// A mounted landing page.
///
/// Owns the root element's content and every running reveal effect. Calling
/// `free()` from JavaScript has the same effect as `unmount()`.
#[wasm_bindgen]
pub struct LandingPage {
    root: Element,
    bindings: Vec<RevealBinding>,
}

#[wasm_bindgen]
impl LandingPage {
    /// Render the page into the element with id `root_id` and start its
    /// effects. `config_json` may be empty or partial.
    #[wasm_bindgen(constructor)]
    pub fn new(root_id: &str, config_json: &str) -> Result<LandingPage, JsValue> {
        let config = PageConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid page config: {}", e)))?;

        let root = dom::element_by_id(root_id).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let page = render_page(&config);
        root.set_inner_html(page.html());

        let mut bindings = Vec::with_capacity(page.reveals.len());
        for slot in &page.reveals {
            let binding = RevealBinding::mount(&root, slot)
                .map_err(|e| JsValue::from_str(&format!("Failed to bind reveal: {}", e)))?;
            bindings.push(binding);
        }

        log_to_console(&format!(
            "[Bridgeline] Page mounted into #{} with {} reveal effects",
            root_id,
            bindings.len()
        ));

        Ok(LandingPage { root, bindings })
    }

    /// Replace the text of one reveal slot. The reveal restarts from the
    /// first character; a card that has not been scrolled into view yet keeps
    /// waiting.
    pub fn retarget(&self, slot_id: &str, text: &str) -> Result<(), JsValue> {
        let binding = self
            .bindings
            .iter()
            .find(|b| b.slot_id() == slot_id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown reveal slot '{}'", slot_id)))?;
        binding
            .retarget(text)
            .map_err(|e| JsValue::from_str(&format!("Retarget failed: {}", e)))
    }

    /// Per-slot phase and progress, as an array of plain objects.
    pub fn status(&self) -> Result<JsValue, JsValue> {
        let statuses: Vec<SlotStatus> = self.bindings.iter().map(RevealBinding::status).collect();
        serde_wasm_bindgen::to_value(&statuses)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Number of effects still bound.
    pub fn effect_count(&self) -> usize {
        self.bindings.len()
    }

    /// Stop every effect and clear the root element.
    pub fn unmount(&mut self) {
        if self.bindings.is_empty() {
            return;
        }
        let released = self.bindings.len();
        self.bindings.clear();
        self.root.set_inner_html("");
        log_to_console(&format!(
            "[Bridgeline] Page unmounted, {} reveal effects released",
            released
        ));
    }
}

/// Render the complete static HTML document for the given configuration.
#[wasm_bindgen]
pub fn render_document_html(config_json: &str) -> Result<String, JsValue> {
    let config = PageConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid page config: {}", e)))?;
    Ok(render_document(&config))
}

// --- Console logging ---

fn log_to_console(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
