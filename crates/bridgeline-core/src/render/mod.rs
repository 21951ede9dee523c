//! HTML renderers for each page section.
//!
//! Renderers are pure functions from static content and [`PageConfig`] to
//! markup. Text that animates is not written into the markup: the renderer
//! emits an empty host element and returns a [`RevealSlot`] describing what a
//! host should type into it.
//!
//! [`PageConfig`]: crate::config::PageConfig

pub mod footer;
pub mod hero;
pub mod page;
pub mod repository;
pub mod technical;

pub use page::{render_document, render_page, RenderedPage};

use maud::{html, Markup};
use serde::Serialize;

use crate::reveal::{RevealEffect, RevealError, Trigger};

/// An element whose text is filled in by a reveal effect.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RevealSlot {
    /// DOM id of the host element.
    pub id: String,
    pub text: String,
    pub interval_ms: u32,
    pub trigger: Trigger,
}

impl RevealSlot {
    /// Build the (unmounted) effect for this slot.
    pub fn effect(&self) -> Result<RevealEffect, RevealError> {
        RevealEffect::new(self.text.clone(), self.interval_ms, self.trigger)
    }
}

/// The green `>` prompt glyph used in front of headings and list titles.
pub(crate) fn prompt() -> Markup {
    html! { span class="text-primary" { ">" } }
}
