//! # Bridgeline Core
//!
//! Pure Rust model of the Bridgeline landing page.
//!
//! This crate contains **no WASM dependencies** and performs no I/O. It owns
//! everything about the page that can be decided without a browser:
//!
//! - **Content** (`content` module): the fixed copy, code snippets and links.
//!   Snippets are display text only.
//!
//! - **Rendering** (`render` module): Maud templates for the hero, technical
//!   cards, repository card and footer, composed in a fixed order. Animated
//!   text is left out of the markup and described as [`RevealSlot`]s.
//!
//! - **Reveal effects** (`reveal` module): the typewriter state machine, the
//!   one-shot visibility gate, and [`RevealEffect`], which combines them. An
//!   effect never owns a timer or an observer; it returns [`EffectCommand`]s
//!   and its host carries them out.
//!
//! - **Virtual host** (`sim` module): a deterministic executor for those
//!   commands on a virtual clock, for headless playback and tests.
//!
//! ## Usage
//!
//! ```ignore
//! use bridgeline_core::{render_page, PageConfig, VirtualHost};
//!
//! let page = render_page(&PageConfig::default());
//! let mut host = VirtualHost::new();
//! host.mount_page(&page)?;
//! host.advance_to(2_500);
//! ```

pub mod config;
pub mod content;
pub mod render;
pub mod reveal;
pub mod sim;

// Re-export commonly used types for convenience
pub use config::{ConfigError, PageConfig};
pub use render::{render_document, render_page, RenderedPage, RevealSlot};
pub use reveal::{
    EffectCommand, RevealEffect, RevealError, RevealPhase, TimerToken, Trigger,
};
pub use sim::{Frame, HostError, VirtualHost};
