use maud::{html, Markup, DOCTYPE};

use super::footer::render_footer;
use super::hero::render_hero;
use super::repository::render_repository;
use super::technical::render_technical;
use super::RevealSlot;
use crate::config::PageConfig;

pub const PAGE_TITLE: &str = "BNB × SOLANA Bridge";

/// Composed page body plus the reveal slots a host must bind.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub markup: Markup,
    /// Hero slot first, then one per card in display order.
    pub reveals: Vec<RevealSlot>,
}

impl RenderedPage {
    pub fn html(&self) -> &str {
        &self.markup.0
    }

    pub fn slot(&self, id: &str) -> Option<&RevealSlot> {
        self.reveals.iter().find(|slot| slot.id == id)
    }
}

/// Hero, technical explanation, repository and footer, stacked in that order.
pub fn render_page(config: &PageConfig) -> RenderedPage {
    let (hero, hero_slot) = render_hero(config);
    let (technical, card_slots) = render_technical(config);

    let markup = html! {
        main class="min-h-screen relative overflow-hidden grid-bg" {
            div class="scanline" {}
            (hero)
            (technical)
            (render_repository())
            (render_footer())
        }
    };

    let mut reveals = Vec::with_capacity(1 + card_slots.len());
    reveals.push(hero_slot);
    reveals.extend(card_slots);

    RenderedPage { markup, reveals }
}

/// A standalone HTML document for static hosting. Reveal hosts stay empty
/// until something binds them.
pub fn render_document(config: &PageConfig) -> String {
    let page = render_page(config);
    let document = html! {
        (DOCTYPE)
        html lang="en" class="dark" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
            }
            body class="font-mono antialiased" {
                div id="app" { (page.markup) }
            }
        }
    };
    document.into_string()
}
