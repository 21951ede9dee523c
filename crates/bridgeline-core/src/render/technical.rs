use maud::{html, Markup};

use super::{prompt, RevealSlot};
use crate::config::PageConfig;
use crate::content::{
    Section, METRICS, METRICS_HEADING, SECTIONS, TECHNICAL_ANCHOR, TECHNICAL_HEADING,
    TECHNICAL_SUBHEADING,
};
use crate::reveal::Trigger;

/// Element id of the reveal host inside a card.
pub fn card_reveal_id(section: &Section) -> String {
    format!("reveal-{}", section.id.slug())
}

/// The "how it works" section: one card per [`SECTIONS`] entry, each with
/// visibility-gated prose and a static snippet, then the metrics card.
pub fn render_technical(config: &PageConfig) -> (Markup, Vec<RevealSlot>) {
    let slots: Vec<RevealSlot> = SECTIONS
        .iter()
        .map(|section| RevealSlot {
            id: card_reveal_id(section),
            text: section.content.to_string(),
            interval_ms: config.card_interval_ms,
            trigger: Trigger::OnVisible {
                threshold: config.visibility_threshold,
            },
        })
        .collect();

    let markup = html! {
        section id=(TECHNICAL_ANCHOR) class="container mx-auto px-4 py-20" {
            div class="max-w-6xl mx-auto space-y-12" {
                div class="text-center space-y-4" {
                    h2 class="text-3xl md:text-5xl font-bold text-primary crt-effect" {
                        ">" " " (TECHNICAL_HEADING)
                    }
                    p class="text-muted-foreground text-sm md:text-base" { (TECHNICAL_SUBHEADING) }
                }

                div class="grid gap-8" {
                    @for (index, (section, slot)) in SECTIONS.iter().zip(&slots).enumerate() {
                        (render_card(index, section, slot))
                    }
                }

                (render_metrics())
            }
        }
    };

    (markup, slots)
}

fn render_card(index: usize, section: &Section, slot: &RevealSlot) -> Markup {
    html! {
        div class="card border-primary/30 bg-card/50 backdrop-blur-sm p-6 md:p-8 hover:border-primary/50 transition-all animate-fade-in-up"
            style=(format!("animation-delay: {}ms", index * 100)) {
            h3 class="text-xl md:text-2xl font-bold text-secondary mb-4 flex items-center gap-2" {
                (prompt())
                (section.title)
            }
            div class="space-y-4" {
                div id=(slot.id) class="text-card-foreground leading-relaxed text-sm md:text-base min-h-[1.5em]" data-reveal=(slot.trigger.as_attr()) {}
                div class="bg-background/80 border border-primary/20 rounded p-4 overflow-x-auto" {
                    pre class="text-xs md:text-sm text-primary" {
                        code { (section.code_snippet) }
                    }
                }
            }
        }
    }
}

fn render_metrics() -> Markup {
    html! {
        div class="card border-secondary/30 bg-card/50 backdrop-blur-sm p-6 md:p-8 mt-12" {
            h3 class="text-xl md:text-2xl font-bold text-secondary mb-4 flex items-center gap-2" {
                (prompt())
                (METRICS_HEADING)
            }
            div class="grid grid-cols-2 md:grid-cols-4 gap-4 md:gap-6" {
                @for metric in &METRICS {
                    div class="text-center" {
                        div class="text-3xl md:text-4xl font-bold text-primary crt-effect" { (metric.value) }
                        div class="text-xs md:text-sm text-muted-foreground mt-2" { (metric.label) }
                    }
                }
            }
        }
    }
}
