use maud::{html, Markup};

use super::{prompt, RevealSlot};
use crate::config::PageConfig;
use crate::content::{HERO, TECHNICAL_ANCHOR};
use crate::reveal::Trigger;

pub const HERO_REVEAL_ID: &str = "hero-typed-line";

/// Full-height hero: logo, title, typed status line, system message box and
/// the two call-to-action links.
pub fn render_hero(config: &PageConfig) -> (Markup, RevealSlot) {
    let slot = RevealSlot {
        id: HERO_REVEAL_ID.to_string(),
        text: HERO.typed_line.to_string(),
        interval_ms: config.hero_interval_ms,
        trigger: Trigger::Immediate,
    };

    let markup = html! {
        section class="container mx-auto px-4 py-20 min-h-screen flex flex-col justify-center items-center relative" {
            div class="absolute inset-0 bg-gradient-to-b from-primary/5 via-transparent to-transparent pointer-events-none" {}

            div class="text-center space-y-8 relative z-10" {
                div class="flex justify-center mb-8 animate-pulse" {
                    div class="relative w-32 h-32 md:w-40 md:h-40" {
                        img src=(config.logo_src) alt=(HERO.logo_alt) class="object-contain crt-effect w-full h-full";
                    }
                }

                div class="space-y-4" {
                    h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-primary crt-effect animate-fade-in" {
                        (HERO.title)
                    }
                    div class="h-8 md:h-10" {
                        p id=(slot.id) class="text-lg md:text-xl text-muted-foreground terminal-cursor" data-reveal=(slot.trigger.as_attr()) {}
                    }
                }

                div class="border border-primary/30 bg-card/50 backdrop-blur-sm p-6 md:p-8 rounded-lg max-w-3xl mx-auto mt-12 animate-fade-in-up" {
                    p class="text-sm md:text-base text-card-foreground leading-relaxed text-left font-mono" {
                        @for (label, value) in &HERO.system_message {
                            span class="text-secondary" { ">" } " " (label) ": " (value)
                            br;
                        }
                        span class="text-secondary" { ">" } " " (HERO.status_label) ": "
                        span class="text-primary animate-pulse" { (HERO.status_value) }
                    }
                }

                div class="flex flex-col sm:flex-row gap-4 justify-center mt-12" {
                    a href={ "#" (TECHNICAL_ANCHOR) } class="px-8 py-3 bg-primary text-primary-foreground rounded hover:bg-primary/90 transition-all font-mono text-sm md:text-base" {
                        (prompt()) " " (HERO.primary_cta)
                    }
                    a href=(config.repository_url) target="_blank" rel="noopener noreferrer" class="px-8 py-3 border border-primary text-primary rounded hover:bg-primary/10 transition-all font-mono text-sm md:text-base" {
                        (prompt()) " " (HERO.secondary_cta)
                    }
                }

                div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce" {
                    div class="text-primary/50 text-2xl" { "▼" }
                }
            }
        }
    };

    (markup, slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_slot_uses_hero_interval() {
        let config = PageConfig {
            hero_interval_ms: 30,
            ..PageConfig::default()
        };
        let (_, slot) = render_hero(&config);
        assert_eq!(slot.id, HERO_REVEAL_ID);
        assert_eq!(slot.interval_ms, 30);
        assert_eq!(slot.trigger, Trigger::Immediate);
        assert_eq!(slot.text, HERO.typed_line);
    }

    #[test]
    fn test_hero_host_starts_empty() {
        let (markup, _) = render_hero(&PageConfig::default());
        let html = markup.into_string();
        assert!(html.contains(r#"id="hero-typed-line""#));
        assert!(html.contains(r#"data-reveal="immediate"></p>"#));
        // The typed line only appears through the effect
        assert!(!html.contains("INITIALIZING"));
    }

    #[test]
    fn test_hero_links_and_logo() {
        let (markup, _) = render_hero(&PageConfig::default());
        let html = markup.into_string();
        assert!(html.contains(r##"href="#technical""##));
        assert!(html.contains(r#"href="https://github.com/makhak123/v0-bnb-on-solana""#));
        assert!(html.contains(r#"src="/bnb-logo.png""#));
        assert!(html.contains("BNB × SOLANA"));
    }
}
