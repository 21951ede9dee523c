use maud::{html, Markup};

use super::prompt;
use crate::content::{REPOSITORY, REPOSITORY_ANCHOR};

pub fn render_repository() -> Markup {
    html! {
        section id=(REPOSITORY_ANCHOR) class="container mx-auto px-4 py-20" {
            div class="max-w-7xl mx-auto space-y-8" {
                div class="text-center space-y-4" {
                    h2 class="text-3xl md:text-5xl font-bold text-primary crt-effect" {
                        ">" " " (REPOSITORY.heading)
                    }
                    p class="text-muted-foreground text-sm md:text-base" { (REPOSITORY.subheading) }
                }

                div class="card border-secondary/30 bg-card/50 backdrop-blur-sm p-6 md:p-8" {
                    h3 class="text-xl md:text-2xl font-bold text-secondary mb-4 flex items-center gap-2" {
                        (prompt())
                        (REPOSITORY.card_title)
                    }
                    div class="space-y-4" {
                        div class="bg-background/80 border border-primary/20 rounded p-4" {
                            pre class="text-xs md:text-sm text-primary" {
                                code { (REPOSITORY.commands) }
                            }
                        }

                        div class="grid md:grid-cols-2 gap-4 mt-6" {
                            (render_list("FEATURES", &REPOSITORY.features))
                            (render_list("TECH STACK", &REPOSITORY.tech_stack))
                        }

                        p class="text-sm text-muted-foreground mt-4" {
                            span class="text-secondary" { ">" } " " (REPOSITORY.note)
                        }
                    }
                }
            }
        }
    }
}

fn render_list(title: &str, items: &[&str]) -> Markup {
    html! {
        div class="bg-background/60 border border-primary/20 rounded p-4" {
            h4 class="text-secondary font-bold mb-2" { ">" " " (title) }
            ul class="text-sm text-muted-foreground space-y-1" {
                @for item in items {
                    li { "• " (item) }
                }
            }
        }
    }
}
