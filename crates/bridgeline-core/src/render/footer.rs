use maud::{html, Markup};

use crate::content::{Link, FOOTER_CREDIT, FOOTER_GROUPS, FOOTER_STATUS_LABEL, FOOTER_STATUS_VALUE};

pub fn render_footer() -> Markup {
    html! {
        footer class="border-t border-primary/30 bg-card/30 backdrop-blur-sm py-12" {
            div class="container mx-auto px-4" {
                div class="max-w-6xl mx-auto" {
                    div class="grid md:grid-cols-3 gap-8 mb-8" {
                        @for group in &FOOTER_GROUPS {
                            div {
                                h3 class="text-lg font-bold text-primary mb-4" { ">" " " (group.title) }
                                ul class="space-y-2 text-sm text-muted-foreground" {
                                    @for link in &group.links {
                                        li { (render_link(link)) }
                                    }
                                }
                            }
                        }
                    }

                    div class="border-t border-primary/20 pt-8 text-center" {
                        p class="text-sm text-muted-foreground font-mono" {
                            span class="text-primary" { ">" } " " (FOOTER_STATUS_LABEL) " "
                            span class="text-primary animate-pulse" { (FOOTER_STATUS_VALUE) }
                        }
                        p class="text-xs text-muted-foreground mt-2" { (FOOTER_CREDIT) }
                    }
                }
            }
        }
    }
}

fn render_link(link: &Link) -> Markup {
    html! {
        a href=(link.href) class="hover:text-primary transition-colors" { (link.label) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_renders_all_groups() {
        let html = render_footer().into_string();
        for group in &FOOTER_GROUPS {
            assert!(html.contains(group.title));
            for link in &group.links {
                assert!(html.contains(&format!(r#"href="{}""#, link.href)));
            }
        }
        assert_eq!(html.matches("<a ").count(), 9);
    }

    #[test]
    fn test_footer_credit_is_escaped() {
        let html = render_footer().into_string();
        assert!(html.contains("@aeyakovenko&#39;s vision") || html.contains("@aeyakovenko's vision"));
        assert!(html.contains("Solana &amp; BNB Chain"));
    }
}
