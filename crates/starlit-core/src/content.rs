//! Page content model.
//!
//! Everything the page says is data: hero copy, feature cards, stats,
//! testimonials, FAQ entries, footer links. A TOML file replaces the embedded
//! demo page wholesale; sections left empty are simply not rendered.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub hero: HeroContent,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    #[serde(default)]
    pub footer: FooterContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Product name, shown in the navigation bar and terminal title
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Short strapline next to the name
    #[serde(default)]
    pub tagline: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeroContent {
    #[serde(default)]
    pub headline: String,
    /// Typed out character by character under the headline
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub actions: Vec<ActionLink>,
    /// Small hint under the actions ("scroll to explore")
    #[serde(default)]
    pub hint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionLink {
    pub label: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Single glyph shown above the title
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    /// Target value the counter runs up to
    pub value: u64,
    /// Rendered tight against the value ("+", "%", "ms")
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterContent {
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub links: Vec<ActionLink>,
}

fn default_site_name() -> String {
    "starlit".to_string()
}

impl SiteContent {
    /// Load page content from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading page content from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let content: SiteContent =
            toml::from_str(&text).map_err(|e| Error::Content(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// The demo page that ships in the binary.
    pub fn embedded() -> Self {
        Self {
            site: SiteMeta {
                name: "starlit".to_string(),
                tagline: "a landing page for your terminal".to_string(),
            },
            hero: HeroContent {
                headline: "Build something people remember".to_string(),
                tagline: "An ambient launch page with drifting constellations, \
                          live counters, and not a browser in sight."
                    .to_string(),
                actions: vec![
                    ActionLink {
                        label: "Get Started".to_string(),
                        url: Some("https://example.com/starlit/docs".to_string()),
                    },
                    ActionLink {
                        label: "View Source".to_string(),
                        url: Some("https://example.com/starlit".to_string()),
                    },
                ],
                hint: "scroll to explore · ? for keys".to_string(),
            },
            features: vec![
                Feature {
                    icon: "✦".to_string(),
                    title: "Instant on".to_string(),
                    body: "Cold start to first frame in milliseconds. No bundler, \
                           no hydration, no spinner."
                        .to_string(),
                },
                Feature {
                    icon: "◆".to_string(),
                    title: "Runs anywhere".to_string(),
                    body: "One static binary. If it has a terminal and a pulse, \
                           it can host your launch."
                        .to_string(),
                },
                Feature {
                    icon: "●".to_string(),
                    title: "Yours to shape".to_string(),
                    body: "Copy, palette, and pacing are plain TOML. Rebrand the \
                           whole page without recompiling."
                        .to_string(),
                },
            ],
            stats: vec![
                Stat {
                    value: 4800,
                    suffix: "+".to_string(),
                    label: "Downloads".to_string(),
                },
                Stat {
                    value: 120,
                    suffix: "+".to_string(),
                    label: "Releases".to_string(),
                },
                Stat {
                    value: 99,
                    suffix: "%".to_string(),
                    label: "Uptime".to_string(),
                },
                Stat {
                    value: 16,
                    suffix: "ms".to_string(),
                    label: "Frame budget".to_string(),
                },
            ],
            testimonials: vec![
                Testimonial {
                    quote: "We put our release notes behind a starlit page and \
                            people actually read them now."
                        .to_string(),
                    author: "Ada R.".to_string(),
                    role: "Maintainer, orbit-db".to_string(),
                },
                Testimonial {
                    quote: "The particle field over ssh convinced our CTO that \
                            terminals are a frontend."
                        .to_string(),
                    author: "Jonas M.".to_string(),
                    role: "Platform lead".to_string(),
                },
                Testimonial {
                    quote: "I came for the novelty and stayed because editing one \
                            TOML file beats a static site generator."
                        .to_string(),
                    author: "Priya K.".to_string(),
                    role: "Developer advocate".to_string(),
                },
            ],
            faq: vec![
                FaqItem {
                    question: "Does it work over ssh?".to_string(),
                    answer: "Yes. Everything renders with plain terminal cells and \
                             braille patterns, so any reasonably modern terminal \
                             emulator works, local or remote."
                        .to_string(),
                },
                FaqItem {
                    question: "Can I use my own copy and colors?".to_string(),
                    answer: "Point --content at a TOML file for the words and pick \
                             or override a theme in the config for the colors."
                        .to_string(),
                },
                FaqItem {
                    question: "How heavy is the animation?".to_string(),
                    answer: "The particle count scales with the visible area and is \
                             capped at one hundred, so even a full-screen field stays \
                             well under a millisecond per frame."
                        .to_string(),
                },
                FaqItem {
                    question: "Why a landing page in the terminal?".to_string(),
                    answer: "Because the people you most want to impress live there."
                        .to_string(),
                },
            ],
            footer: FooterContent {
                note: "Made with starlight".to_string(),
                links: vec![
                    ActionLink {
                        label: "Docs".to_string(),
                        url: Some("https://example.com/starlit/docs".to_string()),
                    },
                    ActionLink {
                        label: "Source".to_string(),
                        url: Some("https://example.com/starlit".to_string()),
                    },
                    ActionLink {
                        label: "License".to_string(),
                        url: Some("https://example.com/starlit/license".to_string()),
                    },
                ],
            },
        }
    }

    /// Reject content the page cannot meaningfully render.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(Error::Content("site name must not be empty".to_string()));
        }
        if self.hero.headline.trim().is_empty() {
            return Err(Error::Content(
                "hero headline must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_page_is_valid() {
        let content = SiteContent::embedded();
        assert!(content.validate().is_ok());
        assert!(!content.features.is_empty());
        assert!(!content.stats.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(!content.faq.is_empty());
    }

    #[test]
    fn test_minimal_file_parses() {
        let content: SiteContent = toml::from_str(
            r#"
            [site]
            name = "demo"

            [hero]
            headline = "Hello"
            tagline = "typed out slowly"

            [[stats]]
            value = 42
            label = "Answers"
            "#,
        )
        .unwrap();
        assert!(content.validate().is_ok());
        assert_eq!(content.site.name, "demo");
        assert_eq!(content.stats[0].value, 42);
        assert_eq!(content.stats[0].suffix, "");
        // Absent sections come back empty, not defaulted to demo copy
        assert!(content.testimonials.is_empty());
        assert!(content.faq.is_empty());
    }

    #[test]
    fn test_missing_headline_fails_validation() {
        let content: SiteContent = toml::from_str(
            r#"
            [site]
            name = "demo"
            "#,
        )
        .unwrap();
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("headline"));
    }

    #[test]
    fn test_round_trip() {
        let content = SiteContent::embedded();
        let text = toml::to_string_pretty(&content).unwrap();
        let parsed: SiteContent = toml::from_str(&text).unwrap();
        assert_eq!(parsed.site.name, content.site.name);
        assert_eq!(parsed.faq.len(), content.faq.len());
        assert_eq!(parsed.hero.actions.len(), content.hero.actions.len());
    }
}
