//! App configuration: every user-editable string, the theme palette, photo
//! slots and confetti settings. Edit [`AppConfig::default`] to personalize the
//! page; nothing else in the crate hardcodes presentation text.

use crate::evasion::HintSlot;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    // --- Love letter page ---
    pub love_letter: String,
    pub letter_signature: String,
    pub next_button_text: String,

    // --- Invitation page ---
    pub main_question: String,
    pub polaroid_caption: String,
    pub yes_button_text: String,
    pub no_button_text: String,

    // --- Success page ---
    pub success_message: String,
    pub love_message: String,
    pub code_message: String,
    pub date_details: String,
    pub final_message: String,

    // --- Theme colors ---
    pub background_color: String,
    pub surface_color: String,
    pub text_color: String,
    pub primary_action_color: String,
    pub secondary_action_color: String,

    // --- Photos (local paths under the site root, or full URLs) ---
    pub main_photo: Option<String>,
    pub gallery_photos: [Option<String>; 4],

    // --- Confetti ---
    pub confetti_count: usize,
    pub confetti_colors: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            love_letter: "Every moment with you feels like a dream I never want to wake up \
                          from. Your smile brightens my darkest days, and your laugh is my \
                          favorite sound in the world. I'm so grateful for everything you are \
                          and everything we share together. These feelings grow stronger every \
                          single day."
                .to_string(),
            letter_signature: "Forever yours".to_string(),
            next_button_text: "Continue Reading".to_string(),
            main_question: "Will you be my Valentine?".to_string(),
            polaroid_caption: "Us".to_string(),
            yes_button_text: "Yes!".to_string(),
            no_button_text: "No".to_string(),
            success_message: "SAVE THE DATE, LOVE!".to_string(),
            love_message: "I LOVE YOU!".to_string(),
            code_message: "When I'm with you, the world feels like a better place. I can't \
                           wait to create more beautiful memories together."
                .to_string(),
            date_details: "February 14th, 2PM".to_string(),
            final_message: "I can't wait for our date!".to_string(),
            background_color: "#FFF5F5".to_string(),
            surface_color: "#FFFFFF".to_string(),
            text_color: "#4A3728".to_string(),
            primary_action_color: "#E57373".to_string(),
            secondary_action_color: "#FFCDD2".to_string(),
            main_photo: None,
            gallery_photos: [None, None, None, None],
            confetti_count: 30,
            confetti_colors: vec![
                "#E57373".to_string(),
                "#FFCDD2".to_string(),
                "#FFD700".to_string(),
                "#FF69B4".to_string(),
            ],
        }
    }
}

/// Pure mapping from the config palette to the CSS custom properties the
/// markup refers to. The DOM layer applies this set once at startup; the
/// tokens are never mutated afterwards.
pub fn theme_tokens(config: &AppConfig) -> [(&'static str, &str); 5] {
    [
        ("--color-background", config.background_color.as_str()),
        ("--color-surface", config.surface_color.as_str()),
        ("--color-foreground", config.text_color.as_str()),
        ("--color-primary", config.primary_action_color.as_str()),
        ("--color-secondary", config.secondary_action_color.as_str()),
    ]
}

/// Hint line shown under the buttons for each evasion hint slot.
pub fn hint_text(slot: HintSlot) -> &'static str {
    match slot {
        HintSlot::Acceptance => "Knew you'd come around!",
        HintSlot::AlmostThere => "Almost there... just say yes already!",
        HintSlot::Tiring => "The button is getting tired of running...",
        HintSlot::Shy => "The 'No' button seems shy...",
        HintSlot::Default => "Make your choice!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_presentable() {
        let cfg = AppConfig::default();
        assert!(!cfg.love_letter.is_empty());
        assert!(!cfg.main_question.is_empty());
        assert_eq!(cfg.gallery_photos.len(), 4);
        assert_eq!(cfg.confetti_count, 30);
        assert!(!cfg.confetti_colors.is_empty());
        for color in &cfg.confetti_colors {
            assert!(color.starts_with('#'), "confetti color {color} not a hex value");
        }
    }

    #[test]
    fn theme_tokens_cover_the_full_palette() {
        let cfg = AppConfig::default();
        let tokens = theme_tokens(&cfg);
        assert_eq!(tokens.len(), 5);
        for (name, value) in tokens {
            assert!(name.starts_with("--color-"));
            assert!(value.starts_with('#'), "token {name} has non-hex value {value}");
        }
        // Pure: same config, same tokens.
        assert_eq!(theme_tokens(&cfg), theme_tokens(&cfg.clone()));
    }

    #[test]
    fn every_hint_slot_has_text() {
        for slot in [
            HintSlot::Acceptance,
            HintSlot::AlmostThere,
            HintSlot::Tiring,
            HintSlot::Shy,
            HintSlot::Default,
        ] {
            assert!(!hint_text(slot).is_empty());
        }
    }
}
