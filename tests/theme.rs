// Additional integration tests for configuration and decoration invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use valentine_ask::config::{AppConfig, hint_text, theme_tokens};
use valentine_ask::decor::{FLOATING_HEARTS, SPARKLES, spawn_confetti};
use valentine_ask::evasion::HintSlot;
use valentine_ask::geometry::Lcg;

#[test]
fn theme_token_names_are_unique_and_well_formed() {
    let cfg = AppConfig::default();
    let mut seen = HashSet::new();
    for (name, value) in theme_tokens(&cfg) {
        assert!(seen.insert(name), "duplicate theme token '{}'", name);
        assert!(name.starts_with("--color-"), "token '{}' not namespaced", name);
        assert!(!value.is_empty(), "empty value for token '{}'", name);
    }
    assert_eq!(seen.len(), 5);
}

#[test]
fn hint_texts_are_distinct() {
    let slots = [
        HintSlot::Acceptance,
        HintSlot::AlmostThere,
        HintSlot::Tiring,
        HintSlot::Shy,
        HintSlot::Default,
    ];
    let texts: HashSet<&str> = slots.iter().map(|s| hint_text(*s)).collect();
    assert_eq!(texts.len(), slots.len(), "hint slots share text");
}

#[test]
fn decoration_placements_do_not_stack() {
    // Two decorations at the exact same spot would render as one; keep the
    // design data distinct.
    let mut seen = HashSet::new();
    for spot in &FLOATING_HEARTS {
        assert!(
            seen.insert((spot.left_pct as i32, spot.top_pct as i32)),
            "duplicate heart placement at {},{}",
            spot.left_pct,
            spot.top_pct
        );
    }
    for spot in &SPARKLES {
        assert!(
            seen.insert((spot.left_pct as i32, spot.top_pct as i32)),
            "sparkle overlaps another decoration at {},{}",
            spot.left_pct,
            spot.top_pct
        );
    }
}

#[test]
fn confetti_uses_the_whole_palette_eventually() {
    let cfg = AppConfig::default();
    let mut rng = Lcg::new(123);
    let pieces = spawn_confetti(200, cfg.confetti_colors.len(), &mut rng);
    let used: HashSet<usize> = pieces.iter().map(|p| p.color_idx).collect();
    assert_eq!(used.len(), cfg.confetti_colors.len());
    for idx in used {
        assert!(idx < cfg.confetti_colors.len());
    }
}

#[test]
fn default_config_count_matches_generated_pieces() {
    let cfg = AppConfig::default();
    let mut rng = Lcg::new(4);
    let pieces = spawn_confetti(cfg.confetti_count, cfg.confetti_colors.len(), &mut rng);
    assert_eq!(pieces.len(), cfg.confetti_count);
}
