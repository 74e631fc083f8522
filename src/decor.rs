//! Static decoration data and confetti generation.
//!
//! Placements are fixed design data (like a level layout): hearts hug the
//! page edges, sparkles sit nearer the middle. Confetti pieces are generated
//! per celebration with the shared LCG so the spread is testable natively.

use crate::geometry::Lcg;

/// One floating heart in the page background. Offsets are percentages of the
/// page; even indices float one way, odd indices the other.
#[derive(Clone, Copy, Debug)]
pub struct HeartSpot {
    pub left_pct: f32,
    pub top_pct: f32,
    pub size: u32,
    pub delay_s: f32,
}

pub static FLOATING_HEARTS: [HeartSpot; 8] = [
    HeartSpot { left_pct: 5.0, top_pct: 10.0, size: 24, delay_s: 0.0 },
    HeartSpot { left_pct: 90.0, top_pct: 15.0, size: 20, delay_s: 0.5 },
    HeartSpot { left_pct: 15.0, top_pct: 70.0, size: 18, delay_s: 1.0 },
    HeartSpot { left_pct: 85.0, top_pct: 65.0, size: 22, delay_s: 1.5 },
    HeartSpot { left_pct: 8.0, top_pct: 40.0, size: 16, delay_s: 2.0 },
    HeartSpot { left_pct: 92.0, top_pct: 45.0, size: 14, delay_s: 2.5 },
    HeartSpot { left_pct: 20.0, top_pct: 85.0, size: 20, delay_s: 0.8 },
    HeartSpot { left_pct: 75.0, top_pct: 80.0, size: 16, delay_s: 1.2 },
];

/// One twinkling sparkle in the page background.
#[derive(Clone, Copy, Debug)]
pub struct SparkleSpot {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_s: f32,
}

pub static SPARKLES: [SparkleSpot; 5] = [
    SparkleSpot { left_pct: 25.0, top_pct: 20.0, delay_s: 0.0 },
    SparkleSpot { left_pct: 70.0, top_pct: 25.0, delay_s: 1.0 },
    SparkleSpot { left_pct: 30.0, top_pct: 55.0, delay_s: 2.0 },
    SparkleSpot { left_pct: 65.0, top_pct: 60.0, delay_s: 0.5 },
    SparkleSpot { left_pct: 45.0, top_pct: 35.0, delay_s: 1.5 },
];

/// One confetti particle for the success celebration.
#[derive(Clone, Copy, Debug)]
pub struct ConfettiPiece {
    /// Horizontal start position in percent of the page width.
    pub left_pct: f64,
    /// Index into the configured color palette.
    pub color_idx: usize,
    /// Round pieces render as circles, the rest as squares.
    pub round: bool,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Generate `count` confetti pieces: uniform horizontal spread, random palette
/// color, 50/50 round or square, start delay in [0, 0.5)s and fall duration
/// in [1.5, 2.5)s.
pub fn spawn_confetti(count: usize, palette_len: usize, rng: &mut Lcg) -> Vec<ConfettiPiece> {
    if palette_len == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| ConfettiPiece {
            left_pct: rng.next_f64() * 100.0,
            color_idx: (rng.next_f64() * palette_len as f64) as usize % palette_len,
            round: rng.next_f64() > 0.5,
            delay_s: rng.next_f64() * 0.5,
            duration_s: 1.5 + rng.next_f64(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_and_sparkle_placements_are_on_page() {
        for spot in &FLOATING_HEARTS {
            assert!((0.0..=100.0).contains(&spot.left_pct));
            assert!((0.0..=100.0).contains(&spot.top_pct));
            assert!(spot.size > 0);
        }
        for spot in &SPARKLES {
            assert!((0.0..=100.0).contains(&spot.left_pct));
            assert!((0.0..=100.0).contains(&spot.top_pct));
        }
    }

    #[test]
    fn confetti_pieces_stay_in_range() {
        let mut rng = Lcg::new(77);
        let pieces = spawn_confetti(30, 4, &mut rng);
        assert_eq!(pieces.len(), 30);
        for piece in &pieces {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!(piece.color_idx < 4);
            assert!((0.0..0.5).contains(&piece.delay_s));
            assert!((1.5..2.5).contains(&piece.duration_s));
        }
        // Both shapes should show up in a batch of 30.
        assert!(pieces.iter().any(|p| p.round));
        assert!(pieces.iter().any(|p| !p.round));
    }

    #[test]
    fn empty_palette_yields_no_confetti() {
        let mut rng = Lcg::new(1);
        assert!(spawn_confetti(10, 0, &mut rng).is_empty());
    }
}
