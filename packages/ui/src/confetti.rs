//! Falling confetti shown on the success screens.

use std::time::Duration;

use dioxus::prelude::*;

/// How long the confetti stays on screen.
pub const CONFETTI_DURATION: Duration = Duration::from_secs(3);

const PIECES: usize = 20;
const COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#FFE66D", "#FF8E53", "#45B7D1"];

/// Placement of one confetti piece, as CSS values.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_percent: u32,
    pub top_percent: u32,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub color: &'static str,
}

/// Spread `count` pieces across the width with staggered timing.
///
/// Positions come from small co-prime strides instead of a random source so
/// the layout is the same on every render.
pub fn confetti_pieces(count: usize) -> Vec<ConfettiPiece> {
    (0..count as u32)
        .map(|i| ConfettiPiece {
            left_percent: (i * 37 + 11) % 100,
            top_percent: (i * 7) % 20,
            delay_ms: (i * 293) % 2000,
            duration_ms: 3000 + (i * 431) % 2000,
            color: COLORS[i as usize % COLORS.len()],
        })
        .collect()
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[component]
pub fn Confetti() -> Element {
    let mut visible = use_signal(|| true);

    use_future(move || async move {
        sleep(CONFETTI_DURATION).await;
        visible.set(false);
    });

    if !visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "confetti",
            "aria-hidden": "true",
            for (i, piece) in confetti_pieces(PIECES).into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "confetti__piece",
                    style: "left: {piece.left_percent}%; top: -{piece.top_percent}%; animation-delay: {piece.delay_ms}ms; animation-duration: {piece.duration_ms}ms; background-color: {piece.color};",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pieces_stay_in_bounds() {
        let pieces = confetti_pieces(PIECES);
        assert_eq!(pieces.len(), PIECES);
        for piece in &pieces {
            assert!(piece.left_percent < 100);
            assert!(piece.top_percent < 20);
            assert!(piece.delay_ms < 2000);
            assert!((3000..5000).contains(&piece.duration_ms));
        }
    }

    #[test]
    fn test_pieces_are_spread_out() {
        let pieces = confetti_pieces(PIECES);
        let mut lefts: Vec<u32> = pieces.iter().map(|p| p.left_percent).collect();
        lefts.sort_unstable();
        lefts.dedup();
        assert_eq!(lefts.len(), PIECES);
        assert!(pieces.iter().any(|p| p.color != pieces[0].color));
    }
}
