//! Per-frame read side: elapsed-time measurement, the immutable view of a
//! round, and painting that view onto a 2D canvas.

use web_sys::CanvasRenderingContext2d;

use crate::model::Round;
use crate::state::board::TILE_RADIUS;
use crate::util::format_time_left;

pub const FOUND_LIST_LEN: usize = 8;
pub const CONTROL_HINTS: &str =
    "Controls: Click tiles to build word. Enter to submit. Backspace to remove. Space clear. T change theme. P pause. R restart.";

/// Converts animation-frame timestamps into elapsed seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    last_ms: Option<f64>,
}

impl FrameTimer {
    /// Seconds since the previous call; 0 on the first frame and never negative.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileView {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    pub used: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub width: f64,
    pub height: f64,
    pub theme_name: String,
    pub time_left: String,
    pub score: u32,
    /// Shown only while a combo is active.
    pub combo: Option<u32>,
    /// Upper-case preview of the word being built.
    pub word: String,
    pub tiles: Vec<TileView>,
    pub found: Vec<String>,
    pub paused: bool,
    /// Final score once the round is over.
    pub final_score: Option<u32>,
}

impl Snapshot {
    pub fn of(round: &Round) -> Self {
        let combo = round.scorer.combo;
        Self {
            width: round.surface.width,
            height: round.surface.height,
            theme_name: round.theme().name.to_string(),
            time_left: format_time_left(round.clock.time_left),
            score: round.scorer.score,
            combo: (combo > 1).then_some(combo),
            word: round.current_word().to_uppercase(),
            tiles: round
                .board
                .tiles
                .iter()
                .map(|t| TileView {
                    ch: t.ch,
                    x: t.x,
                    y: t.y,
                    used: t.used,
                })
                .collect(),
            found: round.scorer.found.iter().take(FOUND_LIST_LEN).cloned().collect(),
            paused: !round.running() && !round.over(),
            final_score: round.over().then_some(round.scorer.score),
        }
    }
}

pub fn paint(ctx: &CanvasRenderingContext2d, snap: &Snapshot) {
    let (w, h) = (snap.width, snap.height);
    ctx.set_text_align("start");
    ctx.set_text_baseline("alphabetic");
    ctx.set_fill_style_str("#051025");
    ctx.fill_rect(0.0, 0.0, w, h);

    // title + theme
    ctx.set_fill_style_str("#eaf4ff");
    ctx.set_font("20px Inter, sans-serif");
    let _ = ctx.fill_text("Word Weave", 18.0, 28.0);
    ctx.set_font("14px Inter, sans-serif");
    ctx.set_fill_style_str("#cfe8ff");
    let _ = ctx.fill_text(&format!("Theme: {} (press T to switch)", snap.theme_name), 18.0, 48.0);

    // HUD
    ctx.set_font("16px Inter, sans-serif");
    ctx.set_fill_style_str("#eaf4ff");
    let _ = ctx.fill_text(&format!("Time: {}", snap.time_left), w - 140.0, 28.0);
    let _ = ctx.fill_text(&format!("Score: {}", snap.score), w - 140.0, 48.0);
    if let Some(combo) = snap.combo {
        let _ = ctx.fill_text(&format!("Combo x{}", combo), w - 140.0, 68.0);
    }
    if snap.paused {
        ctx.set_fill_style_str("#ffd37a");
        let _ = ctx.fill_text("Paused (P to resume)", w - 180.0, 88.0);
    }

    // word preview
    ctx.set_font("22px Inter, sans-serif");
    ctx.set_fill_style_str("#ffffff");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(&snap.word, w / 2.0, h / 2.0 - 80.0);

    // tiles
    ctx.set_font("24px Inter, sans-serif");
    ctx.set_text_baseline("middle");
    for t in &snap.tiles {
        ctx.begin_path();
        ctx.set_fill_style_str(if t.used { "rgba(255, 165, 0, 0.95)" } else { "#0b5b82" });
        let _ = ctx.arc(t.x, t.y, TILE_RADIUS, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
        ctx.set_fill_style_str("#fff");
        let _ = ctx.fill_text(&t.ch.to_string(), t.x, t.y);
    }
    ctx.set_text_align("start");
    ctx.set_text_baseline("alphabetic");

    // found words
    ctx.set_font("14px Inter, sans-serif");
    ctx.set_fill_style_str("#bde8ff");
    let _ = ctx.fill_text("Found:", 18.0, 90.0);
    ctx.set_fill_style_str("#9fd8ff");
    for (i, word) in snap.found.iter().enumerate() {
        let _ = ctx.fill_text(word, 18.0, 110.0 + i as f64 * 20.0);
    }

    ctx.set_fill_style_str("#9fbfd6");
    let _ = ctx.fill_text(CONTROL_HINTS, 18.0, h - 24.0);

    if let Some(score) = snap.final_score {
        ctx.set_fill_style_str("rgba(0,0,0,0.6)");
        ctx.fill_rect(w / 2.0 - 220.0, h / 2.0 - 70.0, 440.0, 140.0);
        ctx.set_text_align("center");
        ctx.set_fill_style_str("#ffdfef");
        ctx.set_font("bold 36px Inter, sans-serif");
        let _ = ctx.fill_text("Time's Up!", w / 2.0, h / 2.0 - 10.0);
        ctx.set_font("18px Inter, sans-serif");
        ctx.set_fill_style_str("#ffd6ec");
        let _ = ctx.fill_text(&format!("Final Score: {}", score), w / 2.0, h / 2.0 + 28.0);
        ctx.set_text_align("start");
    }
}
