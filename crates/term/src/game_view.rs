//! GameView: maps a round snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (columns shrink with the viewport, the image takes what is left):
//!
//! ```text
//! ┌──────────────── image ────────────────┐  PIXEL GUESS
//! │ ▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀▀ │  TIME / ATTEMPTS / ...
//! └───────────────────────────────────────┘  HISTORY
//! Guess: ash_
//!  > Ashe
//! Correct! Ashe
//! Enter accept  Tab skip  F2 ...
//! ```

use image::RgbaImage;

use crate::core::{RoundPhase, RoundSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Feedback;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Host-side text the snapshot does not carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusLine<'a> {
    /// e.g. "Characters - Hard"
    pub title: &'a str,
    /// Shown under the title, e.g. the difficulty blurb.
    pub subtitle: Option<&'a str>,
    /// Transient message (empty pool, preference write failure).
    pub message: Option<&'a str>,
}

const PANEL_W: u16 = 24;
const GAP: u16 = 2;
/// Rows under the image: guess, suggestions, feedback, help.
const FOOTER_FIXED: u16 = 3;

const BG: Rgb = Rgb::new(0, 0, 0);
const IMAGE_BG: Rgb = Rgb::new(24, 24, 32);
const TEXT: CellStyle = CellStyle::new(Rgb::new(210, 210, 210), BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), BG).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(170, 170, 180), BG);
const GOOD: CellStyle = CellStyle::new(Rgb::new(110, 220, 120), BG).bold();
const BAD: CellStyle = CellStyle::new(Rgb::new(230, 90, 90), BG).bold();
const FOCUS: CellStyle = CellStyle::new(Rgb::new(10, 10, 10), Rgb::new(200, 170, 90)).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), BG).dim();

/// A lightweight terminal renderer for the guessing game.
#[derive(Debug, Clone)]
pub struct GameView {
    max_suggestions: u16,
    show_history: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            show_history: true,
        }
    }
}

impl GameView {
    pub fn new(max_suggestions: u16) -> Self {
        Self {
            max_suggestions,
            ..Self::default()
        }
    }

    pub fn toggle_history(&mut self) {
        self.show_history = !self.show_history;
    }

    /// Render into an existing framebuffer.
    ///
    /// Returns where the terminal cursor should sit (end of the guess input),
    /// or `None` when guesses are not accepted right now.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot<'_, RgbaImage>,
        status: StatusLine<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> Option<(u16, u16)> {
        fb.resize(viewport.width, viewport.height);
        fb.clear(TEXT.cell(' '));

        let footer_h = FOOTER_FIXED + self.max_suggestions + 1;
        let panel_w = if viewport.width >= PANEL_W * 2 { PANEL_W } else { 0 };
        let image_w = viewport.width.saturating_sub(panel_w + if panel_w > 0 { GAP } else { 0 });
        let image_h = viewport.height.saturating_sub(footer_h);

        self.draw_image_area(fb, snap, 0, 0, image_w, image_h);
        if panel_w > 0 {
            self.draw_side_panel(fb, snap, status, image_w + GAP, 0, panel_w, image_h);
        }
        self.draw_footer(fb, snap, status, image_h, viewport)
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &RoundSnapshot<'_, RgbaImage>,
        status: StatusLine<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_image_area(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot<'_, RgbaImage>,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        if w < 4 || h < 3 {
            return;
        }
        fb.draw_border(x, y, w, h, BORDER);
        let inner_x = x + 1;
        let inner_y = y + 1;
        let inner_w = w - 2;
        let inner_h = h - 2;
        fb.fill_rect(inner_x, inner_y, inner_w, inner_h, ' ', CellStyle::new(TEXT.fg, IMAGE_BG));

        let placeholder = match (snap.phase, snap.revealed) {
            (RoundPhase::Stalled, _) => Some("image failed to load - Tab to skip"),
            (RoundPhase::Loading, _) => Some("loading..."),
            (_, None) => Some("no round"),
            (_, Some(img)) => {
                blit_half_blocks(fb, img, inner_x, inner_y, inner_w, inner_h);
                None
            }
        };
        if let Some(text) = placeholder {
            let text_w = text.chars().count() as u16;
            let tx = inner_x + inner_w.saturating_sub(text_w) / 2;
            let ty = inner_y + inner_h / 2;
            fb.put_str_clipped(tx, ty, text, inner_w, CellStyle::new(HINT.fg, IMAGE_BG));
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot<'_, RgbaImage>,
        status: StatusLine<'_>,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let bottom = y.saturating_add(h);
        let mut row = y;
        let mut stat = |fb: &mut FrameBuffer, label: &str, value: &str| {
            if row < bottom {
                let n = fb.put_str_clipped(x, row, label, w, LABEL);
                fb.put_str_clipped(x + n + 1, row, value, w.saturating_sub(n + 1), TEXT);
                row += 1;
            }
        };

        stat(fb, "PIXEL GUESS", "");
        stat(fb, "", status.title);
        stat(fb, "", status.subtitle.unwrap_or(""));
        stat(fb, "TIME", &snap.clock());
        stat(fb, "ATTEMPTS", &snap.stats.attempts.to_string());
        stat(fb, "CORRECT", &snap.stats.correct.to_string());
        stat(fb, "STREAK", &snap.stats.streak.to_string());
        stat(fb, "PER MIN", &snap.ratio.to_string());
        stat(fb, "", "");
        let pool = if snap.include_extended { "on" } else { "off" };
        stat(fb, snap.kind.extended_label(), pool);
        stat(fb, "block", &snap.block_size.to_string());
        stat(fb, "", "");

        if !self.show_history || row >= bottom {
            return;
        }
        fb.put_str_clipped(x, row, "HISTORY", w, LABEL);
        row += 1;
        for entry in snap.history {
            if row >= bottom {
                break;
            }
            let (mark, style) = if entry.was_correct {
                ('+', GOOD)
            } else {
                ('x', BAD)
            };
            fb.put_char(x, row, mark, style);
            fb.put_str_clipped(x + 2, row, &entry.label, w.saturating_sub(2), TEXT);
            row += 1;
        }
    }

    fn draw_footer(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot<'_, RgbaImage>,
        status: StatusLine<'_>,
        top: u16,
        viewport: Viewport,
    ) -> Option<(u16, u16)> {
        let w = viewport.width;
        let mut row = top;

        let prompt = "Guess: ";
        let n = fb.put_str(0, row, prompt, LABEL);
        let typed = fb.put_str_clipped(n, row, snap.guess_input, w.saturating_sub(n + 1), TEXT);
        let caret = (snap.accepts_guesses() && row < viewport.height).then_some((n + typed, row));
        row += 1;

        let shown = self.max_suggestions as usize;
        let start = suggestion_window_start(snap.focused, snap.suggestions.len(), shown);
        for (i, name) in snap.suggestions.iter().enumerate().skip(start).take(shown) {
            if i == snap.focused {
                fb.put_str_clipped(0, row, " > ", w, FOCUS);
                fb.put_str_clipped(3, row, name, w.saturating_sub(3), FOCUS);
            } else {
                fb.put_str_clipped(3, row, name, w.saturating_sub(3), TEXT);
            }
            row += 1;
        }
        let hidden = snap.suggestions.len().saturating_sub(shown);
        if hidden > 0 {
            let more = format!("   +{hidden} more");
            fb.put_str_clipped(0, row, &more, w, HINT);
        }
        row = top + 1 + self.max_suggestions + 1;

        match (snap.feedback, snap.answer()) {
            (Feedback::Correct, Some(name)) => {
                let n = fb.put_str_clipped(0, row, "Correct! ", w, GOOD);
                fb.put_str_clipped(n, row, name, w.saturating_sub(n), GOOD);
            }
            (Feedback::Wrong, _) => {
                fb.put_str_clipped(0, row, "Wrong, try again", w, BAD);
            }
            _ => {
                if let Some(msg) = status.message {
                    fb.put_str_clipped(0, row, msg, w, BAD);
                }
            }
        }
        row += 1;

        let history_key = if self.show_history { "F3 hide history" } else { "F3 history" };
        let help = format!(
            "Enter accept  Up/Down pick  Tab skip  F2 {}  {history_key}  Esc quit",
            snap.kind.extended_label()
        );
        fb.put_str_clipped(0, row, &help, w, HINT);

        caret
    }
}

/// Scale `img` to fit `w x h` cells (two pixels per cell vertically),
/// centered, nearest-neighbour. Transparent pixels blend onto the image
/// background.
fn blit_half_blocks(fb: &mut FrameBuffer, img: &RgbaImage, x: u16, y: u16, w: u16, h: u16) {
    let (iw, ih) = img.dimensions();
    if iw == 0 || ih == 0 || w == 0 || h == 0 {
        return;
    }
    let (cols, px_rows) = fit(iw, ih, u32::from(w), u32::from(h) * 2);
    let rows = px_rows.div_ceil(2);
    let off_x = x + (w - cols as u16) / 2;
    let off_y = y + (h - rows as u16) / 2;

    let sample = |px: u32, py: u32| -> Rgb {
        let scale = |p: u32, src: u32, dst: u32| -> u32 {
            let v = (2 * u64::from(p) + 1) * u64::from(src) / (2 * u64::from(dst));
            (v as u32).min(src - 1)
        };
        let sx = scale(px, iw, cols);
        let sy = scale(py, ih, px_rows);
        let p = img.get_pixel(sx, sy).0;
        IMAGE_BG.blend(Rgb::new(p[0], p[1], p[2]), p[3])
    };

    for row in 0..rows {
        for col in 0..cols {
            let top = sample(col, row * 2);
            let bottom = if row * 2 + 1 < px_rows {
                sample(col, row * 2 + 1)
            } else {
                IMAGE_BG
            };
            fb.put_pixel_pair(off_x + col as u16, off_y + row as u16, top, bottom);
        }
    }
}

/// First suggestion row to draw so that `focused` stays inside a window of
/// `shown` rows.
fn suggestion_window_start(focused: usize, len: usize, shown: usize) -> usize {
    if shown == 0 || len <= shown {
        return 0;
    }
    (focused + 1).saturating_sub(shown).min(len - shown)
}

/// Largest `(w, h)` with the aspect of `iw x ih` inside `max_w x max_h`,
/// never below 1x1.
fn fit(iw: u32, ih: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let by_width = (max_w, (u64::from(ih) * u64::from(max_w) / u64::from(iw)) as u32);
    let (w, h) = if by_width.1 <= max_h {
        by_width
    } else {
        ((u64::from(iw) * u64::from(max_h) / u64::from(ih)) as u32, max_h)
    };
    (w.clamp(1, max_w.max(1)), h.clamp(1, max_h.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_aspect_inside_bounds() {
        assert_eq!(fit(100, 50, 40, 40), (40, 20));
        assert_eq!(fit(50, 100, 40, 40), (20, 40));
        assert_eq!(fit(10, 10, 40, 40), (40, 40));
        assert_eq!(fit(1000, 1, 10, 10), (10, 1));
    }

    #[test]
    fn blit_fills_centered_cells() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
        let mut fb = FrameBuffer::new(10, 2);
        blit_half_blocks(&mut fb, &img, 0, 0, 10, 2);
        // 4x4 square into 10 cols x 4 px rows -> 4x4 px, 2 cell rows, centered.
        let cell = fb.get(3, 0).unwrap();
        assert_eq!(cell.ch, crate::fb::HALF_BLOCK);
        assert_eq!(cell.style.fg, Rgb::new(255, 0, 0));
        assert_eq!(cell.style.bg, Rgb::new(255, 0, 0));
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
        assert_eq!(fb.get(7, 1).unwrap().ch, ' ');
    }

    #[test]
    fn suggestion_window_follows_focus() {
        assert_eq!(suggestion_window_start(0, 3, 5), 0);
        assert_eq!(suggestion_window_start(4, 8, 5), 0);
        assert_eq!(suggestion_window_start(5, 8, 5), 1);
        assert_eq!(suggestion_window_start(7, 8, 5), 3);
        assert_eq!(suggestion_window_start(2, 8, 0), 0);
    }

    #[test]
    fn transparent_pixels_show_background() {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 0]));
        let mut fb = FrameBuffer::new(2, 1);
        blit_half_blocks(&mut fb, &img, 0, 0, 2, 1);
        assert_eq!(fb.get(0, 0).unwrap().style.fg, IMAGE_BG);
    }
}
