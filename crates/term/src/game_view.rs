//! GameView: draws a session snapshot plus the shell state into a framebuffer.
//!
//! This module is pure (no I/O) and does not allocate once the framebuffer has
//! reached the viewport size.

use crate::core::{Card, InvalidConfiguration, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::shell::{Cursor, Overlay, SettingsDialog, SettingsField, TimeUpDialog};
use crate::types::{Animal, Phase};

const BG: Rgb = Rgb::new(0, 0, 0);
const TABLE_BG: Rgb = Rgb::new(24, 28, 36);

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

/// Lays out the card grid, the status line and the dialogs.
pub struct GameView {
    /// Card width in terminal columns, including the border.
    card_w: u16,
    /// Card height in terminal rows, including the border.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 10,
            card_h: 3,
        }
    }
}

impl GameView {
    /// Cards smaller than 3x3 cannot show a label and are widened.
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(3),
            card_h: card_h.max(3),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        cursor: Cursor,
        overlay: &Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let columns = cursor.columns().max(1) as u16;
        let rows = (snap.cards.len() as u16).div_ceil(columns);
        let grid_w = columns * (self.card_w + 1) - 1;
        let grid_h = rows * self.card_h;
        // Status line, blank, grid, blank, key hints.
        let total_h = grid_h + 4;

        let start_x = viewport.width.saturating_sub(grid_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;

        self.draw_status(fb, snap, start_x, start_y);

        let grid_y = start_y + 2;
        let show_cursor = matches!(overlay, Overlay::None) && snap.phase == Phase::Running;
        for (i, card) in snap.cards.iter().enumerate() {
            let col = i as u16 % columns;
            let row = i as u16 / columns;
            let x = start_x + col * (self.card_w + 1);
            let y = grid_y + row * self.card_h;
            let selected = show_cursor && i == cursor.index();
            self.draw_card(fb, card, x, y, selected);
        }

        let hint = CellStyle::fg(Rgb::new(130, 130, 140));
        fb.put_str(
            start_x,
            grid_y + grid_h + 1,
            "arrows move  space flip  o settings  r restart  q quit",
            hint,
        );

        match overlay {
            Overlay::None => {}
            Overlay::Settings(dialog) => self.draw_settings(fb, dialog, viewport),
            Overlay::TimeUp(dialog) => self.draw_time_up(fb, dialog, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &SessionSnapshot,
        cursor: Cursor,
        overlay: &Overlay,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, overlay, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, x: u16, y: u16) {
        let label = CellStyle::fg(Rgb::new(150, 150, 160));
        let value = CellStyle::fg(Rgb::new(235, 235, 235)).bold();
        let urgent = CellStyle::fg(Rgb::new(235, 90, 80)).bold();

        let mut cx = fb.put_str(x, y, "Time ", label);
        let time_style = if snap.seconds_remaining <= 5 {
            urgent
        } else {
            value
        };
        cx = fb.put_u32(cx, y, snap.seconds_remaining, time_style);
        cx = fb.put_str(cx, y, "s   Pairs ", label);
        cx = fb.put_u32(cx, y, u32::from(snap.matched_pairs), value);
        cx = fb.put_str(cx, y, "/", label);
        cx = fb.put_u32(cx, y, u32::from(snap.total_pairs), value);
        cx = fb.put_str(cx, y, "   Mistakes ", label);
        fb.put_u32(cx, y, snap.mistakes, value);
    }

    fn draw_card(&self, fb: &mut FrameBuffer, card: &Card, x: u16, y: u16, selected: bool) {
        let inner_w = self.card_w - 2;
        let inner_h = self.card_h - 2;

        let (border, face) = if card.is_matched {
            let style = CellStyle::fg(animal_color(card.animal)).dim().on(TABLE_BG);
            (style, style)
        } else if card.is_flipped {
            let style = CellStyle::fg(animal_color(card.animal)).on(TABLE_BG);
            (style, style.bold())
        } else {
            let style = CellStyle::fg(Rgb::new(110, 110, 125)).on(TABLE_BG);
            (style, style.dim())
        };
        let border = if selected {
            CellStyle::fg(Rgb::new(250, 220, 90)).bold().on(TABLE_BG)
        } else {
            border
        };

        fb.draw_box(x, y, self.card_w, self.card_h, border);
        if card.is_flipped {
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', face);
            let name = card.animal.as_str();
            let name = &name[..name.len().min(inner_w as usize)];
            let nx = x + 1 + (inner_w - name.len() as u16) / 2;
            fb.put_str(nx, y + 1 + inner_h / 2, name, face);
        } else {
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, '░', face);
        }
    }

    fn draw_settings(&self, fb: &mut FrameBuffer, dialog: &SettingsDialog, viewport: Viewport) {
        let (x, y) = draw_dialog_frame(fb, viewport, 36, 8, "Settings");

        let label = CellStyle::fg(Rgb::new(200, 200, 200)).on(BG);
        let value = CellStyle::fg(Rgb::new(255, 255, 255)).bold().on(BG);
        let marker = CellStyle::fg(Rgb::new(250, 220, 90)).bold().on(BG);

        let card_row = y + 2;
        let secs_row = y + 3;
        let selected_row = match dialog.field() {
            SettingsField::CardCount => card_row,
            SettingsField::Countdown => secs_row,
        };
        fb.put_char(x + 2, selected_row, '>', marker);

        fb.put_str(x + 4, card_row, "Cards", label);
        fb.put_u32(x + 16, card_row, dialog.card_count(), value);
        fb.put_str(x + 4, secs_row, "Countdown", label);
        let end = fb.put_u32(x + 16, secs_row, dialog.countdown_secs(), value);
        fb.put_str(end, secs_row, "s", label);

        if let Some(err) = dialog.error() {
            draw_config_error(fb, x + 2, y + 5, err);
        }

        let hint = CellStyle::fg(Rgb::new(130, 130, 140)).on(BG);
        fb.put_str(x + 2, y + 6, "</> change  enter save  esc", hint);
    }

    fn draw_time_up(&self, fb: &mut FrameBuffer, dialog: &TimeUpDialog, viewport: Viewport) {
        let title = if dialog.won() { "Well done" } else { "Game over" };
        let (x, y) = draw_dialog_frame(fb, viewport, 32, 6, title);

        let msg = dialog.message();
        let msg_style = CellStyle::fg(Rgb::new(255, 255, 255)).bold().on(BG);
        let mx = x + 32u16.saturating_sub(msg.len() as u16) / 2;
        fb.put_str(mx, y + 2, msg, msg_style);

        let hint = CellStyle::fg(Rgb::new(130, 130, 140)).on(BG);
        fb.put_str(x + 2, y + 4, "enter restart  o settings", hint);
    }
}

/// Clear and outline a centered dialog. Returns its top-left corner.
fn draw_dialog_frame(
    fb: &mut FrameBuffer,
    viewport: Viewport,
    w: u16,
    h: u16,
    title: &str,
) -> (u16, u16) {
    let x = viewport.width.saturating_sub(w) / 2;
    let y = viewport.height.saturating_sub(h) / 2;
    let border = CellStyle::fg(Rgb::new(200, 200, 200)).on(BG);

    fb.fill_rect(x, y, w, h, ' ', border);
    fb.draw_box(x, y, w, h, border);
    fb.put_str(x + 2, y, title, border.bold());
    (x, y)
}

fn draw_config_error(fb: &mut FrameBuffer, x: u16, y: u16, err: InvalidConfiguration) {
    let style = CellStyle::fg(Rgb::new(235, 90, 80)).on(BG);
    let (text, min, max) = match err {
        InvalidConfiguration::CardCount { min, max, .. } => {
            ("cards: even, ", u32::from(min), u32::from(max))
        }
        InvalidConfiguration::Countdown { min, max, .. } => ("seconds: ", min, max),
    };
    let mut cx = fb.put_str(x, y, text, style);
    cx = fb.put_u32(cx, y, min, style);
    cx = fb.put_str(cx, y, "-", style);
    fb.put_u32(cx, y, max, style);
}

fn animal_color(animal: Animal) -> Rgb {
    match animal {
        Animal::Cat => Rgb::new(240, 170, 90),
        Animal::Dog => Rgb::new(190, 140, 100),
        Animal::Frog => Rgb::new(110, 210, 110),
        Animal::Lion => Rgb::new(240, 200, 70),
        Animal::Panda => Rgb::new(230, 230, 230),
        Animal::Rabbit => Rgb::new(230, 160, 200),
        Animal::Bear => Rgb::new(170, 120, 80),
        Animal::Tiger => Rgb::new(250, 140, 40),
        Animal::Pig => Rgb::new(250, 150, 170),
        Animal::Fox => Rgb::new(230, 100, 50),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RoundConfig, Session};

    fn contains(fb: &FrameBuffer, text: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_string(y).contains(text))
    }

    fn session(cards: u32) -> Session {
        let mut s = Session::new(RoundConfig::new(cards, 30).unwrap(), 7);
        s.start().unwrap();
        s
    }

    #[test]
    fn status_line_shows_counters() {
        let s = session(12);
        let fb = GameView::default().render(
            &s.snapshot(),
            Cursor::new(12),
            &Overlay::None,
            Viewport::new(80, 24),
        );
        assert!(contains(&fb, "Time 30s   Pairs 0/6   Mistakes 0"));
    }

    #[test]
    fn face_down_cards_hide_animals() {
        let s = session(4);
        let fb = GameView::default().render(
            &s.snapshot(),
            Cursor::new(4),
            &Overlay::None,
            Viewport::new(80, 24),
        );
        for card in s.deck().cards() {
            assert!(!contains(&fb, card.animal.as_str()));
        }
    }

    #[test]
    fn flipped_card_shows_its_animal() {
        let mut s = session(4);
        assert!(s.flip(2));
        let animal = s.deck().get(2).unwrap().animal;

        let fb = GameView::default().render(
            &s.snapshot(),
            Cursor::new(4),
            &Overlay::None,
            Viewport::new(80, 24),
        );
        assert!(contains(&fb, animal.as_str()));
    }

    #[test]
    fn settings_dialog_shows_draft_and_error() {
        let s = session(4);
        let mut dialog = SettingsDialog::open(RoundConfig::new(4, 30).unwrap());
        dialog.set_card_count(5);
        assert!(dialog.save().is_err());

        let fb = GameView::default().render(
            &s.snapshot(),
            Cursor::new(4),
            &Overlay::Settings(dialog),
            Viewport::new(80, 24),
        );
        assert!(contains(&fb, "Settings"));
        assert!(contains(&fb, "> Cards"));
        assert!(contains(&fb, "cards: even, 2-20"));
    }

    #[test]
    fn time_up_dialog_shows_message() {
        let s = session(4);
        let fb = GameView::default().render(
            &s.snapshot(),
            Cursor::new(4),
            &Overlay::TimeUp(TimeUpDialog::new(false)),
            Viewport::new(80, 24),
        );
        assert!(contains(&fb, "Time is up!"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let s = session(20);
        let fb = GameView::default().render(
            &s.snapshot(),
            Cursor::new(20),
            &Overlay::TimeUp(TimeUpDialog::new(true)),
            Viewport::new(5, 3),
        );
        assert_eq!(fb.width(), 5);
    }
}
