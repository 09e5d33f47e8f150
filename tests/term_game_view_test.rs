use tui_memory::core::{RoundConfig, Session};
use tui_memory::shell::{App, Cursor, Overlay};
use tui_memory::term::{FrameBuffer, GameView, Viewport};
use tui_memory::types::GameAction;

fn find(fb: &FrameBuffer, text: &str) -> Option<(u16, u16)> {
    (0..fb.height()).find_map(|y| {
        let row: Vec<char> = fb.row_string(y).chars().collect();
        let needle: Vec<char> = text.chars().collect();
        row.windows(needle.len())
            .position(|w| w == needle.as_slice())
            .map(|x| (x as u16, y))
    })
}

fn render(app: &App) -> FrameBuffer {
    GameView::default().render(
        &app.session().snapshot(),
        app.cursor(),
        app.overlay(),
        Viewport::new(80, 24),
    )
}

#[test]
fn term_view_lays_out_twelve_cards_in_four_columns() {
    let app = App::new(RoundConfig::new(12, 30).unwrap(), 1).unwrap();
    let fb = render(&app);

    // Four card tops on the first grid row, three rows of cards.
    let (_, status_y) = find(&fb, "Time 30s").unwrap();
    let top = fb.row_string(status_y + 2);
    assert_eq!(top.matches('┌').count(), 4);
    let bottom_of_grid = fb.row_string(status_y + 2 + 3 * 3 - 1);
    assert_eq!(bottom_of_grid.matches('└').count(), 4);
    assert_eq!(fb.row_string(status_y + 2 + 3 * 3).matches('┌').count(), 0);
}

#[test]
fn term_view_highlights_card_under_cursor() {
    let mut app = App::new(RoundConfig::new(4, 30).unwrap(), 1).unwrap();
    let before = render(&app);
    let (x0, y0) = find(&before, "┌").unwrap();
    // Cards are 10 columns wide with a 1 column gap.
    let x1 = x0 + 11;
    let highlighted = before.get(x0, y0).unwrap().style;
    let plain = before.get(x1, y0).unwrap().style;
    assert_ne!(highlighted, plain);

    app.handle_action(GameAction::MoveRight);
    let after = render(&app);
    assert_eq!(after.get(x0, y0).unwrap().style, plain);
    assert_eq!(after.get(x1, y0).unwrap().style, highlighted);
}

#[test]
fn term_view_shows_flipped_animal_and_counters() {
    let mut session = Session::new(RoundConfig::new(4, 30).unwrap(), 11);
    session.start().unwrap();
    let animal = session.deck().get(1).unwrap().animal;
    session.flip(1);
    session.advance(3_000);

    let fb = GameView::default().render(
        &session.snapshot(),
        Cursor::new(4),
        &Overlay::None,
        Viewport::new(80, 24),
    );
    assert!(find(&fb, animal.as_str()).is_some());
    assert!(find(&fb, "Time 27s   Pairs 0/2   Mistakes 0").is_some());
}

#[test]
fn term_view_draws_time_up_dialog() {
    let mut app = App::new(RoundConfig::new(4, 10).unwrap(), 1).unwrap();
    app.advance(10_000);

    let fb = render(&app);
    assert!(find(&fb, "Time is up!").is_some());
    assert!(find(&fb, "enter restart").is_some());
}

#[test]
fn term_view_draws_settings_dialog() {
    let mut app = App::new(RoundConfig::new(4, 30).unwrap(), 1).unwrap();
    app.handle_action(GameAction::OpenSettings);
    app.handle_action(GameAction::MoveDown);

    let fb = render(&app);
    assert!(find(&fb, "Settings").is_some());
    assert!(find(&fb, "> Countdown").is_some());
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let app = App::new(RoundConfig::new(20, 30).unwrap(), 1).unwrap();
    let snap = app.session().snapshot();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, app.cursor(), app.overlay(), Viewport::new(100, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 30));
    view.render_into(&snap, app.cursor(), app.overlay(), Viewport::new(60, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 20));
    assert_eq!(fb.cells().len(), 60 * 20);
}
