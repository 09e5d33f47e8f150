use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{generate_deck, RoundConfig, Session, SessionSnapshot, SimpleRng};
use tui_memory::shell::App;
use tui_memory::term::{FrameBuffer, GameView, Viewport};
use tui_memory::types::FRAME_MS;

fn bench_generate_deck(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_deck_20", |b| {
        b.iter(|| generate_deck(black_box(20), &mut rng))
    });
}

fn bench_advance(c: &mut Criterion) {
    let config = RoundConfig::new(20, 300).unwrap();

    c.bench_function("advance_frame", |b| {
        let mut session = Session::new(config, 12345);
        session.start().unwrap();
        b.iter(|| {
            if session.is_over() {
                session.restart(config).unwrap();
            }
            session.advance(black_box(FRAME_MS));
        })
    });
}

fn bench_flip_mismatch(c: &mut Criterion) {
    let config = RoundConfig::new(20, 300).unwrap();
    let mut session = Session::new(config, 12345);
    session.start().unwrap();
    let first = session.deck().cards()[0];
    let other = session
        .deck()
        .cards()
        .iter()
        .find(|c| c.animal != first.animal)
        .map(|c| c.id)
        .unwrap();

    c.bench_function("flip_mismatch_and_resolve", |b| {
        b.iter(|| {
            session.restart(config).unwrap();
            session.flip(black_box(first.id));
            session.flip(black_box(other));
            session.advance(1_500);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let app = App::new(RoundConfig::new(20, 300).unwrap(), 12345).unwrap();
    let view = GameView::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_20_cards", |b| {
        b.iter(|| {
            app.session().snapshot_into(&mut snap);
            view.render_into(
                &snap,
                app.cursor(),
                app.overlay(),
                Viewport::new(120, 40),
                &mut fb,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_generate_deck,
    bench_advance,
    bench_flip_mismatch,
    bench_render
);
criterion_main!(benches);
