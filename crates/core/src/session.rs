//! Session module - the round state machine
//!
//! A [`Session`] owns everything about the round in progress: the deck, the
//! face-up selection, the countdown, the counters, and the scheduler that
//! holds deferred work. All mutation goes through its transition methods.
//!
//! ```text
//! Idle ──start──▶ Running ──all pairs matched──▶ Won
//!                    │  ▲
//!        countdown 0 │  │ restart (from any state)
//!                    ▼  │
//!                 TimedOut
//! ```
//!
//! Deferred work (countdown ticks, flipping a mismatched pair back) is tagged
//! with the generation it was scheduled under. A restart bumps the generation,
//! so anything left over from the previous round is discarded when it fires.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::config::{InvalidConfiguration, RoundConfig};
use crate::deck::{generate_deck, Deck};
use crate::rng::SimpleRng;
use crate::snapshot::SessionSnapshot;
use crate::timer::{Countdown, Deferred, ScheduledTask, Scheduler};
use crate::types::*;

/// External stimuli the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The player clicked a card.
    Flip(CardId),
    /// A countdown tick scheduled under `generation` fired.
    Tick { generation: Generation },
    /// A mismatch delay scheduled under `generation` elapsed.
    ResolveMismatch {
        generation: Generation,
        first: CardId,
        second: CardId,
    },
}

/// Face-up cards awaiting comparison.
pub type Selection = ArrayVec<CardId, 2>;

/// Complete round state
#[derive(Debug, Clone)]
pub struct Session {
    config: RoundConfig,
    deck: Deck,
    selection: Selection,
    seconds_remaining: u32,
    phase: Phase,
    mistake_count: u32,
    /// Bumped on every restart; deferred tasks from older generations are stale.
    generation: Generation,
    scheduler: Scheduler,
    countdown: Countdown,
    rng: SimpleRng,
    /// Last transition outcome (consumed by observers).
    last_event: Option<RoundEvent>,
}

impl Session {
    /// Create an idle session. Nothing is dealt until [`Session::start`].
    pub fn new(config: RoundConfig, seed: u32) -> Self {
        Self {
            config,
            deck: Deck::default(),
            selection: Selection::new(),
            seconds_remaining: config.start_secs(),
            phase: Phase::Idle,
            mistake_count: 0,
            generation: 0,
            scheduler: Scheduler::new(),
            countdown: Countdown::new(),
            rng: SimpleRng::new(seed),
            last_event: None,
        }
    }

    /// Deal the first deck and start the countdown. No-op once started.
    pub fn start(&mut self) -> Result<(), InvalidConfiguration> {
        if self.phase != Phase::Idle {
            return Ok(());
        }
        self.restart(self.config)
    }

    /// Deal a fresh deck under `config` and start a new round.
    ///
    /// The deck is dealt before any state changes, so an error leaves the
    /// current round exactly as it was. A `RoundConfig` can only be built
    /// through its validating constructors, so in practice this never fails;
    /// the `Result` mirrors the fallible deck generator.
    pub fn restart(&mut self, config: RoundConfig) -> Result<(), InvalidConfiguration> {
        let deck = generate_deck(u32::from(config.card_count()), &mut self.rng)?;

        self.generation = self.generation.wrapping_add(1);
        self.config = config;
        self.deck = deck;
        self.selection.clear();
        self.seconds_remaining = config.start_secs();
        self.mistake_count = 0;
        self.phase = Phase::Running;
        self.countdown.start(&mut self.scheduler, self.generation);
        self.last_event = Some(RoundEvent::Restarted {
            generation: self.generation,
        });

        info!(
            generation = self.generation,
            cards = config.card_count(),
            secs = config.start_secs(),
            "round started"
        );
        Ok(())
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }

    pub fn mistake_count(&self) -> u32 {
        self.mistake_count
    }

    /// Matched pairs, read straight off the deck.
    pub fn matched_pair_count(&self) -> u8 {
        self.deck.matched_pairs()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn timer_running(&self) -> bool {
        self.countdown.is_running()
    }

    /// True while a mismatched pair is face up waiting to flip back.
    pub fn mismatch_pending(&self) -> bool {
        self.selection.is_full()
    }

    /// Take and clear the last transition event.
    pub fn take_last_event(&mut self) -> Option<RoundEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.cards.extend(self.deck.cards().iter().copied());
        out.seconds_remaining = self.seconds_remaining;
        out.matched_pairs = self.matched_pair_count();
        out.total_pairs = self.deck.pair_count();
        out.mistakes = self.mistake_count;
        out.phase = self.phase;
        out.generation = self.generation;
        out.mismatch_pending = self.mismatch_pending();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Turn a card face up. Returns false when the flip is ignored.
    ///
    /// Ignored unless the round is running with time left and the card is
    /// face down, unmatched, and there is room in the selection.
    pub fn flip(&mut self, id: CardId) -> bool {
        if self.phase != Phase::Running || self.seconds_remaining == 0 {
            return false;
        }
        if self.selection.is_full() || self.selection.contains(&id) {
            return false;
        }
        let Some(card) = self.deck.get_mut(id) else {
            return false;
        };
        if card.is_flipped || card.is_matched {
            return false;
        }

        card.is_flipped = true;
        self.selection.push(id);
        trace!(card = id, "flipped");

        if self.selection.is_full() {
            self.resolve_selection();
        }
        true
    }

    /// Compare the two selected cards.
    fn resolve_selection(&mut self) {
        let [first, second] = [self.selection[0], self.selection[1]];
        let (Some(a), Some(b)) = (self.deck.get(first), self.deck.get(second)) else {
            return;
        };

        if a.animal == b.animal {
            for id in [first, second] {
                if let Some(card) = self.deck.get_mut(id) {
                    card.is_matched = true;
                }
            }
            self.selection.clear();
            self.last_event = Some(RoundEvent::Matched { first, second });
            debug!(first, second, pairs = self.matched_pair_count(), "pair matched");
            self.check_win();
        } else {
            self.mistake_count += 1;
            self.scheduler.schedule(
                self.generation,
                MISMATCH_DELAY_MS,
                Deferred::ResolveMismatch { first, second },
            );
            self.last_event = Some(RoundEvent::Mismatched { first, second });
            debug!(first, second, mistakes = self.mistake_count, "mismatch");
        }
    }

    fn check_win(&mut self) {
        if self.phase == Phase::Running && self.deck.all_matched() {
            self.countdown.stop(&mut self.scheduler);
            self.phase = Phase::Won;
            self.last_event = Some(RoundEvent::Won);
            info!(
                generation = self.generation,
                secs_left = self.seconds_remaining,
                mistakes = self.mistake_count,
                "round won"
            );
        }
    }

    fn on_tick(&mut self, generation: Generation) -> bool {
        if generation != self.generation || !self.countdown.accepts(generation) {
            trace!(generation, current = self.generation, "discarding stale tick");
            return false;
        }
        if self.phase != Phase::Running {
            return false;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.countdown.stop(&mut self.scheduler);
            self.phase = Phase::TimedOut;
            self.last_event = Some(RoundEvent::TimedOut);
            info!(
                generation = self.generation,
                pairs = self.matched_pair_count(),
                mistakes = self.mistake_count,
                "time is up"
            );
        } else {
            self.countdown.rearm(&mut self.scheduler);
        }
        true
    }

    fn on_resolve_mismatch(&mut self, generation: Generation, first: CardId, second: CardId) -> bool {
        if generation != self.generation {
            trace!(generation, current = self.generation, "discarding stale mismatch");
            return false;
        }

        for id in [first, second] {
            if let Some(card) = self.deck.get_mut(id) {
                if !card.is_matched {
                    card.is_flipped = false;
                }
            }
        }
        self.selection.clear();
        trace!(first, second, "mismatch flipped back");
        true
    }

    /// Apply a single event. Returns true when the session changed.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::Flip(id) => self.flip(id),
            SessionEvent::Tick { generation } => self.on_tick(generation),
            SessionEvent::ResolveMismatch {
                generation,
                first,
                second,
            } => self.on_resolve_mismatch(generation, first, second),
        }
    }

    /// Advance the scheduler clock and run everything that came due.
    ///
    /// Returns true when any task changed the session.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let until = self.scheduler.now_ms() + u64::from(elapsed_ms);
        let mut changed = false;
        while let Some(task) = self.scheduler.pop_due(until) {
            changed |= self.run_task(task);
        }
        self.scheduler.set_now(until);
        changed
    }

    fn run_task(&mut self, task: ScheduledTask) -> bool {
        let event = match task.task {
            Deferred::CountdownTick => SessionEvent::Tick {
                generation: task.generation,
            },
            Deferred::ResolveMismatch { first, second } => SessionEvent::ResolveMismatch {
                generation: task.generation,
                first,
                second,
            },
        };
        self.apply(event)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RoundConfig::default(), 1)
    }
}
