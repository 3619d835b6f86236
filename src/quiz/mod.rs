//! Round-based quiz progression
//!
//! A game asks for the four centers of one triangle, one per round, in
//! [`CenterKind::ALL`] order:
//!
//! ```text
//! Idle ──start──▶ Round(1) ──click──▶ Round(2) ─ … ─▶ Round(4) ──click──▶ Finished
//! ```
//!
//! Every transition consumes the current [`Quiz`] value and returns the next
//! one, so a round's state is never mutated in place. Time is passed in by the
//! caller as seconds on any monotonic clock.

mod scoring;


use rand::Rng;

use crate::geometry::{
    compute, CenterKind, CenterSet, GeometryError, Point, Triangle, TriangleGenerator,
};

pub use scoring::{score_for_round, MAX_ROUND_POINTS, TIME_PENALTY_PER_SECOND};

/// Number of rounds in one game.
pub const ROUNDS: usize = CenterKind::ALL.len();

/// A triangle together with the centers the player has to find
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Challenge {
    pub triangle: Triangle,
    pub centers: CenterSet,
}

impl Challenge {
    pub fn new(triangle: Triangle) -> Result<Self, GeometryError> {
        let centers = compute(&triangle)?;
        Ok(Self { triangle, centers })
    }

    /// Draws a fresh triangle from `generator` and computes its centers.
    pub fn generate<R: Rng + ?Sized>(
        generator: &TriangleGenerator,
        rng: &mut R,
        width: f64,
        height: f64,
    ) -> Result<Self, GeometryError> {
        let triangle = generator.generate_with(rng, width, height)?;
        Self::new(triangle)
    }
}

/// Outcome of one answered round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    pub kind: CenterKind,
    pub target: Point,
    pub click: Point,
    pub distance: f64,
    pub elapsed: f64,
    pub points: u32,
}

/// State of a game in progress
#[derive(Debug, Clone, PartialEq)]
pub struct RoundState {
    challenge: Challenge,
    index: usize,
    started_at: f64,
    results: Vec<RoundResult>,
}

impl RoundState {
    /// 1-based round number.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn target(&self) -> CenterKind {
        CenterKind::ALL[self.index]
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn score(&self) -> u32 {
        total(&self.results)
    }

    fn answer(&self, click: Point, now: f64) -> RoundResult {
        let kind = self.target();
        let target = self.challenge.centers.get(kind);
        let distance = click.distance(target);
        let elapsed = (now - self.started_at).max(0.0);
        RoundResult {
            kind,
            target,
            click,
            distance,
            elapsed,
            points: score_for_round(distance, elapsed),
        }
    }
}

/// Final state of a completed game
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    challenge: Challenge,
    results: Vec<RoundResult>,
}

impl GameSummary {
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn score(&self) -> u32 {
        total(&self.results)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Quiz {
    #[default]
    Idle,
    Round(RoundState),
    Finished(GameSummary),
}

impl Quiz {
    /// Begins round 1 for `challenge` with the timer started at `now`.
    pub fn start(challenge: Challenge, now: f64) -> Self {
        log::debug!("starting game: {:?}", challenge.triangle);
        Quiz::Round(RoundState {
            challenge,
            index: 0,
            started_at: now,
            results: Vec::with_capacity(ROUNDS),
        })
    }

    /// Scores a click against the current target and advances.
    ///
    /// Clicks outside of a running round leave the state unchanged.
    pub fn click(self, at: Point, now: f64) -> Self {
        let round = match self {
            Quiz::Round(round) => round,
            other => return other,
        };

        let result = round.answer(at, now);
        log::debug!(
            "round {} ({}): distance {:.1}, {:.2}s, {} points",
            round.number(),
            result.kind,
            result.distance,
            result.elapsed,
            result.points
        );

        let RoundState {
            challenge,
            index,
            mut results,
            ..
        } = round;
        results.push(result);

        if index + 1 < ROUNDS {
            Quiz::Round(RoundState {
                challenge,
                index: index + 1,
                started_at: now,
                results,
            })
        } else {
            let summary = GameSummary {
                challenge,
                results,
            };
            log::info!("game finished with {} points", summary.score());
            Quiz::Finished(summary)
        }
    }

    /// Center the player is asked for right now.
    pub fn target(&self) -> Option<CenterKind> {
        match self {
            Quiz::Round(round) => Some(round.target()),
            Quiz::Idle | Quiz::Finished(_) => None,
        }
    }

    pub fn challenge(&self) -> Option<&Challenge> {
        match self {
            Quiz::Idle => None,
            Quiz::Round(round) => Some(round.challenge()),
            Quiz::Finished(summary) => Some(summary.challenge()),
        }
    }

    pub fn results(&self) -> &[RoundResult] {
        match self {
            Quiz::Idle => &[],
            Quiz::Round(round) => round.results(),
            Quiz::Finished(summary) => summary.results(),
        }
    }

    pub fn score(&self) -> u32 {
        total(self.results())
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Quiz::Finished(_))
    }
}

fn total(results: &[RoundResult]) -> u32 {
    results.iter().map(|r| r.points).sum()
}
