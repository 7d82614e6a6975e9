//! Gesture lifecycle for one tracing canvas.
//!
//! A session owns at most one stroke at a time and walks
//! `Idle -> Drawing -> Complete`. Every move re-scores the prefix captured
//! so far; the end of the gesture scores the frozen stroke and hands the
//! result to the completion callback exactly once. `reset` returns to `Idle`
//! for another attempt at the same letter.

use crate::config::Config;
use crate::difficulty::DifficultyTier;
use crate::geometry::{CanvasTransform, Point};
use crate::letters::ReferencePath;
use crate::scorer::{ScoreResult, Scorer};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Drawing,
    Complete,
}

/// Samples of one continuous gesture, in time order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserStroke {
    points: Vec<Point>,
    finalized: bool,
}

impl UserStroke {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    fn push(&mut self, p: Point) {
        if !self.finalized {
            self.points.push(p);
        }
    }
}

pub type CompletionCallback = Box<dyn FnMut(ScoreResult)>;

pub struct TracingSession {
    reference: ReferencePath,
    scorer: Scorer,
    threshold: f32,
    guide_thickness: f32,
    transform: CanvasTransform,

    state: SessionState,
    stroke: UserStroke,
    live_accuracy: Option<f32>,
    result: Option<ScoreResult>,
    on_complete: Option<CompletionCallback>,
}

impl TracingSession {
    pub fn new(reference: ReferencePath, tier: DifficultyTier, config: &Config) -> Self {
        Self {
            reference,
            scorer: Scorer::new(config.weights.clone()),
            threshold: tier.threshold_with(&config.tiers),
            guide_thickness: tier.guide_thickness_with(&config.tiers),
            transform: CanvasTransform::identity(crate::consts::LOGICAL_CANVAS_SIZE),
            state: SessionState::Idle,
            stroke: UserStroke::default(),
            live_accuracy: None,
            result: None,
            on_complete: None,
        }
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ScoreResult) + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Samples passed to the `*_client` methods go through this mapping.
    pub fn with_transform(mut self, transform: CanvasTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Begins a gesture. Ignored while a gesture is running or an attempt is
    /// already complete (call [`reset`](Self::reset) first).
    pub fn gesture_start(&mut self, p: Point) -> bool {
        if self.state != SessionState::Idle {
            debug!("gesture_start ignored in state {:?}", self.state);
            return false;
        }
        self.stroke = UserStroke::default();
        self.stroke.push(p);
        self.live_accuracy = None;
        self.result = None;
        self.state = SessionState::Drawing;
        true
    }

    /// Appends a sample and returns the live accuracy of the stroke so far.
    pub fn gesture_move(&mut self, p: Point) -> Option<f32> {
        if self.state != SessionState::Drawing {
            return None;
        }
        self.stroke.push(p);
        let accuracy = self
            .scorer
            .score(self.stroke.points(), &self.reference.guide_points, self.threshold);
        self.live_accuracy = Some(accuracy);
        Some(accuracy)
    }

    /// Freezes the stroke, scores it and fires the completion callback.
    pub fn gesture_end(&mut self) -> Option<ScoreResult> {
        if self.state != SessionState::Drawing {
            return None;
        }
        self.stroke.finalized = true;

        let result = self.scorer.evaluate(
            self.stroke.points(),
            &self.reference.guide_points,
            self.threshold,
        );
        debug!(
            "'{}' finished: {} samples, accuracy {:.1}, {} stars",
            self.reference.letter,
            self.stroke.len(),
            result.accuracy,
            result.stars
        );

        self.live_accuracy = Some(result.accuracy);
        self.result = Some(result);
        self.state = SessionState::Complete;

        if let Some(cb) = self.on_complete.as_mut() {
            cb(result);
        }
        Some(result)
    }

    pub fn gesture_start_client(&mut self, client: Point) -> bool {
        let p = self.transform.to_logical(client);
        self.gesture_start(p)
    }

    pub fn gesture_move_client(&mut self, client: Point) -> Option<f32> {
        let p = self.transform.to_logical(client);
        self.gesture_move(p)
    }

    /// Clears everything for a fresh attempt at the same letter.
    pub fn reset(&mut self) {
        self.stroke = UserStroke::default();
        self.live_accuracy = None;
        self.result = None;
        self.state = SessionState::Idle;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn stroke(&self) -> &UserStroke {
        &self.stroke
    }

    pub fn live_accuracy(&self) -> Option<f32> {
        self.live_accuracy
    }

    pub fn result(&self) -> Option<ScoreResult> {
        self.result
    }

    pub fn reference(&self) -> &ReferencePath {
        &self.reference
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn guide_thickness(&self) -> f32 {
        self.guide_thickness
    }
}

impl std::fmt::Debug for TracingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracingSession")
            .field("letter", &self.reference.letter)
            .field("threshold", &self.threshold)
            .field("state", &self.state)
            .field("samples", &self.stroke.len())
            .field("result", &self.result)
            .finish()
    }
}
