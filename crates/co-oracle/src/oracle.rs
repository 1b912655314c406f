//! The two-stage draw.
//!
//! [`Oracle::begin`] validates, samples, and resolves synchronously, then
//! starts the insight request as a one-shot task and hands back a
//! [`PendingDraw`] whose result can be shown right away.
//! [`Oracle::complete`] waits for the insight, attaches it, and records the
//! draw. Only one draw may be pending at a time; dropping a [`PendingDraw`]
//! releases the slot just like [`Oracle::abandon`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use co_core::resolve::resolve;
use co_core::{
    DrawOutcome, DrawRequest, FateError, FateResult, HistoryItem, RandomConfig, SeedSampler,
    SelectionMode, TimeSource,
};
use co_insight::InsightRequester;

use crate::config::OracleConfig;
use crate::log::SessionLog;

/// Holds the oracle's single draw slot until dropped.
#[derive(Debug)]
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// A resolved draw whose insight is still on its way.
#[derive(Debug)]
pub struct PendingDraw {
    item: HistoryItem,
    insight: JoinHandle<String>,
    slot: InFlight,
}

impl PendingDraw {
    /// The resolved draw, without insight.
    pub fn item(&self) -> &HistoryItem {
        &self.item
    }

    /// Whether the insight request has finished.
    pub fn is_ready(&self) -> bool {
        self.insight.is_finished()
    }
}

/// An interactive oracle session.
pub struct Oracle<C> {
    sampler: SeedSampler<C>,
    requester: Arc<dyn InsightRequester>,
    random: RandomConfig,
    mode: SelectionMode,
    log: SessionLog,
    numeric_fallback: String,
    divination_fallback: String,
    in_flight: Arc<AtomicBool>,
}

impl<C: TimeSource> Oracle<C> {
    /// Create a session reading time from `clock` and insights from `requester`.
    pub fn new(clock: C, requester: Arc<dyn InsightRequester>, config: OracleConfig) -> Self {
        Self {
            sampler: SeedSampler::new(clock),
            requester,
            random: config.random,
            mode: config.mode,
            log: SessionLog::new(),
            numeric_fallback: config.numeric_fallback,
            divination_fallback: config.divination_fallback,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The current bounds and options.
    pub fn config(&self) -> &RandomConfig {
        &self.random
    }

    /// Edit bounds and options. Edits never affect a draw already begun.
    pub fn config_mut(&mut self) -> &mut RandomConfig {
        &mut self.random
    }

    /// The current mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch mode.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Past draws, newest first.
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Forget all past draws.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Whether a draw is waiting for its insight.
    pub fn is_drawing(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Build a request for the current mode and configuration.
    pub fn request(&self, question: Option<&str>) -> DrawRequest {
        DrawRequest::from_config(self.mode, &self.random, question)
    }

    /// Validate, sample, and resolve `request`, then start its insight.
    ///
    /// Invalid requests are rejected before the clock is read. Must be called
    /// from within a Tokio runtime.
    pub fn begin(&mut self, request: DrawRequest) -> FateResult<PendingDraw> {
        if self.is_drawing() {
            return Err(FateError::DrawInProgress);
        }
        request.validate()?;

        let seed = self.sampler.sample();
        let outcome = resolve(&request, &seed)?;
        let item = HistoryItem::new(
            request.mode(),
            outcome,
            &seed,
            request.question().map(str::to_string),
            self.sampler.clock().now(),
        );
        debug!(
            id = %item.id,
            mode = %item.mode,
            millisecond = seed.millisecond,
            result = %item.outcome,
            "draw resolved"
        );

        self.in_flight.store(true, Ordering::SeqCst);
        let slot = InFlight(Arc::clone(&self.in_flight));
        let insight = spawn_insight(Arc::clone(&self.requester), &item);
        Ok(PendingDraw {
            item,
            insight,
            slot,
        })
    }

    /// Wait for the insight, attach it, and record the draw.
    pub async fn complete(&mut self, pending: PendingDraw) -> HistoryItem {
        let PendingDraw {
            mut item,
            insight,
            slot,
        } = pending;

        let text = match insight.await {
            Ok(text) => text,
            Err(err) => {
                warn!(id = %item.id, error = %err, "insight task did not finish");
                self.fallback_for(item.mode).to_string()
            }
        };
        if let Err(err) = item.attach_insight(text) {
            warn!(error = %err, "insight dropped");
        }

        self.log.record(item.clone());
        drop(slot);
        debug!(id = %item.id, entries = self.log.len(), "draw recorded");
        item
    }

    /// Give up on a pending draw without recording it.
    ///
    /// The insight request keeps running in the background and its answer is
    /// discarded.
    pub fn abandon(&mut self, pending: PendingDraw) {
        debug!(id = %pending.item.id, "draw abandoned");
        drop(pending);
    }

    /// Run both stages in one call.
    pub async fn draw(&mut self, request: DrawRequest) -> FateResult<HistoryItem> {
        let pending = self.begin(request)?;
        Ok(self.complete(pending).await)
    }

    fn fallback_for(&self, mode: SelectionMode) -> &str {
        match mode {
            SelectionMode::Divination => &self.divination_fallback,
            SelectionMode::Numeric | SelectionMode::Options => &self.numeric_fallback,
        }
    }
}

fn spawn_insight(requester: Arc<dyn InsightRequester>, item: &HistoryItem) -> JoinHandle<String> {
    match &item.outcome {
        DrawOutcome::Hexagram(reading) => {
            let question = item.question.clone().unwrap_or_default();
            let reading = reading.clone();
            tokio::spawn(async move {
                requester
                    .fetch_divination_insight(
                        &question,
                        &reading.hexagram_name,
                        &reading.line_name,
                        &reading.binary_code,
                    )
                    .await
            })
        }
        outcome => {
            let result = outcome.to_string();
            let mode = item.mode.to_string();
            let seed = item.millisecond_seed;
            tokio::spawn(async move { requester.fetch_numeric_insight(&result, &mode, seed).await })
        }
    }
}
