//! The long-poll cycle that keeps the canvas in step with the server.
//!
//! One `/Update` request is in flight at a time. Each response is handed to a
//! [`FrameSink`], which applies it and repaints, and the next request goes out
//! straight away. Failures back off according to a [`RetryPolicy`]; the loop
//! ends when the policy is exhausted or its [`LoopHandle`] is stopped or dropped.

use std::future::Future;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{self, Either};

use crate::display::WorldDisplay;
use crate::error::ApiError;
use crate::protocol::UpdateResponse;
use crate::render::{self, Surface};
use crate::viewport::Viewport;

/// Source of world snapshots. Not `Send`: it runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait WorldApi {
    async fn update(&self) -> Result<UpdateResponse, ApiError>;
}

/// Receives what the loop produces.
pub trait FrameSink {
    fn frame(&mut self, frame: UpdateResponse);
    fn status(&mut self, status: LinkStatus);
}

/// Health of the update cycle, shown to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LinkStatus {
    #[default]
    Connecting,
    Live,
    Retrying { attempt: u32, delay: Duration },
    Down { reason: String },
}

impl LinkStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, LinkStatus::Retrying { .. } | LinkStatus::Down { .. })
    }

    pub fn label(&self) -> String {
        match self {
            LinkStatus::Connecting => "Connecting…".to_string(),
            LinkStatus::Live => "Live".to_string(),
            LinkStatus::Retrying { attempt, delay } => {
                format!("Reconnecting (attempt {attempt}, {} ms)", delay.as_millis())
            }
            LinkStatus::Down { reason } => format!("Disconnected: {reason}"),
        }
    }
}

/// Bounded exponential backoff for failed `/Update` requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Consecutive failures tolerated before giving up. Zero halts on the first.
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_millis(8_000),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (1-based), or `None` once exhausted.
    pub fn backoff(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        let factor = 2u32.saturating_pow(attempt - 1);
        Some(self.initial_backoff.saturating_mul(factor).min(self.max_backoff))
    }
}

/// Owning side of the stop signal. Stopping or dropping it ends the loop.
#[derive(Debug)]
pub struct LoopHandle {
    tx: Option<oneshot::Sender<()>>,
}

impl LoopHandle {
    pub fn stop(mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Loop side of the stop signal.
#[derive(Debug)]
pub struct StopSignal {
    rx: oneshot::Receiver<()>,
}

impl StopSignal {
    fn requested(&mut self) -> bool {
        !matches!(self.rx.try_recv(), Ok(None))
    }
}

pub fn stop_pair() -> (LoopHandle, StopSignal) {
    let (tx, rx) = oneshot::channel();
    (LoopHandle { tx: Some(tx) }, StopSignal { rx })
}

/// Why the loop returned.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopExit {
    Stopped,
    GaveUp(ApiError),
}

/// Apply one update: zoom and origin from the server, the text and selected
/// gopher, then repaint. With no surface mounted yet the grid is only stored.
pub fn apply_frame<S: Surface + ?Sized>(
    frame: UpdateResponse,
    viewport: &mut Viewport,
    display: &mut WorldDisplay,
    surface: Option<&mut S>,
) {
    viewport.apply_update(&frame);
    let UpdateResponse {
        grid,
        text_below_canvas,
        selected_gopher,
        ..
    } = frame;

    display.absorb(text_below_canvas, selected_gopher);
    match surface {
        Some(surface) => render::render_grid(viewport, grid, surface),
        None => viewport.grid = grid,
    }
}

/// Run the update cycle until stopped or out of retries.
///
/// `wait` sleeps for the given duration; the browser passes a timer, tests pass
/// an immediately-ready future.
pub async fn run_update_loop<A, K, W, F>(
    api: &A,
    sink: &mut K,
    policy: RetryPolicy,
    mut wait: W,
    mut stop: StopSignal,
) -> LoopExit
where
    A: WorldApi,
    K: FrameSink,
    W: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    tracing::info!(max_attempts = policy.max_attempts, "update loop started");
    let mut failures: u32 = 0;
    let mut live = false;

    loop {
        if stop.requested() {
            tracing::info!("update loop stopped");
            return LoopExit::Stopped;
        }

        let outcome = match future::select(Box::pin(api.update()), &mut stop.rx).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => {
                tracing::info!("update loop stopped while awaiting response");
                return LoopExit::Stopped;
            }
        };

        match outcome {
            Ok(frame) => {
                if !live {
                    live = true;
                    sink.status(LinkStatus::Live);
                }
                failures = 0;
                sink.frame(frame);
            }
            Err(err) => {
                live = false;
                failures += 1;
                let Some(delay) = policy.backoff(failures) else {
                    tracing::error!(attempts = failures, error = %err, "update loop giving up");
                    sink.status(LinkStatus::Down {
                        reason: err.to_string(),
                    });
                    return LoopExit::GaveUp(err);
                };

                tracing::warn!(
                    attempt = failures,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "update request failed, backing off"
                );
                sink.status(LinkStatus::Retrying {
                    attempt: failures,
                    delay,
                });
                if let Either::Right(_) = future::select(Box::pin(wait(delay)), &mut stop.rx).await {
                    tracing::info!("update loop stopped during backoff");
                    return LoopExit::Stopped;
                }
            }
        }
    }
}
