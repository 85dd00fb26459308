//! Submission Sinks
//!
//! Where a validated form snapshot goes. The form components only know
//! this interface; whether delivery is a network call, a log, or a queued
//! job is the sink's business.

use std::future::Future;
use std::pin::Pin;

use gloo_timers::future::TimeoutFuture;

use crate::forms::FormState;

/// Boxed non-Send future; all delivery work stays on the UI thread
pub type SinkFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Accepts a snapshot taken at the moment validation passed and reports
/// the outcome asynchronously.
pub trait SubmissionSink: Clone + 'static {
    fn deliver(&self, form_id: &str, snapshot: &FormState) -> SinkFuture;
}

/// Simulated delivery latency for the console sink
const CONSOLE_SINK_DELAY_MS: u32 = 400;

/// Sink that logs the snapshot to the browser console and accepts it
/// after a short simulated delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn deliver(&self, form_id: &str, snapshot: &FormState) -> SinkFuture {
        let form_id = form_id.to_string();
        let payload = serde_json::to_string(snapshot)
            .unwrap_or_else(|e| format!("<unserializable snapshot: {}>", e));
        Box::pin(async move {
            TimeoutFuture::new(CONSOLE_SINK_DELAY_MS).await;
            web_sys::console::log_1(
                &format!("[{}] submission accepted: {}", form_id, payload).into(),
            );
            Ok(())
        })
    }
}
