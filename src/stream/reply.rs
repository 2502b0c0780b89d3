//! Reply stream: the async surface over the incremental decoder.
//!
//! A [`ReplyStream`] owns one HTTP response body and one [`ReplyDecoder`].
//! It implements `Stream<Item = Result<ReplyEvent, DraftsmithError>>`, so
//! callers can consume events directly, or drive it to completion through
//! [`ReplyStream::process`] / [`ReplyStream::collect`].
//!
//! Ordering: events for one stream are yielded strictly in arrival order.
//! The only suspension point is the next read of the underlying byte stream.

use super::decoder::{ReplyDecoder, ReplyEvent, ReplyOutcome};
use crate::errors::{DraftsmithError, DraftsmithResult};
use crate::observability::{MetricsCollector, NoopMetricsCollector};
use crate::transport::ByteStream;
use futures::stream::{AbortHandle, Abortable};
use futures::{Stream, StreamExt};
use pin_project_lite::pin_project;
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Handle for cancelling an in-flight reply stream.
///
/// Cancelling aborts the underlying byte-stream reader. Events already
/// dispatched are not undone; no further events are yielded, and a
/// `process()` in flight resolves with [`DraftsmithError::Cancelled`].
#[derive(Clone)]
pub struct CancelHandle {
    abort: AbortHandle,
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    /// Abort the underlying reader.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.abort.abort();
    }
}

pin_project! {
    /// Stream of decoded reply events
    pub struct ReplyStream {
        #[pin]
        inner: Abortable<ByteStream>,
        decoder: Option<ReplyDecoder>,
        queue: VecDeque<ReplyEvent>,
        outcome: Option<ReplyOutcome>,
        is_done: bool,
        cancelled: Arc<AtomicBool>,
        abort: AbortHandle,
        metrics: Arc<dyn MetricsCollector>,
    }
}

impl ReplyStream {
    /// Create a reply stream over a response byte stream.
    pub fn new(inner: ByteStream, initial_status: impl Into<String>) -> Self {
        let (abort, registration) = AbortHandle::new_pair();
        Self {
            inner: Abortable::new(inner, registration),
            decoder: Some(ReplyDecoder::new(initial_status)),
            queue: VecDeque::new(),
            outcome: None,
            is_done: false,
            cancelled: Arc::new(AtomicBool::new(false)),
            abort,
            metrics: Arc::new(NoopMetricsCollector),
        }
    }

    /// Attach a metrics collector recording stream lifecycle counters.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsCollector>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Handle for cancelling this stream from another task.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            abort: self.abort.clone(),
            cancelled: self.cancelled.clone(),
        }
    }

    /// The final outcome, available once the stream has ended gracefully.
    pub fn take_outcome(&mut self) -> Option<ReplyOutcome> {
        self.outcome.take()
    }

    /// Drive the stream to completion, invoking `on_chunk` for every text
    /// delta in arrival order.
    ///
    /// Resolves with the final [`ReplyOutcome`] on graceful end, or the
    /// first transport error. The two are mutually exclusive: an errored
    /// stream never produces an outcome.
    pub async fn process<F>(mut self, mut on_chunk: F) -> DraftsmithResult<ReplyOutcome>
    where
        F: FnMut(&str),
    {
        while let Some(event) = self.next().await {
            if let ReplyEvent::Delta(text) = event? {
                on_chunk(&text);
            }
        }

        self.outcome.take().ok_or_else(|| DraftsmithError::Internal {
            message: "Reply stream ended without an outcome".to_string(),
        })
    }

    /// Drive the stream to completion, discarding incremental deltas.
    pub async fn collect(self) -> DraftsmithResult<ReplyOutcome> {
        self.process(|_| {}).await
    }
}

impl Stream for ReplyStream {
    type Item = Result<ReplyEvent, DraftsmithError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(event) = this.queue.pop_front() {
                return Poll::Ready(Some(Ok(event)));
            }

            if *this.is_done {
                return Poll::Ready(None);
            }

            match this.inner.as_mut().poll_next(cx) {
                Poll::Ready(Some(Ok(bytes))) => {
                    if let Some(decoder) = this.decoder.as_mut() {
                        this.queue.extend(decoder.feed_bytes(&bytes));
                    }
                }
                Poll::Ready(Some(Err(error))) => {
                    // Terminal: the outcome is never produced for an
                    // errored stream.
                    *this.is_done = true;
                    this.decoder.take();
                    this.metrics
                        .increment_counter("reply_stream_errors", 1, &[]);
                    tracing::warn!(error = %error, "reply stream failed");
                    return Poll::Ready(Some(Err(error)));
                }
                Poll::Ready(None) => {
                    if this.cancelled.load(Ordering::SeqCst) {
                        *this.is_done = true;
                        this.decoder.take();
                        this.metrics
                            .increment_counter("reply_stream_cancelled", 1, &[]);
                        tracing::debug!("reply stream cancelled");
                        return Poll::Ready(Some(Err(DraftsmithError::Cancelled)));
                    }

                    *this.is_done = true;
                    if let Some(decoder) = this.decoder.take() {
                        let (tail, outcome) = decoder.finish();
                        this.queue.extend(tail);
                        tracing::debug!(
                            session_id = outcome.session_id.as_deref().unwrap_or(""),
                            status = %outcome.status,
                            message_len = outcome.full_message.len(),
                            "reply stream completed"
                        );
                        this.metrics
                            .increment_counter("reply_stream_completed", 1, &[]);
                        *this.outcome = Some(outcome);
                    }
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
