use async_stream::try_stream;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;

use bailian_client::{AppCompletionResponse, BailianRequestError};
use openai_compat::{ChatCompletionChunk, SSE_DONE, sse_frame};

use crate::constants::{FINISH_STOP, THINKING_INTRO};
use crate::error::TranslateError;
use crate::response::ResponseMeta;
use crate::sanitize::{TranslatorConfig, sanitize_reasoning, split_reasoning};
use crate::thinking::ThinkingParams;

/// Stateful converter from cumulative Bailian events to OpenAI chunks
///
/// Bailian streams snapshots of the full text-so-far, so the converter
/// tracks how much of each field it has already emitted and slices off only
/// the new tail. One stream owns exactly one `StreamState`; events must be
/// fed in arrival order.
pub struct StreamState {
    params: ThinkingParams,
    reasoning_delta_max: usize,
    meta: ResponseMeta,
    answer_len: usize,
    reasoning_len: usize,
    role_sent: bool,
    intro_sent: bool,
    finished: bool,
}

impl StreamState {
    /// Create the state for one streaming translation
    pub fn new(params: ThinkingParams, config: &TranslatorConfig, meta: ResponseMeta) -> Self {
        Self {
            params,
            reasoning_delta_max: config.reasoning_delta_max,
            meta,
            answer_len: 0,
            reasoning_len: 0,
            role_sent: false,
            intro_sent: false,
            finished: false,
        }
    }

    /// Whether a terminal chunk has been produced
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn role_chunk(&self) -> ChatCompletionChunk {
        ChatCompletionChunk::role(&self.meta.id, &self.meta.model, self.meta.created)
    }

    fn reasoning_chunk(&self, text: impl Into<String>) -> ChatCompletionChunk {
        ChatCompletionChunk::reasoning(&self.meta.id, &self.meta.model, self.meta.created, text)
    }

    fn content_chunk(&self, text: impl Into<String>) -> ChatCompletionChunk {
        ChatCompletionChunk::content(&self.meta.id, &self.meta.model, self.meta.created, text)
    }

    fn finish_chunk(&self) -> ChatCompletionChunk {
        ChatCompletionChunk::finish(
            &self.meta.id,
            &self.meta.model,
            self.meta.created,
            FINISH_STOP,
        )
    }

    /// Fold one upstream event into the state and return the chunks it
    /// produced
    ///
    /// Chunk order within one event: role (first event only), then reasoning
    /// deltas, then the content delta, then the terminal chunk — mirroring
    /// the think-then-answer order of the application. Lengths are tracked
    /// against the raw upstream text; a snapshot that shrinks, or grows
    /// without extending the previous one, fails with
    /// [`TranslateError::NonMonotonicUpstream`] and emits nothing.
    pub fn step(
        &mut self,
        event: &AppCompletionResponse,
    ) -> Result<Vec<ChatCompletionChunk>, TranslateError> {
        if self.finished {
            return Ok(Vec::new());
        }

        let answer = event.answer_text();
        let answer_delta = new_tail(answer, self.answer_len, "answer")?;

        let mut chunks = Vec::new();

        if !self.role_sent {
            chunks.push(self.role_chunk());
            self.role_sent = true;
        }

        if self.params.has_thoughts {
            let reasoning = event.reasoning_text();
            let reasoning_delta = new_tail(&reasoning, self.reasoning_len, "reasoning")?;
            if !reasoning_delta.is_empty() {
                let sanitized = sanitize_reasoning(reasoning_delta);
                let segments = split_reasoning(&sanitized, self.reasoning_delta_max);
                if !segments.is_empty() && !self.intro_sent {
                    chunks.push(self.reasoning_chunk(THINKING_INTRO));
                    self.intro_sent = true;
                }
                for segment in segments {
                    chunks.push(self.reasoning_chunk(segment));
                }
                // Track the raw upstream length, not the sanitized one, so
                // stripped bytes are never reprocessed.
                self.reasoning_len = reasoning.len();
            }
        }

        if !answer_delta.is_empty() {
            chunks.push(self.content_chunk(answer_delta));
            self.answer_len = answer.len();
        }

        if event.is_finished() {
            chunks.push(self.finish_chunk());
            self.finished = true;
        }

        Ok(chunks)
    }

    /// Best-effort terminal chunk for an upstream that closed without ever
    /// flagging completion; None if the stream already finished properly
    pub fn finish(&mut self) -> Option<ChatCompletionChunk> {
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(self.finish_chunk())
    }
}

/// Slice the not-yet-emitted tail off a cumulative snapshot
///
/// A snapshot shorter than the running length, or one where the running
/// length no longer falls on a char boundary (the snapshot grew without
/// being a prefix extension), violates the upstream contract and is
/// reported as [`TranslateError::NonMonotonicUpstream`] rather than
/// sliced blindly.
fn new_tail<'a>(
    text: &'a str,
    emitted_len: usize,
    field: &'static str,
) -> Result<&'a str, TranslateError> {
    text.get(emitted_len..)
        .ok_or(TranslateError::NonMonotonicUpstream {
            field,
            previous: emitted_len,
            observed: text.len(),
        })
}

/// Translate a Bailian event stream into OpenAI SSE frames
///
/// Each yielded item is one ready-to-send `data: ...\n\n` frame; the
/// `[DONE]` sentinel follows the terminal frame. A transport failure
/// mid-stream propagates as an error and ends the stream without a synthetic
/// terminal frame; a naturally exhausted upstream without a terminal event
/// gets a best-effort stop frame instead. Dropping the returned stream stops
/// emission immediately.
pub fn translate_stream(
    events: BoxStream<'static, Result<AppCompletionResponse, BailianRequestError>>,
    params: ThinkingParams,
    config: TranslatorConfig,
    meta: ResponseMeta,
) -> BoxStream<'static, Result<String, TranslateError>> {
    let mut state = StreamState::new(params, &config, meta);

    Box::pin(try_stream! {
        let mut events = events;

        while let Some(event) = events.next().await {
            let event = event?;
            for chunk in state.step(&event)? {
                yield sse_frame(&chunk)?;
            }
            if state.is_finished() {
                break;
            }
        }

        if let Some(chunk) = state.finish() {
            log::warn!("upstream stream closed without a terminal event; closing best-effort");
            yield sse_frame(&chunk)?;
        }

        yield SSE_DONE.to_string();
    })
}
