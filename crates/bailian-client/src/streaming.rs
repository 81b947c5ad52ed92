use futures_util::StreamExt;

use crate::error::BailianRequestError;
use crate::response::AppCompletionResponse;

/// Incremental SSE parser for the DashScope event stream
///
/// Buffers raw bytes, cuts them into lines and accumulates `data:` lines
/// until a blank line completes an event. Comment lines and other SSE fields
/// (`event`, `id`, `retry`) are ignored; a `data: [DONE]` payload ends the
/// stream without producing an event.
pub(crate) struct SseEventParser {
    byte_stream: std::pin::Pin<
        Box<dyn futures_util::Stream<Item = Result<bytes::Bytes, reqwest::Error>> + Send>,
    >,
    buffer: Vec<u8>,
    data_lines: Vec<String>,
    done: bool,
}

impl SseEventParser {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self {
            byte_stream: Box::pin(response.bytes_stream()),
            buffer: Vec::new(),
            data_lines: Vec::new(),
            done: false,
        }
    }

    /// Get the next parsed event, or None once the stream is exhausted
    pub(crate) async fn next_event(
        &mut self,
    ) -> Result<Option<AppCompletionResponse>, BailianRequestError> {
        if self.done {
            return Ok(None);
        }

        loop {
            while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let line_bytes = self.buffer.drain(..=pos).collect::<Vec<u8>>();
                let line = String::from_utf8(line_bytes)?;

                if let Some(event) = self.process_line(&line)? {
                    return Ok(Some(event));
                }
                if self.done {
                    return Ok(None);
                }
            }

            match self.byte_stream.next().await {
                Some(chunk_result) => {
                    let chunk = chunk_result?;
                    self.buffer.extend_from_slice(&chunk);
                }
                None => {
                    // Stream ended; a trailing unterminated line or pending
                    // data lines may still hold one last event.
                    if !self.buffer.is_empty() {
                        let line = String::from_utf8(std::mem::take(&mut self.buffer))?;
                        if let Some(event) = self.process_line(&line)? {
                            return Ok(Some(event));
                        }
                    }
                    let event = self.finalize_event()?;
                    self.done = true;
                    return Ok(event);
                }
            }
        }
    }

    fn process_line(
        &mut self,
        line: &str,
    ) -> Result<Option<AppCompletionResponse>, BailianRequestError> {
        let trimmed = line.trim_end_matches(['\n', '\r']);

        if trimmed.is_empty() {
            return self.finalize_event();
        }

        if trimmed.starts_with(':') {
            return Ok(None);
        }

        if let Some(rest) = trimmed.strip_prefix("data:") {
            let data = rest.trim_start();

            if data == "[DONE]" {
                self.data_lines.clear();
                self.done = true;
                return Ok(None);
            }

            if !data.is_empty() {
                self.data_lines.push(data.to_string());
            }
        }

        // Ignore other SSE fields (event, id, retry)
        Ok(None)
    }

    fn finalize_event(&mut self) -> Result<Option<AppCompletionResponse>, BailianRequestError> {
        if self.data_lines.is_empty() {
            return Ok(None);
        }

        let payload = self.data_lines.join("\n");
        self.data_lines.clear();

        let event = serde_json::from_str(&payload).map_err(|e| {
            BailianRequestError::InvalidEventData(format!("JSON parse error: {e}"))
        })?;

        Ok(Some(event))
    }
}
