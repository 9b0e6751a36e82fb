//! Server-Sent-Events decoding for the streaming analysis endpoint.
//!
//! The backend delivers analysis progress as `text/event-stream` frames:
//!
//! ```text
//! event: step_start
//! data: {"type":"step_start","step_name":"generate_sql"}
//! <blank line>
//! ```
//!
//! [`AnalysisStream::read_event`] reassembles one frame per call from the
//! response body, tolerating partial trailing frames, unknown SSE fields,
//! and payloads that fail to decode as JSON.

mod line_reader;
mod timeout_reader;

use std::time::Duration;

use quarry_protocol::AnalysisEventPayload;
use tokio::io::AsyncRead;
use tracing::trace;

use crate::error::Result;
use crate::sse::line_reader::LineReader;
use crate::sse::timeout_reader::TimeoutReader;

/// Per-read idle deadline applied when the caller leaves
/// [`StreamOptions::idle_timeout`] at zero.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

/// Tuning knobs for an analysis stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamOptions {
    /// Starting allocation for the line buffer. Zero means a small default;
    /// the buffer always grows to fit arbitrarily long lines, so this is a
    /// hint, never a cap.
    pub initial_buffer_size: usize,
    /// Maximum silence tolerated on any single read. Zero means
    /// [`DEFAULT_IDLE_TIMEOUT`]; use [`StreamOptions::no_idle_timeout`] to
    /// opt out entirely.
    pub idle_timeout: Duration,
    no_timeout: bool,
}

impl StreamOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_buffer_size(mut self, size: usize) -> Self {
        self.initial_buffer_size = size;
        self
    }

    pub fn idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self.no_timeout = false;
        self
    }

    /// Block indefinitely on reads, bounded only by the transport's own
    /// timeout policy. The analysis backend can be silent for long
    /// stretches, but never forever; prefer the default unless the caller
    /// enforces its own deadline.
    pub fn no_idle_timeout(mut self) -> Self {
        self.no_timeout = true;
        self
    }

    fn effective_idle_timeout(&self) -> Duration {
        if self.no_timeout {
            Duration::ZERO
        } else if self.idle_timeout.is_zero() {
            DEFAULT_IDLE_TIMEOUT
        } else {
            self.idle_timeout
        }
    }
}

/// One reconstructed SSE frame.
#[derive(Debug, Clone)]
pub struct StreamEvent {
    /// Value of the frame's `event:` field; empty when absent.
    pub event: String,
    /// Exact content of the accumulated `data:` field(s), newline-joined
    /// when the frame carried several. Always populated when the frame had
    /// any data lines, even if `payload` failed to decode.
    pub data: String,
    /// Best-effort JSON decode of `data`. `None` when the payload is not
    /// valid JSON; `data` remains authoritative either way.
    pub payload: Option<AnalysisEventPayload>,
}

type BoxedBody = Box<dyn AsyncRead + Send + Unpin>;

/// Decoder over one HTTP response body. Owned by a single consumer;
/// `read_event` calls must not race each other.
pub struct AnalysisStream {
    lines: Option<LineReader<BoxedBody>>,
}

impl std::fmt::Debug for AnalysisStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisStream").finish_non_exhaustive()
    }
}

impl AnalysisStream {
    pub(crate) fn new(body: BoxedBody, options: StreamOptions) -> Self {
        let reader = TimeoutReader::new(body, options.effective_idle_timeout());
        Self {
            lines: Some(LineReader::new(reader, options.initial_buffer_size)),
        }
    }

    /// Block until the next complete frame, end of stream, or error.
    ///
    /// `Ok(None)` is the normal end of stream. A frame terminated by the
    /// connection closing instead of a blank line is still returned. JSON
    /// decode failures of a frame's payload are not errors; timeouts and
    /// transport failures are, and callers should stop reading after one.
    pub async fn read_event(&mut self) -> Result<Option<StreamEvent>> {
        let Some(lines) = self.lines.as_mut() else {
            return Ok(None);
        };

        let mut event_name = String::new();
        let mut data_lines: Vec<String> = Vec::new();

        loop {
            match lines.next_line().await? {
                Some(line) => {
                    if line.is_empty() {
                        if !data_lines.is_empty() {
                            return Ok(Some(assemble(event_name, data_lines)));
                        }
                        // Blank line with nothing pending: frame separator
                        // noise, e.g. leading blank lines before the first
                        // frame. Keep reading.
                    } else if let Some(value) = line.strip_prefix("data: ") {
                        data_lines.push(value.to_string());
                    } else if let Some(value) = line.strip_prefix("event: ") {
                        // Last occurrence wins when repeated.
                        event_name = value.to_string();
                    } else {
                        // id:, retry:, comments, unknown fields.
                        trace!("ignoring SSE line: {line}");
                    }
                }
                None => {
                    if data_lines.is_empty() {
                        return Ok(None);
                    }
                    // Server closed the connection right after the last
                    // frame without a terminating blank line.
                    return Ok(Some(assemble(event_name, data_lines)));
                }
            }
        }
    }

    /// Drop the underlying body, closing the connection. Idempotent; safe
    /// before, between, or after reads. Subsequent `read_event` calls
    /// report end of stream.
    pub fn close(&mut self) {
        self.lines.take();
    }
}

fn assemble(event_name: String, data_lines: Vec<String>) -> StreamEvent {
    let data = data_lines.join("\n");
    let payload = match serde_json::from_str::<AnalysisEventPayload>(&data) {
        Ok(payload) => Some(payload),
        Err(err) => {
            trace!("event payload is not JSON, keeping raw bytes only: {err}");
            None
        }
    };
    StreamEvent {
        event: event_name,
        data,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stream_over(input: &str) -> AnalysisStream {
        stream_with_options(input, StreamOptions::new().no_idle_timeout())
    }

    fn stream_with_options(input: &str, options: StreamOptions) -> AnalysisStream {
        AnalysisStream::new(
            Box::new(std::io::Cursor::new(input.as_bytes().to_vec())),
            options,
        )
    }

    async fn collect(stream: &mut AnalysisStream) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        while let Some(event) = stream.read_event().await.expect("no errors expected") {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn frames_arrive_in_order_with_exact_data() {
        let input = "event: classification\ndata: {\"type\":\"classification\"}\n\n\
                     event: step_start\ndata: {\"type\":\"step_start\",\"step_name\":\"sql\"}\n\n\
                     data: {\"type\":\"complete\"}\n\n";
        let mut stream = stream_over(input);
        let events = collect(&mut stream).await;

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].event, "classification");
        assert_eq!(events[0].data, "{\"type\":\"classification\"}");
        assert_eq!(events[1].event, "step_start");
        assert_eq!(
            events[1]
                .payload
                .as_ref()
                .and_then(|p| p.step_name.as_deref()),
            Some("sql")
        );
        assert_eq!(events[2].event, "");
        assert_eq!(
            events[2]
                .payload
                .as_ref()
                .and_then(|p| p.event_type.as_deref()),
            Some("complete")
        );
    }

    #[tokio::test]
    async fn multi_line_data_joins_with_newline() {
        let mut stream = stream_over("data: {\"a\":1}\ndata: {\"b\":2}\n\n");
        let event = stream.read_event().await.unwrap().expect("one event");
        assert_eq!(event.data, "{\"a\":1}\n{\"b\":2}");
        assert_eq!(stream.read_event().await.unwrap().map(|e| e.data), None);
    }

    #[tokio::test]
    async fn malformed_json_degrades_to_raw_data() {
        let mut stream = stream_over("event: test\ndata: {not json\n\n");
        let event = stream.read_event().await.unwrap().expect("one event");
        assert_eq!(event.event, "test");
        assert_eq!(event.data, "{not json");
        assert!(event.payload.is_none());
    }

    #[tokio::test]
    async fn leading_and_trailing_blank_lines_are_absorbed() {
        let mut stream = stream_over("\n\nevent: x\ndata: {}\n\n\n\n");
        let events = collect(&mut stream).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "x");
    }

    #[tokio::test]
    async fn unterminated_trailing_frame_is_flushed() {
        let mut stream = stream_over("data: {}\n");
        let event = stream.read_event().await.unwrap().expect("flushed frame");
        assert_eq!(event.data, "{}");
        assert_eq!(stream.read_event().await.unwrap().map(|e| e.data), None);
    }

    #[tokio::test]
    async fn empty_stream_is_end_not_error() {
        let mut stream = stream_over("");
        assert!(stream.read_event().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_fields_are_ignored() {
        let input = "id: 7\nretry: 3000\n: comment\nevent: x\ndata: {}\nweird line\n\n";
        let mut stream = stream_over(input);
        let event = stream.read_event().await.unwrap().expect("one event");
        assert_eq!(event.event, "x");
        assert_eq!(event.data, "{}");
    }

    #[tokio::test]
    async fn repeated_event_field_last_one_wins() {
        let mut stream = stream_over("event: first\nevent: second\ndata: {}\n\n");
        let event = stream.read_event().await.unwrap().expect("one event");
        assert_eq!(event.event, "second");
    }

    #[tokio::test]
    async fn event_only_trailing_frame_yields_end_of_stream() {
        // No data lines pending at EOF, so there is nothing to flush.
        let mut stream = stream_over("event: x\n");
        assert!(stream.read_event().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn data_without_space_after_colon_is_ignored() {
        // The service always emits "data: "; anything else is an
        // unrecognized field per the exact-prefix rule.
        let mut stream = stream_over("data:{}\ndata: {\"ok\":true}\n\n");
        let event = stream.read_event().await.unwrap().expect("one event");
        assert_eq!(event.data, "{\"ok\":true}");
    }

    #[tokio::test]
    async fn huge_payload_survives_small_initial_buffer() {
        let blob = format!("{{\"content\":\"{}\"}}", "y".repeat(2 * 1024 * 1024));
        let input = format!("data: {blob}\n\n");
        let options = StreamOptions::new().initial_buffer_size(16).no_idle_timeout();
        let mut stream = stream_with_options(&input, options);
        let event = stream.read_event().await.unwrap().expect("one event");
        assert_eq!(event.data, blob);
        assert!(event.payload.is_some());
    }

    #[tokio::test]
    async fn close_is_idempotent_and_terminal() {
        let mut stream = stream_over("data: {}\n\n");
        stream.close();
        stream.close();
        assert!(stream.read_event().await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn idle_timeout_surfaces_with_duration() {
        let (read_half, _write_half) = tokio::io::duplex(64);
        let options = StreamOptions::new().idle_timeout(Duration::from_millis(250));
        let mut stream = AnalysisStream::new(Box::new(read_half), options);
        let err = stream.read_event().await.expect_err("must time out");
        assert!(matches!(err, crate::Error::IdleTimeout(d) if d == Duration::from_millis(250)));
        assert!(err.to_string().contains("250ms"));
    }

    #[tokio::test]
    async fn zero_options_apply_library_defaults() {
        let options = StreamOptions::new();
        assert_eq!(options.effective_idle_timeout(), DEFAULT_IDLE_TIMEOUT);
        assert_eq!(
            StreamOptions::new()
                .idle_timeout(Duration::from_secs(5))
                .effective_idle_timeout(),
            Duration::from_secs(5)
        );
        assert_eq!(
            StreamOptions::new().no_idle_timeout().effective_idle_timeout(),
            Duration::ZERO
        );
    }
}
