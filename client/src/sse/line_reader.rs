use std::io;

use tokio::io::AsyncRead;

use crate::error::Error;
use crate::error::Result;
use crate::sse::timeout_reader::TimeoutReader;

/// Starting allocation when the caller passes no buffer-size hint.
pub(crate) const DEFAULT_BUFFER_SIZE: usize = 4096;

/// Produces successive `\n`-delimited lines from a byte stream with no
/// upper bound on line length.
///
/// Bytes are pulled through the [`TimeoutReader`] in fixed-size chunks and
/// accumulated until a terminator shows up; the accumulation buffer grows
/// as far as the longest line requires. A trailing run of bytes with no
/// final `\n` is returned as one last line, so a server that closes the
/// connection mid-frame still hands the caller everything it sent.
pub(crate) struct LineReader<R> {
    src: TimeoutReader<R>,
    chunk: Vec<u8>,
    pending: Vec<u8>,
    eof: bool,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub(crate) fn new(src: TimeoutReader<R>, initial_buffer_size: usize) -> Self {
        let size = if initial_buffer_size == 0 {
            DEFAULT_BUFFER_SIZE
        } else {
            initial_buffer_size
        };
        Self {
            src,
            chunk: vec![0u8; size],
            pending: Vec::with_capacity(size),
            eof: false,
        }
    }

    /// Next logical line with the terminator (and any trailing `\r`)
    /// stripped. `Ok(None)` is end of stream with nothing pending.
    pub(crate) async fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
                let rest = self.pending.split_off(pos + 1);
                let mut line = std::mem::replace(&mut self.pending, rest);
                line.pop();
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
            }

            if self.eof {
                if self.pending.is_empty() {
                    return Ok(None);
                }
                let mut line = std::mem::take(&mut self.pending);
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
            }

            match self.src.read(&mut self.chunk).await {
                Ok(0) => self.eof = true,
                Ok(n) => self.pending.extend_from_slice(&self.chunk[..n]),
                Err(err) if err.kind() == io::ErrorKind::TimedOut => {
                    return Err(Error::IdleTimeout(self.src.idle_timeout()));
                }
                Err(err) => return Err(Error::Stream(err)),
            }
        }
    }
}
