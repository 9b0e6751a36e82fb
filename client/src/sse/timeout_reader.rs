use std::io;
use std::time::Duration;

use tokio::io::AsyncRead;
use tokio::io::AsyncReadExt;
use tokio::time::timeout;

/// Bounds each individual read on the wrapped source by an idle deadline.
///
/// The deadline is per call, not cumulative: a stream that delivers a byte
/// every few seconds never times out, while a source that goes silent for
/// longer than `idle` fails that one read with [`io::ErrorKind::TimedOut`].
/// When the deadline fires the in-flight read future is dropped; async
/// cancellation means no execution unit is left behind.
///
/// `Duration::ZERO` disables the race entirely and delegates straight to
/// the source, with no timer overhead.
pub(crate) struct TimeoutReader<R> {
    inner: R,
    idle: Duration,
}

impl<R: AsyncRead + Unpin> TimeoutReader<R> {
    pub(crate) fn new(inner: R, idle: Duration) -> Self {
        Self { inner, idle }
    }

    pub(crate) fn idle_timeout(&self) -> Duration {
        self.idle
    }

    /// Read into `buf`, failing with [`io::ErrorKind::TimedOut`] if the
    /// source stays silent past the idle deadline. A timeout does not
    /// poison the reader; the next call starts a fresh race.
    pub(crate) async fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.idle.is_zero() {
            return self.inner.read(buf).await;
        }
        match timeout(self.idle, self.inner.read(buf)).await {
            Ok(result) => result,
            Err(_) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                format!("no data received for {:?}", self.idle),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::io::AsyncWriteExt;
    use tokio::time::Instant;
    use tokio::time::sleep;

    #[tokio::test]
    async fn disabled_timeout_delegates_to_source() {
        let mut reader = TimeoutReader::new(&b"hello"[..], Duration::ZERO);
        let mut buf = [0u8; 16];
        let n = reader.read(&mut buf).await.expect("read succeeds");
        assert_eq!(&buf[..n], b"hello");
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_fires_on_silent_source() {
        // Hold the write half open without ever writing so the read blocks.
        let (read_half, _write_half) = tokio::io::duplex(64);
        let idle = Duration::from_millis(500);
        let mut reader = TimeoutReader::new(read_half, idle);

        let start = Instant::now();
        let mut buf = [0u8; 16];
        let err = reader.read(&mut buf).await.expect_err("must time out");
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
        assert!(err.to_string().contains("500ms"));

        let elapsed = start.elapsed();
        assert!(elapsed >= idle, "fired early: {elapsed:?}");
        assert!(elapsed < idle + Duration::from_millis(50), "fired late: {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn no_timeout_while_source_makes_progress() {
        let (read_half, mut write_half) = tokio::io::duplex(64);
        let chunks = 5;
        tokio::spawn(async move {
            for _ in 0..chunks {
                sleep(Duration::from_millis(100)).await;
                write_half.write_all(b"x").await.expect("write");
            }
        });

        let mut reader = TimeoutReader::new(read_half, Duration::from_millis(500));
        let mut total_reads = 0;
        let mut buf = [0u8; 16];
        loop {
            match reader.read(&mut buf).await.expect("no timeout expected") {
                0 => break,
                _ => total_reads += 1,
            }
        }
        assert_eq!(total_reads, chunks);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_does_not_poison_subsequent_reads() {
        let (read_half, mut write_half) = tokio::io::duplex(64);
        let mut reader = TimeoutReader::new(read_half, Duration::from_millis(100));

        let mut buf = [0u8; 16];
        let err = reader.read(&mut buf).await.expect_err("first read times out");
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);

        write_half.write_all(b"late").await.expect("write");
        let n = reader.read(&mut buf).await.expect("second read succeeds");
        assert_eq!(&buf[..n], b"late");
    }

    #[tokio::test]
    async fn eof_passes_through_unaltered() {
        let mut reader = TimeoutReader::new(&b""[..], Duration::from_millis(100));
        let mut buf = [0u8; 16];
        let n = reader.read(&mut buf).await.expect("eof is not an error");
        assert_eq!(n, 0);
    }
}
