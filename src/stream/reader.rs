//! Line-delimited frame splitting over a chunked byte stream.

use bytes::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};

use crate::error::Result;

/// Splits a chunked byte stream into whitespace-trimmed frames.
///
/// Frames are delimited by `\n`; a trailing `\r` and any surrounding ASCII
/// whitespace are trimmed. Frames that are empty after trimming are
/// keep-alive pings and are silently dropped, never surfaced. The reader
/// performs no retry: any read failure (and EOF) ends the stream and is the
/// caller's to act on.
pub struct LineReader<S> {
    inner: S,
    buf: BytesMut,
    eof: bool,
}

impl<S> LineReader<S>
where
    S: Stream<Item = Result<Bytes>> + Unpin,
{
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            buf: BytesMut::new(),
            eof: false,
        }
    }

    /// The next non-blank frame, or `None` once the stream has ended.
    ///
    /// Read errors propagate as-is; the reader is not usable afterwards.
    pub async fn next_frame(&mut self) -> Result<Option<Bytes>> {
        loop {
            if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
                let mut line = self.buf.split_to(pos + 1);
                line.truncate(pos);
                if let Some(frame) = trim_frame(line.freeze()) {
                    return Ok(Some(frame));
                }
                continue;
            }

            if self.eof {
                // Flush a trailing unterminated line, then report the end.
                if self.buf.is_empty() {
                    return Ok(None);
                }
                let line = self.buf.split().freeze();
                if let Some(frame) = trim_frame(line) {
                    return Ok(Some(frame));
                }
                return Ok(None);
            }

            match self.inner.next().await {
                Some(Ok(chunk)) => self.buf.extend_from_slice(&chunk),
                Some(Err(e)) => return Err(e),
                None => self.eof = true,
            }
        }
    }
}

/// Trim ASCII whitespace from both ends; `None` for keep-alive frames.
fn trim_frame(line: Bytes) -> Option<Bytes> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let end = line.iter().rposition(|b| !b.is_ascii_whitespace())? + 1;
    Some(line.slice(start..end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn reader_over(chunks: Vec<&'static [u8]>) -> LineReader<impl Stream<Item = Result<Bytes>> + Unpin> {
        LineReader::new(stream::iter(
            chunks.into_iter().map(|c| Ok(Bytes::from_static(c))),
        ))
    }

    async fn collect(chunks: Vec<&'static [u8]>) -> Vec<Bytes> {
        let mut reader = reader_over(chunks);
        let mut frames = Vec::new();
        while let Some(frame) = reader.next_frame().await.unwrap() {
            frames.push(frame);
        }
        frames
    }

    #[tokio::test]
    async fn test_splits_lines() {
        let frames = collect(vec![b"{\"a\":1}\n{\"b\":2}\n"]).await;
        assert_eq!(frames, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[tokio::test]
    async fn test_blank_lines_dropped() {
        let frames = collect(vec![b"\n\r\n   \n{\"a\":1}\n\n"]).await;
        assert_eq!(frames, vec!["{\"a\":1}"]);
    }

    #[tokio::test]
    async fn test_trailing_cr_trimmed() {
        let frames = collect(vec![b"{\"a\":1}\r\n"]).await;
        assert_eq!(frames, vec!["{\"a\":1}"]);
    }

    #[tokio::test]
    async fn test_line_split_across_chunks() {
        let frames = collect(vec![b"{\"a\"", b":1}\n{\"b\"", b":2}\n"]).await;
        assert_eq!(frames, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[tokio::test]
    async fn test_eof_flushes_unterminated_line() {
        let frames = collect(vec![b"{\"a\":1}\n{\"b\":2}"]).await;
        assert_eq!(frames, vec!["{\"a\":1}", "{\"b\":2}"]);
    }

    #[tokio::test]
    async fn test_empty_stream_ends() {
        let frames = collect(vec![]).await;
        assert!(frames.is_empty());
        let frames = collect(vec![b"\n\n\n"]).await;
        assert!(frames.is_empty());
    }

    #[tokio::test]
    async fn test_read_error_propagates() {
        let chunks: Vec<Result<Bytes>> = vec![
            Ok(Bytes::from_static(b"{\"a\":1}\n")),
            Err(crate::error::Error::StreamEnded),
        ];
        let mut reader = LineReader::new(stream::iter(chunks));
        assert!(reader.next_frame().await.unwrap().is_some());
        assert!(reader.next_frame().await.is_err());
    }
}
