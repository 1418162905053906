//! Newline-delimited framing over any byte stream.

use std::io::{self, BufRead, BufReader, Read, Write};

/// Longest line accepted from a peer, not counting the newline.
pub const MAX_LINE_LEN: usize = 4096;

/// Reads one line at a time from a byte stream.
///
/// Lines are returned without the trailing `\n`, and a `\r` right before it
/// is dropped too. A final fragment without a newline is still returned.
/// After end of stream every call returns `Ok(None)`.
///
/// A line that is not UTF-8 or is longer than the limit is consumed up to
/// its newline and reported as `ErrorKind::InvalidData`, so the next call
/// starts on the following line.
pub struct LineReader<R> {
    reader: BufReader<R>,
    limit: usize,
    closed: bool,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_limit(reader, MAX_LINE_LEN)
    }

    pub fn with_limit(reader: R, limit: usize) -> Self {
        Self {
            reader: BufReader::new(reader),
            limit,
            closed: false,
        }
    }

    /// Read the next line, or `None` once the stream has ended.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }

        let mut buf = Vec::new();
        let max = self.limit as u64 + 1;
        let bytes_read = (&mut self.reader).take(max).read_until(b'\n', &mut buf)?;
        if bytes_read == 0 {
            self.closed = true;
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        } else if buf.len() > self.limit {
            self.skip_rest_of_line()?;
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line longer than {} bytes", self.limit),
            ));
        } else {
            // Unterminated final fragment.
            self.closed = true;
        }

        String::from_utf8(buf)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Discard input up to and including the next newline.
    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                self.closed = true;
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    self.reader.consume(end + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.reader.consume(len);
                }
            }
        }
    }
}

/// Writes one line at a time to a byte stream.
pub struct LineWriter<W> {
    writer: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write `line` followed by `\n` and flush.
    ///
    /// `line` must not contain its own newline.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
