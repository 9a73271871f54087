//! Byte sources for the detector

use std::io::{self, BufRead, BufReader, Read};

const READ_BUFFER_SIZE: usize = 8 * 1024;

/// A strictly sequential supply of bytes.
///
/// Returns `None` once the input is exhausted. Sources are never rewound.
pub trait ByteSource {
    /// Pull the next byte
    fn pull_byte(&mut self) -> Option<u8>;
}

impl<I: Iterator<Item = u8>> ByteSource for I {
    fn pull_byte(&mut self) -> Option<u8> {
        self.next()
    }
}

/// Buffered byte source over any reader.
///
/// A read error ends the stream; the error is kept and can be taken
/// with [`ReaderSource::take_error`] once the scan is over.
pub struct ReaderSource<R> {
    reader: BufReader<R>,
    error: Option<io::Error>,
    position: u64,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(READ_BUFFER_SIZE, reader),
            error: None,
            position: 0,
        }
    }

    /// Number of bytes handed out so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Take the I/O error that ended the stream, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<R: Read> Iterator for ReaderSource<R> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.error.is_some() {
            return None;
        }

        loop {
            match self.reader.fill_buf() {
                Ok([]) => return None,
                Ok(buf) => {
                    let byte = buf[0];
                    self.reader.consume(1);
                    self.position += 1;
                    return Some(byte);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::debug!(position = self.position, error = %e, "read failed");
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that yields some bytes and then fails
    struct FailingReader {
        data: Vec<u8>,
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
            }
            self.served = true;
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            Ok(n)
        }
    }

    #[test]
    fn test_iterator_source() {
        let mut source = [1u8, 2].into_iter();
        assert_eq!(source.pull_byte(), Some(1));
        assert_eq!(source.pull_byte(), Some(2));
        assert_eq!(source.pull_byte(), None);
    }

    #[test]
    fn test_reader_source_reads_everything() {
        let data: Vec<u8> = (0..=255u8).cycle().take(READ_BUFFER_SIZE * 2 + 3).collect();
        let mut source = ReaderSource::new(&data[..]);
        let mut read = Vec::new();
        while let Some(byte) = source.pull_byte() {
            read.push(byte);
        }
        assert_eq!(read, data);
        assert_eq!(source.position(), data.len() as u64);
        assert!(source.take_error().is_none());
    }

    #[test]
    fn test_reader_source_keeps_error() {
        let mut source = ReaderSource::new(FailingReader {
            data: b"ab".to_vec(),
            served: false,
        });
        assert_eq!(source.pull_byte(), Some(b'a'));
        assert_eq!(source.pull_byte(), Some(b'b'));
        assert_eq!(source.pull_byte(), None);
        assert_eq!(source.pull_byte(), None);

        let err = source.take_error().unwrap();
        assert_eq!(err.to_string(), "device gone");
        assert!(source.take_error().is_none());
    }
}
