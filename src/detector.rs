//! Encoding detection over a byte stream

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::bytes::{is_ascii_like, is_binary_control, is_iso8859_like};
use crate::error::DetectError;
use crate::source::{ByteSource, ReaderSource};
use crate::utf8::{validate_sequence, Utf8Sequence};

/// Final classification of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// No bytes at all
    Empty,
    /// Only bytes from the ASCII text subset
    Ascii,
    /// ISO-8859-1 text
    Iso8859,
    /// UTF-8 text containing at least one multi-byte sequence
    Utf8,
    /// Anything else
    Data,
}

impl Verdict {
    /// Every verdict, in reduction order
    pub const ALL: [Verdict; 5] = [
        Verdict::Empty,
        Verdict::Ascii,
        Verdict::Iso8859,
        Verdict::Utf8,
        Verdict::Data,
    ];

    /// Label printed for this verdict
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Empty => "empty",
            Verdict::Ascii => "ASCII text",
            Verdict::Iso8859 => "ISO-8859 text",
            Verdict::Utf8 => "UTF-8 Unicode text",
            Verdict::Data => "data",
        }
    }

    /// Whether the input was recognised as some kind of text
    pub fn is_text(&self) -> bool {
        matches!(self, Verdict::Ascii | Verdict::Iso8859 | Verdict::Utf8)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration for verdict reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectConfig {
    /// Rank UTF-8 above ISO-8859 when both remain plausible
    pub prefer_utf8: bool,
    /// Only report UTF-8 after seeing a multi-byte sequence
    pub require_multibyte_evidence: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            prefer_utf8: true,
            require_multibyte_evidence: true,
        }
    }
}

/// Running hypotheses for one scan.
///
/// Hypotheses start out true and can only be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationState {
    pub could_be_ascii: bool,
    pub could_be_iso8859: bool,
    pub could_be_utf8: bool,
    pub saw_any_byte: bool,
    pub saw_multibyte_utf8: bool,
}

impl ClassificationState {
    /// Fresh state: every text hypothesis open, nothing seen yet
    pub fn new() -> Self {
        Self {
            could_be_ascii: true,
            could_be_iso8859: true,
            could_be_utf8: true,
            saw_any_byte: false,
            saw_multibyte_utf8: false,
        }
    }

    /// Whether any text hypothesis is still open
    pub fn any_text_hypothesis(&self) -> bool {
        self.could_be_ascii || self.could_be_iso8859 || self.could_be_utf8
    }

    /// Run the single-byte predicates against a byte at `offset`
    fn observe(&mut self, byte: u8, offset: u64) {
        if self.could_be_ascii && !is_ascii_like(byte) {
            tracing::trace!(offset, byte, "not ASCII");
            self.could_be_ascii = false;
        }
        if self.could_be_iso8859 && !is_iso8859_like(byte) {
            tracing::trace!(offset, byte, "not ISO-8859");
            self.could_be_iso8859 = false;
        }
    }

    fn clear_utf8(&mut self, offset: u64, reason: &dyn std::fmt::Display) {
        if self.could_be_utf8 {
            tracing::trace!(offset, %reason, "not UTF-8");
            self.could_be_utf8 = false;
        }
    }

    fn clear_all(&mut self, byte: u8, offset: u64) {
        if self.any_text_hypothesis() {
            tracing::trace!(offset, byte, "binary control byte");
        }
        self.could_be_ascii = false;
        self.could_be_iso8859 = false;
        self.could_be_utf8 = false;
    }
}

impl Default for ClassificationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies byte streams
#[derive(Debug, Clone, Copy, Default)]
pub struct Detector {
    config: DetectConfig,
}

impl Detector {
    /// Create a detector with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom configuration
    pub fn with_config(config: DetectConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Classify everything `source` yields
    pub fn classify<S: ByteSource + ?Sized>(&self, source: &mut S) -> Verdict {
        let state = self.scan(source);
        let verdict = self.reduce(&state);
        tracing::debug!(?state, %verdict, "classified");
        verdict
    }

    /// Run the hypotheses over the whole stream
    pub fn scan<S: ByteSource + ?Sized>(&self, source: &mut S) -> ClassificationState {
        let mut state = ClassificationState::new();
        let mut offset: u64 = 0;

        while let Some(byte) = source.pull_byte() {
            state.saw_any_byte = true;
            let lead_offset = offset;
            offset += 1;

            if is_binary_control(byte) {
                state.clear_all(byte, lead_offset);
                continue;
            }

            state.observe(byte, lead_offset);

            if !state.could_be_utf8 {
                continue;
            }

            let mut pulled: u64 = 0;
            let result = validate_sequence(byte, source, |continuation| {
                pulled += 1;
                state.observe(continuation, lead_offset + pulled);
            });
            offset += pulled;

            match result {
                Utf8Sequence::Valid { len } => {
                    if len > 1 {
                        state.saw_multibyte_utf8 = true;
                    }
                }
                Utf8Sequence::Invalid(failure) => state.clear_utf8(lead_offset, &failure),
            }
        }

        state
    }

    /// Reduce the final hypotheses to a single verdict
    pub fn reduce(&self, state: &ClassificationState) -> Verdict {
        if !state.saw_any_byte {
            return Verdict::Empty;
        }
        if state.could_be_ascii {
            return Verdict::Ascii;
        }

        let utf8 = state.could_be_utf8
            && (state.saw_multibyte_utf8 || !self.config.require_multibyte_evidence);
        let iso8859 = state.could_be_iso8859;

        let ranked = if self.config.prefer_utf8 {
            [(utf8, Verdict::Utf8), (iso8859, Verdict::Iso8859)]
        } else {
            [(iso8859, Verdict::Iso8859), (utf8, Verdict::Utf8)]
        };

        ranked
            .into_iter()
            .find_map(|(plausible, verdict)| plausible.then_some(verdict))
            .unwrap_or(Verdict::Data)
    }

    /// Classify an in-memory buffer
    pub fn classify_bytes(&self, data: &[u8]) -> Verdict {
        self.classify(&mut data.iter().copied())
    }

    /// Classify everything a reader yields.
    ///
    /// A read error is returned instead of a verdict for the partial input.
    pub fn classify_reader<R: Read>(&self, reader: R) -> Result<Verdict, DetectError> {
        let mut source = ReaderSource::new(reader);
        let verdict = self.classify(&mut source);

        if let Some(source_err) = source.take_error() {
            return Err(DetectError::Read {
                position: source.position(),
                source: source_err,
            });
        }

        Ok(verdict)
    }

    /// Open and classify a file
    pub fn classify_path(&self, path: &Path) -> Result<Verdict, DetectError> {
        let file = fs::File::open(path).map_err(|source| DetectError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.classify_reader(file)
    }
}

/// Classify a byte source with the default configuration
pub fn classify<S: ByteSource + ?Sized>(source: &mut S) -> Verdict {
    Detector::new().classify(source)
}

/// Classify an in-memory buffer with the default configuration
pub fn classify_bytes(data: &[u8]) -> Verdict {
    Detector::new().classify_bytes(data)
}
