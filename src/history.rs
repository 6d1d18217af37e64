use std::{fs, io, path::PathBuf};

/// The persisted record of successful evaluations.
///
/// The history is a flat text file holding one line per evaluation in the
/// form `<input> = <result>`. The whole file is loaded at startup and
/// rewritten in full on every save; append semantics are simulated by the
/// full rewrite. A missing file loads as an empty history so a fresh
/// installation starts cleanly.
pub struct History {
    path:    PathBuf,
    records: Vec<String>,
}

impl History {
    /// Loads the history stored at `path`.
    ///
    /// # Errors
    /// Returns any I/O error other than the file not existing.
    pub fn load(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(content) => content.lines().map(str::to_owned).collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e),
        };
        Ok(Self { path, records })
    }

    /// Appends a record for a successful evaluation and returns the
    /// formatted line.
    ///
    /// The record is only added in memory; call [`History::save`] to persist
    /// it.
    pub fn record(&mut self, input: &str, value: f64) -> String {
        let line = format!("{input} = {}", format_result(value));
        self.records.push(line.clone());
        line
    }

    /// Writes the entire history back to its file.
    ///
    /// # Errors
    /// Returns any I/O error raised while writing.
    pub fn save(&self) -> io::Result<()> {
        let mut content = self.records.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)
    }

    /// All record lines, oldest first.
    #[must_use]
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Whether the history holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Formats an evaluation result for display and for history records.
///
/// Integral values keep a single trailing decimal so a record reads
/// `2+3*4 = 14.0` rather than `2+3*4 = 14`; fractional and non-finite
/// values render naturally.
///
/// # Example
/// ```
/// use numera::history::format_result;
///
/// assert_eq!(format_result(14.0), "14.0");
/// assert_eq!(format_result(3.5), "3.5");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
