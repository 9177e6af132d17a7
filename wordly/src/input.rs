use std::io::BufRead;

/// Supplies one typed answer per question.
pub trait LineSource {
    /// The next line, or `None` once the input is exhausted or unreadable.
    fn next_line(&mut self) -> Option<String>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(error) => {
                tracing::warn!(%error, "failed to read an answer");
                None
            }
        }
    }
}
