use std::io::{self, Write};

use colored::{Color, Colorize};
use vocabulary::PartOfSpeech;

const SEPARATOR_WIDTH: usize = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Synonyms,
    Antonyms,
    Examples,
}

impl Section {
    fn title(self) -> &'static str {
        match self {
            Section::Synonyms => "Synonyms",
            Section::Antonyms => "Antonyms",
            Section::Examples => "Examples",
        }
    }

    fn color(self) -> Color {
        match self {
            Section::Synonyms => Color::Yellow,
            Section::Antonyms => Color::Red,
            Section::Examples => Color::Green,
        }
    }
}

/// Where the quiz writes. One method per kind of line so an implementation
/// can style each kind on its own.
pub trait ConsoleSink {
    /// Shows the word being asked, leaving the cursor on the same line.
    fn prompt(&mut self, word: &str) -> io::Result<()>;
    fn correct(&mut self) -> io::Result<()>;
    fn possible_translations(&mut self) -> io::Result<()>;
    fn translation(&mut self, translation: &str) -> io::Result<()>;
    fn part_of_speech(&mut self, kind: PartOfSpeech) -> io::Result<()>;
    fn section(&mut self, section: Section) -> io::Result<()>;
    fn section_entry(&mut self, section: Section, key: &str, value: &str) -> io::Result<()>;
    fn separator(&mut self) -> io::Result<()>;
    fn blank_line(&mut self) -> io::Result<()>;
}

pub struct TerminalConsole<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// A console that never emits escape codes.
    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", text.color(color))
        } else {
            writeln!(self.out, "{text}")
        }
    }
}

impl<W: Write> ConsoleSink for TerminalConsole<W> {
    fn prompt(&mut self, word: &str) -> io::Result<()> {
        write!(self.out, " {word} -> ")?;
        self.out.flush()
    }

    fn correct(&mut self) -> io::Result<()> {
        self.line(" Correct!", Color::Green)?;
        self.blank_line()
    }

    fn possible_translations(&mut self) -> io::Result<()> {
        self.blank_line()?;
        self.line(" Possible Translations:", Color::Blue)
    }

    fn translation(&mut self, translation: &str) -> io::Result<()> {
        self.line(&format!("  - {translation}"), Color::Blue)
    }

    fn part_of_speech(&mut self, kind: PartOfSpeech) -> io::Result<()> {
        self.blank_line()?;
        self.line(&format!("--- [ {kind} ] ---"), Color::White)
    }

    fn section(&mut self, section: Section) -> io::Result<()> {
        self.blank_line()?;
        self.line(&format!(" {}:", section.title()), section.color())
    }

    fn section_entry(&mut self, section: Section, key: &str, value: &str) -> io::Result<()> {
        self.line(&format!("   {key} -> {value}"), section.color())
    }

    fn separator(&mut self) -> io::Result<()> {
        self.line(&"-".repeat(SEPARATOR_WIDTH), Color::Blue)?;
        self.blank_line()
    }

    fn blank_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}
