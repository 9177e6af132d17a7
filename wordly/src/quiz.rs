use std::collections::BTreeMap;
use std::io;

use rand::{seq::SliceRandom, Rng};
use vocabulary::{GrammarEntry, WordRecord};

use crate::console::{ConsoleSink, Section};
use crate::input::LineSource;

const MAX_SHOWN_TRANSLATIONS: usize = 5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub asked: usize,
    pub correct: usize,
}

/// Shuffles the records once, then asks each of them in turn. A missing or
/// unreadable answer counts as a wrong one.
pub fn run<R, I, C>(
    records: &mut [WordRecord],
    rng: &mut R,
    input: &mut I,
    output: &mut C,
) -> io::Result<QuizOutcome>
where
    R: Rng + ?Sized,
    I: LineSource + ?Sized,
    C: ConsoleSink + ?Sized,
{
    records.shuffle(rng);

    let mut outcome = QuizOutcome::default();
    for record in records.iter() {
        output.prompt(&record.word)?;
        let answer = input.next_line().unwrap_or_default();
        outcome.asked += 1;

        if record.accepts(&answer) {
            tracing::debug!(word = %record.word, "correct answer");
            outcome.correct += 1;
            output.correct()?;
        } else {
            tracing::debug!(word = %record.word, answer = answer.trim(), "wrong answer");
            output.possible_translations()?;
            for translation in sample_translations(&record.translations, rng) {
                output.translation(translation)?;
            }
            output.blank_line()?;

            if !record.grammar.is_empty() {
                display_details(&record.grammar, output)?;
            }
            output.separator()?;
        }
    }
    Ok(outcome)
}

/// Picks `min(5, len)` translations, each independently, so repeats are
/// possible.
pub fn sample_translations<'a, R>(translations: &'a [String], rng: &mut R) -> Vec<&'a str>
where
    R: Rng + ?Sized,
{
    let count = translations.len().min(MAX_SHOWN_TRANSLATIONS);
    (0..count)
        .filter_map(|_| translations.choose(rng))
        .map(|translation| &translation[..])
        .collect()
}

pub fn display_details<C>(entries: &[GrammarEntry], output: &mut C) -> io::Result<()>
where
    C: ConsoleSink + ?Sized,
{
    for entry in entries {
        output.part_of_speech(entry.kind())?;
        let detail = entry.detail();
        display_section(Section::Synonyms, &detail.synonyms, output)?;
        display_section(Section::Antonyms, &detail.antonyms, output)?;
        display_section(Section::Examples, &detail.examples, output)?;
        output.blank_line()?;
    }
    Ok(())
}

fn display_section<C>(
    section: Section,
    pairs: &BTreeMap<String, String>,
    output: &mut C,
) -> io::Result<()>
where
    C: ConsoleSink + ?Sized,
{
    if pairs.is_empty() {
        return Ok(());
    }
    output.section(section)?;
    for (key, value) in pairs {
        output.section_entry(section, key, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TerminalConsole;
    use rand::{rngs::StdRng, SeedableRng};
    use vocabulary::{GrammarDetail, VerbDetail};

    const SEPARATOR: &str =
        "---------------------------------------------------------------------------";

    fn record(word: &str, translations: &[&str]) -> WordRecord {
        WordRecord {
            word: word.to_owned(),
            translations: translations.iter().map(|t| t.to_string()).collect(),
            grammar: Vec::new(),
        }
    }

    fn play(records: &mut [WordRecord], answers: &str, seed: u64) -> (QuizOutcome, String) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut input = answers.as_bytes();
        let mut console = TerminalConsole::plain(Vec::new());
        let outcome = run(records, &mut rng, &mut input, &mut console).unwrap();
        (outcome, String::from_utf8(console.into_inner()).unwrap())
    }

    fn bullets(output: &str) -> Vec<&str> {
        output
            .lines()
            .filter_map(|line| line.strip_prefix("  - "))
            .collect()
    }

    #[test]
    fn correct_answer_confirms_without_hints() {
        let mut records = vec![record("casa", &["house", "home"])];
        let (outcome, output) = play(&mut records, "house\n", 1);
        assert_eq!(output, " casa ->  Correct!\n\n");
        assert_eq!(outcome, QuizOutcome { asked: 1, correct: 1 });
    }

    #[test]
    fn wrong_answer_lists_translations_and_separator() {
        let mut records = vec![record("casa", &["house", "home"])];
        let (outcome, output) = play(&mut records, "car\n", 7);
        assert!(output.contains(" Possible Translations:"));
        let shown = bullets(&output);
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|t| *t == "house" || *t == "home"));
        assert!(output.lines().any(|line| line == SEPARATOR));
        assert!(!output.contains("--- ["));
        assert!(!output.contains("Correct!"));
        assert_eq!(outcome.correct, 0);
    }

    #[test]
    fn answers_are_trimmed_and_case_folded() {
        let mut records = vec![record("casa", &["casa", "hogar"])];
        for answer in ["Casa\n", " casa \n", "CASA\n"] {
            let (outcome, _) = play(&mut records, answer, 3);
            assert_eq!(outcome.correct, 1, "{answer:?}");
        }
        for answer in ["casas\n", "\n"] {
            let (outcome, _) = play(&mut records, answer, 3);
            assert_eq!(outcome.correct, 0, "{answer:?}");
        }
    }

    #[test]
    fn exhausted_input_counts_as_wrong_and_the_quiz_goes_on() {
        let mut records = vec![
            record("uno", &["one"]),
            record("dos", &["two"]),
            record("tres", &["three"]),
        ];
        let (outcome, output) = play(&mut records, "", 11);
        assert_eq!(outcome, QuizOutcome { asked: 3, correct: 0 });
        assert_eq!(output.matches(" Possible Translations:").count(), 3);
    }

    #[test]
    fn empty_translations_show_no_bullets() {
        let mut records = vec![record("nada", &[])];
        let (outcome, output) = play(&mut records, "nothing\n", 5);
        assert_eq!(outcome.correct, 0);
        assert!(bullets(&output).is_empty());
        assert!(output.contains(SEPARATOR));
    }

    #[test]
    fn sample_shows_at_most_five_with_replacement() {
        let mut rng = StdRng::seed_from_u64(42);
        let many: Vec<String> = (0..9).map(|i| format!("t{i}")).collect();
        let few: Vec<String> = vec!["a".into(), "b".into(), "c".into()];

        for _ in 0..50 {
            let sample = sample_translations(&many, &mut rng);
            assert_eq!(sample.len(), 5);
            assert!(sample.iter().all(|t| many.iter().any(|m| m == t)));
            assert_eq!(sample_translations(&few, &mut rng).len(), 3);
        }
        assert!(sample_translations(&[], &mut rng).is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        for size in [0, 1, 2, 10] {
            let mut records: Vec<WordRecord> = (0..size)
                .map(|i| record(&format!("w{i}"), &["x"]))
                .collect();
            let answers = "x\n".repeat(size);
            let (outcome, output) = play(&mut records, &answers, size as u64);
            assert_eq!(outcome.asked, size);

            let mut asked: Vec<&str> = output
                .split(" -> ")
                .filter_map(|chunk| chunk.rsplit(' ').next())
                .filter(|word| word.starts_with('w'))
                .collect();
            asked.sort_unstable();
            let mut expected: Vec<String> = (0..size).map(|i| format!("w{i}")).collect();
            expected.sort_unstable();
            assert_eq!(asked, expected);

            let mut shuffled: Vec<&str> = records.iter().map(|r| &r.word[..]).collect();
            shuffled.sort_unstable();
            assert_eq!(shuffled, expected);
        }
    }

    #[test]
    fn noun_with_only_synonyms_shows_only_that_section() {
        let mut luz = record("luz", &["light"]);
        let mut detail = GrammarDetail::default();
        detail
            .synonyms
            .insert("claridad".to_owned(), "brightness".to_owned());
        luz.grammar.push(GrammarEntry::Noun(detail));

        let (_, output) = play(&mut [luz], "dark\n", 2);
        assert!(output.contains("--- [ Noun ] ---"));
        assert!(output.contains(" Synonyms:\n   claridad -> brightness\n"));
        assert!(!output.contains("Antonyms"));
        assert!(!output.contains("Examples"));
        assert!(!output.contains("Verb"));
    }

    #[test]
    fn details_render_every_entry_in_order() {
        let mut noun = GrammarDetail::default();
        noun.antonyms.insert("oscuridad".into(), "darkness".into());
        let mut verb = GrammarDetail::default();
        verb.examples.insert("Enciende la luz".into(), "Turn on the light".into());
        let entries = [
            GrammarEntry::Noun(noun),
            GrammarEntry::Verb(VerbDetail {
                detail: verb,
                irregular: false,
            }),
        ];

        let mut console = TerminalConsole::plain(Vec::new());
        display_details(&entries, &mut console).unwrap();
        let output = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            output,
            "\n--- [ Noun ] ---\n\n Antonyms:\n   oscuridad -> darkness\n\n\
             \n--- [ Verb ] ---\n\n Examples:\n   Enciende la luz -> Turn on the light\n\n"
        );
    }
}
