//! Batch and interactive drivers feeding strings to a character automaton.

use super::{Automaton, AutomatonError};
use log::debug;
use std::{
	fmt,
	hash::Hash,
	io::{self, BufRead, Write},
};

/// Counts occurrences of `needle` in `haystack`, scanning left to right and resuming after each match,
/// so `aaaa` contains `aa` twice. An empty needle never matches.
pub fn count_non_overlapping(haystack: &str, needle: &str) -> usize {
	if needle.is_empty() {
		0
	} else {
		haystack.matches(needle).count()
	}
}

/// Result of evaluating one string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<S> {
	Accepted,
	Rejected,
	/// The automaton disagrees with the oracle.
	Mismatch { accepted: bool },
	/// The string is not over the alphabet of the automaton.
	Error(AutomatonError<S, char>),
}

/// A string together with its verdict and optional annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<S> {
	pub input: String,
	pub note: Option<String>,
	pub verdict: Verdict<S>,
}

impl<S> Outcome<S> {
	fn label(&self) -> String {
		match &self.note {
			Some(note) => format!("'{}' {}", self.input, note),
			None => format!("'{}'", self.input),
		}
	}
}

/// Outcomes of a batch run, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<S> {
	pub outcomes: Vec<Outcome<S>>,
}

impl<S> Report<S> {
	pub fn accepted(&self) -> impl Iterator<Item = &Outcome<S>> {
		self.outcomes
			.iter()
			.filter(|outcome| matches!(outcome.verdict, Verdict::Accepted))
	}

	pub fn rejected(&self) -> impl Iterator<Item = &Outcome<S>> {
		self.outcomes
			.iter()
			.filter(|outcome| matches!(outcome.verdict, Verdict::Rejected))
	}

	/// Mismatches and evaluation errors.
	pub fn errors(&self) -> impl Iterator<Item = &Outcome<S>> {
		self.outcomes.iter().filter(|outcome| {
			matches!(
				outcome.verdict,
				Verdict::Mismatch { .. } | Verdict::Error(_)
			)
		})
	}
}

impl<S> fmt::Display for Report<S>
where
	S: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, "ACCEPTED:")?;
		write_section(f, self.accepted(), |outcome| {
			format!("  ✓ {}", outcome.label())
		})?;
		writeln!(f, "\nREJECTED:")?;
		write_section(f, self.rejected(), |outcome| {
			format!("  ✗ {}", outcome.label())
		})?;

		let errors: Vec<_> = self.errors().collect();
		if !errors.is_empty() {
			writeln!(f, "\nERRORS:")?;
			for outcome in errors {
				match &outcome.verdict {
					Verdict::Mismatch { accepted: true } => writeln!(
						f,
						"  ⚠ {}: ACCEPTED but should be rejected",
						outcome.label()
					)?,
					Verdict::Mismatch { accepted: false } => writeln!(
						f,
						"  ⚠ {}: REJECTED but should be accepted",
						outcome.label()
					)?,
					Verdict::Error(err) => writeln!(f, "  ⚠ {}: {}", outcome.label(), err)?,
					_ => {}
				}
			}
		}
		Ok(())
	}
}

fn write_section<'a, S, V, F>(f: &mut fmt::Formatter, outcomes: V, line: F) -> fmt::Result
where
	S: 'a,
	V: Iterator<Item = &'a Outcome<S>>,
	F: Fn(&Outcome<S>) -> String,
{
	let mut empty = true;
	for outcome in outcomes {
		empty = false;
		writeln!(f, "{}", line(outcome))?;
	}
	if empty {
		writeln!(f, "  (none)")?;
	}
	Ok(())
}

/// Feeds strings to a character automaton and classifies the results.
///
/// An optional oracle states whether a string should be accepted, an optional annotation adds
/// context to every reported string.
pub struct Harness<'a, S>
where
	S: Eq + Hash,
{
	automaton: &'a Automaton<S, char>,
	oracle: Option<Box<dyn Fn(&str) -> bool + 'a>>,
	note: Option<Box<dyn Fn(&str) -> String + 'a>>,
	sentinel: String,
}

impl<'a, S> Harness<'a, S>
where
	S: Clone + Eq + Hash + fmt::Debug,
{
	/// Default input ending an interactive session.
	pub const SENTINEL: &'static str = "quit";

	pub fn new(automaton: &'a Automaton<S, char>) -> Self {
		Self {
			automaton,
			oracle: None,
			note: None,
			sentinel: Self::SENTINEL.to_string(),
		}
	}

	/// Sets the expected membership of every string.
	pub fn with_oracle<F>(mut self, oracle: F) -> Self
	where
		F: Fn(&str) -> bool + 'a,
	{
		self.oracle = Some(Box::new(oracle));
		self
	}

	/// Sets the annotation added to every reported string.
	pub fn with_note<F>(mut self, note: F) -> Self
	where
		F: Fn(&str) -> String + 'a,
	{
		self.note = Some(Box::new(note));
		self
	}

	/// Sets the input ending an interactive session, compared case-insensitively over all of Unicode.
	pub fn with_sentinel(mut self, sentinel: &str) -> Self {
		self.sentinel = sentinel.to_lowercase();
		self
	}

	/// Evaluates a single string.
	pub fn evaluate(&self, input: &str) -> Outcome<S> {
		let verdict = match self.automaton.accepts_str(input) {
			Ok(accepted) => match &self.oracle {
				Some(oracle) if oracle(input) != accepted => Verdict::Mismatch { accepted },
				_ if accepted => Verdict::Accepted,
				_ => Verdict::Rejected,
			},
			Err(err) => Verdict::Error(err),
		};
		Outcome {
			input: input.to_string(),
			note: self.note.as_ref().map(|note| note(input)),
			verdict,
		}
	}

	/// Evaluates a batch of strings.
	pub fn check<'s, V>(&self, inputs: V) -> Report<S>
	where
		V: IntoIterator<Item = &'s str>,
	{
		Report {
			outcomes: inputs
				.into_iter()
				.map(|input| self.evaluate(input))
				.collect(),
		}
	}

	/// Reads one string per line and writes a verdict for each, until the sentinel or the end of
	/// the input. Returns the number of strings evaluated.
	pub fn session<R, W>(&self, reader: R, mut writer: W) -> io::Result<usize>
	where
		R: BufRead,
		W: Write,
	{
		let mut count = 0;
		let mut lines = reader.lines();
		loop {
			write!(writer, "> ")?;
			writer.flush()?;
			let line = match lines.next() {
				Some(line) => line?,
				None => break,
			};
			let input = line.trim();
			if input.to_lowercase() == self.sentinel {
				break;
			}

			let outcome = self.evaluate(input);
			let status = match &outcome.verdict {
				Verdict::Accepted => "✓ ACCEPTED".to_string(),
				Verdict::Rejected => "✗ REJECTED".to_string(),
				Verdict::Mismatch { accepted: true } => "⚠ ACCEPTED, expected rejection".to_string(),
				Verdict::Mismatch { accepted: false } => "⚠ REJECTED, expected acceptance".to_string(),
				Verdict::Error(err) => format!("error: {}", err),
			};
			writeln!(writer, "{}: {}", outcome.label(), status)?;
			count += 1;
		}
		debug!("session ended after {} strings", count);
		Ok(count)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog;
	use std::io::Cursor;

	fn ab_count(input: &str) -> String {
		format!("({} 'ab')", count_non_overlapping(input, "ab"))
	}

	#[test]
	fn counting() {
		assert_eq!(2, count_non_overlapping("aaaa", "aa"));
		assert_eq!(3, count_non_overlapping("ababab", "ab"));
		assert_eq!(2, count_non_overlapping("aaabbbaaab", "ab"));
		assert_eq!(0, count_non_overlapping("", "ab"));
		assert_eq!(0, count_non_overlapping("abc", ""));
	}

	#[test]
	fn oracle_agrees() {
		let automaton = catalog::at_least_three_ab().unwrap();
		let harness = Harness::new(&automaton)
			.with_oracle(|input| count_non_overlapping(input, "ab") >= 3)
			.with_note(ab_count);
		let report = harness.check(vec![
			"",
			"ab",
			"abab",
			"ababab",
			"abababab",
			"bababab",
			"aaa",
			"abcabc",
			"baabababab",
			"aababab",
			"abababb",
		]);

		let accepted: Vec<_> = report.accepted().map(|o| o.input.as_str()).collect();
		assert_eq!(
			vec![
				"ababab",
				"abababab",
				"bababab",
				"baabababab",
				"aababab",
				"abababb"
			],
			accepted
		);
		assert_eq!(4, report.rejected().count());

		let errors: Vec<_> = report.errors().collect();
		assert_eq!(1, errors.len());
		assert_eq!(
			Verdict::Error(AutomatonError::UnknownSymbol('c')),
			errors[0].verdict
		);
		assert_eq!(Some("(2 'ab')".to_string()), errors[0].note);
	}

	#[test]
	fn oracle_disagrees() {
		let automaton = catalog::starts_with_aba().unwrap();
		let harness = Harness::new(&automaton).with_oracle(|input| input.ends_with("aba"));
		let report = harness.check(vec!["aba", "abab", "baba"]);
		assert_eq!(
			vec![
				Verdict::Accepted,
				Verdict::Mismatch { accepted: true },
				Verdict::Mismatch { accepted: false },
			],
			report
				.outcomes
				.iter()
				.map(|o| o.verdict.clone())
				.collect::<Vec<_>>()
		);
	}

	#[test]
	fn report_display() {
		let automaton = catalog::a_star_b_star().unwrap();
		let report = Harness::new(&automaton).check(vec!["ab", "ba", "abc"]);
		assert_eq!(
			"ACCEPTED:\n  ✓ 'ab'\n\nREJECTED:\n  ✗ 'ba'\n\nERRORS:\n  ⚠ 'abc': unknown symbol 'c'\n",
			report.to_string()
		);

		let report = Harness::new(&automaton).check(vec!["ba"]);
		assert_eq!(
			"ACCEPTED:\n  (none)\n\nREJECTED:\n  ✗ 'ba'\n",
			report.to_string()
		);
	}

	#[test]
	fn session() {
		let automaton = catalog::exactly_four().unwrap();
		let input = Cursor::new("abab\n  ab  \nabc\n  QUIT \nbbbb\n");
		let mut output = Vec::new();
		let count = Harness::new(&automaton).session(input, &mut output).unwrap();
		assert_eq!(3, count);
		assert_eq!(
			"> 'abab': ✓ ACCEPTED\n> 'ab': ✗ REJECTED\n> 'abc': error: unknown symbol 'c'\n> ",
			String::from_utf8(output).unwrap()
		);
	}

	#[test]
	fn session_unicode_sentinel() {
		let automaton = catalog::exactly_four().unwrap();
		let input = Cursor::new("aaaa
ÉXIT
bbbb
");
		let mut output = Vec::new();
		let count = Harness::new(&automaton)
			.with_sentinel("éxit")
			.session(input, &mut output)
			.unwrap();
		assert_eq!(1, count);
		assert_eq!(
			"> 'aaaa': ✓ ACCEPTED
> ",
			String::from_utf8(output).unwrap()
		);
	}

	#[test]
	fn session_until_eof() {
		let automaton = catalog::contains_ab_or_ba().unwrap();
		let input = Cursor::new("ab\nstop\n");
		let mut output = Vec::new();
		let count = Harness::new(&automaton)
			.with_sentinel("exit")
			.session(input, &mut output)
			.unwrap();
		assert_eq!(2, count);
		assert!(String::from_utf8(output)
			.unwrap()
			.contains("'stop': error: unknown symbol 's'"));
	}
}
