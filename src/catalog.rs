//! Ready-made automata over small alphabets, mostly useful for demos and tests.

use super::{Automaton, LoadError};

/// Automaton over string states and character symbols, as loaded from the catalog.
pub type CharAutomaton = Automaton<String, char>;

type Loaded = Result<CharAutomaton, LoadError<String, char>>;

/// Named catalog entry.
#[derive(Debug, Clone)]
pub struct Entry {
	pub name: &'static str,
	pub automaton: CharAutomaton,
}

/// DFA accepting strings of exactly four symbols over `{a, b}`.
pub fn exactly_four() -> Loaded {
	Automaton::from_yaml(include_str!("catalog/exactly_four.yaml"))
}

/// DFA accepting strings over `{a, b}` starting with `aba`.
pub fn starts_with_aba() -> Loaded {
	Automaton::from_yaml(include_str!("catalog/starts_with_aba.yaml"))
}

/// NFA accepting strings over `{a, b}` with at least three occurrences of `ab`.
pub fn at_least_three_ab() -> Loaded {
	Automaton::from_yaml(include_str!("catalog/at_least_three_ab.yaml"))
}

/// NFA with epsilon transitions accepting strings over `{a, b, c}` with at least three of one letter.
pub fn three_of_a_kind() -> Loaded {
	Automaton::from_yaml(include_str!("catalog/three_of_a_kind.yaml"))
}

/// NFA with epsilon transitions accepting `a*b*`.
pub fn a_star_b_star() -> Loaded {
	Automaton::from_yaml(include_str!("catalog/a_star_b_star.yaml"))
}

/// NFA with epsilon transitions accepting strings over `{a, b}` containing `ab` or `ba`.
pub fn contains_ab_or_ba() -> Loaded {
	Automaton::from_yaml(include_str!("catalog/contains_ab_or_ba.yaml"))
}

/// Loads every catalog automaton.
pub fn all() -> Result<Vec<Entry>, LoadError<String, char>> {
	let loaders: [(&'static str, fn() -> Loaded); 6] = [
		("DFA - exactly 4 symbols", exactly_four),
		("DFA - starts with 'aba'", starts_with_aba),
		("NFA - at least 3 occurrences of 'ab'", at_least_three_ab),
		("NFA-ε - at least 3 a's, b's or c's", three_of_a_kind),
		("NFA-ε - a's before b's", a_star_b_star),
		("NFA-ε - contains 'ab' or 'ba'", contains_ab_or_ba),
	];
	loaders
		.iter()
		.map(|&(name, load)| load().map(|automaton| Entry { name, automaton }))
		.collect()
}
