use super::{Automaton, AutomatonError, StateSet};
use log::{debug, trace};
use std::{fmt, hash::Hash};

impl<S, I> Automaton<S, I>
where
	S: Clone + Eq + Hash + fmt::Debug,
	I: Clone + Eq + Hash + fmt::Debug,
{
	/// Runs the automaton on a sequence of inputs and checks whether it ends in an accepting state.
	///
	/// The whole input is checked against the alphabet first, so an unknown symbol is reported even
	/// when the run would have died before reaching it.
	pub fn accepts<'a, V>(&self, inputs: V) -> Result<bool, AutomatonError<S, I>>
	where
		V: IntoIterator<Item = &'a I>,
		I: 'a,
	{
		let inputs = self.checked(inputs)?;
		let mut current = self.epsilon_closure(Some(self.start()));
		for symbol in inputs {
			if current.is_empty() {
				break;
			}
			current = self.epsilon_closure(&self.step(&current, symbol));
			trace!("{:?} -> {:?}", symbol, current);
		}
		let result = current.iter().any(|id| self.is_accepting(id));
		debug!("run ended in {:?}, accepted: {}", current, result);
		Ok(result)
	}

	/// Runs the automaton on a sequence of inputs and returns every state set it passes through.
	///
	/// The first entry is the closure of the start state, followed by one entry per consumed symbol.
	pub fn trace<'a, V>(&self, inputs: V) -> Result<Vec<StateSet<S>>, AutomatonError<S, I>>
	where
		V: IntoIterator<Item = &'a I>,
		I: 'a,
	{
		let inputs = self.checked(inputs)?;
		let mut sets = Vec::with_capacity(inputs.len() + 1);
		let mut current = self.epsilon_closure(Some(self.start()));
		for symbol in inputs {
			let next = self.epsilon_closure(&self.step(&current, symbol));
			sets.push(current);
			current = next;
		}
		sets.push(current);
		Ok(sets)
	}

	fn checked<'a, V>(&self, inputs: V) -> Result<Vec<&'a I>, AutomatonError<S, I>>
	where
		V: IntoIterator<Item = &'a I>,
		I: 'a,
	{
		inputs
			.into_iter()
			.map(|symbol| {
				if self.has_symbol(symbol) {
					Ok(symbol)
				} else {
					Err(AutomatonError::UnknownSymbol(symbol.clone()))
				}
			})
			.collect()
	}
}

impl<S> Automaton<S, char>
where
	S: Clone + Eq + Hash + fmt::Debug,
{
	/// Runs the automaton on the characters of a string.
	pub fn accepts_str(&self, input: &str) -> Result<bool, AutomatonError<S, char>> {
		self.accepts(&input.chars().collect::<Vec<_>>())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{catalog, harness::count_non_overlapping, Kind, Label};
	use maplit::hashset;

	/// All strings over `alphabet` up to length `max`.
	fn words(alphabet: &[char], max: usize) -> Vec<String> {
		let mut words = vec![String::new()];
		let mut last = vec![String::new()];
		for _ in 0..max {
			last = last
				.iter()
				.flat_map(|word| {
					alphabet.iter().map(move |symbol| {
						let mut word = word.clone();
						word.push(*symbol);
						word
					})
				})
				.collect();
			words.extend(last.iter().cloned());
		}
		words
	}

	#[test]
	fn exactly_four() {
		let dfa = catalog::exactly_four().unwrap();
		assert_eq!(Ok(false), dfa.accepts_str(""));
		assert_eq!(Ok(false), dfa.accepts_str("aba"));
		assert_eq!(Ok(true), dfa.accepts_str("abab"));
		assert_eq!(Ok(true), dfa.accepts_str("baab"));
		assert_eq!(Ok(false), dfa.accepts_str("ababa"));
		assert_eq!(Ok(false), dfa.accepts_str("aaaaaa"));
		assert_eq!(
			Err(AutomatonError::UnknownSymbol('c')),
			dfa.accepts_str("abc")
		);
	}

	#[test]
	fn a_star_b_star() {
		let nfa = catalog::a_star_b_star().unwrap();
		assert_eq!(Ok(true), nfa.accepts_str("aabb"));
		assert_eq!(Ok(true), nfa.accepts_str(""));
		assert_eq!(Ok(true), nfa.accepts_str("bbb"));
		assert_eq!(Ok(false), nfa.accepts_str("ba"));
		assert_eq!(Ok(false), nfa.accepts_str("aabba"));
	}

	#[test]
	fn matches_languages() {
		let languages: Vec<(&str, _, fn(&str) -> bool)> = vec![
			("exactly four", catalog::exactly_four(), |w: &str| {
				w.chars().count() == 4
			}),
			("starts with aba", catalog::starts_with_aba(), |w: &str| {
				w.starts_with("aba")
			}),
			("three ab", catalog::at_least_three_ab(), |w: &str| {
				count_non_overlapping(w, "ab") >= 3
			}),
			("a*b*", catalog::a_star_b_star(), |w: &str| !w.contains("ba")),
			("ab or ba", catalog::contains_ab_or_ba(), |w: &str| {
				w.contains("ab") || w.contains("ba")
			}),
		];
		for (name, automaton, language) in languages {
			let automaton = automaton.unwrap();
			for word in words(&['a', 'b'], 7) {
				assert_eq!(
					Ok(language(&word)),
					automaton.accepts_str(&word),
					"{} disagrees on {:?}",
					name,
					word
				);
			}
		}
	}

	#[test]
	fn three_of_a_kind() {
		let nfa = catalog::three_of_a_kind().unwrap();
		for word in words(&['a', 'b', 'c'], 6) {
			let expected = ['a', 'b', 'c']
				.iter()
				.any(|symbol| word.chars().filter(|c| c == symbol).count() >= 3);
			assert_eq!(Ok(expected), nfa.accepts_str(&word), "Disagrees on {:?}", word);
		}
	}

	#[test]
	fn unknown_symbol_regardless_of_kind() {
		// the trap state is reached before the unknown symbol
		for entry in catalog::all().unwrap() {
			let err = entry.automaton.accepts_str("bbbbbbbbx").unwrap_err();
			assert_eq!(AutomatonError::UnknownSymbol('x'), err, "{}", entry.name);
		}
	}

	#[test]
	fn empty_input() {
		for entry in catalog::all().unwrap() {
			let automaton = entry.automaton;
			let closure = automaton.epsilon_closure(Some(automaton.start()));
			let expected = closure.iter().any(|id| automaton.is_accepting(id));
			assert_eq!(Ok(expected), automaton.accepts_str(""), "{}", entry.name);
		}
	}

	#[test]
	fn determinism_preserved() {
		for entry in catalog::all().unwrap() {
			let automaton = entry.automaton;
			if !automaton.is_deterministic() {
				continue;
			}
			for word in words(&['a', 'b'], 6) {
				let sets = automaton
					.trace(&word.chars().collect::<Vec<_>>())
					.unwrap();
				assert_eq!(word.chars().count() + 1, sets.len());
				assert!(
					sets.iter().all(|set| set.len() <= 1),
					"{} left determinism on {:?}",
					entry.name,
					word
				);
			}
		}
	}

	#[test]
	fn trace() {
		let nfa = catalog::a_star_b_star().unwrap();
		let sets = nfa.trace(&['a', 'b', 'a']).unwrap();
		assert_eq!(
			vec![
				hashset!["q0".to_string(), "q1".to_string()],
				hashset!["q0".to_string(), "q1".to_string()],
				hashset!["q1".to_string()],
				hashset![],
			],
			sets
		);
		assert_eq!(
			Err(AutomatonError::UnknownSymbol('z')),
			nfa.trace(&['a', 'z'])
		);
	}

	#[test]
	fn dead_end() {
		// no transitions at all, the run dies on the first symbol
		let automaton = Automaton::<u8, u8>::construct(
			vec![0],
			vec![1, 2],
			Vec::<(u8, Label<u8>, Vec<u8>)>::new(),
			0,
			vec![0],
			Kind::Deterministic,
		)
		.unwrap();
		assert_eq!(Ok(true), automaton.accepts(&[]));
		assert_eq!(Ok(false), automaton.accepts(&[1, 2]));
		assert_eq!(
			Err(AutomatonError::UnknownSymbol(3)),
			automaton.accepts(&[1, 3])
		);
	}

	#[test]
	fn shared_between_threads() {
		use std::{sync::Arc, thread};

		let nfa = Arc::new(catalog::at_least_three_ab().unwrap());
		let handles: Vec<_> = vec!["ababab", "abab", "bababab", "aabbaabb"]
			.into_iter()
			.map(|word| {
				let nfa = Arc::clone(&nfa);
				thread::spawn(move || nfa.accepts_str(word))
			})
			.collect();
		let results: Vec<_> = handles
			.into_iter()
			.map(|handle| handle.join().unwrap())
			.collect();
		assert_eq!(vec![Ok(true), Ok(false), Ok(true), Ok(false)], results);
	}
}
