use super::{AutomatonError, Label, TransitionFault};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
	collections::{HashMap, HashSet},
	fmt,
	hash::Hash,
};

/// Set of states an automaton can be in at once.
pub type StateSet<S> = HashSet<S>;

/// Declared kind of an automaton, enforced once during construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
	Deterministic,
	Nondeterministic,
}

impl Default for Kind {
	fn default() -> Self {
		Self::Nondeterministic
	}
}

#[derive(Debug, Clone)]
struct State<S, I>
where
	S: Eq + Hash,
	I: Eq + Hash,
{
	accepts: bool,
	transitions: HashMap<Label<I>, StateSet<S>>,
}

impl<S, I> State<S, I>
where
	S: Eq + Hash,
	I: Eq + Hash,
{
	pub fn new(accepts: bool, transitions: HashMap<Label<I>, StateSet<S>>) -> Self {
		Self {
			accepts,
			transitions,
		}
	}
}

/// A finite automaton, deterministic or not, with optional epsilon transitions.
///
/// Immutable once constructed. All evaluation happens through `&self`, so a single instance can be
/// shared between threads.
#[derive(Debug, Clone)]
pub struct Automaton<S, I>
where
	S: Eq + Hash,
	I: Eq + Hash,
{
	kind: Kind,
	start: S,
	alphabet: HashSet<I>,
	states: HashMap<S, State<S, I>>,
}

impl<S, I> Automaton<S, I>
where
	S: Clone + Eq + Hash + fmt::Debug,
	I: Clone + Eq + Hash + fmt::Debug,
{
	/// Creates a new automaton from its states, alphabet, transitions, start state and accepting states.
	///
	/// Transitions are `(source, label, destinations)` triples. Repeated pairs of source and label are
	/// merged. Triples without any destination are dropped before the determinism check and are not
	/// transitions at all, whatever their label.
	///
	/// Checks run in order and the first violation is returned:
	/// 1. `start` is declared, else `AutomatonError::UnknownState`.
	/// 2. every accepting state is declared, else `AutomatonError::UnknownState`.
	/// 3. every transition has a declared source, a label in the alphabet (or epsilon) and declared
	///    destinations, else `AutomatonError::InvalidTransition`.
	/// 4. for `Kind::Deterministic`, there is no epsilon transition and no pair with more than one
	///    destination, else `AutomatonError::Nondeterminism`.
	pub fn construct<V, A, T, D, F>(
		states: V,
		alphabet: A,
		transitions: T,
		start: S,
		accepting: F,
		kind: Kind,
	) -> Result<Self, AutomatonError<S, I>>
	where
		V: IntoIterator<Item = S>,
		A: IntoIterator<Item = I>,
		T: IntoIterator<Item = (S, Label<I>, D)>,
		D: IntoIterator<Item = S>,
		F: IntoIterator<Item = S>,
	{
		let mut states: HashMap<_, _> = states
			.into_iter()
			.map(|id| (id, State::new(false, HashMap::new())))
			.collect();
		let alphabet: HashSet<_> = alphabet.into_iter().collect();

		if !states.contains_key(&start) {
			return Err(AutomatonError::UnknownState(start));
		}
		for id in accepting {
			match states.get_mut(&id) {
				Some(state) => state.accepts = true,
				None => return Err(AutomatonError::UnknownState(id)),
			}
		}

		let transitions: Vec<(S, Label<I>, Vec<S>)> = transitions
			.into_iter()
			.map(|(prev, label, next)| (prev, label, next.into_iter().collect()))
			.collect();
		for (prev, label, next) in &transitions {
			Self::check_transition(&states, &alphabet, prev, label, next)?;
		}

		for (prev, label, next) in transitions {
			if next.is_empty() {
				continue;
			}
			if kind == Kind::Deterministic && label.is_epsilon() {
				return Err(AutomatonError::Nondeterminism { state: prev, label });
			}
			// sources were all checked above, the error is unreachable
			let State { transitions, .. } =
				states
					.get_mut(&prev)
					.ok_or_else(|| AutomatonError::InvalidTransition {
						state: prev.clone(),
						label: label.clone(),
						fault: TransitionFault::UnknownSource,
					})?;
			let targets = transitions.entry(label.clone()).or_default();
			targets.extend(next);
			if kind == Kind::Deterministic && targets.len() > 1 {
				return Err(AutomatonError::Nondeterminism { state: prev, label });
			}
		}

		debug!(
			"constructed {:?} automaton with {} states over {} symbols",
			kind,
			states.len(),
			alphabet.len()
		);
		Ok(Self {
			kind,
			start,
			alphabet,
			states,
		})
	}

	fn check_transition(
		states: &HashMap<S, State<S, I>>,
		alphabet: &HashSet<I>,
		prev: &S,
		label: &Label<I>,
		next: &[S],
	) -> Result<(), AutomatonError<S, I>> {
		let fault = if !states.contains_key(prev) {
			Some(TransitionFault::UnknownSource)
		} else if matches!(label, Label::Symbol(symbol) if !alphabet.contains(symbol)) {
			Some(TransitionFault::UnknownSymbol)
		} else {
			next.iter()
				.find(|id| !states.contains_key(*id))
				.map(|id| TransitionFault::UnknownTarget(id.clone()))
		};
		match fault {
			Some(fault) => Err(AutomatonError::InvalidTransition {
				state: prev.clone(),
				label: label.clone(),
				fault,
			}),
			None => Ok(()),
		}
	}
}

impl<S, I> Automaton<S, I>
where
	S: Eq + Hash,
	I: Eq + Hash,
{
	/// Returns the declared kind.
	pub fn kind(&self) -> Kind {
		self.kind
	}

	/// Checks whether the automaton was declared deterministic.
	pub fn is_deterministic(&self) -> bool {
		self.kind == Kind::Deterministic
	}

	/// Returns the start state.
	pub fn start(&self) -> &S {
		&self.start
	}

	/// Returns the input alphabet. Never contains the empty symbol.
	pub fn alphabet(&self) -> &HashSet<I> {
		&self.alphabet
	}

	/// Checks whether the alphabet includes a symbol.
	pub fn has_symbol(&self, symbol: &I) -> bool {
		self.alphabet.contains(symbol)
	}

	/// Checks whether the states of the automaton include a state.
	pub fn has_state(&self, id: &S) -> bool {
		self.states.contains_key(id)
	}

	/// Iterates over all states in arbitrary order.
	pub fn states(&self) -> impl Iterator<Item = &S> {
		self.states.keys()
	}

	/// Iterates over the accepting states in arbitrary order.
	pub fn accepting(&self) -> impl Iterator<Item = &S> {
		self.states
			.iter()
			.filter(|(_, state)| state.accepts)
			.map(|(id, _)| id)
	}

	/// Checks whether a state is accepting. Undeclared states are never accepting.
	pub fn is_accepting(&self, id: &S) -> bool {
		self.states.get(id).map_or(false, |state| state.accepts)
	}

	/// Returns the destinations of a state on a label, or `None` if there is no such transition.
	pub fn destinations(&self, id: &S, label: &Label<I>) -> Option<&StateSet<S>> {
		self.states
			.get(id)
			.and_then(|state| state.transitions.get(label))
	}

	/// Iterates over all transitions as `(source, label, destinations)`.
	pub fn transitions(&self) -> impl Iterator<Item = (&S, &Label<I>, &StateSet<S>)> {
		self.states.iter().flat_map(|(id, state)| {
			state
				.transitions
				.iter()
				.map(move |(label, next)| (id, label, next))
		})
	}

	/// Checks whether any transition is labeled with the empty symbol.
	pub fn has_epsilon(&self) -> bool {
		self.states
			.values()
			.any(|state| state.transitions.contains_key(&Label::Epsilon))
	}
}
