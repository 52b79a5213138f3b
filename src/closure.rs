use super::{Automaton, Label, StateSet};
use std::hash::Hash;

impl<S, I> Automaton<S, I>
where
	S: Clone + Eq + Hash,
	I: Eq + Hash,
{
	/// Computes the epsilon closure of a set of states: the states themselves and every state
	/// reachable from them through epsilon transitions alone.
	pub fn epsilon_closure<'a, V>(&self, states: V) -> StateSet<S>
	where
		V: IntoIterator<Item = &'a S>,
		S: 'a,
	{
		let mut closure = StateSet::new();
		let mut pending = Vec::new();
		for id in states {
			if closure.insert(id.clone()) {
				pending.push(id.clone());
			}
		}

		// each state enters the worklist at most once
		while let Some(id) = pending.pop() {
			if let Some(next) = self.destinations(&id, &Label::Epsilon) {
				for target in next {
					if closure.insert(target.clone()) {
						pending.push(target.clone());
					}
				}
			}
		}
		closure
	}

	/// Computes the union of the destinations of every state in `states` on `symbol`.
	///
	/// Epsilon transitions are not followed, use `epsilon_closure` on the result for that.
	pub fn step<'a, V>(&self, states: V, symbol: &I) -> StateSet<S>
	where
		V: IntoIterator<Item = &'a S>,
		S: 'a,
		I: Clone,
	{
		let label = Label::Symbol(symbol.clone());
		let mut next = StateSet::new();
		for id in states {
			if let Some(targets) = self.destinations(id, &label) {
				next.extend(targets.iter().cloned());
			}
		}
		next
	}
}
