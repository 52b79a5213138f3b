use super::Label;
use std::fmt;
use thiserror::Error;

/// Enum representing an error raised while constructing or running an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError<S, I> {
	/// The start state or an accepting state is not declared.
	#[error("unknown state {0:?}")]
	UnknownState(S),

	/// A transition references an undeclared state or a symbol outside the alphabet.
	#[error("invalid transition from {state:?} on {label:?}: {fault}")]
	InvalidTransition {
		state: S,
		label: Label<I>,
		fault: TransitionFault<S>,
	},

	/// A deterministic automaton has an epsilon transition or more than one destination for a symbol.
	#[error("state {state:?} is nondeterministic on {label:?}")]
	Nondeterminism { state: S, label: Label<I> },

	/// An input contains a symbol outside the alphabet.
	#[error("unknown symbol {0:?}")]
	UnknownSymbol(I),
}

/// Reason a transition was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionFault<S> {
	UnknownSource,
	UnknownSymbol,
	UnknownTarget(S),
}

impl<S> fmt::Display for TransitionFault<S>
where
	S: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::UnknownSource => f.write_str("source state is not declared"),
			Self::UnknownSymbol => f.write_str("symbol is not in the alphabet"),
			Self::UnknownTarget(state) => write!(f, "destination {:?} is not declared", state),
		}
	}
}
