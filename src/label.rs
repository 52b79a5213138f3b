use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of a transition: either an input symbol or the empty symbol.
///
/// `Epsilon` orders after every symbol, so a sorted list of labels keeps the epsilon column last.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Label<I> {
	Symbol(I),
	Epsilon,
}

impl<I> Label<I> {
	/// Checks whether this is the empty symbol.
	pub fn is_epsilon(&self) -> bool {
		matches!(self, Self::Epsilon)
	}

	/// Returns the symbol, if any.
	pub fn symbol(&self) -> Option<&I> {
		match self {
			Self::Symbol(symbol) => Some(symbol),
			Self::Epsilon => None,
		}
	}
}

impl<I> From<Option<I>> for Label<I> {
	fn from(symbol: Option<I>) -> Self {
		match symbol {
			Some(symbol) => Self::Symbol(symbol),
			None => Self::Epsilon,
		}
	}
}

impl<I> fmt::Display for Label<I>
where
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Symbol(symbol) => write!(f, "{}", symbol),
			Self::Epsilon => f.write_str("ε"),
		}
	}
}
