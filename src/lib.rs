//! Finite automata (DFA, NFA and NFA with epsilon transitions) over a single representation.
//!
//! An [`Automaton`] is built and validated once, then evaluated through shared references:
//!
//! ```
//! use finite_engine::{Automaton, Kind, Label};
//!
//! let automaton = Automaton::construct(
//! 	vec!["q0", "q1"],
//! 	vec!['a', 'b'],
//! 	vec![
//! 		("q0", Label::Symbol('a'), vec!["q0"]),
//! 		("q0", Label::Epsilon, vec!["q1"]),
//! 		("q1", Label::Symbol('b'), vec!["q1"]),
//! 	],
//! 	"q0",
//! 	vec!["q0", "q1"],
//! 	Kind::Nondeterministic,
//! )
//! .unwrap();
//!
//! assert_eq!(Ok(true), automaton.accepts_str("aabb"));
//! assert_eq!(Ok(false), automaton.accepts_str("ba"));
//! ```

mod automaton;
mod closure;
mod definition;
mod error;
mod label;
mod run;
mod table;

pub mod catalog;
pub mod harness;

pub use automaton::{Automaton, Kind, StateSet};
pub use definition::{Definition, LoadError, TransitionDef};
pub use error::{AutomatonError, TransitionFault};
pub use label::Label;
pub use table::{Cell, Row, TransitionTable};
