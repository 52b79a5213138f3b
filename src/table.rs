use super::{Automaton, Label};
use serde::Serialize;
use std::{fmt, hash::Hash};

const WIDTH: usize = 15;

/// Content of a single table cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell<S> {
	/// No transition for this pair of state and label.
	Empty,
	/// Sorted, non-empty destinations.
	Targets(Vec<S>),
}

/// A row of the transition table, one per state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row<S> {
	pub state: S,
	pub is_start: bool,
	pub is_accepting: bool,
	pub cells: Vec<Cell<S>>,
}

/// Structured view of the transition relation of an automaton.
///
/// Columns are the sorted alphabet, followed by the empty symbol if any transition uses it.
/// Rows are sorted by state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransitionTable<S, I> {
	pub deterministic: bool,
	pub columns: Vec<Label<I>>,
	pub rows: Vec<Row<S>>,
}

impl<S, I> Automaton<S, I>
where
	S: Clone + Ord + Hash,
	I: Clone + Ord + Hash,
{
	/// Renders the transition table of the automaton.
	pub fn table(&self) -> TransitionTable<S, I> {
		let mut columns: Vec<_> = self.alphabet().iter().cloned().map(Label::Symbol).collect();
		columns.sort();
		if self.has_epsilon() {
			columns.push(Label::Epsilon);
		}

		let mut states: Vec<_> = self.states().collect();
		states.sort();
		let rows = states
			.into_iter()
			.map(|id| Row {
				state: id.clone(),
				is_start: id == self.start(),
				is_accepting: self.is_accepting(id),
				cells: columns
					.iter()
					.map(|label| match self.destinations(id, label) {
						Some(next) => {
							let mut next: Vec<_> = next.iter().cloned().collect();
							next.sort();
							Cell::Targets(next)
						}
						None => Cell::Empty,
					})
					.collect(),
			})
			.collect();

		TransitionTable {
			deterministic: self.is_deterministic(),
			columns,
			rows,
		}
	}
}

impl<S> Cell<S>
where
	S: fmt::Display,
{
	fn render(&self, braces: bool) -> String {
		match self {
			Self::Empty => "-".to_string(),
			Self::Targets(next) => {
				let names: Vec<_> = next.iter().map(ToString::to_string).collect();
				if braces {
					format!("{{{}}}", names.join(","))
				} else {
					names.join(",")
				}
			}
		}
	}
}

impl<S, I> fmt::Display for TransitionTable<S, I>
where
	S: fmt::Display,
	I: fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut header = format!("{:<width$}", "State", width = WIDTH);
		for label in &self.columns {
			header.push_str(&format!("{:<width$}", label.to_string(), width = WIDTH));
		}
		writeln!(f, "{}", header)?;
		writeln!(f, "{}", "-".repeat(header.chars().count()))?;

		for row in &self.rows {
			write!(f, "{:<width$}", row.state.to_string(), width = WIDTH)?;
			for cell in &row.cells {
				write!(
					f,
					"{:<width$}",
					cell.render(!self.deterministic),
					width = WIDTH
				)?;
			}
			if row.is_start {
				f.write_str("→")?;
			}
			if row.is_accepting {
				f.write_str("*")?;
			}
			writeln!(f)?;
		}

		write!(f, "\n→ start state, * accepting state")
	}
}
