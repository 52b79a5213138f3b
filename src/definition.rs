use super::{Automaton, AutomatonError, Kind, Label};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{convert::TryFrom, fmt, hash::Hash};
use thiserror::Error;

/// A transition entry of a definition. A missing `on` denotes an epsilon transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionDef<S, I> {
	pub from: S,
	#[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
	pub on: Option<I>,
	#[serde(default = "Vec::new")]
	pub to: Vec<S>,
}

/// Declarative description of an automaton, validated when converted into an `Automaton`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Definition<S, I> {
	#[serde(default)]
	pub kind: Kind,
	pub states: Vec<S>,
	pub alphabet: Vec<I>,
	pub start: S,
	#[serde(default = "Vec::new")]
	pub accepting: Vec<S>,
	#[serde(default = "Vec::new")]
	pub transitions: Vec<TransitionDef<S, I>>,
}

/// Error while loading a definition.
#[derive(Debug, Error)]
pub enum LoadError<S, I> {
	#[error("malformed definition: {0}")]
	Yaml(#[from] serde_yaml::Error),

	#[error("invalid definition: {0}")]
	Automaton(#[from] AutomatonError<S, I>),
}

impl<S, I> Definition<S, I>
where
	S: DeserializeOwned,
	I: DeserializeOwned,
{
	/// Parses a definition from YAML.
	pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
		serde_yaml::from_str(yaml)
	}
}

impl<S, I> TryFrom<Definition<S, I>> for Automaton<S, I>
where
	S: Clone + Eq + Hash + fmt::Debug,
	I: Clone + Eq + Hash + fmt::Debug,
{
	type Error = AutomatonError<S, I>;

	fn try_from(definition: Definition<S, I>) -> Result<Self, Self::Error> {
		Automaton::construct(
			definition.states,
			definition.alphabet,
			definition
				.transitions
				.into_iter()
				.map(|TransitionDef { from, on, to }| (from, Label::from(on), to)),
			definition.start,
			definition.accepting,
			definition.kind,
		)
	}
}

impl<S, I> Automaton<S, I>
where
	S: Clone + Eq + Hash + fmt::Debug + DeserializeOwned,
	I: Clone + Eq + Hash + fmt::Debug + DeserializeOwned,
{
	/// Parses and validates an automaton described in YAML.
	pub fn from_yaml(yaml: &str) -> Result<Self, LoadError<S, I>> {
		let definition = Definition::from_yaml(yaml)?;
		Ok(Self::try_from(definition)?)
	}
}
