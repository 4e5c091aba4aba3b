/*!
# Tartan: Flags.
*/

use super::Shared;



#[derive(Debug, Clone, Default)]
/// # Flag.
///
/// A boolean switch: `true` if any of its keys were passed, `false` if not.
///
/// ## Examples
///
/// ```
/// use tartan::{Flag, Parser};
///
/// let verbose = Flag::new().with_keys(["-v", "--verbose"]);
///
/// let mut parser = Parser::new();
/// parser.attach(verbose.clone()).unwrap();
/// parser.parse(["--verbose"]).unwrap();
///
/// assert!(verbose.get());
/// ```
pub struct Flag(Shared<bool>);

impl Flag {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Keys.
	///
	/// Set the key(s) used to raise the flag, replacing any previous ones.
	pub fn with_keys<I, S>(self, keys: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.0.set_keys(keys);
		self
	}

	#[must_use]
	/// # With Help.
	pub fn with_help(self, help: &str) -> Self {
		self.0.set_help(help);
		self
	}

	#[must_use]
	/// # Keys.
	pub fn keys(&self) -> Vec<String> { self.0.keys() }

	#[must_use]
	/// # Help.
	pub fn help(&self) -> String { self.0.help() }

	#[must_use]
	/// # Value.
	pub fn get(&self) -> bool { *self.0.value() }

	/// # Has Key?
	pub(crate) fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }

	/// # Raise.
	pub(crate) fn raise(&self) { *self.0.value_mut() = true; }
}



#[derive(Debug, Clone, Default)]
/// # Multi Flag.
///
/// A switch that counts how many times it was passed, e.g. `-vvv`.
///
/// ## Examples
///
/// ```
/// use tartan::{MultiFlag, Parser};
///
/// let mut parser = Parser::new();
/// let verbosity = parser.multi_flag(&["-v"]).unwrap();
/// parser.parse(["-vv", "-v"]).unwrap();
///
/// assert_eq!(verbosity.count(), 3);
/// ```
pub struct MultiFlag(Shared<usize>);

impl MultiFlag {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Keys.
	///
	/// Set the key(s) used to raise the flag, replacing any previous ones.
	pub fn with_keys<I, S>(self, keys: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.0.set_keys(keys);
		self
	}

	#[must_use]
	/// # With Help.
	pub fn with_help(self, help: &str) -> Self {
		self.0.set_help(help);
		self
	}

	#[must_use]
	/// # Keys.
	pub fn keys(&self) -> Vec<String> { self.0.keys() }

	#[must_use]
	/// # Help.
	pub fn help(&self) -> String { self.0.help() }

	#[must_use]
	/// # Count.
	///
	/// Return the number of times the flag was raised.
	pub fn count(&self) -> usize { *self.0.value() }

	#[must_use]
	/// # Any?
	pub fn get(&self) -> bool { 0 != self.count() }

	/// # Has Key?
	pub(crate) fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }

	/// # Raise.
	pub(crate) fn raise(&self) {
		let mut v = self.0.value_mut();
		*v = v.saturating_add(1);
	}
}
