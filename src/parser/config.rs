/*!
# Tartan: Parser Configuration.
*/



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parser Configuration.
///
/// This controls which token syntaxes the [`Parser`](crate::Parser)
/// recognizes, and what happens to surplus arguments.
///
/// The defaults are:
/// * `key=value` syntax is enabled, with `=` as the separator;
/// * Packed short keys (`-abc`) are enabled, with `-` as the prefix;
/// * Surplus arguments are errors;
/// * There is no end-of-options terminator;
///
/// ## Examples
///
/// ```
/// use tartan::{Config, Parser};
///
/// let parser = Parser::new().with_config(
///     Config::default()
///         .with_key_value_separator(":")
///         .with_packing(false)
///         .with_terminator(Some("--")),
/// );
/// ```
pub struct Config {
	/// # Allow `key=value`?
	allow_key_value_syntax: bool,

	/// # Key/Value Separator.
	key_value_separator: String,

	/// # Allow Packing?
	allow_argument_packing: bool,

	/// # Pack Prefix.
	pack_prefix: String,

	/// # Collect Surplus Arguments?
	collect_leftovers: bool,

	/// # End-of-Options Terminator.
	terminator: Option<String>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			allow_key_value_syntax: true,
			key_value_separator: "=".to_owned(),
			allow_argument_packing: true,
			pack_prefix: "-".to_owned(),
			collect_leftovers: false,
			terminator: None,
		}
	}
}

impl Config {
	#[must_use]
	/// # With Key/Value Syntax.
	///
	/// Enable or disable `key=value` tokens.
	pub fn with_key_value_syntax(mut self, enabled: bool) -> Self {
		self.allow_key_value_syntax = enabled;
		self
	}

	#[must_use]
	/// # With Key/Value Separator.
	///
	/// An empty separator disables `key=value` tokens.
	pub fn with_key_value_separator(mut self, sep: &str) -> Self {
		sep.clone_into(&mut self.key_value_separator);
		self
	}

	#[must_use]
	/// # With Packing.
	///
	/// Enable or disable packed short keys like `-abc`.
	pub fn with_packing(mut self, enabled: bool) -> Self {
		self.allow_argument_packing = enabled;
		self
	}

	#[must_use]
	/// # With Pack Prefix.
	///
	/// An empty prefix disables packing.
	pub fn with_pack_prefix(mut self, prefix: &str) -> Self {
		prefix.clone_into(&mut self.pack_prefix);
		self
	}

	#[must_use]
	/// # With Leftovers.
	///
	/// When enabled, arguments that match no key and find no open positional
	/// are collected instead of raising
	/// [`TartanError::UnexpectedArgument`](crate::TartanError::UnexpectedArgument).
	/// Retrieve them afterward with [`Parser::leftovers`](crate::Parser::leftovers).
	pub fn with_leftovers(mut self, enabled: bool) -> Self {
		self.collect_leftovers = enabled;
		self
	}

	#[must_use]
	/// # With Terminator.
	///
	/// Everything after the first occurrence of the terminator (typically
	/// `--`) is treated as a positional value, even if it looks like a key.
	/// The terminator itself is discarded.
	pub fn with_terminator(mut self, terminator: Option<&str>) -> Self {
		self.terminator = terminator.filter(|t| ! t.is_empty()).map(str::to_owned);
		self
	}
}

impl Config {
	#[must_use]
	/// # Key/Value Separator (If Enabled).
	pub fn key_value_separator(&self) -> Option<&str> {
		if self.allow_key_value_syntax && ! self.key_value_separator.is_empty() {
			Some(self.key_value_separator.as_str())
		}
		else { None }
	}

	#[must_use]
	/// # Pack Prefix (If Enabled).
	pub fn pack_prefix(&self) -> Option<&str> {
		if self.allow_argument_packing && ! self.pack_prefix.is_empty() {
			Some(self.pack_prefix.as_str())
		}
		else { None }
	}

	#[must_use]
	/// # Collect Leftovers?
	pub const fn collect_leftovers(&self) -> bool { self.collect_leftovers }

	#[must_use]
	/// # Terminator.
	pub fn terminator(&self) -> Option<&str> { self.terminator.as_deref() }
}
