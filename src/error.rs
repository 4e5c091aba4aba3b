/*!
# Tartan: Errors.

Attaching a declaration can fail with a single [`TartanError`]; parsing
collects every structural problem it runs into and hands them back together
as [`ParseErrors`].
*/

use std::{
	ffi::OsString,
	fmt,
	ops::Deref,
};
use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{raw:?} is not a valid {type_name}: {reason}")]
/// # Conversion Error.
///
/// This is returned by adapters when a raw token cannot be converted into the
/// declaration's value type. The parser wraps it in
/// [`TartanError::Conversion`] along with the token's position.
pub struct ConversionError {
	/// # Raw Token.
	pub raw: String,

	/// # Target Type Name.
	pub type_name: &'static str,

	/// # Reason.
	///
	/// This is the stringified `FromStr` error.
	pub reason: String,
}

impl ConversionError {
	/// # New.
	pub(crate) fn new<T, E: fmt::Display>(raw: &str, err: &E) -> Self {
		Self {
			raw: raw.to_owned(),
			type_name: std::any::type_name::<T>(),
			reason: err.to_string(),
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Error!
pub enum TartanError {
	#[error("Keyed arguments need at least one non-empty key.")]
	/// # Missing Keys.
	///
	/// A flag or option was attached without any (usable) keys.
	MissingKeys,

	#[error("{key} is required, but no value was given.")]
	/// # Required Value Not Given.
	///
	/// For positionals, `key` is the metavar, or `#N` if there isn't one.
	RequiredValueNotGiven {
		/// # Key or Positional Name.
		key: String,
	},

	#[error("Unexpected argument: {token}")]
	/// # Unexpected Argument.
	UnexpectedArgument {
		/// # Token.
		token: String,
	},

	#[error("{key} does not take a value, but {value:?} was given.")]
	/// # Unexpected Value Given.
	///
	/// A `key=value` token targeted a flag.
	UnexpectedValueGiven {
		/// # Key.
		key: String,
		/// # Value.
		value: String,
	},

	#[error("{key} expects a value.")]
	/// # Missing Value For Option.
	MissingValueForOption {
		/// # Key.
		key: String,
	},

	#[error("Unknown key {key} in packed argument {token}.")]
	/// # Unknown Packed Key.
	UnknownPackedKey {
		/// # The Unresolved Key.
		key: String,
		/// # The Full Token.
		token: String,
	},

	#[error("Argument #{index} is not valid UTF-8: {raw:?}")]
	/// # Invalid UTF-8.
	InvalidUtf8 {
		/// # Token Index.
		index: usize,
		/// # Raw Value.
		raw: OsString,
	},

	#[error("Invalid value for {target} (argument #{index}): {source}")]
	/// # Conversion Failure.
	Conversion {
		/// # Key or Positional Name.
		target: String,
		/// # Token Index.
		index: usize,
		/// # Details.
		source: ConversionError,
	},
}

impl TartanError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a short, static description of the error kind.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::MissingKeys => "Missing keys.",
			Self::RequiredValueNotGiven { .. } => "Required value not given.",
			Self::UnexpectedArgument { .. } => "Unexpected argument.",
			Self::UnexpectedValueGiven { .. } => "Unexpected value given.",
			Self::MissingValueForOption { .. } => "Missing value for option.",
			Self::UnknownPackedKey { .. } => "Unknown packed key.",
			Self::InvalidUtf8 { .. } => "Invalid UTF-8.",
			Self::Conversion { .. } => "Invalid value.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parse Errors.
///
/// This is the error type returned by [`Parser::parse`](crate::Parser::parse).
/// It is never empty.
///
/// The errors are kept in the order they were encountered, with any
/// missing-requirement errors at the end.
pub struct ParseErrors(Vec<TartanError>);

impl Deref for ParseErrors {
	type Target = [TartanError];

	#[inline]
	fn deref(&self) -> &Self::Target { &self.0 }
}

impl std::error::Error for ParseErrors {}

impl fmt::Display for ParseErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut iter = self.0.iter();
		if let Some(e) = iter.next() {
			write!(f, "{e}")?;
			for e in iter { write!(f, "\n{e}")?; }
		}
		Ok(())
	}
}

impl IntoIterator for ParseErrors {
	type Item = TartanError;
	type IntoIter = std::vec::IntoIter<TartanError>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a> IntoIterator for &'a ParseErrors {
	type Item = &'a TartanError;
	type IntoIter = std::slice::Iter<'a, TartanError>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl ParseErrors {
	/// # From Collected.
	///
	/// Return `None` if there's nothing to complain about.
	pub(crate) fn from_vec(errors: Vec<TartanError>) -> Option<Self> {
		if errors.is_empty() { None }
		else { Some(Self(errors)) }
	}

	#[must_use]
	/// # Exit Code.
	///
	/// Parse errors are always fatal, so this is always `1`.
	pub const fn exit_code(&self) -> i32 { 1 }

	#[must_use]
	/// # Into Vec.
	pub fn into_vec(self) -> Vec<TartanError> { self.0 }
}
