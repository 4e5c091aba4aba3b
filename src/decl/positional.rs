/*!
# Tartan: Positional Values.
*/

use crate::ConversionError;
use std::{
	cell::Ref,
	fmt,
	str::FromStr,
};
use super::Shared;



#[derive(Debug)]
/// # Positional Value.
///
/// An argument identified by its position rather than a key. Positionals are
/// filled in the order they were attached, one token apiece.
///
/// ## Examples
///
/// ```
/// use tartan::Parser;
/// use std::path::PathBuf;
///
/// let mut parser = Parser::new();
/// let src = parser.positional::<PathBuf>().with_metavar("SRC").mark_required();
/// let dst = parser.positional::<PathBuf>().with_metavar("DST");
/// parser.parse(["/tmp/a"]).unwrap();
///
/// assert_eq!(src.get(), Some(PathBuf::from("/tmp/a")));
/// assert_eq!(dst.get(), None);
/// ```
pub struct Positional<T>(Shared<Option<T>>);

impl<T> Clone for Positional<T> {
	#[inline]
	fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Default for Positional<T> {
	#[inline]
	fn default() -> Self { Self(Shared::new(None)) }
}

impl<T> Positional<T> {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Help.
	pub fn with_help(self, help: &str) -> Self {
		self.0.set_help(help);
		self
	}

	#[must_use]
	/// # With Metavar.
	///
	/// This doubles as the positional's name in error messages.
	pub fn with_metavar(self, metavar: &str) -> Self {
		self.0.set_metavar(metavar);
		self
	}

	#[must_use]
	/// # Mark Required.
	pub fn mark_required(self) -> Self {
		self.0.mark_required();
		self
	}

	#[must_use]
	/// # With Default.
	pub fn with_default(self, value: T) -> Self {
		*self.0.value_mut() = Some(value);
		self
	}

	#[must_use]
	/// # Help.
	pub fn help(&self) -> String { self.0.help() }

	#[must_use]
	/// # Metavar.
	pub fn metavar(&self) -> String { self.0.metavar() }

	#[must_use]
	/// # Required?
	pub fn is_required(&self) -> bool { self.0.is_required() }

	#[must_use]
	/// # Value.
	///
	/// Don't hold onto this across a parse; see [`MultiOpt::values`](crate::MultiOpt::values).
	pub fn value(&self) -> Ref<'_, Option<T>> { self.0.value() }

	#[must_use]
	/// # Is Set?
	pub fn is_set(&self) -> bool { self.0.value().is_some() }
}

impl<T: Clone> Positional<T> {
	#[must_use]
	/// # Value (Cloned).
	pub fn get(&self) -> Option<T> { self.0.value().clone() }
}

impl<T> Positional<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	/// # Add Value.
	pub(crate) fn add_value(&self, raw: &str) -> Result<(), ConversionError> {
		let v = super::convert::<T>(raw)?;
		*self.0.value_mut() = Some(v);
		Ok(())
	}
}



#[derive(Debug)]
/// # Multi Positional Value.
///
/// A positional that greedily collects every remaining unmatched token.
/// Anything attached after it will never be reached.
///
/// ## Examples
///
/// ```
/// use tartan::Parser;
///
/// let mut parser = Parser::new();
/// let cmd = parser.positional::<String>().with_metavar("CMD");
/// let files = parser.multi_positional::<String>().with_metavar("FILE");
/// parser.parse(["copy", "a", "b"]).unwrap();
///
/// assert_eq!(cmd.get().as_deref(), Some("copy"));
/// assert_eq!(*files.values(), ["a", "b"]);
/// ```
pub struct MultiPositional<T>(Shared<Vec<T>>);

impl<T> Clone for MultiPositional<T> {
	#[inline]
	fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Default for MultiPositional<T> {
	#[inline]
	fn default() -> Self { Self(Shared::new(Vec::new())) }
}

impl<T> MultiPositional<T> {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Help.
	pub fn with_help(self, help: &str) -> Self {
		self.0.set_help(help);
		self
	}

	#[must_use]
	/// # With Metavar.
	pub fn with_metavar(self, metavar: &str) -> Self {
		self.0.set_metavar(metavar);
		self
	}

	#[must_use]
	/// # Mark Required.
	///
	/// At least one value will be required.
	pub fn mark_required(self) -> Self {
		self.0.mark_required();
		self
	}

	#[must_use]
	/// # With Default.
	pub fn with_default<I: IntoIterator<Item=T>>(self, values: I) -> Self {
		self.0.value_mut().extend(values);
		self
	}

	#[must_use]
	/// # Help.
	pub fn help(&self) -> String { self.0.help() }

	#[must_use]
	/// # Metavar.
	pub fn metavar(&self) -> String { self.0.metavar() }

	#[must_use]
	/// # Required?
	pub fn is_required(&self) -> bool { self.0.is_required() }

	#[must_use]
	/// # Values.
	///
	/// Don't hold onto this across a parse; see [`MultiOpt::values`](crate::MultiOpt::values).
	pub fn values(&self) -> Ref<'_, [T]> {
		Ref::map(self.0.value(), Vec::as_slice)
	}

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.value().len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.value().is_empty() }
}

impl<T: Clone> MultiPositional<T> {
	#[must_use]
	/// # Values (Cloned).
	pub fn to_vec(&self) -> Vec<T> { self.0.value().clone() }
}

impl<T> MultiPositional<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	/// # Add Value.
	pub(crate) fn add_value(&self, raw: &str) -> Result<(), ConversionError> {
		let v = super::convert::<T>(raw)?;
		self.0.value_mut().push(v);
		Ok(())
	}
}
