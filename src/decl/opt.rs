/*!
# Tartan: Options.
*/

use crate::ConversionError;
use std::{
	cell::Ref,
	fmt,
	str::FromStr,
};
use super::Shared;



#[derive(Debug)]
/// # Option.
///
/// A keyed argument taking exactly one value, e.g. `-n 5`, `-n=5`, or `-n5`.
/// If passed more than once, the last value wins.
///
/// The value is `None` until it is either parsed or given a default.
///
/// ## Examples
///
/// ```
/// use tartan::{Opt, Parser};
///
/// let number = Opt::<u8>::new()
///     .with_keys(["-n", "--number"])
///     .with_default(3);
///
/// let mut parser = Parser::new();
/// parser.attach(number.clone()).unwrap();
/// parser.parse(["--number=5"]).unwrap();
///
/// assert_eq!(number.get(), Some(5));
/// ```
pub struct Opt<T>(Shared<Option<T>>);

impl<T> Clone for Opt<T> {
	#[inline]
	fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Default for Opt<T> {
	#[inline]
	fn default() -> Self { Self(Shared::new(None)) }
}

impl<T> Opt<T> {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Keys.
	///
	/// Set the key(s) for the option, replacing any previous ones.
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
	/// # With Metavar.
	///
	/// This is the value placeholder used in help screens, like `NUM`.
	pub fn with_metavar(self, metavar: &str) -> Self {
		self.0.set_metavar(metavar);
		self
	}

	#[must_use]
	/// # Mark Required.
	///
	/// Parsing will fail if the option is not given, even if it has a
	/// default.
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
	/// # Keys.
	pub fn keys(&self) -> Vec<String> { self.0.keys() }

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
	/// Borrow the current value without cloning it.
	///
	/// The returned guard holds a borrow on the shared storage. If it is still
	/// alive when [`Parser::parse`](crate::Parser::parse) tries to write to
	/// this option, the parse will panic.
	pub fn value(&self) -> Ref<'_, Option<T>> { self.0.value() }

	#[must_use]
	/// # Is Set?
	pub fn is_set(&self) -> bool { self.0.value().is_some() }

	/// # Has Key?
	pub(crate) fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }
}

impl<T: Clone> Opt<T> {
	#[must_use]
	/// # Value (Cloned).
	pub fn get(&self) -> Option<T> { self.0.value().clone() }
}

impl<T> Opt<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	/// # Add Value.
	///
	/// Replace the current value with the converted token.
	pub(crate) fn add_value(&self, raw: &str) -> Result<(), ConversionError> {
		let v = super::convert::<T>(raw)?;
		*self.0.value_mut() = Some(v);
		Ok(())
	}
}



#[derive(Debug)]
/// # Multi Option.
///
/// A keyed argument that may be passed any number of times, collecting each
/// value in order.
///
/// ## Examples
///
/// ```
/// use tartan::Parser;
///
/// let mut parser = Parser::new();
/// let nums = parser.multi_option::<u8>(&["-n"]).unwrap();
/// parser.parse(["-n", "1", "-n=2", "-n3"]).unwrap();
///
/// assert_eq!(*nums.values(), [1, 2, 3]);
/// ```
pub struct MultiOpt<T>(Shared<Vec<T>>);

impl<T> Clone for MultiOpt<T> {
	#[inline]
	fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> Default for MultiOpt<T> {
	#[inline]
	fn default() -> Self { Self(Shared::new(Vec::new())) }
}

impl<T> MultiOpt<T> {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Keys.
	///
	/// Set the key(s) for the option, replacing any previous ones.
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
	/// # With Metavar.
	pub fn with_metavar(self, metavar: &str) -> Self {
		self.0.set_metavar(metavar);
		self
	}

	#[must_use]
	/// # Mark Required.
	///
	/// Parsing will fail unless at least one value is given.
	pub fn mark_required(self) -> Self {
		self.0.mark_required();
		self
	}

	#[must_use]
	/// # With Default.
	///
	/// Seed the collection. Parsed values are appended after these.
	pub fn with_default<I: IntoIterator<Item=T>>(self, values: I) -> Self {
		self.0.value_mut().extend(values);
		self
	}

	#[must_use]
	/// # Keys.
	pub fn keys(&self) -> Vec<String> { self.0.keys() }

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
	/// Return a read-only view of the collected values.
	///
	/// Drop the view before parsing; a live view will cause
	/// [`Parser::parse`](crate::Parser::parse) to panic when it reaches this
	/// option.
	pub fn values(&self) -> Ref<'_, [T]> {
		Ref::map(self.0.value(), Vec::as_slice)
	}

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.0.value().len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.0.value().is_empty() }

	/// # Has Key?
	pub(crate) fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }
}

impl<T: Clone> MultiOpt<T> {
	#[must_use]
	/// # Values (Cloned).
	pub fn to_vec(&self) -> Vec<T> { self.0.value().clone() }
}

impl<T> MultiOpt<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	/// # Add Value.
	pub(crate) fn add_value(&self, raw: &str) -> Result<(), ConversionError> {
		let v = super::convert::<T>(raw)?;
		self.0.value_mut().push(v);
		Ok(())
	}
}
