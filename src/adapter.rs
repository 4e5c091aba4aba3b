/*!
# Tartan: Adapters.

The parser doesn't know (or care) what type any given declaration holds. Each
declaration is wrapped in an adapter implementing either [`KeyAdapter`] or
[`ArgumentAdapter`], and the parser works exclusively through those.

Custom declaration types can join in by implementing one of the adapter
traits along with [`Declaration`].
*/

use crate::{
	ConversionError,
	Flag,
	MultiFlag,
	MultiOpt,
	MultiPositional,
	Opt,
	Positional,
};
use std::{
	fmt,
	str::FromStr,
};



/// # Keyed Adapter.
///
/// This is the type-erased interface for flags and options.
pub trait KeyAdapter {
	/// # Takes a Value?
	///
	/// Options return `true`; flags return `false`.
	fn has_argument(&self) -> bool;

	/// # Required?
	fn is_required(&self) -> bool;

	/// # Keys.
	fn keys(&self) -> Vec<String>;

	/// # Metavar.
	fn metavar(&self) -> String;

	/// # Help Text.
	fn help(&self) -> String;

	/// # Raise.
	///
	/// This is called when a value-less key is matched. It does nothing for
	/// options.
	fn raise(&mut self) {}

	/// # Add Value.
	///
	/// This is called with the raw value when a value-taking key is matched.
	/// It does nothing for flags.
	///
	/// ## Errors
	///
	/// An error is returned if the value cannot be converted.
	fn add_value(&mut self, _raw: &str) -> Result<(), ConversionError> { Ok(()) }

	/// # Has Key?
	fn has_key(&self, key: &str) -> bool { self.keys().iter().any(|k| k == key) }

	/// # First Key.
	///
	/// This is the canonical key used in error messages.
	fn first_key(&self) -> String {
		self.keys().into_iter().next().unwrap_or_else(|| "<no key>".to_owned())
	}
}



/// # Positional Adapter.
///
/// This is the type-erased interface for positional values.
pub trait ArgumentAdapter {
	/// # Required?
	fn is_required(&self) -> bool;

	/// # Metavar.
	fn metavar(&self) -> String;

	/// # Help Text.
	fn help(&self) -> String;

	/// # Multi?
	///
	/// Multi positionals keep accepting values; the parser's cursor only
	/// moves past single ones.
	fn multi(&self) -> bool;

	/// # Add Value.
	///
	/// ## Errors
	///
	/// An error is returned if the value cannot be converted.
	fn add_value(&mut self, raw: &str) -> Result<(), ConversionError>;
}



/// # Adapter.
///
/// A declaration, boxed up and ready for the [`Parser`](crate::Parser).
pub enum Adapter {
	/// # Keyed (Flag or Option).
	Key(Box<dyn KeyAdapter>),

	/// # Positional.
	Positional(Box<dyn ArgumentAdapter>),
}

impl fmt::Debug for Adapter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(a) => f.debug_tuple("Key").field(&a.keys()).finish(),
			Self::Positional(a) => f.debug_tuple("Positional").field(&a.metavar()).finish(),
		}
	}
}



/// # Declaration.
///
/// This is implemented for each of the declaration types, allowing them to be
/// passed to [`Parser::attach`](crate::Parser::attach).
pub trait Declaration {
	/// # Into Adapter.
	fn into_adapter(self) -> Adapter;
}

impl Declaration for Flag {
	fn into_adapter(self) -> Adapter { Adapter::Key(Box::new(FlagAdapter(self))) }
}

impl Declaration for MultiFlag {
	fn into_adapter(self) -> Adapter { Adapter::Key(Box::new(MultiFlagAdapter(self))) }
}

impl<T> Declaration for Opt<T>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	fn into_adapter(self) -> Adapter { Adapter::Key(Box::new(OptAdapter(self))) }
}

impl<T> Declaration for MultiOpt<T>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	fn into_adapter(self) -> Adapter { Adapter::Key(Box::new(MultiOptAdapter(self))) }
}

impl<T> Declaration for Positional<T>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	fn into_adapter(self) -> Adapter {
		Adapter::Positional(Box::new(PositionalAdapter(self)))
	}
}

impl<T> Declaration for MultiPositional<T>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	fn into_adapter(self) -> Adapter {
		Adapter::Positional(Box::new(MultiPositionalAdapter(self)))
	}
}



/// # Flag Adapter.
struct FlagAdapter(Flag);

impl KeyAdapter for FlagAdapter {
	fn has_argument(&self) -> bool { false }
	fn is_required(&self) -> bool { false }
	fn keys(&self) -> Vec<String> { self.0.keys() }
	fn metavar(&self) -> String { String::new() }
	fn help(&self) -> String { self.0.help() }
	fn raise(&mut self) { self.0.raise(); }
	fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }
}

/// # Multi Flag Adapter.
struct MultiFlagAdapter(MultiFlag);

impl KeyAdapter for MultiFlagAdapter {
	fn has_argument(&self) -> bool { false }
	fn is_required(&self) -> bool { false }
	fn keys(&self) -> Vec<String> { self.0.keys() }
	fn metavar(&self) -> String { String::new() }
	fn help(&self) -> String { self.0.help() }
	fn raise(&mut self) { self.0.raise(); }
	fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }
}

/// # Option Adapter.
struct OptAdapter<T>(Opt<T>);

impl<T> KeyAdapter for OptAdapter<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	fn has_argument(&self) -> bool { true }
	fn is_required(&self) -> bool { self.0.is_required() }
	fn keys(&self) -> Vec<String> { self.0.keys() }
	fn metavar(&self) -> String { self.0.metavar() }
	fn help(&self) -> String { self.0.help() }
	fn add_value(&mut self, raw: &str) -> Result<(), ConversionError> {
		self.0.add_value(raw)
	}
	fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }
}

/// # Multi Option Adapter.
struct MultiOptAdapter<T>(MultiOpt<T>);

impl<T> KeyAdapter for MultiOptAdapter<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	fn has_argument(&self) -> bool { true }
	fn is_required(&self) -> bool { self.0.is_required() }
	fn keys(&self) -> Vec<String> { self.0.keys() }
	fn metavar(&self) -> String { self.0.metavar() }
	fn help(&self) -> String { self.0.help() }
	fn add_value(&mut self, raw: &str) -> Result<(), ConversionError> {
		self.0.add_value(raw)
	}
	fn has_key(&self, key: &str) -> bool { self.0.has_key(key) }
}

/// # Positional Adapter.
struct PositionalAdapter<T>(Positional<T>);

impl<T> ArgumentAdapter for PositionalAdapter<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	fn is_required(&self) -> bool { self.0.is_required() }
	fn metavar(&self) -> String { self.0.metavar() }
	fn help(&self) -> String { self.0.help() }
	fn multi(&self) -> bool { false }
	fn add_value(&mut self, raw: &str) -> Result<(), ConversionError> {
		self.0.add_value(raw)
	}
}

/// # Multi Positional Adapter.
struct MultiPositionalAdapter<T>(MultiPositional<T>);

impl<T> ArgumentAdapter for MultiPositionalAdapter<T>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	fn is_required(&self) -> bool { self.0.is_required() }
	fn metavar(&self) -> String { self.0.metavar() }
	fn help(&self) -> String { self.0.help() }
	fn multi(&self) -> bool { true }
	fn add_value(&mut self, raw: &str) -> Result<(), ConversionError> {
		self.0.add_value(raw)
	}
}
