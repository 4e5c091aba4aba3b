/*!
# Tartan: Declarations.

Declarations are cheap handles around shared storage. Cloning a handle does
_not_ copy the storage; every clone reads and writes the same keys, help text,
and value(s). That is how values parsed by a [`Parser`](crate::Parser) end up
in the handles the caller kept.
*/

mod flag;
mod opt;
mod positional;

pub use flag::{
	Flag,
	MultiFlag,
};
pub use opt::{
	MultiOpt,
	Opt,
};
pub use positional::{
	MultiPositional,
	Positional,
};

use crate::ConversionError;
use std::{
	cell::{
		Ref,
		RefCell,
		RefMut,
	},
	fmt,
	rc::Rc,
	str::FromStr,
};



#[derive(Debug)]
/// # Declaration Storage.
///
/// Not every declaration uses every field; flags have no metavar, for
/// example, and positionals have no keys.
struct Storage<V> {
	/// # Keys.
	keys: Vec<String>,

	/// # Help Text.
	help: String,

	/// # Metavar.
	metavar: String,

	/// # Required?
	required: bool,

	/// # Value(s).
	value: V,
}



#[derive(Debug)]
/// # Shared Storage Handle.
struct Shared<V>(Rc<RefCell<Storage<V>>>);

impl<V> Clone for Shared<V> {
	#[inline]
	fn clone(&self) -> Self { Self(Rc::clone(&self.0)) }
}

impl<V: Default> Default for Shared<V> {
	#[inline]
	fn default() -> Self { Self::new(V::default()) }
}

impl<V> Shared<V> {
	/// # New.
	fn new(value: V) -> Self {
		Self(Rc::new(RefCell::new(Storage {
			keys: Vec::new(),
			help: String::new(),
			metavar: String::new(),
			required: false,
			value,
		})))
	}

	/// # Set Keys.
	///
	/// This replaces any previous keys.
	fn set_keys<I, S>(&self, keys: I)
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.0.borrow_mut().keys = keys.into_iter().map(Into::into).collect();
	}

	/// # Keys.
	fn keys(&self) -> Vec<String> { self.0.borrow().keys.clone() }

	/// # Has Key?
	fn has_key(&self, key: &str) -> bool {
		self.0.borrow().keys.iter().any(|k| k == key)
	}

	/// # Set Help.
	fn set_help(&self, help: &str) { help.clone_into(&mut self.0.borrow_mut().help); }

	/// # Help.
	fn help(&self) -> String { self.0.borrow().help.clone() }

	/// # Set Metavar.
	fn set_metavar(&self, metavar: &str) {
		metavar.clone_into(&mut self.0.borrow_mut().metavar);
	}

	/// # Metavar.
	fn metavar(&self) -> String { self.0.borrow().metavar.clone() }

	/// # Mark Required.
	fn mark_required(&self) { self.0.borrow_mut().required = true; }

	/// # Required?
	fn is_required(&self) -> bool { self.0.borrow().required }

	/// # Value.
	fn value(&self) -> Ref<'_, V> { Ref::map(self.0.borrow(), |s| &s.value) }

	/// # Value (Mutable).
	fn value_mut(&self) -> RefMut<'_, V> {
		RefMut::map(self.0.borrow_mut(), |s| &mut s.value)
	}
}



/// # Convert.
///
/// Values are parsed from the _entire_ token; partial matches are failures.
fn convert<T>(raw: &str) -> Result<T, ConversionError>
where T: FromStr, <T as FromStr>::Err: fmt::Display {
	raw.parse::<T>().map_err(|e| ConversionError::new::<T, _>(raw, &e))
}
