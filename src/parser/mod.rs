/*!
# Tartan: Parser.

The [`Parser`] holds the attached declarations (as adapters) and walks the
raw token list against them.
*/

mod config;
mod help;

pub use config::Config;

use crate::{
	Adapter,
	ArgumentAdapter,
	Declaration,
	Flag,
	KeyAdapter,
	MultiFlag,
	MultiOpt,
	MultiPositional,
	Opt,
	ParseErrors,
	Positional,
	TartanError,
};
use std::{
	ffi::OsString,
	fmt,
	str::FromStr,
};
use tracing::{
	debug,
	trace,
};



/// # Default Program Name.
const DEFAULT_PROGRAM: &str = "<program>";



/// # Attached Adapter.
///
/// This pairs an adapter with the number of times it was matched during the
/// current parse, used for requiredness checks.
struct Entry<A: ?Sized> {
	/// # Hits.
	hits: usize,

	/// # Adapter.
	adapter: Box<A>,
}

impl<A: ?Sized> Entry<A> {
	/// # New.
	fn new(adapter: Box<A>) -> Self {
		Self { hits: 0, adapter }
	}
}



/// # Packed Keys.
///
/// The resolution of a token like `-abc` or `-vn5`.
struct Pack<'a> {
	/// # Value-less Keys (Indices).
	switches: Vec<usize>,

	/// # Trailing Option.
	///
	/// The index and key of the first value-taking key in the pack, along
	/// with whatever followed it in the token (`None` if nothing did).
	option: Option<(usize, String, Option<&'a str>)>,
}



/// # Argument Parser.
///
/// `Parser` is a registry of typed declarations ([`Flag`], [`MultiFlag`],
/// [`Opt`], [`MultiOpt`], [`Positional`], and [`MultiPositional`]) and the
/// machinery for resolving raw CLI tokens against them.
///
/// Values are written straight into the declarations' shared storage, so once
/// [`Parser::parse`] returns, the handles you kept hold the results.
///
/// ## Resolution
///
/// Each token is matched by the first of the following rules that applies:
///
/// 1. **Exact key**: the token is one of a flag or option's keys. Flags are
///    raised; options take the _next_ token as their value.
/// 2. **Key/value**: the token is a key and value joined by the separator,
///    like `--key=value`. Only options may be given values this way.
/// 3. **Packed keys**: the token is the pack prefix followed by one or more
///    single-character keys, like `-abc`. See below.
/// 4. **Positional**: the token is handed to the next open positional.
/// 5. **Leftover**: the token is collected (if enabled) or rejected.
///
/// Keys are searched newest to oldest, so if two declarations share a key,
/// the one attached _last_ wins.
///
/// ### Packing
///
/// A token like `-xvf` is treated as a pack only if its first character
/// resolves to a key (`-x`). Flags in the pack are raised in order. The first
/// option ends the pack: the rest of the token is its value (`-n5` or
/// `-n=5`), or if nothing is left, the next token is (`-vn 5`).
///
/// A pack is all or nothing. If a character matches no key
/// ([`TartanError::UnknownPackedKey`]) or the trailing option has no value
/// ([`TartanError::MissingValueForOption`]), none of the token's keys are
/// applied.
///
/// ## Errors
///
/// Structural problems and conversion failures are collected as parsing
/// proceeds, and any missing requirements are checked at the end, so a single
/// run reports everything wrong with the input. Conversion errors carry the
/// index of the offending token.
///
/// A key or positional whose value fails to convert still counts as having
/// been given.
///
/// ## Examples
///
/// ```
/// use tartan::{Parser, TartanError};
///
/// let mut parser = Parser::new();
/// let string = parser.option::<String>(&["-s", "--string"])
///     .unwrap()
///     .mark_required()
///     .with_help("A string to print.");
/// let number = parser.option::<u32>(&["-n", "--number"])
///     .unwrap()
///     .with_default(3)
///     .with_help("The number of times to print it.");
///
/// parser.parse(["-s", "hi"]).unwrap();
/// assert_eq!(string.get().as_deref(), Some("hi"));
/// assert_eq!(number.get(), Some(3));
///
/// // A different parse, sans string.
/// let mut parser = Parser::new();
/// parser.attach(string.clone()).unwrap();
/// parser.attach(number.clone()).unwrap();
/// let errors = parser.parse(["--number", "5"]).unwrap_err();
/// assert_eq!(
///     errors[0],
///     TartanError::RequiredValueNotGiven { key: "-s".to_owned() },
/// );
/// ```
pub struct Parser {
	/// # Flags and Options.
	keyed: Vec<Entry<dyn KeyAdapter>>,

	/// # Positionals.
	positional: Vec<Entry<dyn ArgumentAdapter>>,

	/// # Configuration.
	config: Config,

	/// # Positional Cursor.
	position: usize,

	/// # Leftovers.
	leftovers: Vec<String>,

	/// # Program Name.
	program_name: String,
}

impl Default for Parser {
	fn default() -> Self {
		Self {
			keyed: Vec::new(),
			positional: Vec::new(),
			config: Config::default(),
			position: 0,
			leftovers: Vec::new(),
			program_name: DEFAULT_PROGRAM.to_owned(),
		}
	}
}

impl fmt::Debug for Parser {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Parser")
			.field("keyed", &self.keyed.iter().map(|e| e.adapter.keys()).collect::<Vec<_>>())
			.field("positional", &self.positional.iter().map(|e| e.adapter.metavar()).collect::<Vec<_>>())
			.field("config", &self.config)
			.field("position", &self.position)
			.field("leftovers", &self.leftovers)
			.field("program_name", &self.program_name)
			.finish()
	}
}

/// # Construction.
impl Parser {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # With Configuration.
	pub fn with_config(mut self, config: Config) -> Self {
		self.config = config;
		self
	}

	#[must_use]
	/// # With Program Name.
	///
	/// This is used by the help screen's usage line.
	pub fn with_program_name(mut self, name: &str) -> Self {
		self.set_program_name(name);
		self
	}

	/// # Set Configuration.
	pub fn set_config(&mut self, config: Config) { self.config = config; }

	/// # Set Program Name.
	pub fn set_program_name(&mut self, name: &str) {
		let name = name.trim();
		if name.is_empty() { DEFAULT_PROGRAM.clone_into(&mut self.program_name); }
		else { name.clone_into(&mut self.program_name); }
	}
}

/// # Attachment.
impl Parser {
	/// # Attach.
	///
	/// Register a declaration with the parser. Flags and options join the
	/// keyed list; positionals join the positional list. Either way, order
	/// matters: keys resolve newest-first; positionals fill oldest-first.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::{Flag, Parser};
	///
	/// let mut parser = Parser::new();
	/// let quiet = Flag::new().with_keys(["-q", "--quiet"]);
	/// parser.attach(quiet.clone()).unwrap();
	/// ```
	///
	/// ## Errors
	///
	/// Flags and options must have at least one key, and none of their keys
	/// may be empty.
	pub fn attach<D: Declaration>(&mut self, decl: D) -> Result<(), TartanError> {
		match decl.into_adapter() {
			Adapter::Key(a) => {
				let keys = a.keys();
				if keys.is_empty() || keys.iter().any(String::is_empty) {
					return Err(TartanError::MissingKeys);
				}
				trace!(keys = ?keys, "attached keyed argument");
				self.keyed.push(Entry::new(a));
			},
			Adapter::Positional(a) => {
				trace!(index = self.positional.len(), "attached positional argument");
				self.positional.push(Entry::new(a));
			},
		}
		Ok(())
	}

	/// # New Flag.
	///
	/// Create, attach, and return a [`Flag`] with the given keys.
	///
	/// ## Errors
	///
	/// See [`Parser::attach`].
	pub fn flag(&mut self, keys: &[&str]) -> Result<Flag, TartanError> {
		let out = Flag::new().with_keys(keys.iter().copied());
		self.attach(out.clone())?;
		Ok(out)
	}

	/// # New Multi Flag.
	///
	/// Create, attach, and return a [`MultiFlag`] with the given keys.
	///
	/// ## Errors
	///
	/// See [`Parser::attach`].
	pub fn multi_flag(&mut self, keys: &[&str]) -> Result<MultiFlag, TartanError> {
		let out = MultiFlag::new().with_keys(keys.iter().copied());
		self.attach(out.clone())?;
		Ok(out)
	}

	/// # New Option.
	///
	/// Create, attach, and return an [`Opt`] with the given keys.
	///
	/// ## Errors
	///
	/// See [`Parser::attach`].
	pub fn option<T>(&mut self, keys: &[&str]) -> Result<Opt<T>, TartanError>
	where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
		let out = Opt::new().with_keys(keys.iter().copied());
		self.attach(out.clone())?;
		Ok(out)
	}

	/// # New Multi Option.
	///
	/// Create, attach, and return a [`MultiOpt`] with the given keys.
	///
	/// ## Errors
	///
	/// See [`Parser::attach`].
	pub fn multi_option<T>(&mut self, keys: &[&str]) -> Result<MultiOpt<T>, TartanError>
	where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
		let out = MultiOpt::new().with_keys(keys.iter().copied());
		self.attach(out.clone())?;
		Ok(out)
	}

	/// # New Positional.
	///
	/// Create, attach, and return a [`Positional`].
	pub fn positional<T>(&mut self) -> Positional<T>
	where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
		let out = Positional::new();
		self.push_positional(out.clone());
		out
	}

	/// # New Multi Positional.
	///
	/// Create, attach, and return a [`MultiPositional`].
	pub fn multi_positional<T>(&mut self) -> MultiPositional<T>
	where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
		let out = MultiPositional::new();
		self.push_positional(out.clone());
		out
	}

	/// # Push Positional.
	///
	/// Positionals have no keys, so attaching them cannot fail.
	fn push_positional<D: Declaration>(&mut self, decl: D) {
		if let Adapter::Positional(a) = decl.into_adapter() {
			self.positional.push(Entry::new(a));
		}
	}
}

/// # Getters.
impl Parser {
	#[must_use]
	/// # Configuration.
	pub const fn config(&self) -> &Config { &self.config }

	#[must_use]
	/// # Leftovers.
	///
	/// Return any surplus arguments collected during the last parse. This is
	/// always empty unless [`Config::with_leftovers`] is enabled.
	pub fn leftovers(&self) -> &[String] { &self.leftovers }

	#[must_use]
	/// # Program Name.
	pub fn program_name(&self) -> &str { &self.program_name }
}

/// # Parsing.
impl Parser {
	/// # Parse.
	///
	/// Resolve the tokens against the attached declarations. The tokens
	/// should _not_ include the program name.
	///
	/// The parser is meant to be used once. Parsing again resets its
	/// bookkeeping (cursor, leftovers, requirement tracking), but values
	/// already written to the declarations stay put.
	///
	/// ## Errors
	///
	/// Returns every structural, conversion, and requirement error found; see
	/// the struct-level documentation for details.
	///
	/// ## Panics
	///
	/// This will panic if a [`Ref`](std::cell::Ref) borrowed from one of the
	/// attached declarations (e.g. via [`MultiOpt::values`]) is still alive,
	/// since the parser needs to write to it. Drop any such views first.
	pub fn parse<I, S>(&mut self, args: I) -> Result<(), ParseErrors>
	where I: IntoIterator<Item=S>, S: Into<String> {
		let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
		self.run(&tokens, Vec::new())
	}

	/// # Parse (`OsString`).
	///
	/// Same as [`Parser::parse`], but for raw [`OsString`]s. Tokens that are
	/// not valid UTF-8 are reported as [`TartanError::InvalidUtf8`] and
	/// otherwise ignored.
	///
	/// Note that the indices in any subsequent errors refer to the list of
	/// _valid_ tokens.
	///
	/// ## Errors
	///
	/// See [`Parser::parse`].
	///
	/// ## Panics
	///
	/// See [`Parser::parse`].
	pub fn parse_os<I>(&mut self, args: I) -> Result<(), ParseErrors>
	where I: IntoIterator<Item=OsString> {
		let mut errors = Vec::new();
		let mut tokens = Vec::new();
		for (index, raw) in args.into_iter().enumerate() {
			match raw.into_string() {
				Ok(s) => { tokens.push(s); },
				Err(raw) => {
					let e = TartanError::InvalidUtf8 { index, raw };
					debug!(error = %e, "rejected argument");
					errors.push(e);
				},
			}
		}
		self.run(&tokens, errors)
	}

	/// # Parse Environment.
	///
	/// Parse [`std::env::args_os`], using the first entry as the program name.
	///
	/// ## Errors
	///
	/// See [`Parser::parse`].
	///
	/// ## Panics
	///
	/// See [`Parser::parse`].
	pub fn parse_env(&mut self) -> Result<(), ParseErrors> {
		let mut args = std::env::args_os();
		if let Some(name) = args.next() {
			let name = std::path::Path::new(&name)
				.file_name()
				.map_or_else(|| name.to_string_lossy(), |n| n.to_string_lossy())
				.into_owned();
			self.set_program_name(&name);
		}
		self.parse_os(args)
	}

	/// # Run.
	fn run(&mut self, tokens: &[String], mut errors: Vec<TartanError>)
	-> Result<(), ParseErrors> {
		debug!(
			tokens = tokens.len(),
			keyed = self.keyed.len(),
			positional = self.positional.len(),
			"parsing arguments"
		);

		// Reset the bookkeeping.
		self.position = 0;
		self.leftovers.clear();
		for e in &mut self.keyed { e.hits = 0; }
		for e in &mut self.positional { e.hits = 0; }

		self.resolve(tokens, &mut errors);
		self.check_required(&mut errors);

		match ParseErrors::from_vec(errors) {
			Some(e) => Err(e),
			None => Ok(()),
		}
	}

	/// # Resolve Tokens.
	///
	/// Walk the tokens, dispatching each to the appropriate adapter(s), and
	/// pushing any problems to `errors`.
	fn resolve(&mut self, tokens: &[String], errors: &mut Vec<TartanError>) {
		let mut ended = false;
		let mut idx = 0;
		while let Some(token) = tokens.get(idx) {
			let token = token.as_str();
			idx += 1;

			// Past the terminator, everything is positional.
			if ended {
				self.add_positional(idx - 1, token, errors);
				continue;
			}
			if self.config.terminator() == Some(token) {
				trace!(token, "end of options");
				ended = true;
				continue;
			}

			// Exact key.
			if let Some(pos) = self.find_key(token) {
				if self.keyed[pos].adapter.has_argument() {
					if let Some(value) = tokens.get(idx) {
						trace!(key = token, value = value.as_str(), "matched option");
						self.add_key_value(pos, idx, value, errors);
						idx += 1;
					}
					else { push_error(errors, TartanError::MissingValueForOption { key: token.to_owned() }); }
				}
				else {
					trace!(key = token, "matched flag");
					self.raise(pos);
				}
				continue;
			}

			// Key/value.
			if let Some((key, value)) = self.split_key_value(token) {
				if let Some(pos) = self.find_key(key) {
					if self.keyed[pos].adapter.has_argument() {
						trace!(key, value, "matched key/value");
						self.add_key_value(pos, idx - 1, value, errors);
					}
					else {
						push_error(errors, TartanError::UnexpectedValueGiven {
							key: key.to_owned(),
							value: value.to_owned(),
						});
					}
					continue;
				}
			}

			// Packed keys.
			if let Some(pack) = self.unpack(token) {
				match pack {
					Ok(Pack { switches, option }) => {
						// Sort out the option's value first; if it's missing,
						// nothing in the token applies.
						let value = match option {
							Some((pos, _, Some(value))) => Some((pos, idx - 1, value)),
							Some((pos, key, None)) => {
								let Some(value) = tokens.get(idx) else {
									push_error(errors, TartanError::MissingValueForOption { key });
									continue;
								};
								idx += 1;
								Some((pos, idx - 1, value.as_str()))
							},
							None => None,
						};

						trace!(token, "matched packed keys");
						for pos in switches { self.raise(pos); }
						if let Some((pos, index, value)) = value {
							self.add_key_value(pos, index, value, errors);
						}
					},
					Err(e) => { push_error(errors, e); },
				}
				continue;
			}

			// Positional or leftover.
			self.add_positional(idx - 1, token, errors);
		}
	}

	/// # Check Requirements.
	///
	/// Note any required options or positionals that never received a value.
	fn check_required(&self, errors: &mut Vec<TartanError>) {
		for e in &self.keyed {
			if e.hits == 0 && e.adapter.is_required() {
				push_error(errors, TartanError::RequiredValueNotGiven {
					key: e.adapter.first_key(),
				});
			}
		}

		for (idx, e) in self.positional.iter().enumerate() {
			if e.hits == 0 && e.adapter.is_required() {
				push_error(errors, TartanError::RequiredValueNotGiven {
					key: positional_name(e.adapter.as_ref(), idx),
				});
			}
		}
	}
}

/// # Resolution Helpers.
impl Parser {
	/// # Find Key.
	///
	/// Return the index of the _last_ keyed adapter answering to `key`, if
	/// any.
	fn find_key(&self, key: &str) -> Option<usize> {
		self.keyed.iter().rposition(|e| e.adapter.has_key(key))
	}

	/// # Split Key/Value.
	///
	/// Split the token at the first separator, if `key=value` syntax is
	/// enabled and the token has one.
	fn split_key_value<'a>(&self, token: &'a str) -> Option<(&'a str, &'a str)> {
		let sep = self.config.key_value_separator()?;
		token.split_once(sep)
	}

	/// # Unpack.
	///
	/// Resolve a packed token like `-abc`. This returns `None` if the token
	/// doesn't look like a pack.
	fn unpack<'a>(&self, token: &'a str) -> Option<Result<Pack<'a>, TartanError>> {
		let prefix = self.config.pack_prefix()?;
		let rest = token.strip_prefix(prefix)?;

		let mut switches = Vec::new();
		let mut key = String::with_capacity(prefix.len() + 4);
		for (i, c) in rest.char_indices() {
			key.clear();
			key.push_str(prefix);
			key.push(c);

			let Some(pos) = self.find_key(&key) else {
				// If the very first key is unknown, this isn't a pack.
				if i == 0 { return None; }
				return Some(Err(TartanError::UnknownPackedKey {
					key,
					token: token.to_owned(),
				}));
			};

			if self.keyed[pos].adapter.has_argument() {
				let mut value = &rest[i + c.len_utf8()..];
				if value.is_empty() {
					return Some(Ok(Pack { switches, option: Some((pos, key, None)) }));
				}

				// Allow -n=5 within a pack, same as without.
				if let Some(sep) = self.config.key_value_separator() {
					value = value.strip_prefix(sep).unwrap_or(value);
				}
				return Some(Ok(Pack { switches, option: Some((pos, key, Some(value))) }));
			}
			switches.push(pos);
		}

		// An empty pack isn't a pack.
		if switches.is_empty() { None }
		else { Some(Ok(Pack { switches, option: None })) }
	}

	/// # Raise.
	fn raise(&mut self, pos: usize) {
		let e = &mut self.keyed[pos];
		e.adapter.raise();
		e.hits += 1;
	}

	/// # Add Keyed Value.
	///
	/// A value that fails conversion still counts as the key having been
	/// given.
	fn add_key_value(&mut self, pos: usize, index: usize, value: &str, errors: &mut Vec<TartanError>) {
		let e = &mut self.keyed[pos];
		e.hits += 1;
		if let Err(source) = e.adapter.add_value(value) {
			push_error(errors, TartanError::Conversion {
				target: e.adapter.first_key(),
				index,
				source,
			});
		}
	}

	/// # Add Positional Value.
	///
	/// Hand the token to the positional under the cursor, or failing that,
	/// collect or reject it.
	fn add_positional(&mut self, index: usize, token: &str, errors: &mut Vec<TartanError>) {
		let position = self.position;
		if let Some(e) = self.positional.get_mut(position) {
			trace!(token, position, "matched positional");
			e.hits += 1;
			if ! e.adapter.multi() { self.position += 1; }
			if let Err(source) = e.adapter.add_value(token) {
				push_error(errors, TartanError::Conversion {
					target: positional_name(e.adapter.as_ref(), position),
					index,
					source,
				});
			}
		}
		else if self.config.collect_leftovers() {
			trace!(token, "collected leftover");
			self.leftovers.push(token.to_owned());
		}
		else {
			push_error(errors, TartanError::UnexpectedArgument { token: token.to_owned() });
		}
	}
}



/// # Positional Name.
///
/// Positionals are identified by metavar, or failing that, their one-based
/// position.
fn positional_name(adapter: &dyn ArgumentAdapter, idx: usize) -> String {
	let name = adapter.metavar();
	if name.is_empty() { format!("#{}", idx + 1) }
	else { name }
}

/// # Push Error.
fn push_error(errors: &mut Vec<TartanError>, e: TartanError) {
	debug!(error = %e, "rejected argument");
	errors.push(e);
}



#[cfg(test)]
mod test {
	use super::*;

	/// # Parse Errors as a Vec.
	fn errors<I, S>(parser: &mut Parser, args: I) -> Vec<TartanError>
	where I: IntoIterator<Item=S>, S: Into<String> {
		parser.parse(args).map_or_else(ParseErrors::into_vec, |()| Vec::new())
	}

	#[test]
	fn t_syntax_equivalence() {
		for args in [
			&["-k", "12"][..],
			&["-k=12"][..],
			&["--key", "12"][..],
			&["--key=12"][..],
			&["-k12"][..],
		] {
			let mut parser = Parser::new();
			let opt = parser.option::<u32>(&["-k", "--key"]).expect("Option should attach.");
			assert!(parser.parse(args.iter().copied()).is_ok(), "Parse failed: {args:?}");
			assert_eq!(opt.get(), Some(12), "Wrong value: {args:?}");
		}
	}

	#[test]
	fn t_last_registration_wins() {
		let mut parser = Parser::new();
		let a = parser.option::<i32>(&["-x"]).expect("Option should attach.");
		let b = parser.option::<i32>(&["-x", "--ex"]).expect("Option should attach.");
		assert!(parser.parse(["-x", "5"]).is_ok());
		assert_eq!(a.get(), None);
		assert_eq!(b.get(), Some(5));

		// And the other way around.
		let mut parser = Parser::new();
		let b = parser.option::<i32>(&["-x", "--ex"]).expect("Option should attach.");
		let a = parser.option::<i32>(&["-x"]).expect("Option should attach.");
		assert!(parser.parse(["-x=5", "--ex", "6"]).is_ok());
		assert_eq!(a.get(), Some(5));
		assert_eq!(b.get(), Some(6));
	}

	#[test]
	fn t_empty() {
		let mut parser = Parser::new();
		let _res = parser.flag(&["-f"]).expect("Flag should attach.");
		let _res = parser.option::<u8>(&["-o"]).expect("Option should attach.");
		let _res = parser.positional::<u8>();
		assert!(parser.parse(Vec::<String>::new()).is_ok());

		// Now with requirements.
		let mut parser = Parser::new();
		let _res = parser.flag(&["-f"]).expect("Flag should attach.");
		let _res = parser.option::<u8>(&["-o"]).expect("Option should attach.").mark_required();
		let _res = parser.multi_option::<u8>(&["-m"]).expect("Option should attach.").mark_required();
		let _res = parser.positional::<u8>().with_metavar("NUM").mark_required();
		let _res = parser.positional::<u8>().mark_required();
		assert_eq!(
			errors(&mut parser, Vec::<String>::new()),
			vec![
				TartanError::RequiredValueNotGiven { key: "-o".to_owned() },
				TartanError::RequiredValueNotGiven { key: "-m".to_owned() },
				TartanError::RequiredValueNotGiven { key: "NUM".to_owned() },
				TartanError::RequiredValueNotGiven { key: "#2".to_owned() },
			],
		);
	}

	#[test]
	fn t_multi_option() {
		let mut parser = Parser::new();
		let opt = parser.multi_option::<u8>(&["-n"]).expect("Option should attach.");
		assert!(parser.parse(["-n", "1", "-n", "2", "-n", "3"]).is_ok());
		assert_eq!(*opt.values(), [1, 2, 3]);
	}

	#[test]
	fn t_missing_value() {
		let mut parser = Parser::new();
		let opt = parser.option::<u8>(&["-n"]).expect("Option should attach.");
		assert_eq!(
			errors(&mut parser, ["-n"]),
			vec![TartanError::MissingValueForOption { key: "-n".to_owned() }],
		);
		assert_eq!(opt.get(), None);
	}

	#[test]
	fn t_positional_cursor() {
		let mut parser = Parser::new();
		let p1 = parser.positional::<String>();
		let p2 = parser.positional::<String>();
		assert!(parser.parse(["a", "b"]).is_ok());
		assert_eq!(p1.get().as_deref(), Some("a"));
		assert_eq!(p2.get().as_deref(), Some("b"));

		let mut parser = Parser::new();
		let p1 = parser.positional::<String>().mark_required();
		let p2 = parser.positional::<String>().with_metavar("P2").mark_required();
		assert_eq!(
			errors(&mut parser, ["a"]),
			vec![TartanError::RequiredValueNotGiven { key: "P2".to_owned() }],
		);
		assert_eq!(p1.get().as_deref(), Some("a"));
		assert_eq!(p2.get(), None);
	}

	#[test]
	fn t_multi_positional() {
		let mut parser = Parser::new();
		let first = parser.positional::<String>();
		let rest = parser.multi_positional::<u8>();
		let never = parser.positional::<String>();
		let flag = parser.flag(&["-f"]).expect("Flag should attach.");
		assert!(parser.parse(["a", "1", "-f", "2", "3"]).is_ok());

		assert_eq!(first.get().as_deref(), Some("a"));
		assert_eq!(*rest.values(), [1, 2, 3]);
		assert_eq!(never.get(), None);
		assert!(flag.get());
	}

	#[test]
	fn t_end_to_end() {
		let string = Opt::<String>::new()
			.with_keys(["-s", "--string"])
			.mark_required()
			.with_help("A string to print.");
		let number = Opt::<i32>::new()
			.with_keys(["-n", "--number"])
			.with_default(3)
			.with_help("Number of times to print the string.");

		let mut parser = Parser::new();
		parser.attach(string.clone()).expect("Option should attach.");
		parser.attach(number.clone()).expect("Option should attach.");
		assert!(parser.parse(["-s", "hi"]).is_ok());
		assert_eq!(string.get().as_deref(), Some("hi"));
		assert_eq!(number.get(), Some(3));

		let string = Opt::<String>::new().with_keys(["-s", "--string"]).mark_required();
		let number = Opt::<i32>::new().with_keys(["-n", "--number"]).with_default(3);
		let mut parser = Parser::new();
		parser.attach(string.clone()).expect("Option should attach.");
		parser.attach(number.clone()).expect("Option should attach.");
		assert_eq!(
			errors(&mut parser, ["--number", "5"]),
			vec![TartanError::RequiredValueNotGiven { key: "-s".to_owned() }],
		);
		assert_eq!(string.get(), None);
		assert_eq!(number.get(), Some(5));
	}

	#[test]
	fn t_attach() {
		let mut parser = Parser::new();
		assert_eq!(parser.attach(Flag::new()), Err(TartanError::MissingKeys));
		assert_eq!(parser.flag(&[]).map(|_| ()), Err(TartanError::MissingKeys));
		assert_eq!(
			parser.option::<u8>(&["-o", ""]).map(|_| ()),
			Err(TartanError::MissingKeys),
		);
		assert!(parser.attach(Positional::<u8>::new()).is_ok());
		assert!(parser.attach(MultiFlag::new().with_keys(["-v"])).is_ok());

		// The rejects never made it in.
		assert_eq!(parser.keyed.len(), 1);
		assert_eq!(parser.positional.len(), 1);
	}

	#[test]
	fn t_key_value() {
		let mut parser = Parser::new();
		let opt = parser.option::<String>(&["--name"]).expect("Option should attach.");
		let flag = parser.flag(&["--flag"]).expect("Flag should attach.");

		// Empty values are values.
		assert!(parser.parse(["--name="]).is_ok());
		assert_eq!(opt.get().as_deref(), Some(""));

		// Only the first separator splits.
		assert!(parser.parse(["--name=a=b"]).is_ok());
		assert_eq!(opt.get().as_deref(), Some("a=b"));

		// Flags can't have values.
		assert_eq!(
			errors(&mut parser, ["--flag=yes"]),
			vec![TartanError::UnexpectedValueGiven {
				key: "--flag".to_owned(),
				value: "yes".to_owned(),
			}],
		);
		assert!(! flag.get());

		// Unknown keys fall through.
		assert_eq!(
			errors(&mut parser, ["--other=1"]),
			vec![TartanError::UnexpectedArgument { token: "--other=1".to_owned() }],
		);
	}

	#[test]
	fn t_key_value_config() {
		let cfg = Config::default().with_key_value_separator(":");
		let mut parser = Parser::new().with_config(cfg);
		let opt = parser.option::<u8>(&["--n"]).expect("Option should attach.");
		let pos = parser.positional::<String>();
		assert!(parser.parse(["--n:4", "--n=5"]).is_ok());
		assert_eq!(opt.get(), Some(4));
		assert_eq!(pos.get().as_deref(), Some("--n=5"));

		let mut parser = Parser::new().with_config(Config::default().with_key_value_syntax(false));
		let opt = parser.option::<u8>(&["--n"]).expect("Option should attach.");
		assert_eq!(
			errors(&mut parser, ["--n=5"]),
			vec![TartanError::UnexpectedArgument { token: "--n=5".to_owned() }],
		);
		assert_eq!(opt.get(), None);
	}

	#[test]
	fn t_packing() {
		let mut parser = Parser::new();
		let a = parser.flag(&["-a"]).expect("Flag should attach.");
		let b = parser.flag(&["-b"]).expect("Flag should attach.");
		let v = parser.multi_flag(&["-v", "--verbose"]).expect("Flag should attach.");
		let n = parser.option::<u8>(&["-n"]).expect("Option should attach.");
		let pos = parser.multi_positional::<String>();

		assert!(parser.parse(["-abvv", "-v", "-vn5", "-", "-9"]).is_ok());
		assert!(a.get());
		assert!(b.get());
		assert_eq!(v.count(), 4);
		assert_eq!(n.get(), Some(5));

		// Lone prefixes and unknown leads are positional.
		assert_eq!(*pos.values(), ["-", "-9"]);

		// An option at the end of the pack takes the next token.
		assert!(parser.parse(["-bn", "7"]).is_ok());
		assert_eq!(n.get(), Some(7));

		// Key/value syntax works at the end of a pack too.
		assert!(parser.parse(["-bn=9"]).is_ok());
		assert_eq!(n.get(), Some(9));
	}

	#[test]
	fn t_packing_missing_value() {
		let mut parser = Parser::new();
		let a = parser.flag(&["-a"]).expect("Flag should attach.");
		let n = parser.option::<u8>(&["-n"]).expect("Option should attach.");
		assert_eq!(
			errors(&mut parser, ["-an"]),
			vec![TartanError::MissingValueForOption { key: "-n".to_owned() }],
		);
		assert!(! a.get(), "Nothing in a bad pack should be applied.");
		assert_eq!(n.get(), None);

		// With key/value syntax disabled, the separator is just part of the
		// value.
		let mut parser = Parser::new().with_config(Config::default().with_key_value_syntax(false));
		let n = parser.option::<String>(&["-n"]).expect("Option should attach.");
		assert!(parser.parse(["-n=5"]).is_ok());
		assert_eq!(n.get().as_deref(), Some("=5"));
	}

	#[test]
	fn t_packing_unknown() {
		let mut parser = Parser::new();
		let a = parser.flag(&["-a"]).expect("Flag should attach.");
		assert_eq!(
			errors(&mut parser, ["-axa"]),
			vec![TartanError::UnknownPackedKey {
				key: "-x".to_owned(),
				token: "-axa".to_owned(),
			}],
		);
		assert!(! a.get(), "Nothing in a bad pack should be applied.");

		// Disabled packing.
		let mut parser = Parser::new().with_config(Config::default().with_packing(false));
		let a = parser.flag(&["-a"]).expect("Flag should attach.");
		assert_eq!(
			errors(&mut parser, ["-aa"]),
			vec![TartanError::UnexpectedArgument { token: "-aa".to_owned() }],
		);
		assert!(! a.get());

		// Custom prefix.
		let mut parser = Parser::new().with_config(Config::default().with_pack_prefix("+"));
		let a = parser.flag(&["+a"]).expect("Flag should attach.");
		let b = parser.flag(&["+b"]).expect("Flag should attach.");
		assert!(parser.parse(["+ba"]).is_ok());
		assert!(a.get());
		assert!(b.get());
	}

	#[test]
	fn t_exact_before_pack() {
		// An exact key beats packing, even if it looks packed.
		let mut parser = Parser::new();
		let a = parser.flag(&["-a"]).expect("Flag should attach.");
		let ab = parser.flag(&["-ab"]).expect("Flag should attach.");
		let b = parser.flag(&["-b"]).expect("Flag should attach.");
		assert!(parser.parse(["-ab"]).is_ok());
		assert!(ab.get());
		assert!(! a.get());
		assert!(! b.get());
	}

	#[test]
	fn t_unexpected() {
		let mut parser = Parser::new();
		let pos = parser.positional::<String>();
		assert_eq!(
			errors(&mut parser, ["one", "two", "--three"]),
			vec![
				TartanError::UnexpectedArgument { token: "two".to_owned() },
				TartanError::UnexpectedArgument { token: "--three".to_owned() },
			],
		);
		assert_eq!(pos.get().as_deref(), Some("one"));
	}

	#[test]
	fn t_leftovers() {
		let mut parser = Parser::new().with_config(Config::default().with_leftovers(true));
		let pos = parser.positional::<String>();
		assert!(parser.parse(["one", "two", "--three"]).is_ok());
		assert_eq!(pos.get().as_deref(), Some("one"));
		assert_eq!(parser.leftovers(), ["two", "--three"]);

		// A second go clears the old leftovers.
		assert!(parser.parse(["four"]).is_ok());
		assert!(parser.leftovers().is_empty());
		assert_eq!(pos.get().as_deref(), Some("four"));
	}

	#[test]
	fn t_terminator() {
		let mut parser = Parser::new().with_config(Config::default().with_terminator(Some("--")));
		let flag = parser.flag(&["-f"]).expect("Flag should attach.");
		let rest = parser.multi_positional::<String>();
		assert!(parser.parse(["-f", "a", "--", "-f", "--", "b"]).is_ok());
		assert!(flag.get());
		assert_eq!(*rest.values(), ["a", "-f", "--", "b"]);

		// Without a terminator, "--" is just another token.
		let mut parser = Parser::new();
		let rest = parser.multi_positional::<String>();
		assert!(parser.parse(["--"]).is_ok());
		assert_eq!(*rest.values(), ["--"]);
	}

	#[test]
	fn t_conversion() {
		let mut parser = Parser::new();
		let n = parser.option::<u8>(&["-n"]).expect("Option should attach.");
		let _res = parser.option::<u8>(&["-r"]).expect("Option should attach.").mark_required();
		let p = parser.positional::<u8>().with_metavar("P");

		// A bad value is reported alongside everything else.
		let errs = errors(&mut parser, ["7", "-n", "300", "8"]);
		assert_eq!(errs.len(), 3, "Unexpected errors: {errs:?}");
		let TartanError::Conversion { target, index, source } = &errs[0] else {
			panic!("Expected a conversion error: {:?}", errs[0]);
		};
		assert_eq!(target, "-n");
		assert_eq!(*index, 2);
		assert_eq!(source.raw, "300");
		assert_eq!(errs[1], TartanError::UnexpectedArgument { token: "8".to_owned() });
		assert_eq!(errs[2], TartanError::RequiredValueNotGiven { key: "-r".to_owned() });
		assert_eq!(n.get(), None);
		assert_eq!(p.get(), Some(7));

		// Positionals are named by metavar.
		let errs = errors(&mut parser, ["abc", "-r", "1"]);
		assert!(
			matches!(&errs[..], [TartanError::Conversion { target, index: 0, .. }] if target == "P"),
			"Unexpected errors: {errs:?}",
		);

		// Packed values carry the packed token's index.
		let errs = errors(&mut parser, ["1", "-nx", "-r", "2"]);
		assert!(
			matches!(&errs[..], [TartanError::Conversion { target, index: 1, .. }] if target == "-n"),
			"Unexpected errors: {errs:?}",
		);
		assert_eq!(p.get(), Some(1));
	}

	#[test]
	fn t_conversion_given() {
		let mut parser = Parser::new();
		let n = parser.option::<u8>(&["-n"]).expect("Option should attach.").mark_required();
		let p = parser.positional::<u8>().mark_required();
		let q = parser.positional::<String>();

		// A bad value still counts as given, and still moves the positional
		// cursor along.
		let errs = errors(&mut parser, ["-n", "x", "y", "z"]);
		assert!(
			matches!(
				&errs[..],
				[
					TartanError::Conversion { target: t1, index: 1, .. },
					TartanError::Conversion { target: t2, index: 2, .. },
				] if t1 == "-n" && t2 == "#1"
			),
			"Unexpected errors: {errs:?}",
		);
		assert_eq!(n.get(), None);
		assert_eq!(p.get(), None);
		assert_eq!(q.get().as_deref(), Some("z"));
	}

	#[test]
	#[should_panic(expected = "already borrowed")]
	fn t_live_view() {
		let mut parser = Parser::new();
		let m = parser.multi_option::<u8>(&["-n"]).expect("Option should attach.");
		let _view = m.values();
		let _res = parser.parse(["-n", "1"]);
	}

	#[cfg(unix)]
	#[test]
	fn t_parse_os() {
		use std::os::unix::ffi::OsStringExt;

		let mut parser = Parser::new();
		let flag = parser.flag(&["-f"]).expect("Flag should attach.");
		let pos = parser.positional::<String>();
		let bad = OsString::from_vec(vec![b'a', 0xff]);
		let errs = parser.parse_os([
			OsString::from("-f"),
			bad.clone(),
			OsString::from("b"),
		]).map_or_else(ParseErrors::into_vec, |()| Vec::new());

		assert_eq!(errs, vec![TartanError::InvalidUtf8 { index: 1, raw: bad }]);
		assert!(flag.get());
		assert_eq!(pos.get().as_deref(), Some("b"));
	}

	#[test]
	fn t_program_name() {
		let mut parser = Parser::new();
		assert_eq!(parser.program_name(), "<program>");
		parser.set_program_name(" tartan ");
		assert_eq!(parser.program_name(), "tartan");
		parser.set_program_name("");
		assert_eq!(parser.program_name(), "<program>");
	}

	#[test]
	fn t_reparse() {
		let mut parser = Parser::new();
		let opt = parser.option::<u8>(&["-o"]).expect("Option should attach.").mark_required();
		let count = parser.multi_flag(&["-c"]).expect("Flag should attach.");
		assert!(parser.parse(["-o", "1", "-c"]).is_ok());

		// Requirements are tracked per parse, but values accumulate.
		assert_eq!(
			errors(&mut parser, ["-c"]),
			vec![TartanError::RequiredValueNotGiven { key: "-o".to_owned() }],
		);
		assert_eq!(opt.get(), Some(1));
		assert_eq!(count.count(), 2);
	}
}
