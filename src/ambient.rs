/*!
# Tartan: Ambient Parser.

This module provides a default [`Parser`] and free functions wrapping it,
for small programs that would rather not pass a parser around.

The parser is created on first use and lives for the rest of the thread.
(Declaration handles are not thread-safe, so neither is the parser; each
thread gets its own.)

This is purely a convenience. Nothing else in the crate uses it.

## Examples

```no_run
let string = tartan::ambient::option::<String>(&["-s", "--string"])
    .unwrap()
    .mark_required()
    .with_help("A string to print.");
let number = tartan::ambient::option::<usize>(&["-n", "--number"])
    .unwrap()
    .with_default(3)
    .with_help("The number of times to print it.");

if let Err(e) = tartan::ambient::parse_env() {
    eprintln!("{e}");
    std::process::exit(e.exit_code());
}

for _ in 0..number.get().unwrap_or_default() {
    println!("{}", string.get().unwrap_or_default());
}
```
*/

use crate::{
	Config,
	Declaration,
	Flag,
	MultiFlag,
	MultiOpt,
	MultiPositional,
	Opt,
	ParseErrors,
	Parser,
	Positional,
	TartanError,
};
use std::{
	cell::RefCell,
	fmt,
	io,
	str::FromStr,
};



thread_local! {
	/// # Default Parser.
	static PARSER: RefCell<Parser> = RefCell::new(Parser::new());
}



/// # With Parser.
///
/// Run a callback against the default parser.
///
/// ## Panics
///
/// This will panic if called re-entrantly from within the callback.
pub fn with_parser<F, R>(cb: F) -> R
where F: FnOnce(&mut Parser) -> R {
	PARSER.with(|p| cb(&mut p.borrow_mut()))
}

/// # Configure.
///
/// Replace the default parser's configuration.
pub fn configure(config: Config) { with_parser(|p| p.set_config(config)); }

/// # Attach.
///
/// ## Errors
///
/// See [`Parser::attach`].
pub fn attach<D: Declaration>(decl: D) -> Result<(), TartanError> {
	with_parser(|p| p.attach(decl))
}

/// # New Flag.
///
/// ## Errors
///
/// See [`Parser::attach`].
pub fn flag(keys: &[&str]) -> Result<Flag, TartanError> {
	with_parser(|p| p.flag(keys))
}

/// # New Multi Flag.
///
/// ## Errors
///
/// See [`Parser::attach`].
pub fn multi_flag(keys: &[&str]) -> Result<MultiFlag, TartanError> {
	with_parser(|p| p.multi_flag(keys))
}

/// # New Option.
///
/// ## Errors
///
/// See [`Parser::attach`].
pub fn option<T>(keys: &[&str]) -> Result<Opt<T>, TartanError>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	with_parser(|p| p.option(keys))
}

/// # New Multi Option.
///
/// ## Errors
///
/// See [`Parser::attach`].
pub fn multi_option<T>(keys: &[&str]) -> Result<MultiOpt<T>, TartanError>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	with_parser(|p| p.multi_option(keys))
}

#[must_use]
/// # New Positional.
pub fn positional<T>() -> Positional<T>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	with_parser(Parser::positional)
}

#[must_use]
/// # New Multi Positional.
pub fn multi_positional<T>() -> MultiPositional<T>
where T: FromStr + 'static, <T as FromStr>::Err: fmt::Display {
	with_parser(Parser::multi_positional)
}

/// # Parse.
///
/// ## Errors
///
/// See [`Parser::parse`].
pub fn parse<I, S>(args: I) -> Result<(), ParseErrors>
where I: IntoIterator<Item=S>, S: Into<String> {
	with_parser(|p| p.parse(args))
}

/// # Parse Environment.
///
/// ## Errors
///
/// See [`Parser::parse`].
pub fn parse_env() -> Result<(), ParseErrors> { with_parser(Parser::parse_env) }

/// # Print Help.
///
/// ## Errors
///
/// Any errors writing to `out` are passed along.
pub fn help<W: io::Write>(out: &mut W) -> io::Result<()> {
	with_parser(|p| p.help(out))
}

#[must_use]
/// # Leftovers.
pub fn leftovers() -> Vec<String> { with_parser(|p| p.leftovers().to_vec()) }
