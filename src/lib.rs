/*!
# Tartan

This crate provides a small, declaration-first CLI argument parser. You
declare typed flags, options, and positional values up front, hand the raw
arguments to a [`Parser`], and read the results straight out of the
declarations you kept.

It sits somewhere between [argyle](https://crates.io/crates/argyle)'s "here
are the pieces, good luck" and full-service crates like
[clap](https://crates.io/crates/clap).

## Declarations

| Type | Keys | Values | Read With |
| ---- | ---- | ------ | --------- |
| [`Flag`] | Y | 0 | [`Flag::get`] |
| [`MultiFlag`] | Y | 0 (counted) | [`MultiFlag::count`] |
| [`Opt<T>`](Opt) | Y | 1 | [`Opt::get`] |
| [`MultiOpt<T>`](MultiOpt) | Y | 0+ | [`MultiOpt::values`] |
| [`Positional<T>`](Positional) | N | 1 | [`Positional::get`] |
| [`MultiPositional<T>`](MultiPositional) | N | 0+ | [`MultiPositional::values`] |

Declarations are cheap handles to shared storage. Cloning one gives you
another view of the _same_ data, which is how the parser's writes reach the
copy you're holding.

Values can be any type implementing [`FromStr`](std::str::FromStr). Tokens
are converted in full; `"12abc"` is not a valid `u32`, and the parser will
say so rather than quietly reading `12`.

## Syntax

Given an option with the keys `-n` and `--number`, the following are
equivalent:
* `-n 5`; `-n=5`; `-n5`;
* `--number 5`; `--number=5`;

Single-character flags can be packed together behind one dash, so `-abc` is
the same as `-a -b -c`. See [`Parser`] for the full resolution rules, and
[`Config`] for the knobs.

## Crate Features

| Feature | Description | Default |
| ------- | ----------- | ------- |
| `ambient` | Enable the [`ambient`] module's per-thread default parser. | N |

## Example

```
use tartan::Parser;

let mut parser = Parser::new();
let verbose = parser.multi_flag(&["-v", "--verbose"]).unwrap()
    .with_help("Print more. Repeat for even more.");
let threads = parser.option::<usize>(&["-t", "--threads"]).unwrap()
    .with_default(4)
    .with_help("The number of threads.");
let paths = parser.multi_positional::<std::path::PathBuf>()
    .with_metavar("PATH")
    .mark_required();

// Normally you'd use parser.parse_env().
if let Err(e) = parser.parse(["-vv", "--threads=8", "/foo", "/bar"]) {
    eprintln!("{e}");
    eprintln!("{}", parser.help_text());
    std::process::exit(e.exit_code());
}

assert_eq!(verbose.count(), 2);
assert_eq!(threads.get(), Some(8));
assert_eq!(paths.len(), 2);
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod adapter;
mod decl;
mod error;
mod parser;

#[cfg(feature = "ambient")]
#[cfg_attr(docsrs, doc(cfg(feature = "ambient")))]
pub mod ambient;

pub use adapter::{
	Adapter,
	ArgumentAdapter,
	Declaration,
	KeyAdapter,
};
pub use decl::{
	Flag,
	MultiFlag,
	MultiOpt,
	MultiPositional,
	Opt,
	Positional,
};
pub use error::{
	ConversionError,
	ParseErrors,
	TartanError,
};
pub use parser::{
	Config,
	Parser,
};
