/*!
# Tartan: Help Screen.
*/

use crate::{
	ArgumentAdapter,
	KeyAdapter,
};
use std::{
	fmt::Write as _,
	io,
};
use super::Parser;



impl Parser {
	/// # Print Help.
	///
	/// Write a usage line followed by lists of the options and positional
	/// arguments. Optional entries are bracketed in the usage line.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::Parser;
	///
	/// let mut parser = Parser::new().with_program_name("greet");
	/// let verbose = parser.flag(&["-v", "--verbose"]).unwrap().with_help("Say more.");
	/// let name = parser.option::<String>(&["-n", "--name"]).unwrap().mark_required();
	///
	/// let mut out = Vec::new();
	/// parser.help(&mut out).unwrap();
	/// assert!(out.starts_with(b"usage: greet [-v] -n NAME\n"));
	/// ```
	///
	/// ## Errors
	///
	/// Any errors writing to `out` are passed along.
	pub fn help<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
		out.write_all(self.help_text().as_bytes())
	}

	#[must_use]
	/// # Help Text.
	///
	/// Return the help screen as a string.
	pub fn help_text(&self) -> String {
		let mut out = String::new();

		// The usage line.
		out.push_str("usage: ");
		out.push_str(&self.program_name);
		for e in &self.keyed {
			let a = e.adapter.as_ref();
			let mut entry = a.first_key();
			if a.has_argument() {
				entry.push(' ');
				entry.push_str(&key_metavar(a));
			}
			push_usage(&mut out, &entry, a.is_required());
		}
		for e in &self.positional {
			push_usage(&mut out, &positional_metavar(e.adapter.as_ref()), e.adapter.is_required());
		}
		out.push('\n');

		// Options.
		if ! self.keyed.is_empty() {
			let rows: Vec<(String, String)> = self.keyed.iter()
				.map(|e| {
					let a = e.adapter.as_ref();
					let mut left = a.keys().join(", ");
					if a.has_argument() {
						left.push(' ');
						left.push_str(&key_metavar(a));
					}
					(left, a.help())
				})
				.collect();
			out.push_str("\nOptions:\n");
			push_rows(&mut out, &rows);
		}

		// Positionals.
		if ! self.positional.is_empty() {
			let rows: Vec<(String, String)> = self.positional.iter()
				.map(|e| (positional_metavar(e.adapter.as_ref()), e.adapter.help()))
				.collect();
			out.push_str("\nPositional arguments:\n");
			push_rows(&mut out, &rows);
		}

		out
	}
}



/// # Key Metavar.
///
/// Use the declared metavar, or derive one from the longest key, e.g.
/// `--out-dir` becomes `OUT_DIR`.
fn key_metavar(adapter: &dyn KeyAdapter) -> String {
	let metavar = adapter.metavar();
	if ! metavar.is_empty() { return metavar; }

	let keys = adapter.keys();
	let name = keys.iter()
		.max_by_key(|k| k.len())
		.map_or("", |k| k.trim_start_matches('-'));
	if name.len() < 2 { "VALUE".to_owned() }
	else { name.to_ascii_uppercase().replace('-', "_") }
}

/// # Positional Metavar.
///
/// Multi positionals are suffixed with an ellipsis.
fn positional_metavar(adapter: &dyn ArgumentAdapter) -> String {
	let mut metavar = adapter.metavar();
	if metavar.is_empty() { metavar.push_str("ARG"); }
	if adapter.multi() { metavar.push_str("..."); }
	metavar
}

/// # Push Usage Entry.
fn push_usage(out: &mut String, entry: &str, required: bool) {
	if required { let _res = write!(out, " {entry}"); }
	else { let _res = write!(out, " [{entry}]"); }
}

/// # Push Rows.
///
/// Write the two-column list, lining up the help text.
fn push_rows(out: &mut String, rows: &[(String, String)]) {
	let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
	for (left, help) in rows {
		if help.is_empty() { let _res = writeln!(out, "  {left}"); }
		else { let _res = writeln!(out, "  {left:width$}  {help}"); }
	}
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_help() {
		let mut parser = Parser::new().with_program_name("demo");
		let _res = parser.flag(&["-v", "--verbose"])
			.expect("Flag should attach.")
			.with_help("Be loud.");
		let _res = parser.option::<u8>(&["-n", "--number"])
			.expect("Option should attach.")
			.with_help("How many.");
		let _res = parser.option::<String>(&["-s"])
			.expect("Option should attach.")
			.with_metavar("STR")
			.mark_required();
		let _res = parser.positional::<String>()
			.with_metavar("SRC")
			.mark_required()
			.with_help("The source.");
		let _res = parser.multi_positional::<String>();

		assert_eq!(
			parser.help_text(),
			concat!(
				"usage: demo [-v] [-n NUMBER] -s STR SRC [ARG...]\n",
				"\n",
				"Options:\n",
				"  -v, --verbose        Be loud.\n",
				"  -n, --number NUMBER  How many.\n",
				"  -s STR\n",
				"\n",
				"Positional arguments:\n",
				"  SRC     The source.\n",
				"  ARG...\n",
			),
		);
	}

	#[test]
	fn t_help_empty() {
		let parser = Parser::new();
		assert_eq!(parser.help_text(), "usage: <program>\n");

		let mut out = Vec::new();
		parser.help(&mut out).expect("Writing to a Vec should work.");
		assert_eq!(out, b"usage: <program>\n");
	}

	#[test]
	fn t_key_metavar() {
		let mut parser = Parser::new();
		let _res = parser.option::<String>(&["-o", "--out-dir"]).expect("Option should attach.");
		let _res = parser.option::<String>(&["-x"]).expect("Option should attach.");
		assert!(parser.help_text().starts_with("usage: <program> [-o OUT_DIR] [-x VALUE]\n"));
	}
}
