use std::io::Write;

use tokenizer::Parser;

#[allow(clippy::upper_case_acronyms)]
pub enum Error {
	NoInput,
	EmptyInput,
	Syntax(tokenizer::Error),
	IO(std::io::Error),
}

/// Minification options. The defaults target modern CSS and keep full
/// numeric precision.
#[derive(Clone, Copy, Default)]
pub struct Minifier {
	decimals: Option<u8>,
	keep_css2: bool,
}

impl Minifier {
	pub fn new() -> Self {
		Self::default()
	}

	/// Caps fractional digits, rounding half away from zero. Also
	/// disables exponent notation, a capped number is meant to stay
	/// readable.
	pub fn decimals(mut self, decimals: u8) -> Self {
		self.decimals = Some(decimals);
		self
	}

	/// Restricts output to CSS 2 syntax: no exponent notation and no
	/// hex colors with an alpha channel
	pub fn keep_css2(mut self) -> Self {
		self.keep_css2 = true;
		self
	}

	pub fn minify<S: AsRef<[u8]>>(
		&self,
		input: S,
		output: &mut impl Write,
	) -> Result<(), Error> {
		let input = input.as_ref();

		if input.is_empty() {
			return Err(Error::EmptyInput);
		}

		css::run(self, &mut Parser::new(input), output)
	}

	/// Minifies a bare declaration list, the contents of a `style`
	/// attribute
	pub fn minify_inline<S: AsRef<[u8]>>(
		&self,
		input: S,
		output: &mut impl Write,
	) -> Result<(), Error> {
		let input = input.as_ref();

		if input.is_empty() {
			return Err(Error::EmptyInput);
		}

		css::run(self, &mut Parser::new_inline(input), output)
	}
}

pub fn minify<S: AsRef<[u8]>>(input: S, output: &mut impl Write) -> Result<(), Error> {
	Minifier::new().minify(input, output)
}

pub fn minify_inline<S: AsRef<[u8]>>(input: S, output: &mut impl Write) -> Result<(), Error> {
	Minifier::new().minify_inline(input, output)
}

impl std::process::Termination for Error {
	fn report(self) -> std::process::ExitCode {
		std::process::ExitCode::from(1)
	}
}

impl From<tokenizer::Error> for Error {
	fn from(value: tokenizer::Error) -> Self {
		Self::Syntax(value)
	}
}

impl From<std::io::Error> for Error {
	fn from(value: std::io::Error) -> Self {
		Self::IO(value)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NoInput => f.write_str("No input been provided after \"--input\" flag!"),
			Error::EmptyInput => f.write_str("Input is empty"),
			Error::Syntax(err) => write!(f, "{err}"),
			Error::IO(err) => write!(f, "{err}"),
		}
	}
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(self, f)
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Syntax(err) => Some(err),
			Error::IO(err) => Some(err),
			_ => None,
		}
	}
}

pub(crate) mod css;
mod datauri;
mod number;
mod utils;
