/// Token kind per CSS syntax. `Custom` is synthesized by the grammar
/// layer for the opaque value of a custom property declaration.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
	Ident,
	/// Function name including the opening `(`
	Function,
	/// At-keyword including the leading `@`
	AtKeyword,
	/// Hash including the leading `#`
	Hash,
	/// String including both quotes
	String,
	BadString,
	/// The whole `url(...)` span, quoted or not
	Url,
	BadUrl,
	Number,
	/// Number including the trailing `%`
	Percentage,
	/// Number including the unit
	Dimension,
	Whitespace,
	/// Comment including `/*` and `*/`
	Comment,
	Cdo,
	Cdc,
	Colon,
	Semicolon,
	Comma,
	BracketRoundOpen,
	BracketRoundClose,
	BracketSquareOpen,
	BracketSquareClose,
	BracketCurlyOpen,
	BracketCurlyClose,
	Delim,
	Custom,
}

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Token<'a> {
	pub kind: Kind,
	pub data: &'a [u8],
}

impl<'a> Token<'a> {
	#[inline(always)]
	pub const fn new(kind: Kind, data: &'a [u8]) -> Self {
		Self { kind, data }
	}

	#[inline(always)]
	pub fn is_delim(&self, byte: u8) -> bool {
		self.kind == Kind::Delim && self.data[0] == byte
	}
}

impl<'a> std::fmt::Debug for Token<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}({})", self.kind, String::from_utf8_lossy(self.data))
	}
}
