use consts::ASCII;

pub use grammar::{Error, Event, Parser};
pub use token::{Kind, Token};

#[inline(always)]
fn is_whitespace(byte: u8) -> bool {
	matches!(byte, ASCII::SPACE | ASCII::TAB | ASCII::LF | ASCII::CR | ASCII::FF)
}

#[inline(always)]
fn is_ident_start(byte: u8) -> bool {
	matches!(byte, b'a'..=b'z' | b'A'..=b'Z' | ASCII::UNDERSCORE | ASCII::BACK_SLASH)
		|| byte >= 0x80
}

#[inline(always)]
fn is_ident_char(byte: u8) -> bool {
	matches!(byte, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | ASCII::DASH | ASCII::UNDERSCORE)
		|| byte >= 0x80
}

/// A byte level CSS tokenizer. Single pass, no lookbehind, the grammar
/// layer on top owns all context.
#[derive(Debug)]
pub struct Lexer<'a> {
	buf: &'a [u8],
	// Current position (index)
	pos: usize,
}

impl<'a> Lexer<'a> {
	#[inline]
	pub fn new(input: &'a [u8]) -> Self {
		// Step over an UTF-8 BOM, the grammar has no use for it
		let pos = if input.starts_with(&[0xef, 0xbb, 0xbf]) { 3 } else { 0 };

		Self { buf: input, pos }
	}

	#[inline(always)]
	pub fn advance(&mut self, amount: usize) {
		self.pos += amount
	}

	#[inline(always)]
	pub fn is_eof(&self) -> bool {
		self.pos >= self.buf.len()
	}

	#[inline(always)]
	pub fn pos(&self) -> usize {
		self.pos
	}

	#[inline(always)]
	fn cur(&self) -> u8 {
		debug_assert!(!self.is_eof());
		unsafe { *self.buf.get_unchecked(self.pos) }
	}

	#[inline(always)]
	fn peek(&self, ahead: usize) -> Option<u8> {
		self.buf.get(self.pos + ahead).copied()
	}

	#[inline(always)]
	fn slice(&self, start: usize) -> &'a [u8] {
		&self.buf[start..self.pos]
	}

	#[inline]
	pub fn next(&mut self) -> Option<Token<'a>> {
		if self.is_eof() {
			return None;
		}

		let start = self.pos;
		let cur = self.cur();
		let next = self.peek(1);

		let token = match cur {
			// A comment or delim token
			ASCII::FORWARD_SLASH => {
				if next == Some(ASCII::ASTERISK) {
					self.parse_comment(start)
				} else {
					self.advance(1);
					Token::new(Kind::Delim, self.slice(start))
				}
			}

			byte if is_whitespace(byte) => {
				while !self.is_eof() && is_whitespace(self.cur()) {
					self.advance(1);
				}
				Token::new(Kind::Whitespace, self.slice(start))
			}

			// A hash or delim token. Unlike names, hashes may start with a digit
			ASCII::HASH => {
				self.advance(1);

				if !self.is_eof() && (is_ident_char(self.cur()) || self.cur() == ASCII::BACK_SLASH) {
					self.consume_name();
					Token::new(Kind::Hash, self.slice(start))
				} else {
					Token::new(Kind::Delim, self.slice(start))
				}
			}

			ASCII::SINGLE_QUOTE | ASCII::DOUBLE_QUOTE => self.parse_string(start, cur),

			b'0'..=b'9' => self.parse_number(start),

			ASCII::DOT | ASCII::PLUS => {
				if matches!(next, Some(x) if x.is_ascii_digit())
					|| (cur == ASCII::PLUS
						&& next == Some(ASCII::DOT)
						&& matches!(self.peek(2), Some(x) if x.is_ascii_digit()))
				{
					self.parse_number(start)
				} else {
					self.advance(1);
					Token::new(Kind::Delim, self.slice(start))
				}
			}

			ASCII::DASH => {
				if matches!(next, Some(x) if x.is_ascii_digit())
					|| (next == Some(ASCII::DOT)
						&& matches!(self.peek(2), Some(x) if x.is_ascii_digit()))
				{
					self.parse_number(start)
				} else if next == Some(ASCII::DASH) && self.peek(2) == Some(ASCII::GT) {
					self.advance(3);
					Token::new(Kind::Cdc, self.slice(start))
				} else if matches!(next, Some(x) if is_ident_start(x) || x == ASCII::DASH) {
					self.parse_name(start)
				} else {
					self.advance(1);
					Token::new(Kind::Delim, self.slice(start))
				}
			}

			ASCII::LT => {
				if next == Some(ASCII::EXCLAMATION)
					&& self.peek(2) == Some(ASCII::DASH)
					&& self.peek(3) == Some(ASCII::DASH)
				{
					self.advance(4);
					Token::new(Kind::Cdo, self.slice(start))
				} else {
					self.advance(1);
					Token::new(Kind::Delim, self.slice(start))
				}
			}

			ASCII::AT => {
				if matches!(next, Some(x) if is_ident_start(x) || x == ASCII::DASH) {
					self.advance(1);
					self.consume_name();
					Token::new(Kind::AtKeyword, self.slice(start))
				} else {
					self.advance(1);
					Token::new(Kind::Delim, self.slice(start))
				}
			}

			byte if is_ident_start(byte) => self.parse_name(start),

			_ => {
				self.advance(1);

				let kind = match cur {
					ASCII::PAREN_OPEN => Kind::BracketRoundOpen,
					ASCII::PAREN_CLOSE => Kind::BracketRoundClose,
					ASCII::SQUARED_OPEN => Kind::BracketSquareOpen,
					ASCII::SQUARED_CLOSE => Kind::BracketSquareClose,
					ASCII::CURLY_OPEN => Kind::BracketCurlyOpen,
					ASCII::CURLY_CLOSE => Kind::BracketCurlyClose,
					ASCII::COMMA => Kind::Comma,
					ASCII::COLON => Kind::Colon,
					ASCII::SEMICOLON => Kind::Semicolon,

					// Anything else is a delim
					_ => Kind::Delim,
				};

				Token::new(kind, self.slice(start))
			}
		};

		Some(token)
	}

	#[inline]
	fn consume_name(&mut self) {
		while !self.is_eof() {
			let cur = self.cur();

			if is_ident_char(cur) {
				self.advance(1);
			} else if cur == ASCII::BACK_SLASH && self.peek(1).is_some() {
				// Escape sequences are carried through uninterpreted
				self.advance(2);
			} else {
				break;
			}
		}
	}

	#[inline]
	fn parse_name(&mut self, start: usize) -> Token<'a> {
		self.consume_name();

		if !self.is_eof() && self.cur() == ASCII::PAREN_OPEN {
			if self.slice(start).eq_ignore_ascii_case(b"url") {
				self.advance(1);
				return self.parse_url(start);
			}

			// Function token includes the opening paren
			self.advance(1);
			return Token::new(Kind::Function, self.slice(start));
		}

		Token::new(Kind::Ident, self.slice(start))
	}

	#[inline]
	fn parse_url(&mut self, start: usize) -> Token<'a> {
		while !self.is_eof() {
			match self.cur() {
				ASCII::PAREN_CLOSE => {
					self.advance(1);
					return Token::new(Kind::Url, self.slice(start));
				}
				ASCII::BACK_SLASH if self.peek(1).is_some() => self.advance(2),
				_ => self.advance(1),
			}
		}

		Token::new(Kind::BadUrl, self.slice(start))
	}

	#[inline]
	fn parse_number(&mut self, start: usize) -> Token<'a> {
		if matches!(self.cur(), ASCII::DASH | ASCII::PLUS) {
			self.advance(1);
		}

		while !self.is_eof() && self.cur().is_ascii_digit() {
			self.advance(1);
		}

		if !self.is_eof()
			&& self.cur() == ASCII::DOT
			&& matches!(self.peek(1), Some(x) if x.is_ascii_digit())
		{
			self.advance(1);
			while !self.is_eof() && self.cur().is_ascii_digit() {
				self.advance(1);
			}
		}

		// Exponent only when followed by a digit, otherwise `5em` would eat `e`
		if matches!(self.cur_or_nul(), b'e' | b'E') {
			let sign = matches!(self.peek(1), Some(ASCII::PLUS | ASCII::DASH));
			let digit = self.peek(1 + sign as usize);

			if matches!(digit, Some(x) if x.is_ascii_digit()) {
				self.advance(2 + sign as usize);
				while !self.is_eof() && self.cur().is_ascii_digit() {
					self.advance(1);
				}
			}
		}

		if self.cur_or_nul() == ASCII::PERCENTAGE {
			self.advance(1);
			return Token::new(Kind::Percentage, self.slice(start));
		}

		let unit = self.cur_or_nul();
		if is_ident_start(unit) || (unit == ASCII::DASH && matches!(self.peek(1), Some(x) if is_ident_start(x) || x == ASCII::DASH))
		{
			self.consume_name();
			return Token::new(Kind::Dimension, self.slice(start));
		}

		Token::new(Kind::Number, self.slice(start))
	}

	#[inline(always)]
	fn cur_or_nul(&self) -> u8 {
		if self.is_eof() {
			0
		} else {
			self.cur()
		}
	}

	#[inline]
	fn parse_string(&mut self, start: usize, quote: u8) -> Token<'a> {
		// Step over opening quote
		self.advance(1);

		while !self.is_eof() {
			let cur = self.cur();

			if cur == quote {
				self.advance(1);
				return Token::new(Kind::String, self.slice(start));
			}

			// Unescaped newline is a parse error, the newline itself stays out
			if matches!(cur, ASCII::LF | ASCII::CR) {
				return Token::new(Kind::BadString, self.slice(start));
			}

			if cur == ASCII::BACK_SLASH && self.peek(1).is_some() {
				self.advance(1);
			}

			self.advance(1);
		}

		Token::new(Kind::BadString, self.slice(start))
	}

	#[inline]
	fn parse_comment(&mut self, start: usize) -> Token<'a> {
		// Step over comment opening seq `/*`
		self.advance(2);

		while !self.is_eof() {
			if self.cur() == ASCII::ASTERISK && self.peek(1) == Some(ASCII::FORWARD_SLASH) {
				self.advance(2);
				return Token::new(Kind::Comment, self.slice(start));
			}

			self.advance(1);
		}

		// Comment running to EOF is tolerated
		Token::new(Kind::Comment, self.slice(start))
	}
}

mod grammar;
mod token;
