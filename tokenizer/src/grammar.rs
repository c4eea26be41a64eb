use consts::ASCII;

use crate::{is_whitespace, Kind, Lexer, Token};

const SPACE: &[u8] = b" ";

/// Grammar events, roughly one per top level construct. Token level
/// payload is read through [`Parser::data`] and [`Parser::values`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
	/// `data` holds the comment token verbatim
	Comment,
	/// Block-less at-rule. `data` is the keyword, `values` the prelude
	AtRule,
	BeginAtRule,
	EndAtRule,
	/// Comma separated prelude part of a ruleset, one event per selector
	QualifiedRule,
	/// Final selector of the prelude, block follows
	BeginRuleset,
	EndRuleset,
	/// `data` is the property name, `values` the value tokens
	Declaration,
	/// `data` is the `--` name, `values` a single raw [`Kind::Custom`] token
	CustomProperty,
	/// Malformed declaration. `data` is the raw source slice, `values`
	/// holds the terminating semicolon when there was one
	Recoverable,
	End,
}

pub enum Error {
	UnexpectedEof,
	UnexpectedToken(Kind, String),
	BadString,
	BadUrl,
}

impl Error {
	#[inline]
	fn unexpected(token: &Token) -> Self {
		Self::UnexpectedToken(token.kind, String::from_utf8_lossy(token.data).into_owned())
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::UnexpectedEof => f.write_str("unexpected end of input"),
			Self::UnexpectedToken(kind, data) => write!(f, "unexpected token {kind:?} ({data})"),
			Self::BadString => f.write_str("string terminated by a newline"),
			Self::BadUrl => f.write_str("unterminated url"),
		}
	}
}

impl std::fmt::Debug for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(self, f)
	}
}

impl std::error::Error for Error {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Scope {
	/// At-rule whose block holds rules (`@media`, `@supports`, ..)
	Rules,
	/// At-rule whose block holds declarations (`@font-face`, ..)
	Decls,
	Ruleset,
}

/// Whitespace policy differs per construct, see [`Parser::push`]
#[derive(Clone, Copy, Eq, PartialEq)]
enum Ctx {
	AtPrelude,
	Selector,
	Value,
}

/// Event based CSS grammar parser on top of [`Lexer`]. Whitespace runs
/// and comments inside preludes and values are collapsed to a single
/// space and dropped where the serialization does not need them, so
/// consumers never see two adjacent separators.
pub struct Parser<'a> {
	lexer: Lexer<'a>,
	src: &'a [u8],
	inline: bool,
	cache: Option<Token<'a>>,
	stack: Vec<Scope>,
	// Mid qualified-rule prelude, a comma separated selector was just emitted
	prelude: bool,
	data: &'a [u8],
	values: Vec<Token<'a>>,
}

impl<'a> Parser<'a> {
	/// Parser over a full stylesheet
	#[inline]
	pub fn new(input: &'a [u8]) -> Self {
		Self {
			lexer: Lexer::new(input),
			src: input,
			inline: false,
			cache: None,
			stack: Vec::new(),
			prelude: false,
			data: b"",
			values: Vec::new(),
		}
	}

	/// Parser over a declaration list, as found in a style attribute
	#[inline]
	pub fn new_inline(input: &'a [u8]) -> Self {
		let mut parser = Self::new(input);
		parser.inline = true;
		parser
	}

	#[inline(always)]
	pub fn data(&self) -> &'a [u8] {
		self.data
	}

	#[inline(always)]
	pub fn values(&self) -> &[Token<'a>] {
		&self.values
	}

	pub fn next(&mut self) -> Result<Event, Error> {
		self.data = b"";
		self.values.clear();

		if self.prelude {
			return self.qualified_rule();
		}

		loop {
			let Some(token) = self.take() else {
				// Unclosed blocks are closed implicitly at EOF
				return Ok(match self.stack.pop() {
					Some(Scope::Ruleset) => Event::EndRuleset,
					Some(_) => Event::EndAtRule,
					None => Event::End,
				});
			};

			let decls = self.inline && self.stack.is_empty()
				|| matches!(self.stack.last(), Some(Scope::Ruleset | Scope::Decls));

			match token.kind {
				Kind::Whitespace | Kind::Semicolon => continue,
				Kind::Cdo | Kind::Cdc if !decls => continue,
				Kind::Comment => {
					self.data = token.data;
					return Ok(Event::Comment);
				}
				Kind::BracketCurlyClose => {
					return match self.stack.pop() {
						Some(Scope::Ruleset) => Ok(Event::EndRuleset),
						Some(_) => Ok(Event::EndAtRule),
						None => Err(Error::unexpected(&token)),
					};
				}
				Kind::AtKeyword => return self.at_rule(token),
				_ if decls => return self.declaration(token),
				_ => {
					self.unread(token);
					return self.qualified_rule();
				}
			}
		}
	}

	#[inline(always)]
	fn take(&mut self) -> Option<Token<'a>> {
		self.cache.take().or_else(|| self.lexer.next())
	}

	#[inline(always)]
	fn unread(&mut self, token: Token<'a>) {
		debug_assert!(self.cache.is_none());
		self.cache = Some(token);
	}

	#[inline(always)]
	fn offset_of(&self, data: &[u8]) -> usize {
		data.as_ptr() as usize - self.src.as_ptr() as usize
	}

	fn at_rule(&mut self, at: Token<'a>) -> Result<Event, Error> {
		self.data = at.data;

		let mut depth = 0usize;
		loop {
			let Some(token) = self.take() else {
				self.trim_values();
				return Ok(Event::AtRule);
			};

			match token.kind {
				Kind::Semicolon if depth == 0 => {
					self.trim_values();
					return Ok(Event::AtRule);
				}
				Kind::BracketCurlyOpen if depth == 0 => {
					self.trim_values();
					self.stack.push(scope_of(at.data));
					return Ok(Event::BeginAtRule);
				}
				Kind::BadString => return Err(Error::BadString),
				Kind::BadUrl => return Err(Error::BadUrl),
				Kind::Function | Kind::BracketRoundOpen | Kind::BracketSquareOpen => {
					depth += 1;
					self.push(token, Ctx::AtPrelude);
				}
				Kind::BracketRoundClose | Kind::BracketSquareClose => {
					depth = depth.saturating_sub(1);
					self.push(token, Ctx::AtPrelude);
				}
				_ => self.push(token, Ctx::AtPrelude),
			}
		}
	}

	fn qualified_rule(&mut self) -> Result<Event, Error> {
		self.prelude = true;

		let mut depth = 0usize;
		loop {
			let Some(token) = self.take() else {
				return Err(Error::UnexpectedEof);
			};

			match token.kind {
				Kind::Comma if depth == 0 => {
					self.trim_values();
					return Ok(Event::QualifiedRule);
				}
				Kind::BracketCurlyOpen if depth == 0 => {
					self.trim_values();
					self.prelude = false;
					self.stack.push(Scope::Ruleset);
					return Ok(Event::BeginRuleset);
				}
				Kind::Semicolon if depth == 0 => return Err(Error::unexpected(&token)),
				Kind::BadString => return Err(Error::BadString),
				Kind::BadUrl => return Err(Error::BadUrl),
				Kind::Function | Kind::BracketRoundOpen | Kind::BracketSquareOpen => {
					depth += 1;
					self.push(token, Ctx::Selector);
				}
				Kind::BracketRoundClose | Kind::BracketSquareClose => {
					depth = depth.saturating_sub(1);
					self.push(token, Ctx::Selector);
				}
				_ => self.push(token, Ctx::Selector),
			}
		}
	}

	fn declaration(&mut self, name: Token<'a>) -> Result<Event, Error> {
		let start = self.offset_of(name.data);

		if name.kind != Kind::Ident {
			return self.recover(start, Some(name));
		}

		let Some(mut token) = self.take() else {
			return self.recover(start, None);
		};
		if token.kind == Kind::Whitespace {
			match self.take() {
				Some(next) => token = next,
				None => return self.recover(start, None),
			}
		}
		if token.kind != Kind::Colon {
			return self.recover(start, Some(token));
		}

		self.data = name.data;

		if name.data.starts_with(b"--") {
			return self.custom_property();
		}

		let mut depth = 0usize;
		loop {
			let Some(token) = self.take() else {
				self.trim_values();
				return Ok(Event::Declaration);
			};

			match token.kind {
				Kind::Semicolon if depth == 0 => {
					self.trim_values();
					return Ok(Event::Declaration);
				}
				Kind::BracketCurlyClose if depth == 0 => {
					self.unread(token);
					self.trim_values();
					return Ok(Event::Declaration);
				}
				Kind::BracketCurlyOpen | Kind::BadString | Kind::BadUrl => {
					return self.recover(start, Some(token));
				}
				Kind::Function | Kind::BracketRoundOpen | Kind::BracketSquareOpen => {
					depth += 1;
					self.push(token, Ctx::Value);
				}
				Kind::BracketRoundClose | Kind::BracketSquareClose => {
					if depth == 0 {
						return self.recover(start, Some(token));
					}
					depth -= 1;
					self.push(token, Ctx::Value);
				}
				_ => self.push(token, Ctx::Value),
			}
		}
	}

	/// Custom property values are opaque, the raw source between the
	/// colon and the terminator is carried as one token
	fn custom_property(&mut self) -> Result<Event, Error> {
		let mut begin: Option<usize> = None;
		let mut depth = 0usize;

		loop {
			let Some(token) = self.take() else {
				let end = self.lexer.pos();
				self.push_custom(begin.unwrap_or(end), end);
				return Ok(Event::CustomProperty);
			};

			match token.kind {
				Kind::Semicolon if depth == 0 => {
					let end = self.offset_of(token.data);
					self.push_custom(begin.unwrap_or(end), end);
					return Ok(Event::CustomProperty);
				}
				Kind::BracketCurlyClose if depth == 0 => {
					let end = self.offset_of(token.data);
					self.push_custom(begin.unwrap_or(end), end);
					self.unread(token);
					return Ok(Event::CustomProperty);
				}
				Kind::Whitespace if begin.is_none() => continue,
				Kind::Function
				| Kind::BracketRoundOpen
				| Kind::BracketSquareOpen
				| Kind::BracketCurlyOpen => depth += 1,
				Kind::BracketRoundClose | Kind::BracketSquareClose | Kind::BracketCurlyClose => {
					depth = depth.saturating_sub(1)
				}
				_ => {}
			}

			if begin.is_none() {
				begin = Some(self.offset_of(token.data));
			}
		}
	}

	fn push_custom(&mut self, begin: usize, end: usize) {
		let mut raw = &self.src[begin..end];
		while let [head @ .., last] = raw {
			if !is_whitespace(*last) {
				break;
			}
			raw = head;
		}
		self.values.push(Token::new(Kind::Custom, raw));
	}

	/// Skips past a malformed declaration. The raw source slice becomes
	/// `data` so the consumer can pass it through untouched.
	fn recover(&mut self, start: usize, token: Option<Token<'a>>) -> Result<Event, Error> {
		self.data = b"";
		self.values.clear();

		let mut depth = 0usize;
		let mut cur = token;

		loop {
			let Some(token) = cur else {
				self.set_raw(start, self.lexer.pos());
				return Ok(Event::Recoverable);
			};

			match token.kind {
				Kind::Semicolon if depth == 0 => {
					self.set_raw(start, self.offset_of(token.data));
					self.values.push(token);
					return Ok(Event::Recoverable);
				}
				Kind::BracketCurlyClose if depth == 0 => {
					self.set_raw(start, self.offset_of(token.data));
					self.unread(token);
					return Ok(Event::Recoverable);
				}
				Kind::Function
				| Kind::BracketRoundOpen
				| Kind::BracketSquareOpen
				| Kind::BracketCurlyOpen => depth += 1,
				Kind::BracketRoundClose | Kind::BracketSquareClose | Kind::BracketCurlyClose => {
					depth = depth.saturating_sub(1)
				}
				_ => {}
			}

			cur = self.take();
		}
	}

	fn set_raw(&mut self, start: usize, end: usize) {
		let mut raw = &self.src[start..end];
		while let [head @ .., last] = raw {
			if !is_whitespace(*last) {
				break;
			}
			raw = head;
		}
		self.data = raw;
	}

	fn push(&mut self, token: Token<'a>, ctx: Ctx) {
		match token.kind {
			Kind::Whitespace | Kind::Comment => {
				let keep = match self.values.last() {
					// Leading space after the at-keyword is significant
					None => ctx == Ctx::AtPrelude,
					Some(last) => {
						!matches!(
							last.kind,
							Kind::Whitespace
								| Kind::Comma | Kind::Function
								| Kind::BracketRoundOpen
								| Kind::BracketSquareOpen
						) && !(ctx == Ctx::AtPrelude && last.kind == Kind::Colon)
							&& !(ctx == Ctx::Selector && is_combinator(last))
					}
				};

				if keep {
					self.values.push(Token::new(Kind::Whitespace, SPACE));
				}
			}
			Kind::Comma | Kind::BracketRoundClose | Kind::BracketSquareClose => {
				self.pop_ws();
				self.values.push(token);
			}
			Kind::Colon if ctx == Ctx::AtPrelude => {
				self.pop_ws();
				self.values.push(token);
			}
			Kind::Delim if ctx == Ctx::Selector && is_combinator(&token) => {
				self.pop_ws();
				self.values.push(token);
			}
			_ => self.values.push(token),
		}
	}

	#[inline]
	fn pop_ws(&mut self) {
		if matches!(self.values.last(), Some(x) if x.kind == Kind::Whitespace) {
			self.values.pop();
		}
	}

	#[inline]
	fn trim_values(&mut self) {
		self.pop_ws();
	}
}

#[inline]
fn is_combinator(token: &Token) -> bool {
	token.kind == Kind::Delim && matches!(token.data[0], ASCII::GT | ASCII::PLUS | b'~')
}

/// Whether the block of an at-rule holds rules or declarations. Vendor
/// prefixes are ignored for the lookup.
fn scope_of(keyword: &[u8]) -> Scope {
	let mut name = &keyword[1..];
	if name.starts_with(b"-") {
		if let Some(i) = name[1..].iter().position(|&byte| byte == ASCII::DASH) {
			name = &name[i + 2..];
		}
	}

	const RULES: [&[u8]; 7] = [
		b"media",
		b"supports",
		b"document",
		b"keyframes",
		b"layer",
		b"container",
		b"scope",
	];

	if RULES.iter().any(|x| name.eq_ignore_ascii_case(x)) {
		Scope::Rules
	} else {
		Scope::Decls
	}
}
