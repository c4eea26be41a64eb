use std::borrow::Cow;
use std::io::Write;

use consts::ASCII;
use tokenizer::{Event, Kind, Parser, Token};

use super::properties::{Keyword, Property};
use super::{function, shorten, shorthand};
use crate::utils::{self, Helper};
use crate::{Error, Minifier};

/// One top level unit of a declaration value. Function units carry
/// their whole raw token span in `components`.
#[derive(Debug, PartialEq)]
pub struct Value<'a> {
	pub kind: Kind,
	pub data: Cow<'a, [u8]>,
	pub components: Vec<Token<'a>>,
}

impl Value<'_> {
	#[inline(always)]
	pub fn is_delim(&self, byte: u8) -> bool {
		self.kind == Kind::Delim && self.data.first() == Some(&byte)
	}
}

pub fn run<'a, W: Write>(o: &Minifier, parser: &mut Parser<'a>, w: &mut W) -> Result<(), Error> {
	Engine { o, w, values: Vec::new() }.run(parser)
}

struct Engine<'m, 'w, 'a, W> {
	o: &'m Minifier,
	w: &'w mut W,
	// Scratch buffer, cleared between declarations
	values: Vec<Value<'a>>,
}

impl<'a, W: Write> Engine<'_, '_, 'a, W> {
	fn run(&mut self, parser: &mut Parser<'a>) -> Result<(), Error> {
		// A statement terminator is held back until the next event
		// shows the block did not end there
		let mut semicolon_queued = false;

		loop {
			let event = parser.next()?;

			match event {
				Event::End => return Ok(()),
				Event::EndAtRule | Event::EndRuleset => {
					self.w.write_u8(ASCII::CURLY_CLOSE)?;
					semicolon_queued = false;
					continue;
				}
				Event::Recoverable => {
					if semicolon_queued {
						self.w.write_u8(ASCII::SEMICOLON)?;
					}

					// Malformed declarations pass through raw
					self.w.write_all(parser.data())?;
					if matches!(parser.values().last(), Some(x) if x.kind == Kind::Semicolon) {
						semicolon_queued = true;
					}
					continue;
				}
				_ => {}
			}

			if semicolon_queued {
				self.w.write_u8(ASCII::SEMICOLON)?;
				semicolon_queued = false;
			}

			match event {
				Event::AtRule => {
					self.w.write_all(parser.data())?;
					self.at_rule_values(parser)?;
					semicolon_queued = true;
				}
				Event::BeginAtRule => {
					self.w.write_all(parser.data())?;
					for value in parser.values() {
						self.w.write_all(value.data)?;
					}
					self.w.write_u8(ASCII::CURLY_OPEN)?;
				}
				Event::QualifiedRule => {
					self.selectors(parser.values())?;
					self.w.write_u8(ASCII::COMMA)?;
				}
				Event::BeginRuleset => {
					self.selectors(parser.values())?;
					self.w.write_u8(ASCII::CURLY_OPEN)?;
				}
				Event::Declaration => {
					self.w.write_all(parser.data())?;
					self.w.write_u8(ASCII::COLON)?;
					self.declaration(parser.data(), parser.values())?;
					semicolon_queued = true;
				}
				Event::CustomProperty => {
					self.w.write_all(parser.data())?;
					self.w.write_u8(ASCII::COLON)?;
					if let Some(value) = parser.values().first() {
						self.w.write_all(value.data)?;
					}
					semicolon_queued = true;
				}
				Event::Comment => self.comment(parser.data())?,
				_ => {}
			}
		}
	}

	/// At-rule prelude, with one rewrite: an `@import url(...)` sheds
	/// its `url()` wrapper, a plain string is always valid there
	fn at_rule_values(&mut self, parser: &Parser<'a>) -> std::io::Result<()> {
		let values = parser.values();

		if parser.data().eq_ignore_ascii_case(b"@import")
			&& values.len() == 2
			&& values[1].kind == Kind::Url
		{
			self.w.write_all(values[0].data)?;

			let url = values[1].data;
			let inner = utils::trim(&url[4..url.len() - 1]);
			if matches!(inner.first(), Some(&(ASCII::DOUBLE_QUOTE | ASCII::SINGLE_QUOTE))) {
				self.w.write_all(inner)?;
			} else {
				self.w.write_u8(ASCII::DOUBLE_QUOTE)?;
				self.w.write_all(inner)?;
				self.w.write_u8(ASCII::DOUBLE_QUOTE)?;
			}
			return Ok(());
		}

		for value in values {
			self.w.write_all(value.data)?;
		}
		Ok(())
	}

	/// Only `/*!` comments survive, with their interior whitespace
	/// collapsed
	fn comment(&mut self, data: &[u8]) -> std::io::Result<()> {
		if data.len() <= 5 || data[1] != ASCII::ASTERISK || data[2] != ASCII::EXCLAMATION {
			return Ok(());
		}

		self.w.write_all(&data[..3])?;

		let interior = &data[3..data.len() - 2];
		let mut out = Vec::with_capacity(interior.len());
		let mut prev_ws = false;
		for &byte in interior {
			if matches!(byte, ASCII::SPACE | ASCII::TAB | ASCII::LF | ASCII::CR | ASCII::FF) {
				if !prev_ws {
					out.push(ASCII::SPACE);
				}
				prev_ws = true;
			} else {
				out.push(byte);
				prev_ws = false;
			}
		}

		self.w.write_all(utils::trim(&out))?;
		self.w.write_all(&data[data.len() - 2..])
	}

	fn selectors(&mut self, values: &[Token]) -> std::io::Result<()> {
		let mut in_attr = false;
		let mut is_class = false;

		for value in values {
			if !in_attr {
				match value.kind {
					Kind::Ident => {
						// Class and id names are case-sensitive, type
						// and pseudo selectors are not
						if is_class {
							is_class = false;
							self.w.write_all(value.data)?;
						} else {
							self.w.write_all(&utils::to_lower(value.data))?;
						}
						continue;
					}
					Kind::Delim if value.data[0] == ASCII::DOT => is_class = true,
					Kind::BracketSquareOpen => in_attr = true,
					_ => {}
				}
			} else if value.kind == Kind::String && value.data.len() > 2 {
				let inner = &value.data[1..value.data.len() - 1];
				if utils::is_ident(inner) {
					self.w.write_all(inner)?;
					continue;
				}
			} else if value.kind == Kind::BracketSquareClose {
				in_attr = false;
			}

			self.w.write_all(value.data)?;
		}

		Ok(())
	}

	fn declaration(&mut self, property: &[u8], components: &[Token<'a>]) -> std::io::Result<()> {
		if components.is_empty() {
			return Ok(());
		}

		let mut components = components;
		let mut important = false;
		let n = components.len();
		if n > 2
			&& components[n - 2].is_delim(ASCII::EXCLAMATION)
			&& Keyword::from_bytes(components[n - 1].data) == Keyword::Important
		{
			components = &components[..n - 2];
			important = true;
		}

		let prop = Property::from_bytes(property);

		let mut values = std::mem::take(&mut self.values);
		values.clear();

		// A simple value is an alternation of atoms and separators,
		// anything with bare brackets or adjacent atoms passes through
		let mut simple = true;
		let mut prev_sep = true;
		let mut i = 0;
		while i < components.len() {
			let comp = components[i];

			if matches!(
				comp.kind,
				Kind::BracketRoundOpen
					| Kind::BracketRoundClose
					| Kind::BracketSquareOpen
					| Kind::BracketSquareClose
					| Kind::BracketCurlyOpen
					| Kind::BracketCurlyClose
			) {
				simple = false;
				break;
			}

			let is_sep = comp.kind == Kind::Whitespace
				|| comp.kind == Kind::Comma
				|| comp.is_delim(ASCII::FORWARD_SLASH);

			if !prev_sep && !is_sep {
				simple = false;
				break;
			}

			if is_sep {
				prev_sep = true;
				if comp.kind != Kind::Whitespace {
					values.push(Value {
						kind: comp.kind,
						data: Cow::Borrowed(comp.data),
						components: Vec::new(),
					});
				}
				i += 1;
			} else if comp.kind == Kind::Function {
				// Absorb the whole span up to the matching close into
				// one opaque unit
				prev_sep = false;
				let mut j = i + 1;
				let mut level = 0usize;
				while j < components.len() {
					match components[j].kind {
						Kind::Function | Kind::BracketRoundOpen => level += 1,
						Kind::BracketRoundClose if level == 0 => {
							j += 1;
							break;
						}
						Kind::BracketRoundClose => level -= 1,
						_ => {}
					}
					j += 1;
				}
				values.push(Value {
					kind: comp.kind,
					data: Cow::Borrowed(comp.data),
					components: components[i..j].to_vec(),
				});
				i = j;
			} else {
				prev_sep = false;
				let (kind, data) = shorten::token(self.o, prop, comp.kind, comp.data);
				values.push(Value { kind, data, components: Vec::new() });
				i += 1;
			}
		}

		if !simple {
			self.values = values;
			return self.complex(prop, components, important);
		}

		if !values.is_empty() {
			shorthand::apply(prop, &mut values);
		}

		let mut prev_sep = true;
		for value in &values {
			// Commas and slashes bind tightly, everything else gets a
			// single space between units
			if !prev_sep && value.kind != Kind::Comma && !value.is_delim(ASCII::FORWARD_SLASH) {
				self.w.write_u8(ASCII::SPACE)?;
			}

			if value.kind == Kind::Function {
				function::write(self.o, &mut *self.w, &value.components)?;
			} else {
				self.w.write_all(&value.data)?;
			}

			prev_sep = value.kind == Kind::Comma || value.is_delim(ASCII::FORWARD_SLASH);
		}

		if important {
			self.w.write_all(b"!important")?;
		}

		self.values = values;
		Ok(())
	}

	fn complex(
		&mut self,
		prop: Property,
		components: &[Token<'a>],
		important: bool,
	) -> std::io::Result<()> {
		if prop == Property::Filter && components.len() == 11 && is_legacy_alpha(components) {
			self.w.write_all(b"alpha(")?;
			self.w.write_all(&utils::to_lower(components[7].data))?;
			for comp in &components[8..] {
				self.w.write_all(comp.data)?;
			}
		} else {
			for comp in components {
				self.w.write_all(comp.data)?;
			}
		}

		if important {
			self.w.write_all(b"!important")?;
		}
		Ok(())
	}
}

/// The old IE `progid:DXImageTransform.Microsoft.Alpha(Opacity=..)`
/// pattern, always exactly eleven tokens
fn is_legacy_alpha(c: &[Token]) -> bool {
	c[0].data == b"progid"
		&& c[1].kind == Kind::Colon
		&& c[2].data == b"DXImageTransform"
		&& c[3].is_delim(ASCII::DOT)
		&& c[4].data == b"Microsoft"
		&& c[5].is_delim(ASCII::DOT)
		&& c[6].data == b"Alpha("
		&& c[7].data.eq_ignore_ascii_case(b"opacity")
		&& c[8].is_delim(ASCII::EQUALS)
		&& c[10].kind == Kind::BracketRoundClose
}
