use std::borrow::Cow;

use consts::ASCII;

pub trait Helper {
	fn write_u8(&mut self, byte: u8) -> std::io::Result<()>;
}

impl<T: std::io::Write> Helper for T {
	#[inline(always)]
	fn write_u8(&mut self, byte: u8) -> std::io::Result<()> {
		self.write_all(&[byte])
	}
}

/// Lowercases without allocating when already lowercase
#[inline]
pub fn to_lower(data: &[u8]) -> Cow<[u8]> {
	if data.iter().any(u8::is_ascii_uppercase) {
		Cow::Owned(data.to_ascii_lowercase())
	} else {
		Cow::Borrowed(data)
	}
}

/// Conservative ASCII-only check whether `data` can be written as an
/// identifier without quotes or escapes
pub fn is_ident(data: &[u8]) -> bool {
	let Some(&first) = data.first() else {
		return false;
	};

	if first.is_ascii_digit() {
		return false;
	}

	if first == ASCII::DASH {
		match data.get(1) {
			Some(x) if !x.is_ascii_digit() => {}
			// Lone dash or a number
			_ => return false,
		}
	}

	data.iter().all(|&byte| {
		matches!(byte, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | ASCII::DASH | ASCII::UNDERSCORE)
	})
}

/// Whether `data` can live inside `url()` without quotes
pub fn is_url_unquoted(data: &[u8]) -> bool {
	!data.is_empty()
		&& data.iter().all(|&byte| {
			!(byte <= ASCII::SPACE
				|| byte >= 0x7f
				|| matches!(
					byte,
					ASCII::DOUBLE_QUOTE
						| ASCII::SINGLE_QUOTE
						| ASCII::PAREN_OPEN | ASCII::PAREN_CLOSE
						| ASCII::BACK_SLASH
				))
		})
}

#[inline]
pub fn trim(data: &[u8]) -> &[u8] {
	let is_ws = |byte: u8| matches!(byte, ASCII::SPACE | ASCII::TAB | ASCII::LF | ASCII::CR | ASCII::FF);

	let mut data = data;
	while let [first, rest @ ..] = data {
		if !is_ws(*first) {
			break;
		}
		data = rest;
	}
	while let [rest @ .., last] = data {
		if !is_ws(*last) {
			break;
		}
		data = rest;
	}

	data
}
