use std::borrow::Cow;

use tokenizer::Kind;

use super::minifier::Value;
use super::properties::{Keyword, Property};
use crate::utils;

const ALPHA_PREFIX: &[u8] = b"progid:DXImageTransform.Microsoft.Alpha(Opacity=";

/// Structural shorthand simplification over an already shortened value
/// list. Never called with an empty list.
pub fn apply(prop: Property, values: &mut Vec<Value>) {
	match prop {
		Property::Font => font(values),
		Property::FontFamily => font_family(values),
		Property::FontWeight => font_weight(values),
		Property::Margin | Property::Padding | Property::BorderWidth => quad(values),
		Property::Border
		| Property::BorderBottom
		| Property::BorderLeft
		| Property::BorderRight
		| Property::BorderTop
		| Property::Outline => zero_for_none(values),
		Property::Background => background(values),
		Property::BoxShadow => box_shadow(values),
		Property::MsFilter => ms_filter(values),
		_ => {}
	}
}

fn font(values: &mut Vec<Value>) {
	if values.len() < 2 {
		return;
	}

	// The identifier before the first comma starts the font-family,
	// without a comma the family is the trailing run of names
	let mut i = values.len() as isize;
	for (j, value) in values[2..].iter().enumerate() {
		if value.kind == Kind::Comma {
			i = 2 + j as isize - 1;
			break;
		}
	}

	i -= 1;
	while i > 0 {
		let idx = i as usize;
		if values[idx - 1].is_delim(b'/') {
			break;
		}
		if values[idx].kind != Kind::Ident && values[idx].kind != Kind::String {
			break;
		}
		if values[idx].kind == Kind::Ident
			&& Keyword::from_bytes(&values[idx].data).is_font_size()
		{
			// Must belong to the font-size slot, family starts after
			break;
		}
		i -= 1;
	}

	let family_start = (i + 1) as usize;
	let mut family = values.split_off(family_start);
	font_family(&mut family);
	values.extend(family);

	if i <= 0 {
		return;
	}

	// line-height, a `/normal` pair is the default and drops entirely
	if i > 1 && values[i as usize - 1].is_delim(b'/') {
		let idx = i as usize;
		if values[idx].kind == Kind::Ident && &*values[idx].data == b"normal" {
			values.drain(idx - 1..=idx);
		}
		i -= 2;
	}

	// Skip font-size, everything below it is style/variant/weight
	i -= 1;

	while i >= 0 {
		let idx = i as usize;
		if values[idx].kind == Kind::Ident {
			match Keyword::from_bytes(&values[idx].data) {
				Keyword::Normal => {
					values.remove(idx);
				}
				Keyword::Bold => {
					values[idx].kind = Kind::Number;
					values[idx].data = Cow::Borrowed(b"700");
				}
				_ => {}
			}
		} else if values[idx].kind == Kind::Number && &*values[idx].data == b"400" {
			values.remove(idx);
		}
		i -= 1;
	}
}

fn font_family(values: &mut [Value]) {
	for value in values.iter_mut() {
		if value.kind != Kind::String || value.data.len() <= 2 {
			continue;
		}

		let lower = value.data.to_ascii_lowercase();
		let inner = &lower[1..lower.len() - 1];

		let unquote = inner
			.split(|&byte| byte == b' ')
			.all(|chunk| !chunk.is_empty() && utils::is_ident(chunk));

		value.data = Cow::Owned(if unquote { inner.to_vec() } else { lower });
	}
}

fn font_weight(values: &mut [Value]) {
	if values.len() != 1 || values[0].kind != Kind::Ident {
		return;
	}

	match Keyword::from_bytes(&values[0].data) {
		Keyword::Normal => {
			values[0].kind = Kind::Number;
			values[0].data = Cow::Borrowed(b"400");
		}
		Keyword::Bold => {
			values[0].kind = Kind::Number;
			values[0].data = Cow::Borrowed(b"700");
		}
		_ => {}
	}
}

/// Box quad collapse, opposite sides that agree fold away
fn quad(values: &mut Vec<Value>) {
	match values.len() {
		2 if values[0] == values[1] => values.truncate(1),
		3 => {
			if values[0] == values[1] && values[0] == values[2] {
				values.truncate(1);
			} else if values[0] == values[2] {
				values.truncate(2);
			}
		}
		4 => {
			if values[0] == values[1] && values[0] == values[2] && values[0] == values[3] {
				values.truncate(1);
			} else if values[0] == values[2] && values[1] == values[3] {
				values.truncate(2);
			} else if values[1] == values[3] {
				values.truncate(3);
			}
		}
		_ => {}
	}
}

/// `none` means zero width for borders and outlines. When that leaves
/// both a rewritten and a literal zero only one survives.
fn zero_for_none(values: &mut Vec<Value>) {
	let mut none = false;
	let mut zero = None;

	for (i, value) in values.iter_mut().enumerate() {
		if &*value.data == b"0" {
			if zero.is_none() {
				zero = Some(i);
			}
		} else if Keyword::from_bytes(&value.data) == Keyword::None {
			value.kind = Kind::Number;
			value.data = Cow::Borrowed(b"0");
			none = true;
		}
	}

	if none {
		if let Some(i) = zero {
			values.remove(i);
		}
	}
}

fn background(values: &mut [Value]) {
	if values.len() != 1 {
		return;
	}

	let sole = &mut values[0];
	if Keyword::from_bytes(&sole.data) == Keyword::None || &*sole.data == b"#0000" {
		sole.data = Cow::Borrowed(b"0 0");
	}
}

fn box_shadow(values: &mut Vec<Value>) {
	if values.len() == 4 && values.iter().all(|value| &*value.data == b"0") {
		values.truncate(2);
	}
}

fn ms_filter(values: &mut [Value]) {
	let first = &mut values[0];
	if first.kind != Kind::String || first.data.len() < 2 {
		return;
	}

	let inner = &first.data[1..first.data.len() - 1];
	if !inner.starts_with(ALPHA_PREFIX) {
		return;
	}

	let mut out = vec![first.data[0]];
	out.extend(b"alpha(opacity=");
	out.extend(&first.data[1 + ALPHA_PREFIX.len()..]);
	first.data = Cow::Owned(out);
}
