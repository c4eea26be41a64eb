macro_rules! name_table {
	($(#[$meta: meta])* $name: ident { $($variant: ident => $repr: literal,)* }) => {
		$(#[$meta])*
		#[non_exhaustive]
		#[derive(Clone, Copy, Debug, Eq, PartialEq)]
		pub enum $name {
			$($variant,)*
			Unknown,
		}

		impl $name {
			/// Case-insensitive lookup, anything not in the table maps
			/// to [`Self::Unknown`]
			pub fn from_bytes(name: &[u8]) -> Self {
				let mut buf = [0u8; 24];

				let Some(buf) = buf.get_mut(..name.len()) else {
					return Self::Unknown;
				};
				buf.copy_from_slice(name);
				buf.make_ascii_lowercase();

				match &*buf {
					$($repr => Self::$variant,)*
					_ => Self::Unknown,
				}
			}
		}
	};
}

name_table! {
	/// Properties with shorthand or grammar specific handling. Anything
	/// else gets generic token level shortening only.
	Property {
		Background => b"background",
		Border => b"border",
		BorderBottom => b"border-bottom",
		BorderLeft => b"border-left",
		BorderRight => b"border-right",
		BorderTop => b"border-top",
		BorderWidth => b"border-width",
		BoxShadow => b"box-shadow",
		CounterIncrement => b"counter-increment",
		CounterReset => b"counter-reset",
		Filter => b"filter",
		Flex => b"flex",
		Font => b"font",
		FontFamily => b"font-family",
		FontWeight => b"font-weight",
		Margin => b"margin",
		MsFilter => b"-ms-filter",
		Orphans => b"orphans",
		Outline => b"outline",
		Padding => b"padding",
		Widows => b"widows",
		ZIndex => b"z-index",
	}
}

impl Property {
	/// Properties whose grammar takes integers, numeric reformatting
	/// would be wasted work at best
	#[inline]
	pub fn is_integer(self) -> bool {
		matches!(
			self,
			Self::ZIndex | Self::CounterIncrement | Self::CounterReset | Self::Orphans | Self::Widows
		)
	}
}

name_table! {
	/// Value keywords the shorthand rules care about
	Keyword {
		Bold => b"bold",
		Important => b"important",
		Inherit => b"inherit",
		Initial => b"initial",
		Large => b"large",
		Larger => b"larger",
		Medium => b"medium",
		None => b"none",
		Normal => b"normal",
		Small => b"small",
		Smaller => b"smaller",
		Unset => b"unset",
		XLarge => b"x-large",
		XSmall => b"x-small",
		XxLarge => b"xx-large",
		XxSmall => b"xx-small",
	}
}

impl Keyword {
	/// Keywords that can only belong to the font-size slot of the
	/// `font` shorthand
	#[inline]
	pub fn is_font_size(self) -> bool {
		matches!(
			self,
			Self::XxSmall
				| Self::XSmall | Self::Small
				| Self::Medium | Self::Large
				| Self::XLarge | Self::XxLarge
				| Self::Smaller | Self::Larger
				| Self::Inherit | Self::Initial
				| Self::Unset
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookups() {
		assert_eq!(Property::from_bytes(b"margin"), Property::Margin);
		assert_eq!(Property::from_bytes(b"MARGIN"), Property::Margin);
		assert_eq!(Property::from_bytes(b"-ms-filter"), Property::MsFilter);
		assert_eq!(Property::from_bytes(b"unknown-thing"), Property::Unknown);
		assert_eq!(Property::from_bytes(b"a-very-long-property-name-indeed"), Property::Unknown);

		assert_eq!(Keyword::from_bytes(b"Bold"), Keyword::Bold);
		assert_eq!(Keyword::from_bytes(b"xx-large"), Keyword::XxLarge);
	}
}
