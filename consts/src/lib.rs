#[allow(clippy::upper_case_acronyms)]
pub struct ASCII {}

impl ASCII {
	pub const ASTERISK: u8 = b'*';
	pub const AT: u8 = b'@';
	pub const BACK_SLASH: u8 = b'\\';
	pub const COLON: u8 = b':';
	pub const COMMA: u8 = b',';
	pub const CR: u8 = b'\r';
	pub const CURLY_CLOSE: u8 = b'}';
	pub const CURLY_OPEN: u8 = b'{';
	pub const DASH: u8 = b'-';
	pub const DOT: u8 = b'.';
	pub const DOUBLE_QUOTE: u8 = b'"';
	pub const EQUALS: u8 = b'=';
	pub const EXCLAMATION: u8 = b'!';
	pub const FF: u8 = 0x0c;
	pub const FORWARD_SLASH: u8 = b'/';
	pub const GT: u8 = b'>';
	pub const HASH: u8 = b'#';
	pub const LF: u8 = b'\n';
	pub const LT: u8 = b'<';
	pub const PAREN_CLOSE: u8 = b')';
	pub const PAREN_OPEN: u8 = b'(';
	pub const PERCENTAGE: u8 = b'%';
	pub const PLUS: u8 = b'+';
	pub const SEMICOLON: u8 = b';';
	pub const SINGLE_QUOTE: u8 = b'\'';
	pub const SPACE: u8 = b' ';
	pub const SQUARED_CLOSE: u8 = b']';
	pub const SQUARED_OPEN: u8 = b'[';
	pub const TAB: u8 = b'\t';
	pub const UNDERSCORE: u8 = b'_';
	pub const ZERO: u8 = b'0';
}
