// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Extension trait so that text can be turned into a [`TextString`] with a method call.

use crate::TextString;

/// ```
/// use r3bl_segment::TextStringExt;
/// assert_eq!("e\u{301}x".text_string().len(), 2);
/// ```
pub trait TextStringExt {
    fn text_string(&self) -> TextString;
}

impl TextStringExt for str {
    fn text_string(&self) -> TextString { TextString::from(self) }
}

/// The code units are copied; unpaired surrogates are kept as is.
impl TextStringExt for [u16] {
    fn text_string(&self) -> TextString { TextString::new(self) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_str_and_units_agree() {
        let units: Vec<u16> = "\u{1F1EC}\u{1F1E7}!".encode_utf16().collect();
        assert_eq2!("\u{1F1EC}\u{1F1E7}!".text_string(), units.text_string());
        assert_eq2!(units.text_string().len(), 2);
    }
}
