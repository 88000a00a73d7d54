use miette::Result;

use crate::error;
use crate::runtime::MEMORY_MAX;

/// Machine-code image parsed from `.ls8` source text.
///
/// One instruction or data byte per line, written as a binary literal.
/// A `#` starts a comment which runs to the end of the line; blank and
/// comment-only lines are skipped. Bytes load at address 0, 1, 2, … in
/// file order.
pub struct Program {
    image: Vec<u8>,
}

impl Program {
    pub fn parse(src: &str) -> Result<Self> {
        let mut image = Vec::new();
        // Byte offset of the current line within `src`, for spans
        let mut offs = 0;

        for line in src.lines() {
            let code = match line.find('#') {
                Some(comment) => &line[..comment],
                None => line,
            };
            let word = code.trim();
            if word.is_empty() {
                offs += line.len() + 1;
                continue;
            }

            let start = offs + (word.as_ptr() as usize - line.as_ptr() as usize);
            let span = (start, word.len());

            let byte = match u8::from_str_radix(word, 2) {
                Ok(byte) => byte,
                Err(e) => return Err(error::load_bad_lit(span, src, e)),
            };
            if image.len() == MEMORY_MAX {
                return Err(error::load_too_long(span, src));
            }
            image.push(byte);

            offs += line.len() + 1;
        }

        Ok(Program { image })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.image
    }

    pub fn len(&self) -> usize {
        self.image.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_empty()
    }
}
