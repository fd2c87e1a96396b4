//! Line scanner: pairs each `func` declaration with its preceding comment block.
//!
//! A comment block is a run of lines starting with `// `. Any line that is
//! neither a comment nor a declaration (blank lines, function bodies) drops
//! the pending block. A declaration line does not: two adjacent declarations
//! share the block above the first one.

use crate::model::Declaration;

pub const COMMENT_MARKER: &str = "// ";
pub const DECLARATION_MARKER: &str = "func ";

/// Lazy iterator over the declarations found in a sequence of lines.
pub struct Scanner<I> {
    lines: I,
    comment: Vec<String>,
}

impl<'a, I> Scanner<I>
where
    I: Iterator<Item = &'a str>,
{
    pub fn new(lines: I) -> Self {
        Scanner {
            lines,
            comment: Vec::new(),
        }
    }
}

impl<'a, I> Iterator for Scanner<I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = Declaration;

    fn next(&mut self) -> Option<Declaration> {
        for line in self.lines.by_ref() {
            if line.starts_with(COMMENT_MARKER) {
                self.comment.push(line.to_string());
            } else if line.starts_with(DECLARATION_MARKER) {
                let comment = self
                    .comment
                    .iter()
                    .fold(String::new(), |mut acc, l| {
                        acc.push_str(l);
                        acc.push('\n');
                        acc
                    });
                return Some(Declaration {
                    line: line.trim().to_string(),
                    comment,
                });
            } else {
                self.comment.clear();
            }
        }
        None
    }
}

/// Scan a whole source text.
pub fn scan(input: &str) -> Scanner<std::str::Lines<'_>> {
    Scanner::new(input.lines())
}
