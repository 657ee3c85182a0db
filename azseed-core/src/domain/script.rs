// azseed-core/src/domain/script.rs

/// Keyword of console-output directives that are never sent to the server.
pub const PRINT_DIRECTIVE: &str = "PRINT";

/// Splits raw SQL text into executable statements.
///
/// The split is purely lexical on `;`: a semicolon inside a string literal
/// or a comment also ends the statement. Seed files are written against this
/// behavior, so it must not be made smarter.
///
/// Fragments are trimmed; blank ones and `PRINT` directives are dropped.
/// Source order is preserved.
pub fn split_statements(text: &str) -> Vec<String> {
    fragments(text)
        .filter(|fragment| !is_print_directive(fragment))
        .map(str::to_string)
        .collect()
}

fn fragments(text: &str) -> impl Iterator<Item = &str> {
    text.split(';')
        .map(|s| s.trim_matches(is_blank))
        .filter(|s| !s.is_empty())
}

/// Unicode whitespace plus the ASCII separators `0x1C..=0x1F`.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_print_directive(fragment: &str) -> bool {
    fragment.to_uppercase().starts_with(PRINT_DIRECTIVE)
}

/// A parsed seed file, with the figures shown by `azseed inspect`.
#[derive(Debug, Clone)]
pub struct SeedScript {
    pub statements: Vec<String>,
    pub line_count: usize,
    pub skipped_directives: usize,
}

impl SeedScript {
    pub fn parse(text: &str) -> Self {
        let statements = split_statements(text);
        let skipped_directives = fragments(text).filter(|f| is_print_directive(f)).count();

        Self {
            statements,
            line_count: text.split('\n').count(),
            skipped_directives,
        }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
