//! Record normalization, the first stage of the reading pipeline.
//!
//! Rewrites one raw Newick record into a form the
//! [lexer](crate::newick::lexer) can tokenize generically:
//!
//! 1. Newick comments `[...]` become block comments `/*...*/`.
//! 2. Single quotes become `"` delimiters, and doubled delimiters collapse
//!    back to a literal apostrophe (the Newick escape for `'` in a label).
//! 3. Every branch-length span, from `:` up to the next `,`, `;`, `)` or
//!    whitespace, is wrapped in `"` so it reaches the parser as one
//!    opaque token: `:47` becomes `":47"`.
//!
//! The rewrites are textual and keep their known blind spots: a `:` inside
//! a quoted label starts a length span all the same, and a quoted empty
//! label `''` turns into a stray apostrophe. Records produced by the
//! [writer](crate::newick::writer) avoid both.

/// Rewrites one raw Newick record into lexable form.
pub(crate) fn normalize(record: &str) -> String {
    let text = record
        .replace('[', "/*")
        .replace(']', "*/")
        .replace('\'', "\"")
        .replace("\"\"", "'");

    // Wrap branch-length spans in quote delimiters.
    let mut out = String::with_capacity(text.len() + 8);
    let mut in_length = false;
    for ch in text.chars() {
        if ch == ':' {
            in_length = true;
            out.push('"');
        }
        if in_length && (ch == ',' || ch == ';' || ch == ')' || ch.is_whitespace()) {
            in_length = false;
            out.push('"');
        }
        out.push(ch);
    }
    out
}

// =#========================================================================#=
// TESTS - NORMALIZE
// =#========================================================================#=
