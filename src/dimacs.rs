//! DIMACS CNF parsing and emission.
//!
//! This is the external boundary adapter the spec explicitly keeps out of
//! the solver core: malformed input is surfaced here as `DimacsError`, never
//! as a solver-side failure. Ported from the teacher's line-oriented reader
//! and generalized to also detect the malformed-input cases the spec names
//! (non-integer tokens, missing terminator, literal `0` mid-clause) and to
//! emit the same shape back out.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::types::{Clause, Formula, Lit, Var};

/// Everything that can go wrong reading or re-emitting DIMACS CNF text.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("I/O error reading DIMACS input")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid literal token {token:?}")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: clause missing terminating 0")]
    MissingTerminator { line: usize },

    #[error("line {line}: literal 0 used mid-clause")]
    ZeroLiteral { line: usize },
}

/// Parses DIMACS CNF text into a `Formula` plus the highest variable index
/// observed.
///
/// # Arguments
///
/// * `reader` - Any buffered reader over DIMACS CNF text (a file, a byte
///   slice, a `Cursor`, ...).
///
/// # Returns
///
/// * `Ok((formula, max_var))` - The parsed clauses (tautologies silently
///   dropped) and the largest variable index seen across them.
/// * `Err(DimacsError)` - The input failed to read, or a line contained a
///   non-integer token, a `0` literal mid-clause, or no terminating `0`.
///
/// # Examples
///
/// ```
/// use putnam::dimacs::parse;
///
/// let input = "c a comment\np cnf 2 2\n1 -2 0\n-1 0\n";
/// let (formula, max_var) = parse(input.as_bytes()).unwrap();
/// assert_eq!(formula.len(), 2);
/// assert_eq!(max_var, 2);
/// ```
///
/// # Format details
///
/// - Lines starting with `c`, `%`, or `p` are skipped; the `p cnf <nvars>
///   <nclauses>` header's counts are informational and never checked
///   against the clauses actually read.
/// - Every other non-blank line is space-separated signed integers
///   terminated by a literal `0`.
pub fn parse<R: BufRead>(reader: R) -> Result<(Formula, Var), DimacsError> {
    let mut clauses = Vec::new();
    let mut max_var: Var = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        match line.chars().next() {
            Some('c') | Some('%') | Some('p') => continue,
            _ => {}
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut lits = Vec::with_capacity(tokens.len());
        let mut terminated = false;

        for (i, tok) in tokens.iter().enumerate() {
            let n: i64 = tok
                .parse()
                .map_err(|_| DimacsError::InvalidToken { line: line_no, token: tok.to_string() })?;
            if n == 0 {
                if i != tokens.len() - 1 {
                    return Err(DimacsError::ZeroLiteral { line: line_no });
                }
                terminated = true;
                break;
            }
            let lit = Lit::new(n as i32);
            max_var = max_var.max(lit.var());
            lits.push(lit);
        }

        if !terminated {
            return Err(DimacsError::MissingTerminator { line: line_no });
        }

        if let Some(clause) = Clause::new(lits) {
            clauses.push(clause);
        }
        // Tautological clauses are dropped silently at construction time,
        // same as any other clause-construction site in this crate.
    }

    Ok((Formula::new(clauses), max_var))
}

/// Writes `formula` back out in DIMACS shape.
///
/// # Arguments
///
/// * `formula` - The formula to serialize.
/// * `num_vars` - The variable count reported in the `p cnf` header (the
///   caller's responsibility — not re-derived from `formula`, since a
///   formula's highest-numbered variable may not have survived
///   simplification).
/// * `writer` - Any writer to emit the DIMACS text to.
///
/// # Returns
///
/// `Ok(())` once every line has been written, or the first I/O error
/// encountered.
///
/// # Examples
///
/// ```
/// use putnam::dimacs::emit;
/// use putnam::types::{Clause, Formula, Lit};
///
/// let formula = Formula::new(vec![Clause::new(vec![Lit::new(1), Lit::new(-2)]).unwrap()]);
/// let mut buf = Vec::new();
/// emit(&formula, 2, &mut buf).unwrap();
/// assert_eq!(String::from_utf8(buf).unwrap(), "p cnf 2 1\n1 -2 0\n");
/// ```
pub fn emit<W: Write>(formula: &Formula, num_vars: Var, mut writer: W) -> io::Result<()> {
    writeln!(writer, "p cnf {} {}", num_vars, formula.len())?;
    for clause in formula.iter() {
        for lit in clause.literals() {
            write!(writer, "{} ", lit.raw())?;
        }
        writeln!(writer, "0")?;
    }
    Ok(())
}
