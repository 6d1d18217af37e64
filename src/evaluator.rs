use crate::error::EvalError;

pub type EvalResult<T> = Result<T, EvalError>;

/// A recursive-descent evaluator for arithmetic expressions.
///
/// The evaluator works directly on the input character sequence: there is no
/// separate tokenization pass and no syntax tree. Each grammar rule is a
/// method that computes its numeric value immediately upon recognizing its
/// input, so the whole pipeline is a single left-to-right sweep.
///
/// The cursor only ever advances; the sole lookahead is the single-character
/// check that distinguishes `/` (real division) from `//` (integer
/// division). One evaluator instance serves exactly one evaluation and is
/// consumed by [`Evaluator::run`].
///
/// Grammar, lowest precedence first:
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/" | "//" | "%") factor)*
///     factor     := ("+" | "-") factor
///                 | ("(" expression ")" | number | "|" expression "|") ("^" factor)?
///     number     := (digit | ".")+
/// ```
pub struct Evaluator {
    chars: Vec<char>,
    pos:   usize,
}

impl Evaluator {
    /// Creates an evaluator positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars: source.chars().collect(),
               pos:   0, }
    }

    /// Evaluates the whole input and returns its numeric value.
    ///
    /// The input must consist of exactly one expression; anything left over
    /// after the expression has been parsed is reported as trailing input.
    /// Spaces around operators and delimiters are ignored.
    ///
    /// # Errors
    /// Returns an [`EvalError`] describing the first failure encountered.
    /// The evaluation aborts on that failure; no partial result is returned.
    pub fn run(mut self) -> EvalResult<f64> {
        let value = self.expression()?;
        self.skip_spaces();
        match self.current() {
            Some(found) => Err(EvalError::TrailingInput { found,
                                                          pos: self.pos }),
            None => Ok(value),
        }
    }

    /// Parses addition and subtraction.
    ///
    /// Handles left-associative chains of `+` and `-`.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    fn expression(&mut self) -> EvalResult<f64> {
        let mut value = self.term()?;
        loop {
            if self.eat('+') {
                value += self.term()?;
            } else if self.eat('-') {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Parses multiplication, the two division modes, and remainder.
    ///
    /// Handles left-associative chains of `*`, `/`, `//`, and `%`. After one
    /// `/` has been consumed, integer-division mode triggers only when the
    /// very next character is another `/`; the lookahead does not skip
    /// spaces, so `7 / / 2` is not integer division.
    ///
    /// Grammar: `term := factor (("*" | "/" | "//" | "%") factor)*`
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] when a divisor is (or truncates to)
    ///   zero.
    /// - Propagates any error from operand parsing.
    fn term(&mut self) -> EvalResult<f64> {
        let mut value = self.factor()?;
        loop {
            if self.eat('*') {
                value *= self.factor()?;
            } else if self.eat('/') {
                if self.current() == Some('/') {
                    self.advance();
                    let pos = self.pos;
                    value = int_divide(value, self.factor()?, pos)?;
                } else {
                    let pos = self.pos;
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(EvalError::DivisionByZero { pos });
                    }
                    value /= divisor;
                }
            } else if self.eat('%') {
                let pos = self.pos;
                value = remainder(value, self.factor()?, pos)?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Parses a signed factor: unary sign, grouping, a numeric literal, or
    /// absolute-value bars, optionally raised to a power.
    ///
    /// Unary `+` and `-` recurse into the factor rule, so `--x` is valid. A
    /// unary-signed factor returns without checking for `^`, which makes
    /// `-2^2` parse as `-(2^2)`. The exponent re-enters the factor rule,
    /// giving `^` right-associativity, and because the power is resolved
    /// entirely inside this rule it binds tighter than `*`, `/`, and `%`.
    ///
    /// Closing `)` and closing `|` are consumed when present but their
    /// absence is tolerated; the parse simply continues.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | ("(" expression ")" | number | "|" expression "|") ("^" factor)?
    /// ```
    /// # Errors
    /// - [`EvalError::UnexpectedCharacter`] when none of the alternatives
    ///   applies.
    /// - [`EvalError::UnexpectedEndOfInput`] when the input ends where a
    ///   value is required.
    /// - Propagates any error from nested expressions or literal scanning.
    fn factor(&mut self) -> EvalResult<f64> {
        if self.eat('+') {
            return self.factor();
        }
        if self.eat('-') {
            return Ok(-self.factor()?);
        }

        let mut value = if self.eat('(') {
            let inner = self.expression()?;
            self.eat(')');
            inner
        } else if self.current().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.number()?
        } else if self.eat('|') {
            let inner = self.expression()?;
            self.eat('|');
            inner.abs()
        } else {
            return Err(self.unexpected());
        };

        if self.eat('^') {
            value = value.powf(self.factor()?);
        }

        Ok(value)
    }

    /// Scans a numeric literal and converts it to `f64`.
    ///
    /// The scan consumes every digit and `.` it finds, so a token such as
    /// `1.2.3` is accepted by the scan and rejected only when the collected
    /// substring fails conversion. Both `12` and `.5` forms are accepted.
    /// Spaces are never skipped inside a literal.
    ///
    /// # Errors
    /// [`EvalError::MalformedNumber`] when the scanned substring is not a
    /// valid number.
    fn number(&mut self) -> EvalResult<f64> {
        let start = self.pos;
        while self.current().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        let literal: String = self.chars[start..self.pos].iter().collect();
        match literal.parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(EvalError::MalformedNumber { literal,
                                                       pos: start }),
        }
    }

    /// Consumes `expected` if it is the next non-space character.
    ///
    /// Spaces are skipped before the comparison, then `expected` is consumed
    /// when it matches. Returns whether the character was consumed. This is
    /// the only place the grammar tolerates whitespace.
    fn eat(&mut self, expected: char) -> bool {
        self.skip_spaces();
        if self.current() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    /// The character under the cursor, or `None` at end of input.
    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Advances the cursor by one character.
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Skips space characters only; tabs and other whitespace are not
    /// tolerated.
    fn skip_spaces(&mut self) {
        while self.current() == Some(' ') {
            self.advance();
        }
    }

    /// Builds the error for a position where no grammar rule applies.
    fn unexpected(&self) -> EvalError {
        match self.current() {
            Some(found) => EvalError::UnexpectedCharacter { found,
                                                            pos: self.pos },
            None => EvalError::UnexpectedEndOfInput { pos: self.pos },
        }
    }
}

/// Divides two values in integer mode.
///
/// Both operands are truncated toward zero before dividing, and the integer
/// quotient is reinterpreted as `f64`. The quotient wraps on overflow, so
/// dividing the minimum representable integer by `-1` yields the minimum
/// value back rather than aborting.
///
/// # Errors
/// [`EvalError::DivisionByZero`] when the divisor truncates to zero.
#[allow(clippy::cast_precision_loss)]
fn int_divide(lhs: f64, rhs: f64, pos: usize) -> EvalResult<f64> {
    let divisor = truncate(rhs);
    if divisor == 0 {
        return Err(EvalError::DivisionByZero { pos });
    }
    Ok(truncate(lhs).wrapping_div(divisor) as f64)
}

/// Computes the integer remainder of two values.
///
/// Both operands are truncated toward zero first; the remainder carries the
/// sign of the dividend and is reinterpreted as `f64`. Like [`int_divide`],
/// the computation wraps on overflow.
///
/// # Errors
/// [`EvalError::DivisionByZero`] when the divisor truncates to zero.
#[allow(clippy::cast_precision_loss)]
fn remainder(lhs: f64, rhs: f64, pos: usize) -> EvalResult<f64> {
    let divisor = truncate(rhs);
    if divisor == 0 {
        return Err(EvalError::DivisionByZero { pos });
    }
    Ok(truncate(lhs).wrapping_rem(divisor) as f64)
}

/// Truncates a value toward zero, dropping its fractional part.
#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> i64 {
    value as i64
}
