use std::cell::OnceCell;
use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use crate::token::Token;

use super::state::{InputState, ParseFailure, ParseResult, Parser};

type ParserFn<T> = Rc<dyn Fn(InputState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

/// A parser is a state-transition function from input to outcome, paired
/// with a label used for default diagnostics.
pub struct BoxedParser<T> {
    parser: ParserFn<T>,
    label: String,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
            label: self.label.clone(),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P, label: impl Into<String>) -> Self {
        BoxedParser {
            parser: Rc::new(move |input| parser.parse(input)),
            label: label.into(),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, input: InputState) -> ParseResult<T> {
        (self.parser)(input)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Monadic bind: parse self, feed the value to `f`, run the parser it
    /// returns on the remaining input. Failures of self propagate as-is.
    pub fn bind<U: 'static, F: Fn(T) -> BoxedParser<U> + 'static>(self, f: F) -> BoxedParser<U> {
        let label = self.label.clone();
        BoxedParser::new(
            move |input: InputState| {
                let (value, rest) = self.parse(input)?;
                f(value).parse(rest)
            },
            label,
        )
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        let label = format!("{} andThen {}", self.label, other.label);
        BoxedParser::new(
            move |input: InputState| {
                let (a, rest) = self.parse(input)?;
                let (b, rest) = other.parse(rest)?;
                Ok(((a, b), rest))
            },
            label,
        )
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        let label = format!("{} andThen {}", self.label, other.label);
        BoxedParser::new(
            move |input: InputState| {
                let (a, rest) = self.parse(input)?;
                let (_, rest) = other.parse(rest)?;
                Ok((a, rest))
            },
            label,
        )
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        let label = format!("{} andThen {}", self.label, other.label);
        BoxedParser::new(
            move |input: InputState| {
                let (_, rest) = self.parse(input)?;
                other.parse(rest)
            },
            label,
        )
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        let label = self.label.clone();
        BoxedParser::new(
            move |input: InputState| {
                let (value, rest) = self.parse(input)?;
                Ok((f(value), rest))
            },
            label,
        )
    }

    /// Choice: try self; if it fails, try other against the same original
    /// input. No token consumed by a failed branch leaks into the next.
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        let label = format!("{} orElse {}", self.label, other.label);
        BoxedParser::new(
            move |input: InputState| match self.parse(input.clone()) {
                Ok(ok) => Ok(ok),
                Err(_) => other.parse(input),
            },
            label,
        )
    }

    /// Relabel: identical behavior, but any failure reports `name` while
    /// keeping its low-level message and position.
    pub fn label(self, name: impl Into<String>) -> BoxedParser<T> {
        let name = name.into();
        let fail_name = name.clone();
        BoxedParser::new(
            move |input: InputState| match self.parse(input) {
                Ok(ok) => Ok(ok),
                Err(mut err) => {
                    err.label = fail_name.clone();
                    Err(err)
                }
            },
            name,
        )
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Match one token against a predicate. Failing never consumes: both the
/// end-of-input and wrong-token failures are positioned at the pre-pull
/// cursor.
pub fn satisfy<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    label: impl Into<String>,
) -> BoxedParser<Token> {
    let label = label.into();
    let fail_label = label.clone();
    BoxedParser::new(
        move |input: InputState| match input.next_token() {
            (rest, Some(tok)) if predicate(&tok) => Ok((tok, rest)),
            (_, Some(tok)) => Err(ParseFailure::new(
                fail_label.clone(),
                format!("unexpected {}", tok.describe()),
                &input,
            )),
            (_, None) => Err(ParseFailure::new(fail_label.clone(), "No more input", &input)),
        },
        label,
    )
}

/// Match one specific token by structural equality.
pub fn expect(token: Token) -> BoxedParser<Token> {
    let label = token.describe();
    satisfy(move |tok| *tok == token, label)
}

/// Always succeed with `value`, consuming nothing.
pub fn pure<T: Clone + 'static>(value: T) -> BoxedParser<T> {
    BoxedParser::new(move |input: InputState| Ok((value.clone(), input)), "pure")
}

/// Lift a binary function over two parsers run in order.
pub fn lift2<A: 'static, B: 'static, C: 'static, F: Fn(A, B) -> C + 'static>(
    f: F,
    pa: BoxedParser<A>,
    pb: BoxedParser<B>,
) -> BoxedParser<C> {
    (pa + pb) >> move |(a, b)| f(a, b)
}

/// Run every parser in order, collecting the values. An empty list
/// succeeds with an empty vector, consuming nothing.
pub fn sequence<T: 'static>(parsers: Vec<BoxedParser<T>>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(
        move |input: InputState| {
            let mut values = Vec::with_capacity(parsers.len());
            let mut rest = input;
            for parser in &parsers {
                let (value, next) = parser.parse(rest)?;
                values.push(value);
                rest = next;
            }
            Ok((values, rest))
        },
        "sequence",
    )
}

/// Left-to-right alternation; the first successful alternative wins.
///
/// Panics if `parsers` is empty — an empty choice is a construction bug,
/// not a parse failure.
pub fn choice<T: 'static>(parsers: Vec<BoxedParser<T>>) -> BoxedParser<T> {
    assert!(!parsers.is_empty(), "choice requires at least one alternative");
    let mut alternatives = parsers.into_iter();
    let first = alternatives.next().unwrap();
    alternatives.fold(first, BoxedParser::or)
}

/// Optional: parse zero or one; never fails itself.
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    let label = format!("optional {}", parser.label);
    BoxedParser::new(
        move |input: InputState| match parser.parse(input.clone()) {
            Ok((value, rest)) => Ok((Some(value), rest)),
            Err(_) => Ok((None, input)),
        },
        label,
    )
}

/// Parse `open`, then `inner`, then `close`, keeping only `inner`.
pub fn between<A: 'static, B: 'static, C: 'static>(
    open: BoxedParser<A>,
    inner: BoxedParser<B>,
    close: BoxedParser<C>,
) -> BoxedParser<B> {
    open * inner - close
}

/// Parse zero or more occurrences
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    let label = format!("many {}", parser.label);
    BoxedParser::new(
        move |input: InputState| {
            let mut results = Vec::new();
            let mut rest = input;
            loop {
                match parser.parse(rest.clone()) {
                    Ok((item, next)) => {
                        results.push(item);
                        rest = next;
                    }
                    Err(_) => break,
                }
            }
            Ok((results, rest))
        },
        label,
    )
}

/// Parse one or more occurrences
pub fn many1<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    let label = format!("many1 {}", parser.label);
    BoxedParser::new(
        move |input: InputState| {
            let (first, mut rest) = parser.parse(input)?;
            let mut results = vec![first];
            loop {
                match parser.parse(rest.clone()) {
                    Ok((item, next)) => {
                        results.push(item);
                        rest = next;
                    }
                    Err(_) => break,
                }
            }
            Ok((results, rest))
        },
        label,
    )
}

// === Forward references ===

/// Write-once slot backing a forward-declared parser.
pub struct ForwardRef<T> {
    cell: Rc<OnceCell<BoxedParser<T>>>,
    label: String,
}

impl<T> ForwardRef<T> {
    /// Install the real parser. Must happen exactly once, before the
    /// forwarding parser first runs; a second definition panics.
    pub fn define(&self, parser: BoxedParser<T>) {
        if self.cell.set(parser).is_err() {
            panic!("forward parser '{}' was defined twice", self.label);
        }
    }
}

/// A parser that delegates to whatever is later installed in the returned
/// [`ForwardRef`], enabling recursive and forward-declared grammar rules.
///
/// Running the delegating parser before `define` panics: that is a
/// construction-order bug in the grammar, not bad input.
pub fn forward<T: 'static>(label: impl Into<String>) -> (BoxedParser<T>, ForwardRef<T>) {
    let label = label.into();
    let cell: Rc<OnceCell<BoxedParser<T>>> = Rc::new(OnceCell::new());
    let slot = Rc::clone(&cell);
    let name = label.clone();
    let parser = BoxedParser::new(
        move |input: InputState| {
            let target = slot
                .get()
                .unwrap_or_else(|| panic!("forward parser '{name}' was run before being defined"));
            target.parse(input)
        },
        label.clone(),
    );
    (parser, ForwardRef { cell, label })
}
