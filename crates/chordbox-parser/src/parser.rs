//! Parser for `{define: ...}` chord definition blocks.
//!
//! The grammar is line-oriented and whitespace-delimited:
//!
//! ```text
//! {define: NAME [base-fret N] [frets] F1 .. Fn [fingers G1 .. Gn]
//!          [add: string S fret F finger Fi]*}
//! ```
//!
//! Each `Fk` is a non-negative integer or the muted marker `x` (case
//! insensitive). The fret list may appear with or without the `frets`
//! keyword; an explicit lookahead on the keyword selects between the two
//! surface forms. The public entry points are [`parse`] for a single block
//! and [`parse_chart`] for a whitespace-separated sequence of blocks.

use log::debug;
use winnow::{
    Parser,
    combinator::{opt, preceded, repeat},
    error::{ContextError, ErrMode},
    token::take_while,
};

use chordbox_core::shape::{ChordString, Dot, MIN_FRET_SPAN};

use crate::error::FormatError;

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Description of what is currently being parsed
    Label(&'static str),
}

type Input<'src> = &'src str;
type IResult<O> = Result<O, ErrMode<ContextError<Context>>>;

/// A fully elaborated chord definition: name, base fret, and one
/// [`ChordString`] per fret-list token.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    name: String,
    base_fret: u32,
    strings: Vec<ChordString>,
}

impl Definition {
    /// The chord name, taken verbatim from the definition text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starting fret number of the shape, 1 for open-position chords.
    pub fn base_fret(&self) -> u32 {
        self.base_fret
    }

    /// The parsed shape, one entry per instrument string.
    pub fn strings(&self) -> &[ChordString] {
        &self.strings
    }

    /// Decomposes the definition for handing the shape to a diagram.
    pub fn into_parts(self) -> (String, u32, Vec<ChordString>) {
        (self.name, self.base_fret, self.strings)
    }
}

/// Definition as written in the source, before count checks and base-fret
/// normalization.
#[derive(Debug)]
struct RawDefinition {
    name: String,
    base_fret: Option<u32>,
    frets: Vec<Option<u32>>,
    fingers: Option<Vec<Option<u8>>>,
    adds: Vec<AddClause>,
}

/// One `add: string S fret F finger Fi` clause.
#[derive(Debug)]
struct AddClause {
    string: u32,
    fret: u32,
    finger: Option<u8>,
}

/// Converts a backtrack into a committed error so surrounding alternatives
/// stop retrying once a clause keyword has matched.
fn cut_err<'src, O, F>(input: &mut Input<'src>, f: F) -> IResult<O>
where
    F: FnOnce(&mut Input<'src>) -> IResult<O>,
{
    match f(input) {
        Err(ErrMode::Backtrack(e)) => Err(ErrMode::Cut(e)),
        other => other,
    }
}

/// Parse zero or more whitespace characters
fn ws0(input: &mut Input<'_>) -> IResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

/// Parse one or more whitespace characters
fn ws1(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., char::is_whitespace).void().parse_next(input)
}

/// Parse a whitespace-delimited token (anything up to whitespace or a brace)
fn word<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '{' && c != '}')
        .parse_next(input)
}

/// Parser for an exact keyword token, preceded by optional whitespace
fn keyword<'src>(
    kw: &'static str,
) -> impl Parser<Input<'src>, &'src str, ErrMode<ContextError<Context>>> {
    preceded(ws0, word.verify(move |w: &str| w == kw))
}

/// Parse a non-negative integer token
fn number(input: &mut Input<'_>) -> IResult<u32> {
    preceded(ws0, word.verify_map(|w: &str| w.parse::<u32>().ok()))
        .context(Context::Label("number"))
        .parse_next(input)
}

/// Parse a fret token: a non-negative integer or the muted marker `x`/`X`
fn fret_value(input: &mut Input<'_>) -> IResult<Option<u32>> {
    preceded(
        ws0,
        word.verify_map(|w: &str| {
            if w.eq_ignore_ascii_case("x") {
                Some(None)
            } else {
                w.parse::<u32>().ok().map(Some)
            }
        }),
    )
    .context(Context::Label("fret number or muted marker"))
    .parse_next(input)
}

/// Parse a finger token; the literal `0` means "no finger assigned"
fn finger_value(input: &mut Input<'_>) -> IResult<Option<u8>> {
    preceded(ws0, word.verify_map(|w: &str| w.parse::<u8>().ok()))
        .map(|n| if n == 0 { None } else { Some(n) })
        .context(Context::Label("finger number"))
        .parse_next(input)
}

/// Parse one `add: string S fret F finger Fi` clause
fn add_clause(input: &mut Input<'_>) -> IResult<AddClause> {
    keyword("add:").parse_next(input)?;

    // After the clause keyword, commit to parsing the whole clause
    cut_err(input, |input| {
        keyword("string")
            .context(Context::Label("string keyword in add: clause"))
            .parse_next(input)?;
        let string = number(input)?;

        keyword("fret")
            .context(Context::Label("fret keyword in add: clause"))
            .parse_next(input)?;
        let fret = number(input)?;

        let finger = match opt(keyword("finger")).parse_next(input)? {
            Some(_) => finger_value(input)?,
            None => None,
        };

        Ok(AddClause {
            string,
            fret,
            finger,
        })
    })
}

/// Parse a complete `{define: ...}` block into a [`RawDefinition`]
fn definition(input: &mut Input<'_>) -> IResult<RawDefinition> {
    preceded(ws0, '{')
        .context(Context::Label("opening brace '{'"))
        .parse_next(input)?;

    // Inside the envelope every failure is final; nothing backtracks past
    // the opening brace.
    cut_err(input, |input| {
        preceded(ws0, "define:")
            .context(Context::Label("define: directive"))
            .parse_next(input)?;

        let name = preceded(ws1, word)
            .context(Context::Label("chord name"))
            .parse_next(input)?;

        let base_fret = opt(|input: &mut Input<'_>| {
            keyword("base-fret").parse_next(input)?;
            cut_err(input, |input| {
                number
                    .verify(|n| *n >= 1)
                    .context(Context::Label("base fret of 1 or higher"))
                    .parse_next(input)
            })
        })
        .parse_next(input)?;

        // The fret list has two surface forms: with or without the `frets`
        // keyword. The lookahead here selects between them.
        opt(keyword("frets")).parse_next(input)?;

        let frets: Vec<Option<u32>> = repeat(1.., fret_value)
            .context(Context::Label("fret list"))
            .parse_next(input)?;

        let fingers = opt(|input: &mut Input<'_>| {
            keyword("fingers").parse_next(input)?;
            cut_err(input, |input| {
                repeat(1.., finger_value)
                    .context(Context::Label("finger list"))
                    .parse_next(input)
            })
        })
        .parse_next(input)?;

        let adds: Vec<AddClause> = repeat(0.., add_clause).parse_next(input)?;

        preceded(ws0, '}')
            .context(Context::Label("closing brace '}'"))
            .parse_next(input)?;

        Ok(RawDefinition {
            name: name.to_string(),
            base_fret,
            frets,
            fingers,
            adds,
        })
    })
}

/// Count checks, base-fret normalization, and shape construction.
///
/// `offset` is the byte position of the entry in the source text, used for
/// error reporting.
fn elaborate(raw: RawDefinition, offset: usize) -> Result<Definition, FormatError> {
    if let Some(fingers) = &raw.fingers {
        if fingers.len() != raw.frets.len() {
            return Err(FormatError::new(
                format!(
                    "fingers count ({}) does not match frets count ({})",
                    fingers.len(),
                    raw.frets.len()
                ),
                offset,
            ));
        }
    }

    let mut frets = raw.frets;
    let mut base_fret = raw.base_fret.unwrap_or(1);

    // A definition without base-fret whose shape does not fit the default
    // fret window is written with absolute fret numbers. Normalize it so
    // that the same physical shape always stores the same relative values:
    // the lowest fretted position becomes the base fret.
    if raw.base_fret.is_none() {
        let highest = frets.iter().flatten().copied().max().unwrap_or(0);
        let lowest = frets
            .iter()
            .flatten()
            .copied()
            .filter(|f| *f > 0)
            .min()
            .unwrap_or(1);
        if highest > MIN_FRET_SPAN && lowest > 1 {
            base_fret = lowest;
            for fret in frets.iter_mut().flatten() {
                if *fret > 0 {
                    *fret = *fret - lowest + 1;
                }
            }
        }
    }

    let mut strings: Vec<ChordString> = frets
        .iter()
        .enumerate()
        .map(|(i, fret)| {
            let finger = raw
                .fingers
                .as_ref()
                .and_then(|fingers| fingers[i]);
            ChordString::single(Dot::new(*fret, finger))
        })
        .collect();

    for add in &raw.adds {
        let index = add.string as usize;
        if add.string == 0 || index > strings.len() {
            return Err(FormatError::new(
                format!(
                    "add: clause references string {} outside range 1..={}",
                    add.string,
                    strings.len()
                ),
                offset,
            ));
        }
        strings[index - 1].push_dot(Dot::new(Some(add.fret), add.finger));
    }

    Ok(Definition {
        name: raw.name,
        base_fret,
        strings,
    })
}

/// Convert a winnow error into a [`FormatError`] with a byte offset.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    source: &str,
    remaining: usize,
) -> FormatError {
    let offset = source.len() - remaining;

    match error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => {
            let contexts: Vec<String> = e
                .context()
                .map(|Context::Label(label)| format!("expected {label}"))
                .collect();

            let message = if contexts.is_empty() {
                "unexpected token or end of input".to_string()
            } else {
                contexts.join(", ")
            };

            FormatError::new(message, offset)
        }
        // Not reachable: the input is never streamed.
        ErrMode::Incomplete(_) => FormatError::new("incomplete input", offset),
    }
}

/// Parse a single chord definition block.
///
/// Trailing whitespace is permitted; any other trailing content is a
/// [`FormatError`].
pub fn parse(source: &str) -> Result<Definition, FormatError> {
    let mut input = source;

    let raw = definition
        .parse_next(&mut input)
        .map_err(|err| convert_error(err, source, input.len()))?;

    if !input.trim_start().is_empty() {
        return Err(FormatError::new(
            "unexpected trailing content after definition",
            source.len() - input.trim_start().len(),
        ));
    }

    let def = elaborate(raw, 0)?;
    debug!(name = def.name(), strings = def.strings().len(); "parsed chord definition");
    Ok(def)
}

/// Parse a chart source: zero or more definition blocks separated by
/// arbitrary whitespace.
///
/// The first malformed entry aborts the whole parse; no partial result is
/// returned.
pub fn parse_chart(source: &str) -> Result<Vec<Definition>, FormatError> {
    let mut input = source.trim_start();
    let mut definitions = Vec::new();

    while !input.is_empty() {
        let offset = source.len() - input.len();
        let raw = definition
            .parse_next(&mut input)
            .map_err(|err| convert_error(err, source, input.len()))?;
        definitions.push(elaborate(raw, offset)?);
        input = input.trim_start();
    }

    debug!(entries = definitions.len(); "parsed chord chart source");
    Ok(definitions)
}
