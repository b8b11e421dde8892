//! Argument scanner: raw tokens → [`ScanOutcome`].

use crate::args::error::{ErrorCode, ErrorState};
use crate::args::marshal::marshal;
use crate::args::schema::Schema;
use crate::args::store::ValueStore;

/// Prefix that marks a token as a flag cluster.
pub const FLAG_PREFIX: char = '-';

/// Final state of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub values: ValueStore,
    /// Recognized flag occurrences, in input order. Repeats are kept.
    pub found: Vec<char>,
    /// Unschemaed flag characters, in input order.
    pub unexpected: Vec<char>,
    pub error: ErrorState,
}

impl ScanOutcome {
    pub fn is_valid(&self) -> bool {
        !self.error.is_set()
    }
}

/// Whether scanning should go on after a flag character.
enum Step {
    Continue,
    Halt,
}

/// Mutable scan state, consumed into a [`ScanOutcome`] at the end.
struct ScanContext<'a> {
    schema: &'a Schema,
    outcome: ScanOutcome,
}

impl<'a> ScanContext<'a> {
    fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            outcome: ScanOutcome {
                values: ValueStore::from_schema(schema),
                ..ScanOutcome::default()
            },
        }
    }

    /// Handle one flag character. `rest` yields the tokens after the current one.
    fn flag<'t, S>(&mut self, id: char, rest: &mut impl Iterator<Item = &'t S>) -> Step
    where
        S: AsRef<str> + 't,
    {
        let Some(kind) = self.schema.kind_of(id) else {
            tracing::debug!(id = %id, "unexpected argument");
            self.outcome.unexpected.push(id);
            self.outcome.error.latch(ErrorCode::Unexpected, id, None);
            return Step::Continue;
        };

        let parameter = if kind.consumes_parameter() {
            rest.next().map(|token| token.as_ref())
        } else {
            None
        };

        match marshal(kind, parameter) {
            Ok(value) => {
                tracing::trace!(id = %id, ?value, "flag parsed");
                let stored = self.outcome.values.set(id, value);
                debug_assert!(stored, "slot for {} does not match its declared kind", id);
                self.outcome.found.push(id);
                Step::Continue
            }
            Err(err) => {
                let code = ErrorCode::from(&err);
                let raw = parameter.map(str::to_string);
                let latched = self.outcome.error.latch(code, id, raw);
                tracing::debug!(id = %id, error = %err, latched, "value error, scan halted");
                Step::Halt
            }
        }
    }
}

/// Scan `tokens` against `schema`.
///
/// Tokens not starting with [`FLAG_PREFIX`] are skipped. Every character of
/// a flag cluster is processed in order; each value-bearing flag consumes the
/// next whole token. A missing or invalid value stops the scan; unexpected
/// characters do not. Values set before a failure are kept.
pub fn scan<S: AsRef<str>>(tokens: &[S], schema: &Schema) -> ScanOutcome {
    let mut ctx = ScanContext::new(schema);
    let mut iter = tokens.iter();

    'tokens: while let Some(token) = iter.next() {
        let Some(cluster) = token.as_ref().strip_prefix(FLAG_PREFIX) else {
            continue;
        };

        for id in cluster.chars() {
            if let Step::Halt = ctx.flag(id, &mut iter) {
                break 'tokens;
            }
        }
    }

    ctx.outcome
}
