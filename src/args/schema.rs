//! Schema compiler — schema text → flag definitions.

use thiserror::Error;

/// Value kind carried by a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// No parameter (e.g., `l`).
    Boolean,
    /// Base-10 integer parameter (e.g., `p#`).
    Integer,
    /// Free text parameter (e.g., `d*`).
    Text,
}

impl FlagKind {
    /// Map a schema element suffix to a kind.
    pub fn from_suffix(tail: &str) -> Option<Self> {
        match tail {
            "" => Some(FlagKind::Boolean),
            "#" => Some(FlagKind::Integer),
            "*" => Some(FlagKind::Text),
            _ => None,
        }
    }

    /// Schema suffix for this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            FlagKind::Boolean => "",
            FlagKind::Integer => "#",
            FlagKind::Text => "*",
        }
    }

    /// Whether the scanner must consume the following token as this flag's value.
    pub fn consumes_parameter(self) -> bool {
        !matches!(self, FlagKind::Boolean)
    }
}

/// A single compiled flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDef {
    /// Single-character identifier, case-sensitive.
    pub id: char,
    pub kind: FlagKind,
}

/// Errors raised while compiling a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Bad character: {id} in Args format {schema}")]
    InvalidIdentifier { id: char, schema: String },

    #[error("Argument {id} has invalid format : {tail}")]
    InvalidFormat { id: char, tail: String },

    #[error("Argument {id} declared as both {first:?} and {second:?}")]
    ConflictingKinds {
        id: char,
        first: FlagKind,
        second: FlagKind,
    },
}

/// Immutable, compiled schema.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    text: String,
    defs: Vec<FlagDef>,
}

impl Schema {
    /// Compile schema text such as `"l,p#,d*"`.
    ///
    /// Elements are comma separated and trimmed; empty elements are skipped.
    /// The first character of an element is the identifier and must be
    /// alphabetic; the remainder selects the kind.
    pub fn compile(text: &str) -> Result<Self, SchemaError> {
        let mut defs: Vec<FlagDef> = Vec::new();

        for element in text.split(',').map(str::trim) {
            let mut chars = element.chars();
            let Some(id) = chars.next() else {
                continue;
            };
            let def = compile_element(id, chars.as_str(), text)?;

            match defs.iter().find(|d| d.id == def.id) {
                Some(existing) if existing.kind != def.kind => {
                    return Err(SchemaError::ConflictingKinds {
                        id: def.id,
                        first: existing.kind,
                        second: def.kind,
                    });
                }
                Some(_) => {
                    tracing::debug!(id = %def.id, "duplicate schema element collapsed");
                }
                None => defs.push(def),
            }
        }

        Ok(Self {
            text: text.to_string(),
            defs,
        })
    }

    /// The schema text exactly as given.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Definitions in schema order.
    pub fn definitions(&self) -> &[FlagDef] {
        &self.defs
    }

    /// Kind of `id`, if declared.
    pub fn kind_of(&self, id: char) -> Option<FlagKind> {
        self.defs.iter().find(|d| d.id == id).map(|d| d.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

fn compile_element(id: char, tail: &str, schema: &str) -> Result<FlagDef, SchemaError> {
    if !id.is_alphabetic() {
        return Err(SchemaError::InvalidIdentifier {
            id,
            schema: schema.to_string(),
        });
    }

    let kind = FlagKind::from_suffix(tail).ok_or_else(|| SchemaError::InvalidFormat {
        id,
        tail: tail.to_string(),
    })?;

    Ok(FlagDef { id, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_all_three_kinds_in_order() {
        let schema = Schema::compile("l,p#,d*").unwrap();
        assert_eq!(
            schema.definitions(),
            &[
                FlagDef { id: 'l', kind: FlagKind::Boolean },
                FlagDef { id: 'p', kind: FlagKind::Integer },
                FlagDef { id: 'd', kind: FlagKind::Text },
            ]
        );
        assert_eq!(schema.text(), "l,p#,d*");
    }

    #[test]
    fn trims_and_skips_empty_elements() {
        let schema = Schema::compile(" l , ,p# ,,").unwrap();
        assert_eq!(schema.kind_of('l'), Some(FlagKind::Boolean));
        assert_eq!(schema.kind_of('p'), Some(FlagKind::Integer));
        assert_eq!(schema.definitions().len(), 2);
    }

    #[test]
    fn empty_schema_has_no_definitions() {
        let schema = Schema::compile("").unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn rejects_non_alphabetic_identifier() {
        let err = Schema::compile("l,3#").unwrap_err();
        assert_eq!(
            err,
            SchemaError::InvalidIdentifier {
                id: '3',
                schema: "l,3#".to_string()
            }
        );
        assert_eq!(err.to_string(), "Bad character: 3 in Args format l,3#");
    }

    #[test]
    fn rejects_unknown_suffix() {
        let err = Schema::compile("x~").unwrap_err();
        assert_eq!(err.to_string(), "Argument x has invalid format : ~");
    }

    #[test]
    fn rejects_double_suffix() {
        assert!(matches!(
            Schema::compile("p##"),
            Err(SchemaError::InvalidFormat { id: 'p', .. })
        ));
    }

    #[test]
    fn rejects_conflicting_duplicate() {
        let err = Schema::compile("x,x#").unwrap_err();
        assert_eq!(
            err,
            SchemaError::ConflictingKinds {
                id: 'x',
                first: FlagKind::Boolean,
                second: FlagKind::Integer,
            }
        );
    }

    #[test]
    fn same_kind_duplicate_collapses() {
        let schema = Schema::compile("x*,x*").unwrap();
        assert_eq!(schema.definitions().len(), 1);
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        let schema = Schema::compile("v,V#").unwrap();
        assert_eq!(schema.kind_of('v'), Some(FlagKind::Boolean));
        assert_eq!(schema.kind_of('V'), Some(FlagKind::Integer));
    }

    #[test]
    fn suffix_round_trips() {
        for kind in [FlagKind::Boolean, FlagKind::Integer, FlagKind::Text] {
            assert_eq!(FlagKind::from_suffix(kind.suffix()), Some(kind));
        }
        assert!(FlagKind::Integer.consumes_parameter());
        assert!(!FlagKind::Boolean.consumes_parameter());
    }
}
