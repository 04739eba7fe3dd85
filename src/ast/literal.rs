use serde::Serialize;

/// A literal's textual value; the source token kind (int/float/char/bool/
/// hex/octal/binary/string literal) is implied by the lexeme the value was
/// built from, not re-tagged here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Literal {
    pub value: String,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
