use thiserror::Error;

/// Failures that abort a parse.
///
/// Every variant propagates to the caller unmodified; no partial molecule
/// is ever returned alongside an error. The one documented leniency of
/// the format — an individual bond with an unrecognized order code — is
/// not represented here because it drops that single bond instead of
/// failing.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying XML tokenizer failed (truncated or invalid markup,
    /// or an I/O failure while reading input).
    #[error("underlying XML input failed: {source}")]
    Xml {
        #[from]
        source: quick_xml::Error,
    },

    /// A value that must be numeric was not.
    #[error("expected a numeric {field}, found '{text}'")]
    MalformedValue { field: &'static str, text: String },

    /// The parallel lists of a bond block disagree in length.
    #[error("bond block lists disagree: {0}")]
    StructuralMismatch(&'static str),

    /// A bond endpoint is outside the molecule's atom range. The index
    /// is kept signed so negative wire values are reported as written.
    #[error("bond references atom {index} outside the {atom_count}-atom molecule")]
    DanglingReference { index: i64, atom_count: usize },
}

impl Error {
    pub(crate) fn malformed(field: &'static str, text: impl Into<String>) -> Self {
        Self::MalformedValue {
            field,
            text: text.into(),
        }
    }
}
