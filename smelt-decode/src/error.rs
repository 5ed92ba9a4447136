use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for smelt-decode operations (boxed to reduce size on stack).
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw document content and its filename so parse failures can be
/// rendered with a labeled span.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error, converting its
    /// line/column position into a byte span.
    pub fn json_parse_error(&self, source: &serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.to_string(),
        })
    }

    /// Create a parse error from a serde_yaml error.
    pub fn yaml_parse_error(&self, source: &serde_yaml::Error) -> Box<Error> {
        let span = source.location().map(|loc| SourceSpan::from(loc.index()));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            message: source.to_string(),
        })
    }
}

/// Byte offset of a 1-based line/column position, if it is inside `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the path passed via --model / --overrides / --http-config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model document: {message}")]
    #[diagnostic(code(smelt::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("shape '{shape}' has unrecognized type '{type_name}'")]
    #[diagnostic(
        code(smelt::unknown_shape_type),
        help(
            "valid types are: string, integer, long, double, float, boolean, timestamp, blob, list, map, structure"
        )
    )]
    UnknownShapeType { shape: String, type_name: String },

    #[error("member '{member}' of shape '{shape}' has unrecognized location '{location}'")]
    #[diagnostic(
        code(smelt::unknown_member_location),
        help("valid locations are: uri, query, querystring, header, headers")
    )]
    UnknownMemberLocation {
        shape: String,
        member: String,
        location: String,
    },

    #[error("operation '{operation}' references undeclared shape '{shape}'")]
    #[diagnostic(
        code(smelt::dangling_reference),
        help("every operation input/output must name a structure declared under 'shapes'")
    )]
    DanglingReference { operation: String, shape: String },

    #[error(
        "output member '{member}' of '{structure}' is bound to '{location}'; only header locations are valid on outputs"
    )]
    #[diagnostic(code(smelt::invalid_output_location))]
    InvalidOutputLocation {
        operation: String,
        structure: String,
        member: String,
        location: String,
    },

    #[error("payload member '{member}' of '{structure}' is also bound to '{location}'")]
    #[diagnostic(
        code(smelt::payload_conflict),
        help("a path/query/header-bound member cannot double as the raw body payload")
    )]
    PayloadConflict {
        structure: String,
        member: String,
        location: String,
    },

    #[error(
        "synthesized result-wrapper structure '{structure}' for operation '{operation}' collides with a declared structure"
    )]
    #[diagnostic(
        code(smelt::wrapper_collision),
        help("rename the declared structure; silently overwriting it would change generated output between model revisions")
    )]
    WrapperCollision { operation: String, structure: String },

    #[error(transparent)]
    #[diagnostic(code(smelt::override_error))]
    Override(#[from] smelt_model::OverrideError),
}
