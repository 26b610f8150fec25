use thiserror::Error;

/// Everything that can go wrong while declaring classes and building values.
///
/// Offending members and values are kept in their `Debug` rendering so the
/// error does not depend on the member type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("bitset name must be non-empty")]
    EmptyName,

    #[error("bitset {name:?} needs at least one member")]
    NoMembers { name: String },

    #[error("bitset {name:?} has duplicates in members: {duplicates}")]
    DuplicateMembers { name: String, duplicates: String },

    #[error("bitset {name:?} has {len} members, but its word holds at most {max}")]
    TooManyMembers { name: String, len: usize, max: u32 },

    #[error("unknown bitset base {0:?}, expected MemberBits or BitSet")]
    InvalidBase(String),

    #[error("unknown series kind {0:?}, expected List or Tuple")]
    InvalidSeries(String),

    #[error("{0} is already bound to a domain")]
    AlreadyBound(String),

    #[error("{existing} is already declared with a different base or series")]
    AlreadyDeclared { existing: String },

    #[error("non-integer id: {0}")]
    NonIntegerId(String),

    #[error("malformed bitset token: {0}")]
    Token(String),

    #[error("{bits:?}: too many bits for {len} members")]
    TooManyBits { bits: String, len: usize },

    #[error("{bits:?}: invalid binary digit {digit:?}")]
    InvalidDigit { bits: String, digit: char },

    #[error("{0}: not a member of the domain")]
    UnknownMember(String),

    #[error("{value} exceeds the supremum {supremum} of {name:?}")]
    OutOfRange { name: String, value: String, supremum: String },

    #[error("{start} is no subset of {of}")]
    NotASubset { start: String, of: String },

    #[error("{value} does not belong to {class}")]
    ForeignDomain { value: String, class: String },

    #[error("{class} was declared without a {kind} series")]
    NoSeries { class: String, kind: &'static str },

    #[error("{op} needs r > 0")]
    ZeroChunkWidth { op: &'static str },

    #[error("chunk width {r} exceeds the {bits} bits of the chunk word")]
    ChunkTooWide { r: u32, bits: u32 },

    #[error("packed chunks overflow a {bits}-bit word")]
    Overflow { bits: u32 },
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
