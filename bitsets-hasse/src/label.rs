use std::path::PathBuf;

use bitsets::{Member, MemberBits, Word};
use graphviz_rust::cmd::Format;
use itertools::Itertools;

/// What the node of each subset shows.
pub enum Label<M, T = u64> {
    /// Nothing.
    None,
    /// The bit string, `100011`.
    Bits,
    /// The members, `{1,5,6}`.
    Members,
    /// The hexagram of a six-member domain.
    IChing,
    Custom(Box<dyn Fn(&MemberBits<M, T>) -> String + Send + Sync>),
}

impl<M, T> Default for Label<M, T> {
    fn default() -> Self {
        Label::Bits
    }
}

impl<M: Member, T: Word> Label<M, T> {
    pub fn custom(f: impl Fn(&MemberBits<M, T>) -> String + Send + Sync + 'static) -> Self {
        Label::Custom(Box::new(f))
    }

    pub(crate) fn text(&self, b: &MemberBits<M, T>) -> String
    where
        M: core::fmt::Display,
    {
        match self {
            Label::None => String::new(),
            Label::Bits => b.bits(),
            Label::Members => format!("{{{}}}", b.members().iter().join(",")),
            Label::IChing => {
                let n = b.indexes().fold(0usize, |n, i| n | 1 << i);
                HEXAGRAMS
                    .get(n)
                    .and_then(|&c| char::from_u32(c))
                    .map(String::from)
                    .unwrap_or_default()
            }
            Label::Custom(f) => f(b),
        }
    }

    /// `members` or `bits`, the kind part of the default filename.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Label::None | Label::Bits => "bits",
            Label::Members | Label::IChing | Label::Custom(_) => "members",
        }
    }
}

/// Hexagram code points by the rank of their six lines.
const HEXAGRAMS: [u32; 64] = [
    0x4dc1, 0x4dd6, 0x4dc7, 0x4dd3, 0x4dcf, 0x4de2, 0x4dec, 0x4dcb,
    0x4dce, 0x4df3, 0x4de6, 0x4df4, 0x4dfd, 0x4df7, 0x4dde, 0x4de0,
    0x4dc6, 0x4dc3, 0x4ddc, 0x4dfa, 0x4de7, 0x4dff, 0x4dee, 0x4dc5,
    0x4ded, 0x4dd1, 0x4def, 0x4df8, 0x4ddf, 0x4df1, 0x4ddb, 0x4deb,
    0x4dd7, 0x4dda, 0x4dc2, 0x4de9, 0x4df2, 0x4dd4, 0x4dd0, 0x4dd8,
    0x4de3, 0x4dd5, 0x4dfe, 0x4de4, 0x4df6, 0x4ddd, 0x4df0, 0x4dcc,
    0x4dd2, 0x4de8, 0x4dfb, 0x4dfc, 0x4df5, 0x4de5, 0x4df9, 0x4dc9,
    0x4dca, 0x4dd9, 0x4dc4, 0x4dc8, 0x4de1, 0x4dcd, 0x4dea, 0x4dc0,
];

/// How a diagram is labeled, named and rendered.
pub struct HasseConfig<M, T = u64> {
    pub label: Label<M, T>,
    /// Defaults to `bs-{name}-{members|bits}.gv`.
    pub filename: Option<String>,
    /// Where [`crate::Hasse::save`] writes, the working directory by default.
    pub directory: Option<PathBuf>,
    pub format: Format,
}

impl<M, T> Default for HasseConfig<M, T> {
    fn default() -> Self {
        Self {
            label: Label::default(),
            filename: None,
            directory: None,
            format: Format::Pdf,
        }
    }
}

impl<M, T> HasseConfig<M, T> {
    pub fn with_label(self, label: Label<M, T>) -> Self {
        Self { label, ..self }
    }
}
