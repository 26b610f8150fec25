use core::fmt::{self, Debug};

use crate::series::SeriesKind;

use super::Class;

impl<M: Debug, T> Class<M, T> {
    /// The argument list shared by the class reprs and the series class reprs.
    pub(crate) fn fmt_arguments(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let series = |kind: SeriesKind| match self.has_series(kind) {
            true => kind.as_str(),
            false => "None",
        };
        write!(
            f,
            "({:?}, {:?}, {:#x}, {}, {}, {})",
            self.name(),
            self.members(),
            self.id(),
            self.flavor(),
            series(SeriesKind::List),
            series(SeriesKind::Tuple),
        )
    }
}

impl<M: Debug, T> Debug for Class<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bitset")?;
        self.fmt_arguments(f)
    }
}
