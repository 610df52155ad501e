use std::fmt;

/// Wrapper for &[T] which logs as a numbered list, one entry per line.
pub struct PrettyList<'data, T>(pub &'data [T]);

impl<T> PrettyList<'_, T> {
    fn write_entries(
        &self,
        f: &mut fmt::Formatter<'_>,
        mut entry: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
    ) -> fmt::Result {
        for (index, item) in self.0.iter().enumerate() {
            write!(f, "\n{:>2}. ", index)?;
            entry(f, item)?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for PrettyList<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_entries(f, |f, item| write!(f, "{:?}", item))
    }
}

impl<T> fmt::Display for PrettyList<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_entries(f, |f, item| write!(f, "{}", item))
    }
}
