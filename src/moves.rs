use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Moves<M>(Vec<M>);

impl<M> Moves<M> {
    pub fn new(moves: Vec<M>) -> Self {
        Moves(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> ::std::slice::Iter<'_, M> {
        self.0.iter()
    }
}

impl<M> Default for Moves<M> {
    fn default() -> Self {
        Moves(Vec::new())
    }
}

impl<M> IntoIterator for Moves<M> {
    type Item = M;
    type IntoIter = ::std::vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Moves<M> {
    type Item = &'a M;
    type IntoIter = ::std::slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<M: Display> Display for Moves<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mov in self {
            write!(f, "{}", mov)?;
        }
        Ok(())
    }
}

impl<M: Display> Debug for Moves<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
