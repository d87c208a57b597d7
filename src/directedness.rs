use std::fmt;

/// Whether the edges of a graph have a direction.  Fixed when the graph is
/// created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Directedness {
    /// `add_edge(a, b)` only makes `b` a neighbor of `a`.
    #[default]
    Directed,
    /// `add_edge(a, b)` makes `a` and `b` neighbors of each other.
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }

    pub fn from_is_directed(is_directed: bool) -> Self {
        if is_directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

impl fmt::Display for Directedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directedness::Directed => write!(f, "directed"),
            Directedness::Undirected => write!(f, "undirected"),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Directedness {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Directedness::from_is_directed(<bool as quickcheck::Arbitrary>::arbitrary(g))
    }
}
