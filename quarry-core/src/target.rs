use crate::Entity;

/// How many records a query target expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One record, the query is limited to a single row.
    Single,
    /// Any number of records.
    Collection,
}

/// Destination of a query: `Option<E>` for one record, `Vec<E>` for many.
pub trait Target {
    type Entity: Entity;
    const SHAPE: Shape;

    /// Stores the mapped records, never called with an empty vector.
    fn assign(&mut self, records: Vec<Self::Entity>);
}

impl<E: Entity> Target for Option<E> {
    type Entity = E;
    const SHAPE: Shape = Shape::Single;

    fn assign(&mut self, records: Vec<E>) {
        *self = records.into_iter().next();
    }
}

impl<E: Entity> Target for Vec<E> {
    type Entity = E;
    const SHAPE: Shape = Shape::Collection;

    fn assign(&mut self, records: Vec<E>) {
        *self = records;
    }
}
