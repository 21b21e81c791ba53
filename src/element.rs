use crate::Float;

/// A location kind: a single real number or a fixed-length real vector.
pub trait Coordinate<T: Float> {
    /// Distance between two locations of the same kind.
    ///
    /// Scalars use the absolute difference, vectors the Euclidean distance
    /// over all dimensions.
    fn distance(&self, other: &Self) -> T;

    /// Distance from the origin.
    fn magnitude(&self) -> T;

    fn dimension(&self) -> usize;
}

impl<T: Float> Coordinate<T> for T {
    #[inline]
    fn distance(&self, other: &Self) -> T {
        (*self - *other).abs()
    }

    #[inline]
    fn magnitude(&self) -> T {
        self.abs()
    }

    fn dimension(&self) -> usize {
        1
    }
}

#[inline]
fn euclidean<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum::<T>()
        .sqrt()
}

#[inline]
fn norm<T: Float>(a: &[T]) -> T {
    a.iter().map(|&x| x * x).sum::<T>().sqrt()
}

impl<T: Float, const N: usize> Coordinate<T> for [T; N] {
    #[inline]
    fn distance(&self, other: &Self) -> T {
        euclidean(self, other)
    }

    #[inline]
    fn magnitude(&self) -> T {
        norm(self)
    }

    fn dimension(&self) -> usize {
        N
    }
}

// Dimensions are checked by the matrix builder before any distance is taken.
impl<T: Float> Coordinate<T> for Vec<T> {
    #[inline]
    fn distance(&self, other: &Self) -> T {
        euclidean(self, other)
    }

    #[inline]
    fn magnitude(&self) -> T {
        norm(self)
    }

    fn dimension(&self) -> usize {
        self.len()
    }
}

impl<T: Float> Coordinate<T> for (T, T) {
    #[inline]
    fn distance(&self, other: &Self) -> T {
        let dx = self.0 - other.0;
        let dy = self.1 - other.1;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    fn magnitude(&self) -> T {
        self.0.hypot(self.1)
    }

    fn dimension(&self) -> usize {
        2
    }
}

/// Anything that has a location and, optionally, a value.
///
/// Elements of one population are expected to agree on whether they carry a
/// value. The measure looks at the first element of the larger population to
/// decide, and then requires a value from every element if it found one.
pub trait Located<T: Float> {
    type Location: Coordinate<T>;

    fn location(&self) -> &Self::Location;

    /// The element's value, if it is a valued element.
    fn value(&self) -> Option<T> {
        None
    }
}

/// An element with a location only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<L> {
    pub location: L,
}

impl<L> Point<L> {
    pub fn new(location: L) -> Self {
        Self { location }
    }
}

impl<T: Float, L: Coordinate<T>> Located<T> for Point<L> {
    type Location = L;

    fn location(&self) -> &L {
        &self.location
    }
}

/// An element with a location and a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuedPoint<L, T> {
    pub location: L,
    pub value: T,
}

impl<L, T> ValuedPoint<L, T> {
    pub fn new(location: L, value: T) -> Self {
        Self { location, value }
    }
}

impl<T: Float, L: Coordinate<T>> Located<T> for ValuedPoint<L, T> {
    type Location = L;

    fn location(&self) -> &L {
        &self.location
    }

    fn value(&self) -> Option<T> {
        Some(self.value)
    }
}
