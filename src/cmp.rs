use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::container::DynVec;

/// `lhs < rhs` in lexicographic order, using only `<` on the elements.
///
/// The first pair that differs decides; when one side runs out first, the
/// shorter sequence is the smaller one.
fn lexicographic_less<T: PartialOrd>(lhs: &[T], rhs: &[T]) -> bool {
    for (a, b) in lhs.iter().zip(rhs) {
        if a < b {
            return true;
        }
        if b < a {
            return false;
        }
    }
    lhs.len() < rhs.len()
}

impl<T: PartialEq> PartialEq for DynVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for DynVec<T> {}

// `<` and `>` are the primitives; `<=` and `>=` are their negations.
impl<T: PartialOrd> PartialOrd for DynVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.lt(other) {
            Some(Ordering::Less)
        } else if self.gt(other) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        lexicographic_less(self.as_slice(), other.as_slice())
    }

    fn gt(&self, other: &Self) -> bool {
        lexicographic_less(other.as_slice(), self.as_slice())
    }

    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<T: Ord> Ord for DynVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for DynVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for DynVec<T> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for DynVec<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_less() {
        assert!(lexicographic_less(&[1, 2], &[1, 3]));
        assert!(lexicographic_less(&[1, 2], &[1, 2, 0]));
        assert!(!lexicographic_less(&[1, 2], &[1, 2]));
        assert!(!lexicographic_less(&[2], &[1, 9, 9]));
        assert!(lexicographic_less::<i32>(&[], &[0]));
        assert!(!lexicographic_less::<i32>(&[], &[]));
    }

    #[test]
    fn test_unordered_elements() {
        let a = DynVec::from([1.0, f64::NAN]);
        let b = DynVec::from([1.0, 2.0]);

        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a > b));
        // Derived from the primitives, so both hold for incomparable values
        assert!(a <= b);
        assert!(a >= b);
    }
}
