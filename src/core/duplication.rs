//! One-level and recursive duplication.
//!
//! A shallow copy is exactly `Clone`: every `Rc` in the value is shared with
//! the copy. A deep copy walks the value and re-creates every shared
//! allocation, so mutating through the original can no longer reach the copy.
//! Cyclic graphs are not supported; a deep copy of a cycle would not end.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub trait Duplicate: Clone {
    fn shallow_copy(&self) -> Self {
        self.clone()
    }

    fn deep_copy(&self) -> Self;
}

macro_rules! duplicate_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Duplicate for $ty {
                fn deep_copy(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

duplicate_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl<T: Duplicate> Duplicate for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(Duplicate::deep_copy).collect()
    }
}

impl<T: Duplicate> Duplicate for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(Duplicate::deep_copy)
    }
}

impl<T: Duplicate> Duplicate for Rc<T> {
    fn deep_copy(&self) -> Self {
        Rc::new(T::deep_copy(self))
    }
}

/// A mutable value reachable from several owners.
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// True when both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn owners(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

impl<T: Clone> Shared<T> {
    pub fn snapshot(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Shared<Vec<T>> {
    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Duplicate> Duplicate for Shared<T> {
    fn deep_copy(&self) -> Self {
        Shared::new(self.0.borrow().deep_copy())
    }
}

impl<T: PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0.borrow() == *other.0.borrow()
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(value) => f.debug_tuple("Shared").field(&*value).finish(),
            Err(_) => f.write_str("Shared(<borrowed>)"),
        }
    }
}
