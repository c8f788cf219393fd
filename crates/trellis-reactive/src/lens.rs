//! Member accessors.
//!
//! A [`Lens<C, T>`] pairs a getter and a setter for a member of type `T`
//! inside an owner of type `C`. Field binders use lenses wherever a C#-style
//! `x => x.Volume` property reference would appear; the [`lens!`] macro
//! expands a field path into the closure pair, so resolution happens entirely
//! at compile time. No runtime type introspection is involved anywhere.

use std::fmt;
use std::rc::Rc;

/// A compiled getter/setter pair for a member of `C`.
pub struct Lens<C, T> {
    read: Rc<dyn Fn(&C) -> T>,
    write: Rc<dyn Fn(&mut C, T)>,
}

impl<C: 'static, T: 'static> Lens<C, T> {
    /// Build a lens from explicit accessor closures.
    pub fn new(read: impl Fn(&C) -> T + 'static, write: impl Fn(&mut C, T) + 'static) -> Self {
        Self {
            read: Rc::new(read),
            write: Rc::new(write),
        }
    }

    /// Read the member out of `owner`.
    #[must_use]
    pub fn get(&self, owner: &C) -> T {
        (self.read)(owner)
    }

    /// Write `value` into `owner`.
    pub fn set(&self, owner: &mut C, value: T) {
        (self.write)(owner, value);
    }

    /// Compose with a lens into the member, yielding a lens from `C` straight
    /// to the inner `U`. The write side is read-modify-write through the
    /// intermediate value.
    #[must_use]
    pub fn then<U: 'static>(&self, inner: Lens<T, U>) -> Lens<C, U> {
        let outer = self.clone();
        let read = {
            let outer = outer.clone();
            let inner = inner.clone();
            move |c: &C| inner.get(&outer.get(c))
        };
        let write = move |c: &mut C, value: U| {
            let mut mid = outer.get(c);
            inner.set(&mut mid, value);
            outer.set(c, mid);
        };
        Lens::new(read, write)
    }
}

impl<C, T> Clone for Lens<C, T> {
    fn clone(&self) -> Self {
        Self {
            read: Rc::clone(&self.read),
            write: Rc::clone(&self.write),
        }
    }
}

impl<C, T> fmt::Debug for Lens<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens")
            .field("owner", &std::any::type_name::<C>())
            .field("value", &std::any::type_name::<T>())
            .finish()
    }
}

/// Build a [`Lens`] from an owner type and a field path.
///
/// The value is read by clone and written by assignment, so the field type
/// must be `Clone`. Nested paths are supported: `lens!(App, audio.volume)`.
///
/// # Examples
///
/// ```
/// use trellis_reactive::lens;
///
/// struct Settings {
///     volume: f64,
/// }
///
/// let volume = lens!(Settings, volume);
/// let mut s = Settings { volume: 0.25 };
/// volume.set(&mut s, 0.75);
/// assert_eq!(volume.get(&s), 0.75);
/// ```
#[macro_export]
macro_rules! lens {
    ($owner:ty, $($field:ident).+) => {
        $crate::lens::Lens::<$owner, _>::new(
            |owner: &$owner| owner.$($field).+.clone(),
            |owner: &mut $owner, value| owner.$($field).+ = value,
        )
    };
}
