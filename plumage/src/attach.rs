// Copyright 2026 the Plumage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::any::Any;
use core::fmt;

/// A typed attachment slot holding zero or one styling object.
///
/// This is the attachment half of the styling protocol: an artist owns one slot per
/// attachable object (its style, its font) and accepts either a value of the slot's type or
/// nothing at all. Typed access goes through [`get`](Slot::get)/[`set`](Slot::set); callers
/// applying attachments from type-erased sources (such as a stylesheet loader) use
/// [`set_any`](Slot::set_any), which reports a mismatch without disturbing the stored value.
#[derive(Clone, Debug)]
pub struct Slot<T> {
    attribute: &'static str,
    value: Option<T>,
}

impl<T: 'static> Slot<T> {
    /// Creates an empty slot for the attribute named `attribute`.
    ///
    /// The name is only used in error reporting.
    pub const fn new(attribute: &'static str) -> Self {
        Self {
            attribute,
            value: None,
        }
    }

    /// The attribute name this slot reports in errors.
    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// The attached value, if any.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the attached value, if any.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Attaches `value`, or detaches with `None`.
    pub fn set(&mut self, value: Option<T>) {
        self.value = value;
    }

    /// Detaches and returns the attached value, if any.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    /// Assigns from a type-erased value: accepts `None` or a boxed `T`.
    ///
    /// On a type mismatch the previously attached value is left in place.
    pub fn set_any(&mut self, value: Option<Box<dyn Any>>) -> Result<(), AttachError> {
        match value {
            None => {
                self.value = None;
                Ok(())
            }
            Some(boxed) => match boxed.downcast::<T>() {
                Ok(value) => {
                    self.value = Some(*value);
                    Ok(())
                }
                Err(_) => Err(AttachError {
                    attribute: self.attribute,
                    expected: core::any::type_name::<T>(),
                }),
            },
        }
    }
}

/// Error produced when a type-erased attachment does not match the slot's expected type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachError {
    attribute: &'static str,
    expected: &'static str,
}

impl AttachError {
    /// The attribute that rejected the assignment.
    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// The type the attribute accepts.
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

impl fmt::Display for AttachError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attribute `{}` accepts an instance of `{}` or none",
            self.attribute, self.expected
        )
    }
}

impl core::error::Error for AttachError {}

#[cfg(test)]
mod tests {
    use super::Slot;

    #[test]
    fn typed_set_and_take() {
        let mut slot: Slot<u32> = Slot::new("level");
        assert!(slot.get().is_none());
        slot.set(Some(7));
        assert_eq!(slot.get(), Some(&7));
        assert_eq!(slot.take(), Some(7));
        assert!(slot.get().is_none());
    }

    #[test]
    fn erased_mismatch_names_attribute_and_type() {
        let mut slot: Slot<u32> = Slot::new("level");
        slot.set(Some(7));
        let err = slot.set_any(Some(Box::new("nope"))).unwrap_err();
        assert_eq!(err.attribute(), "level");
        assert!(err.expected().contains("u32"));
        // The failed assignment must not disturb the stored value.
        assert_eq!(slot.get(), Some(&7));
    }

    #[test]
    fn erased_none_detaches() {
        let mut slot: Slot<u32> = Slot::new("level");
        slot.set(Some(7));
        slot.set_any(None).unwrap();
        assert!(slot.get().is_none());
    }
}
