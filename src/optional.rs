//! The optional-field protocol
//!
//! Almost every attribute and many child elements in MusicXML are
//! schema-optional. [`Optional`] gives all of them one uniform contract:
//! a presence flag, a documented default, and setters that keep the two
//! consistent. The serialization layer emits a slot only while it is
//! present; reading an absent slot is never an error and always yields
//! the default.

/// One schema-optional field slot: a documented default plus the
/// present/absent state.
///
/// Invariant: while the slot is absent, [`Optional::get`] returns exactly the
/// documented default. Presence and "value equals default" are independent;
/// a slot explicitly set to its default value is present and is emitted.
///
/// The slot holds leaf attribute values (`Optional<f64>`,
/// `Optional<YesNo>`) and entire optional child elements
/// (`Optional<TupletActual>`) alike.
#[derive(Debug, Clone, PartialEq)]
pub struct Optional<T> {
    default: T,
    value: Option<T>,
}

impl<T> Optional<T> {
    /// Create an absent slot with the given documented default
    pub fn new(default: T) -> Self {
        Self {
            default,
            value: None,
        }
    }

    /// True iff the field has been explicitly set
    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The current value: the set value while present, the documented
    /// default otherwise. Total; never fails.
    pub fn get(&self) -> &T {
        self.value.as_ref().unwrap_or(&self.default)
    }

    /// The documented default, regardless of presence
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Set the value and mark the field present
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Adopt a foreign presence flag: copy the value and mark present when
    /// the flag is true, otherwise clear back to the default.
    ///
    /// This is the transfer operation used when writing public-layer data
    /// back into schema attribute slots.
    pub fn set_if_present(&mut self, present: bool, value: T) {
        self.value = if present { Some(value) } else { None };
    }

    /// The `Option`-shaped face of [`Optional::set_if_present`]
    pub fn set_or_clear(&mut self, value: Option<T>) {
        self.value = value;
    }

    /// Mark the field absent again; `get` returns the default afterwards
    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl<T: Copy> Optional<T> {
    /// The current value by copy; the default while absent
    pub fn value(&self) -> T {
        *self.get()
    }

    /// The set value, or `None` while absent
    pub fn as_option(&self) -> Option<T> {
        self.value
    }
}

impl<T: Default> Default for Optional<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_reads_default() {
        let slot: Optional<f64> = Optional::new(1.5);
        assert!(!slot.is_present());
        assert_eq!(slot.value(), 1.5);
        assert_eq!(slot.as_option(), None);
    }

    #[test]
    fn test_set_marks_present() {
        let mut slot = Optional::new(0i64);
        slot.set(3);
        assert!(slot.is_present());
        assert_eq!(slot.value(), 3);
    }

    #[test]
    fn test_present_default_value_is_still_present() {
        // Presence and "equals default" are independent facts.
        let mut slot = Optional::new(0.0f64);
        slot.set(0.0);
        assert!(slot.is_present());
        assert_eq!(slot.as_option(), Some(0.0));
    }

    #[test]
    fn test_clear_restores_default() {
        let mut slot = Optional::new("solid");
        slot.set("dashed");
        slot.clear();
        assert!(!slot.is_present());
        assert_eq!(*slot.get(), "solid");
    }

    #[test]
    fn test_set_if_present_true_copies() {
        let mut slot = Optional::new(0.0f64);
        slot.set_if_present(true, 2.25);
        assert!(slot.is_present());
        assert_eq!(slot.value(), 2.25);
    }

    #[test]
    fn test_set_if_present_false_clears() {
        let mut slot = Optional::new(0.0f64);
        slot.set(9.0);
        slot.set_if_present(false, 2.25);
        assert!(!slot.is_present());
        assert_eq!(slot.value(), 0.0);
    }

    #[test]
    fn test_set_or_clear() {
        let mut slot = Optional::new(0i64);
        slot.set_or_clear(Some(7));
        assert_eq!(slot.as_option(), Some(7));
        slot.set_or_clear(None);
        assert_eq!(slot.as_option(), None);
    }

    #[test]
    fn test_default_impl() {
        let slot: Optional<i64> = Optional::default();
        assert!(!slot.is_present());
        assert_eq!(slot.value(), 0);
    }
}
