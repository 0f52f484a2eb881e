// Rust guideline compliant 2026-02-06

//! Human-readable descriptions for enum variants.
//!
//! A type opts in by implementing [`Described`] with a static table of its
//! variants, usually through the [`described_enum!`](crate::described_enum)
//! macro:
//!
//! ```
//! use extkit_core::{described_enum, Described};
//!
//! described_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Priority {
//!         #[description = "Needs attention today"]
//!         Urgent = 0,
//!         Normal = 1,
//!     }
//! }
//!
//! assert_eq!(Priority::Urgent.description(), "Needs attention today");
//! assert_eq!(Priority::Normal.description(), "Normal");
//! ```

use crate::{Error, Result};

/// One declared variant of a described enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant<E> {
    /// The variant value.
    pub value: E,
    /// Declared discriminant.
    pub discriminant: i64,
    /// Symbolic variant name.
    pub name: &'static str,
    /// Attached label, if any.
    pub description: Option<&'static str>,
}

impl<E> Variant<E> {
    /// The attached label, or the variant name when none is attached.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.description.unwrap_or(self.name)
    }
}

/// Enums carrying a static table of their variants and labels.
///
/// `VARIANTS` must list every variant. [`described_enum!`](crate::described_enum)
/// guarantees this; a hand-written table that leaves one out trips a debug
/// assertion, and release builds return an empty label for the missing
/// variant.
pub trait Described: Copy + PartialEq + Sized + 'static {
    /// Every declared variant, in declaration order.
    const VARIANTS: &'static [Variant<Self>];

    /// Returns the table entry for this value.
    fn variant(&self) -> Option<&'static Variant<Self>> {
        let found = Self::VARIANTS.iter().find(|variant| variant.value == *self);
        debug_assert!(
            found.is_some(),
            "Described::VARIANTS is missing a variant of {}",
            std::any::type_name::<Self>()
        );
        found
    }

    /// Returns the attached label, or the variant name when none is attached.
    fn description(&self) -> &'static str {
        self.variant().map(Variant::label).unwrap_or("")
    }

    /// Returns the symbolic variant name.
    fn name(&self) -> &'static str {
        self.variant().map(|variant| variant.name).unwrap_or("")
    }

    /// Looks up the variant declared with the given discriminant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnumValue`] if no variant has that discriminant.
    fn from_discriminant(raw: i64) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .find(|variant| variant.discriminant == raw)
            .map(|variant| variant.value)
            .ok_or(Error::InvalidEnumValue(raw))
    }
}

/// Describes a raw discriminant of a described enum.
///
/// # Arguments
///
/// * `raw` - Discriminant, e.g. as stored in a database column
///
/// # Returns
///
/// The label of the matching variant.
///
/// # Errors
///
/// Returns [`Error::InvalidEnumValue`] if no variant has that discriminant.
pub fn describe_discriminant<E: Described>(raw: i64) -> Result<&'static str> {
    E::from_discriminant(raw).map(|value| value.description())
}

/// Declares an enum with explicit discriminants and implements [`Described`]
/// for it.
///
/// Variants may carry a `#[description = "..."]` label.
#[macro_export]
macro_rules! described_enum {
    (@label) => { None };
    (@label $desc:literal) => { Some($desc) };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[description = $desc:literal])?
                $variant:ident = $disc:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($variant = $disc),*
        }

        impl $crate::Described for $name {
            const VARIANTS: &'static [$crate::Variant<Self>] = &[
                $(
                    $crate::Variant {
                        value: $name::$variant,
                        discriminant: $disc,
                        name: stringify!($variant),
                        description: $crate::described_enum!(@label $($desc)?),
                    }
                ),*
            ];
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::described_enum! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum TestEnum {
            #[description = "Test Description"]
            TestValueWithDescription = 0,
            TestValueWithoutDescription = 1,
        }
    }

    #[test]
    fn test_description_attached() {
        assert_eq!(
            TestEnum::TestValueWithDescription.description(),
            "Test Description"
        );
    }

    #[test]
    fn test_description_falls_back_to_name() {
        assert_eq!(
            TestEnum::TestValueWithoutDescription.description(),
            "TestValueWithoutDescription"
        );
        assert_eq!(TestEnum::TestValueWithDescription.name(), "TestValueWithDescription");
    }

    #[test]
    fn test_invalid_discriminant() {
        let err = describe_discriminant::<TestEnum>(100).unwrap_err();
        assert!(matches!(err, Error::InvalidEnumValue(100)));
        assert!(err.to_string().starts_with("Invalid enum value"));
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Partial {
        Listed,
        Forgotten,
    }

    impl Described for Partial {
        const VARIANTS: &'static [Variant<Self>] = &[Variant {
            value: Partial::Listed,
            discriminant: 0,
            name: "Listed",
            description: None,
        }];
    }

    #[test]
    fn test_hand_written_table() {
        assert_eq!(Partial::Listed.description(), "Listed");
        assert!(Partial::from_discriminant(1).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "missing a variant")]
    fn test_incomplete_table_is_caught_in_debug() {
        let _ = Partial::Forgotten.description();
    }

    #[test]
    fn test_describe_discriminant() {
        assert_eq!(
            describe_discriminant::<TestEnum>(0).unwrap(),
            "Test Description"
        );
        assert_eq!(
            TestEnum::from_discriminant(1).unwrap(),
            TestEnum::TestValueWithoutDescription
        );
    }
}
