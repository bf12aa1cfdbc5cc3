//! crates/structcopy/src/record.rs
//!
//! Accessor capability that lets the copy engine read and write record
//! fields by name.
//!
//! Every record type lists its fields together with their [`Shape`]. Reads
//! return a [`FieldRef`] and writes go through a [`FieldMut`], so the engine
//! never needs to know the concrete field types. The [`impl_record!`] and
//! [`impl_one_of!`] macros generate the implementations for plain structs
//! and one-of enums.
//!
//! [`impl_record!`]: crate::impl_record
//! [`impl_one_of!`]: crate::impl_one_of

use std::any::{Any, type_name};
use std::fmt;

use serde::Serialize;

/// How a field's content is structured, which decides how it is copied.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    /// A single plain value, copied verbatim.
    Scalar,
    /// A sequence of plain values, copied verbatim as a whole.
    RepeatedScalar,
    /// An optional nested record of a fixed type.
    Nested,
    /// An optional record whose concrete type is one of several alternatives.
    OneOf,
    /// A sequence of nested records.
    RepeatedRecord,
}

impl Shape {
    /// Returns a short human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::RepeatedScalar => "repeated scalar",
            Self::Nested => "nested record",
            Self::OneOf => "one-of",
            Self::RepeatedRecord => "repeated record",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value could not be stored because its type differs from the slot's.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Mismatch {
    /// Type the destination slot accepts.
    pub expected: &'static str,
    /// Type of the value that was offered.
    pub found: &'static str,
}

/// Type-erased plain value.
///
/// Implemented for every `'static` type that is `Clone + Debug + Serialize`,
/// which covers numbers, strings, enums without record payloads, and
/// `Vec`s of them.
pub trait ScalarValue: Any + fmt::Debug {
    /// Clones the value into a new box.
    fn clone_boxed(&self) -> Box<dyn ScalarValue>;

    /// Renders the value as a dynamically-typed JSON value.
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error>;

    /// Replaces this value with `value` when both have the same type.
    fn assign(&mut self, value: Box<dyn ScalarValue>) -> Result<(), Mismatch>;

    /// Name of the concrete type, for diagnostics.
    fn value_type(&self) -> &'static str;

    /// Converts the box into `Box<dyn Any>` for downcasting.
    fn into_any_value(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> ScalarValue for T
where
    T: Any + Clone + fmt::Debug + Serialize,
{
    fn clone_boxed(&self) -> Box<dyn ScalarValue> {
        Box::new(self.clone())
    }

    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn assign(&mut self, value: Box<dyn ScalarValue>) -> Result<(), Mismatch> {
        let found = value.value_type();
        match value.into_any_value().downcast::<T>() {
            Ok(value) => {
                *self = *value;
                Ok(())
            }
            Err(_) => Err(Mismatch {
                expected: type_name::<T>(),
                found,
            }),
        }
    }

    fn value_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn into_any_value(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A value exposing a fixed set of named fields.
///
/// Implement it with [`impl_record!`](crate::impl_record) rather than by
/// hand.
pub trait Record: Any + fmt::Debug {
    /// Name of the record type, for diagnostics.
    fn record_name() -> &'static str
    where
        Self: Sized;

    /// Name of this value's record type, for diagnostics.
    fn record_type(&self) -> &'static str;

    /// Field names in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Reads a field.
    fn field(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Opens a field for writing.
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;

    /// Allocates a default-valued record of the same concrete type.
    fn fresh(&self) -> Box<dyn Record>;

    /// Upcasts to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;

    /// Upcasts to `Box<dyn Any>`.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Converts a boxed record back into its concrete type.
///
/// # Errors
///
/// Returns a [`Mismatch`] naming both types when `record` is not a `T`.
pub fn downcast_record<T: Record>(record: Box<dyn Record>) -> Result<T, Mismatch> {
    let found = record.record_type();
    record
        .into_any()
        .downcast::<T>()
        .map(|record| *record)
        .map_err(|_| Mismatch {
            expected: T::record_name(),
            found,
        })
}

/// Read access to one field.
#[derive(Debug)]
pub enum FieldRef<'a> {
    /// A plain value.
    Scalar(&'a dyn ScalarValue),
    /// A sequence of plain values, as one value.
    RepeatedScalar(&'a dyn ScalarValue),
    /// A nested record, `None` when absent.
    Nested(Option<&'a dyn Record>),
    /// A one-of record, `None` when absent.
    OneOf(Option<&'a dyn Record>),
    /// The elements of a repeated record field, in order.
    Repeated(Vec<&'a dyn Record>),
}

impl FieldRef<'_> {
    /// Shape of the field.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::RepeatedScalar(_) => Shape::RepeatedScalar,
            Self::Nested(_) => Shape::Nested,
            Self::OneOf(_) => Shape::OneOf,
            Self::Repeated(_) => Shape::RepeatedRecord,
        }
    }
}

/// Write access to one field.
pub enum FieldMut<'a> {
    /// A plain value.
    Scalar(&'a mut dyn ScalarValue),
    /// A sequence of plain values, replaced as a whole.
    RepeatedScalar(&'a mut dyn ScalarValue),
    /// A nested record slot.
    Nested(&'a mut dyn NestedSlot),
    /// A one-of record slot.
    OneOf(&'a mut dyn OneOfSlot),
    /// A repeated record slot.
    Repeated(&'a mut dyn RepeatedSlot),
}

impl FieldMut<'_> {
    /// Shape of the field.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::RepeatedScalar(_) => Shape::RepeatedScalar,
            Self::Nested(_) => Shape::Nested,
            Self::OneOf(_) => Shape::OneOf,
            Self::Repeated(_) => Shape::RepeatedRecord,
        }
    }
}

impl fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldMut").field(&self.shape()).finish()
    }
}

/// A record type that can be stored in a nested or repeated field.
///
/// [`impl_record!`](crate::impl_record) implements it for the record itself;
/// `Box<T>` forwards to `T` so recursive records work.
pub trait Embedded: Sized + 'static {
    /// Views the value as a record.
    fn as_record(&self) -> &dyn Record;

    /// Allocates a default-valued record of this type.
    fn blank() -> Box<dyn Record>;

    /// Converts a boxed record of this type back into the value.
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] when `record` has a different type.
    fn from_record(record: Box<dyn Record>) -> Result<Self, Mismatch>;
}

impl<T: Embedded> Embedded for Box<T> {
    fn as_record(&self) -> &dyn Record {
        (**self).as_record()
    }

    fn blank() -> Box<dyn Record> {
        T::blank()
    }

    fn from_record(record: Box<dyn Record>) -> Result<Self, Mismatch> {
        T::from_record(record).map(Box::new)
    }
}

/// An enum whose variants each hold a different record type.
///
/// This is the polymorphic field shape: the declared type is the enum, the
/// concrete value is whichever variant is present. Implement it with
/// [`impl_one_of!`](crate::impl_one_of).
pub trait OneOf: Sized + 'static {
    /// Name of the enum, for diagnostics.
    fn one_of_name() -> &'static str;

    /// Views the present variant as a record.
    fn as_record(&self) -> &dyn Record;

    /// Returns `true` when some variant can hold `record`.
    fn accepts(record: &dyn Record) -> bool;

    /// Wraps `record` in the variant holding its type.
    ///
    /// # Errors
    ///
    /// Returns a [`Mismatch`] when no variant holds that type.
    fn from_record(record: Box<dyn Record>) -> Result<Self, Mismatch>;
}

/// Destination side of a nested record field.
pub trait NestedSlot {
    /// Current value.
    fn view(&self) -> Option<&dyn Record>;
    /// Allocates a default-valued record of the declared type.
    fn blank(&self) -> Box<dyn Record>;
    /// Stores `value`, or clears the field for `None`.
    fn assign(&mut self, value: Option<Box<dyn Record>>) -> Result<(), Mismatch>;
}

impl<T: Embedded> NestedSlot for Option<T> {
    fn view(&self) -> Option<&dyn Record> {
        self.as_ref().map(Embedded::as_record)
    }

    fn blank(&self) -> Box<dyn Record> {
        T::blank()
    }

    fn assign(&mut self, value: Option<Box<dyn Record>>) -> Result<(), Mismatch> {
        *self = value.map(T::from_record).transpose()?;
        Ok(())
    }
}

/// Destination side of a one-of field.
pub trait OneOfSlot {
    /// Current value.
    fn view(&self) -> Option<&dyn Record>;
    /// Returns `true` when the declared enum has a variant for `record`.
    fn accepts(&self, record: &dyn Record) -> bool;
    /// Name of the declared enum.
    fn expected(&self) -> &'static str;
    /// Stores `value`, or clears the field for `None`.
    fn assign(&mut self, value: Option<Box<dyn Record>>) -> Result<(), Mismatch>;
}

impl<E: OneOf> OneOfSlot for Option<E> {
    fn view(&self) -> Option<&dyn Record> {
        self.as_ref().map(OneOf::as_record)
    }

    fn accepts(&self, record: &dyn Record) -> bool {
        E::accepts(record)
    }

    fn expected(&self) -> &'static str {
        E::one_of_name()
    }

    fn assign(&mut self, value: Option<Box<dyn Record>>) -> Result<(), Mismatch> {
        *self = value.map(E::from_record).transpose()?;
        Ok(())
    }
}

/// Destination side of a repeated record field.
pub trait RepeatedSlot {
    /// Current elements, in order.
    fn view(&self) -> Vec<&dyn Record>;
    /// Allocates a default-valued element of the declared type.
    fn blank(&self) -> Box<dyn Record>;
    /// Replaces the elements.
    fn assign(&mut self, items: Vec<Box<dyn Record>>) -> Result<(), Mismatch>;
}

impl<T: Embedded> RepeatedSlot for Vec<T> {
    fn view(&self) -> Vec<&dyn Record> {
        self.iter().map(Embedded::as_record).collect()
    }

    fn blank(&self) -> Box<dyn Record> {
        T::blank()
    }

    fn assign(&mut self, items: Vec<Box<dyn Record>>) -> Result<(), Mismatch> {
        *self = items
            .into_iter()
            .map(T::from_record)
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}
