//! crates/structcopy/src/macros.rs
//!
//! Declarative macros that implement [`Record`](crate::Record) and
//! [`OneOf`](crate::OneOf) for plain Rust types.

/// Implements [`Record`](crate::Record) and [`Embedded`](crate::Embedded)
/// for a struct.
///
/// Each field is listed with its shape keyword:
///
/// | keyword   | field type                         |
/// |-----------|------------------------------------|
/// | `scalar`  | any `Clone + Debug + Serialize`     |
/// | `scalars` | `Vec` of such values               |
/// | `nested`  | `Option<T>` or `Option<Box<T>>`    |
/// | `one_of`  | `Option<E>` where `E: OneOf`       |
/// | `records` | `Vec<T>` of records                |
///
/// The struct must implement [`Default`] and [`Debug`](std::fmt::Debug).
/// Fields left out of the list are invisible to the copy engine.
///
/// # Examples
///
/// ```
/// use structcopy::impl_record;
///
/// #[derive(Debug, Default)]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Debug, Default)]
/// struct Person {
///     name: String,
///     nicknames: Vec<String>,
///     home: Option<Address>,
///     previous: Vec<Address>,
/// }
///
/// impl_record!(Address { scalar city });
/// impl_record!(Person {
///     scalar name,
///     scalars nicknames,
///     nested home,
///     records previous,
/// });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($record:ident { $($shape:ident $field:ident),* $(,)? }) => {
        impl $crate::Record for $record {
            fn record_name() -> &'static str {
                ::core::stringify!($record)
            }

            fn record_type(&self) -> &'static str {
                ::core::stringify!($record)
            }

            fn field_names(&self) -> &'static [&'static str] {
                &[$(::core::stringify!($field)),*]
            }

            fn field(&self, name: &str) -> ::core::option::Option<$crate::FieldRef<'_>> {
                match name {
                    $(::core::stringify!($field) => ::core::option::Option::Some(
                        $crate::__field_ref!($shape, self.$field),
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<$crate::FieldMut<'_>> {
                match name {
                    $(::core::stringify!($field) => ::core::option::Option::Some(
                        $crate::__field_mut!($shape, self.$field),
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn fresh(&self) -> ::std::boxed::Box<dyn $crate::Record> {
                ::std::boxed::Box::new(<Self as ::core::default::Default>::default())
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn into_any(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::boxed::Box<dyn ::core::any::Any> {
                self
            }
        }

        impl $crate::Embedded for $record {
            fn as_record(&self) -> &dyn $crate::Record {
                self
            }

            fn blank() -> ::std::boxed::Box<dyn $crate::Record> {
                ::std::boxed::Box::new(<Self as ::core::default::Default>::default())
            }

            fn from_record(
                record: ::std::boxed::Box<dyn $crate::Record>,
            ) -> ::core::result::Result<Self, $crate::Mismatch> {
                $crate::downcast_record::<Self>(record)
            }
        }
    };
}

/// Implements [`OneOf`](crate::OneOf) for an enum whose variants each wrap
/// one record type.
///
/// # Examples
///
/// ```
/// use structcopy::{impl_one_of, impl_record};
///
/// #[derive(Debug, Default)]
/// struct Email {
///     address: String,
/// }
///
/// #[derive(Debug, Default)]
/// struct Phone {
///     number: String,
/// }
///
/// impl_record!(Email { scalar address });
/// impl_record!(Phone { scalar number });
///
/// #[derive(Debug)]
/// enum Contact {
///     Email(Email),
///     Phone(Phone),
/// }
///
/// impl_one_of!(Contact { Email(Email), Phone(Phone) });
/// ```
#[macro_export]
macro_rules! impl_one_of {
    ($one_of:ident { $($variant:ident($record:ty)),+ $(,)? }) => {
        impl $crate::OneOf for $one_of {
            fn one_of_name() -> &'static str {
                ::core::stringify!($one_of)
            }

            fn as_record(&self) -> &dyn $crate::Record {
                match self {
                    $(Self::$variant(inner) => inner as &dyn $crate::Record,)+
                }
            }

            fn accepts(record: &dyn $crate::Record) -> bool {
                let any = $crate::Record::as_any(record);
                $(any.is::<$record>())||+
            }

            fn from_record(
                record: ::std::boxed::Box<dyn $crate::Record>,
            ) -> ::core::result::Result<Self, $crate::Mismatch> {
                let found = $crate::Record::record_type(&*record);
                $(
                    if $crate::Record::as_any(&*record).is::<$record>() {
                        return $crate::downcast_record::<$record>(record).map(Self::$variant);
                    }
                )+
                ::core::result::Result::Err($crate::Mismatch {
                    expected: ::core::stringify!($one_of),
                    found,
                })
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_ref {
    (scalar, $value:expr) => {
        $crate::FieldRef::Scalar(&$value)
    };
    (scalars, $value:expr) => {
        $crate::FieldRef::RepeatedScalar(&$value)
    };
    (nested, $value:expr) => {
        $crate::FieldRef::Nested($crate::NestedSlot::view(&$value))
    };
    (one_of, $value:expr) => {
        $crate::FieldRef::OneOf($crate::OneOfSlot::view(&$value))
    };
    (records, $value:expr) => {
        $crate::FieldRef::Repeated($crate::RepeatedSlot::view(&$value))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_mut {
    (scalar, $value:expr) => {
        $crate::FieldMut::Scalar(&mut $value)
    };
    (scalars, $value:expr) => {
        $crate::FieldMut::RepeatedScalar(&mut $value)
    };
    (nested, $value:expr) => {
        $crate::FieldMut::Nested(&mut $value)
    };
    (one_of, $value:expr) => {
        $crate::FieldMut::OneOf(&mut $value)
    };
    (records, $value:expr) => {
        $crate::FieldMut::Repeated(&mut $value)
    };
}
