/// Defines a newtype handle around a `usize` arena index and generates the
/// derives (Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
/// Serialize, Deserialize), `Display`, the `usize` conversions, and the
/// counter helpers the [`Timetable`](crate::timetable::Timetable) registry
/// uses to hand out fresh handles.
///
/// Usage:
///   define_handle_type!(CourseId);
#[macro_export]
macro_rules! define_handle_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub usize);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::convert::From<usize> for $name {
            fn from(v: usize) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for usize {
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl $name {
            /// First handle a fresh registry hands out.
            pub const fn first() -> Self {
                $name(0)
            }

            /// The handle after this one in allocation order.
            pub const fn next(self) -> Self {
                $name(self.0 + 1)
            }

            pub const fn value(self) -> usize {
                self.0
            }
        }
    };
}
