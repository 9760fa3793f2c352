//! The `quantity!` generator for concrete quantity types.

/// Declares a quantity value type from a table of units.
///
/// ```
/// use measure_core::{quantity, Dimension, Quantity};
///
/// quantity! {
///     /// Electric charge.
///     pub struct Charge {
///         display_name: "Electric Charge",
///         dimension: Dimension::new(0, 0, 1, 1, 0, 0, 0),
///         standard: coulomb => "C",
///         units: {
///             milli_coulomb => prefixed(Milli),
///             ampere_hour => factor("Ah", 3600.0),
///         }
///     }
/// }
///
/// let q = Charge::new_in(2.0, Charge::ampere_hour());
/// assert_eq!(q.amount(), 7200.0);
/// assert_eq!(Charge::display_name(), "Electric Charge");
/// ```
///
/// Unit forms:
/// * `prefixed(Milli)`: metric prefix applied to the standard symbol.
/// * `factor("sym", f)`: `standard = f × amount`.
/// * `affine("sym", scale, offset)`: `standard = scale × amount + offset`.
///
/// The generated type stores its amount in the standard unit. It gets
/// arithmetic with itself, with [`Measure`](crate::Measure) of the same
/// quantity, with `f32`/`f64` scalars (and `Decimal` under the `decimal` feature) and with [`Number`](crate::Number).
/// Mixing two different quantities does not type-check.
#[macro_export]
macro_rules! quantity {
    (@unit $name:ident, prefixed ( $prefix:ident )) => {{
        let unit: ::std::boxed::Box<dyn $crate::Unit<$name>> = ::std::boxed::Box::new(
            $crate::ConstantFactorUnit::<$name>::prefixed($crate::UnitPrefix::$prefix),
        );
        unit
    }};

    (@unit $name:ident, factor ( $symbol:expr, $factor:expr )) => {{
        let unit: ::std::boxed::Box<dyn $crate::Unit<$name>> = ::std::boxed::Box::new(
            $crate::ConstantFactorUnit::<$name>::new($symbol, $factor)
                .expect(concat!("invalid conversion factor for ", stringify!($name))),
        );
        unit
    }};

    (@unit $name:ident, affine ( $symbol:expr, $scale:expr, $offset:expr )) => {{
        let unit: ::std::boxed::Box<dyn $crate::Unit<$name>> = ::std::boxed::Box::new(
            $crate::AffineUnit::<$name>::new($symbol, $scale, $offset)
                .expect(concat!("invalid affine unit for ", stringify!($name))),
        );
        unit
    }};

    // Arithmetic against `Number`; `Number` itself defines these by hand.
    (@number_ops $name:ident) => {
        impl ::std::ops::Mul<$crate::Number> for $name {
            type Output = $name;

            fn mul(self, scalar: $crate::Number) -> $name {
                $name { amount: self.amount * scalar.amount() }
            }
        }

        impl ::std::ops::Div<$crate::Number> for $name {
            type Output = $name;

            fn div(self, scalar: $crate::Number) -> $name {
                $name { amount: self.amount / scalar.amount() }
            }
        }

        impl ::std::ops::Div for $name {
            type Output = $crate::Number;

            fn div(self, divisor: $name) -> $crate::Number {
                $crate::Number::new(self.amount / divisor.amount)
            }
        }
    };

    (@core
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            display_name: $display:expr,
            dimension: $dimension:expr,
            standard: $std_fn:ident => $std_symbol:expr,
            units: {
                $( $unit_fn:ident => $kind:ident ( $($args:tt)* ) ),* $(,)?
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
        $vis struct $name {
            amount: f32,
        }

        impl $name {
            pub const ZERO: $name = $name { amount: 0.0 };

            /// Amount in the standard unit.
            pub fn new(standard_amount: impl $crate::IntoAmount) -> Self {
                Self {
                    amount: $crate::IntoAmount::into_amount(standard_amount),
                }
            }

            /// Amount in `unit`, converted to the standard unit immediately.
            pub fn new_in(amount: impl $crate::IntoAmount, unit: &dyn $crate::Unit<$name>) -> Self {
                Self {
                    amount: $crate::AnyUnit::to_standard(unit, $crate::IntoAmount::into_amount(amount)),
                }
            }

            pub fn from_measure(other: &impl $crate::MeasureOf<$name>) -> Self {
                Self {
                    amount: $crate::MeasureOf::standard_amount(other),
                }
            }

            /// Machine epsilon of the amount type, in the standard unit.
            pub fn epsilon() -> Self {
                Self {
                    amount: *$crate::factors::MACHINE_EPSILON,
                }
            }

            pub fn amount(&self) -> f32 {
                self.amount
            }

            pub fn standard_amount(&self) -> f32 {
                self.amount
            }

            pub fn unit(&self) -> &'static dyn $crate::Unit<$name> {
                Self::$std_fn()
            }

            pub fn get_amount(&self, unit: &dyn $crate::Unit<$name>) -> f32 {
                $crate::AnyUnit::from_standard(unit, self.amount)
            }

            /// # Errors
            ///
            /// [`Error::DimensionMismatch`]($crate::Error::DimensionMismatch)
            /// if `unit` belongs to another quantity.
            pub fn get_amount_any(&self, unit: &dyn $crate::AnyUnit) -> $crate::Result<f32> {
                $crate::AnyMeasure::get_amount_any(self, unit)
            }

            /// This value as a generic measure in `unit`.
            pub fn in_unit(&self, unit: &'static dyn $crate::Unit<$name>) -> $crate::Measure<$name> {
                $crate::Measure::new(self.get_amount(unit), unit)
            }

            pub fn $std_fn() -> &'static dyn $crate::Unit<$name> {
                static UNIT: $crate::__private::Lazy<$crate::ConstantFactorUnit<$name>> =
                    $crate::__private::Lazy::new(|| $crate::ConstantFactorUnit::standard($std_symbol));
                &*UNIT
            }

            $(
                pub fn $unit_fn() -> &'static dyn $crate::Unit<$name> {
                    static UNIT: $crate::__private::Lazy<::std::boxed::Box<dyn $crate::Unit<$name>>> =
                        $crate::__private::Lazy::new(|| $crate::quantity!(@unit $name, $kind ( $($args)* )));
                    &**UNIT
                }
            )*
        }

        impl $crate::Quantity for $name {
            fn info() -> &'static $crate::QuantityInfo {
                static INFO: $crate::__private::Lazy<$crate::QuantityInfo> =
                    $crate::__private::Lazy::new(|| $crate::QuantityInfo::of::<$name>($display, $dimension));
                &INFO
            }

            fn standard_unit() -> &'static dyn $crate::Unit<$name> {
                Self::$std_fn()
            }

            fn units() -> &'static [&'static dyn $crate::Unit<$name>] {
                static UNITS: $crate::__private::Lazy<::std::vec::Vec<&'static dyn $crate::Unit<$name>>> =
                    $crate::__private::Lazy::new(|| ::std::vec![$name::$std_fn() $(, $name::$unit_fn())*]);
                &UNITS
            }

            fn from_standard_amount(amount: f32) -> Self {
                Self { amount }
            }
        }

        impl $crate::MeasureOf<$name> for $name {
            fn amount(&self) -> f32 {
                self.amount
            }

            fn standard_amount(&self) -> f32 {
                self.amount
            }

            fn unit(&self) -> &'static dyn $crate::Unit<$name> {
                $name::$std_fn()
            }
        }

        impl $crate::AnyMeasure for $name {
            fn amount(&self) -> f32 {
                self.amount
            }

            fn standard_amount(&self) -> f32 {
                self.amount
            }

            fn any_unit(&self) -> &dyn $crate::AnyUnit {
                $crate::Unit::as_any($name::$std_fn())
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $crate::__private::hash_amount(self.amount, state);
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::__private::format_amount(f, self.amount, $crate::AnyUnit::symbol($name::$std_fn()))
            }
        }

        impl ::std::convert::From<$crate::Measure<$name>> for $name {
            fn from(measure: $crate::Measure<$name>) -> Self {
                measure.into_quantity()
            }
        }

        impl ::std::ops::Add for $name {
            type Output = $name;

            fn add(self, rhs: $name) -> $name {
                $name { amount: self.amount + rhs.amount }
            }
        }

        impl ::std::ops::Add<$crate::Measure<$name>> for $name {
            type Output = $name;

            fn add(self, rhs: $crate::Measure<$name>) -> $name {
                $name { amount: self.amount + rhs.standard_amount() }
            }
        }

        impl ::std::ops::Add<$name> for $crate::Measure<$name> {
            type Output = $crate::Measure<$name>;

            fn add(self, rhs: $name) -> $crate::Measure<$name> {
                $crate::Measure::add(&self, &rhs)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = $name;

            fn sub(self, rhs: $name) -> $name {
                $name { amount: self.amount - rhs.amount }
            }
        }

        impl ::std::ops::Sub<$crate::Measure<$name>> for $name {
            type Output = $name;

            fn sub(self, rhs: $crate::Measure<$name>) -> $name {
                $name { amount: self.amount - rhs.standard_amount() }
            }
        }

        impl ::std::ops::Sub<$name> for $crate::Measure<$name> {
            type Output = $crate::Measure<$name>;

            fn sub(self, rhs: $name) -> $crate::Measure<$name> {
                self.subtract(&rhs)
            }
        }

        impl ::std::ops::Mul<f32> for $name {
            type Output = $name;

            fn mul(self, scalar: f32) -> $name {
                $name { amount: self.amount * scalar }
            }
        }

        impl ::std::ops::Mul<f64> for $name {
            type Output = $name;

            fn mul(self, scalar: f64) -> $name {
                $name { amount: self.amount * $crate::IntoAmount::into_amount(scalar) }
            }
        }

        impl ::std::ops::Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, measure: $name) -> $name {
                $name { amount: self * measure.amount }
            }
        }

        impl ::std::ops::Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, measure: $name) -> $name {
                $name { amount: $crate::IntoAmount::into_amount(self) * measure.amount }
            }
        }

        impl ::std::ops::Div<f32> for $name {
            type Output = $name;

            fn div(self, scalar: f32) -> $name {
                $name { amount: self.amount / scalar }
            }
        }

        impl ::std::ops::Div<f64> for $name {
            type Output = $name;

            fn div(self, scalar: f64) -> $name {
                $name { amount: self.amount / $crate::IntoAmount::into_amount(scalar) }
            }
        }

        impl ::std::ops::Div<$crate::Measure<$name>> for $name {
            type Output = $crate::Number;

            fn div(self, divisor: $crate::Measure<$name>) -> $crate::Number {
                $crate::Number::new(self.amount / divisor.standard_amount())
            }
        }

        impl ::std::ops::Div<$name> for $crate::Measure<$name> {
            type Output = $crate::Number;

            fn div(self, divisor: $name) -> $crate::Number {
                self.divide(&divisor)
            }
        }

        impl ::std::cmp::PartialEq<$crate::Measure<$name>> for $name {
            fn eq(&self, other: &$crate::Measure<$name>) -> bool {
                self.amount == other.standard_amount()
            }
        }

        impl ::std::cmp::PartialEq<$name> for $crate::Measure<$name> {
            fn eq(&self, other: &$name) -> bool {
                self.equals(other)
            }
        }

        impl ::std::cmp::PartialOrd<$crate::Measure<$name>> for $name {
            fn partial_cmp(&self, other: &$crate::Measure<$name>) -> ::std::option::Option<::std::cmp::Ordering> {
                self.amount.partial_cmp(&other.standard_amount())
            }
        }

        impl ::std::cmp::PartialOrd<$name> for $crate::Measure<$name> {
            fn partial_cmp(&self, other: &$name) -> ::std::option::Option<::std::cmp::Ordering> {
                self.compare(other)
            }
        }

        $crate::__impl_quantity_decimal!($name);
        $crate::__impl_quantity_serde!($name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            display_name: $display:expr,
            dimension: $dimension:expr,
            standard: $std_fn:ident => $std_symbol:expr,
            units: {
                $( $unit_fn:ident => $kind:ident ( $($args:tt)* ) ),* $(,)?
            } $(,)?
        }
    ) => {
        $crate::quantity!(@core
            $(#[$meta])*
            $vis struct $name {
                display_name: $display,
                dimension: $dimension,
                standard: $std_fn => $std_symbol,
                units: { $( $unit_fn => $kind ( $($args)* ) ),* }
            }
        );
        $crate::quantity!(@number_ops $name);
    };
}

#[cfg(feature = "decimal")]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_quantity_decimal {
    ($name:ident) => {
        impl ::std::ops::Mul<$crate::__private::Decimal> for $name {
            type Output = $name;

            fn mul(self, scalar: $crate::__private::Decimal) -> $name {
                $name { amount: self.amount * $crate::IntoAmount::into_amount(scalar) }
            }
        }

        impl ::std::ops::Mul<$name> for $crate::__private::Decimal {
            type Output = $name;

            fn mul(self, measure: $name) -> $name {
                $name { amount: $crate::IntoAmount::into_amount(self) * measure.amount }
            }
        }

        impl ::std::ops::Div<$crate::__private::Decimal> for $name {
            type Output = $name;

            fn div(self, scalar: $crate::__private::Decimal) -> $name {
                $name { amount: self.amount / $crate::IntoAmount::into_amount(scalar) }
            }
        }
    };
}

#[cfg(not(feature = "decimal"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_quantity_decimal {
    ($name:ident) => {};
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_quantity_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_f32(self.amount)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <f32 as $crate::__private::serde::Deserialize>::deserialize(deserializer)
                    .map(|amount| $name { amount })
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_quantity_serde {
    ($name:ident) => {};
}
