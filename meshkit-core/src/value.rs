//! Conversions between typed values and configuration strings
//!
//! Every [`Describable`] enum family converts through its canonical token, so
//! a configuration store only needs [`ConfigurationValue`] to persist mesh
//! metadata.

use crate::descriptor::Describable;
use crate::error::{Error, Result};

/// A value that can be stored as a configuration string
pub trait ConfigurationValue: Sized {
    fn to_configuration_string(&self) -> String;

    fn from_configuration_string(value: &str) -> Result<Self>;
}

impl<T: Describable> ConfigurationValue for T {
    fn to_configuration_string(&self) -> String {
        self.token().to_string()
    }

    fn from_configuration_string(value: &str) -> Result<Self> {
        T::from_token(value)
    }
}

impl ConfigurationValue for String {
    fn to_configuration_string(&self) -> String {
        self.clone()
    }

    fn from_configuration_string(value: &str) -> Result<Self> {
        Ok(value.to_string())
    }
}

impl ConfigurationValue for bool {
    fn to_configuration_string(&self) -> String {
        self.to_string()
    }

    fn from_configuration_string(value: &str) -> Result<Self> {
        match value.trim() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::InvalidValue {
                expected: "boolean",
                value: value.to_string(),
            }),
        }
    }
}

macro_rules! impl_integer_value {
    ($($t:ty),*) => {
        $(
            impl ConfigurationValue for $t {
                fn to_configuration_string(&self) -> String {
                    self.to_string()
                }

                fn from_configuration_string(value: &str) -> Result<Self> {
                    let trimmed = value.trim();
                    let parsed = match trimmed
                        .strip_prefix("0x")
                        .or_else(|| trimmed.strip_prefix("0X"))
                    {
                        Some(hex) => <$t>::from_str_radix(hex, 16),
                        None => trimmed.parse::<$t>(),
                    };
                    parsed.map_err(|_| Error::InvalidValue {
                        expected: stringify!($t),
                        value: value.to_string(),
                    })
                }
            }
        )*
    };
}

impl_integer_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! impl_float_value {
    ($($t:ty),*) => {
        $(
            impl ConfigurationValue for $t {
                fn to_configuration_string(&self) -> String {
                    self.to_string()
                }

                fn from_configuration_string(value: &str) -> Result<Self> {
                    value.trim().parse::<$t>().map_err(|_| Error::InvalidValue {
                        expected: stringify!($t),
                        value: value.to_string(),
                    })
                }
            }
        )*
    };
}

impl_float_value!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{IndexType, Primitive};

    #[test]
    fn test_enum_values_use_tokens() {
        assert_eq!(Primitive::LineStrip.to_configuration_string(), "LineStrip");
        assert_eq!(IndexType::UnsignedByte.to_configuration_string(), "UnsignedByte");
        assert_eq!(
            Primitive::from_configuration_string("LineStrip").unwrap(),
            Primitive::LineStrip
        );
        assert_eq!(
            IndexType::from_configuration_string("UnsignedByte").unwrap(),
            IndexType::UnsignedByte
        );
    }

    #[test]
    fn test_enum_value_rejects_unknown_token() {
        let err = Primitive::from_configuration_string("NotARealToken").unwrap_err();
        assert!(err.is_invalid_token());
    }

    #[test]
    fn test_integers() {
        assert_eq!(u32::from_configuration_string("42").unwrap(), 42);
        assert_eq!(u32::from_configuration_string(" 0x1405 ").unwrap(), 0x1405);
        assert_eq!(i16::from_configuration_string("-7").unwrap(), -7);
        assert!(u8::from_configuration_string("256").is_err());
        assert!(i32::from_configuration_string("seven").is_err());
    }

    #[test]
    fn test_floats_roundtrip_exactly() {
        let value = 0.1f32 + 0.2f32;
        let text = value.to_configuration_string();
        assert_eq!(f32::from_configuration_string(&text).unwrap(), value);
        assert!(f64::from_configuration_string("1.5e3").unwrap() == 1500.0);
    }

    #[test]
    fn test_booleans() {
        assert!(bool::from_configuration_string("true").unwrap());
        assert!(bool::from_configuration_string("on").unwrap());
        assert!(!bool::from_configuration_string("0").unwrap());
        assert!(bool::from_configuration_string("maybe").is_err());
        assert_eq!(true.to_configuration_string(), "true");
    }
}
