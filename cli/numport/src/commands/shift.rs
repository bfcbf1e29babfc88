//! `numport shift`: evaluate a right-shift primitive.

use anyhow::{bail, Context, Result};

use numport_core::{
    arithmetic_shift_right, arithmetic_shift_right_32, arithmetic_shift_right_64,
    logical_shift_right, logical_shift_right_32, logical_shift_right_64, NaturalInt, NaturalUInt,
    NATURAL_BITS,
};

/// Print the result of shifting `value` right by `amount` bits.
pub fn run(kind: &str, width: Option<&str>, value: &str, amount: u32) -> Result<()> {
    println!("{}", evaluate(kind, width, value, amount)?);
    Ok(())
}

/// Operand width of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Native,
    W32,
    W64,
}

impl Width {
    fn parse(width: Option<&str>) -> Result<Self> {
        match width.unwrap_or("native") {
            "native" => Ok(Width::Native),
            "32" => Ok(Width::W32),
            "64" => Ok(Width::W64),
            other => bail!("unknown width: '{other}' (expected native, 32 or 64)"),
        }
    }

    fn bits(self) -> u32 {
        match self {
            Width::Native => NATURAL_BITS,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}

/// Shift `value` right and format the result as decimal and hex.
///
/// Values may be written in decimal, `0x` hex or `0b` binary, and are
/// accepted either as signed or as a raw unsigned bit pattern of the width.
pub fn evaluate(kind: &str, width: Option<&str>, value: &str, amount: u32) -> Result<String> {
    let width = Width::parse(width)?;
    let bits = width.bits();
    if amount >= bits {
        bail!("shift amount {amount} out of range for a {bits}-bit operand");
    }
    let n = parse_integer(value)?;
    let out_of_range = || format!("{value} does not fit in {bits} bits");

    let formatted = match (kind, width) {
        ("arithmetic", Width::Native) => {
            let v = signed_bits::<NaturalInt, NaturalUInt>(n).with_context(out_of_range)?;
            let r = arithmetic_shift_right(v, amount);
            format!("{r} (0x{r:X})")
        }
        ("logical", Width::Native) => {
            let v = unsigned_bits::<NaturalUInt, NaturalInt>(n).with_context(out_of_range)?;
            let r = logical_shift_right(v, amount);
            format!("{r} (0x{r:X})")
        }
        ("arithmetic", Width::W32) => {
            let v = signed_bits::<i32, u32>(n).with_context(out_of_range)?;
            let r = arithmetic_shift_right_32(v, amount);
            format!("{r} (0x{r:X})")
        }
        ("logical", Width::W32) => {
            let v = unsigned_bits::<u32, i32>(n).with_context(out_of_range)?;
            let r = logical_shift_right_32(v, amount);
            format!("{r} (0x{r:X})")
        }
        ("arithmetic", Width::W64) => {
            let v = signed_bits::<i64, u64>(n).with_context(out_of_range)?;
            let r = arithmetic_shift_right_64(v, amount);
            format!("{r} (0x{r:X})")
        }
        ("logical", Width::W64) => {
            let v = unsigned_bits::<u64, i64>(n).with_context(out_of_range)?;
            let r = logical_shift_right_64(v, amount);
            format!("{r} (0x{r:X})")
        }
        (other, _) => bail!("unknown shift kind: '{other}' (expected arithmetic or logical)"),
    };
    Ok(formatted)
}

/// Parse a decimal, `0x` hex or `0b` binary integer with optional sign.
fn parse_integer(s: &str) -> Result<i128> {
    let cleaned = s.replace('_', "");
    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i128::from_str_radix(hex, 16)
    } else if let Some(bin) = digits
        .strip_prefix("0b")
        .or_else(|| digits.strip_prefix("0B"))
    {
        i128::from_str_radix(bin, 2)
    } else {
        digits.parse::<i128>()
    }
    .with_context(|| format!("invalid integer: '{s}'"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// A signed operand, taking in-range unsigned values as raw bit patterns.
fn signed_bits<S, U>(n: i128) -> Option<S>
where
    S: TryFrom<i128>,
    U: TryFrom<i128> + ReinterpretAs<S>,
{
    S::try_from(n)
        .ok()
        .or_else(|| U::try_from(n).ok().map(ReinterpretAs::reinterpret))
}

/// An unsigned operand, taking in-range negative values as raw bit patterns.
fn unsigned_bits<U, S>(n: i128) -> Option<U>
where
    U: TryFrom<i128>,
    S: TryFrom<i128> + ReinterpretAs<U>,
{
    U::try_from(n)
        .ok()
        .or_else(|| S::try_from(n).ok().map(ReinterpretAs::reinterpret))
}

/// Same-width bit reinterpretation between signed and unsigned integers.
trait ReinterpretAs<T> {
    fn reinterpret(self) -> T;
}

macro_rules! impl_reinterpret {
    ($a:ty, $b:ty) => {
        impl ReinterpretAs<$b> for $a {
            fn reinterpret(self) -> $b {
                self as $b
            }
        }
        impl ReinterpretAs<$a> for $b {
            fn reinterpret(self) -> $a {
                self as $a
            }
        }
    };
}

impl_reinterpret!(i32, u32);
impl_reinterpret!(i64, u64);
