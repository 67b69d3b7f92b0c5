//! Dynamic binding surface
//!
//! Embedders that only have loosely typed values (numbers as doubles,
//! strings, booleans, handles to 64-bit values) drive the value type through
//! [`construct`] and [`call`]. This is where operands are marshaled and where
//! missing or mistyped arguments are reported.

mod args;

use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::value::N64;
use args::Args;
pub use args::to_uint32;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A host-side value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Int64(N64),
}

impl Operand {
    /// Get type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Null => "null",
            Operand::Bool(_) => "boolean",
            Operand::Number(_) => "number",
            Operand::Str(_) => "string",
            Operand::Int64(_) => "int64",
        }
    }

    pub fn as_int64(&self) -> Option<N64> {
        match self {
            Operand::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Render for display, formatting 64-bit values in `radix`
    pub fn render(&self, radix: u32) -> String {
        match self {
            Operand::Int64(n) => match n.to_string_radix(radix) {
                Ok(digits) => format!("<{}: {}>", n.mode().prefix(), digits),
                Err(_) => format!("{n:?}"),
            },
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Null => write!(f, "null"),
            Operand::Bool(b) => write!(f, "{b}"),
            Operand::Number(n) => write!(f, "{n}"),
            Operand::Str(s) => write!(f, "{s:?}"),
            Operand::Int64(n) => write!(f, "{n:?}"),
        }
    }
}

impl From<N64> for Operand {
    fn from(n: N64) -> Self {
        Operand::Int64(n)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Number(n)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Str(s.to_string())
    }
}

fn ordering(o: Ordering) -> Operand {
    Operand::Number(match o {
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
        Ordering::Greater => 1.0,
    })
}

/// Build a value the way the host constructor does.
///
/// - `()` is zero
/// - `(number, number[, signed])` joins `(hi, lo)`
/// - `(number[, signed])` converts an exact integer
/// - `(string[, signed][, base])` decodes a string
/// - `(signed)` is zero in that mode
///
/// `mode` applies when no `signed` flag is given.
pub fn construct(args: &[Operand], mode: Mode) -> Result<N64> {
    log::trace!("construct {args:?}");
    let args = Args::new("Int64", args);
    let mut n = N64::with_mode(mode);

    match args.get(0) {
        None | Some(Operand::Null) => {}
        Some(Operand::Number(_)) if matches!(args.get(1), Some(Operand::Number(_))) => {
            n.set_mode(args.flag(2, "signed")?.map_or(mode, Mode::from_signed));
            n.join(args.uint32(0, "hi")?, args.uint32(1, "lo")?);
        }
        Some(Operand::Number(num)) => {
            n.set_mode(args.flag(1, "signed")?.map_or(mode, Mode::from_signed));
            n.set_number(*num)?;
        }
        Some(Operand::Str(s)) => {
            // a number in the flag position is the base
            let (flag, base) = match args.get(1) {
                Some(Operand::Number(_)) => (None, args.base(1)?),
                _ => (args.flag(1, "signed")?, args.base(2)?),
            };
            n.set_mode(flag.map_or(mode, Mode::from_signed));
            n.set_string(s, base)?;
        }
        Some(Operand::Bool(signed)) => {
            n.set_signed(*signed);
        }
        Some(Operand::Int64(other)) => {
            n.inject(other);
        }
    }

    Ok(n)
}

/// True for operations that change the receiver in place
pub fn is_mutator(method: &str) -> bool {
    matches!(
        method,
        "setHi"
            | "setLo"
            | "setSigned"
            | "iadd"
            | "iaddn"
            | "isub"
            | "isubn"
            | "imul"
            | "imuln"
            | "idiv"
            | "idivn"
            | "imod"
            | "imodn"
            | "ipow"
            | "ipown"
            | "isqr"
            | "iand"
            | "iandn"
            | "ior"
            | "iorn"
            | "ixor"
            | "ixorn"
            | "inot"
            | "ishl"
            | "ishln"
            | "ishr"
            | "ishrn"
            | "iushr"
            | "iushrn"
            | "setn"
            | "imaskn"
            | "ineg"
            | "iabs"
            | "inject"
            | "set"
            | "join"
            | "fromNumber"
            | "fromInt"
            | "fromBits"
            | "fromString"
    )
}

// Copying forms run their in-place counterpart on a copy.
fn in_place(method: &str) -> Option<&'static str> {
    Some(match method {
        "add" => "iadd",
        "addn" => "iaddn",
        "sub" => "isub",
        "subn" => "isubn",
        "mul" => "imul",
        "muln" => "imuln",
        "div" => "idiv",
        "divn" => "idivn",
        "mod" => "imod",
        "modn" => "imodn",
        "pow" => "ipow",
        "pown" => "ipown",
        "sqr" => "isqr",
        "and" => "iand",
        "andn" => "iandn",
        "or" => "ior",
        "orn" => "iorn",
        "xor" => "ixor",
        "xorn" => "ixorn",
        "not" => "inot",
        "shl" => "ishl",
        "shln" => "ishln",
        "shr" => "ishr",
        "shrn" => "ishrn",
        "ushr" => "iushr",
        "ushrn" => "iushrn",
        "maskn" => "imaskn",
        "neg" => "ineg",
        "abs" => "iabs",
        _ => return None,
    })
}

/// Invoke `method` on `value`.
///
/// Mutators change `value` and return it; everything else leaves it alone.
/// On error `value` is unchanged.
pub fn call(value: &mut N64, method: &str, args: &[Operand]) -> Result<Operand> {
    log::trace!("{value:?}.{method}({args:?})");
    let result = dispatch(value, method, args);
    if let Err(err) = &result {
        log::debug!("{method} failed: {err}");
    }
    result
}

fn dispatch(value: &mut N64, method: &str, args: &[Operand]) -> Result<Operand> {
    if let Some(op) = in_place(method) {
        let mut copy = *value;
        dispatch(&mut copy, op, args)?;
        return Ok(Operand::Int64(copy));
    }

    let a = Args::new(method, args);
    // Validate everything before the first store.
    match method {
        "getHi" => return Ok(Operand::Number(value.hi() as i32 as f64)),
        "getLo" => return Ok(Operand::Number(value.lo() as i32 as f64)),
        "getSigned" => return Ok(Operand::Bool(value.is_signed())),
        "setHi" => {
            value.set_hi(a.uint32(0, "hi")?);
        }
        "setLo" => {
            value.set_lo(a.uint32(0, "lo")?);
        }
        "setSigned" => {
            value.set_signed(a.boolean(0, "signed")?);
        }
        "iadd" => {
            value.iadd(&a.int64(0, "operand")?);
        }
        "iaddn" => {
            value.iaddn(a.int32(0, "operand")?);
        }
        "isub" => {
            value.isub(&a.int64(0, "operand")?);
        }
        "isubn" => {
            value.isubn(a.int32(0, "operand")?);
        }
        "imul" => {
            value.imul(&a.int64(0, "multiplicand")?);
        }
        "imuln" => {
            value.imuln(a.int32(0, "multiplicand")?);
        }
        "idiv" => {
            value.idiv(&a.int64(0, "divisor")?)?;
        }
        "idivn" => {
            value.idivn(a.int32(0, "divisor")?)?;
        }
        "imod" => {
            value.imod(&a.int64(0, "divisor")?)?;
        }
        "imodn" => {
            value.imodn(a.int32(0, "divisor")?)?;
        }
        "ipow" => {
            value.ipow(&a.int64(0, "exponent")?);
        }
        "ipown" => {
            value.ipown(a.uint32(0, "exponent")?);
        }
        "isqr" => {
            value.isqr();
        }
        "iand" => {
            value.iand(&a.int64(0, "operand")?);
        }
        "iandn" => {
            value.iandn(a.int32(0, "operand")?);
        }
        "ior" => {
            value.ior(&a.int64(0, "operand")?);
        }
        "iorn" => {
            value.iorn(a.int32(0, "operand")?);
        }
        "ixor" => {
            value.ixor(&a.int64(0, "operand")?);
        }
        "ixorn" => {
            value.ixorn(a.int32(0, "operand")?);
        }
        "inot" => {
            value.inot();
        }
        "ishl" => {
            value.ishl(&a.int64(0, "bits")?);
        }
        "ishln" => {
            value.ishln(a.uint32(0, "bits")?);
        }
        "ishr" => {
            value.ishr(&a.int64(0, "bits")?);
        }
        "ishrn" => {
            value.ishrn(a.uint32(0, "bits")?);
        }
        "iushr" => {
            value.iushr(&a.int64(0, "bits")?);
        }
        "iushrn" => {
            value.iushrn(a.uint32(0, "bits")?);
        }
        "setn" => {
            a.require(2)?;
            let bit = a.uint32(0, "bit")?;
            let on = a.truthy(1, "val")?;
            value.setn(bit, on);
        }
        "testn" => return Ok(Operand::Number(value.testn(a.uint32(0, "bit")?) as f64)),
        "imaskn" => {
            value.imaskn(a.uint32(0, "bit")?);
        }
        "andln" => return Ok(Operand::Number(value.andln(a.uint32(0, "operand")?) as f64)),
        "ineg" => {
            value.ineg();
        }
        "iabs" => {
            value.iabs();
        }
        "cmp" => return Ok(ordering(value.compare(&a.int64(0, "value")?))),
        "cmpn" => return Ok(ordering(value.comparen(a.int32(0, "value")?))),
        "eq" => return Ok(Operand::Bool(*value == a.int64(0, "value")?)),
        "eqn" => return Ok(Operand::Bool(value.eqn(a.int32(0, "value")?))),
        "gt" => return Ok(Operand::Bool(*value > a.int64(0, "value")?)),
        "gte" => return Ok(Operand::Bool(*value >= a.int64(0, "value")?)),
        "lt" => return Ok(Operand::Bool(*value < a.int64(0, "value")?)),
        "lte" => return Ok(Operand::Bool(*value <= a.int64(0, "value")?)),
        "gtn" => return Ok(Operand::Bool(value.gtn(a.int32(0, "value")?))),
        "gten" => return Ok(Operand::Bool(value.gten(a.int32(0, "value")?))),
        "ltn" => return Ok(Operand::Bool(value.ltn(a.int32(0, "value")?))),
        "lten" => return Ok(Operand::Bool(value.lten(a.int32(0, "value")?))),
        "isZero" => return Ok(Operand::Bool(value.is_zero())),
        "isNeg" => return Ok(Operand::Bool(value.is_neg())),
        "isOdd" => return Ok(Operand::Bool(value.is_odd())),
        "isEven" => return Ok(Operand::Bool(value.is_even())),
        "isSafe" => return Ok(Operand::Bool(value.is_safe())),
        "bitLength" => return Ok(Operand::Number(value.bit_length() as f64)),
        "byteLength" => return Ok(Operand::Number(value.byte_length() as f64)),
        "clone" => return Ok(Operand::Int64(*value)),
        "toSigned" => return Ok(Operand::Int64(value.to_signed().into())),
        "toUnsigned" => return Ok(Operand::Int64(value.to_unsigned().into())),
        "inject" => {
            value.inject(&a.int64(0, "value")?);
        }
        "set" => {
            value.set_number(a.number(0, "number")?)?;
        }
        "join" => {
            a.require(2)?;
            let hi = a.uint32(0, "hi")?;
            let lo = a.uint32(1, "lo")?;
            value.join(hi, lo);
        }
        "toNumber" => return Ok(Operand::Number(value.to_number()?)),
        "toDouble" => return Ok(Operand::Number(value.to_double())),
        "toInt" => return Ok(Operand::Number(value.to_int() as f64)),
        "toString" => return Ok(Operand::Str(value.to_string_radix(a.base(0)?)?)),
        "toJSON" => return Ok(Operand::Str(value.to_string_radix(16)?)),
        "inspect" => return Ok(Operand::Str(format!("{value:?}"))),
        // Without a `signed` flag the fromX family keeps the receiver's
        // mode rather than resetting it to unsigned.
        "fromNumber" => {
            let num = a.number(0, "number")?;
            let mode = a.mode_or(1, value.mode())?;
            let mut n = N64::with_mode(mode);
            n.set_number(num)?;
            value.inject(&n);
        }
        "fromInt" => {
            let num = a.int32(0, "integer")?;
            let mode = a.mode_or(1, value.mode())?;
            value.inject(&N64::from_int_mode(num, mode));
        }
        "fromBits" => {
            a.require(2)?;
            let hi = a.uint32(0, "hi")?;
            let lo = a.uint32(1, "lo")?;
            let mode = a.mode_or(2, value.mode())?;
            value.inject(&N64::from_bits_mode(hi, lo, mode));
        }
        "fromString" => {
            let s = a.string(0, "string")?;
            let mode = a.mode_or(1, value.mode())?;
            let n = N64::from_str_mode(s, mode, a.base(2)?)?;
            value.inject(&n);
        }
        _ => return Err(Error::unknown_method(method)),
    }

    Ok(Operand::Int64(*value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, StringFault};

    fn num(n: f64) -> Operand {
        Operand::Number(n)
    }

    fn signed(n: i32) -> N64 {
        N64::from_int_mode(n, Mode::Signed)
    }

    #[test]
    fn test_construct_variants() {
        assert!(construct(&[], Mode::Unsigned).unwrap().is_zero());

        let n = construct(&[num(5.0)], Mode::Unsigned).unwrap();
        assert_eq!(n.raw(), 5);

        let n = construct(&[num(1.0), num(2.0), Operand::Bool(true)], Mode::Unsigned).unwrap();
        assert_eq!(n.raw(), 0x1_0000_0002);
        assert!(n.is_signed());

        let n = construct(&["-ff".into(), Operand::Bool(true), num(16.0)], Mode::Unsigned).unwrap();
        assert_eq!(n.to_string(), "-255");

        let n = construct(&["ff".into(), num(16.0)], Mode::Unsigned).unwrap();
        assert_eq!(n.raw(), 255);

        let n = construct(&[Operand::Bool(true)], Mode::Unsigned).unwrap();
        assert!(n.is_signed());
        assert!(n.is_zero());
    }

    #[test]
    fn test_construct_default_mode() {
        let n = construct(&[num(-1.0)], Mode::Signed).unwrap();
        assert!(n.is_neg());
        let n = construct(&[num(-1.0), Operand::Bool(false)], Mode::Signed).unwrap();
        assert!(!n.is_neg());
    }

    #[test]
    fn test_construct_errors() {
        let err = construct(&[num(0.5)], Mode::Unsigned).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);

        let err = construct(&[num(1.0), "yes".into()], Mode::Unsigned).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);

        let err = construct(&["12".into(), Operand::Bool(false), num(2.5)], Mode::Unsigned).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);

        let err = construct(&["12".into(), num(7.0)], Mode::Unsigned).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidBase);
    }

    #[test]
    fn test_missing_operand() {
        let mut n = N64::new();
        let err = call(&mut n, "iadd", &[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingOperand);

        let err = call(&mut n, "setn", &[num(1.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingOperand);

        let err = call(&mut n, "fromBits", &[num(1.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingOperand);
    }

    #[test]
    fn test_invalid_operand_type() {
        let mut n = N64::new();
        let err = call(&mut n, "iadd", &[num(1.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);
        assert!(err.message.contains("int64"));

        let err = call(&mut n, "iaddn", &[Operand::Int64(N64::new())]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);

        let err = call(&mut n, "setSigned", &[num(1.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);

        let err = call(&mut n, "fromString", &[num(1.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);
    }

    #[test]
    fn test_unknown_method() {
        let mut n = N64::new();
        let err = call(&mut n, "frobnicate", &[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownMethod);
    }

    #[test]
    fn test_mutators_return_self() {
        let mut n = N64::from_raw(1);
        let out = call(&mut n, "iaddn", &[num(41.0)]).unwrap();
        assert_eq!(out, Operand::Int64(N64::from_raw(42)));
        assert_eq!(n.raw(), 42);
    }

    #[test]
    fn test_copying_forms_leave_receiver() {
        let mut n = N64::from_raw(10);
        let out = call(&mut n, "muln", &[num(3.0)]).unwrap();
        assert_eq!(out.as_int64().unwrap().raw(), 30);
        assert_eq!(n.raw(), 10);

        let out = call(&mut n, "neg", &[]).unwrap();
        assert_eq!(out.as_int64().unwrap().raw(), 10u64.wrapping_neg());
        assert_eq!(n.raw(), 10);
    }

    #[test]
    fn test_numbers_marshal_modulo_2_32() {
        let mut n = N64::with_mode(Mode::Unsigned);
        call(&mut n, "iaddn", &[num(4294967295.0)]).unwrap();
        assert_eq!(n.raw(), 0xffff_ffff);

        let mut s = N64::with_mode(Mode::Signed);
        call(&mut s, "iaddn", &[num(4294967295.0)]).unwrap();
        assert_eq!(s.to_string(), "-1");

        let mut t = N64::new();
        call(&mut t, "setHi", &[num(-1.0)]).unwrap();
        assert_eq!(t.raw(), 0xffff_ffff_0000_0000);
    }

    #[test]
    fn test_divide_by_zero_leaves_value() {
        let mut n = N64::from_raw(9);
        let err = call(&mut n, "idivn", &[num(0.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DivideByZero);
        assert_eq!(n.raw(), 9);
    }

    #[test]
    fn test_queries() {
        let mut n = signed(-5);
        assert_eq!(call(&mut n, "cmpn", &[num(0.0)]).unwrap(), num(-1.0));
        assert_eq!(call(&mut n, "cmp", &[Operand::Int64(signed(-5))]).unwrap(), num(0.0));
        assert_eq!(call(&mut n, "eqn", &[num(-5.0)]).unwrap(), Operand::Bool(true));
        assert_eq!(call(&mut n, "isNeg", &[]).unwrap(), Operand::Bool(true));
        assert_eq!(call(&mut n, "bitLength", &[]).unwrap(), num(3.0));
        assert_eq!(call(&mut n, "toString", &[num(16.0)]).unwrap(), Operand::Str("-5".into()));
        assert_eq!(call(&mut n, "toString", &[]).unwrap(), Operand::Str("-5".into()));
        assert_eq!(call(&mut n, "toNumber", &[]).unwrap(), num(-5.0));
        assert_eq!(call(&mut n, "getHi", &[]).unwrap(), num(-1.0));
        assert_eq!(call(&mut n, "getLo", &[]).unwrap(), num(-5.0));
        assert_eq!(call(&mut n, "getSigned", &[]).unwrap(), Operand::Bool(true));
        assert_eq!(call(&mut n, "inspect", &[]).unwrap(), Operand::Str("<I64: -5>".into()));
    }

    #[test]
    fn test_relational_methods() {
        let bool_of = |n: &mut N64, method: &str, arg: Operand| match call(n, method, &[arg]).unwrap() {
            Operand::Bool(b) => b,
            other => panic!("expected a boolean from {method}, got {other:?}"),
        };

        let mut n = signed(-1);
        let one = N64::from_int_mode(1, Mode::Unsigned);
        assert!(bool_of(&mut n, "lt", Operand::Int64(one)));
        assert!(bool_of(&mut n, "lte", Operand::Int64(one)));
        assert!(!bool_of(&mut n, "gt", Operand::Int64(one)));
        assert!(!bool_of(&mut n, "gte", Operand::Int64(one)));
        assert!(bool_of(&mut n, "gte", Operand::Int64(signed(-1))));
        assert!(bool_of(&mut n, "lte", Operand::Int64(signed(-1))));
        assert!(bool_of(&mut n, "gtn", num(-2.0)));
        assert!(bool_of(&mut n, "gten", num(-1.0)));
        assert!(bool_of(&mut n, "ltn", num(0.0)));
        assert!(bool_of(&mut n, "lten", num(-1.0)));

        // the receiver's mode decides, so all ones is the largest unsigned value
        let mut u = N64::from_raw_mode(u64::MAX, Mode::Unsigned);
        assert!(bool_of(&mut u, "gt", Operand::Int64(one)));
        assert!(!bool_of(&mut u, "lt", Operand::Int64(signed(1))));
        assert!(bool_of(&mut u, "gtn", num(-1.0)));
        assert!(!bool_of(&mut u, "lten", num(-1.0)));

        let mut five = N64::from_int_mode(5, Mode::Unsigned);
        assert!(bool_of(&mut five, "lten", num(-1.0)));
        assert!(!bool_of(&mut five, "ltn", num(5.0)));
        assert!(bool_of(&mut five, "gten", num(5.0)));
        assert_eq!(five.raw(), 5);
    }

    #[test]
    fn test_relational_type_errors() {
        let mut n = N64::new();
        let err = call(&mut n, "gt", &[num(1.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);
        let err = call(&mut n, "lten", &[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingOperand);
    }

    #[test]
    fn test_to_string_base_errors() {
        let mut n = N64::new();
        let err = call(&mut n, "toString", &[num(3.0)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidBase);
        let err = call(&mut n, "toString", &[num(2.5)]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidOperandType);
    }

    #[test]
    fn test_from_string_faults_surface() {
        let mut n = N64::new();
        let err = call(&mut n, "fromString", &[Operand::Str(String::new())]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidString(StringFault::BadLength));
    }

    #[test]
    fn test_from_methods_keep_mode_unless_given() {
        let mut n = N64::with_mode(Mode::Signed);
        call(&mut n, "fromInt", &[num(-1.0)]).unwrap();
        assert!(n.is_signed());
        assert_eq!(n.raw(), u64::MAX);

        call(&mut n, "fromInt", &[num(-1.0), Operand::Bool(false)]).unwrap();
        assert!(!n.is_signed());
        assert_eq!(n.raw(), 0xffff_ffff);
    }

    #[test]
    fn test_setn_accepts_numbers_and_booleans() {
        let mut n = N64::new();
        call(&mut n, "setn", &[num(3.0), num(1.0)]).unwrap();
        call(&mut n, "setn", &[num(4.0), Operand::Bool(true)]).unwrap();
        assert_eq!(n.raw(), 0b11000);
        assert_eq!(call(&mut n, "testn", &[num(3.0)]).unwrap(), num(1.0));
    }

    #[test]
    fn test_render() {
        let n = Operand::Int64(N64::from_raw(255));
        assert_eq!(n.render(16), "<U64: ff>");
        assert_eq!(n.render(10), "<U64: 255>");
        assert_eq!(Operand::Str("x".into()).render(10), "\"x\"");
        assert_eq!(num(3.0).render(10), "3");
    }

    #[test]
    fn test_is_mutator() {
        assert!(is_mutator("iadd"));
        assert!(is_mutator("fromString"));
        assert!(!is_mutator("add"));
        assert!(!is_mutator("toString"));
    }
}
