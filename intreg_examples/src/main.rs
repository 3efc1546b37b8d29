// Copyright 2026 the Intreg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prints the hex/dec/bin panes of a value, or of the result of one operator.
//!
//! ```text
//! intreg_examples INT8 hex 0x80
//! intreg_examples UINT16 dec 65535 + 2
//! intreg_examples INT32 dec 5 ~
//! ```
//!
//! Operands after the first are read as decimal.

use std::error::Error;
use std::process::ExitCode;

use intreg::{Base, Evaluator, IntType, Op, Register};

fn parse_base(name: &str) -> Option<Base> {
    match name {
        "bin" => Some(Base::Binary),
        "dec" => Some(Base::Decimal),
        "hex" => Some(Base::Hexadecimal),
        _ => None,
    }
}

fn print_panes(r: &Register) {
    println!("type  {}  [{}]", r.int_type(), r.range_string());
    for base in Base::ALL {
        println!("{:<5} {}", base.label(), r.text(base));
    }
    if r.overflowed() {
        println!("warning: value overflow");
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let [ty, base, literal, rest @ ..] = args else {
        return Err("usage: intreg_examples <TYPE> <bin|dec|hex> <literal> [<op> [<operand>]]".into());
    };
    // Unknown names fall back to INT32, as in the registry.
    let int_type = IntType::lookup(ty);
    let base = parse_base(base).ok_or_else(|| format!("unknown base: {base}"))?;
    let lhs = Register::parse(literal, base, int_type)?;

    let Some((token, operand)) = rest.split_first() else {
        print_panes(&lhs);
        return Ok(());
    };
    let op = Op::from_symbol(token)?;
    let rhs = match operand.first() {
        Some(text) => Register::parse(text, Base::Decimal, int_type)?.value(),
        None if op.is_unary() => 0,
        None => return Err(format!("operator {op} needs a second operand").into()),
    };

    let evaluation = Evaluator::for_type(int_type).eval(op, lhs.value(), rhs)?;
    println!("{evaluation}");
    // Rebinding the raw result applies the same policy and keeps the overflow flag.
    print_panes(&Register::new(evaluation.raw, int_type));
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
