extern crate rational_types;

use rational_types::{Rational, RationalError};

use std::io::{self, prelude::*};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let zero = Rational::<i64>::default();
    let one = Rational::from_integer(1);
    let two = Rational::from_integer(2);
    let half = Rational::new(1, 2)?;
    let mhalf = Rational::<i64>::new(-1, 2)?;

    println!("zero : {}", zero);
    println!("one  : {}", one);
    println!("two  : {}", two);
    println!("half : {}", half);
    println!("mhalf: {}", mhalf);
    println!();

    println!("one   +  one   = two  : {} + {} = {}", one, one, one.checked_add(one)?);
    println!("one   -  half  = half : {} - {} = {}", one, half, one.checked_sub(half)?);
    println!("two   *  half  = one  : {} * {} = {}", two, half, two.checked_mul(half)?);
    println!("one   /  half  = two  : {} / {} = {}", one, half, one.checked_div(half)?);
    println!("two   ** zero  = one  : {} ** {} = {}", two, zero, two.checked_pow(0)?);
    println!("mhalf /  mhalf = one  : {} / {} = {}", mhalf, mhalf, mhalf.checked_div(mhalf)?);
    println!("abs(mhalf)     = half : {}", mhalf.checked_abs()?);
    println!("half < two thirds     : {}", half < Rational::new(2, 3)?);
    println!("355/113 as decimal    : {}", Rational::new(355, 113)?.decimal());
    println!();

    println!("Enter expressions such as `1/2 + 1/3`, one per line:");

    let stdin = io::stdin();
    let stdin = stdin.lock();

    for line in stdin.lines() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        if parts.len() != 3 {
            eprintln!("expected `<rational> <operator> <rational>`");
            continue;
        }
        match evaluate(parts[0], parts[1], parts[2]) {
            Ok(result) => println!("{}", result),
            Err(err) => eprintln!("error: {}", err)
        }
    }

    Ok(())
}

fn evaluate(left: &str, op: &str, right: &str) -> Result<String, RationalError> {
    let left: Rational = left.parse()?;
    let right: Rational = right.parse()?;
    Ok(match op {
        "+" => left.checked_add(right)?.to_string(),
        "-" => left.checked_sub(right)?.to_string(),
        "*" => left.checked_mul(right)?.to_string(),
        "/" => left.checked_div(right)?.to_string(),
        "%" => left.checked_rem(right)?.to_string(),
        "<" => (left < right).to_string(),
        ">" => (left > right).to_string(),
        "==" => (left == right).to_string(),
        "**" => {
            if !right.is_integer() {
                return Err(RationalError::InvalidArgument);
            }
            let exp = right.numerator();
            left.checked_pow(exp)?.to_string()
        },
        _ => return Err(RationalError::UnknownMethod)
    })
}
