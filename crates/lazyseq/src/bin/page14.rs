//! Reproduces page 14 of "Learn You a Haskell for Great Good!": an
//! arithmetic progression, two cycles, and a single-value repetition, each
//! bounded with `take`.

use std::error::Error;

use lazyseq::{Arithmetic, Cycle, Producer, Repeat, Value};

fn main() -> Result<(), Box<dyn Error>> {
    println!("Now we reproduce page 14 of \"Learn You A Haskell...\"");
    println!("-");

    println!("An infinite list in steps of 13 whence we take 24 elements:");
    println!("{:?}", Arithmetic::new(13, 13).take(24)?);
    println!("-");

    println!("Cycles of [1, 2, 3] and 'LOL ' whence we take 10 and 12 elements:");
    let numbers = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    println!("{}", Cycle::new(&numbers)?.take(10)?);
    println!("{}", Cycle::new(&Value::from("LOL "))?.take(12)?);
    println!("-");

    println!("An indefinite repetition of 5 whence we take 10 elements:");
    println!("{:?}", Repeat::new(5).take(10)?);
    println!("-");

    Ok(())
}
