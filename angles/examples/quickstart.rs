//! Minimal end-to-end example: build angles, format them, do some trigonometry and read text back.

use angles::{degrees, sexagesimal, Angle, DisplayStyle};

fn main() {
    let a = sexagesimal(10.0, 30.0, 15.0);
    println!("{a} = {} = {}", a.to_radians(), a.displayed(DisplayStyle::Decimal));

    let right = degrees(90.0);
    println!("sin({right}) = {}", right.sin());
    match right.tan() {
        Some(t) => println!("tan({right}) = {t}"),
        None => println!("tan({right}) is undefined"),
    }

    let sum = degrees(10.0) + degrees(350.0);
    assert_eq!(sum, Angle::default());
    println!("10° + 350° = {sum}");

    let parsed: Angle = "3π/4".parse().unwrap_or_default();
    println!("3π/4 is {}", parsed.to_degrees());
}
