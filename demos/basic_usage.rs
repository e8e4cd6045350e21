// ============================================================================
// Basic Usage Example
// Exercises every Complex operation against fixed expected values
// ============================================================================

use complex_value::prelude::*;

const TOLERANCE: f64 = 1e-4;

fn check(name: &str, ok: bool) -> bool {
    if ok {
        println!("{} Ok", name);
    } else {
        println!("{} FAILED", name);
    }
    ok
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Complex Value Example ===\n");

    let a = Complex::new(2.0, 3.0);
    let b = Complex::new(4.0, 5.0);
    let c = Complex::new(-1.0, 0.0);

    println!("a = {}", a);
    println!("b = {}", b);
    println!("c = {}\n", c);

    let mut results = Vec::new();

    results.push(check(
        "TestGet",
        a.real() == 2.0 && a.img() == 3.0 && b.real() == 4.0 && b.img() == 5.0,
    ));

    let mut s = Complex::new(0.0, 0.0);
    s.set_real(2.0);
    s.set_img(5.0);
    results.push(check("TestSet", s.real() == 2.0 && s.img() == 5.0));

    results.push(check(
        "TestOperator+",
        a + b == Complex::new(6.0, 8.0) && a + c == Complex::new(1.0, 3.0),
    ));
    results.push(check(
        "TestOperator-",
        a - b == Complex::new(-2.0, -2.0) && a - c == Complex::new(3.0, 3.0),
    ));
    results.push(check(
        "TestOperator*",
        a * b == Complex::new(-7.0, 22.0) && a * c == Complex::new(-2.0, -3.0),
    ));

    let d = Complex::new(-1.0, 1.0);
    results.push(check(
        "TestOperator/",
        (a / b).approx_eq(Complex::new(0.560976, 0.0487805), TOLERANCE)
            && (a / d).approx_eq(Complex::new(0.5, -2.5), TOLERANCE),
    ));

    let four = Complex::new(4.0, 0.0);
    results.push(check(
        "TestOperator==",
        a == Complex::new(2.0, 3.0)
            && a != four
            && a != 2
            && four == 4
            && a != 2.0f32
            && four == 4.0f32,
    ));

    results.push(check(
        "TestPower",
        a.power(3).approx_eq(Complex::new(-46.0, 9.0), TOLERANCE)
            && a.power(2).approx_eq(Complex::new(-5.0, 12.0), TOLERANCE)
            && Complex::ZERO.power(2).approx_eq(Complex::ZERO, TOLERANCE),
    ));

    results.push(check(
        "TestModulus",
        (a.modulus() - 3.60555).abs() < TOLERANCE
            && (Complex::new(-4.0, 5.0).modulus() - 6.40312).abs() < TOLERANCE
            && Complex::ZERO.modulus() == 0.0,
    ));

    // Division by zero: operator propagates, checked API rejects
    println!("\n=== Zero Divisor ===");
    println!("a / 0          = {}", a / Complex::ZERO);
    match a.divide(Complex::ZERO, &ArithmeticConfig::strict()) {
        Ok(q) => println!("strict a / 0   = {}", q),
        Err(e) => println!("strict a / 0   : {}", e),
    }

    let passed = results.iter().filter(|ok| **ok).count();
    println!("\n{}/{} checks passed", passed, results.len());

    if passed != results.len() {
        std::process::exit(1);
    }
}
