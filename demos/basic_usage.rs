// ============================================================================
// Basic Usage Example
// ============================================================================

use long_numbers::prelude::*;

fn main() -> Result<(), NumericError> {
    println!("=== Long Numbers Example ===\n");

    // Parse and add across a word boundary
    let a: U64 = "4294967296".parse()?;
    let b = U64::from(1u32);
    println!("{} + {} = {}", a, b, a + b);

    // Operators wrap, checked_* reports it
    let max = U64::max();
    println!("max + 1 = {} (wrapped)", max + U64::ONE);
    match max.checked_add(U64::ONE) {
        Ok(sum) => println!("checked: {}", sum),
        Err(e) => println!("checked: {}", e),
    }

    // Factorial in 256 bits
    let factorial: U256 = (1u32..=50).map(U256::from).product();
    println!("\n50! = {}", factorial);
    println!("    = {:#x}", factorial);
    println!("major bit: {:?}", factorial.major_bit_position());

    // Division yields quotient and remainder
    let (q, r) = factorial.divide(&U256::from(1_000_000_007u32));
    println!("\n50! / 1000000007 = {} rem {}", q, r);

    // Divisor of a different width
    let (q, r) = U128::from(u128::MAX).divide(&LongUnsigned::<1>::from(10u32));
    println!("u128::MAX / 10 = {} rem {}", q, r);

    // Radix conversions
    println!("\n=== Radix Conversion ===");
    let x = U128::from_str_radix("deadbeefcafebabe", 16)?;
    for radix in [2, 8, 10, 16, 36] {
        println!("  base {:>2}: {}", radix, x.to_string_radix(radix));
    }

    let format = NumberFormat::hex()
        .with_uppercase(true)
        .with_prefix(true)
        .with_min_digits(32);
    println!("  formatted: {}", x.format_with(&format)?);
    println!("  round trip: {}", U128::parse_with(&x.format_with(&format)?, &format)? == x);

    // Signed values
    println!("\n=== Signed ===");
    let debit = I128::from(-1_500);
    let credit = I128::from(U128::from(1_000u32));
    let net = debit + credit;
    println!("{} + {} = {}", debit, credit, net);
    println!("{} / 7 = {:?}", net, net.divide(&I128::from(7)));

    // Interop with rust_decimal
    let as_decimal = net.to_decimal()?;
    println!("as Decimal: {}", as_decimal);

    println!("\n=== Example Complete ===");
    Ok(())
}
