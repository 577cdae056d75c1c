//! Diffie-Hellman key exchange over a fixed 256-bit prime field, driven
//! entirely through the public arithmetic surface: both parties derive the
//! same shared secret from nothing but `mod_pow` and a pair of random
//! exponents.
//!
//! Run with `cargo run --example diffie_hellman`.

use bignum::{Result, UnsignedBigInt};
use rand::Rng;

/// The secp256k1 field prime. Prime generation is out of scope here, so a
/// well-known modulus stands in.
const MODULUS: &str =
    "115792089237316195423570985008687907853269984665640564039457584007908834671663";

fn main() -> Result<()> {
    let p = UnsignedBigInt::from_decimal_str(MODULUS)?;
    let g = UnsignedBigInt::from(2u64);

    let mut rng = rand::thread_rng();
    let a = UnsignedBigInt::from(rng.gen::<u64>());
    let b = UnsignedBigInt::from(rng.gen::<u64>());
    println!("Alice's secret: {}", a);
    println!("Bob's secret:   {}", b);

    // Each side publishes g^secret mod p.
    let public_a = g.mod_pow(&a, &p)?;
    let public_b = g.mod_pow(&b, &p)?;
    println!("Alice publishes: {}", public_a);
    println!("Bob publishes:   {}", public_b);

    // Raising the other side's public value to the own secret lands both
    // parties on g^(a*b) mod p.
    let shared_alice = public_b.mod_pow(&a, &p)?;
    let shared_bob = public_a.mod_pow(&b, &p)?;
    println!("Alice derives:  {}", shared_alice);
    println!("Bob derives:    {}", shared_bob);

    assert!(shared_alice.equals(&shared_bob));
    println!("shared secrets match");
    Ok(())
}
