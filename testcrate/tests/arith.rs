use fwint::{bw, FixedUint};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

fn rand_uint(rng: &mut Xoshiro128StarStar, w: usize) -> FixedUint {
    let mut s = String::new();
    for _ in 0..w.div_ceil(4) {
        let d = char::from_digit(rng.next_u32() % 16, 16).unwrap();
        s.push(d.to_ascii_uppercase());
    }
    FixedUint::from_str_radix(&s, 16, bw(w)).unwrap()
}

/// All-ones value of bitwidth `w`
fn umax(w: usize) -> FixedUint {
    FixedUint::from_str_radix(&"1".repeat(w), 2, bw(w)).unwrap()
}

fn mask(w: u32) -> u64 {
    if w == 64 {
        u64::MAX
    } else {
        (1u64 << w) - 1
    }
}

#[test]
fn concrete_cases() {
    let a = FixedUint::from_u64(bw(64), 123456789);
    let b = FixedUint::from_u64(bw(64), 987654321);
    let (sum, carry) = a.add(&b);
    assert!(!carry);
    assert_eq!(sum.to_u64(), 1111111110);

    let (diff, borrow) = b.sub(&a);
    assert!(!borrow);
    assert_eq!(diff.to_u64(), 864197532);

    let a = FixedUint::from_u64(bw(64), 123456);
    let b = FixedUint::from_u64(bw(64), 7890);
    let (product, oflow) = a.mul(&b);
    assert!(!oflow);
    assert_eq!(product.bw(), 128);
    assert_eq!(product.to_u64(), 974067840);
}

#[test]
fn width_promotion() {
    let a = rand_uint(&mut Xoshiro128StarStar::seed_from_u64(0), 100);
    let b = FixedUint::from_u64(bw(60), 12345);
    assert_eq!(a.add(&b).0.bw(), 100);
    assert_eq!(b.add(&a).0.bw(), 100);
    assert_eq!(a.sub(&b).0.bw(), 100);
    assert_eq!(b.sub(&a).0.bw(), 100);
    assert_eq!(a.mul(&b).0.bw(), 160);
    assert_eq!(b.mul(&a).0.bw(), 160);
}

#[test]
fn carry_and_borrow() {
    for w in [1, 5, 64, 100, 192] {
        let max = umax(w);
        let one = FixedUint::from_u64(bw(w), 1);
        let zero = FixedUint::zero(bw(w));

        let (wrapped, carry) = max.add(&one);
        assert!(carry);
        assert!(wrapped.is_zero());

        let (wrapped, borrow) = zero.sub(&one);
        assert!(borrow);
        assert_eq!(wrapped, max);

        // subtracting zero changes nothing
        let (back, borrow) = wrapped.sub(&zero);
        assert!(!borrow);
        assert_eq!(back, max);
    }
}

#[test]
fn sub_wraps_modulo_result_width() {
    let a = FixedUint::from_u64(bw(4), 5);
    let b = FixedUint::from_u64(bw(4), 7);
    let (diff, borrow) = a.sub(&b);
    assert!(borrow);
    assert_eq!(diff.to_u64(), 14);
    let (diff, borrow) = b.sub(&a);
    assert!(!borrow);
    assert_eq!(diff.to_u64(), 2);
}

#[test]
fn matches_u128_reference() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let widths = [1u32, 3, 8, 31, 32, 33, 63, 64];
    for wa in widths {
        for wb in widths {
            for _ in 0..50 {
                let x = rng.next_u64() & mask(wa);
                let y = rng.next_u64() & mask(wb);
                let a = FixedUint::from_u64(bw(wa as usize), x);
                let b = FixedUint::from_u64(bw(wb as usize), y);
                let r = wa.max(wb);

                let (sum, carry) = a.add(&b);
                let wide = (x as u128) + (y as u128);
                assert_eq!(carry, (wide >> r) != 0);
                assert_eq!(sum.to_u64(), (wide as u64) & mask(r));

                let (diff, borrow) = a.sub(&b);
                assert_eq!(borrow, x < y);
                let wide = (x as u128).wrapping_add(1u128 << r) - (y as u128);
                assert_eq!(diff.to_u64(), (wide as u64) & mask(r));

                let (product, oflow) = a.mul(&b);
                assert!(!oflow);
                let wide = (x as u128) * (y as u128);
                assert_eq!(
                    product.to_string_radix(10).unwrap(),
                    wide.to_string()
                );
            }
        }
    }
}

#[test]
fn commutativity() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let widths = [1, 17, 64, 100, 128, 200];
    for wa in widths {
        for wb in widths {
            for _ in 0..20 {
                let a = rand_uint(&mut rng, wa);
                let b = rand_uint(&mut rng, wb);
                let (sum0, carry0) = a.add(&b);
                let (sum1, carry1) = b.add(&a);
                assert_eq!(sum0, sum1);
                assert_eq!(carry0, carry1);
                let (prod0, oflow0) = a.mul(&b);
                let (prod1, oflow1) = b.mul(&a);
                assert_eq!(prod0, prod1);
                assert_eq!(oflow0, oflow1);
            }
        }
    }
}

/// Checks wide multiplication against repeated addition at widths beyond the
/// reach of `u128`
#[test]
fn mul_matches_repeated_addition() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for w in [100, 192, 256] {
        for k in [0u64, 1, 2, 7, 19] {
            let a = rand_uint(&mut rng, w);
            let (product, oflow) = a.mul(&FixedUint::from_u64(bw(64), k));
            assert!(!oflow);
            assert_eq!(product.bw(), w + 64);

            let (wide_a, lost) = a.zero_resize(bw(w + 64));
            assert!(!lost);
            let mut acc = FixedUint::zero(bw(w + 64));
            for _ in 0..k {
                let (next, carry) = acc.add(&wide_a);
                assert!(!carry);
                acc = next;
            }
            assert_eq!(acc, product);
        }
    }
}

#[test]
fn operands_are_not_mutated() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let a = rand_uint(&mut rng, 150);
    let b = rand_uint(&mut rng, 90);
    let a_orig = a.clone();
    let b_orig = b.clone();
    let _ = a.add(&b);
    let _ = a.sub(&b);
    let _ = a.mul(&b);
    assert_eq!(a, a_orig);
    assert_eq!(b, b_orig);
}

#[test]
fn clear_zeroes_in_place() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let mut x = rand_uint(&mut rng, 200);
    x.clear();
    assert!(x.is_zero());
    assert_eq!(x.bw(), 200);
    assert_eq!(x, FixedUint::zero(bw(200)));
}

#[test]
fn identities() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for w in [1, 64, 130] {
        let a = rand_uint(&mut rng, w);
        let zero = FixedUint::zero(bw(w));
        let one = FixedUint::from_u64(bw(w), 1);

        let (sum, carry) = a.add(&zero);
        assert!(!carry);
        assert_eq!(sum, a);

        let (diff, borrow) = a.sub(&zero);
        assert!(!borrow);
        assert_eq!(diff, a);

        let (product, oflow) = a.mul(&zero);
        assert!(!oflow);
        assert!(product.is_zero());

        let (product, oflow) = a.mul(&one);
        assert!(!oflow);
        let (back, lost) = product.zero_resize(a.nzbw());
        assert!(!lost);
        assert_eq!(back, a);
    }
}
