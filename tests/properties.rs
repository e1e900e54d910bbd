use rand::{rngs::StdRng, Rng, SeedableRng};
use rational_types::{gcd_abs, Rational};

const ROUNDS: usize = 2000;

/// Values small enough that sums and products of two of them can't overflow
fn random(rng: &mut StdRng) -> Rational {
    let numerator = rng.gen_range(-100_000i64..100_000);
    let denominator = rng.gen_range(1i64..100_000) * if rng.gen() { 1 } else { -1 };
    Rational::new(numerator, denominator).unwrap()
}
fn nonzero(rng: &mut StdRng) -> Rational {
    loop {
        let x = random(rng);
        if !x.is_zero() {
            return x;
        }
    }
}
fn assert_canonical(x: Rational) {
    assert!(x.denominator() > 0, "{} has a negative denominator", x);
    if x.numerator() == 0 {
        assert_eq!(x.denominator(), 1, "{} is not the canonical zero", x);
    } else {
        assert_eq!(gcd_abs(x.numerator(), x.denominator()), Ok(1), "{} is not reduced", x);
    }
}

#[test]
fn canonical_form() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let a = random(&mut rng);
        let b = nonzero(&mut rng);
        assert_canonical(a);
        assert_canonical(a.checked_add(b).unwrap());
        assert_canonical(a.checked_sub(b).unwrap());
        assert_canonical(a.checked_mul(b).unwrap());
        assert_canonical(a.checked_div(b).unwrap());
        assert_canonical(a.checked_mul(rng.gen_range(-1000i64..1000)).unwrap());
        assert_canonical(a.checked_div(rng.gen_range(1i64..1000)).unwrap());
        assert_canonical(a.checked_add(rng.gen_range(-1000i64..1000)).unwrap());

        let mut c = a;
        c.increment().unwrap();
        assert_canonical(c);
        c.decrement().unwrap().decrement().unwrap();
        assert_canonical(c);
    }
}

#[test]
fn identities() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let x = random(&mut rng);
        assert_eq!(x.checked_add(Rational::default()), Ok(x));
        assert_eq!(x.checked_add(x.checked_neg().unwrap()), Ok(Rational::default()));
        assert_eq!(x.checked_mul(1i64), Ok(x));
        assert_eq!(x.checked_mul(Rational::from_integer(1)), Ok(x));
        assert_eq!(x.checked_pow(0), Ok(Rational::from_integer(1)));
        assert_eq!(x.checked_pow(1), Ok(x));

        let y = nonzero(&mut rng);
        assert_eq!(y.checked_div(y), Ok(Rational::from_integer(1)));
        assert_eq!(y.checked_recip().and_then(|inv| inv.checked_mul(y)), Ok(Rational::from_integer(1)));
    }
}

#[test]
fn commutativity() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let a = random(&mut rng);
        let b = random(&mut rng);
        assert_eq!(a.checked_add(b), b.checked_add(a));
        assert_eq!(a.checked_mul(b), b.checked_mul(a));
        assert_eq!(a.checked_sub(b).unwrap(), -b.checked_sub(a).unwrap());
    }
}

#[test]
fn integer_operands_agree() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let a = random(&mut rng);
        let i = rng.gen_range(-1000i64..1000);
        let as_rational = Rational::from_integer(i);
        assert_eq!(a.checked_add(i), a.checked_add(as_rational));
        assert_eq!(a.checked_sub(i), a.checked_sub(as_rational));
        assert_eq!(a.checked_mul(i), a.checked_mul(as_rational));
        assert_eq!(a.checked_div(i), a.checked_div(as_rational));
        assert_eq!(a < i, a < as_rational);
        assert_eq!(a > i, a > as_rational);
    }
}

#[test]
fn trichotomy() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let a = random(&mut rng);
        let b = if rng.gen_range(0..10) == 0 { a } else { random(&mut rng) };
        let lt = a.less_than(&b);
        let eq = a == b;
        let gt = a.greater_than(&b);
        assert_eq!(lt as u8 + eq as u8 + gt as u8, 1, "{} vs {}", a, b);

        let (x, y) = (a.decimal(), b.decimal());
        if (x - y).abs() > 1e-9 {
            assert_eq!(lt, x < y, "{} < {}", a, b);
            assert_eq!(gt, x > y, "{} > {}", a, b);
        }
    }
}

#[test]
fn text_round_trip() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let x = random(&mut rng);
        let text = x.to_string();
        let mut parts = text.split('/');
        let numerator = parts.next().unwrap().parse().unwrap();
        let denominator = parts.next().unwrap().parse().unwrap();
        assert_eq!(Rational::new(numerator, denominator), Ok(x));
    }
}

#[test]
fn continued_fractions() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let x = random(&mut rng);
        let terms = x.terms();
        assert!(terms[1..].iter().all(|&t| t > 0));
        assert_eq!(Rational::from_terms(&terms[..]), Ok(x));
    }
}
