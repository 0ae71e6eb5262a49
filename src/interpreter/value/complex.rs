use std::{fmt::Display, ops, str::FromStr};

use ordered_float::OrderedFloat;

use crate::util::num::integral_exponent;

/// `0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);
/// The imaginary unit `i`.
pub const I: ComplexNumber = ComplexNumber::new(0.0, 1.0);

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    /// Formats the number as `a`, `bi`, `a+bi` or `a-bi`.
    ///
    /// Negative zero components are printed as `0`, and integral components
    /// are printed without a fractional part.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    ///
    /// assert_eq!(ComplexNumber::new(11.0, 2.0).to_string(), "11+2i");
    /// assert_eq!(ComplexNumber::new(3.0, -4.0).to_string(), "3-4i");
    /// assert_eq!(ComplexNumber::new(0.0, 1.5).to_string(), "1.5i");
    /// assert_eq!(ComplexNumber::new(-2.0, -0.0).to_string(), "-2");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Adding `0.0` turns `-0.0` into `0.0`.
        let real = self.real + 0.0;
        let imaginary = self.imaginary + 0.0;

        match (real, imaginary) {
            (real, imaginary) if imaginary == 0.0 => write!(f, "{real}"),
            (real, imaginary) if real == 0.0 => write!(f, "{imaginary}i"),
            (real, imaginary) if imaginary < 0.0 => write!(f, "{real}-{}i", -imaginary),
            (real, imaginary) => write!(f, "{real}+{imaginary}i"),
        }
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` when both components are zero, regardless of sign.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns the absolute value (magnitude) of the complex number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(3.0, 4.0);
    /// assert_eq!(c.abs(), 5.0);
    /// ```
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.real.hypot(self.imaginary)
    }

    /// Returns the argument (phase angle) in radians, in `(-π, π]`.
    ///
    /// A zero imaginary part is read as `+0`, so the negative real axis maps to
    /// `π` rather than `-π`.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(0.0, 1.0);
    /// assert!((c.arg() - std::f64::consts::FRAC_PI_2).abs() < 1e-10);
    ///
    /// let c = ComplexNumber::new(-1.0, -0.0);
    /// assert_eq!(c.arg(), std::f64::consts::PI);
    /// ```
    #[must_use]
    pub fn arg(self) -> f64 {
        (self.imaginary + 0.0).atan2(self.real)
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let c = ComplexNumber::new(1.0, 5.0);
    /// assert_eq!(c.conj(), ComplexNumber::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let s = ComplexNumber::new(9.0, 0.0).sqrt();
    /// assert!((s.real - 3.0).abs() < 1e-10);
    /// assert!(s.imaginary.abs() < 1e-10);
    ///
    /// let s = ComplexNumber::new(-1.0, 0.0).sqrt();
    /// assert_eq!(s, ComplexNumber::new(0.0, 1.0));
    /// ```
    #[must_use]
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return ZERO;
        }

        let a = self.real;
        let b = self.imaginary + 0.0;
        // Only the larger of the two components comes from `sqrt`; the other
        // is derived from it, so nothing cancels when |b| is tiny.
        let t = f64::midpoint(a.abs(), a.hypot(b)).sqrt();

        if a >= 0.0 {
            Self { real:      t,
                   imaginary: b / (2.0 * t), }
        } else {
            Self { real:      b.abs() / (2.0 * t),
                   imaginary: t.copysign(b), }
        }
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let z = ComplexNumber::new(0.0, 0.0);
    /// assert!((z.exp().real - 1.0).abs() < 1e-10);
    /// assert!(z.exp().imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn exp(self) -> Self {
        let exp_r = self.real.exp();
        Self { real:      exp_r * self.imaginary.cos(),
               imaginary: exp_r * self.imaginary.sin(), }
    }

    /// Returns the principal natural logarithm of the complex number.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    /// let ln = ComplexNumber::new(1.0, 0.0).ln();
    /// assert!(ln.real.abs() < 1e-10);
    /// assert!(ln.imaginary.abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn ln(self) -> Self {
        Self { real:      self.abs().ln(),
               imaginary: self.arg(), }
    }

    /// Raises the complex number to an integer power by repeated squaring.
    ///
    /// Negative exponents take the reciprocal of the positive power, so a
    /// zero base with a negative exponent gives infinite components.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{ComplexNumber, ONE};
    /// let c = ComplexNumber::new(1.0, 2.0);
    /// assert_eq!(c.powi(0), ONE);
    /// assert_eq!(c.powi(2), ComplexNumber::new(-3.0, 4.0));
    /// ```
    #[must_use]
    pub fn powi(self, exp: i32) -> Self {
        let mut base = self;
        let mut result = ONE;
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result *= base;
            }
            n /= 2;
            if n > 0 {
                base *= base;
            }
        }

        if exp < 0 { ONE / result } else { result }
    }

    /// Raises the complex number to a complex power on the principal branch.
    ///
    /// - A zero exponent yields `1`, including `0 ** 0`.
    /// - A zero base raised to any other exponent yields `0`.
    /// - Real exponents `0.5` and `-0.5` go through [`ComplexNumber::sqrt`],
    ///   so `z ** 0.5` and `√z` agree exactly.
    /// - Small integral real exponents use [`ComplexNumber::powi`], so results
    ///   such as `2 ** 9` stay exact.
    /// - Everything else is computed as `exp(exponent * ln(self))`.
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::{ComplexNumber, I, ONE, ZERO};
    ///
    /// let two = ComplexNumber::new(2.0, 0.0);
    /// let nine = ComplexNumber::new(9.0, 0.0);
    /// assert_eq!(two.pow(nine), ComplexNumber::new(512.0, 0.0));
    /// assert_eq!(ZERO.pow(ZERO), ONE);
    /// assert_eq!(ZERO.pow(ComplexNumber::new(-1.0, 0.0)), ZERO);
    /// assert_eq!(ComplexNumber::new(-1.0, 0.0).pow(ComplexNumber::new(0.5, 0.0)), I);
    /// ```
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        if exponent.is_zero() {
            return ONE;
        }
        if self.is_zero() {
            return ZERO;
        }

        if exponent.imaginary == 0.0 {
            if exponent.real == 0.5 {
                return self.sqrt();
            }
            if exponent.real == -0.5 {
                return ONE / self.sqrt();
            }
            if let Some(n) = integral_exponent(exponent.real) {
                return self.powi(n);
            }
        }

        (exponent * self.ln()).exp()
    }
}

/// The text handed to [`ComplexNumber::from_str`] is not a complex literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseComplexError {
    /// The rejected text.
    pub input: String,
}

impl Display for ParseComplexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a complex number", self.input)
    }
}

impl std::error::Error for ParseComplexError {}

impl FromStr for ComplexNumber {
    type Err = ParseComplexError;

    /// Parses `a`, `a+bi`, `a-bi`, `bi`, `i` and `-i` (whitespace ignored).
    ///
    /// # Example
    /// ```
    /// use complexa::interpreter::value::complex::ComplexNumber;
    ///
    /// assert_eq!("1+2i".parse(), Ok(ComplexNumber::new(1.0, 2.0)));
    /// assert_eq!(" 2.5 - 0.5i ".parse(), Ok(ComplexNumber::new(2.5, -0.5)));
    /// assert_eq!("-i".parse(), Ok(ComplexNumber::new(0.0, -1.0)));
    /// assert_eq!("4".parse(), Ok(ComplexNumber::new(4.0, 0.0)));
    /// assert!("1+2".parse::<ComplexNumber>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let err = || ParseComplexError { input: s.trim().to_string() };

        let Some(body) = compact.strip_suffix('i') else {
            return compact.parse::<f64>().map(Self::from).map_err(|_| err());
        };

        // The imaginary part starts at the last sign that is not an exponent sign.
        let split = body.char_indices()
                        .filter(|&(idx, c)| {
                            (c == '+' || c == '-')
                            && idx > 0
                            && !body[..idx].ends_with(['e', 'E'])
                        })
                        .map(|(idx, _)| idx)
                        .last();

        let (real, imaginary) = match split {
            Some(idx) => (body[..idx].parse::<f64>().map_err(|_| err())?, &body[idx..]),
            None => (0.0, body),
        };

        let imaginary = match imaginary {
            "" | "+" => 1.0,
            "-" => -1.0,
            text => text.parse::<f64>().map_err(|_| err())?,
        };

        Ok(Self { real, imaginary })
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl ops::Div for ComplexNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.real.mul_add(rhs.real, rhs.imaginary * rhs.imaginary);
        Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
               imaginary: self.imaginary
                              .mul_add(rhs.real, -(self.real * rhs.imaginary))
                          / denom, }
    }
}

impl From<f64> for ComplexNumber {
    fn from(value: f64) -> Self {
        Self { real:      value,
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}
