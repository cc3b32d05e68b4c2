//! Ring arithmetic modulo a fixed modulus.

use curv::{arithmetic::traits::*, BigInt};

use crate::{Error, Result};

/// Modulus context. Every operation returns a representative in `[0, m)`,
/// including for negative operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModInt {
    modulus: BigInt,
}

impl ModInt {
    pub fn new(modulus: BigInt) -> Result<Self> {
        if modulus < BigInt::from(2) {
            return Err(Error::InvalidModulus);
        }
        Ok(Self { modulus })
    }

    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    pub fn reduce(&self, x: &BigInt) -> BigInt {
        x.modulus(&self.modulus)
    }

    pub fn add(&self, x: &BigInt, y: &BigInt) -> BigInt {
        self.reduce(&(x + y))
    }

    pub fn sub(&self, x: &BigInt, y: &BigInt) -> BigInt {
        self.reduce(&(x - y))
    }

    pub fn mul(&self, x: &BigInt, y: &BigInt) -> BigInt {
        self.reduce(&(self.reduce(x) * self.reduce(y)))
    }

    /// `x · y⁻¹ mod m`.
    pub fn div(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        let y_inv = self.mod_inverse(y)?;
        Ok(self.mul(x, &y_inv))
    }

    /// Euclidean quotient of `x` by `y`, reduced mod m. The remainder of the
    /// division is always non-negative, so `quo(-2, 3)` is `-1 mod m`.
    pub fn quo(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        if y.is_zero() {
            return Err(Error::NoInverse);
        }
        let r = x.mod_floor(&BasicOps::abs(y));
        // x - r is an exact multiple of y
        let q = (x - &r) / y;
        Ok(self.reduce(&q))
    }

    /// `x^y mod m`. A negative exponent inverts the base first.
    pub fn exp(&self, x: &BigInt, y: &BigInt) -> Result<BigInt> {
        if BigInt::is_negative(y) {
            let x_inv = self.mod_inverse(x)?;
            Ok(BigInt::mod_pow(&x_inv, &BasicOps::abs(y), &self.modulus))
        } else {
            Ok(BigInt::mod_pow(&self.reduce(x), y, &self.modulus))
        }
    }

    pub fn mod_inverse(&self, g: &BigInt) -> Result<BigInt> {
        BigInt::mod_inv(&self.reduce(g), &self.modulus)
            .map(|inv| self.reduce(&inv))
            .ok_or(Error::NoInverse)
    }
}
