pub struct SecurityLevel {
    pub paillier_key_size: usize,
    pub ntilde_size: usize,
}

pub const LEVEL1: SecurityLevel = SecurityLevel {
    paillier_key_size: 2048,
    ntilde_size: 2048,
};

// Large enough for the MtA share protocol: N must exceed q^2 + q^5.
pub const LEVEL0: SecurityLevel = SecurityLevel {
    paillier_key_size: 1536,
    ntilde_size: 1024,
};

#[cfg(all(not(test), not(feature = "dev")))]
pub const DEFAULT_LEVEL: SecurityLevel = LEVEL1;
#[cfg(any(test, feature = "dev"))]
pub const DEFAULT_LEVEL: SecurityLevel = LEVEL0;

// PAILLIER_PROOF_ITERS is the number of challenge rounds of the Paillier key
// proof.
pub const PAILLIER_PROOF_ITERS: usize = 13;

// Moduli with a prime factor below this bound are rejected by the key proof
// verifier. The same primes sieve candidates during key generation.
pub const VERIFY_PRIMES_UNTIL: u32 = 1000;

// p and q must differ in at least (bits/2 - P_Q_BIT_LEN_DIFFERENCE) bits,
// otherwise N falls to Fermat factorisation.
pub const P_Q_BIT_LEN_DIFFERENCE: usize = 3;

pub const PRIME_TEST_ROUNDS: u32 = 30;

pub const HASH_BITS: usize = 256;

// Exponents of the curve order q bounding MtA witnesses and blinding factors.
pub const MTA_X_EXP: u32 = 1; // x < q
pub const MTA_Y_EXP: u32 = 5; // y < q^5
pub const MTA_ALPHA_EXP: u32 = 3; // α < q^3, also the s1 bound
pub const MTA_GAMMA_EXP: u32 = 7; // γ < q^7, also the t1 bound
