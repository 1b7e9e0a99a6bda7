use crate::certificate::enums::certificate_error::CertificateError;
use crate::certificate::structs::certificate_bundle::CertificateBundle;
use crate::certificate::structs::rsa_key_extractor::RsaKeyExtractor;
use crate::certificate::structs::rsa_key_material::RsaKeyMaterial;
use openssl::bn::{
    BigNum,
    BigNumContext,
    BigNumRef
};
use openssl::pkey::{
    Id,
    Private
};
use openssl::rsa::RsaRef;

/// Number of witnesses tried when recovering `p` and `q` from `(n, e, d)`.
const FACTOR_RECOVERY_ATTEMPTS: u32 = 100;

impl RsaKeyExtractor {
    /// Returns the nine RSA parameters of the bundle's private key.
    ///
    /// Fails with `KeyType` when the certificate key is not RSA, when no
    /// private key is attached, or when the attached key does not belong to
    /// the certificate. Missing CRT parameters are computed.
    #[tracing::instrument(level = "debug")]
    pub fn extract(bundle: &CertificateBundle) -> Result<RsaKeyMaterial, CertificateError> {
        if bundle.public_key.id() != Id::RSA {
            return Err(CertificateError::KeyType(format!(
                "{}: certificate key algorithm is {}, expected RSA",
                bundle.path,
                bundle.key_type()
            )));
        }
        let private_key = bundle.private_key.as_ref().ok_or_else(|| {
            CertificateError::KeyType(format!(
                "{}: no exportable RSA private key attached to the certificate",
                bundle.path
            ))
        })?;
        if private_key.id() != Id::RSA {
            return Err(CertificateError::KeyType(format!(
                "{}: attached private key is not an RSA key",
                bundle.path
            )));
        }
        if !private_key.public_eq(&*bundle.public_key) {
            return Err(CertificateError::KeyType(format!(
                "{}: attached private key does not match the certificate public key",
                bundle.path
            )));
        }
        let rsa = private_key
            .rsa()
            .map_err(|e| CertificateError::KeyType(format!("{}: {}", bundle.path, e)))?;
        Self::from_rsa(&rsa)
    }

    /// Builds CRT-form key material from an OpenSSL RSA key, deriving any
    /// parameter the key does not carry.
    pub fn from_rsa(rsa: &RsaRef<Private>) -> Result<RsaKeyMaterial, CertificateError> {
        let mut ctx = BigNumContext::new()?;
        let n = rsa.n();
        let e = rsa.e();
        let d = rsa.d();
        let (p, q, stored_crt) = match (rsa.p(), rsa.q()) {
            (Some(p), Some(q)) => (p.to_owned()?, q.to_owned()?, true),
            _ => {
                let (p, q) = Self::recover_factors(n, e, d, &mut ctx)?;
                (p, q, false)
            }
        };
        let dp = match rsa.dmp1() {
            Some(dp) if stored_crt => dp.to_owned()?,
            _ => Self::crt_exponent(d, &p, &mut ctx)?,
        };
        let dq = match rsa.dmq1() {
            Some(dq) if stored_crt => dq.to_owned()?,
            _ => Self::crt_exponent(d, &q, &mut ctx)?,
        };
        let qi = match rsa.iqmp() {
            Some(qi) if stored_crt => qi.to_owned()?,
            _ => Self::crt_coefficient(&p, &q, &mut ctx)?,
        };
        Ok(RsaKeyMaterial {
            n: n.to_vec(),
            e: e.to_vec(),
            d: d.to_vec(),
            p: p.to_vec(),
            q: q.to_vec(),
            dp: dp.to_vec(),
            dq: dq.to_vec(),
            qi: qi.to_vec(),
        })
    }

    /// `d mod (prime - 1)`
    pub(crate) fn crt_exponent(
        d: &BigNumRef,
        prime: &BigNumRef,
        ctx: &mut BigNumContext,
    ) -> Result<BigNum, CertificateError> {
        let mut prime_minus_one = prime.to_owned()?;
        prime_minus_one.sub_word(1)?;
        let mut exponent = BigNum::new()?;
        exponent.nnmod(d, &prime_minus_one, ctx)?;
        Ok(exponent)
    }

    /// `q^-1 mod p`
    pub(crate) fn crt_coefficient(
        p: &BigNumRef,
        q: &BigNumRef,
        ctx: &mut BigNumContext,
    ) -> Result<BigNum, CertificateError> {
        let mut coefficient = BigNum::new()?;
        coefficient.mod_inverse(q, p, ctx).map_err(|e| {
            CertificateError::KeyType(format!("unable to derive RSA CRT coefficient: {}", e))
        })?;
        Ok(coefficient)
    }

    /// Factors `n` from the public and private exponents.
    ///
    /// `d * e - 1` is a multiple of the group order, so for a random base
    /// the sequence `g^t, g^2t, ...` hits a non-trivial square root of one
    /// with probability at least 1/2, which shares a factor with `n`. The
    /// bases are tried in order, so the result is deterministic. The larger
    /// prime is returned first.
    pub(crate) fn recover_factors(
        n: &BigNumRef,
        e: &BigNumRef,
        d: &BigNumRef,
        ctx: &mut BigNumContext,
    ) -> Result<(BigNum, BigNum), CertificateError> {
        let one = BigNum::from_u32(1)?;
        let mut n_minus_one = n.to_owned()?;
        n_minus_one.sub_word(1)?;

        let mut k = BigNum::new()?;
        k.checked_mul(d, e, ctx)?;
        k.sub_word(1)?;
        if k.num_bits() == 0 || k.is_bit_set(0) {
            return Err(CertificateError::KeyType(
                "unable to derive RSA prime factors: d * e - 1 is not even".to_string(),
            ));
        }

        let mut t = k;
        let mut s = 0u32;
        while !t.is_bit_set(0) {
            let current = t.to_owned()?;
            t.rshift1(&current)?;
            s += 1;
        }

        for witness in 2..=FACTOR_RECOVERY_ATTEMPTS {
            let base = BigNum::from_u32(witness)?;
            let mut y = BigNum::new()?;
            y.mod_exp(&base, &t, n, ctx)?;
            if y == one || y == n_minus_one {
                continue;
            }
            for _ in 0..s {
                let mut x = BigNum::new()?;
                x.mod_sqr(&y, n, ctx)?;
                if x == one {
                    let mut y_minus_one = y.to_owned()?;
                    y_minus_one.sub_word(1)?;
                    let mut p = BigNum::new()?;
                    p.gcd(&y_minus_one, n, ctx)?;
                    let mut q = BigNum::new()?;
                    q.checked_div(n, &p, ctx)?;
                    return Ok(if p < q { (q, p) } else { (p, q) });
                }
                if x == n_minus_one {
                    break;
                }
                y = x;
            }
        }
        Err(CertificateError::KeyType(
            "unable to derive RSA prime factors from the private exponent".to_string(),
        ))
    }
}
