//! Orbital relations shared by the query renderer and result post-processing
//!
//! Fields follow the MPCORB column conventions: q (AU), e, incl (deg).

/// Semi-major axis of Jupiter in AU, the perturber for the Tisserand parameter
pub const JUPITER_SEMI_MAJOR_AXIS: f64 = 5.204;

/// Semi-major axis from perihelion distance and eccentricity
///
/// q = a(1-e), so a = q/(1-e). Returns `None` for parabolic and hyperbolic
/// orbits (e >= 1), where a finite positive axis does not exist.
pub fn semimajor_axis(q: f64, e: f64) -> Option<f64> {
    if !q.is_finite() || !e.is_finite() || e >= 1.0 {
        return None;
    }
    Some(q / (1.0 - e))
}

/// Tisserand parameter relative to Jupiter, in the q/e/incl form the catalog query uses
///
/// T_J = a_J(1-e)/q + 2 cos(i) sqrt(q(1-e) / (a_J(1+e)))
///
/// This is the exact expression rendered into catalog queries, so rows
/// returned by a Tisserand-band query evaluate inside the same band here.
///
/// Returns `None` when q is not positive or the radicand is negative, which
/// mirrors the `>= 0` guard rendered in front of the `BETWEEN` clause.
pub fn tisserand_jupiter(q: f64, e: f64, incl_deg: f64) -> Option<f64> {
    if !q.is_finite() || q <= 0.0 || !e.is_finite() || !incl_deg.is_finite() {
        return None;
    }
    let aj = JUPITER_SEMI_MAJOR_AXIS;
    let radicand = (q * (1.0 - e)) / (aj * (1.0 + e));
    if !radicand.is_finite() || radicand < 0.0 {
        return None;
    }
    Some((aj * (1.0 - e)) / q + 2.0 * incl_deg.to_radians().cos() * radicand.sqrt())
}
