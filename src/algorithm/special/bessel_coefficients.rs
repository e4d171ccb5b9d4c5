//! Coefficient tables for the modified Bessel functions of order 0 and 1.
//!
//! Each order is split at x = 7.75 and x = 500. Below 7.75 the fit is a
//! polynomial in a = x²/4; above it the functions are written as
//! eˣ/√x times a polynomial in 1/x, so only the slowly varying factor is
//! approximated. All coefficients of the small-argument tables are positive,
//! which lets the log-domain evaluators use them directly.

#![allow(clippy::excessive_precision)]

// ============================================================================
// I₀(x)
// ============================================================================

/// I₀ on (0, 7.75): I₀(x) = 1 + a·P(a) with a = x²/4
pub const I0_SMALL: [f64; 15] = [
    1.00000000000000000e+00,
    2.49999999999999909e-01,
    2.77777777777782257e-02,
    1.73611111111023792e-03,
    6.94444444453352521e-05,
    1.92901234513219920e-06,
    3.93675991102510739e-08,
    6.15118672704439289e-10,
    7.59407002058973446e-12,
    7.59389793369836367e-14,
    6.27767773636292611e-16,
    4.34709704153272287e-18,
    2.63417742690109154e-20,
    1.13943037744822825e-22,
    9.07926920085624812e-25,
];

/// I₀ on [7.75, 500): I₀(x) = eˣ·P(1/x)/√x
pub const I0_MEDIUM: [f64; 22] = [
    3.98942280401425088e-01,
    4.98677850604961985e-02,
    2.80506233928312623e-02,
    2.92211225166047873e-02,
    4.44207299493659561e-02,
    1.30970574605856719e-01,
    -3.35052280231727022e+00,
    2.33025711583514727e+02,
    -1.13366350697172355e+04,
    4.24057674317867331e+05,
    -1.23157028595698731e+07,
    2.80231938155267516e+08,
    -5.01883999713777929e+09,
    7.08029243015109113e+10,
    -7.84261082124811106e+11,
    6.76825737854096565e+12,
    -4.49034849696138065e+13,
    2.24155239966958995e+14,
    -8.13426467865659318e+14,
    2.02391097391687777e+15,
    -3.08675715295370878e+15,
    2.17587543863819074e+15,
];

/// I₀ on [500, ∞): same form as the medium range, fewer terms
pub const I0_LARGE: [f64; 5] = [
    3.98942280401432905e-01,
    4.98677850491434560e-02,
    2.80506308916506102e-02,
    2.92179096853915176e-02,
    4.53371208762579442e-02,
];

// ============================================================================
// I₁(x)
// ============================================================================

/// I₁ on (0, 7.75): I₁(x) = x/2·(1 + a/2 + a²·P(a)) with a = x²/4
pub const I1_SMALL: [f64; 13] = [
    8.333333333333333803e-02,
    6.944444444444341983e-03,
    3.472222222225921045e-04,
    1.157407407354987232e-05,
    2.755731926254790268e-07,
    4.920949692800671435e-09,
    6.834657311305621830e-11,
    7.593969849687574339e-13,
    6.904822652741917551e-15,
    5.220157095351373194e-17,
    3.410720494727771276e-19,
    1.625212890947171108e-21,
    1.332898928162290861e-23,
];

/// I₁ on [7.75, 500): I₁(x) = eˣ·P(1/x)/√x
pub const I1_MEDIUM: [f64; 22] = [
    3.989422804014406054e-01,
    -1.496033551613111533e-01,
    -4.675104253598537322e-02,
    -4.090895951581637791e-02,
    -5.719036414430205390e-02,
    -1.528189554374492735e-01,
    3.458284470977172076e+00,
    -2.426181371595021021e+02,
    1.178785865993440669e+04,
    -4.404655582443487334e+05,
    1.277677779341446497e+07,
    -2.903390398236656519e+08,
    5.192386898222206474e+09,
    -7.313784438967834057e+10,
    8.087824484994859552e+11,
    -6.967602516005787001e+12,
    4.614040809616582764e+13,
    -2.298849639457172489e+14,
    8.325554073334618015e+14,
    -2.067285045778906105e+15,
    3.146401654361325073e+15,
    -2.213318202179221945e+15,
];

/// I₁ on [500, ∞)
pub const I1_LARGE: [f64; 5] = [
    3.989422804014314820e-01,
    -1.496033551467584157e-01,
    -4.675105322571775911e-02,
    -4.090421597376992892e-02,
    -5.843630344778927582e-02,
];
