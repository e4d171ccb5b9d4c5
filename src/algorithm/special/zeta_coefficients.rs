//! Rational approximations to ζ(s) on the bands of the real line where no
//! closed form applies.
//!
//! Below s = 4 the fits approximate ζ(s) with its pole at s = 1 removed; from
//! s = 4 upwards they approximate ln(ζ(s) − 1), which varies slowly while
//! ζ(s) − 1 itself decays like 2⁻ˢ.

#![allow(clippy::excessive_precision)]

// ============================================================================
// s < 1, in powers of 1 − s
// ============================================================================

/// Constant offset of the s < 1 fit
pub const ZETA_LT_1_Y: f64 = 1.2433929443359375;

/// Numerator
pub const ZETA_LT_1_P: [f64; 6] = [
    0.24339294433593750202,
    -0.49092470516353571651,
    0.0557616214776046784287,
    -0.00320912498879085894856,
    0.000451534528645796438704,
    -0.933241270357061460782e-5,
];

/// Denominator
pub const ZETA_LT_1_Q: [f64; 6] = [
    1.0,
    -0.279960334310344432495,
    0.0419676223309986037706,
    -0.00413421406552171059003,
    0.00024978985622317935355,
    -0.101855788418564031874e-4,
];

// ============================================================================
// 1 ≤ s ≤ 2, in powers of s − 1
// ============================================================================

/// Numerator
pub const ZETA_1_2_P: [f64; 6] = [
    0.577215664901532860516,
    0.243210646940107164097,
    0.0417364673988216497593,
    0.00390252087072843288378,
    0.000249606367151877175456,
    0.110108440976732897969e-4,
];

/// Denominator
pub const ZETA_1_2_Q: [f64; 6] = [
    1.0,
    0.295201277126631761737,
    0.043460910607305495864,
    0.00434930582085826330659,
    0.000255784226140488490982,
    0.10991819782396112081e-4,
];

// ============================================================================
// 2 < s ≤ 4, in powers of s − 2
// ============================================================================

/// Constant offset of the [2, 4] fit
pub const ZETA_2_4_Y: f64 = 0.6986598968505859375;

/// Numerator
pub const ZETA_2_4_P: [f64; 6] = [
    -0.0537258300023595030676,
    0.0445163473292365591906,
    0.0128677673534519952905,
    0.00097541770457391752726,
    0.769875101573654070925e-4,
    0.328032510000383084155e-5,
];

/// Denominator
pub const ZETA_2_4_Q: [f64; 7] = [
    1.0,
    0.33383194553034051422,
    0.0487798431291407621462,
    0.00479039708573558490716,
    0.000270776703956336357707,
    0.106951867532057341359e-4,
    0.236276623974978646399e-7,
];

// ============================================================================
// 4 < s ≤ 7, ln(ζ(s) − 1) in powers of s − 4
// ============================================================================

/// Numerator
pub const ZETA_4_7_P: [f64; 6] = [
    -2.49710190602259410021,
    -2.60013301809475665334,
    -0.939260435377109939261,
    -0.138448617995741530935,
    -0.00701721240549802377623,
    -0.229257310594893932383e-4,
];

/// Denominator
pub const ZETA_4_7_Q: [f64; 9] = [
    1.0,
    0.706039025937745133628,
    0.15739599649558626358,
    0.0106117950976845084417,
    -0.36910273311764618902e-4,
    0.493409563927590008943e-5,
    -0.234055487025287216506e-6,
    0.718833729365459760664e-8,
    -0.1129200113474947419e-9,
];

// ============================================================================
// 7 < s < 15, ln(ζ(s) − 1) in powers of s − 7
// ============================================================================

/// Numerator
pub const ZETA_7_15_P: [f64; 7] = [
    -4.78558028495135619286,
    -1.89197364881972536382,
    -0.211407134874412820099,
    -0.000189204758260076688518,
    0.00115140923889178742086,
    0.639949204213164496988e-4,
    0.139348932445324888343e-5,
];

/// Denominator
pub const ZETA_7_15_Q: [f64; 9] = [
    1.0,
    0.244345337378188557777,
    0.00873370754492288653669,
    -0.00117592765334434471562,
    -0.743743682899933180415e-4,
    -0.21750464515767984778e-5,
    0.471001264003076486547e-8,
    -0.833378440625385520576e-10,
    0.699841545204845636531e-12,
];

// ============================================================================
// 15 ≤ s < 36, ln(ζ(s) − 1) in powers of s − 15
// ============================================================================

/// Numerator
pub const ZETA_15_36_P: [f64; 8] = [
    -10.3948950573308896825,
    -2.85827219671106697179,
    -0.347728266539245787271,
    -0.0251156064655346341766,
    -0.00119459173416968685689,
    -0.382529323507967522614e-4,
    -0.785523633796723466968e-6,
    -0.821465709095465524192e-8,
];

/// Denominator
pub const ZETA_15_36_Q: [f64; 8] = [
    1.0,
    0.208196333572671890965,
    0.0195687657317205033485,
    0.00111079638102485921877,
    0.408507746266039256231e-4,
    0.955561123065693483991e-6,
    0.118507153474022900583e-7,
    0.222609483627352615142e-14,
];
