//! Rational and polynomial coefficients for the gamma function family.
//!
//! The ln Γ fits on [1, 3) are minimax rational approximations in the form
//! ln Γ(z) = (z − r₁)(z − r₂)(Y + P(t)/Q(t)), where Y is a constant chosen so
//! that the rational part only has to be accurate in absolute terms. The
//! Temme tables are the coefficients of the uniform asymptotic expansion of
//! the incomplete gamma function.

#![allow(clippy::excessive_precision)]

// ============================================================================
// ln Γ(z) for z in [2, 3): (z − 2)(z + 1)(Y + P(z − 2)/Q(z − 2))
// ============================================================================

/// Constant part of the [2, 3) fit
pub const LGAMMA_2_3_Y: f64 = 0.158963680267333984375;

/// Numerator, in powers of z − 2
pub const LGAMMA_2_3_P: [f64; 7] = [
    -0.180355685678449379109e-1,
    0.25126649619989678683e-1,
    0.494103151567532234274e-1,
    0.172491608709613993966e-1,
    -0.259453563205438108893e-3,
    -0.541009869215204396339e-3,
    -0.324588649825948492091e-4,
];

/// Denominator, in powers of z − 2
pub const LGAMMA_2_3_Q: [f64; 8] = [
    0.1e1,
    0.196202987197795200688e1,
    0.148019669424231326694e1,
    0.541391432071720958364e0,
    0.988504251128010129477e-1,
    0.82130967464889339326e-2,
    0.224936291922115757597e-3,
    -0.223352763208617092964e-6,
];

// ============================================================================
// ln Γ(z) for z in [1, 1.5]: (z − 1)(z − 2)(Y + P(z − 1)/Q(z − 1))
// ============================================================================

/// Constant part of the [1, 1.5] fit
pub const LGAMMA_1_15_Y: f64 = 0.52815341949462890625;

/// Numerator, in powers of z − 1
pub const LGAMMA_1_15_P: [f64; 7] = [
    0.490622454069039543534e-1,
    -0.969117530159521214579e-1,
    -0.414983358359495381969e0,
    -0.406567124211938417342e0,
    -0.158413586390692192217e0,
    -0.240149820648571559892e-1,
    -0.100346687696279557415e-2,
];

/// Denominator, in powers of z − 1
pub const LGAMMA_1_15_Q: [f64; 7] = [
    0.1e1,
    0.302349829846463038743e1,
    0.348739585360723852576e1,
    0.191415588274426679201e1,
    0.507137738614363510846e0,
    0.577039722690451849648e-1,
    0.195768102601107189171e-2,
];

// ============================================================================
// ln Γ(z) for z in (1.5, 2): (2 − z)(1 − z)(Y + P(2 − z)/Q(2 − z))
// ============================================================================

/// Constant part of the (1.5, 2) fit
pub const LGAMMA_15_2_Y: f64 = 0.452017307281494140625;

/// Numerator, in powers of 2 − z
pub const LGAMMA_15_2_P: [f64; 6] = [
    -0.292329721830270012337e-1,
    0.144216267757192309184e0,
    -0.142440390738631274135e0,
    0.542809694055053558157e-1,
    -0.850535976868336437746e-2,
    0.431171342679297331241e-3,
];

/// Denominator, in powers of 2 − z
pub const LGAMMA_15_2_Q: [f64; 7] = [
    0.1e1,
    -0.150169356054485044494e1,
    0.846973248876495016101e0,
    -0.220095151814995745555e0,
    0.25582797155975869989e-1,
    -0.100666795539143372762e-2,
    -0.827193521891290553639e-6,
];

// ============================================================================
// Temme's uniform asymptotic expansion of Q(a, x)
// ============================================================================
//
// Cₖ(z) is evaluated at z = ±√(2φ) and the results form the coefficients of a
// polynomial in 1/a.

/// C0(z) coefficients, in powers of z
pub const TEMME_C0: [f64; 15] = [
    -0.33333333333333333,
    0.083333333333333333,
    -0.014814814814814815,
    0.0011574074074074074,
    0.0003527336860670194,
    -0.00017875514403292181,
    0.39192631785224378e-4,
    -0.21854485106799922e-5,
    -0.185406221071516e-5,
    0.8296711340953086e-6,
    -0.17665952736826079e-6,
    0.67078535434014986e-8,
    0.10261809784240308e-7,
    -0.43820360184533532e-8,
    0.91476995822367902e-9,
];

/// C1(z) coefficients
pub const TEMME_C1: [f64; 13] = [
    -0.0018518518518518519,
    -0.0034722222222222222,
    0.0026455026455026455,
    -0.00099022633744855967,
    0.00020576131687242798,
    -0.40187757201646091e-6,
    -0.18098550334489978e-4,
    0.76491609160811101e-5,
    -0.16120900894563446e-5,
    0.46471278028074343e-8,
    0.1378633446915721e-6,
    -0.5752545603517705e-7,
    0.11951628599778147e-7,
];

/// C2(z) coefficients
pub const TEMME_C2: [f64; 11] = [
    0.0041335978835978836,
    -0.0026813271604938272,
    0.00077160493827160494,
    0.20093878600823045e-5,
    -0.00010736653226365161,
    0.52923448829120125e-4,
    -0.12760635188618728e-4,
    0.34235787340961381e-7,
    0.13721957309062933e-5,
    -0.6298992138380055e-6,
    0.14280614206064242e-6,
];

/// C3(z) coefficients
pub const TEMME_C3: [f64; 9] = [
    0.00064943415637860082,
    0.00022947209362139918,
    -0.00046918949439525571,
    0.00026772063206283885,
    -0.75618016718839764e-4,
    -0.23965051138672967e-6,
    0.11082654115347302e-4,
    -0.56749528269915966e-5,
    0.14230900732435884e-5,
];

/// C4(z) coefficients
pub const TEMME_C4: [f64; 7] = [
    -0.0008618882909167117,
    0.00078403922172006663,
    -0.00029907248030319018,
    -0.14638452578843418e-5,
    0.66414982154651222e-4,
    -0.39683650471794347e-4,
    0.11375726970678419e-4,
];

/// C5(z) coefficients
pub const TEMME_C5: [f64; 9] = [
    -0.00033679855336635815,
    -0.69728137583658578e-4,
    0.00027727532449593921,
    -0.00019932570516188848,
    0.67977804779372078e-4,
    0.1419062920643967e-6,
    -0.13594048189768693e-4,
    0.80184702563342015e-5,
    -0.22914811765080952e-5,
];

/// C6(z) coefficients
pub const TEMME_C6: [f64; 7] = [
    0.00053130793646399222,
    -0.00059216643735369388,
    0.00027087820967180448,
    0.79023532326603279e-6,
    -0.81539693675619688e-4,
    0.56116827531062497e-4,
    -0.18329116582843376e-4,
];

/// C7(z) coefficients
pub const TEMME_C7: [f64; 5] = [
    0.00034436760689237767,
    0.51717909082605922e-4,
    -0.00033493161081142236,
    0.0002812695154763237,
    -0.00010976582244684731,
];

/// C8(z) coefficients
pub const TEMME_C8: [f64; 3] = [
    -0.00065262391859530942,
    0.00083949872067208728,
    -0.00043829709854172101,
];

/// C9 is a constant at double precision
pub const TEMME_C9: f64 = -0.00059676129019274625;
