//! Coefficient tables for the digamma, trigamma and polygamma functions.

#![allow(clippy::excessive_precision)]

// ============================================================================
// ψ(x), x ≥ 10: ψ(x) = ln y + 1/(2y) − z·P(z), y = x − 1, z = 1/y²
// ============================================================================

/// B₂ₖ/(2k) for k = 1..8, alternating in sign
pub const DIGAMMA_LARGE: [f64; 8] = [
    0.083333333333333333333333333333333333333333333333333,
    -0.0083333333333333333333333333333333333333333333333333,
    0.003968253968253968253968253968253968253968253968254,
    -0.0041666666666666666666666666666666666666666666666667,
    0.0075757575757575757575757575757575757575757575757576,
    -0.021092796092796092796092796092796092796092796092796,
    0.083333333333333333333333333333333333333333333333333,
    -0.44325980392156862745098039215686274509803921568627,
];

// ============================================================================
// ψ(x), 1 ≤ x ≤ 2: ψ(x) = (x − r)(Y + P(x − 1)/Q(x − 1))
// ============================================================================

/// Positive root r of ψ, split into three parts so that x − r keeps full
/// precision near the root
pub const DIGAMMA_ROOT: [f64; 3] = [
    1569415565.0 / 1073741824.0,
    (381566830.0 / 1073741824.0) / 1073741824.0,
    0.9016312093258695918615325266959189453125e-19,
];

/// Constant part of the [1, 2] fit
pub const DIGAMMA_1_2_Y: f64 = 0.99558162689208984;

/// Numerator
pub const DIGAMMA_1_2_P: [f64; 6] = [
    0.25479851061131551,
    -0.32555031186804491,
    -0.65031853770896507,
    -0.28919126444774784,
    -0.045251321448739056,
    -0.0020713321167745952,
];

/// Denominator
pub const DIGAMMA_1_2_Q: [f64; 7] = [
    1.0,
    2.0767117023730469,
    1.4606242909763515,
    0.43593529692665969,
    0.054151797245674225,
    0.0021284987017821144,
    -0.55789841321675513e-6,
];

// ============================================================================
// ψ₁(x) by band
// ============================================================================

/// Offset of the (0, 2] fit: ψ₁(x) = (offset + P(x)/Q(x))/x²
pub const TRIGAMMA_1_2_OFFSET: f64 = 2.1093254089355469;

/// Numerator on (0, 2], in powers of x
pub const TRIGAMMA_1_2_P: [f64; 6] = [
    -1.1093280605946045,
    -3.8310674472619321,
    -3.3703848401898283,
    0.28080574467981213,
    1.6638069578676164,
    0.64468386819102836,
];

/// Denominator on (0, 2], in powers of x
pub const TRIGAMMA_1_2_Q: [f64; 6] = [
    1.0,
    3.4535389668541151,
    4.5208926987851437,
    2.7012734178351534,
    0.64468798399785611,
    -0.20314516859987728e-6,
];

/// Numerator on (2, 4]: ψ₁(x) = (1 + P(1/x)/Q(1/x))/x
pub const TRIGAMMA_2_4_P: [f64; 6] = [
    -0.13803835004508849e-7,
    0.50000049158540261,
    1.6077979838469348,
    2.5645435828098254,
    2.0534873203680393,
    0.74566981111565923,
];

/// Denominator on (2, 4]
pub const TRIGAMMA_2_4_Q: [f64; 6] = [
    1.0,
    2.8822787662376169,
    4.1681660554090917,
    2.7853527819234466,
    0.74967671848044792,
    -0.00057069112416246805,
];

/// Numerator on (4, ∞): same form as (2, 4]
pub const TRIGAMMA_4_INF_P: [f64; 7] = [
    0.68947581948701249e-17,
    0.49999999999998975,
    1.0177274392923795,
    2.498208511343429,
    2.1921221359427595,
    1.5897035272532764,
    0.40154388356961734,
];

/// Denominator on (4, ∞)
pub const TRIGAMMA_4_INF_Q: [f64; 7] = [
    1.0,
    1.7021215452463932,
    4.4290431747556469,
    2.9745631894384922,
    2.3013614809773616,
    0.28360399799075752,
    0.022892987908906897,
];

// ============================================================================
// dⁿ/dxⁿ cot(πx) for n = 3..20
// ============================================================================

/// Even-power coefficients of the cosine polynomial in
/// dⁿ/dxⁿ cot(πx) = πⁿ·[c·]P(c²)/sⁿ⁺¹, with c = cos(πx), s = sin(πx).
///
/// Entry `n − 3`; even n carry the extra factor c.
pub const COT_PI_DERIVATIVES: [&[f64]; 18] = [
    &[-2.0, -4.0],
    &[16.0, 8.0],
    &[-16.0, -88.0, -16.0],
    &[272.0, 416.0, 32.0],
    &[-272.0, -2880.0, -1824.0, -64.0],
    &[7936.0, 24576.0, 7680.0, 128.0],
    &[-7936.0, -137216.0, -185856.0, -31616.0, -256.0],
    &[353792.0, 1841152.0, 1304832.0, 128512.0, 512.0],
    &[-353792.0, -9061376.0, -21253376.0, -8728576.0, -518656.0, -1024.0],
    &[22368256.0, 175627264.0, 222398464.0, 56520704.0, 2084864.0, 2048.0],
    &[-22368256.0, -795300864.0, -2868264960.0, -2174832640.0, -357888000.0, -8361984.0, -4096.0],
    &[1903757312.0, 21016670208.0, 41731645440.0, 20261765120.0, 2230947840.0, 33497088.0, 8192.0],
    &[
        -1903757312.0,
        -89702612992.0,
        -460858269696.0,
        -559148810240.0,
        -182172651520.0,
        -13754155008.0,
        -134094848.0,
        -16384.0,
    ],
    &[
        209865342976.0,
        3099269660672.0,
        8885192097792.0,
        7048869314560.0,
        1594922762240.0,
        84134068224.0,
        536608768.0,
        32768.0,
    ],
    &[
        -209865342976.0,
        -12655654469632.0,
        -87815735738368.0,
        -155964390375424.0,
        -84842998005760.0,
        -13684856848384.0,
        -511780323328.0,
        -2146926592.0,
        -65536.0,
    ],
    &[
        29088885112832.0,
        553753414467584.0,
        2165206642589696.0,
        2550316668551168.0,
        985278548541440.0,
        115620218667008.0,
        3100738912256.0,
        8588754944.0,
        131072.0,
    ],
    &[
        -29088885112832.0,
        -2184860175433728.0,
        -19686087844429824.0,
        -48165109676113920.0,
        -39471306959486976.0,
        -11124607890751488.0,
        -965271355195392.0,
        -18733264797696.0,
        -34357248000.0,
        -262144.0,
    ],
    &[
        4951498053124096.0,
        118071834535526400.0,
        603968063567560704.0,
        990081991141490688.0,
        584901762421358592.0,
        122829335169859584.0,
        7984436548730880.0,
        112949304754176.0,
        137433710592.0,
        524288.0,
    ],
];
