//! CIE XYZ and CIELAB
//!
//! Linear sRGB maps to XYZ through the standard D65 primary matrix. LAB is
//! computed from XYZ against the D65 reference white using the CIE
//! cube-root / linear-segment pair with the exact rational constants.

/// D65 reference white in XYZ (Y normalized to 1.0).
pub(crate) const D65_WHITE: [f64; 3] = [0.950_47, 1.0, 1.088_83];

/// Linear sRGB to XYZ, D65.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

/// XYZ to linear sRGB, D65 (inverse of [`SRGB_TO_XYZ`]).
const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.240_454_836_021_409, -1.537_138_850_102_575, -0.498_531_546_868_481],
    [-0.969_266_389_875_676, 1.876_010_928_842_491, 0.041_556_082_346_674],
    [0.055_643_419_604_214, -0.204_025_854_267_698, 1.057_225_162_457_929],
];

/// CIE epsilon (216/24389).
const EPSILON: f64 = 216.0 / 24_389.0;
/// CIE kappa (24389/27).
const KAPPA: f64 = 24_389.0 / 27.0;

#[inline]
fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[inline]
pub(crate) fn linear_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    mul(&SRGB_TO_XYZ, rgb)
}

/// The result is not clamped; out-of-gamut XYZ gives channels outside 0..=1.
#[inline]
pub(crate) fn xyz_to_linear(xyz: [f64; 3]) -> [f64; 3] {
    mul(&XYZ_TO_SRGB, xyz)
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > EPSILON {
        f3
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

pub(crate) fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / D65_WHITE[0]);
    let fy = lab_f(xyz[1] / D65_WHITE[1]);
    let fz = lab_f(xyz[2] / D65_WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

pub(crate) fn lab_to_xyz(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let yr = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };

    [
        lab_f_inv(fx) * D65_WHITE[0],
        yr * D65_WHITE[1],
        lab_f_inv(fz) * D65_WHITE[2],
    ]
}
