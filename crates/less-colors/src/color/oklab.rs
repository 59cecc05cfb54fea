//! Oklab perceptual color space
//!
//! Oklab is computed from linear sRGB through an LMS cone-response
//! intermediate: a 3x3 matrix into LMS, a cube root, and a second 3x3 matrix
//! into Lab. XYZ input is first taken to linear sRGB.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

/// Convert linear sRGB to Oklab.
///
/// Uses the updated 2021-01-25 matrices from Björn Ottosson.
pub(crate) fn linear_to_oklab(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;

    // M1: linear sRGB -> LMS
    let l = 0.412_221_470_8 * r + 0.536_332_536_3 * g + 0.051_445_992_9 * b;
    let m = 0.211_903_498_2 * r + 0.680_699_545_1 * g + 0.107_396_956_6 * b;
    let s = 0.088_302_461_9 * r + 0.281_718_837_6 * g + 0.629_978_700_5 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // M2: LMS' -> Lab
    [
        0.210_454_255_3 * l_ + 0.793_617_785_0 * m_ - 0.004_072_046_8 * s_,
        1.977_998_495_1 * l_ - 2.428_592_205_0 * m_ + 0.450_593_709_9 * s_,
        0.025_904_037_1 * l_ + 0.782_771_766_2 * m_ - 0.808_675_766_0 * s_,
    ]
}

/// Convert Oklab to linear sRGB.
///
/// The result is not clamped. Out-of-gamut Oklab colors produce channels
/// outside 0.0..=1.0.
pub(crate) fn oklab_to_linear(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;

    // M2^-1
    let l_ = l + 0.396_337_777_4 * a + 0.215_803_757_3 * b;
    let m_ = l - 0.105_561_345_8 * a - 0.063_854_172_8 * b;
    let s_ = l - 0.089_484_177_5 * a - 1.291_485_548_0 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // M1^-1
    [
        4.076_741_662_1 * l - 3.307_711_591_3 * m + 0.230_969_929_2 * s,
        -1.268_438_004_6 * l + 2.609_757_401_1 * m - 0.341_319_396_5 * s,
        -0.004_196_086_3 * l - 0.703_418_614_7 * m + 1.707_614_701_0 * s,
    ]
}
