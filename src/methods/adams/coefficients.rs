//! Adams-Bashforth / Adams-Moulton coefficient tables.
//!
//! Each table is a pair of integer weight sequences reduced to a common
//! denominator, whose reciprocal is `divisor`. The weights are exact
//! rationals evaluated in double precision; they are configuration data for
//! the generic stepper, never rederived at runtime.

use crate::Float;

/// Weights for one k-step Adams-Bashforth-Moulton pair.
pub struct Coefficients<const K: usize> {
    /// Explicit (predictor) weights; `bashforth[0]` pairs with the newest
    /// history sample.
    pub bashforth: [Float; K],
    /// Implicit (corrector) weights; `moulton[0]` belongs to the derivative
    /// at the target point, which the fixed-point iteration solves for.
    pub moulton: [Float; K],
    /// Reciprocal of the common denominator of both weight sequences.
    pub divisor: Float,
}

/// 12-step pair, local truncation error of order h^14.
pub static ADAMS_12: Coefficients<12> = Coefficients {
    bashforth: [
        4527766399.0,
        -19433810163.0,
        61633227185.0,
        -135579356757.0,
        214139355366.0,
        -247741639374.0,
        211103573298.0,
        -131365867290.0,
        58189107627.0,
        -17410248271.0,
        3158642445.0,
        -262747265.0,
    ],
    moulton: [
        262747265.0,
        1374799219.0,
        -2092490673.0,
        3828828885.0,
        -5519460582.0,
        6043521486.0,
        -4963166514.0,
        3007739418.0,
        -1305971115.0,
        384709327.0,
        -68928781.0,
        5675265.0,
    ],
    divisor: 1.0 / 958003200.0,
};

/// 16-step pair, local truncation error of order h^18.
pub static ADAMS_16: Coefficients<16> = Coefficients {
    bashforth: [
        362555126427073.0,
        -2161567671248849.0,
        9622096909515337.0,
        -30607373860520569.0,
        72558117072259733.0,
        -131963191940828581.0,
        187463140112902893.0,
        -210020588912321949.0,
        186087544263596643.0,
        -129930094104237331.0,
        70724351582843483.0,
        -29417910911251819.0,
        9038571752734087.0,
        -1934443196892599.0,
        257650275915823.0,
        -16088129229375.0,
    ],
    moulton: [
        16088129229375.0,
        105145058757073.0,
        -230992163723849.0,
        612744541065337.0,
        -1326978663058069.0,
        2285168598349733.0,
        -3129453071993581.0,
        3414941728852893.0,
        -2966365730265699.0,
        2039345879546643.0,
        -1096355235402331.0,
        451403108933483.0,
        -137515713789319.0,
        29219384284087.0,
        -3867689367599.0,
        240208245823.0,
    ],
    divisor: 1.0 / 62768369664000.0,
};

/// 20-step pair, local truncation error of order h^22.
pub static ADAMS_20: Coefficients<20> = Coefficients {
    bashforth: [
        691668239157222107697.0,
        -5292843584961252933125.0,
        30349492858024727686755.0,
        -126346544855927856134295.0,
        399537307669842150996468.0,
        -991168450545135070835076.0,
        1971629028083798845750380.0,
        -3191065388846318679544380.0,
        4241614331208149947151790.0,
        -4654326468801478894406214.0,
        4222756879776354065593786.0,
        -3161821089800186539248210.0,
        1943018818982002395655620.0,
        -970350191086531368649620.0,
        387739787034699092364924.0,
        -121059601023985433003532.0,
        28462032496476316665705.0,
        -4740335757093710713245.0,
        498669220956647866875.0,
        -24919383499187492303.0,
    ],
    moulton: [
        24919383499187492303.0,
        193280569173472261637.0,
        -558160720115629395555.0,
        1941395668950986461335.0,
        -5612131802364455926260.0,
        13187185898439270330756.0,
        -25293146116627869170796.0,
        39878419226784442421820.0,
        -51970649453670274135470.0,
        56154678684618739939910.0,
        -50320851025594566473146.0,
        37297227252822858381906.0,
        -22726350407538133839300.0,
        11268210124987992327060.0,
        -4474886658024166985340.0,
        1389665263296211699212.0,
        -325187970422032795497.0,
        53935307402575440285.0,
        -5652892248087175675.0,
        281550972898020815.0,
    ],
    divisor: 1.0 / 102181884343418880000.0,
};
