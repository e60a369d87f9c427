//! Gauss-Kronrod Quadrature Rules
//!
//! A Kronrod extension adds n+1 nodes to an n-point Gauss rule. Both rules
//! share the Gauss nodes, so one set of evaluations yields two estimates and
//! their difference bounds the error of the coarser one.
//!
//! # Available Rules
//!
//! - G7K15: 7-point Gauss, 15-point Kronrod
//! - G15K31: 15-point Gauss, 31-point Kronrod

#![allow(clippy::excessive_precision)]

/// Non-negative G7K15 Kronrod nodes, center first.
const G7K15_NODES: [f64; 8] = [
    0.0,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.586_087_235_467_691_130_294_144_838_258_730,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.991_455_371_120_812_639_206_854_697_526_329,
];

const G7K15_KRONROD_WEIGHTS: [f64; 8] = [
    0.209_482_141_084_727_828_012_999_174_891_714,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.022_935_322_010_529_224_963_732_008_058_970,
];

/// Gauss weights at the even-indexed nodes.
const G7K15_GAUSS_WEIGHTS: [f64; 4] = [
    0.417_959_183_673_469_387_755_102_040_816_327,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.129_484_966_168_869_693_270_611_432_679_082,
];

const G15K31_NODES: [f64; 16] = [
    0.0,
    0.101_142_066_918_717_499_027_074_231_447_392,
    0.201_194_093_997_434_522_300_628_303_394_596,
    0.299_180_007_153_168_812_166_780_024_266_389,
    0.394_151_347_077_563_369_897_207_370_981_045,
    0.485_081_863_640_239_680_693_655_740_232_351,
    0.570_972_172_608_538_847_537_226_737_253_911,
    0.650_996_741_297_416_970_533_735_895_313_275,
    0.724_417_731_360_170_047_416_186_054_613_938,
    0.790_418_501_442_465_932_967_649_294_817_947,
    0.848_206_583_410_427_216_200_648_320_774_217,
    0.897_264_532_344_081_900_882_509_656_454_496,
    0.937_273_392_400_705_904_307_758_947_710_209,
    0.967_739_075_679_139_134_257_347_978_784_337,
    0.987_992_518_020_485_428_489_565_718_586_613,
    0.998_002_298_693_397_060_285_172_840_152_271,
];

const G15K31_KRONROD_WEIGHTS: [f64; 16] = [
    0.101_330_389_185_927_371_339_204_261_356_068,
    0.100_769_845_523_875_595_044_946_662_617_570,
    0.099_173_598_721_791_959_332_393_173_484_603,
    0.096_540_088_514_727_800_566_764_830_063_574,
    0.092_890_152_315_699_803_921_039_684_004_823,
    0.088_249_690_258_459_978_979_223_423_552_586,
    0.082_657_391_562_164_879_555_039_267_349_939,
    0.076_161_532_664_740_203_930_229_506_729_174,
    0.068_815_689_566_097_685_801_562_319_058_107,
    0.060_681_096_056_449_666_668_363_461_936_895,
    0.051_821_051_653_556_811_146_729_268_673_829,
    0.042_308_890_507_798_671_072_498_148_909_301,
    0.032_217_097_551_918_635_038_351_508_860_247,
    0.021_630_274_268_698_722_668_151_940_168_321,
    0.010_612_064_029_110_718_618_802_830_511_873,
    0.003_073_583_718_520_531_501_218_293_246_031,
];

const G15K31_GAUSS_WEIGHTS: [f64; 8] = [
    0.202_578_241_925_561_272_880_620_199_967_519,
    0.198_431_485_327_111_576_456_118_326_443_839,
    0.186_161_000_015_562_211_026_800_561_866_423,
    0.166_269_205_816_993_933_553_200_860_481_209,
    0.139_570_677_926_154_314_447_804_794_511_028,
    0.107_159_220_467_171_935_011_869_546_685_869,
    0.070_366_047_488_108_124_709_267_416_450_667,
    0.030_753_241_996_117_268_354_628_393_577_204,
];

/// A symmetric Gauss-Kronrod rule on [-1, 1].
///
/// Nodes are stored for the non-negative half, center first; the Gauss nodes
/// are the even-indexed ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GaussKronrodRule {
    nodes: &'static [f64],
    kronrod_weights: &'static [f64],
    gauss_weights: &'static [f64],
}

/// Estimate of an integral over one interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleEstimate {
    /// Kronrod estimate.
    pub value: f64,
    /// |Kronrod − Gauss|.
    pub error: f64,
    /// Number of integrand evaluations.
    pub evaluations: usize,
}

impl GaussKronrodRule {
    /// The G7K15 rule.
    #[must_use]
    pub fn g7k15() -> Self {
        Self {
            nodes: &G7K15_NODES,
            kronrod_weights: &G7K15_KRONROD_WEIGHTS,
            gauss_weights: &G7K15_GAUSS_WEIGHTS,
        }
    }

    /// The G15K31 rule.
    #[must_use]
    pub fn g15k31() -> Self {
        Self {
            nodes: &G15K31_NODES,
            kronrod_weights: &G15K31_KRONROD_WEIGHTS,
            gauss_weights: &G15K31_GAUSS_WEIGHTS,
        }
    }

    /// Returns the number of Kronrod nodes.
    #[must_use]
    pub fn points(&self) -> usize {
        2 * self.nodes.len() - 1
    }

    /// Estimates ∫ f over [a, b].
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: &F, a: f64, b: f64) -> RuleEstimate {
        let mid = 0.5 * (a + b);
        let half_length = 0.5 * (b - a);

        let center = f(mid);
        let mut kronrod_sum = self.kronrod_weights[0] * center;
        let mut gauss_sum = self.gauss_weights[0] * center;

        for (i, (&node, &weight)) in self.nodes.iter().zip(self.kronrod_weights).enumerate().skip(1) {
            let offset = half_length * node;
            let pair = f(mid - offset) + f(mid + offset);
            kronrod_sum += weight * pair;
            if i % 2 == 0 {
                gauss_sum += self.gauss_weights[i / 2] * pair;
            }
        }

        let value = half_length * kronrod_sum;
        RuleEstimate {
            value,
            error: (value - half_length * gauss_sum).abs(),
            evaluations: self.points(),
        }
    }
}

impl Default for GaussKronrodRule {
    fn default() -> Self {
        Self::g7k15()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_integrate_polynomial() {
        // ∫₀¹ x² dx = 1/3
        for rule in [GaussKronrodRule::g7k15(), GaussKronrodRule::g15k31()] {
            let result = rule.integrate(&|x| x * x, 0.0, 1.0);
            assert!((result.value - 1.0 / 3.0).abs() < 1e-14);
            assert!(result.error < 1e-14);
        }
    }

    #[test]
    fn test_integrate_sine() {
        // ∫₀^π sin(x) dx = 2
        let result = GaussKronrodRule::g7k15().integrate(&|x| x.sin(), 0.0, PI);
        assert!((result.value - 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_evaluation_count() {
        let result = GaussKronrodRule::g7k15().integrate(&f64::exp, 0.0, 1.0);
        assert_eq!(result.evaluations, 15);
        assert!((result.value - (std::f64::consts::E - 1.0)).abs() < 1e-14);
        assert_eq!(GaussKronrodRule::g15k31().points(), 31);
    }

    #[test]
    fn test_error_estimate_tracks_difficulty() {
        let rule = GaussKronrodRule::g7k15();
        let smooth = rule.integrate(&|x| x.cos(), 0.0, 1.0);
        let oscillatory = rule.integrate(&|x| (40.0 * x).cos(), 0.0, 1.0);
        assert!(smooth.error < oscillatory.error);
    }
}
