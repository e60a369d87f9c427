//! Closed forms for n = 4, l = 0..=10.

#![allow(clippy::unreadable_literal)]

use crate::expression::IntegralExpression;

pub(super) fn expressions() -> Vec<IntegralExpression> {
    vec![
        expression!(4, 0;
            cos_sum: [],
            cos_diff: [
                (-4, 1, 0),
            ],
            sin_sum: [
                (-4, 2, 1),
            ],
            sin_diff: [
                (4, 0, 0),
                (-2, 2, 0, [1, 1]),
            ],
        ),
        expression!(4, 1;
            cos_sum: [
                (8, 1, 1),
            ],
            cos_diff: [
                (2, 1, 0, [1, 1]),
            ],
            sin_sum: [
                (-12, 0, 1),
                (2, 2, 1, [1, 1]),
            ],
            sin_diff: [
                (4, 2, 2),
                (-4, 0, 0, [1, 1]),
            ],
        ),
        expression!(4, 2;
            cos_sum: [
                (36, -1, 1),
                (-6, 1, 1, [1, 1]),
            ],
            cos_diff: [
                (-16, 1, 2),
                (18, -1, 0, [1, 1]),
            ],
            sin_sum: [
                (-4, 2, 3),
                (36, 0, 1, [1, 1]),
            ],
            sin_diff: [
                (-2, 2, 2, [1, 1]),
                (2, 0, 0, [3, 32, 3]),
            ],
        ),
        expression!(4, 3;
            cos_sum: [
                (300, -3, 1),
                (28, 1, 3),
                (-210, -1, 1, [1, 1]),
            ],
            cos_diff: [
                (150, -3, 0, [1, 1]),
                (12, 1, 2, [1, 1]),
                (-30, -1, 0, [1, 12, 1]),
            ],
            sin_sum: [
                (600, -2, 1, [1, 1]),
                (2, 2, 3, [1, 1]),
                (-2, 0, 1, [15, 116, 15]),
            ],
            sin_diff: [
                (4, 2, 4),
                (-144, 0, 2, [1, 1]),
                (150, -2, 0, [1, 6, 1]),
            ],
        ),
        expression!(4, 4;
            cos_sum: [
                (8820, -5, 1),
                (-7770, -3, 1, [1, 1]),
                (-20, 1, 3, [1, 1]),
                (30, -1, 1, [7, 60, 7]),
            ],
            cos_diff: [
                (-44, 1, 4),
                (4410, -5, 0, [1, 1]),
                (1110, -1, 2, [1, 1]),
                (-420, -3, 0, [4, 29, 4]),
            ],
            sin_sum: [
                (-4, 2, 5),
                (17640, -4, 1, [1, 1]),
                (400, 0, 3, [1, 1]),
                (-210, -2, 1, [11, 50, 11]),
            ],
            sin_diff: [
                (-2, 2, 4, [1, 1]),
                (4410, -4, 0, [1, 6, 1]),
                (-210, -2, 0, [1, 35, 35, 1]),
                (6, 0, 2, [15, 104, 15]),
            ],
        ),
        expression!(4, 5;
            cos_sum: [
                (510300, -7, 1),
                (64, 1, 5),
                (-470610, -5, 1, [1, 1]),
                (-3990, -1, 3, [1, 1]),
                (420, -3, 1, [63, 326, 63]),
            ],
            cos_diff: [
                (255150, -7, 0, [1, 1]),
                (30, 1, 4, [1, 1]),
                (-420, -1, 2, [2, 15, 2]),
                (210, -3, 0, [9, 443, 443, 9]),
                (-5670, -5, 0, [19, 128, 19]),
            ],
            sin_sum: [
                (1020600, -6, 1, [1, 1]),
                (2, 2, 5, [1, 1]),
                (210, -2, 1, [9, 215, 215, 9]),
                (-5670, -4, 1, [31, 122, 31]),
                (-2, 0, 3, [105, 692, 105]),
            ],
            sin_diff: [
                (4, 2, 6),
                (-900, 0, 4, [1, 1]),
                (255150, -6, 0, [1, 6, 1]),
                (-22680, -4, 0, [1, 22, 22, 1]),
                (420, -2, 2, [37, 150, 37]),
            ],
        ),
        expression!(4, 6;
            cos_sum: [
                (48024900, -9, 1),
                (-45218250, -7, 1, [1, 1]),
                (-42, 1, 5, [1, 1]),
                (2520, -1, 3, [1, 7, 1]),
                (-630, -3, 1, [33, 995, 995, 33]),
                (1890, -5, 1, [1749, 7712, 1749]),
            ],
            cos_diff: [
                (-88, 1, 6),
                (24012450, -9, 0, [1, 1]),
                (11340, -1, 4, [1, 1]),
                (-623700, -7, 0, [17, 111, 17]),
                (-1260, -3, 2, [159, 710, 159]),
                (1890, -5, 0, [187, 5418, 5418, 187]),
            ],
            sin_sum: [
                (-4, 2, 7),
                (96049800, -8, 1, [1, 1]),
                (1764, 0, 5, [1, 1]),
                (-6300, -2, 3, [11, 42, 11]),
                (7560, -4, 1, [55, 754, 754, 55]),
                (-103950, -6, 1, [177, 662, 177]),
            ],
            sin_diff: [
                (-2, 2, 6, [1, 1]),
                (24012450, -8, 0, [1, 6, 1]),
                (-3150, -2, 2, [3, 61, 61, 3]),
                (-103950, -6, 0, [25, 483, 483, 25]),
                (4, 0, 4, [105, 673, 105]),
                (1890, -4, 0, [11, 1205, 4040, 1205, 11]),
            ],
        ),
        expression!(4, 7;
            cos_sum: [
                (6640533900, -11, 1),
                (116, 1, 7),
                (-6328372050, -9, 1, [1, 1]),
                (-27468, -1, 5, [1, 1]),
                (3118500, -7, 1, [169, 692, 169]),
                (-20790, -5, 1, [325, 5446, 5446, 325]),
                (2520, -3, 3, [407, 1675, 407]),
            ],
            cos_diff: [
                (3320266950, -11, 0, [1, 1]),
                (56, 1, 6, [1, 1]),
                (-252, -1, 4, [25, 168, 25]),
                (-28378350, -9, 0, [53, 340, 53]),
                (1260, -3, 2, [99, 2390, 2390, 99]),
                (623700, -7, 0, [104, 2471, 2471, 104]),
                (-20790, -5, 0, [13, 2032, 7452, 2032, 13]),
            ],
            sin_sum: [
                (13281067800, -10, 1, [1, 1]),
                (2, 2, 7, [1, 1]),
                (3150, -2, 3, [11, 205, 205, 11]),
                (-12, 0, 5, [63, 397, 63]),
                (-28378350, -8, 1, [95, 346, 95]),
                (20790, -6, 1, [4017, 44359, 44359, 4017]),
                (-20790, -4, 1, [13, 831, 2560, 831, 13]),
            ],
            sin_diff: [
                (4, 2, 8),
                (-3136, 0, 6, [1, 1]),
                (3320266950, -10, 0, [1, 6, 1]),
                (-56756700, -8, 0, [7, 127, 127, 7]),
                (12600, -2, 4, [19, 70, 19]),
                (-83160, -4, 2, [44, 487, 487, 44]),
                (20790, -6, 0, [299, 18932, 58290, 18932, 299]),
            ],
        ),
        expression!(4, 8;
            cos_sum: [
                (1264255492500, -13, 1),
                (-1214451488250, -11, 1, [1, 1]),
                (-72, 1, 7, [1, 1]),
                (1260, -1, 5, [11, 72, 11]),
                (-13860, -3, 3, [39, 830, 830, 39]),
                (-40540500, -7, 1, [48, 625, 625, 48]),
                (28378350, -9, 1, [3855, 15124, 3855]),
                (20790, -5, 1, [195, 16224, 53692, 16224, 195]),
            ],
            cos_diff: [
                (-148, 1, 8),
                (632127746250, -13, 0, [1, 1]),
                (59220, -1, 6, [1, 1]),
                (-7662154500, -11, 0, [38, 241, 38]),
                (-27720, -3, 4, [147, 575, 147]),
                (28378350, -9, 0, [510, 10907, 10907, 510]),
                (20790, -5, 2, [3107, 40158, 40158, 3107]),
                (-8108100, -7, 0, [15, 1259, 4182, 1259, 15]),
            ],
            sin_sum: [
                (-4, 2, 9),
                (2528510985000, -12, 1, [1, 1]),
                (5184, 0, 7, [1, 1]),
                (-138600, -2, 5, [5, 18, 5]),
                (-1351350, -6, 1, [99, 3396, 9410, 3396, 99]),
                (-3831077250, -10, 1, [139, 498, 139]),
                (83160, -4, 3, [260, 2549, 2549, 260]),
                (56756700, -8, 1, [345, 3409, 3409, 345]),
            ],
            sin_diff: [
                (-2, 2, 8, [1, 1]),
                (632127746250, -12, 0, [1, 6, 1]),
                (-34650, -2, 4, [3, 53, 53, 3]),
                (-3831077250, -10, 0, [21, 367, 367, 21]),
                (4, 0, 6, [315, 1963, 315]),
                (-1351350, -6, 0, [3, 862, 7335, 7335, 862, 3]),
                (28378350, -8, 0, [60, 3017, 8862, 3017, 60]),
                (20790, -4, 2, [91, 4525, 13240, 4525, 91]),
            ],
        ),
        expression!(4, 9;
            cos_sum: [
                (316653859021500, -15, 1),
                (184, 1, 9),
                (-305907687335250, -13, 1, [1, 1]),
                (-116820, -1, 7, [1, 1]),
                (13860, -3, 5, [975, 3686, 975]),
                (-270270, -5, 3, [1555, 17262, 17262, 1555]),
                (2554051500, -11, 1, [11373, 43390, 11373]),
                (-28378350, -9, 1, [21998, 249171, 249171, 21998]),
                (40540500, -7, 1, [68, 2903, 8565, 2903, 68]),
            ],
            cos_diff: [
                (158326929510750, -15, 0, [1, 1]),
                (90, 1, 8, [1, 1]),
                (-3960, -1, 6, [7, 45, 7]),
                (-716411445750, -13, 0, [103, 648, 103]),
                (6930, -3, 4, [273, 5363, 5363, 273]),
                (1277025750, -11, 0, [3145, 62991, 62991, 3145]),
                (4054050, -7, 0, [17, 6765, 65753, 65753, 6765, 17]),
                (-270270, -5, 2, [120, 7329, 22736, 7329, 120]),
                (-56756700, -9, 0, [833, 52514, 164475, 52514, 833]),
            ],
            sin_sum: [
                (633307718043000, -14, 1, [1, 1]),
                (2, 2, 9, [1, 1]),
                (6930, -2, 5, [39, 665, 665, 39]),
                (-4, 0, 7, [495, 3061, 495]),
                (-238803815250, -12, 1, [573, 2030, 573]),
                (255405150, -10, 1, [21947, 202709, 202709, 21947]),
                (-1891890, -4, 3, [5, 215, 608, 215, 5]),
                (1351350, -6, 1, [51, 7586, 55503, 55503, 7586, 51]),
                (-4054050, -8, 1, [13600, 350695, 913962, 350695, 13600]),
            ],
            sin_diff: [
                (4, 2, 10),
                (-8100, 0, 8, [1, 1]),
                (158326929510750, -14, 0, [1, 6, 1]),
                (-7567560, -4, 4, [13, 118, 118, 13]),
                (-955215261000, -12, 0, [22, 375, 375, 22]),
                (13860, -2, 6, [127, 450, 127]),
                (-8108100, -8, 0, [323, 48975, 361340, 361340, 48975, 323]),
                (510810300, -10, 0, [1037, 45881, 130820, 45881, 1037]),
                (1351350, -6, 2, [1062, 27015, 70126, 27015, 1062]),
            ],
        ),
        expression!(4, 10;
            cos_sum: [
                (100863567447142500, -17, 1),
                (-97855355786438250, -15, 1, [1, 1]),
                (-110, 1, 9, [1, 1]),
                (1980, -1, 7, [26, 165, 26]),
                (-12870, -3, 5, [441, 8203, 8203, 441]),
                (-21709437750, -11, 1, [10811, 112109, 112109, 10811]),
                (716411445750, -13, 1, [13471, 50392, 13471]),
                (-4054050, -7, 1, [323, 62135, 507299, 507299, 62135, 323]),
                (270270, -5, 3, [680, 34517, 102480, 34517, 680]),
                (16216200, -9, 1, [93347, 2888861, 7948878, 2888861, 93347]),
            ],
            cos_diff: [
                (-224, 1, 10),
                (50431783723571250, -17, 0, [1, 1]),
                (214830, -1, 8, [1, 1]),
                (-353907254200500, -15, 0, [67, 419, 67]),
                (-25740, -3, 6, [1519, 5606, 1519]),
                (716411445750, -13, 0, [1919, 36748, 36748, 1919]),
                (270270, -5, 4, [7820, 78617, 78617, 7820]),
                (-43418875500, -11, 0, [456, 24339, 73330, 24339, 456]),
                (-8108100, -7, 2, [3910, 118660, 324617, 118660, 3910]),
                (4054050, -9, 0, [15181, 3001979, 24809428, 24809428, 3001979, 15181]),
            ],
            sin_sum: [
                (-4, 2, 11),
                (201727134894285000, -16, 1, [1, 1]),
                (12100, 0, 9, [1, 1]),
                (7567560, -4, 5, [49, 422, 422, 49]),
                (-25740, -2, 7, [157, 550, 157]),
                (-176953627100250, -14, 1, [251, 882, 251]),
                (955215261000, -12, 1, [2052, 18113, 18113, 2052]),
                (-1351350, -6, 3, [7718, 164231, 408030, 164231, 7718]),
                (8108100, -8, 1, [8075, 602055, 3737318, 3737318, 602055, 8075]),
                (-1240539300, -10, 1, [19323, 423039, 1059772, 423039, 19323]),
            ],
            sin_diff: [
                (-2, 2, 10, [1, 1]),
                (50431783723571250, -16, 0, [1, 6, 1]),
                (-176953627100250, -14, 0, [39, 653, 653, 39]),
                (-12870, -2, 6, [49, 815, 815, 49]),
                (6, 0, 8, [495, 3044, 495]),
                (1891890, -4, 4, [20, 783, 2162, 783, 20]),
                (-1351350, -6, 2, [459, 49179, 326326, 326326, 49179, 459]),
                (238803815250, -12, 0, [817, 33313, 93060, 33313, 817]),
                (-620269650, -10, 0, [2242, 250543, 1691711, 1691711, 250543, 2242]),
                (4054050, -8, 0, [323, 208318, 3842665, 9287180, 3842665, 208318, 323]),
            ],
        ),
    ]
}
