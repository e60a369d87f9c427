//! Closed forms for n = 6, l = 0..=10.

#![allow(clippy::unreadable_literal)]

use crate::expression::IntegralExpression;

pub(super) fn expressions() -> Vec<IntegralExpression> {
    vec![
        expression!(6, 0;
            cos_sum: [
                (-16, 3, 1),
            ],
            cos_diff: [
                (48, 1, 0),
                (-8, 3, 0, [1, 1]),
            ],
            sin_sum: [
                (48, 2, 1),
                (-8, 4, 1, [1, 1]),
            ],
            sin_diff: [
                (-48, 0, 0),
                (24, 2, 0, [1, 1]),
                (-2, 4, 0, [1, 6, 1]),
            ],
        ),
        expression!(6, 1;
            cos_sum: [
                (-80, 1, 1),
                (16, 3, 1, [1, 1]),
            ],
            cos_diff: [
                (-16, 1, 0, [1, 1]),
                (2, 3, 0, [1, 14, 1]),
            ],
            sin_sum: [
                (80, 0, 1),
                (-56, 2, 1, [1, 1]),
                (2, 4, 1, [1, 6, 1]),
            ],
            sin_diff: [
                (16, 0, 0, [1, 1]),
                (8, 4, 2, [1, 1]),
                (-8, 2, 0, [1, 12, 1]),
            ],
        ),
        expression!(6, 2;
            cos_sum: [
                (168, 1, 1, [1, 1]),
                (-2, 3, 1, [3, 26, 3]),
            ],
            cos_diff: [
                (-32, 3, 2, [1, 1]),
                (6, 1, 0, [5, 54, 5]),
            ],
            sin_sum: [
                (-240, 0, 1, [1, 1]),
                (-8, 4, 3, [1, 1]),
                (12, 2, 1, [5, 26, 5]),
            ],
            sin_diff: [
                (-2, 4, 2, [1, 6, 1]),
                (-48, 0, 0, [1, 9, 1]),
                (6, 2, 0, [1, 35, 35, 1]),
            ],
        ),
        expression!(6, 3;
            cos_sum: [
                (1800, -1, 1, [1, 1]),
                (56, 3, 3, [1, 1]),
                (-30, 1, 1, [11, 58, 11]),
            ],
            cos_diff: [
                (450, -1, 0, [1, 6, 1]),
                (4, 3, 2, [3, 22, 3]),
                (-6, 1, 0, [5, 191, 191, 5]),
            ],
            sin_sum: [
                (2, 4, 3, [1, 6, 1]),
                (-6, 2, 1, [5, 111, 111, 5]),
                (60, 0, 1, [25, 98, 25]),
            ],
            sin_diff: [
                (8, 4, 4, [1, 1]),
                (-12, 2, 2, [19, 78, 19]),
                (6, 0, 0, [35, 701, 701, 35]),
            ],
        ),
        expression!(6, 4;
            cos_sum: [
                (29400, -3, 1, [1, 1]),
                (70, 1, 1, [3, 73, 73, 3]),
                (-4, 3, 3, [5, 34, 5]),
                (-1050, -1, 1, [15, 58, 15]),
            ],
            cos_diff: [
                (-88, 3, 4, [1, 1]),
                (7350, -3, 0, [1, 6, 1]),
                (-2100, -1, 0, [1, 21, 21, 1]),
                (2, 1, 2, [855, 3634, 855]),
            ],
            sin_sum: [
                (-8, 4, 5, [1, 1]),
                (14700, -2, 1, [3, 10, 3]),
                (-50, 0, 1, [63, 737, 737, 63]),
                (4, 2, 3, [155, 582, 155]),
            ],
            sin_diff: [
                (-2, 4, 4, [1, 6, 1]),
                (7350, -2, 0, [1, 15, 15, 1]),
                (2, 2, 2, [45, 847, 847, 45]),
                (-2, 0, 0, [105, 7710, 24394, 7710, 105]),
            ],
        ),
        expression!(6, 5;
            cos_sum: [
                (1428840, -5, 1, [1, 1]),
                (128, 3, 5, [1, 1]),
                (1260, -1, 1, [27, 349, 349, 27]),
                (-13230, -3, 1, [71, 250, 71]),
                (-6, 1, 3, [1015, 3938, 1015]),
            ],
            cos_diff: [
                (357210, -5, 0, [1, 6, 1]),
                (-120, 1, 2, [7, 142, 142, 7]),
                (-13230, -3, 0, [11, 185, 185, 11]),
                (2, 3, 4, [15, 98, 15]),
                (630, -1, 0, [3, 284, 930, 284, 3]),
            ],
            sin_sum: [
                (714420, -4, 1, [3, 10, 3]),
                (2, 4, 5, [1, 6, 1]),
                (-42, 2, 3, [5, 87, 87, 5]),
                (-13230, -2, 1, [21, 187, 187, 21]),
                (6, 0, 1, [315, 14980, 43418, 14980, 315]),
            ],
            sin_diff: [
                (8, 4, 6, [1, 1]),
                (357210, -4, 0, [1, 15, 15, 1]),
                (-276, 2, 4, [5, 18, 5]),
                (3000, 0, 2, [7, 67, 67, 7]),
                (-26460, -2, 0, [1, 43, 120, 43, 1]),
            ],
        ),
        expression!(6, 6;
            cos_sum: [
                (123492600, -7, 1, [1, 1]),
                (168, 1, 3, [15, 277, 277, 15]),
                (-2, 3, 5, [21, 134, 21]),
                (-561330, -5, 1, [151, 522, 151]),
                (1890, -3, 1, [2519, 25109, 25109, 2519]),
                (-1890, -1, 1, [11, 628, 1890, 628, 11]),
            ],
            cos_diff: [
                (-176, 3, 6, [1, 1]),
                (30873150, -7, 0, [1, 6, 1]),
                (-2245320, -5, 0, [6, 97, 97, 6]),
                (-11340, -1, 2, [23, 241, 241, 23]),
                (60, 1, 4, [287, 1062, 287]),
                (1890, -3, 0, [209, 11109, 32620, 11109, 209]),
            ],
            sin_sum: [
                (-8, 4, 7, [1, 1]),
                (61746300, -6, 1, [3, 10, 3]),
                (48, 2, 5, [56, 197, 56]),
                (-187110, -4, 1, [157, 1267, 1267, 157]),
                (-168, 0, 3, [555, 4807, 4807, 555]),
                (3780, -2, 1, [132, 3341, 8526, 3341, 132]),
            ],
            sin_diff: [
                (-2, 4, 6, [1, 6, 1]),
                (30873150, -6, 0, [1, 15, 15, 1]),
                (12, 2, 4, [35, 583, 583, 35]),
                (1890, -2, 0, [11, 1902, 13559, 13559, 1902, 11]),
                (-187110, -4, 0, [17, 602, 1610, 602, 17]),
                (-30, 0, 2, [315, 12460, 34506, 12460, 315]),
            ],
        ),
        expression!(6, 7;
            cos_sum: [
                (16232416200, -9, 1, [1, 1]),
                (232, 3, 7, [1, 1]),
                (-44594550, -7, 1, [255, 874, 255]),
                (1260, -1, 3, [1067, 9969, 9969, 1067]),
                (166320, -5, 1, [4667, 41660, 41660, 4667]),
                (-4, 1, 5, [10395, 37406, 10395]),
                (-6930, -3, 1, [1131, 33919, 90468, 33919, 1131]),
            ],
            cos_diff: [
                (4058104050, -9, 0, [1, 6, 1]),
                (8, 3, 6, [7, 44, 7]),
                (-44594550, -7, 0, [41, 651, 651, 41]),
                (-28, 1, 4, [225, 3931, 3931, 225]),
                (-6930, -3, 0, [39, 9069, 71176, 71176, 9069, 39]),
                (1260, -1, 2, [99, 4497, 12880, 4497, 99]),
                (41580, -5, 0, [1807, 76435, 214132, 76435, 1807]),
            ],
            sin_sum: [
                (8116208100, -8, 1, [3, 10, 3]),
                (2, 4, 7, [1, 6, 1]),
                (-4, 2, 5, [189, 3065, 3065, 189]),
                (-14864850, -6, 1, [283, 2197, 2197, 283]),
                (-6930, -2, 1, [39, 3946, 24927, 24927, 3946, 39]),
                (20790, -4, 1, [5239, 101496, 243810, 101496, 5239]),
                (2, 0, 3, [17325, 620424, 1672366, 620424, 17325]),
            ],
            sin_diff: [
                (8, 4, 8, [1, 1]),
                (4058104050, -8, 0, [1, 15, 15, 1]),
                (-8, 2, 6, [595, 2064, 595]),
                (140, 0, 4, [2295, 18761, 18761, 2295]),
                (-29729700, -6, 0, [16, 529, 1390, 529, 16]),
                (-13860, -2, 2, [321, 6393, 15484, 6393, 321]),
                (20790, -4, 0, [325, 31671, 196644, 196644, 31671, 325]),
            ],
        ),
        expression!(6, 8;
            cos_sum: [
                (2988240255000, -11, 1, [1, 1]),
                (-8, 3, 7, [9, 56, 9]),
                (-5533778250, -9, 1, [383, 1306, 383]),
                (36, 1, 5, [385, 6491, 6491, 385]),
                (12162150, -7, 1, [13215, 111469, 111469, 13215]),
                (-41580, -1, 3, [13, 519, 1440, 519, 13]),
                (62370, -3, 1, [65, 8203, 56168, 56168, 8203, 65]),
                (-1621620, -5, 1, [1495, 33659, 84308, 33659, 1495]),
            ],
            cos_diff: [
                (-296, 3, 8, [1, 1]),
                (747060063750, -11, 0, [1, 6, 1]),
                (-11067556500, -9, 0, [31, 487, 487, 31]),
                (-41580, -1, 4, [129, 1123, 1123, 129]),
                (60, 1, 6, [1491, 5270, 1491]),
                (-6486480, -5, 0, [20, 2479, 16828, 16828, 2479, 20]),
                (12162150, -7, 0, [1370, 52121, 142386, 52121, 1370]),
                (20790, -3, 2, [3679, 83999, 211260, 83999, 3679]),
            ],
            sin_sum: [
                (-8, 4, 9, [1, 1]),
                (1494120127500, -10, 1, [3, 10, 3]),
                (-5533778250, -8, 1, [147, 1117, 1117, 147]),
                (24, 2, 7, [327, 1124, 327]),
                (-36, 0, 5, [25795, 203261, 203261, 25795]),
                (291060, -2, 3, [91, 1583, 3708, 1583, 91]),
                (-810810, -4, 1, [185, 9707, 52092, 52092, 9707, 185]),
                (8108100, -6, 1, [3230, 54919, 127750, 54919, 3230]),
            ],
            sin_diff: [
                (-2, 4, 8, [1, 6, 1]),
                (747060063750, -10, 0, [1, 15, 15, 1]),
                (84, 2, 6, [15, 239, 239, 15]),
                (145530, -2, 2, [13, 1026, 6017, 6017, 1026, 13]),
                (-5533778250, -8, 0, [17, 542, 1410, 542, 17]),
                (4054050, -6, 0, [470, 35923, 207655, 207655, 35923, 470]),
                (-30, 0, 4, [3465, 116760, 309286, 116760, 3465]),
                (-810810, -4, 0, [5, 1937, 28227, 63630, 28227, 1937, 5]),
            ],
        ),
        expression!(6, 9;
            cos_sum: [
                (730739674665000, -13, 1, [1, 1]),
                (368, 3, 9, [1, 1]),
                (41580, -1, 5, [429, 3563, 3563, 429]),
                (-976924698750, -11, 1, [535, 1818, 535]),
                (-12, 1, 7, [14685, 51274, 14685]),
                (851350500, -9, 1, [49759, 405409, 405409, 49759]),
                (3243240, -5, 1, [935, 59405, 344101, 344101, 59405, 935]),
                (-270270, -3, 3, [1865, 36289, 87780, 36289, 1865]),
                (-60810750, -7, 1, [13158, 254303, 613806, 254303, 13158]),
            ],
            cos_diff: [
                (182684918666250, -13, 0, [1, 6, 1]),
                (-2520, 1, 6, [11, 181, 181, 11]),
                (2, 3, 8, [45, 278, 45]),
                (-976924698750, -11, 0, [87, 1357, 1357, 87]),
                (-810810, -3, 2, [40, 3753, 23555, 23555, 3753, 40]),
                (20790, -1, 4, [91, 3348, 9090, 3348, 91]),
                (-121621500, -7, 0, [425, 39561, 247196, 247196, 39561, 425]),
                (425675250, -9, 0, [10727, 383712, 1031794, 383712, 10727]),
                (810810, -5, 0, [85, 43930, 725636, 1696226, 725636, 43930, 85]),
            ],
            sin_sum: [
                (365369837332500, -12, 1, [3, 10, 3]),
                (2, 4, 9, [1, 6, 1]),
                (-12, 2, 7, [165, 2597, 2597, 165]),
                (-325641566250, -10, 1, [631, 4729, 4729, 631]),
                (-1891890, -2, 3, [5, 342, 1909, 1909, 342, 5]),
                (-20270250, -6, 1, [3230, 125051, 611383, 611383, 125051, 3230]),
                (425675250, -8, 1, [17697, 279340, 637158, 279340, 17697]),
                (6, 0, 5, [45045, 1457940, 3816038, 1457940, 45045]),
                (810810, -4, 1, [85, 17395, 214701, 464310, 214701, 17395, 85]),
            ],
            sin_diff: [
                (8, 4, 10, [1, 1]),
                (182684918666250, -12, 0, [1, 15, 15, 1]),
                (-48, 2, 8, [255, 871, 255]),
                (1800, 0, 6, [1309, 10061, 10061, 1309]),
                (-3783780, -2, 4, [32, 511, 1170, 511, 32]),
                (-651283132500, -10, 0, [37, 1153, 2980, 1153, 37]),
                (851350500, -8, 0, [697, 46965, 260146, 260146, 46965, 697]),
                (810810, -4, 2, [2020, 78421, 383895, 383895, 78421, 2020]),
                (-40540500, -6, 0, [68, 13886, 171043, 369670, 171043, 13886, 68]),
            ],
        ),
        expression!(6, 10;
            cos_sum: [
                (228624086213523000, -15, 1, [1, 1]),
                (-2, 3, 9, [55, 338, 55]),
                (440, 1, 7, [117, 1892, 1892, 117]),
                (-231400896977250, -13, 1, [711, 2410, 711]),
                (151966064250, -11, 1, [91903, 731341, 731341, 91903]),
                (-12870, -1, 5, [441, 15348, 41030, 15348, 441]),
                (90090, -3, 3, [2040, 160491, 949025, 949025, 160491, 2040]),
                (8108100, -7, 1, [216087, 9860255, 51638802, 51638802, 9860255, 216087]),
                (-482431950, -9, 1, [630515, 11102120, 26156106, 11102120, 630515]),
                (-270270, -5, 1, [4845, 1243210, 17052484, 38054674, 17052484, 1243210, 4845]),
            ],
            cos_diff: [
                (-448, 3, 10, [1, 1]),
                (57156021553380750, -15, 0, [1, 6, 1]),
                (-925603587909000, -13, 0, [29, 450, 450, 29]),
                (-25740, -1, 6, [2009, 16143, 16143, 2009]),
                (2, 1, 8, [161865, 560254, 161865]),
                (-964863900, -9, 0, [22534, 1787775, 10595035, 10595035, 1787775, 22534]),
                (90090, -3, 4, [28380, 497591, 1171170, 497591, 28380]),
                (-1081080, -5, 2, [32895, 1493435, 7805639, 7805639, 1493435, 32895]),
                (21709437750, -11, 0, [71117, 2442851, 6497480, 2442851, 71117]),
                (4054050, -7, 0, [15827, 4095912, 56365545, 125906008, 56365545, 4095912, 15827]),
            ],
            sin_sum: [
                (-8, 4, 11, [1, 1]),
                (114312043106761500, -14, 1, [3, 10, 3]),
                (-77133632325750, -12, 1, [853, 6331, 6331, 853]),
                (-2200, 0, 7, [2457, 18553, 18553, 2457]),
                (4, 2, 9, [4565, 15522, 4565]),
                (1261260, -2, 5, [363, 5469, 12320, 5469, 363]),
                (-270270, -4, 3, [44540, 1445229, 6646695, 6646695, 1445229, 44540]),
                (-137837700, -8, 1, [211983, 6922955, 31917318, 31917318, 6922955, 211983]),
                (8683775100, -10, 1, [302860, 4556895, 10257402, 4556895, 302860]),
                (2702700, -6, 1, [26163, 2653768, 26982649, 55545304, 26982649, 2653768, 26163]),
            ],
            sin_diff: [
                (-2, 4, 10, [1, 6, 1]),
                (57156021553380750, -14, 0, [1, 15, 15, 1]),
                (2, 2, 8, [1485, 23167, 23167, 1485]),
                (630630, -2, 4, [60, 3743, 20181, 20181, 3743, 60]),
                (-77133632325750, -12, 0, [101, 3098, 7970, 3098, 101]),
                (4341887550, -10, 0, [50027, 3121140, 16805745, 16805745, 3121140, 50027]),
                (-2, 0, 6, [315315, 9921780, 25747834, 9921780, 315315]),
                (1351350, -6, 0, [969, 769029, 21161479, 92938987, 92938987, 21161479, 769029, 969]),
                (-270270, -4, 2, [2295, 342890, 3799599, 7983360, 3799599, 342890, 2295]),
                (-68918850, -8, 0, [21698, 3276813, 36459210, 76693582, 36459210, 3276813, 21698]),
            ],
        ),
    ]
}
