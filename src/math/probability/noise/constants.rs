// src/math/probability/noise/constants.rs
//
// Feste Tabellen und Konstanten des Noise-Kerns. Die Tabellenwerte sind Teil
// des Algorithmus: eine Änderung ändert jede erzeugte Noise-Karte.

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

// ==============
// Hash constants
// ==============

pub(crate) static HASH_MULTIPLIERS_2D: [i32; 2] = [0x1827F5, 0x123C21];
pub(crate) static HASH_MULTIPLIERS_3D: [i32; 3] = [0x1A36A9, 0x157931, 0x119725];
pub(crate) static HASH_MULTIPLIERS_4D: [i32; 4] = [0x1B69E1, 0x177C0B, 0x141E5D, 0x113C31];
pub(crate) static HASH_MULTIPLIERS_5D: [i32; 5] =
    [0x1C3361, 0x18DA3B, 0x15E6DB, 0x134D29, 0x110281];
pub(crate) static HASH_MULTIPLIERS_6D: [i32; 6] =
    [0x1CC1C5, 0x19D7AF, 0x173935, 0x14DEAF, 0x12C139, 0x10DAA3];
// Nur für 6D Mutant (6 Koordinaten + Mutation)
pub(crate) static HASH_MULTIPLIERS_7D: [i32; 7] =
    [0x1D2BC5, 0x1A978F, 0x183DB9, 0x161917, 0x1424F5, 0x125D0B, 0x10BD6F];

pub(crate) const HASH_XOR: u32 = 0xD1B54A35;
pub(crate) const HASH_MUL: u32 = 0x125493;

/// Seed increment between the chained links of the hybrid algorithms and
/// between their fractal octaves.
pub(crate) const HYBRID_SEED_STEP: i32 = 0x9E3779BDu32 as i32;

// ========
// Settings
// ========

pub const DEFAULT_SEED: i32 = 1337;
pub const DEFAULT_FREQUENCY: f32 = 0.03125;
pub const MIN_FREQUENCY: f32 = 1e-6;

// =================
// Algorithm scaling
// =================

pub(crate) const PERLIN_SCALE_2D: f32 = 1.4142135;
pub(crate) const PERLIN_SCALE_3D: f32 = 1.1547005;
pub(crate) const PERLIN_SCALE_4D: f32 = 0.55;
pub(crate) const PERLIN_SCALE_5D: f32 = 0.8944272;
pub(crate) const PERLIN_SCALE_6D: f32 = 0.8164966;

// Simplex-Kernel: (r² - |d|²)^4 mit r² = 0.5 in allen Dimensionen
pub(crate) const SIMPLEX_RADIUS_SQ: f32 = 0.5;
pub(crate) const SIMPLEX_SCALE_2D: f32 = 99.2069;
pub(crate) const SIMPLEX_SCALE_3D: f32 = 107.0;
pub(crate) const SIMPLEX_SCALE_4D: f32 = 62.5;
pub(crate) const SIMPLEX_SCALE_5D: f32 = 108.0;
pub(crate) const SIMPLEX_SCALE_6D: f32 = 108.0;

// Skew (F) und Unskew (G) Faktoren des Simplex-Gitters
pub(crate) const F2: f32 = 0.3660254038;
pub(crate) const G2: f32 = 0.2113248654;
pub(crate) const F3: f32 = 1.0 / 3.0;
pub(crate) const G3: f32 = 1.0 / 6.0;
pub(crate) const F4: f32 = 0.3090169944;
pub(crate) const G4: f32 = 0.1381966011;
pub(crate) const F5: f32 = 0.2898979486;
pub(crate) const G5: f32 = 0.1183503419;
pub(crate) const F6: f32 = 0.2742918852;
pub(crate) const G6: f32 = 0.1036725878;

// 1 / 1.5^N: the 4-point cubic can overshoot its inputs by half
pub(crate) const CUBIC_BOUNDING_2D: f32 = 1.0 / (1.5 * 1.5);
pub(crate) const CUBIC_BOUNDING_3D: f32 = 1.0 / (1.5 * 1.5 * 1.5);
pub(crate) const CUBIC_BOUNDING_4D: f32 = 1.0 / (1.5 * 1.5 * 1.5 * 1.5);

/// Length of the `CELL_2D` / `CELL_3D` vectors.
pub(crate) const CELL_JITTER: f32 = 0.45;
pub(crate) const CELLULAR_DISTANCE_SENTINEL: f32 = 999999.0;

pub(crate) const FOAM_SHARPNESS_SCALE: f32 = 2.2;

// ======
// Tables
// ======

#[rustfmt::skip]
pub(crate) static GRADIENTS_2D: [[f32; 2]; 256] = [
    [1.0, 0.0], [-0.737368878, -0.675490294], [0.0874257247, 0.996171041], [0.608438861, -0.793600751],
    [-0.984713485, 0.17418195], [0.843755295, 0.536728053], [-0.259604305, -0.965715074], [-0.460907025, 0.887448429],
    [0.939321296, -0.343038631], [-0.924345556, -0.381556408], [0.423845995, 0.905734273], [0.299283864, -0.95416412],
    [-0.86521121, 0.501407581], [0.976675774, 0.214719429], [-0.575129429, -0.81806243], [-0.12851069, 0.991708124],
    [0.764648995, -0.644446983], [-0.999146054, -0.0413178262], [0.708829414, 0.705379941], [-0.0461914459, -0.998932605],
    [-0.640709145, 0.767783688], [0.991069413, -0.133346988], [-0.820858337, -0.57113185], [0.219481369, 0.975616691],
    [0.497180875, -0.86764692], [-0.952692777, 0.30393498], [0.907791134, 0.419422529], [-0.386061082, -0.92247322],
    [-0.338452279, 0.940983557], [0.885189437, -0.46523076], [-0.966970005, -0.25489019], [0.540837738, 0.841126947],
    [0.169376173, -0.985551476], [-0.790623175, 0.612303026], [0.996585674, 0.082565086], [-0.679079346, -0.734064875],
    [0.00487827716, 0.999988101], [0.671885167, -0.740655333], [-0.995732701, 0.0922842829], [0.796559442, 0.604560217],
    [-0.178983583, -0.983852061], [-0.532605594, 0.846363563], [0.964437162, -0.264312242], [-0.889686302, -0.456572321],
    [0.347616819, 0.937636682], [0.377042655, -0.926195895], [-0.903655857, 0.428259375], [0.955612756, 0.294625626],
    [-0.505622355, -0.86275491], [-0.209952379, 0.977711613], [0.815247055, -0.579113321], [-0.992323234, -0.123671334],
    [0.648169484, 0.761496106], [0.0364432232, -0.999335725], [-0.701913682, 0.712262019], [0.998695385, -0.0510639664],
    [-0.770900109, -0.63695606], [0.138180112, 0.990407117], [0.56712068, -0.823634709], [-0.974534392, 0.224238086],
    [0.870061982, 0.492942337], [-0.308578863, -0.951198762], [-0.414989082, 0.909826391], [0.92057893, -0.390556569],
    [-0.942623424, -0.333857874], [0.469543424, 0.88290938], [0.25017001, -0.968201924], [-0.838478582, 0.544934553],
    [0.986366013, 0.164566364], [-0.616152619, -0.787626784], [-0.0777024824, 0.996976592], [0.730743404, -0.682652238],
    [-0.999952405, 0.00975643823], [0.743924162, 0.66826405], [-0.0971406449, -0.995270664], [-0.600667186, 0.799499176],
    [0.982967222, -0.183780956], [-0.84895169, -0.528470461], [0.269013888, 0.963136298], [0.452226752, -0.891903002],
    [-0.935929754, 0.352186734], [0.928024193, 0.372519928], [-0.432662563, -0.901555937], [-0.289960377, 0.957038651],
    [0.860278078, -0.509825096], [-0.978724185, -0.205180333], [0.583083431, 0.81241228], [0.118829034, -0.99291473],
    [-0.758325095, 0.651876561], [0.999501614, 0.0315677529], [-0.715677673, -0.698430718], [0.0559352717, 0.998434397],
    [0.633187816, -0.773998184], [-0.989721251, 0.143009949], [0.826391481, 0.563096014], [-0.228989467, -0.9734289],
    [-0.488692068, 0.872456339], [0.949682111, -0.313215403], [-0.911839997, -0.410545758], [0.395042761, 0.918662733],
    [0.329255523, -0.944240859], [-0.880608311, 0.473844913], [0.969410803, 0.245443875], [-0.5490184, -0.835810263],
    [-0.159752639, 0.987157077], [0.784611648, -0.619987549], [-0.997343783, -0.0728380297], [0.686208884, 0.727404542],
    [-0.0146343671, -0.999892912], [-0.66462703, 0.747175288], [0.994784943, -0.101994695], [-0.802419884, -0.59675986],
    [0.188573956, 0.982058992], [0.524322751, -0.851519614], [-0.961812513, 0.273709133], [0.894098477, 0.447870421],
    [-0.356748268, -0.934200553], [-0.367988336, 0.929830406], [0.899434561, -0.437055454], [-0.958441771, -0.285288227],
    [0.514015705, 0.857780773], [0.200403403, -0.979713466], [-0.80955817, 0.587039666], [0.993482596, 0.113983907],
    [-0.655568124, -0.755136037], [-0.0266915314, 0.999643718], [0.694931134, -0.719076296], [-0.998149649, 0.0608052459],
    [0.77707784, 0.629404504], [-0.147836382, -0.989011832], [-0.559057947, 0.829128586], [0.972300244, -0.233735398],
    [-0.874829933, -0.484430169], [0.317844488, 0.948142859], [0.406092665, -0.913831903], [-0.916724674, 0.399519551],
    [0.945835824, 0.324645336], [-0.478135126, -0.878286286], [-0.2407119, 0.970596611], [0.833122054, -0.553089182],
    [-0.987924648, -0.154935112], [0.623807725, 0.781577841], [0.0679718436, -0.99768724], [-0.724048369, 0.6897492],
    [0.999809624, -0.0195119478], [-0.750408632, -0.660974194], [0.106846318, 0.994275547], [0.592838332, -0.805321496],
    [-0.98112739, 0.193362468], [0.854067274, 0.520162563], [-0.278397865, -0.96046584], [-0.443503432, 0.896272674],
    [0.93244912, -0.361301313], [-0.931614491, -0.363447987], [0.441437945, 0.897291781], [0.280609287, -0.959822081],
    [-0.855263056, 0.518194081], [0.980679432, 0.195621705], [-0.59098193, -0.806684795], [-0.109136067, 0.99402682],
    [0.751929009, -0.659244087], [-0.999762032, -0.0218146747], [0.722457807, 0.691415011], [-0.065673773, -0.997841147],
    [-0.625606214, 0.780139004], [0.988278877, -0.152659296], [-0.83184596, -0.555006576], [0.238475767, 0.971148448],
    [0.480156742, -0.877182708], [-0.946581044, 0.32246601], [0.915802062, 0.401629908], [-0.403986835, -0.914764799],
    [-0.320027424, 0.947408279], [0.87594336, -0.482413961], [-0.971759321, -0.235974197], [0.557146801, 0.830414019],
    [0.150113898, -0.98866871], [-0.778525434, 0.627613056], [0.998006954, 0.06310404], [-0.693273101, -0.720674966],
    [0.024389064, 0.999702543], [0.657305628, -0.753624118], [-0.993742491, 0.111695399], [0.808203943, 0.588902697],
    [-0.198146379, -0.98017244], [-0.515989997, 0.856594608], [0.959096309, -0.28307997], [-0.898425542, -0.439125888],
    [0.365845759, 0.930675497], [0.358898989, -0.933376406], [-0.895127648, 0.44580993], [0.96117955, 0.27592367],
    [-0.522360125, -0.852724985], [-0.190835351, 0.98162206], [0.803792223, -0.59491013], [-0.994547388, -0.10428563],
    [0.662904361, 0.748704086], [0.0169372988, -0.999856554], [-0.687882435, 0.725822124], [0.997508899, -0.0705407372],
    [-0.783181601, -0.621793036], [0.157478578, 0.987522404], [0.550941997, -0.834543538], [-0.969973542, 0.243210461],
    [0.879514608, 0.475871889], [-0.327079858, -0.944996702], [-0.397157592, 0.917750427], [0.912783155, -0.408444504],
    [-0.948958189, -0.315401896], [0.486681315, 0.873579588], [0.231230878, -0.972898906], [-0.827686221, 0.561191161],
    [0.989389243, 0.145289112], [-0.631403451, -0.7754545], [-0.0582347346, 0.998302918], [0.717284413, -0.696780504],
    [-0.999571671, 0.0292655999], [0.75682167, 0.653621419], [-0.116541821, -0.993185785], [-0.584953047, 0.811067157],
    [0.979194164, -0.202925574], [-0.859101558, -0.511805151], [0.28775534, 0.957703954], [0.434737894, -0.90055703],
    [-0.928879726, 0.370381499], [0.935116109, 0.354341449], [-0.450171306, -0.892942213], [-0.271231487, 0.962514146],
    [0.850166621, -0.526513739], [-0.982541328, -0.186044456], [0.598824172, 0.800880522], [0.0994327117, -0.995044288],
    [-0.745461346, 0.666548859], [0.999927281, 0.0120595199], [-0.729169169, -0.684333488], [0.0754060228, 0.997152913],
    [0.61796506, -0.786205561], [-0.986742429, 0.162294112], [0.837221255, 0.546864306], [-0.247939367, -0.968775552],
    [-0.47157571, 0.881825578], [0.943389871, -0.331685922], [-0.919676952, -0.392675826], [0.412892453, 0.910779788],
    [0.310768862, -0.950485515], [-0.871195027, 0.490937088], [0.974015338, 0.226482056], [-0.565222166, -0.824938727],
    [-0.140460869, 0.990086231], [0.772365112, -0.63517882], [-0.998575124, -0.0533640433], [0.700271326, 0.713876789],
    [-0.0341414393, -0.999417011], [-0.649921656, 0.760001211], [0.992605444, -0.12138547], [-0.813911069, -0.580989476],
];

#[rustfmt::skip]
pub(crate) static GRADIENTS_3D: [[f32; 3]; 32] = [
    [0.248039185, 0.0, 0.96875], [0.964679792, -0.212082146, 0.15625], [0.684967926, -0.316472555, -0.65625],
    [-0.390487394, -0.751859716, 0.53125], [-0.614846621, -0.736791741, -0.28125], [-0.311716915, 0.285558229, 0.90625],
    [-0.572596427, 0.814459495, 0.09375], [-0.268416151, 0.641366671, -0.71875], [0.829731504, 0.303016615, 0.46875],
    [0.930674832, 0.125220982, -0.34375], [0.0469245667, -0.534681235, 0.84375], [-0.128447925, -0.991223773, 0.03125],
    [-0.211268093, -0.58737912, -0.78125], [-0.844631816, 0.348651735, 0.40625], [-0.750069131, 0.521878565, -0.40625],
    [0.379798648, 0.495380081, 0.78125], [0.76427554, 0.644132235, -0.03125], [0.475113371, 0.249706272, -0.84375],
    [0.398017329, -0.850539913, 0.34375], [0.19387467, -0.861792347, -0.46875], [-0.684640374, -0.121103242, 0.71875],
    [-0.994745585, 0.041135853, -0.09375], [-0.408778993, 0.107752831, -0.90625], [0.287203132, 0.91564884, 0.28125],
    [0.421219148, 0.735083578, -0.53125], [0.636650098, -0.404984679, 0.65625], [0.700123245, -0.69671614, -0.15625],
    [0.134148952, -0.208632443, -0.96875], [-0.844256605, -0.48926396, 0.21875], [-0.766583838, -0.244561153, -0.59375],
    [-0.208890493, 0.777062224, 0.59375], [-0.0450727324, 0.974739394, -0.21875],
];

#[rustfmt::skip]
pub(crate) static GRADIENTS_4D: [[f32; 4]; 32] = [
    [0.0, 1.0, 1.0, 1.0], [0.0, -1.0, 1.0, 1.0], [0.0, 1.0, -1.0, 1.0], [0.0, -1.0, -1.0, 1.0],
    [0.0, 1.0, 1.0, -1.0], [0.0, -1.0, 1.0, -1.0], [0.0, 1.0, -1.0, -1.0], [0.0, -1.0, -1.0, -1.0],
    [1.0, 0.0, 1.0, 1.0], [-1.0, 0.0, 1.0, 1.0], [1.0, 0.0, -1.0, 1.0], [-1.0, 0.0, -1.0, 1.0],
    [1.0, 0.0, 1.0, -1.0], [-1.0, 0.0, 1.0, -1.0], [1.0, 0.0, -1.0, -1.0], [-1.0, 0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0, 1.0], [-1.0, 1.0, 0.0, 1.0], [1.0, -1.0, 0.0, 1.0], [-1.0, -1.0, 0.0, 1.0],
    [1.0, 1.0, 0.0, -1.0], [-1.0, 1.0, 0.0, -1.0], [1.0, -1.0, 0.0, -1.0], [-1.0, -1.0, 0.0, -1.0],
    [1.0, 1.0, 1.0, 0.0], [-1.0, 1.0, 1.0, 0.0], [1.0, -1.0, 1.0, 0.0], [-1.0, -1.0, 1.0, 0.0],
    [1.0, 1.0, -1.0, 0.0], [-1.0, 1.0, -1.0, 0.0], [1.0, -1.0, -1.0, 0.0], [-1.0, -1.0, -1.0, 0.0],
];

#[rustfmt::skip]
pub(crate) static GRADIENTS_5D: [[f32; 5]; 256] = [
    [0.32950903, 0.407383352, 0.253151957, 0.718297508, -0.381346797], [0.203029777, -0.468312589, -0.412797895, -0.423776262, 0.624078365],
    [-0.538587507, 0.357369738, -0.369375541, -0.273212958, -0.609201738], [0.154181332, -0.353534296, 0.615605239, -0.381800362, 0.57140204],
    [-0.00646489799, -0.683738902, 0.456159547, 0.569220677, 0.0191208728], [0.539253914, -0.5262692, -0.54522962, -0.187191305, -0.3161171],
    [-0.387113306, 0.328512508, -0.146622471, 0.808135667, -0.260079632], [-0.37707854, 0.0646618205, -0.453965571, 0.36649903, -0.716396779],
    [0.160380333, 0.914027026, 0.0976011211, 0.354283248, 0.0615641558], [-0.131852137, 0.430192971, -0.860422228, 0.0619458277, 0.231052649],
    [-0.161756678, 0.256172815, 0.410420075, 0.332000879, 0.793436226], [-0.0852731145, -0.116236434, 0.606850868, -0.747764355, 0.227591917],
    [0.640072948, -0.550581802, -0.12170345, -0.204280798, -0.480233199], [-0.594289387, -0.68683595, -0.0698883071, -0.214335844, -0.352494357],
    [0.451222065, -0.165076756, -0.844609805, -0.13413008, 0.194400903], [0.335889927, 0.630291325, 0.44048245, 0.148312433, -0.523344472],
    [0.417093291, -0.165273118, 0.737268565, -0.47278666, 0.1778365], [-0.261612218, 0.538370396, 0.583574889, 0.322623897, -0.443926272],
    [-0.224212164, -0.203702091, 0.00992832337, -0.833435146, 0.462084029], [0.0775212836, -0.1505505, 0.525370849, 0.271597305, -0.788381489],
    [-0.184035078, 0.294977608, 0.121004476, -0.376740077, -0.85002596], [0.205823786, -0.518770628, -0.623035018, -0.069014806, 0.543670789],
    [0.132348295, -0.528953716, -0.0374483135, 0.609261669, 0.574534366], [-0.526802913, 0.239328504, -0.26939787, -0.56610497, 0.521680466],
    [-0.13064703, 0.122419008, 0.64503937, -0.0338848165, 0.742105768], [-0.123294881, 0.293753448, 0.0674935458, -0.198260568, -0.92446993],
    [0.702900281, 0.610071562, 0.194858012, -0.15866653, -0.265705046], [0.508422432, 0.703900534, -0.105548021, 0.107717796, -0.472532708],
    [-0.815066379, -0.194450145, 0.183449741, 0.479094659, 0.186199997], [-0.193544615, -0.598449504, 0.544731416, 0.328149312, 0.447196138],
    [-0.271948852, 0.564885452, 0.280409967, 0.554492772, 0.469953469], [-0.365817302, 0.319939423, 0.228009296, 0.11757754, 0.835466187],
    [-0.893753399, 0.177136522, -0.303096245, -0.258443997, -0.105673468], [0.612610283, -0.222910043, -0.53839523, 0.0967702441, 0.525153168],
    [0.12045879, -0.365136507, 0.224050054, -0.883554652, 0.145937523], [-0.174802293, -0.218020744, -0.681340015, -0.258798572, 0.625068153],
    [-0.0659893257, -0.615666655, -0.536475194, -0.572806027, 0.0262221425], [0.134566353, -0.426414499, 0.867055463, -0.0254447891, 0.218242891],
    [0.337606967, 0.342292634, -0.320059146, -0.663208465, 0.47599786], [-0.601227866, -0.170979658, -0.696514125, -0.0156313969, -0.35201526],
    [-0.636159412, -0.670619665, 0.000372277845, -0.041347387, 0.37928976], [0.475985593, 0.180550976, -0.357191403, 0.107015376, 0.775758385],
    [0.654702564, -0.135180045, -0.139289714, -0.724031634, -0.0973009578], [-0.063472962, 0.0991832329, 0.444572669, 0.240545039, -0.854767276],
    [0.207295399, 0.348130772, 0.400677375, -0.649283396, -0.503708543], [-0.12135195, 0.668382429, -0.692505061, 0.240958461, -0.0302389218],
    [0.592909526, 0.698635448, 0.251239368, -0.311758994, -0.00720518412], [0.161900007, -0.451494448, 0.195409597, -0.804966214, 0.289457483],
    [-0.546351387, -0.69648471, -0.425564759, -0.0303534437, 0.185425229], [0.185005624, 0.29017183, -0.327647651, -0.82936881, -0.293883687],
    [-0.90816265, 0.346156247, -0.0213647992, 0.0752608032, -0.222026597], [0.380433924, 0.191674481, 0.0812659404, -0.894745611, -0.10656951],
    [-0.476007336, -0.478528762, -0.482443685, 0.558175518, 0.0107434312], [0.775057539, 0.320053777, 0.0499831327, -0.329291331, 0.43118476],
    [0.00526054262, 0.719076984, -0.656955501, 0.22504719, 0.0257652692], [0.137836964, -0.796340718, -0.117727025, 0.462311974, -0.34532654],
    [-0.438881792, 0.827218691, 0.0352105448, 0.059661473, 0.343937112], [-0.00757580999, 0.373112738, 0.437760155, 0.678991826, 0.456142125],
    [0.0763591969, 0.730172786, -0.293946882, 0.611542192, 0.0250669894], [0.652334684, -0.177046707, 0.313941927, 0.180776867, -0.641774193],
    [0.39332896, 0.695013456, 0.334728635, 0.496560413, 0.0602753828], [-0.880363169, -0.0794421191, -0.0626542664, 0.0988786374, 0.452710833],
    [0.579167501, -0.451901092, 0.010045955, 0.517059243, 0.439202946], [-0.0433033826, -0.412893959, 0.451912161, 0.770001749, 0.174688584],
    [-0.553904976, 0.574714321, -0.42929043, -0.0143775059, 0.4223692], [0.0599392243, 0.179364679, -0.120625599, -0.869139195, 0.440774462],
    [0.514744373, -0.332593575, 0.174999228, 0.0768941767, -0.76673483], [0.0642988404, 0.559085262, -0.0366879867, -0.236766274, -0.791128973],
    [0.380382217, -0.0360842852, -0.598938945, 0.13633369, -0.690429257], [0.0320752902, -0.0187114422, -0.383764769, -0.112609622, -0.915786401],
    [0.871178402, -0.190296257, -0.419743167, 0.0157321072, -0.168533974], [-0.178417832, 0.0116308617, -0.0366090592, 0.294179164, -0.938163204],
    [-0.933308105, -0.0515414736, -0.327309918, 0.0772885173, 0.114778748], [0.0923397998, -0.770808826, -0.147565253, 0.0256654107, -0.61228498],
    [0.705314352, -0.613106936, -0.259527118, -0.230065154, -0.0796696295], [-0.0159152059, -0.52772814, 0.291868129, 0.685112399, -0.408269166],
    [0.262955669, -0.815477483, -0.306068356, -0.384843832, 0.155139218], [-0.305253861, -0.627280854, -0.252605482, -0.646724526, -0.176852109],
    [-0.281226368, -0.548734128, -0.0531456803, -0.678730142, -0.395352398], [-0.446735899, -0.529443495, -0.150183249, 0.681577282, -0.181697616],
    [0.522935645, -0.487864142, 0.0380050873, -0.209435154, -0.665747264], [-0.00997245345, 0.108443062, 0.984905981, 0.0813865678, -0.107131167],
    [0.132832389, -0.138912347, -0.654453308, 0.418770113, -0.599484259], [0.0214625899, 0.831331768, -0.181451997, 0.190674218, -0.489024911],
    [0.61604189, 0.363423555, 0.325443491, -0.145257664, -0.601167576], [0.492174661, 0.451091868, 0.430303574, -0.437697105, 0.421355323],
    [-0.208713236, -0.661875999, 0.673215025, -0.184392774, 0.176464675], [-0.331956845, 0.684302787, 0.634149308, -0.058280012, 0.126461235],
    [-0.00147208556, -0.661291691, -0.190338595, -0.394321217, -0.609075635], [-0.733816177, -0.257850066, -0.112705104, -0.616709721, 0.0446524649],
    [0.496091861, 0.607542461, -0.156894801, -0.503063806, 0.327255025], [-0.210089776, 0.231769443, -0.899413998, -0.121173553, -0.280208212],
    [0.422332767, -0.323655467, -0.361281682, -0.0883760338, 0.760623032], [-0.199002981, 0.176558378, -0.408335768, -0.810526475, -0.324859486],
    [-0.094872258, -0.155291798, -0.579288857, 0.773277077, -0.182621727], [0.2913111, 0.346886187, -0.522624453, -0.118463073, -0.712487191],
    [0.0114099004, 0.974142118, 0.0553225804, -0.11528924, 0.185915979], [-0.763226226, 0.613446243, 0.0674106094, 0.0930681334, 0.167223106],
    [0.190598449, 0.512058589, -0.371793058, -0.111401415, 0.742177795], [-0.176487907, -0.252489038, 0.681837601, 0.159662267, -0.643977291],
    [-0.905043242, -0.320004259, 0.0433876546, -0.257144005, -0.102413265], [0.137102907, -0.476689696, 0.429164441, -0.59114311, 0.469401142],
    [-0.861317404, 0.131199362, -0.293294097, -0.250542303, 0.303522953], [-0.223743981, 0.476705146, 0.735784658, -0.271482252, -0.32803835],
    [-0.281798539, 0.292949312, -0.205983391, -0.84297456, -0.285893368], [0.864416633, 0.164387673, -0.12017077, 0.166609638, -0.428439952],
    [-0.0213649574, 0.834116962, 0.0778496988, -0.274758946, 0.471422717], [0.275807085, 0.23155808, 0.343396502, 0.854278883, 0.150325444],
    [0.0647211616, 0.873878185, -0.39690758, -0.273151715, 0.000776397181], [-0.137049896, 0.509359572, 0.80918144, -0.148410488, 0.212061021],
    [-0.707293217, -0.0309646931, 0.0919658981, -0.673108233, 0.192989825], [-0.452901611, 0.376310063, 0.708620705, -0.23817781, -0.307244032],
    [-0.543588628, 0.383908638, 0.74224645, 0.0320857615, -0.0718767888], [0.125482987, 0.166756506, 0.938400958, 0.259524838, -0.0921780259],
    [-0.498373132, 0.616542798, 0.366396257, -0.476248938, -0.102175984], [0.371535785, 0.398967574, 0.603516666, -0.347429333, -0.46674032],
    [-0.533000322, -0.0448536183, 0.110386759, 0.138500658, 0.826154429], [-0.839821577, -0.149143385, 0.207295926, 0.334516025, -0.342904357],
    [0.46130311, -0.182594565, 0.234582124, -0.831796207, -0.0833364428], [-0.057002866, -0.743383504, 0.480656338, 0.239705251, -0.394515547],
    [0.162934409, 0.755401103, 0.16683212, 0.0761939925, -0.607604371], [0.387293498, 0.0227916227, -0.0245799117, 0.804403599, -0.449238206],
    [-0.613886552, -0.385123227, -0.453139946, 0.379273731, -0.35445596], [-0.834325079, -0.263538866, 0.0603901788, 0.119791904, 0.465243866],
    [-0.0853357797, -0.394968139, -0.190417898, -0.811671451, 0.376362131], [-0.199715288, -0.0569697286, 0.852155263, 0.418108197, 0.236400501],
    [0.646911958, -0.061168181, 0.554032241, 0.0328950808, -0.519354948], [0.388242577, -0.27241316, -0.493214368, -0.721426946, 0.106496573],
    [-0.842795228, 0.305893733, -0.285597913, -0.261188869, -0.215265963], [0.451030344, -0.404056791, -0.554152469, -0.146796765, 0.551974174],
    [-0.394332632, 0.669316786, 0.316291344, -0.364658922, -0.404351916], [-0.43125482, -0.0129985651, -0.493010459, -0.559605869, -0.507574897],
    [-0.40549864, 0.282078766, -0.397614901, 0.0605750592, -0.770866704], [-0.11343515, -0.110486599, -0.964509383, -0.062633748, 0.201801491],
    [-0.761994919, 0.0784618761, -0.379075203, 0.37682531, -0.357088439], [-0.386703332, -0.47133435, -0.502860031, 0.578040482, -0.203237434],
    [-0.228746363, -0.434244926, -0.0925358802, -0.414593998, -0.760694008], [-0.184561545, -0.477819172, 0.647524766, -0.250606522, -0.505503633],
    [-0.42735383, -0.679075863, 0.0540809199, -0.590336806, 0.0692992506], [-0.31798928, 0.636551575, 0.702625479, 0.000046652, -0.001531509],
    [0.0790201394, -0.400203049, 0.747980311, 0.264488886, -0.451845571], [-0.0324187874, 0.523314565, -0.465499385, -0.712441122, -0.028789912],
    [0.5755647, 0.707870015, -0.301982717, -0.276498615, -0.000521955337], [0.224600088, 0.44328421, -0.186309217, -0.25404524, -0.808581351],
    [0.651545247, -0.453571692, -0.358225307, 0.208857443, 0.444763655], [0.44711287, -0.756279496, 0.374631469, -0.285997778, 0.0773817772],
    [-0.116048625, -0.66234786, 0.331519045, -0.160709456, 0.641946744], [0.692064926, -0.120095382, -0.548595463, -0.320682172, 0.320669923],
    [-0.283317729, -0.169145595, 0.789868858, -0.453904596, 0.247383582], [0.422563532, 0.0682787522, -0.497023393, -0.0889601074, -0.749554481],
    [0.313778312, -0.0305255234, 0.162126939, -0.260753455, 0.897960943], [0.780048007, 0.00189960133, 0.474264215, -0.342387673, -0.222183782],
    [0.659586633, -0.236145728, 0.0742345846, 0.638710345, 0.309384858], [-0.276838941, -0.859890526, -0.346441602, 0.183995734, -0.173413582],
    [-0.00205628149, -0.514269525, 0.67870459, 0.364600088, -0.376761837], [-0.654871603, 0.074822241, 0.645073184, 0.366884086, 0.121743459],
    [0.50519137, -0.396037281, 0.722039997, 0.140335311, 0.216564989], [-0.225040523, -0.936738903, -0.11686344, -0.200621033, 0.134056434],
    [-0.509301039, -0.154238197, -0.259142438, 0.796312293, 0.124719521], [-0.170325508, 0.56969466, 0.0451911651, -0.687527563, 0.414367981],
    [-0.0369837907, -0.546356686, -0.541132225, 0.370989306, 0.519297045], [0.558790284, -0.575413917, 0.244092935, -0.422965588, 0.343760082],
    [-0.562343745, 0.44594511, 0.261173551, 0.0762313341, 0.640998933], [0.127105112, 0.458319026, -0.211278184, -0.41766806, -0.744783782],
    [-0.0876021369, -0.254644306, 0.716512565, 0.549682237, 0.334576337], [0.645287797, -0.395489147, 0.500665131, 0.413806849, -0.0727345281],
    [0.28913485, -0.608685342, 0.672980585, 0.00917917639, 0.304821371], [0.118094701, 0.308874565, -0.52106146, -0.750906481, -0.235126681],
    [-0.91598918, -0.0876088384, 0.346623938, 0.091380937, -0.157448036], [-0.143574769, 0.316629009, 0.0142167214, -0.885502662, -0.307920895],
    [-0.306618379, 0.497762578, -0.794096915, 0.102736628, -0.130663161], [-0.0350219464, -0.87462032, 0.226332654, 0.42040626, -0.0764517159],
    [0.797827187, -0.577183958, -0.107252335, 0.0388881629, -0.131586876], [0.105810003, -0.237515688, -0.884917758, -0.0480172073, 0.383412898],
    [-0.41690742, 0.0389916472, 0.0512211854, 0.752882819, 0.505184823], [-0.404988768, -0.39394234, -0.206452956, -0.78533744, 0.146341429],
    [-0.265882343, 0.653306242, 0.213726697, -0.388029178, -0.553400207], [-0.253444917, -0.582200848, -0.566661612, -0.199169418, 0.485833313],
    [0.0422084406, 0.00222265446, -0.14051572, -0.411387279, 0.899571757], [-0.0810770567, 0.859979577, -0.190918951, 0.458500388, -0.0847878942],
    [0.66850228, 0.477466076, 0.203179812, 0.000012814, -0.532774634], [-0.167308857, 0.251344324, 0.347823677, 0.140016342, -0.876497513],
    [0.569919855, 0.758541955, -0.231363805, 0.183224772, -0.112716162], [0.831757425, 0.537926952, 0.00486151208, -0.00800902204, 0.136844444],
    [-0.570421399, -0.475440029, -0.0680030423, -0.0138950769, -0.666152174], [0.704003699, 0.640371897, -0.172812021, 0.181681417, 0.177286473],
    [0.620722238, 0.5339928, 0.48953142, 0.151981731, -0.258488172], [-0.503523275, -0.332881615, 0.78199768, 0.153966593, 0.0206895911],
    [0.236759861, -0.238133591, -0.0838091005, 0.237591431, 0.907614184], [0.580387625, -0.533294049, -0.0713044937, -0.60810425, -0.0622298356],
    [0.778377349, -0.424137184, -0.295615254, 0.272359091, -0.229496187], [-0.163850211, -0.695587352, -0.301661395, -0.630226272, 0.033564758],
    [-0.0601438316, 0.753965646, 0.645091275, 0.10471001, 0.0284883292], [0.00924191022, 0.457767816, 0.792205651, 0.101571305, -0.390457028],
    [0.231992059, -0.525848221, 0.518265725, 0.532558404, -0.342703251], [-0.45720051, -0.777992844, 0.0293764099, -0.28838005, 0.318855455],
    [0.219063282, -0.267314658, 0.270179374, 0.884133768, -0.16082518], [0.829787301, -0.287668123, 0.453804262, 0.123675934, -0.0864062518],
    [-0.447375575, -0.716050358, 0.189479671, -0.445434477, 0.229809836], [0.856458336, 0.321583814, -0.202045735, 0.0866224339, 0.33872857],
    [-0.1313008, -0.547968949, 0.135590106, 0.594198877, 0.557703459], [0.220224598, -0.405127235, -0.660049028, 0.593044789, -0.00249168445],
    [0.346071956, 0.33601447, -0.578940404, 0.656493067, -0.0342540235], [-0.00274709724, -0.444499079, -0.0508801774, -0.135878991, 0.883946338],
    [-0.165752606, 0.842565623, -0.0490005149, 0.358583644, -0.362802927], [0.127791445, -0.255318735, -0.013215784, -0.626131626, -0.725442086],
    [-0.117229538, -0.497467496, 0.293086228, 0.33904836, -0.733437113], [0.200495451, 0.0706378089, -0.913505452, -0.219165873, -0.268860527],
    [0.315173485, -0.174268475, 0.42677044, 0.0700194129, 0.826595697], [0.487024877, 0.368863747, -0.710920729, -0.0265060232, 0.347326148],
    [-0.75452161, -0.208333245, 0.528802147, -0.254755168, 0.206790939], [-0.481178946, 0.318769592, 0.729632178, 0.285592683, -0.230057543],
    [-0.822379573, -0.435075598, -0.00594627802, -0.333393562, -0.152362847], [0.349804746, -0.685667741, -0.466420582, -0.387258023, -0.199948626],
    [0.116863568, -0.735628784, -0.576986412, -0.327845583, -0.069261487], [-0.0928518239, -0.822203453, 0.159330635, -0.228470362, -0.487621844],
    [-0.0532853143, 0.0669333856, -0.611838357, 0.499197184, 0.607566123], [-0.392640532, -0.251308742, -0.363311203, -0.403188968, 0.698656536],
    [-0.100962944, -0.0231446804, 0.292298056, -0.692446079, 0.651422353], [0.306699721, 0.113350221, -0.856482876, 0.380353287, -0.121883014],
    [-0.491918023, -0.643658413, -0.535698546, -0.23309164, 0.0491514052], [0.0624947795, 0.19959595, -0.505234345, 0.52366539, 0.653275345],
    [-0.194386171, 0.00130294674, 0.39940689, -0.783399865, 0.434708071], [0.308074248, -0.284147743, 0.643208535, 0.148878818, 0.623272169],
    [-0.220151663, 0.866033997, -0.0923776681, 0.0729516157, -0.433200635], [-0.494009801, 0.582407077, 0.390653645, -0.512771513, -0.0348054397],
    [0.101582942, -0.695647072, -0.491781573, 0.507446202, 0.08003307], [0.702749686, -0.190060659, -0.456387969, -0.0790120358, -0.505457164],
    [-0.0444674017, -0.599126576, -0.779180482, -0.128943755, -0.12377916], [0.31455455, 0.906479493, -0.0408358449, -0.232708702, -0.153393152],
    [-0.293151626, -0.674915893, 0.162021192, 0.156592469, -0.638575441], [-0.63270323, 0.153457315, -0.627640327, -0.333256471, 0.266730611],
    [-0.713249747, 0.059352095, 0.477526192, -0.4955315, 0.119035268], [-0.667912782, -0.671035943, 0.314551953, 0.0469618322, -0.0495472914],
    [-0.488461837, 0.0500888385, -0.295933935, -0.424168939, -0.700999257], [-0.628719349, -0.213061627, -0.679599493, -0.305141393, -0.0659544044],
    [-0.131255807, -0.299551841, 0.737613987, 0.401695796, 0.433135893], [0.0659072424, -0.00809741224, -0.879064554, -0.468247649, 0.0598357452],
    [0.216037754, -0.251197364, -0.225055095, 0.107894713, 0.909910165], [0.571518898, -0.344376165, 0.45392669, 0.300208699, -0.508523848],
    [0.294005007, -0.494695913, -0.183125803, -0.52019143, 0.603906306], [-0.578798227, 0.617964722, -0.101244216, -0.298645959, -0.428570198],
    [0.268494603, 0.355794528, -0.704909002, 0.535778652, -0.131777987], [-0.130658348, -0.344466565, 0.711297063, -0.508063854, 0.316541924],
    [0.560536955, 0.0536467813, -0.276265016, 0.748542661, 0.215132216], [-0.342838827, -0.266995501, 0.860440629, 0.0567797959, -0.259986383],
    [-0.11364631, -0.0199429718, -0.198442085, -0.662666949, 0.712867483], [-0.576081379, 0.469452728, -0.255935757, 0.529190102, -0.319685946],
    [-0.186237767, 0.219755391, 0.484996601, 0.627039388, -0.537236415], [-0.0651514667, -0.330720182, 0.650604277, 0.661816755, 0.158404877],
    [0.539715771, -0.346820446, 0.670232634, 0.306605434, 0.212611827], [0.302111549, -0.172790538, -0.881428698, 0.279918097, 0.153627313],
    [-0.668049383, -0.489823984, -0.0815654492, 0.307923804, -0.460773799], [-0.704265575, -0.0718724676, 0.317315847, -0.289233846, 0.560801911],
    [-0.371215968, 0.0940589232, -0.722451784, -0.567245226, -0.0982237102], [0.407308915, -0.14095171, -0.0490993776, -0.830498147, 0.349419722],
];

#[rustfmt::skip]
pub(crate) static GRADIENTS_6D: [[f32; 6]; 256] = [
    [-0.115085753, -0.404565116, -0.667095059, -0.0579579697, -0.465407664, 0.397621804], [0.0391016745, -0.719214867, -0.0165707278, 0.2324721, 0.640105181, 0.13095238],
    [-0.267963474, 0.213822927, 0.451822059, -0.199503168, -0.665044676, -0.442996868], [-0.782037594, 0.519939941, 0.0538704916, -0.0725681958, 0.299414339, 0.142346549],
    [-0.318118039, -0.0192260009, 0.0411002749, -0.116458401, 0.681215391, -0.647398698], [0.363287414, -0.471306484, 0.40425578, 0.315955856, -0.545921563, -0.29088015],
    [-0.171568524, -0.840378134, 0.378777172, -0.0610544281, -0.125475724, 0.318409935], [0.15376485, 0.384047756, -0.0569317345, 0.391158237, 0.541744271, -0.615736022],
    [0.08754793, 0.727217847, 0.0401365307, -0.00410333546, 0.667089135, -0.129822457], [0.0955067461, -0.446922165, -0.465456396, 0.665381597, 0.324093341, -0.163463208],
    [-0.60821979, -0.275187593, 0.0218631215, -0.20796734, 0.699896975, 0.144070432], [-0.551847362, 0.458529286, -0.0823775058, 0.333422758, 0.35016432, 0.49461454],
    [-0.579361025, 0.255558976, 0.250582684, -0.180409773, -0.453166872, 0.546196696], [0.245395463, 0.770764941, 0.324320805, -0.447470915, 0.200446359, -0.0104654518],
    [0.377866633, -0.622899679, 0.132961785, 0.420489665, -0.408310285, -0.328641316], [0.417936164, 0.0477380917, -0.558423088, 0.449856876, 0.513867651, -0.211619754],
    [-0.328617179, -0.679103233, 0.137424603, -0.560581012, -0.278715725, 0.141458475], [-0.0583247571, 0.408920531, 0.518418385, 0.468071554, -0.0787430338, 0.579079576],
    [0.190080418, -0.339266394, 0.035351818, 0.227286735, 0.734859083, -0.505807143], [-0.940143572, -0.272584825, -0.0290218411, 0.0806892333, -0.0595180577, -0.175875408],
    [-0.605840231, -0.287162026, 0.522649232, -0.456074257, 0.114647368, 0.237035061], [0.492960002, 0.312862805, 0.0274592452, -0.33448399, 0.394868151, -0.624942313],
    [-0.0512471961, -0.283954188, 0.395671584, -0.0492929954, -0.835095046, 0.245711634], [0.763330832, -0.0740384165, 0.510402014, 0.101715052, 0.263622722, 0.267378471],
    [-0.462169629, -0.35577017, -0.22863071, 0.0105558307, -0.769761391, 0.122109762], [0.515264869, 0.429563091, -0.233269169, 0.291087377, 0.591794626, -0.246191836],
    [0.0345323986, 0.759201124, 0.407277925, -0.299956376, 0.36473433, 0.183141745], [0.0256570226, 0.0059052237, -0.174524225, 0.870589218, -0.214159161, -0.406273809],
    [-0.248201628, 0.638273607, 0.395739387, 0.129516123, -0.0230534626, -0.597567739], [0.168654506, -0.224875279, 0.890964331, 0.129814585, 0.0702311868, -0.324630683],
    [0.398290674, 0.258753439, -0.666759315, -0.465228567, -0.170295548, -0.290525419], [-0.0611132427, 0.0828969761, -0.519072351, -0.31285062, -0.289803176, -0.733550111],
    [0.476978869, 0.104457272, -0.112550639, -0.0541854465, -0.61335214, -0.608091506], [0.521143949, -0.336584293, -0.560879047, 0.366404283, 0.125599953, 0.387952634],
    [-0.392138813, -0.209937802, 0.21222593, 0.462820258, 0.276622754, 0.682928024], [-0.274114565, 0.113629963, 0.720210094, 0.25868055, -0.322415331, 0.471571399],
    [-0.502716199, 0.133072154, -0.502219905, -0.343045504, 0.475337587, -0.365673834], [-0.638947762, 0.173258918, 0.395475591, -0.155516872, 0.474341621, 0.395146417],
    [0.453401501, -0.630096642, 0.103061512, -0.122381071, -0.173531839, -0.584545293], [-0.263187533, 0.131252154, 0.416818897, 0.777482149, 0.35695924, 0.0887063172],
    [0.864188185, -0.181177905, -0.0822249436, -0.0781987207, -0.370583919, -0.264848874], [0.222164364, 0.690607252, 0.176235554, 0.112184897, 0.0498081255, -0.653895518],
    [0.346954336, -0.0482442164, -0.719134882, -0.0230771739, 0.526918346, -0.28629479], [-0.0994939778, -0.588865583, -0.2675379, -0.345689131, 0.604388666, 0.294915429],
    [-0.16281832, 0.50646886, -0.619479832, -0.0550569335, -0.56084397, -0.125087977], [0.184360968, 0.111148623, 0.108590156, -0.692656937, -0.649530259, -0.20050438],
    [-0.625480329, 0.101067568, -0.113875239, -0.720076336, -0.256366698, -0.0368554116], [-0.771692629, 0.237179621, -0.261128273, 0.490335842, 0.19394399, 0.0447753253],
    [0.438730894, -0.0644707977, -0.316517274, 0.0258536932, -0.602008175, -0.583175169], [-0.132002805, -0.221871796, -0.725114389, 0.229260233, -0.555703028, 0.214921332],
    [0.551402801, -0.51208408, -0.169901714, 0.322710217, 0.419181445, -0.353558037], [-0.110611174, 0.162625238, -0.473426668, 0.368171319, -0.522411099, -0.573342754],
    [-0.708915415, -0.418632018, 0.095144935, 0.0496180631, 0.453887206, 0.323508982], [-0.678331416, -0.364431614, -0.0438038173, 0.393688776, -0.325500004, -0.379731759],
    [0.389517087, -0.274121502, 0.118650666, 0.122891363, 0.566887144, 0.650071181], [-0.434503433, -0.26593308, -0.539926318, 0.250203163, 0.569444843, 0.249192459],
    [-0.633556941, 0.279613507, 0.655106768, 0.0640387075, 0.155006179, 0.251255128], [0.107514664, -0.146514666, -0.612818876, -0.464881231, 0.0621954581, 0.609462256],
    [-0.227916444, 0.259304977, 0.761914301, 0.436645116, -0.259620362, -0.205523557], [0.48104209, 0.209325245, 0.537905886, 0.231147028, 0.611905361, -0.0870723114],
    [-0.544465029, 0.23003905, -0.406381021, -0.483420377, -0.403570035, 0.298211836], [0.507863687, -0.104042297, 0.534305634, 0.544935115, -0.385017722, -0.0239632878],
    [-0.220042369, 0.707257345, 0.0392307779, 0.2278414, 0.581804927, -0.243763559], [-0.0320699034, -0.62736429, -0.611596185, 0.43261702, -0.0354159949, -0.207180831],
    [0.462767991, -0.511155159, -0.0829725112, 0.50627594, -0.0122910854, -0.511092314], [-0.551678367, -0.0502775383, -0.201764293, 0.310738891, 0.0338152594, -0.74479003],
    [0.802814045, -0.269615878, -0.443759861, 0.00345154673, 0.291593508, -0.0289030553], [-0.290742281, 0.0840466721, -0.890994079, -0.315480679, 0.119674351, -0.0261653435],
    [0.200092043, 0.451815348, -0.616067529, 0.500035642, 0.340382143, 0.101937326], [-0.200869887, -0.529293297, -0.38749951, 0.183011958, -0.620319558, -0.333248095],
    [-0.00712002262, -0.464293961, 0.737827645, 0.472148711, -0.130431152, 0.00735522582], [-0.257802283, 0.504327728, -0.151879044, -0.661695147, -0.433464728, 0.174333425],
    [0.207610838, 0.785919804, 0.0991192961, -0.292025296, -0.298959627, 0.393379631], [-0.424121731, -0.622167573, 0.330556606, 0.485087037, 0.200186856, 0.219946333],
    [-0.571428052, -0.449945124, -0.235170089, -0.377406097, 0.52241725, 0.0189539025], [0.113018897, -0.333422164, -0.0695070082, 0.163485455, -0.634387484, 0.664868552],
    [-0.377507636, 0.223552776, 0.295841928, 0.391849509, 0.268241475, -0.703199949], [-0.0206253498, 0.740754767, -0.169903693, 0.522141112, -0.153025204, 0.354882588],
    [-0.249705006, 0.0615582654, -0.559078684, -0.596505471, 0.362166059, 0.366477807], [-0.342571194, -0.168742586, -0.347815358, -0.731018611, -0.26675548, -0.357279579],
    [0.2714851, 0.771864496, 0.205531766, -0.278017158, 0.422082583, -0.181191849], [-0.354793335, -0.633295865, -0.440367242, 0.191739734, -0.491779541, -0.0228798148],
    [0.345474147, 0.342023557, -0.565366511, 0.0060104491, 0.607574103, -0.273579591], [0.492120911, -0.2901877, 0.317782337, -0.124912421, -0.338298047, -0.665262213],
    [0.645740666, -0.243142153, -0.370493127, -0.378631269, -0.256671862, -0.421181251], [0.521732475, 0.653863885, -0.105386669, -0.456437422, -0.0791786026, 0.273032092],
    [0.387201712, -0.563345141, 0.306390419, -0.375843165, 0.522571092, -0.156535513], [0.879716561, -0.0857690798, -0.312880915, -0.092154757, 0.313787849, -0.117867117],
    [-0.401539991, 0.0905507345, -0.11796042, 0.515078928, 0.584014902, -0.458554066], [0.0326939857, 0.365716886, 0.758269577, 0.0742332117, 0.53064961, 0.0557667751],
    [-0.624855892, 0.505310347, 0.13183313, -0.347456406, 0.171983921, -0.431893702], [0.350855449, -0.10451878, 0.214641056, -0.14094251, 0.866245593, -0.222843616],
    [-0.081891052, 0.275581285, -0.906105135, 0.17678267, 0.25487722, -0.0103820166], [-0.33238711, -0.886809374, 0.18709031, -0.135030827, 0.193219272, 0.111884527],
    [-0.527722336, 0.0183233062, 0.348201751, 0.713916985, -0.0215599135, 0.29964419], [0.736045363, -0.327428239, -0.0453062001, -0.357510532, -0.121090294, 0.454421259],
    [-0.473692926, 0.774881042, -0.198379497, 0.0197599822, -0.178601658, -0.321762255], [0.46046268, -0.101188832, -0.759845284, -0.444412496, -0.0127964824, 0.0519987336],
    [-0.785633737, -0.0705038328, 0.0519678421, 0.410353982, 0.29907114, -0.342453277], [0.0436225471, -0.0578277051, -0.327039597, 0.717172361, 0.60315732, -0.0983014965],
    [0.816798217, -0.192787398, -0.105283753, 0.533336721, -0.00815671209, -0.00862746463], [-0.194380772, -0.470144776, 0.611750155, -0.374024313, -0.205476246, -0.429915199],
    [-0.24375894, -0.249038856, 0.391998767, 0.633116494, 0.373968611, -0.429195964], [0.52460189, 0.136823508, -0.0826908751, 0.359471629, 0.715388073, 0.241318165],
    [-0.531447279, 0.565439316, -0.134320926, 0.0341626664, 0.0815864856, -0.609898857], [-0.425573468, 0.0142745914, -0.549940617, 0.699331621, 0.164822245, -0.00420578944],
    [-0.296273517, 0.559294717, -0.376488181, 0.525087354, -0.335361094, -0.263598707], [-0.352226435, 0.0343426941, 0.76708948, 0.21543498, 0.154317608, 0.464870619],
    [-0.543243225, -0.491361671, 0.515810782, 0.292869624, -0.144564359, 0.301194743], [-0.47851581, -0.465129454, 0.298859681, 0.57438443, 0.36168797, -0.0680032369],
    [-0.30814923, -0.175284804, 0.512169078, -0.446146487, -0.0114360711, -0.642514321], [-0.225692628, -0.250206699, 0.0265253072, -0.0249455434, -0.589353512, 0.733345765],
    [0.0935402107, 0.484598337, 0.678470852, -0.401475392, 0.00945327315, 0.367178607], [-0.209951877, 0.125582904, -0.764509968, 0.0622574898, 0.590995605, -0.0502180515],
    [0.220692479, -0.331682146, 0.726355334, -0.495237958, 0.0687495537, 0.252393691], [-0.196608333, 0.117520815, 0.252197518, 0.088543559, -0.173830086, -0.919713854],
    [0.0179772066, 0.149861426, 0.340477539, -0.606567284, 0.632870108, -0.304704735], [0.108686671, 0.480144405, -0.522534665, 0.166493118, -0.530882734, -0.418389347],
    [-0.266907097, 0.62461049, 0.482666536, 0.428407805, -0.284512246, 0.202915961], [-0.32666605, 0.125920184, -0.237969453, -0.252676168, -0.257058509, 0.831191684],
    [-0.681134975, -0.0261719796, -0.0341395981, 0.155401126, -0.600405032, -0.386741449], [-0.627239243, -0.16498097, -0.395781438, -0.270040487, -0.234486742, 0.542957979],
    [0.278556278, 0.406106692, -0.829533956, -0.244062605, -0.0145234911, 0.0978758586], [0.203832771, 0.156499968, 0.955581376, -0.0819208455, 0.0515127512, -0.10704955],
    [0.531646563, 0.148184412, 0.278168757, 0.690128494, 0.335568657, 0.170680383], [0.684063505, 0.139958177, -0.324728553, 0.2423918, 0.480209893, -0.343023134],
    [-0.0745004467, -0.0111720354, -0.0618259925, 0.414896529, -0.170640524, -0.888394674], [-0.348441108, 0.106796822, 0.430324104, 0.758092631, -0.269216385, -0.186607877],
    [0.0220438228, 0.0330461769, 0.687666169, 0.240079917, -0.18353153, 0.658949976], [-0.819692895, -0.33451431, -0.01609789, -0.316551717, 0.321951033, -0.109941507],
    [-0.340365565, 0.110421657, 0.3242542, 0.110049513, 0.246993206, -0.832887156], [-0.457980336, 0.419222138, -0.126807828, -0.0375062797, 0.772623709, 0.00851288414],
    [0.202803098, -0.12056929, -0.616134339, -0.38024209, -0.368552339, -0.533195604], [0.80527112, 0.358730949, -0.417993412, -0.0113832273, -0.203756635, 0.0805337993],
    [0.162205362, -0.0431852032, -0.147982979, -0.744021814, -0.622164734, 0.0962708736], [-0.119332304, -0.490581782, -0.415332088, 0.0915211926, 0.716903496, -0.224191487],
    [0.493472442, -0.675892838, 0.26244454, 0.406934239, -0.204780277, 0.152467204], [-0.180689829, 0.400362371, 0.450498475, -0.317828132, -0.334118785, -0.6256694],
    [0.366853821, 0.130472477, 0.344238863, 0.831080989, 0.00761152433, 0.197841521], [-0.569879951, 0.0350710042, 0.51633221, 0.442634343, -0.299655745, 0.348839774],
    [-0.198545561, -0.585313351, 0.558373835, 0.440149216, 0.0607353931, -0.329827958], [0.180311222, -0.161522722, -0.249938887, 0.300878162, -0.13823323, 0.877093343],
    [-0.0640766896, -0.445704002, 0.169746292, 0.64081834, -0.202174661, -0.562943672], [-0.180019107, -0.464244545, -0.763445349, -0.344441476, -0.00810080217, 0.224757133],
    [-0.216563983, -0.064375878, -0.545953623, 0.542409831, -0.367828487, 0.470514833], [0.347497876, -0.447568074, 0.263295, -0.173603883, 0.684920048, -0.332189715],
    [-0.48520057, 0.222507811, 0.564902132, -0.27290739, 0.379698472, 0.421078244], [0.118725089, -0.389695, 0.24217257, -0.704501598, -0.410788536, 0.332151897],
    [-0.505589807, 0.47405432, -0.101219998, -0.579530942, -0.1574505, 0.385693128], [-0.926761998, 0.0382684713, 0.164766749, -0.00522854055, -0.0218030925, 0.334659423],
    [0.342622114, 0.235172119, 0.463570564, 0.146406482, 0.766715994, -0.0558410269], [-0.312696299, -0.336369384, -0.424819395, 0.339953319, 0.65767563, -0.245966765],
    [0.390966113, 0.480681611, -0.235878904, -0.523118056, 0.0183693941, 0.535221352], [0.901501725, 0.137672729, -0.280640138, 0.00231956186, 0.243674382, -0.173779712],
    [0.545498405, -0.14418595, -0.531406352, 0.594578298, 0.112149698, -0.182066702], [0.427133382, 0.532860984, -0.199909386, -0.537477069, -0.368921168, -0.262045904],
    [0.578772569, -0.648177533, -0.357399578, -0.0519426673, -0.24985004, -0.228102297], [-0.653856303, 0.0984869758, 0.0674711897, 0.735030469, -0.0443770281, 0.126415103],
    [-0.241924856, -0.442696676, 0.622104457, -0.0487447284, -0.0677289844, -0.592886833], [-0.889961289, -0.185488273, -0.388771746, -0.117213673, 0.0828550429, -0.0426090487],
    [0.0410344182, 0.212220332, -0.0308356864, 0.103484188, -0.531143251, 0.812099586], [0.0924321503, 0.0502597802, -0.761552079, 0.309075706, 0.365217358, 0.424331441],
    [-0.296154344, -0.440921644, 0.61728783, 0.572262646, -0.0688145923, 0.0679445341], [0.22055114, 0.578094456, 0.172744524, 0.0863989793, 0.664815932, 0.371319697],
    [-0.54412462, 0.495584489, -0.341724948, 0.16586168, 0.557708081, 0.054772907], [0.00817009097, 0.0935111836, 0.0534467388, 0.25320967, 0.67323086, -0.686277951],
    [-0.715949553, 0.00212438383, -0.0276401177, -0.1902029, 0.0354506808, -0.670234179], [0.00361380928, -0.172984445, 0.0142172995, -0.130217114, -0.834004966, 0.507287306],
    [0.0367116322, 0.526722111, 0.733318522, 0.359732909, -0.213154431, -0.0928301775], [0.251542776, 0.653201727, -0.347841869, 0.570720248, -0.233855443, -0.093004301],
    [0.561203032, 0.0229177082, 0.440123388, 0.231144738, -0.637324916, -0.176653336], [-0.000642233967, 0.481211305, -0.123602939, -0.835498936, -0.205809878, 0.11287782],
    [-0.675079616, -0.512571127, 0.00725833339, -0.00217625358, 0.0343812468, 0.529432585], [0.705823322, -0.618778731, 0.266514122, 0.163283933, 0.13952894, 0.0420306429],
    [0.714811097, -0.285335669, -0.488689033, 0.24157036, -0.252747873, -0.215809998], [-0.126741882, -0.578229482, 0.268931506, 0.462889586, 0.451820361, -0.398565677],
    [0.81086433, -0.217253831, -0.378637985, 0.0982151757, -0.335703143, -0.172018219], [-0.348818597, -0.437497947, 0.7893167, 0.0883234797, 0.19141481, -0.139497721],
    [0.198229443, -0.677192234, 0.234682548, -0.477198309, -0.443166428, -0.151410565], [-0.0298212682, 0.361910105, -0.351090465, -0.323760758, 0.750575629, -0.276915962],
    [0.55739256, 0.182450081, 0.476578286, 0.465067792, -0.335498335, 0.316309115], [0.16202467, -0.0268353001, 0.759278441, 0.0170089532, -0.351069216, 0.522479878],
    [-0.646051777, 0.20553218, -0.499963087, 0.422172881, 0.269742863, 0.19854315], [0.178952587, -0.282427151, 0.830206799, -0.226344503, -0.360682174, -0.13283103],
    [0.0409431406, 0.254943557, -0.491529758, -0.105702638, -0.743459461, -0.35752052], [0.127642072, -0.546616529, -0.583665048, 0.503052504, -0.0865635369, 0.289305921],
    [0.426701651, 0.124907391, -0.00321516466, 0.469956331, -0.761961686, -0.0294778263], [0.399155394, -0.259363563, 0.516132063, -0.122324945, 0.497904553, 0.494106134],
    [-0.31139861, -0.804161758, -0.473722055, 0.159343662, 0.0369371183, 0.0720238482], [-0.201572313, 0.414294518, -0.35852983, -0.0816766372, 0.55916749, -0.58296283],
    [-0.17760134, -0.108206983, -0.772643125, -0.139245661, -0.403492975, -0.421397294], [0.243473922, 0.702750311, -0.175485881, -0.224680627, 0.578967854, -0.174304318],
    [0.117929167, -0.0782236105, 0.765022175, -0.283446436, 0.487854378, 0.27635317], [-0.452368295, 0.200973373, 0.419645719, 0.669956277, 0.000052030, 0.360594903],
    [-0.858572463, -0.214047174, -0.0292432155, -0.13233539, 0.402552484, 0.191365646], [0.0926608186, 0.0559051044, -0.192988352, 0.709906285, 0.655611661, 0.131341174],
    [-0.629513271, -0.226545157, 0.111739427, 0.709152182, 0.185091149, 0.0524316985], [0.832589114, -0.182051215, -0.458445338, 0.0540942007, 0.164685929, -0.182846812],
    [-0.755791896, 0.187959158, -0.186603029, 0.193859089, -0.0890649226, -0.559567125], [0.222131912, 0.606646365, -0.723129473, 0.203851292, -0.0118871151, -0.134256151],
    [0.462422979, -0.0252772688, -0.033801521, 0.378778916, 0.0883555506, 0.795677909], [0.385019287, 0.360131791, -0.641272551, 0.0176896503, 0.329090218, 0.449690407],
    [0.00159612553, -0.0421992643, 0.141702984, -0.100860254, -0.688963333, -0.702348683], [-0.471934545, 0.0773392827, 0.0438024745, 0.72013198, -0.348541943, 0.359591725],
    [-0.0172943275, 0.158488798, 0.213938489, -0.563240525, 0.780186342, 0.0536834498], [0.352725465, -0.114662217, 0.145729094, -0.208962771, -0.801122864, 0.394635364],
    [0.394003085, 0.0518600661, -0.399794653, -0.0239822887, 0.763658532, 0.313826121], [0.0610140289, 0.627306022, -0.261666757, 0.589019883, 0.230288867, 0.366493611],
    [-0.208036261, 0.299739975, -0.234337343, -0.597107865, 0.65676331, 0.155199947], [-0.0383966803, -0.727639022, 0.277240609, 0.496136427, -0.301137809, -0.23530716],
    [0.2319103, -0.304690632, -0.361297967, 0.770719669, 0.0302040919, -0.357664529], [-0.496306611, 0.42767272, -0.320662468, -0.668112453, 0.0737029483, -0.127062972],
    [-0.411911608, 0.347603213, -0.687306327, 0.177552396, 0.212930833, 0.400307949], [0.0935983753, 0.64116379, -0.279632348, 0.0387727427, 0.456767979, 0.540197905],
    [0.116527779, 0.155088959, 0.483676454, -0.573594847, -0.602441809, 0.190993712], [-0.386515517, -0.31925208, -0.348018948, 0.414136671, -0.198679105, -0.645433271],
    [-0.644856082, -0.583870177, -0.201642514, 0.082232241, 0.321729501, -0.303849523], [0.891808894, 0.141728526, -0.304100493, 0.029963608, 0.168254415, -0.250809581],
    [0.0563195578, 0.298725125, -0.557162869, -0.558181538, 0.524465151, -0.102618809], [0.0228553477, -0.090987577, -0.782456141, -0.228694522, -0.557197025, -0.127246111],
    [0.0876829907, -0.159752887, 0.162252306, -0.151471677, -0.949694335, 0.124907561], [-0.507433386, -0.760249994, -0.22429921, -0.288230324, -0.171695526, 0.040805596],
    [0.387078779, -0.252006353, 0.362240007, 0.651414509, -0.0893385285, -0.472358719], [-0.165115456, -0.379191336, -0.384995373, 0.441223506, 0.501544446, 0.484256509],
    [-0.499216191, 0.0184555527, 0.00127036992, 0.389249281, 0.5687256, -0.524859183], [-0.0452946627, 0.573562463, -0.383845168, 0.0821184563, 0.480154395, -0.53324075],
    [0.881052372, 0.0549429917, -0.316426572, 0.179274365, -0.241617302, 0.173447375], [0.42629929, 0.302422191, 0.221927074, 0.787022763, 0.229441576, 0.0742283012],
    [0.578353433, -0.43227712, 0.164042342, -0.392341782, 0.330092023, 0.434558501], [-0.0240258394, 0.0879260743, 0.0120334756, 0.288994451, 0.0558878284, 0.951265325],
    [0.281499051, 0.837631467, -0.243780128, -0.210885505, 0.325670298, 0.0957560425], [0.328877508, -0.564487479, 0.696581383, 0.281753256, 0.0762393581, 0.0526356375],
    [0.143221512, -0.595858559, 0.66867189, -0.374119543, 0.159024895, 0.109835015], [-0.175898499, -0.161823301, 0.542478629, 0.722151414, -0.19245239, 0.300082134],
    [-0.00201252651, 0.716881155, 0.384514995, 0.00858957417, 0.0816058521, 0.575753664], [-0.542324716, 0.682786856, 0.083063421, -0.019997225, -0.135294831, -0.462689853],
    [0.346125683, 0.291743148, -0.778353919, -0.183632427, -0.388638637, -0.0669870649], [-0.217644359, -0.279600217, 0.317776743, -0.758444712, -0.353280284, 0.270974637],
    [-0.784822671, -0.36773333, -0.0690175574, 0.452817135, 0.197163941, -0.0120487121], [0.425477274, 0.409758279, -0.412536665, 0.685006077, -0.0597885248, -0.0898484731],
    [-0.222956188, -0.609016077, -0.0188975181, -0.233790223, 0.199826637, 0.696020321], [0.614453993, -0.401267178, 0.576433033, 0.163833014, 0.240785988, -0.21056294],
    [0.01595182, 0.28756308, -0.680557296, 0.032840659, -0.458901603, -0.492164191], [-0.32276916, 0.808961061, 0.0848290468, 0.258875862, -0.325184904, 0.247879347],
    [-0.112441669, -0.411148489, 0.821869048, -0.333709373, -0.0926530012, 0.15132262], [0.506738976, -0.239738784, 0.69593918, -0.210492491, -0.0460321818, 0.39367948],
    [-0.241130491, -0.282436532, -0.390988657, -0.519611972, -0.402308369, 0.526654475], [0.580627509, -0.190009793, 0.321979636, 0.00550997299, -0.72052305, -0.0625560822],
    [0.263449166, -0.187443655, -0.767211511, -0.501566136, -0.224788477, 0.0689018272], [-0.0373293417, -0.271074548, -0.367146987, 0.725891706, -0.423181448, -0.290390931],
    [0.290545721, -0.404712671, -0.210883375, -0.24274633, -0.591241955, 0.546649989], [0.49814048, -0.0335029793, 0.267207337, 0.371774853, 0.181118454, 0.712961019],
    [-0.6399068, 0.399363056, 0.351022928, 0.431737616, -0.120357065, -0.326998697], [-0.446733479, -0.186266148, 0.398613635, 0.420094332, -0.656013009, -0.00299576502],
    [0.413406651, 0.479786937, 0.608858146, -0.135190517, -0.421807368, -0.178866605], [0.259586577, 0.630776965, -0.0678587952, -0.0638215316, -0.44340311, -0.573978142],
];

#[rustfmt::skip]
pub(crate) static CELL_2D: [[f32; 2]; 256] = [
    [-0.449966116, -0.00552219223], [0.379081179, 0.242481875], [-0.1936771, -0.406188603], [-0.0502361769, 0.447187127],
    [-0.287449177, -0.346226762], [0.0610598489, 0.445838194], [0.183775454, -0.410763414], [0.168620331, 0.417213595],
    [0.0773345456, -0.443305051], [-0.299926918, 0.335475549], [-0.0338375658, -0.448725996], [-0.208411975, 0.398828846],
    [0.387700962, -0.228446851], [-0.4498668, -0.010948166], [0.319770621, -0.316617672], [-0.438792896, 0.0998037804],
    [0.42525732, 0.147160496], [-0.400874347, 0.204449892], [0.448368683, 0.0382821694], [-0.360412355, -0.269449317],
    [0.444049568, -0.0729381985], [-0.415522315, -0.172746073], [0.261467175, 0.36624434], [-0.0284236851, -0.44910143],
    [0.343361534, 0.290865703], [-0.137783423, -0.428387358], [-0.109418595, 0.43649464], [-0.238713792, -0.381465235],
    [0.00106336847, 0.449998744], [0.236908295, -0.382589153], [0.111480276, 0.435972646], [0.135757296, -0.429033748],
    [-0.341983048, 0.292485205], [0.444896877, -0.0675778699], [-0.259733359, 0.367475962], [0.414701265, -0.174707931],
    [-0.44438932, -0.0708387751], [0.359134894, -0.271149641], [-0.448182751, 0.0404007632], [0.401836114, 0.202553049],
    [-0.42455708, 0.149168648], [0.439259675, 0.0977289004], [-0.321263406, -0.315102878], [0.106214549, 0.437285341],
    [-0.388776288, -0.226611998], [0.21029454, 0.397839423], [0.0317164779, -0.448880903], [0.301509049, 0.334054327],
    [-0.0794287721, -0.442934612], [-0.166646668, 0.418005847], [-0.185714697, -0.409890292], [-0.058952105, 0.446121788],
    [0.285809676, -0.3475814], [-0.42632511, 0.144037846], [0.191755261, -0.407099398], [-0.37793096, 0.244270731],
    [0.449934992, -0.00764870141], [-0.3064156, 0.329559524], [0.434294515, -0.117848522], [-0.430974525, -0.12946412],
    [0.392084596, -0.220838559], [-0.449567536, -0.0197238592], [0.371237643, 0.254327766], [-0.180758112, -0.412100115],
    [0.422304974, 0.155430078], [-0.276376316, -0.355128332], [0.0469553076, 0.447543516], [-0.35508626, -0.276430367],
    [0.155365798, 0.422328627], [0.0912901474, -0.440642836], [0.254271257, 0.371276349], [-0.0196554303, -0.449570533],
    [-0.220898236, 0.392050978], [0.394719292, -0.216094148], [-0.117914625, 0.434276572], [0.32960616, -0.306365434],
    [-0.441724789, 0.0859023339], [0.244328253, -0.377893775], [-0.40712858, 0.191693295], [0.44693674, 0.0524170819],
    [-0.347624899, 0.285756767], [0.446130755, -0.0588842001], [-0.409862019, -0.185777085], [0.249775353, 0.37431574],
    [-0.442922517, -0.0794961903], [0.334008431, 0.301559891], [-0.124191527, -0.432523369], [0.397807409, 0.210355093],
    [-0.22655282, -0.388810776], [-0.0131426106, 0.449808039], [-0.315053975, -0.321311365], [0.0976620395, 0.439274545],
    [0.149233268, -0.424534371], [-0.351045709, 0.281543798], [0.0404689806, -0.448176596], [-0.271204302, 0.359093618],
    [0.42000972, -0.161529672], [-0.174771051, 0.414674668], [0.367515491, -0.259677422], [-0.449234744, 0.0262325056],
    [0.292537254, -0.341938525], [-0.429054406, 0.135691991], [0.435955672, 0.111546635], [-0.311156204, -0.325087399],
    [0.449998577, 0.00113186278], [-0.381428896, -0.238771852], [0.197630836, 0.404279672], [-0.428366381, -0.137848626],
    [0.290813436, 0.343405803], [-0.0654067356, -0.445221247], [0.366204538, 0.261522918], [-0.172682824, -0.415548604],
    [-0.0730057865, 0.444038461], [0.296639596, -0.338385801], [0.0382139227, 0.448374504], [0.204510906, -0.400843223],
    [-0.385453682, 0.232218558], [0.099870568, -0.4387777], [-0.31666634, 0.319722425], [0.437798282, -0.104080086],
    [-0.22850586, 0.387666186], [0.398860564, -0.208351267], [-0.44872084, -0.033905866], [0.363024067, 0.265920151],
    [-0.443316817, 0.0772670692], [0.417187925, 0.168683833], [-0.265027971, -0.36367592], [0.445828894, 0.0611277093],
    [-0.346183005, -0.287501873], [0.1419564, 0.427022693], [-0.406159119, -0.193738923], [0.242424172, 0.379118083],
    [-0.0054537028, -0.449966951], [0.328060823, 0.308019637], [-0.115728511, -0.434864245], [-0.131564993, 0.430337835],
    [0.339113157, -0.29580782], [-0.0219167396, 0.449465968], [0.25613574, -0.369992544], [-0.412977, 0.178745623],
    [0.15748835, -0.421541718], [-0.356472346, 0.274640613], [0.447767252, -0.0447715076], [-0.278159287, 0.353733531],
    [0.423081519, -0.153303713], [-0.440192254, -0.0934386391], [0.324322398, 0.311953494], [-0.449661068, 0.0174620667],
    [0.39096871, 0.222808141], [-0.214166027, -0.395768762], [0.433696185, 0.120031743], [-0.304753879, -0.331096774],
    [0.0837464559, 0.442138588], [-0.376697377, -0.246168816], [0.189704928, 0.408058869], [0.0545967395, -0.446675717],
    [-0.282404916, 0.350353341], [-0.05670715, -0.4464127], [-0.187774295, 0.40895087], [0.37552976, -0.247946365],
    [-0.0816559432, 0.442529442], [0.303185689, -0.332533364], [-0.433124063, 0.122080081], [0.212293204, -0.396776506],
    [-0.389911337, 0.224653397], [0.449738573, 0.0153367425], [-0.373701307, -0.250693704], [0.439745741, -0.0955179745],
    [-0.423801318, -0.151302488], [0.279827949, 0.352414981], [-0.447973845, -0.0426548287], [0.357766336, 0.272952833],
    [-0.159478826, -0.420792709], [0.413817152, 0.176791869], [-0.25788149, -0.368777897], [0.0240407019, 0.449357369],
    [0.217062701, -0.394187498], [0.13359733, 0.429711244], [0.11367202, -0.43540633], [-0.326601437, 0.309566635],
    [0.00332706709, -0.449987701], [-0.240629727, 0.380259562], [0.405238959, -0.195656296], [-0.139936676, 0.42768882],
    [0.344820385, -0.289134747], [-0.445535022, 0.0632340447], [0.411655034, 0.181769449], [-0.416386054, 0.170653608],
    [0.443677035, 0.0751710605], [-0.336934684, -0.298286806], [0.448555587, -0.0360261729], [-0.399840792, -0.206463897],
    [0.230335445, 0.386581922], [-0.438285282, -0.102009859], [0.318173834, 0.318222267], [-0.101943146, -0.438300804],
    [-0.145084222, 0.42597015], [-0.206403035, -0.399872213], [-0.0360944472, 0.448550099], [0.267687919, -0.361722515],
    [0.0751035275, 0.443688472], [0.170716985, -0.416360074], [-0.364964473, 0.263250705], [0.0633018588, -0.445525392],
    [-0.289187229, 0.344776372], [0.427710115, -0.139871576], [-0.437023221, -0.107287951], [0.380296184, -0.240571844],
    [-0.449988202, 0.00325857441], [0.383740305, 0.2350391], [-0.435423627, 0.113605745], [0.429690904, 0.133662735],
    [-0.294150012, -0.340552155], [0.449353704, 0.0241090983], [-0.36873864, -0.257937619], [0.17672888, 0.413844056],
    [0.0686700779, -0.444729604], [0.272898374, 0.357807878], [-0.0425866421, -0.447980332], [-0.200590371, 0.402819442],
    [-0.15123798, -0.423824343], [-0.0955849071, 0.439731197], [0.313531917, -0.322796743], [0.0152682876, 0.449740903],
    [0.224712743, -0.389877138], [-0.396808814, 0.212232809], [0.449030284, 0.0295263351], [-0.332579508, 0.30313507],
    [0.442541866, -0.0815885848], [-0.418813822, -0.164605537], [0.408979447, -0.187712046], [-0.446404064, -0.0567750978],
    [0.348971522, 0.284110676], [-0.446684022, 0.0545287503], [0.408029989, 0.189767036], [-0.246111476, -0.376734842],
    [0.009843518, 0.449892326], [-0.331050383, -0.304804271], [0.119965729, 0.43371445], [0.127360167, -0.431600959],
    [0.222748629, 0.391002619], [0.0175305095, -0.449658405], [-0.25251374, 0.372473907], [-0.0933716363, -0.440206471],
    [-0.153368108, 0.42305818], [0.353775866, -0.278105442], [-0.44730913, 0.0491379902], [0.274694869, -0.356430539],
    [-0.421565684, 0.157424185], [0.441082932, 0.0891394833], [-0.370031526, 0.256079421], [0.449469299, -0.0218483261],
    [-0.393123916, -0.218983074], [0.430357856, -0.13149949], [-0.434846625, -0.1157947], [0.307969699, 0.328107703],
];

#[rustfmt::skip]
pub(crate) static CELL_3D: [[f32; 3]; 256] = [
    [0.0397358949, 0.0, 0.448242188], [0.102076516, -0.41568773, -0.138867188], [0.111637796, -0.399690938, 0.174023438],
    [-0.155502842, -0.0876291873, -0.413085938], [-0.375207031, -0.227333639, -0.100195313], [-0.332507987, -0.216099845, 0.212695313],
    [-0.182021, 0.170828761, -0.374414063], [-0.334513001, 0.294645413, -0.0615234375], [-0.287737407, 0.237742974, 0.251367188],
    [0.130259824, 0.26983247, -0.335742188], [0.182505926, 0.410693795, -0.0228515625], [0.129725328, 0.318667039, 0.290039062],
    [0.334421218, -0.0491088439, -0.297070312], [0.446790804, -0.0512610504, 0.0158203125], [0.306276445, -0.0253743774, 0.328710938],
    [0.0580176061, -0.363818918, -0.258398438], [0.0842338146, -0.438674442, 0.0544921875], [0.0570355475, -0.253528727, 0.367382812],
    [-0.351524546, -0.175073503, -0.219726562], [-0.387688204, -0.208610436, 0.0931640625], [-0.167814379, -0.097251863, 0.406054688],
    [-0.285607652, 0.296896395, -0.181054688], [-0.307923831, 0.300503244, 0.131835938], [-0.0506496992, 0.0463992735, 0.444726563],
    [0.204969648, 0.374452371, -0.142382813], [0.188327921, 0.371429239, 0.170507812], [0.165706141, -0.0385306741, -0.416601563],
    [0.429425673, -0.0856599819, -0.103710938], [0.392994584, -0.065567638, 0.209179688], [0.0184196327, -0.243577233, -0.377929688],
    [0.0475760057, -0.44272615, -0.0650390625], [0.0518993912, -0.371989323, 0.247851563], [-0.274615773, -0.109500292, -0.339257813],
    [-0.411817346, -0.179474913, -0.0263671875], [-0.313562488, -0.148603115, 0.286523438], [-0.211447668, 0.259688232, -0.300585938],
    [-0.29489535, 0.339684158, 0.0123046875], [-0.211223162, 0.228326049, 0.325195312], [0.201603389, 0.305380251, -0.261914062],
    [0.234426449, 0.380717257, 0.0509765625], [0.131636249, 0.229722807, 0.363867188], [0.375553067, -0.107809182, -0.223242187],
    [0.427490553, -0.108235784, 0.0896484375], [0.196460713, -0.0431913366, 0.402539062], [0.0100094395, -0.410284792, -0.184570312],
    [0.024125804, -0.4306412, 0.128320313], [0.00773750195, -0.0881648439, 0.441210938], [-0.402951941, -0.137271188, -0.145898438],
    [-0.391095032, -0.147167543, 0.166992188], [-0.0911420503, 0.133021335, -0.420117187], [-0.25828173, 0.352552141, -0.107226562],
    [-0.246616803, 0.315249815, 0.205664062], [0.147536455, 0.187703138, -0.381445313], [0.26366331, 0.358164646, -0.0685546875],
    [0.214308557, 0.311242337, 0.244335938], [0.272641069, -0.103311269, -0.342773438], [0.424686623, -0.145767931, -0.0298828125],
    [0.334336904, -0.103079641, 0.283007813], [-0.0193162288, -0.33113309, -0.304101563], [-0.012008898, -0.449753865, 0.0087890625],
    [0.001535086, -0.314674152, 0.321679688], [-0.35247173, -0.0883785055, -0.265429688], [-0.430401653, -0.122482149, 0.0474609375],
    [-0.256779868, -0.0819197816, 0.360351562], [-0.203036815, 0.331446747, -0.226757813], [-0.242490395, 0.369160598, 0.0861328125],
    [-0.119649449, 0.170189029, 0.399023438], [0.268711557, 0.308087291, -0.188085937], [0.273756751, 0.334635669, 0.124804687],
    [0.0635893231, 0.0829410116, 0.437695312], [0.38873121, -0.170480158, -0.149414062], [0.389079512, -0.156181135, 0.163476563],
    [-0.0213182584, -0.150268999, -0.423632813], [-0.047600865, -0.433555447, -0.110742188], [-0.0312394913, -0.40082428, 0.202148438],
    [-0.229945025, -0.0378201267, -0.384960937], [-0.435808206, -0.0858899173, -0.0720703125], [-0.370458424, -0.0852416176, 0.240820312],
    [-0.129367583, 0.256608483, -0.346289063], [-0.21456739, 0.394138782, -0.0333984375], [-0.178323562, 0.304277545, 0.279492187],
    [0.235583617, 0.22884935, -0.307617188], [0.312697537, 0.323562114, 0.0052734375], [0.213815385, 0.235700255, 0.318164063],
    [0.31731885, -0.171689156, -0.268945313], [0.400421191, -0.200578362, 0.0439453125], [0.248887315, -0.114992252, 0.356835938],
    [-0.0737805462, -0.379513603, -0.230273438], [-0.0706667383, -0.436669912, 0.0826171875], [-0.0275845046, -0.212867718, 0.395507812],
    [-0.404623878, -0.0454792119, -0.191601563], [-0.428891982, -0.0619728234, 0.121289063], [-0.116462922, -0.020600651, 0.434179688],
    [-0.17097404, 0.387143886, -0.152929687], [-0.18198206, 0.379203149, 0.159960938], [0.109349587, 0.0899270828, -0.427148438],
    [0.327279338, 0.28693795, -0.114257812], [0.29506565, 0.275646999, 0.198632813], [0.190154237, -0.12420679, -0.388476563],
    [0.378869832, -0.230747517, -0.0755859375], [0.332662468, -0.188473255, 0.237304688], [-0.0767813563, -0.272472575, -0.349804687],
    [-0.107955289, -0.435296459, -0.0369140625], [-0.0746252797, -0.347516913, 0.275976563], [-0.324970532, -0.00951453293, -0.311132813],
    [-0.449163915, -0.0273621519, 0.0017578125], [-0.320335676, -0.0296886385, 0.314648437], [-0.117140735, 0.338442145, -0.272460938],
    [-0.15988749, 0.418690137, 0.0404296875], [-0.107589036, 0.257078502, 0.353320313], [0.309060644, 0.22874482, -0.233789063],
    [0.347577596, 0.274650246, 0.0791015625], [0.168989374, 0.142424423, 0.391992188], [0.327725735, -0.238799341, -0.195117188],
    [0.358914119, -0.244560979, 0.117773438], [0.110104296, -0.0700393406, 0.430664062], [-0.135029148, -0.399739907, -0.156445313],
    [-0.122342961, -0.403803249, 0.156445313], [-0.130307225, 0.00696364274, -0.430664062], [-0.43421153, 0.00947443787, -0.117773438],
    [-0.405479508, -0.00395622407, 0.195117188], [-0.0547952311, 0.214101863, -0.391992188], [-0.123328351, 0.425479801, -0.0791015625],
    [-0.118649546, 0.365738923, 0.233789063], [0.236927812, 0.146730941, -0.353320313], [0.373388761, 0.247883588, -0.0404296875],
    [0.291973466, 0.207404274, 0.272460938], [0.243475966, -0.210275568, -0.314648437], [0.34968236, -0.283229866, -0.0017578125],
    [0.25896927, -0.196548443, 0.311132813], [-0.141165328, -0.326204364, -0.275976563], [-0.165036657, -0.417013494, 0.0369140625],
    [-0.0958105025, -0.266377605, 0.349804687], [-0.380258643, 0.0398729238, -0.237304688], [-0.442428229, 0.0323114267, 0.0755859375],
    [-0.226931476, 0.00938432899, 0.388476563], [-0.0800091931, 0.395782181, -0.198632813], [-0.0996683468, 0.423687825, 0.114257812],
    [-0.0367541503, 0.136723607, 0.427148438], [0.368430252, 0.202907979, -0.159960938], [0.364084187, 0.215766576, 0.152929687],
    [0.0828216997, -0.0844308298, -0.434179688], [0.313074374, -0.299622095, -0.121289063], [0.30290491, -0.272098249, 0.191601563],
    [-0.10122257, -0.189281699, -0.395507812], [-0.196184183, -0.396467107, -0.0826171875], [-0.160442606, -0.351756043, 0.230273438],
    [-0.269381429, 0.0510074437, -0.356835938], [-0.442441157, 0.0693875494, -0.0439453125], [-0.358018917, 0.0446192082, 0.268945313],
    [-0.037087341, 0.316063535, -0.318164063], [-0.0665218035, 0.445024764, -0.0052734375], [-0.0587850499, 0.323134622, 0.307617188],
    [0.321921573, 0.144050749, -0.279492187], [0.403629258, 0.196132522, 0.0333984375], [0.254380536, 0.13369528, 0.346289063],
    [0.251995729, -0.284611542, -0.240820312], [0.304807985, -0.323106735, 0.0720703125], [0.165181706, -0.164377859, 0.384960937],
    [-0.207448521, -0.344385134, -0.202148438], [-0.213148281, -0.380531179, 0.110742188], [-0.0699535404, -0.134691285, 0.423632813],
    [-0.407415717, 0.0989335472, -0.163476563], [-0.415439812, 0.0870930546, 0.149414062], [-0.00356819914, 0.104451335, -0.437695312],
    [-0.0283938482, 0.431413467, -0.124804687], [-0.039711837, 0.406874244, 0.188085937], [0.196262046, 0.0690036639, -0.399023438],
    [0.411844039, 0.159579529, -0.0861328125], [0.357820983, 0.151805924, 0.226757813], [0.161401446, -0.215861818, -0.360351562],
    [0.27914783, -0.349748407, -0.0474609375], [0.235533661, -0.27671461, 0.265429688], [-0.184071794, -0.255224907, -0.321679688],
    [-0.251528087, -0.373036692, -0.0087890625], [-0.176663148, -0.280735413, 0.304101563], [-0.332008694, 0.110348562, -0.283007813],
    [-0.430346778, 0.128096325, 0.0298828125], [-0.281928344, 0.0743154066, 0.342773438], [0.00640041562, 0.377834599, -0.244335938],
    [-0.00650859681, 0.444699778, 0.0685546875], [-0.0110280056, 0.238490789, 0.381445313], [0.383880971, 0.113303547, -0.205664062],
    [0.415047443, 0.136887123, 0.107226562], [0.151465519, 0.0553149646, 0.420117187], [0.232813782, -0.347003389, -0.166992188],
    [0.248213929, -0.345837377, 0.145898438], [-0.0575204849, -0.0672629351, -0.441210938], [-0.269834264, -0.336486801, -0.128320313],
    [-0.24651794, -0.328119955, 0.184570312], [-0.184995261, 0.0789876996, -0.402539062], [-0.410823144, 0.16027321, -0.0896484375],
    [-0.368302798, 0.130445293, 0.223242187], [0.0263263328, 0.26345321, -0.363867188], [0.0303904378, 0.44606929, -0.0509765625],
    [0.0133354824, 0.365681814, 0.261914062], [0.304571901, 0.0631186644, -0.325195312], [0.437371511, 0.105141601, -0.0123046875],
    [0.322975727, 0.0885142567, 0.300585938], [0.168875134, -0.303126226, -0.286523438], [0.230909661, -0.385338163, 0.0263671875],
    [0.1598943, -0.248672374, 0.339257813], [-0.258363371, -0.272613227, -0.247851563], [-0.295941872, -0.332698556, 0.0650390625],
    [-0.156507752, -0.187548593, 0.377929688], [-0.35795675, 0.174959491, -0.209179688], [-0.399281857, 0.17977219, 0.103710938],
    [-0.157255979, 0.0649129821, 0.416601563], [0.0625142992, 0.41172691, -0.170507812], [0.0507258217, 0.423856138, 0.142382813],
    [0.0681818404, 0.00833794008, -0.444726563], [0.425211837, 0.0656824114, -0.131835938], [0.40495291, 0.0757122226, 0.181054688],
    [0.080083672, -0.176652756, -0.406054688], [0.194343253, -0.395033109, -0.0931640625], [0.184393856, -0.346726324, 0.219726562],
    [-0.193719386, -0.173212784, -0.367382812], [-0.323424068, -0.308103024, -0.0544921875], [-0.258596134, -0.262408626, 0.258398438],
    [-0.264024035, 0.157290904, -0.328710938], [-0.393430112, 0.217858819, -0.0158203125], [-0.300720852, 0.154324976, 0.297070312],
    [0.0795573155, 0.33473568, -0.290039062], [0.0900651793, 0.440302248, 0.0228515625], [0.0507499131, 0.295299221, 0.335742188],
    [0.372318826, 0.0263292333, -0.251367188], [0.443449718, 0.0454666299, 0.0615234375], [0.247398619, 0.0332871342, 0.374414063],
    [0.145080196, -0.369069697, -0.212695313], [0.173306704, -0.403020701, 0.100195313], [0.0756538486, -0.16166788, 0.413085938],
    [-0.323079466, -0.260452494, -0.174023438], [-0.324591403, -0.279027463, 0.138867188], [-0.0323414847, 0.0230861368, -0.448242188],
    [-0.35699661, 0.238187688, -0.135351562], [-0.351039092, 0.218521022, 0.177539063], [0.0579333168, 0.177188854, -0.409570313],
    [0.123325479, 0.42183393, -0.0966796875], [0.098730928, 0.382106051, 0.216210938], [0.254803661, -0.00307303328, -0.370898438],
    [0.446160599, 0.00870711992, -0.0580078125], [0.370372955, 0.0189374182, 0.254882812], [0.087340032, -0.290684072, -0.332226562],
    [0.14289792, -0.426270227, -0.0193359375], [0.118560089, -0.319795483, 0.293554688], [-0.282295179, -0.191402919, -0.293554688],
    [-0.363964714, -0.263923869, 0.0193359375], [-0.239971406, -0.185847345, 0.332226562], [-0.290448207, 0.230596164, -0.254882812],
    [-0.358076305, 0.266301434, 0.0580078125], [-0.20917292, 0.14553707, 0.370898438], [0.141641399, 0.368361975, -0.216210938],
    [0.144705101, 0.41498611, 0.0966796875], [0.0557922915, 0.177874617, 0.409570313], [0.412673017, -0.0260933398, -0.177539063],
    [0.428948033, -0.0135476775, 0.135351562],
];

pub(crate) static FOAM_AXES_2D: [[f32; 2]; 3] = [
    [0.866025404, 0.5],
    [-0.866025404, 0.5],
    [0.0, -1.0],
];

pub(crate) static FOAM_AXES_3D: [[f32; 3]; 4] = [
    [0.816496581, 0.471404521, 0.333333333],
    [-0.816496581, 0.471404521, 0.333333333],
    [0.0, -0.942809042, 0.333333333],
    [0.0, 0.0, -1.0],
];

pub(crate) static FOAM_AXES_4D: [[f32; 4]; 5] = [
    [0.790569415, 0.456435465, 0.322748612, 0.25],
    [-0.790569415, 0.456435465, 0.322748612, 0.25],
    [0.0, -0.912870929, 0.322748612, 0.25],
    [0.0, 0.0, -0.968245837, 0.25],
    [0.0, 0.0, 0.0, -1.0],
];

pub(crate) static FOAM_AXES_5D: [[f32; 5]; 6] = [
    [0.774596669, 0.447213595, 0.316227766, 0.244948974, 0.2],
    [-0.774596669, 0.447213595, 0.316227766, 0.244948974, 0.2],
    [0.0, -0.894427191, 0.316227766, 0.244948974, 0.2],
    [0.0, 0.0, -0.948683298, 0.244948974, 0.2],
    [0.0, 0.0, 0.0, -0.979795897, 0.2],
    [0.0, 0.0, 0.0, 0.0, -1.0],
];

pub(crate) static FOAM_AXES_6D: [[f32; 6]; 7] = [
    [0.763762616, 0.440958552, 0.311804782, 0.241522946, 0.197202659, 0.166666667],
    [-0.763762616, 0.440958552, 0.311804782, 0.241522946, 0.197202659, 0.166666667],
    [0.0, -0.881917104, 0.311804782, 0.241522946, 0.197202659, 0.166666667],
    [0.0, 0.0, -0.935414347, 0.241522946, 0.197202659, 0.166666667],
    [0.0, 0.0, 0.0, -0.966091783, 0.197202659, 0.166666667],
    [0.0, 0.0, 0.0, 0.0, -0.986013297, 0.166666667],
    [0.0, 0.0, 0.0, 0.0, 0.0, -1.0],
];
