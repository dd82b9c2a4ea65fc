/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/elastoplast/test";

/// Holds the index pairs (i, j) of the 3D Voigt components: xx, yy, zz, xy, yz, xz
pub const VOIGT_PAIRS_3D: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (0, 1), (1, 2), (0, 2)];

/// Holds the index pairs (i, j) of the plane-strain Voigt components: xx, yy, zz, xy
pub const VOIGT_PAIRS_2D: [(usize, usize); 4] = [(0, 0), (1, 1), (2, 2), (0, 1)];

/// Holds 1/3
pub const ONE_BY_3: f64 = 1.0 / 3.0;

/// Holds √3
pub const SQRT_3: f64 = 1.732050807568877293527446341505872366942805253810380628055806979_f64;

/// Lode angle (radians) beyond which the J3 term of the yield gradient is dropped (29°)
pub const LODE_CORNER_ANGLE: f64 = 29.0 * std::f64::consts::PI / 180.0;
