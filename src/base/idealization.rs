use russell_tensor::Mandel;

/// Defines the geometry idealization (plane-strain or none)
///
/// # Default values
///
/// * In 2D, the only available choice is **plane-strain**
#[derive(Clone, Copy, Debug)]
pub struct Idealization {
    /// Indicates 2D (plane-strain) instead of 3D
    pub two_dim: bool,
}

impl Idealization {
    /// Allocates a new instance
    ///
    /// * `2D`: plane-strain
    /// * `3D`: no idealization
    pub fn new(ndim: usize) -> Self {
        Idealization { two_dim: ndim == 2 }
    }

    /// Returns the number of stress (and strain) components in Voigt notation
    ///
    /// # Results
    ///
    /// * `2D`: 4 (xx, yy, zz, xy)
    /// * `3D`: 6 (xx, yy, zz, xy, yz, xz)
    pub fn voigt_size(&self) -> usize {
        if self.two_dim {
            4
        } else {
            6
        }
    }

    /// Returns the symmetric Mandel representation associated with the idealization
    ///
    /// # Results
    ///
    /// * `2D`: [Mandel::Symmetric2D]
    /// * `3D`: [Mandel::Symmetric]
    pub fn mandel(&self) -> Mandel {
        if self.two_dim {
            Mandel::Symmetric2D
        } else {
            Mandel::Symmetric
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
