use std::f64::consts::PI;

use super::{material_params::MaterialParams, type_lib::{NumericData, HBAR, K_B, N_A}};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GruneisenPoint {
    pub theta: NumericData,
    pub gamma: NumericData,
    pub q: NumericData,
    pub z: NumericData,
}

impl MaterialParams {
    pub fn reduced_constant(&self) -> NumericData {
        HBAR * HBAR / (K_B * self.ro * self.ro * self.m)
    }

    pub fn characteristic_distance(&self, v_ratio: NumericData) -> NumericData {
        ((6.0 * self.kp * v_ratio) / (PI * N_A)).cbrt()
    }

    pub fn stiffness_coefficient(&self, c: NumericData) -> Option<NumericData> {
        if self.b == self.a {
            return None;
        }
        if c <= 0.0 {
            return None;
        }
        let k_r = self.reduced_constant();
        Some(k_r * (5.0 * self.kn * self.a * self.b * (self.b + 1.0)) / (144.0 * (self.b - self.a)) * (self.ro / c).powf(self.b + 2.0))
    }

    pub fn debye_temperature(&self, v_ratio: NumericData) -> Option<NumericData> {
        let c = self.characteristic_distance(v_ratio);
        let aw = self.stiffness_coefficient(c)?;

        let xi = 9.0 / self.kn;
        if aw <= 0.0 || xi <= 0.0 {
            return None;
        }
        let term1 = -1.0 + (1.0 + (8.0 * self.d_kb) / (K_B * aw * xi * xi)).sqrt();
        // term1 cannot go negative while aw and xi stay positive; the guard
        // only matters if a future material set breaks that assumption.
        if term1 < 0.0 {
            return None;
        }
        Some(aw * xi * term1)
    }

    pub fn gruneisen_point(&self, v_ratio: NumericData) -> Option<GruneisenPoint> {
        let theta = self.debye_temperature(v_ratio)?;

        let x_w = self.d_kb / theta;
        let gamma = -(self.b + 2.0) / (6.0 * (1.0 + x_w));
        let q = gamma * (x_w * (1.0 + 2.0 * x_w)) / (1.0 + x_w);
        let z = gamma * (1.0 + 4.0 * x_w) - 2.0 * q;

        Some(GruneisenPoint { theta, gamma, q, z })
    }
}
