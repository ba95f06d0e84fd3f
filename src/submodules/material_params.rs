use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::type_lib::{NumericData, ATOMIC_MASS};

#[derive(Debug, Clone)]
#[derive(Serialize, Deserialize)]
pub struct MaterialParams {
    pub kn: NumericData,
    pub kp: NumericData,
    pub m: NumericData,
    pub ro: NumericData,
    pub d_kb: NumericData,
    pub a: NumericData,
    pub b: NumericData,
}

impl MaterialParams {
    pub fn new(kn: NumericData, kp: NumericData, m: NumericData, ro: NumericData, d_kb: NumericData, a: NumericData, b: NumericData) -> Self {
        MaterialParams {
            kn,
            kp,
            m,
            ro,
            d_kb,
            a,
            b,
        }
    }

    pub fn niobium() -> Self {
        MaterialParams {
            kn: 8.0,
            kp: 0.6802,
            m: 92.9064 * ATOMIC_MASS, // kg
            ro: 2.8540e-10, // m
            d_kb: 21765.36, // K
            a: 2.53,
            b: 9.34,
        }
    }

    pub fn readfile(filename: &str) -> std::io::Result<Self> {
        let file = std::fs::read_to_string(filename)?;
        let params: MaterialParams = serde_json::from_str(&file)?;
        Ok(params)
    }
}

pub struct VolumeGrid {
    pub v_grid: Array1<NumericData>,
}

impl VolumeGrid {
    pub fn new_equally_spaced(v_min: NumericData, v_max: NumericData, n_samples: usize) -> Self {
        VolumeGrid {
            v_grid: Array1::linspace(v_min, v_max, n_samples),
        }
    }

    pub fn len(&self) -> usize {
        self.v_grid.len()
    }
}
