pub type NumericData = f64;

pub const K_B: NumericData = 1.380658e-23; // J/K
pub const HBAR: NumericData = 1.05457266e-34; // J*s
pub const N_A: NumericData = 6.0221367e23; // mol^-1
pub const ATOMIC_MASS: NumericData = 1.66055e-27; // kg
