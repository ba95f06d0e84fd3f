pub mod func_lib;
pub mod lattice_evaluation;
pub mod material_params;
pub mod sweep;
pub mod sweep_solver;
pub mod type_lib;
