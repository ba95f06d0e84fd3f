use crate::submodules::{material_params::{MaterialParams, VolumeGrid}, sweep::Sweep, sweep_solver::SweepSolver};

pub fn run() -> SweepSolver {
    let params = MaterialParams::niobium();

    let v_min = 0.01;
    let v_max = 2.0;
    let n_samples = 100;

    let grid = VolumeGrid::new_equally_spaced(v_min, v_max, n_samples);

    let sweep = Sweep::run(&params, &grid, true);
    sweep.postprocess(&grid)
}
