use super::{lattice_evaluation::GruneisenPoint, material_params::{MaterialParams, VolumeGrid}, sweep_solver::SweepSolver, type_lib::NumericData};

pub struct Sweep {
    pub points: Vec<Option<GruneisenPoint>>,
}

impl Sweep {
    pub fn run(params: &MaterialParams, grid: &VolumeGrid, verbose: bool) -> Self {
        Sweep::run_with_observer(params, grid, |v_ratio, theta| {
            if verbose {
                match theta {
                    Some(theta) => println!("V_ratio: {:.2}, theta: {:.4e}", v_ratio, theta),
                    None => println!("V_ratio: {:.2}, theta: invalid", v_ratio),
                }
            }
        })
    }

    pub fn run_with_observer(params: &MaterialParams, grid: &VolumeGrid, mut observer: impl FnMut(NumericData, Option<NumericData>)) -> Self {
        let points = grid.v_grid.iter().map(|&v_ratio| {
            let point = params.gruneisen_point(v_ratio);
            observer(v_ratio, point.map(|p| p.theta));
            point
        }).collect();

        Sweep { points }
    }

    pub fn postprocess(&self, grid: &VolumeGrid) -> SweepSolver {
        SweepSolver {
            v_ratio: grid.v_grid.clone(),
            theta: self.points.iter().map(|point| point.map(|p| p.theta)).collect(),
            gamma: self.points.iter().map(|point| point.map(|p| p.gamma)).collect(),
            q: self.points.iter().map(|point| point.map(|p| p.q)).collect(),
            z: self.points.iter().map(|point| point.map(|p| p.z)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submodules::material_params::VolumeGrid;

    #[test]
    fn sweep_preserves_grid_order_and_length() {
        let params = MaterialParams::niobium();
        let grid = VolumeGrid::new_equally_spaced(0.01, 2.0, 100);
        let sweep = Sweep::run(&params, &grid, false);
        assert_eq!(sweep.points.len(), grid.len());

        let mut observed = Vec::new();
        Sweep::run_with_observer(&params, &grid, |v_ratio, _| observed.push(v_ratio));
        for (observed, expected) in observed.iter().zip(grid.v_grid.iter()) {
            assert_eq!(observed, expected);
        }
    }

    #[test]
    fn sweep_validity_is_all_or_nothing() {
        let params = MaterialParams::niobium();
        let grid = VolumeGrid::new_equally_spaced(0.01, 2.0, 100);
        let solver = Sweep::run(&params, &grid, false).postprocess(&grid);
        for i in 0..grid.len() {
            let validity = [solver.theta[i], solver.gamma[i], solver.q[i], solver.z[i]].map(|value| value.is_some());
            assert!(validity.iter().all(|&v| v == validity[0]));
        }
    }

    #[test]
    fn single_invalid_point_does_not_abort_sweep() {
        let params = MaterialParams::niobium();
        // grid straddling zero volume: the first sample is non-physical
        let grid = VolumeGrid::new_equally_spaced(0.0, 1.0, 5);
        let sweep = Sweep::run(&params, &grid, false);
        assert_eq!(sweep.points.len(), 5);
        assert!(sweep.points[0].is_none());
        assert!(sweep.points[4].is_some());
    }

    #[test]
    fn postprocess_keeps_index_correspondence() {
        let params = MaterialParams::niobium();
        let grid = VolumeGrid::new_equally_spaced(0.5, 1.5, 11);
        let sweep = Sweep::run(&params, &grid, false);
        let solver = sweep.postprocess(&grid);
        for i in 0..grid.len() {
            assert_eq!(solver.theta[i], sweep.points[i].map(|p| p.theta));
            assert_eq!(solver.z[i], sweep.points[i].map(|p| p.z));
        }
    }
}
