use plotters::prelude::*;

use ndarray::Array1;
use serde::Serialize;

use super::{func_lib, type_lib::NumericData};

pub enum SweepSolverField {
    Theta,
    Gamma,
    Q,
    Z,
}

impl SweepSolverField {
    pub fn to_str(&self) -> &str {
        match self {
            SweepSolverField::Theta => "Debye temperature Θ(V/V₀)",
            SweepSolverField::Gamma => "First Grüneisen parameter γ(V/V₀)",
            SweepSolverField::Q => "Second Grüneisen parameter q(V/V₀)",
            SweepSolverField::Z => "Third Grüneisen parameter z(V/V₀)",
        }
    }

    pub fn axis_label(&self) -> &str {
        match self {
            SweepSolverField::Theta => "Θ (K)",
            SweepSolverField::Gamma => "γ",
            SweepSolverField::Q => "q",
            SweepSolverField::Z => "z",
        }
    }
}

#[derive(Serialize)]
pub struct SweepSolver {
    pub v_ratio: Array1<NumericData>,
    pub theta: Vec<Option<NumericData>>,
    pub gamma: Vec<Option<NumericData>>,
    pub q: Vec<Option<NumericData>>,
    pub z: Vec<Option<NumericData>>,
}

impl SweepSolver {
    pub fn series(&self, field: &SweepSolverField) -> &Vec<Option<NumericData>> {
        match field {
            SweepSolverField::Theta => &self.theta,
            SweepSolverField::Gamma => &self.gamma,
            SweepSolverField::Q => &self.q,
            SweepSolverField::Z => &self.z,
        }
    }

    // Invalid points break the line into separate segments instead of being
    // drawn as zeros.
    fn valid_segments(&self, field: &SweepSolverField) -> Vec<Vec<(NumericData, NumericData)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for (&v_ratio, value) in self.v_ratio.iter().zip(self.series(field).iter()) {
            match value {
                Some(value) => current.push((v_ratio, *value)),
                None => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }

    pub fn plot(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
        root.fill(&WHITE)?;

        let areas = root.split_evenly((2, 2));
        let fields = [SweepSolverField::Theta, SweepSolverField::Gamma, SweepSolverField::Q, SweepSolverField::Z];

        for (area, field) in areas.iter().zip(fields.iter()) {
            let x_spec = *self.v_ratio.first().unwrap()..*self.v_ratio.last().unwrap();
            let valid = self.series(field).iter().flatten();
            let y_min = valid.clone().fold(NumericData::INFINITY, |acc, y_val| acc.min(*y_val));
            let y_max = valid.fold(NumericData::NEG_INFINITY, |acc, y_val| acc.max(*y_val));
            let y_spec = if y_min.is_finite() && y_max > y_min {
                y_min..y_max
            } else {
                0.0..1.0
            };

            let mut chart = ChartBuilder::on(area)
                .caption(field.to_str(), ("sans-serif", 24).into_font())
                .margin(5)
                .x_label_area_size(30)
                .y_label_area_size(60)
                .build_cartesian_2d(x_spec, y_spec)?;

            chart.configure_mesh()
                .x_desc("V/V₀")
                .y_desc(field.axis_label())
                .draw()?;

            for segment in self.valid_segments(field) {
                chart.draw_series(LineSeries::new(segment.into_iter(), &RED))?;
            }
        }

        root.present()?;

        Ok(())
    }

    pub fn write_json(&self, filename: &str) -> std::io::Result<()> {
        func_lib::write_json(self, filename)
    }
}
