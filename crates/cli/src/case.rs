//! TOML case files: gas, flux scheme, and the faces to evaluate.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use fvflux_riemann::{Face, FluxConfig, PrimitiveState};
use fvflux_thermo::GasConfig;
use nalgebra::Vector3;
use serde::Deserialize;

/// Smallest normal length accepted before normalization.
const MIN_NORMAL_LENGTH: f64 = 1e-12;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Case {
    pub gas: GasConfig,
    pub flux: FluxConfig,
    /// Also report the Rusanov flux for each face.
    pub rusanov: bool,
    pub faces: Vec<FaceSpec>,
}

/// One face as written in a case file.
///
/// States are `[ρ, u, v, w, P, k, ω]`; the normal need not be unit length.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaceSpec {
    pub left: [f64; 7],
    pub right: [f64; 7],
    pub normal: [f64; 3],
}

impl Case {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read case file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid case file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Validates every face and returns them with unit normals.
    pub fn faces(&self) -> Result<Vec<Face>> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.to_face().with_context(|| format!("face {i}")))
            .collect()
    }
}

impl FaceSpec {
    fn to_face(&self) -> Result<Face> {
        let normal = Vector3::from(self.normal)
            .try_normalize(MIN_NORMAL_LENGTH)
            .ok_or_else(|| anyhow!("normal {:?} has zero length", self.normal))?;

        Ok(Face::new(
            state(&self.left).context("left state")?,
            state(&self.right).context("right state")?,
            normal,
        ))
    }
}

fn state(values: &[f64; 7]) -> Result<PrimitiveState> {
    let [rho, u, v, w, p, k, omega] = *values;
    Ok(PrimitiveState::try_new(
        rho,
        Vector3::new(u, v, w),
        p,
        k,
        omega,
    )?)
}
