//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Orbit;

/// Clean the public directory
pub fn run(orbit: &Orbit) -> Result<()> {
    if orbit.public_dir.exists() {
        fs::remove_dir_all(&orbit.public_dir)?;
        tracing::info!("Deleted: {:?}", orbit.public_dir);
    }

    Ok(())
}
