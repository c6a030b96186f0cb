//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Orbit;

/// Generate the static site from the content API
pub async fn run(orbit: &Orbit) -> Result<()> {
    let start = std::time::Instant::now();

    let client = orbit.client()?;
    let generator = Generator::new(orbit)?;
    generator.generate(&client).await?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(())
}
