//! One function per subcommand.

use std::io;
use std::path::Path;

use anyhow::Context;
use pointcodec::{Planar, PointCollection};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::session::Session;
use crate::settings::Settings;
use crate::storage;

pub fn generate(settings: &Settings, output: &Path, count: Option<usize>, seed: Option<u64>) -> anyhow::Result<()> {
    let count = count.unwrap_or(settings.count);
    let range = settings.generation_range();
    let points = match seed {
        Some(seed) => PointCollection::generate_with(count, &range, &mut StdRng::seed_from_u64(seed)),
        None => PointCollection::generate_with(count, &range, &mut rand::thread_rng()),
    };

    storage::save(output, &points, &settings.codec_config())
        .with_context(|| format!("failed to write {}", output.display()))?;
    print!("{}", points);
    Ok(())
}

pub fn sort(settings: &Settings, input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let config = settings.codec_config();
    let mut points = storage::load(input, &config).with_context(|| format!("failed to read {}", input.display()))?;
    points.sort_in_place();

    let output = output.unwrap_or(input);
    storage::save(output, &points, &config).with_context(|| format!("failed to write {}", output.display()))?;
    print!("{}", points);
    Ok(())
}

pub fn convert(settings: &Settings, input: &Path, output: &Path) -> anyhow::Result<()> {
    let config = settings.codec_config();
    let points = storage::load(input, &config).with_context(|| format!("failed to read {}", input.display()))?;

    let source = storage::format_for_path(input)?;
    let target = storage::format_for_path(output)?;
    let flat = points.iter().filter(|p| p.is_3d() && p.z_or_zero() == 0).count();
    if flat > 0 && !target.is_lossless() {
        tracing::warn!(%target, flat, "3D points with z = 0 will read back as 2D points");
    }

    storage::save(output, &points, &config).with_context(|| format!("failed to write {}", output.display()))?;
    println!("converted {} points from {} to {}", points.len(), source, target);
    Ok(())
}

pub fn show(settings: &Settings, input: &Path) -> anyhow::Result<()> {
    let points = storage::load(input, &settings.codec_config())
        .with_context(|| format!("failed to read {}", input.display()))?;
    print!("{}", points);
    Ok(())
}

pub fn shell(settings: &Settings) -> anyhow::Result<()> {
    let mut session = Session::new(settings);
    session.run(io::stdin().lock(), io::stdout())?;
    Ok(())
}
