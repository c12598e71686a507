// File: crates/demo/src/main.rs
// Summary: Demo renders a built-in sample series (or a CSV of x,y rows) to PNG and SVG.

use anyhow::{Context, Result};
use plot_core::{theme, Chart, DataSeries, SurfaceConfig, SvgSurface};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    let (xs, ys, stem) = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            println!("Using input file: {}", path.display());
            let (xs, ys) = load_xy_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("chart")
                .to_string();
            (xs, ys, stem)
        }
        None => {
            let (xs, ys) = sample_series();
            (xs, ys, "sample".to_string())
        }
    };
    println!("Plotting {} samples", xs.len());

    let series = DataSeries::new(xs, ys).context("invalid input data")?;
    let chart = Chart::new(series).with_titles("x", "y");

    let mut opts = SurfaceConfig::default();
    if let Ok(name) = std::env::var("PLOT_THEME") {
        let picked = theme::find(&name);
        opts.theme = picked;
        opts.line_color = picked.line_stroke;
        println!("Theme: {}", picked.name);
    }

    let out_png = out_name(&stem, "png");
    plot_render_skia::render_png_file(&chart, &opts, &out_png)?;
    println!("Wrote {}", out_png.display());

    let mut svg = SvgSurface::new(opts.width, opts.height);
    let bytes = chart.render(&opts, &mut svg)?;
    let out_svg = out_name(&stem, "svg");
    std::fs::write(&out_svg, bytes)
        .with_context(|| format!("writing {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}

/// The sample series the library has always shipped as its smoke data.
fn sample_series() -> (Vec<f64>, Vec<f64>) {
    let xs = (0..11).map(|i| 250.0 + 100.0 * i as f64).collect();
    let ys = vec![10.1, 20.2, 10.1, 35.1, 40.2, 45.3, 30.35, 20.4, 10.35, 5.3, 1.0];
    (xs, ys)
}

/// Produce output file name like target/out/chart_<stem>.<ext>
fn out_name(stem: &str, ext: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("chart_{stem}.{ext}"))
}

/// Load a two-column CSV into x/y vectors. Uses `x`/`y` headers when
/// present, otherwise the first two columns.
fn load_xy_csv(path: &Path) -> Result<(Vec<f64>, Vec<f64>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    let i_x = headers.iter().position(|h| h == "x").unwrap_or(0);
    let i_y = headers.iter().position(|h| h == "y").unwrap_or(1);

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let field = |i: usize| -> Result<f64> {
            rec.get(i)
                .with_context(|| format!("row {row} has no column {i}"))?
                .trim()
                .parse::<f64>()
                .with_context(|| format!("row {row} column {i} is not a number"))
        };
        xs.push(field(i_x)?);
        ys.push(field(i_y)?);
    }
    Ok((xs, ys))
}
