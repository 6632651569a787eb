use cast_detector::image::io::{load_rgb_image, save_rgb_f32, write_json_file};
use cast_detector::{AxisEstimator, CastCorrector, CorrectorParams};
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    input: PathBuf,
    output: PathBuf,
    report: Option<PathBuf>,
    estimator: AxisEstimator,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} <input-image> [output-image] [--pca] [--report <json>]")
}

fn parse_cli() -> Result<CliConfig, String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "cast_demo".to_string());

    let mut positional: Vec<PathBuf> = Vec::new();
    let mut report = None;
    let mut estimator = AxisEstimator::Hough;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pca" => estimator = AxisEstimator::Pca,
            "--report" => {
                let path = args.next().ok_or_else(|| usage(&program))?;
                report = Some(PathBuf::from(path));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let mut positional = positional.into_iter();
    let input = positional.next().ok_or_else(|| usage(&program))?;
    let output = positional.next().unwrap_or_else(|| {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "corrected".to_string());
        input.with_file_name(format!("{stem}_corrected.png"))
    });
    Ok(CliConfig {
        input,
        output,
        report,
        estimator,
    })
}

fn run() -> Result<(), String> {
    let config = parse_cli()?;

    let buffer = load_rgb_image(&config.input)?;
    let corrector = CastCorrector::new(CorrectorParams {
        estimator: config.estimator,
        ..Default::default()
    });
    let correction = corrector
        .process(&buffer.as_view())
        .map_err(|e| e.to_string())?;

    save_rgb_f32(&correction.image, &config.output)?;
    println!(
        "corrected {} -> {} ({:.1} ms)",
        config.input.display(),
        config.output.display(),
        correction.report.latency_ms
    );

    if let Some(path) = &config.report {
        write_json_file(path, &correction.report)?;
        println!("report written to {}", path.display());
    }
    Ok(())
}
