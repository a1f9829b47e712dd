use page_binarize::config;
use page_binarize::image::io::{load_color_image, save_float_image, write_json_file};
use page_binarize::image::FloatImage;
use page_binarize::Binarizer;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: page-binarize <config.json>".to_string())?;
    let config = config::load_config(Path::new(&config_path))?;

    let rgba = load_color_image(&config.input_path)?;
    let page = FloatImage::from_bytes(&rgba.as_view()).map_err(|e| e.to_string())?;

    let binarizer = Binarizer::new(config.params.clone());
    let output = binarizer.process(&page);

    println!("Binarization summary");
    println!("  input: {} ({}x{})", config.input_path.display(), page.w, page.h);
    println!("  window: {}", config.params.window_size);
    println!("  factor: {:.2}", config.params.sauvola_factor);
    println!("  strategy: {:?}", config.params.strategy);
    println!("  stats_ms: {:.3}", output.report.stats_ms);
    println!("  total_ms: {:.3}", output.report.total_ms);

    if let Some(path) = &config.output.png_out {
        save_float_image(&output.image, path)?;
        println!("Binary image written to {}", path.display());
    }
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &output.report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}
