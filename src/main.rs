use std::fs;
use std::io::{self, Read};
use std::process;

use tracing_subscriber::EnvFilter;

use lexis::{report, Config, Engine};

fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    };

    init_logging(&config);

    let engine = match Engine::new(&config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!(
                "Error loading dictionary '{}': {}",
                config.dictionary_path.display(),
                e
            );
            process::exit(1);
        }
    };

    if config.save_dictionary {
        if let Err(e) = engine.save_dictionary(&config.dictionary_path) {
            eprintln!("Error saving dictionary: {}", e);
            process::exit(1);
        }
        println!("Dictionary saved to {}.", config.dictionary_path.display());
        return;
    }

    // Text to analyze
    let text = if let Some(ref text) = config.text {
        text.clone()
    } else if let Some(ref input_file) = config.input_file {
        match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading '{}': {}", input_file.display(), e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("Error reading stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let sentences = if config.parallel {
        engine.analyze_parallel(&text)
    } else {
        engine.analyze(&text)
    };

    let rendered = match report::render(&sentences, config.format) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Error rendering report: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref output_file) = config.output_file {
        if let Err(e) = fs::write(output_file, rendered + "\n") {
            eprintln!("Error writing '{}': {}", output_file.display(), e);
            process::exit(1);
        }
    } else {
        println!("{}", rendered);
    }
}

/// Logs go to stderr. `RUST_LOG` overrides the `-v` level.
fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lexis={}", config.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
