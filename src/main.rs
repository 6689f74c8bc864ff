/// Native demo: type into a headless post field and watch it resize.
///
/// Each line read from stdin is one edit (see `Edit::parse`). An optional
/// first argument names a config file; otherwise the user config directory
/// is tried.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::BufRead;

    use postinput::{Edit, ResizeConfig, Session};
    use postinput_ui::TextArea;

    let config = match std::env::args().nth(1) {
        Some(path) => match ResizeConfig::load_from_path(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ResizeConfig::load_from_default_path().unwrap_or_default(),
    };

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_level_filter().to_string()),
    )
    .init();

    let mut session = Session::new(TextArea::new(), &config);
    println!("[{}]", session.area().placeholder());
    println!("#{} {}", config.element_id, session.area().displayed_height());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };

        let outcome = session.apply(Edit::parse(&line));
        if let Some(result) = &outcome.submitted {
            match result {
                Ok(post) => println!("posted: {:?}", post),
                Err(e) => println!("rejected: {}", e),
            }
        }
        println!(
            "#{} {} ({} line{})",
            config.element_id,
            outcome.height,
            outcome.lines,
            if outcome.lines == 1 { "" } else { "s" }
        );
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
