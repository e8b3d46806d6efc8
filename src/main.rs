use sidediff::app::SideDiffApp;
use sidediff::cli::{Command, parse_args};
use sidediff::config::Config;
use sidediff::constant;
use sidediff::error::AppError;
use sidediff::loader::read_document;
use sidediff::report::DiffReport;
use sidediff::ui;
use std::path::{Path, PathBuf};

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("sidediff: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    match parse_args(std::env::args().skip(1))? {
        Command::Json { baseline, working } => print_report(&baseline, &working),
        Command::Gui { baseline, working } => run_gui(baseline, working),
    }
}

fn print_report(baseline: &Path, working: &Path) -> Result<(), AppError> {
    let baseline = read_document(baseline)?;
    let working = read_document(working)?;
    let options = Config::default().settings.diff_options();

    let report = DiffReport::compute(&baseline, &working, &options);
    println!("{}", report.to_json()?);
    Ok(())
}

fn run_gui(baseline: Option<PathBuf>, working: Option<PathBuf>) -> Result<(), AppError> {
    let options = ui::viewport::build_viewport();

    eframe::run_native(
        constant::DEFAULT_WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(SideDiffApp::new(cc, baseline, working)))),
    )
    .map_err(|e| AppError::Gui(e.to_string()))
}
