use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use linefit::{
    display, error::Error, plot::RegressionPlot, Dataset, FitQuality, LinearFit, X_COLUMN,
    Y_COLUMN,
};

fn main() {
    env_logger::init();

    let path = match prompt("Please enter the path to your CSV file: ") {
        Ok(path) => PathBuf::from(path),
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            std::process::exit(1);
        }
    };

    if let Err(message) = run(&path) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run(path: &Path) -> Result<(), String> {
    let data =
        Dataset::from_path(path, X_COLUMN, Y_COLUMN).map_err(|e| report(path, &e))?;
    let fit = LinearFit::fit(&data).map_err(|e| report(path, &e))?;
    let quality = FitQuality::evaluate(&data, &fit).map_err(|e| report(path, &e))?;

    let target = plot_target(path);
    RegressionPlot::new()
        .render_png(&data, &fit, &quality, &target)
        .map_err(|e| e.to_string())?;
    println!("Wrote plot to {}", target.display());

    println!("\n{}", display::results_panel(&fit, &quality));
    println!("\nData Table:\n");
    println!("{}", display::data_table(&data));
    Ok(())
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// `<input stem>_regression.png`, next to the input file
fn plot_target(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("regression");
    path.with_file_name(format!("{stem}_regression.png"))
}

/// One human-readable message per error category
fn report(path: &Path, err: &Error) -> String {
    match err {
        Error::Io(e) if e.kind() == io::ErrorKind::NotFound => {
            format!("Error: The file '{}' was not found.", path.display())
        }
        Error::EmptyData => format!("Error: The file '{}' is empty.", path.display()),
        Error::MissingColumn(column) => {
            format!("Error: The column '{column}' is missing in the CSV file.")
        }
        other => format!("An unexpected error occurred: {other}"),
    }
}
