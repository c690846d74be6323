use adkb_core::{archive, Difficulty};
use adkb_grading::SudokuwikiGrader;
use clap::Parser;
use color_eyre::eyre::Result;
use std::path::PathBuf;

/// Decode Andoku .adkb Sudoku archives.
#[derive(Parser, Debug)]
#[command(name = "adkb", version, about)]
struct Args {
    /// Path to the .adkb archive file.
    file: PathBuf,

    /// Decode puzzles as fully solved grids instead of applying the
    /// removal mask.
    #[arg(long)]
    solved: bool,

    /// Grade each puzzle against sudokuwiki.org (unsolved puzzles only).
    #[arg(long)]
    grade: bool,

    /// Only print the first COUNT puzzles.
    #[arg(long, value_name = "COUNT")]
    limit: Option<usize>,

    /// Emit each puzzle as a JSON object instead of text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let puzzles = archive::load_file(&args.file, args.solved)?;
    let shown = args.limit.unwrap_or(puzzles.len());
    let grader = SudokuwikiGrader::default();

    println!(
        "{}: {} puzzle(s), showing {}",
        args.file.display(),
        puzzles.len(),
        shown.min(puzzles.len())
    );
    // Standard Andoku archives are named by difficulty level.
    if let Some(difficulty) = difficulty_from_path(&args.file) {
        println!("difficulty: {} (level {})", difficulty.name(), difficulty.level());
    }

    for (idx, puzzle) in puzzles.iter().take(shown).enumerate() {
        if args.json {
            println!("{}", serde_json::to_string(puzzle)?);
        } else if let Some(flat) = puzzle.flattened() {
            println!("#{:04} {flat}", idx + 1);
        }
        if args.grade {
            let grade = grader.grade(puzzle).await;
            println!("      grade: {} (score {})", grade.label, grade.score);
        }
    }

    Ok(())
}

fn difficulty_from_path(path: &std::path::Path) -> Option<Difficulty> {
    let name = path.file_name()?.to_str()?;
    Difficulty::ALL
        .into_iter()
        .find(|d| d.archive_filename() == name)
}
