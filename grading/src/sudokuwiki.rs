//! Difficulty grading against the sudokuwiki.org server solver.
//!
//! Grading is best-effort: every failure mode collapses into a [`Grade`]
//! with score 0 and a fixed explanatory label, never into an error the
//! caller has to handle.

use crate::util::http_client;
use adkb_core::Puzzle;
use thiserror::Error;

/// Default grading endpoint.
pub const ENDPOINT: &str = "https://www.sudokuwiki.org/ServerSolver.asp?k=0";

/// Label returned when the puzzle is unloaded or already solved.
pub const NOT_GRADABLE: &str = "The provided Sudoku could not be graded";
/// Label returned when the HTTP request fails or returns non-2xx.
pub const REQUEST_FAILED: &str = "The request to Sudokuwiki failed";
/// Label returned when the response lacks the expected fields.
pub const BAD_OUTPUT: &str = "The output from Sudokuwiki was bad";

/// Grading outcome: a grade label and a numeric overall score.
///
/// Failure outcomes carry one of the fixed labels above and score 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub label: String,
    pub score: u32,
}

impl Grade {
    fn failure(label: &str) -> Self {
        Self {
            label: label.to_string(),
            score: 0,
        }
    }
}

#[derive(Error, Debug)]
enum GradingError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request returned status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("response missing expected fields")]
    BadOutput,
}

/// Grading collaborator with an injectable endpoint, so decode logic can be
/// exercised without any network dependency.
#[derive(Debug, Clone)]
pub struct SudokuwikiGrader {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for SudokuwikiGrader {
    fn default() -> Self {
        Self::new(ENDPOINT)
    }
}

impl SudokuwikiGrader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            endpoint: endpoint.into(),
        }
    }

    /// Grade an unsolved puzzle.
    ///
    /// An unloaded or already-solved puzzle is rejected locally before any
    /// network call.
    pub async fn grade(&self, puzzle: &Puzzle) -> Grade {
        if !puzzle.loaded || puzzle.solved {
            return Grade::failure(NOT_GRADABLE);
        }
        let Some(board) = puzzle.candidate_line() else {
            return Grade::failure(NOT_GRADABLE);
        };
        match self.request(&board).await {
            Ok(grade) => grade,
            Err(GradingError::Request(_) | GradingError::BadStatus(_)) => {
                Grade::failure(REQUEST_FAILED)
            }
            Err(GradingError::BadOutput) => Grade::failure(BAD_OUTPUT),
        }
    }

    async fn request(&self, board: &str) -> Result<Grade, GradingError> {
        let payload = [
            ("ff", "1"),
            ("k", "0"),
            ("gors", "1"),
            ("coordmode", "1"),
            ("mapno", "0"),
            ("fullreport", "0"),
            ("strat", "XWG"),
            ("stratmask", "XWGSCNSFHXCYXYC3DMJFH"),
            ("board", board),
            ("version", "2.08"),
        ];
        let res = self
            .client
            .post(&self.endpoint)
            .form(&payload)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(GradingError::BadStatus(res.status()));
        }
        let body = res.text().await?;
        parse_grade(&body).ok_or(GradingError::BadOutput)
    }
}

/// Scrape the grade label and overall score out of the solver's HTML
/// response.
///
/// The label is the text of the first `<b>` element; the score follows the
/// literal `"Overall Score: "`. Returns `None` when either is missing.
fn parse_grade(html: &str) -> Option<Grade> {
    let label = extract_between(html, "<b>", "</b>")?.trim();
    if label.is_empty() {
        return None;
    }

    const SCORE_DESC: &str = "Overall Score: ";
    let after = &html[html.find(SCORE_DESC)? + SCORE_DESC.len()..];
    let digits: String = after.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    Some(Grade {
        label: label.to_string(),
        score: digits.parse().ok()?,
    })
}

fn extract_between<'a>(s: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let from = s.find(start)? + start.len();
    let to = s[from..].find(end)? + from;
    Some(&s[from..to])
}
