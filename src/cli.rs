use crate::error::AppError;
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Open the viewer, optionally preloading documents
    Gui {
        baseline: Option<PathBuf>,
        working: Option<PathBuf>,
    },
    /// Print the diff report as JSON and exit
    Json { baseline: PathBuf, working: PathBuf },
}

/// Parse arguments, without the program name.
pub fn parse_args<I>(args: I) -> Result<Command, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut json = false;
    let mut paths = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => {
                return Err(AppError::Usage(format!("unknown option {flag}")));
            }
            _ => paths.push(PathBuf::from(arg)),
        }
    }

    if paths.len() > 2 {
        return Err(AppError::Usage("too many arguments".to_string()));
    }

    let mut paths = paths.into_iter();
    let baseline = paths.next();
    let working = paths.next();

    if json {
        match (baseline, working) {
            (Some(baseline), Some(working)) => Ok(Command::Json { baseline, working }),
            _ => Err(AppError::Usage("--json needs two files".to_string())),
        }
    } else {
        Ok(Command::Gui { baseline, working })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_opens_empty_viewer() {
        assert_eq!(
            parse_args(args(&[])).unwrap(),
            Command::Gui {
                baseline: None,
                working: None
            }
        );
    }

    #[test]
    fn two_paths_preload_both_sides() {
        assert_eq!(
            parse_args(args(&["old.json", "new.json"])).unwrap(),
            Command::Gui {
                baseline: Some(PathBuf::from("old.json")),
                working: Some(PathBuf::from("new.json"))
            }
        );
    }

    #[test]
    fn json_mode_requires_two_paths() {
        assert_eq!(
            parse_args(args(&["--json", "a.txt", "b.txt"])).unwrap(),
            Command::Json {
                baseline: PathBuf::from("a.txt"),
                working: PathBuf::from("b.txt")
            }
        );
        assert!(matches!(
            parse_args(args(&["--json", "a.txt"])),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(matches!(parse_args(args(&["--wat"])), Err(AppError::Usage(_))));
        assert!(matches!(
            parse_args(args(&["a", "b", "c"])),
            Err(AppError::Usage(_))
        ));
    }
}
