use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate perfect-hash lookup tables for hand classification",
    long_about = None
)]
pub struct Args {
    #[arg(
        long,
        default_value = "tables",
        help = "Directory to write <table>.bin files into"
    )]
    pub out: PathBuf,
    #[arg(
        long,
        value_enum,
        help = "Generate a single table instead of all of them"
    )]
    pub only: Option<Only>,
    #[arg(long, help = "Log how many slots hold each classification")]
    pub summary: bool,
    #[arg(long, help = "Grow tables without writing them")]
    pub dry_run: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Only {
    /// flush classification by packed suit counts
    Suits,
    /// pair pattern by packed rank counts, with count_hash
    Pairs,
    /// straight draws by rank mask
    Straights,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["generate"]).unwrap();
        assert_eq!(args.out, PathBuf::from("tables"));
        assert_eq!(args.only, None);
        assert!(!args.summary);
        assert!(!args.dry_run);
    }

    #[test]
    fn single_table() {
        let argv = ["generate", "--only", "pairs", "--dry-run", "--summary"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.only, Some(Only::Pairs));
        assert!(args.dry_run);
        assert!(args.summary);
    }

    #[test]
    fn unknown_table() {
        assert!(Args::try_parse_from(["generate", "--only", "flushes"]).is_err());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let out = std::env::temp_dir().join(format!("rbp-tables-dry-{}", std::process::id()));
        let out = out.to_string_lossy().into_owned();
        let argv = [
            "generate",
            "--only",
            "straights",
            "--dry-run",
            "--out",
            out.as_str(),
        ];
        let args = Args::try_parse_from(argv).unwrap();
        super::super::run(args).unwrap();
        assert!(!std::path::Path::new(&out).exists());
    }
}
