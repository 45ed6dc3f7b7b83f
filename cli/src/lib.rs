use std::path::PathBuf;

use clap::Parser;
use tagpick_markers::layout::Layout;
use tagpick_markers::types::Counts;

pub mod select;

/// Pick unused AprilTag marker PDFs and pack them into a zip archive.
#[derive(Debug, Parser)]
#[command(author, version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Command>,

    /// Number of 270mm markers to select
    #[arg(short = 'l', long, default_value_t = 0)]
    pub large: u32,

    /// Number of 144mm markers to select
    #[arg(short = 'm', long, default_value_t = 0)]
    pub medium: u32,

    /// Number of 90mm markers to select
    #[arg(short = 's', long, default_value_t = 0)]
    pub small: u32,

    /// Directory containing `apriltags/tagStandard41h12/pdf` (env: TAGPICK_ROOT)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Directory of usage records (env: TAGPICK_USED_DIR)
    #[arg(long, global = true)]
    pub used_dir: Option<PathBuf>,

    /// Directory receiving the archive (env: TAGPICK_OUT_DIR)
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Show pool sizes and how many markers are still unused.
    Stats,
}

impl Cli {
    pub fn counts(&self) -> Counts {
        Counts {
            large: self.large,
            medium: self.medium,
            small: self.small,
        }
    }

    /// Env-derived layout with command-line overrides applied.
    pub fn layout(&self, cwd: &std::path::Path) -> Layout {
        let mut layout = Layout::from_env(cwd);
        if let Some(root) = &self.root {
            layout.root = root.clone();
        }
        if let Some(used_dir) = &self.used_dir {
            layout.used_dir = used_dir.clone();
        }
        if let Some(out_dir) = &self.out_dir {
            layout.out_dir = out_dir.clone();
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_default_to_zero() {
        let cli = Cli::try_parse_from(["tagpick", "-s", "3"]).unwrap();
        assert_eq!(
            cli.counts(),
            Counts {
                large: 0,
                medium: 0,
                small: 3,
            }
        );
    }

    #[test]
    fn negative_and_non_integer_counts_are_rejected() {
        assert!(Cli::try_parse_from(["tagpick", "--large", "-1"]).is_err());
        assert!(Cli::try_parse_from(["tagpick", "-m", "two"]).is_err());
    }

    #[test]
    fn counts_do_not_combine_with_stats() {
        assert!(Cli::try_parse_from(["tagpick", "-l", "3", "stats"]).is_err());
        assert!(Cli::try_parse_from(["tagpick", "stats", "-l", "3"]).is_err());

        let cli = Cli::try_parse_from(["tagpick", "stats", "--used-dir", "/records"]).unwrap();
        assert!(matches!(cli.cmd, Some(Command::Stats)));
        assert_eq!(cli.used_dir.as_deref(), Some(std::path::Path::new("/records")));
    }

    #[test]
    fn flags_override_layout() {
        let cli = Cli::try_parse_from(["tagpick", "--used-dir", "/records"]).unwrap();
        let layout = cli.layout(std::path::Path::new("/work"));
        assert_eq!(layout.used_dir, std::path::Path::new("/records"));
    }
}
