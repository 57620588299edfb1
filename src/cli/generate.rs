//! Generate CLI command
//!
//! Fills a report from command-line flags, renders it and prints one part.
//! Optionally copies that part to the clipboard and saves the report.

use clap::Args;
use std::path::PathBuf;

use crate::clipboard::{copy_part, ClipboardSink, ReportPart};
use crate::clock::{Clock, ZonedClock};
use crate::config::{ReportPaths, Settings};
use crate::error::{ReportError, ReportResult};
use crate::export::save_report;
use crate::models::{ChargeCatalog, EvidenceKey, ReportCategory};
use crate::session::{FormEvent, ReportSession, SessionOutcome};

/// Arguments for `crime-report generate`
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Gang or family name
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Crime type shown in the header line
    #[arg(short, long, default_value = "")]
    pub crime: String,

    /// Date as DD.MM.YYYY (default: today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Time as HH:MM (default: now)
    #[arg(short, long)]
    pub time: Option<String>,

    /// Mark the report with a Notice of Violation
    #[arg(long)]
    pub nov: bool,

    /// Report type: gang or family (default from settings)
    #[arg(short = 'k', long, value_parser = parse_category)]
    pub category: Option<ReportCategory>,

    /// Charge to include; the full entry or its code (e.g. "PC 2.10.6")
    #[arg(long = "charge", value_name = "CHARGE")]
    pub charges: Vec<String>,

    /// Evidence value as key=value (see `crime-report fields`)
    #[arg(short, long = "field", value_name = "KEY=VALUE", value_parser = parse_field)]
    pub fields: Vec<(EvidenceKey, String)>,

    /// Which part to print: full, part1 or part2
    #[arg(short, long, default_value = "full", value_parser = parse_part)]
    pub part: ReportPart,

    /// Copy the printed part to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Save the report (to the configured export directory unless DIR is given)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,
}

fn parse_category(s: &str) -> Result<ReportCategory, String> {
    ReportCategory::parse(s).ok_or_else(|| format!("unknown category '{}' (gang or family)", s))
}

fn parse_part(s: &str) -> Result<ReportPart, String> {
    ReportPart::parse(s).ok_or_else(|| format!("unknown part '{}' (full, part1, part2)", s))
}

fn parse_field(s: &str) -> Result<(EvidenceKey, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = EvidenceKey::parse(key.trim())
        .ok_or_else(|| format!("unknown evidence key '{}'", key.trim()))?;
    Ok((key, value.to_string()))
}

/// Resolve a charge given as a full catalog entry or as its leading code
pub fn resolve_charge(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if let Some(charge) = ChargeCatalog::lookup(input) {
        return Some(charge);
    }

    let prefix = format!("{} ", input.to_lowercase());
    ChargeCatalog::iter().find(|c| c.to_lowercase().starts_with(&prefix))
}

/// Fill a session from the arguments, in the order the form would.
///
/// Nothing is generated yet.
pub fn build_session<C: Clock>(
    args: &GenerateArgs,
    clock: C,
    default_category: ReportCategory,
) -> ReportSession<C> {
    let category = args.category.unwrap_or(default_category);
    let mut session = ReportSession::with_default_category(clock, category);

    session.handle(FormEvent::SubjectNameChanged(args.name.clone()));
    session.handle(FormEvent::OffenseLabelChanged(args.crime.clone()));
    if let Some(date) = &args.date {
        session.handle(FormEvent::DateChanged(date.clone()));
    }
    if let Some(time) = &args.time {
        session.handle(FormEvent::TimeChanged(time.clone()));
    }
    session.handle(FormEvent::NoticeToggled(args.nov));

    let mut charges = Vec::with_capacity(args.charges.len());
    for input in &args.charges {
        match resolve_charge(input) {
            Some(charge) => charges.push(charge.to_string()),
            None => tracing::warn!(charge = %input, "ignoring unknown charge"),
        }
    }
    session.handle(FormEvent::ChargeSelectionChanged(charges));

    for (key, value) in &args.fields {
        if key.category() != category {
            tracing::warn!(key = %key, %category, "evidence key belongs to the other category");
        }
        session.handle(FormEvent::FieldChanged(*key, value.clone()));
    }

    session
}

/// Handle `crime-report generate`
pub fn handle_generate_command(
    args: GenerateArgs,
    paths: &ReportPaths,
    settings: &Settings,
    clipboard: &mut dyn ClipboardSink,
) -> ReportResult<()> {
    let clock = ZonedClock::new(settings.tz()?);
    let mut session = build_session(&args, clock, settings.default_category);

    let report = match session.handle(FormEvent::Generate) {
        SessionOutcome::Generated(report) => report,
        SessionOutcome::Rejected(message) => return Err(ReportError::Input(message)),
        SessionOutcome::Updated => return Err(ReportError::no_report()),
    };

    match args.part {
        ReportPart::Full => print!("{}", report.full_report),
        part => println!("{}", part.text(&report)),
    }

    if args.copy {
        copy_part(Some(&report), args.part, clipboard)?;
        eprintln!("Copied {} to clipboard.", args.part);
    }

    if let Some(dir) = args.save {
        let dir = dir.unwrap_or_else(|| settings.resolve_export_dir(paths));
        let saved = save_report(session.state(), &dir, settings.sidecar_format)?;
        eprintln!("Report saved to: {}", saved.text_path.display());
        if let Some(sidecar) = saved.sidecar_path {
            eprintln!("Snapshot saved to: {}", sidecar.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::tests::RecordingClipboard;
    use crate::clock::FixedClock;
    use crate::config::SidecarFormat;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: GenerateArgs,
    }

    fn parse(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["test"];
        full.extend_from_slice(argv);
        TestCli::try_parse_from(full).unwrap().args
    }

    fn clock() -> FixedClock {
        FixedClock::london(2024, 1, 1, 13, 45).unwrap()
    }

    #[test]
    fn test_parse_field() {
        let (key, value) = parse_field("gang_proof=https://x/y?a=b").unwrap();
        assert_eq!(key.to_string(), "gang_proof");
        assert_eq!(value, "https://x/y?a=b");

        assert!(parse_field("gang_proof").is_err());
        assert!(parse_field("gang_pda=x").is_err());
    }

    #[test]
    fn test_resolve_charge() {
        assert_eq!(resolve_charge("PC 2.10.6"), Some("PC 2.10.6 Robbery"));
        assert_eq!(
            resolve_charge("pc 3.10"),
            Some("PC 3.10 Battery of a public servant")
        );
        assert_eq!(
            resolve_charge("PC 3.11 Murder or Attempted murder of a public servant"),
            Some("PC 3.11 Murder or Attempted murder of a public servant")
        );
        assert_eq!(resolve_charge("PC 9.9"), None);
    }

    #[test]
    fn test_build_session_gang_example() {
        let args = parse(&[
            "--name",
            "Ballas",
            "--crime",
            "Robbery",
            "--nov",
            "--charge",
            "PC 2.10.6",
            "--field",
            "gang_proof=https://i.ibb.co/x.png",
        ]);
        let mut session = build_session(&args, clock(), ReportCategory::Gang);

        let SessionOutcome::Generated(report) = session.handle(FormEvent::Generate) else {
            panic!("expected a report");
        };
        assert_eq!(report.part1, "Ballas | Robbery | 01.01.2024 13:45 Nov\n\n");
        assert!(report.part2.contains("- PC 2.10.6 Robbery\n"));
    }

    #[test]
    fn test_build_session_family_keeps_fields() {
        let args = parse(&[
            "-n",
            "Families",
            "--category",
            "family",
            "--date",
            "02.02.2024",
            "-f",
            "family_pda=AB12 CDE",
        ]);
        let session = build_session(&args, clock(), ReportCategory::Gang);

        let state = session.state();
        assert_eq!(state.category, ReportCategory::Family);
        assert_eq!(state.occurred_date, "02.02.2024");
        assert_eq!(state.occurred_time, "13:45");
        assert_eq!(state.field(EvidenceKey::parse("family_pda").unwrap()), "AB12 CDE");
    }

    #[test]
    fn test_build_session_uses_default_category() {
        let args = parse(&["-n", "Lost MC"]);
        let session = build_session(&args, clock(), ReportCategory::Family);
        assert_eq!(session.state().category, ReportCategory::Family);
    }

    #[test]
    fn test_handle_generate_requires_name() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut clipboard = RecordingClipboard::default();

        let err = handle_generate_command(
            parse(&["--crime", "Robbery", "--copy"]),
            &paths,
            &Settings::default(),
            &mut clipboard,
        )
        .unwrap_err();

        assert!(err.is_input());
        assert_eq!(err.to_string(), "Please enter a Name");
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn test_handle_generate_copies_and_saves() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            sidecar_format: SidecarFormat::None,
            ..Settings::default()
        };
        let mut clipboard = RecordingClipboard::default();

        handle_generate_command(
            parse(&["-n", "Vagos", "--part", "part1", "--copy", "--save"]),
            &paths,
            &settings,
            &mut clipboard,
        )
        .unwrap();

        assert_eq!(clipboard.copied.len(), 1);
        assert!(clipboard.copied[0].starts_with("Vagos |  | "));

        let saved: Vec<_> = std::fs::read_dir(paths.export_dir())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].to_string_lossy().ends_with("_report.txt"));
    }
}
