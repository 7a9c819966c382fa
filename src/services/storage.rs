use crate::domain::models::Session;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Root for the session, catalogue snapshot, config and audit log.
/// `CONNOISSEUR_HOME` wins over `$HOME/.config/connoisseur`.
pub fn data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var("CONNOISSEUR_HOME") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".config/connoisseur"))
}

pub fn audit(dir: &Path, action: &str, data: serde_json::Value) {
    let path = dir.join("audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

fn session_path(dir: &Path) -> PathBuf {
    dir.join("session.json")
}

pub fn load_session(dir: &Path) -> anyhow::Result<Session> {
    let p = session_path(dir);
    if !p.exists() {
        return Ok(Session::default());
    }
    let raw = std::fs::read_to_string(&p)?;
    serde_json::from_str(&raw).with_context(|| format!("invalid session file {}", p.display()))
}

pub fn save_session(dir: &Path, s: &Session) -> anyhow::Result<()> {
    let p = session_path(dir);
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(s)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{audit, load_session, save_session};
    use crate::cli::KitType;
    use crate::domain::models::{Session, Step};
    use tempfile::TempDir;

    #[test]
    fn missing_session_starts_at_kit_selection() {
        let dir = TempDir::new().expect("temp dir");
        let s = load_session(dir.path()).expect("load");
        assert_eq!(s.step, Step::KitSelection);
        assert!(s.kit.is_none());
        assert_eq!(s.ledger.total(), 0);
    }

    #[test]
    fn session_round_trips_through_disk() {
        let dir = TempDir::new().expect("temp dir");
        let mut s = Session {
            step: Step::Gallery,
            kit: Some(KitType::Jumbo),
            ..Session::default()
        };
        s.ledger.adjust("7", 3);
        save_session(dir.path(), &s).expect("save");

        let raw = std::fs::read_to_string(dir.path().join("session.json")).expect("read");
        assert!(raw.contains("\"gallery\""));
        assert!(raw.contains("\"jumbo\""));

        let back = load_session(dir.path()).expect("load");
        assert_eq!(back.step, Step::Gallery);
        assert_eq!(back.ledger.quantity("7"), 3);
    }

    #[test]
    fn audit_appends_lines() {
        let dir = TempDir::new().expect("temp dir");
        audit(dir.path(), "reset", serde_json::json!({}));
        audit(dir.path(), "kit", serde_json::json!({"kit": "standard"}));
        let raw = std::fs::read_to_string(dir.path().join("audit.jsonl")).expect("read");
        assert_eq!(raw.lines().count(), 2);
        assert!(raw.contains("\"action\":\"kit\""));
    }
}
