use crate::domain::models::ProgressReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurationStatus {
    Incomplete,
    Complete,
    Exceeded,
}

impl CurationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurationStatus::Incomplete => "incomplete",
            CurationStatus::Complete => "complete",
            CurationStatus::Exceeded => "exceeded",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            CurationStatus::Incomplete => "Curating Your Selection",
            CurationStatus::Complete => "Curation Perfected",
            CurationStatus::Exceeded => "Volume Exceeded",
        }
    }
}

/// Selection total measured against a kit target.
#[derive(Debug, Clone, Copy)]
pub struct CurationProgress {
    pub total: u32,
    pub target: u32,
}

impl CurationProgress {
    pub fn new(total: u32, target: u32) -> Self {
        Self { total, target }
    }

    pub fn status(&self) -> CurationStatus {
        match self.total.cmp(&self.target) {
            std::cmp::Ordering::Less => CurationStatus::Incomplete,
            std::cmp::Ordering::Equal => CurationStatus::Complete,
            std::cmp::Ordering::Greater => CurationStatus::Exceeded,
        }
    }

    /// The continue affordance: enabled only on an exact match.
    pub fn can_continue(&self) -> bool {
        self.status() == CurationStatus::Complete
    }

    pub fn percentage(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (f64::from(self.total) / f64::from(self.target) * 100.0).min(100.0)
    }

    pub fn message(&self) -> String {
        match self.status() {
            CurationStatus::Exceeded => {
                let n = self.total - self.target;
                format!(
                    "Kindly remove {} design{} to match the {}-card standard.",
                    n,
                    plural(n),
                    self.target
                )
            }
            CurationStatus::Complete => format!(
                "Your curation of {} cards is balanced and ready.",
                self.target
            ),
            CurationStatus::Incomplete => {
                let n = self.target - self.total;
                format!(
                    "Please curate {} additional card{} to complete your set.",
                    n,
                    plural(n)
                )
            }
        }
    }

    pub fn report(&self) -> ProgressReport {
        let status = self.status();
        ProgressReport {
            total: self.total,
            target: self.target,
            status: status.as_str().to_string(),
            headline: status.headline().to_string(),
            message: self.message(),
            percentage: self.percentage(),
            can_continue: self.can_continue(),
        }
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::{CurationProgress, CurationStatus};

    #[test]
    fn one_short_of_standard_kit() {
        let p = CurationProgress::new(59, 60);
        assert!(!p.can_continue());
        assert_eq!(p.status(), CurationStatus::Incomplete);
        assert!(p.message().contains("1 additional card to"));
    }

    #[test]
    fn exact_standard_kit_is_ready() {
        let p = CurationProgress::new(60, 60);
        assert!(p.can_continue());
        assert_eq!(
            p.message(),
            "Your curation of 60 cards is balanced and ready."
        );
        assert_eq!(p.percentage(), 100.0);
    }

    #[test]
    fn one_over_standard_kit() {
        let p = CurationProgress::new(61, 60);
        assert!(!p.can_continue());
        assert_eq!(p.status(), CurationStatus::Exceeded);
        assert_eq!(
            p.message(),
            "Kindly remove 1 design to match the 60-card standard."
        );
        assert_eq!(p.percentage(), 100.0);
    }

    #[test]
    fn plural_wording_for_larger_gaps() {
        let p = CurationProgress::new(0, 125);
        assert_eq!(
            p.message(),
            "Please curate 125 additional cards to complete your set."
        );
        assert_eq!(p.percentage(), 0.0);
        assert_eq!(p.report().headline, "Curating Your Selection");
    }

    #[test]
    fn zero_target_has_no_progress() {
        let p = CurationProgress::new(3, 0);
        assert_eq!(p.percentage(), 0.0);
        assert!(!p.can_continue());
    }
}
