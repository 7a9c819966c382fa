use crate::cli::KitType;
use crate::domain::constants::kit_config;
use crate::domain::models::{KitConfig, OrderDetails, Session, Step};
use crate::services::errors::ShopError;
use crate::services::progress::CurationProgress;

/// User actions that move the wizard between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    ChooseKit,
    Continue,
    Back,
    Submit,
    OpenAdmin,
    CloseAdmin,
    Reset,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::ChooseKit => "choose a kit",
            Trigger::Continue => "continue",
            Trigger::Back => "go back",
            Trigger::Submit => "submit",
            Trigger::OpenAdmin => "open admin",
            Trigger::CloseAdmin => "close admin",
            Trigger::Reset => "reset",
        }
    }
}

/// Transition table. `None` means the trigger is not valid from `from`.
pub fn next_step(from: Step, trigger: Trigger) -> Option<Step> {
    use Step::*;
    match (from, trigger) {
        (KitSelection, Trigger::ChooseKit) => Some(Gallery),
        (Gallery, Trigger::Continue) => Some(Checkout),
        (Checkout, Trigger::Back) => Some(Gallery),
        (Checkout, Trigger::Submit) => Some(Summary),
        (Admin, Trigger::OpenAdmin) => None,
        (_, Trigger::OpenAdmin) => Some(Admin),
        (Admin, Trigger::CloseAdmin) => Some(KitSelection),
        (_, Trigger::Reset) => Some(KitSelection),
        _ => None,
    }
}

pub fn allowed_triggers(from: Step) -> Vec<Trigger> {
    [
        Trigger::ChooseKit,
        Trigger::Continue,
        Trigger::Back,
        Trigger::Submit,
        Trigger::OpenAdmin,
        Trigger::CloseAdmin,
        Trigger::Reset,
    ]
    .into_iter()
    .filter(|t| next_step(from, *t).is_some())
    .collect()
}

/// Step-based ordering flow over a persisted [`Session`].
#[derive(Debug, Default)]
pub struct Wizard {
    session: Session,
}

impl Wizard {
    pub fn resume(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn step(&self) -> Step {
        self.session.step
    }

    pub fn kit(&self) -> Option<KitConfig> {
        self.session.kit.map(kit_config)
    }

    /// Progress against the active kit, if one is chosen.
    pub fn progress(&self) -> Option<CurationProgress> {
        self.kit()
            .map(|k| CurationProgress::new(self.session.ledger.total(), k.size))
    }

    fn fire(&mut self, trigger: Trigger) -> Result<Step, ShopError> {
        let from = self.session.step;
        let to = next_step(from, trigger).ok_or(ShopError::IllegalTransition {
            action: trigger.as_str(),
            from,
        })?;
        tracing::debug!(%from, %to, "wizard transition");
        self.session.step = to;
        Ok(to)
    }

    pub fn require_step(&self, action: &'static str, expected: Step) -> Result<(), ShopError> {
        if self.session.step != expected {
            return Err(ShopError::IllegalStep {
                action,
                expected,
                current: self.session.step,
            });
        }
        Ok(())
    }

    pub fn choose_kit(&mut self, kit: KitType) -> Result<KitConfig, ShopError> {
        self.fire(Trigger::ChooseKit)?;
        self.session.kit = Some(kit);
        Ok(kit_config(kit))
    }

    pub fn adjust(&mut self, id: &str, delta: i64) -> Result<u32, ShopError> {
        self.require_step("adjusting quantities", Step::Gallery)?;
        Ok(self.session.ledger.adjust(id, delta))
    }

    pub fn set_exact(&mut self, id: &str, value: i64) -> Result<u32, ShopError> {
        self.require_step("setting quantities", Step::Gallery)?;
        Ok(self.session.ledger.set_exact(id, value))
    }

    /// Gallery → checkout. The balance check belongs to the caller's
    /// continue affordance; the controller only checks the table.
    pub fn proceed_to_checkout(&mut self) -> Result<Step, ShopError> {
        self.fire(Trigger::Continue)
    }

    pub fn back_to_gallery(&mut self) -> Result<Step, ShopError> {
        self.fire(Trigger::Back)
    }

    pub fn submit(&mut self, details: OrderDetails) -> Result<KitConfig, ShopError> {
        let from = self.session.step;
        if next_step(from, Trigger::Submit).is_none() {
            return Err(ShopError::IllegalTransition {
                action: Trigger::Submit.as_str(),
                from,
            });
        }
        let kit = self.kit().ok_or(ShopError::NoKit)?;
        validate_details(&details)?;
        self.fire(Trigger::Submit)?;
        self.session.order = Some(details);
        Ok(kit)
    }

    pub fn open_admin(&mut self) -> Result<Step, ShopError> {
        self.fire(Trigger::OpenAdmin)
    }

    pub fn close_admin(&mut self) -> Result<Step, ShopError> {
        self.fire(Trigger::CloseAdmin)
    }

    /// Back to kit selection with no kit, an empty ledger and no order.
    pub fn reset(&mut self) -> Step {
        let to = next_step(self.session.step, Trigger::Reset).unwrap_or(Step::KitSelection);
        self.session.step = to;
        self.session.kit = None;
        self.session.ledger.clear();
        self.session.order = None;
        to
    }
}

fn validate_details(details: &OrderDetails) -> Result<(), ShopError> {
    for (field, value) in [
        ("name", &details.name),
        ("email", &details.email),
        ("address", &details.address),
    ] {
        if value.trim().is_empty() {
            return Err(ShopError::MissingField(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{allowed_triggers, next_step, Trigger, Wizard};
    use crate::cli::KitType;
    use crate::domain::models::{OrderDetails, Step};
    use crate::services::errors::ShopError;

    fn details() -> OrderDetails {
        OrderDetails {
            name: "Alexandra Sterling".to_string(),
            email: "alexandra@sterling.com".to_string(),
            address: "123 Royal Terrace".to_string(),
        }
    }

    #[test]
    fn happy_path_walks_every_step() {
        let mut w = Wizard::default();
        assert_eq!(w.step(), Step::KitSelection);
        w.choose_kit(KitType::Standard).expect("choose kit");
        assert_eq!(w.step(), Step::Gallery);
        w.set_exact("1", 60).expect("set quantity");
        assert!(w.progress().expect("kit chosen").can_continue());
        w.proceed_to_checkout().expect("continue");
        w.submit(details()).expect("submit");
        assert_eq!(w.step(), Step::Summary);
        assert_eq!(w.session().order, Some(details()));
    }

    #[test]
    fn continue_is_advisory_at_controller_level() {
        let mut w = Wizard::default();
        w.choose_kit(KitType::Jumbo).expect("choose kit");
        w.adjust("2", 3).expect("adjust");
        assert!(!w.progress().expect("kit chosen").can_continue());
        assert_eq!(w.proceed_to_checkout(), Ok(Step::Checkout));
    }

    #[test]
    fn transitions_outside_table_are_rejected() {
        let mut w = Wizard::default();
        assert_eq!(
            w.proceed_to_checkout(),
            Err(ShopError::IllegalTransition {
                action: "continue",
                from: Step::KitSelection
            })
        );
        assert!(w.back_to_gallery().is_err());
        assert!(w.close_admin().is_err());
        assert_eq!(w.step(), Step::KitSelection);
    }

    #[test]
    fn ledger_edits_need_gallery() {
        let mut w = Wizard::default();
        let err = w.adjust("1", 1).expect_err("not in gallery");
        assert_eq!(err.code(), "ILLEGAL_STEP");
        assert_eq!(w.session().ledger.total(), 0);
    }

    #[test]
    fn reset_clears_kit_and_ledger_from_any_step() {
        let mut w = Wizard::default();
        w.choose_kit(KitType::Standard).expect("choose kit");
        w.adjust("3", 4).expect("adjust");
        w.proceed_to_checkout().expect("continue");
        assert_eq!(w.reset(), Step::KitSelection);
        assert_eq!(w.session().ledger.total(), 0);
        assert!(w.session().kit.is_none());
        assert!(w.progress().is_none());
    }

    #[test]
    fn admin_is_a_side_entry_that_keeps_the_selection() {
        let mut w = Wizard::default();
        w.choose_kit(KitType::Standard).expect("choose kit");
        w.adjust("1", 2).expect("adjust");
        w.open_admin().expect("open admin");
        assert!(w.open_admin().is_err());
        assert_eq!(w.close_admin(), Ok(Step::KitSelection));
        assert_eq!(w.session().ledger.quantity("1"), 2);
    }

    #[test]
    fn submit_rejects_blank_fields_without_moving() {
        let mut w = Wizard::default();
        w.choose_kit(KitType::Standard).expect("choose kit");
        w.proceed_to_checkout().expect("continue");
        let mut d = details();
        d.email = "   ".to_string();
        assert_eq!(w.submit(d), Err(ShopError::MissingField("email")));
        assert_eq!(w.step(), Step::Checkout);
    }

    #[test]
    fn table_lists_reset_everywhere() {
        for step in [
            Step::KitSelection,
            Step::Gallery,
            Step::Checkout,
            Step::Summary,
            Step::Admin,
        ] {
            assert_eq!(next_step(step, Trigger::Reset), Some(Step::KitSelection));
        }
        assert_eq!(
            allowed_triggers(Step::Summary),
            vec![Trigger::OpenAdmin, Trigger::Reset]
        );
    }
}
