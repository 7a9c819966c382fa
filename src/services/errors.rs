use crate::domain::models::Step;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ShopError {
    #[error("cannot {action} from step {from}")]
    IllegalTransition { action: &'static str, from: Step },
    #[error("{action} is only available in the {expected} step (current: {current})")]
    IllegalStep {
        action: &'static str,
        expected: Step,
        current: Step,
    },
    #[error("selection holds {total} of {target} cards: {message}")]
    SelectionUnbalanced {
        total: u32,
        target: u32,
        message: String,
    },
    #[error("no kit selected")]
    NoKit,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl ShopError {
    pub fn code(&self) -> &'static str {
        match self {
            ShopError::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            ShopError::IllegalStep { .. } => "ILLEGAL_STEP",
            ShopError::SelectionUnbalanced { .. } => "SELECTION_UNBALANCED",
            ShopError::NoKit => "NO_KIT",
            ShopError::MissingField(_) => "MISSING_FIELD",
        }
    }
}

/// Maps any error chain to the machine code used in `--json` failures.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|e| e.downcast_ref::<ShopError>())
        .map(ShopError::code)
        .unwrap_or("ERROR")
}
