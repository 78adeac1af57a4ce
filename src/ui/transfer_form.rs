use crate::{common::event::LedgerEvent, domain::entity::Entity};

/// Preset amounts offered next to the amount field.
pub const QUICK_AMOUNTS: [i64; 6] = [10, 20, 50, 100, 200, 500];

/// The "send money" form: raw field text plus whether it is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferForm {
    pub from: String,
    pub to: String,
    pub amount: String,
    open: bool,
}

impl TransferForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Opens the form with `source` already chosen as the sender.
    pub fn open_with_source(&mut self, source: &Entity) {
        self.from = source.selection().to_string();
        self.open = true;
    }

    /// Fills the amount with a preset. Returns false for values not on the menu.
    pub fn quick_amount(&mut self, amount: i64) -> bool {
        if !QUICK_AMOUNTS.contains(&amount) {
            return false;
        }
        self.amount = amount.to_string();
        true
    }

    /// Whether the confirm control is enabled.
    pub fn can_submit(&self) -> bool {
        let from = self.from.trim();
        let to = self.to.trim();
        !from.is_empty() && !to.is_empty() && !self.amount.trim().is_empty() && from != to
    }

    pub fn to_event(&self) -> LedgerEvent {
        LedgerEvent::Transfer {
            from: self.from.clone(),
            to: self.to.clone(),
            amount: self.amount.clone(),
        }
    }

    /// Clears every field and closes the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::PlayerId;

    #[test]
    fn open_with_source_prefills_sender_only() {
        let mut form = TransferForm::default();
        form.to = "2".into();

        form.open_with_source(&Entity::Player(PlayerId::new("1")));
        assert!(form.is_open());
        assert_eq!(form.from, "1");
        assert_eq!(form.to, "2");

        form.open_with_source(&Entity::Bank);
        assert_eq!(form.from, "bank");
    }

    #[test]
    fn quick_amounts_only_accept_presets() {
        let mut form = TransferForm::default();
        for n in QUICK_AMOUNTS {
            assert!(form.quick_amount(n));
            assert_eq!(form.amount, n.to_string());
        }

        assert!(!form.quick_amount(30));
        assert_eq!(form.amount, "500");
    }

    #[test]
    fn submit_is_enabled_only_with_distinct_endpoints_and_an_amount() {
        let mut form = TransferForm::default();
        assert!(!form.can_submit());

        form.from = "1".into();
        form.to = "1".into();
        form.amount = "10".into();
        assert!(!form.can_submit());

        form.to = "bank".into();
        assert!(form.can_submit());

        form.amount = "  ".into();
        assert!(!form.can_submit());
    }

    #[test]
    fn reset_clears_and_closes() {
        let mut form = TransferForm::default();
        form.open_with_source(&Entity::Bank);
        form.to = "1".into();
        form.quick_amount(100);

        assert_eq!(
            form.to_event(),
            LedgerEvent::Transfer { from: "bank".into(), to: "1".into(), amount: "100".into() }
        );

        form.reset();
        assert_eq!(form, TransferForm::default());
        assert!(!form.is_open());
    }
}
