//! New-item form: raw draft input, validation, and submission bookkeeping.

use shared::domain::NewItem;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
    Price,
    Quantity,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Category,
        DraftField::Price,
        DraftField::Quantity,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            DraftField::Name => "Cookie Name",
            DraftField::Category => "Flavor (Chocolate, Vanilla...)",
            DraftField::Price => "Price",
            DraftField::Quantity => "Quantity",
        }
    }
}

/// Unvalidated text of a new item, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl Draft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Price => &self.price,
            DraftField::Quantity => &self.quantity,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Category => &mut self.category,
            DraftField::Price => &mut self.price,
            DraftField::Quantity => &mut self.quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(DraftField),
    #[error("Price must be a number greater than 0")]
    InvalidPrice,
    #[error("Quantity must be a whole number greater than 0")]
    InvalidQuantity,
}

/// Checks run in order: presence of every field, then price, then quantity.
pub fn validate(draft: &Draft) -> Result<NewItem, ValidationError> {
    if let Some(field) = DraftField::ALL
        .into_iter()
        .find(|field| draft.field(*field).trim().is_empty())
    {
        return Err(ValidationError::MissingField(field));
    }

    let unit_price = draft
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
        .ok_or(ValidationError::InvalidPrice)?;

    let quantity_available = draft
        .quantity
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|quantity| *quantity > 0)
        .and_then(|quantity| u32::try_from(quantity).ok())
        .ok_or(ValidationError::InvalidQuantity)?;

    Ok(NewItem {
        name: draft.name.trim().to_string(),
        category: draft.category.trim().to_string(),
        unit_price,
        quantity_available,
    })
}

#[derive(Debug, Default)]
pub struct EntryForm {
    pub draft: Draft,
    validation_error: Option<ValidationError>,
    pending: Option<NewItem>,
}

impl EntryForm {
    /// Validates the draft and, when valid, marks the form as submitting and
    /// returns the payload to create. Returns `None` on a validation failure
    /// (kept for display) or while a previous submission is outstanding.
    pub fn begin_submit(&mut self) -> Option<NewItem> {
        if self.pending.is_some() {
            tracing::debug!("ignoring submit while a creation is in flight");
            return None;
        }

        self.validation_error = None;
        match validate(&self.draft) {
            Ok(payload) => {
                self.pending = Some(payload.clone());
                Some(payload)
            }
            Err(err) => {
                tracing::debug!(error = %err, "new item draft rejected");
                self.validation_error = Some(err);
                None
            }
        }
    }

    /// Ends the outstanding submission. The draft is only cleared on success.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.pending = None;
        if succeeded {
            self.draft = Draft::default();
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn validation_message(&self) -> Option<String> {
        self.validation_error.map(|err| err.to_string())
    }
}

#[cfg(test)]
#[path = "tests/entry_form_tests.rs"]
mod tests;
