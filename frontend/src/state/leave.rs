use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{LeaveRequest, LeaveStatus};

use super::fresh_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveField {
    Reason,
    DepartureDate,
    ReturnDate,
}

impl LeaveField {
    pub fn name(&self) -> &'static str {
        match self {
            LeaveField::Reason => "reason",
            LeaveField::DepartureDate => "departure date",
            LeaveField::ReturnDate => "return date",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveForm {
    pub reason: String,
    pub departure_date: String,
    pub return_date: String,
}

impl LeaveForm {
    pub fn get(&self, field: LeaveField) -> &str {
        match field {
            LeaveField::Reason => &self.reason,
            LeaveField::DepartureDate => &self.departure_date,
            LeaveField::ReturnDate => &self.return_date,
        }
    }

    pub fn set(&mut self, field: LeaveField, value: String) {
        match field {
            LeaveField::Reason => self.reason = value,
            LeaveField::DepartureDate => self.departure_date = value,
            LeaveField::ReturnDate => self.return_date = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // Dates are taken as entered; return-before-departure is accepted.
    fn validate(&self) -> Result<(), ValidationError> {
        for field in [
            LeaveField::Reason,
            LeaveField::DepartureDate,
            LeaveField::ReturnDate,
        ] {
            if self.get(field).trim().is_empty() {
                return Err(ValidationError::MissingField(field.name()));
            }
        }
        Ok(())
    }
}

/// Newest-first history of leave applications. Display-only once filed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveHistory {
    requests: Vec<LeaveRequest>,
}

impl LeaveHistory {
    pub fn new(requests: Vec<LeaveRequest>) -> Self {
        Self { requests }
    }

    pub fn as_slice(&self) -> &[LeaveRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Files the form as a pending request stamped `today` and clears it.
    /// An incomplete form is left untouched.
    pub fn submit(
        &mut self,
        form: &mut LeaveForm,
        today: NaiveDate,
        stamp: u64,
    ) -> Result<&LeaveRequest, ValidationError> {
        form.validate()?;
        let id = fresh_id(stamp, self.requests.iter().map(|request| request.id));
        let request = LeaveRequest {
            id,
            reason: form.reason.trim().to_string(),
            departure_date: form.departure_date.trim().to_string(),
            return_date: form.return_date.trim().to_string(),
            status: LeaveStatus::Pending,
            applied_date: today,
        };
        form.reset();
        self.requests.insert(0, request);
        Ok(&self.requests[0])
    }

    pub fn pending_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|request| request.status == LeaveStatus::Pending)
            .count()
    }
}
