use super::error::DomainError;

/// Back-office customer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub country: String,
}

/// A customer as entered in the add-customer form, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub country: String,
}

impl CustomerDraft {
    /// Required-field validation; phone and company are optional inputs
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::MissingField("email"));
        }
        Ok(())
    }

    /// Attach an assigned id, producing the stored record
    pub fn into_customer(self, id: String) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            country: self.country,
        }
    }
}
