use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
}

/// Registration payload; the identifier is assigned by the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl NewSupplier {
    pub fn with_id(self, id: String) -> Supplier {
        Supplier {
            id,
            name: self.name,
            email: self.email,
            company: self.company,
        }
    }
}
