use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDistributor {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl NewDistributor {
    pub fn with_id(self, id: String) -> Distributor {
        Distributor {
            id,
            name: self.name,
            email: self.email,
            company: self.company,
        }
    }
}
