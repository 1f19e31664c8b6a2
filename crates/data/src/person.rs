use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub external_number: String,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub external_number: String,
}
