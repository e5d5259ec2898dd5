use serde::{Deserialize, Serialize};

pub type PassengerId = i32;

/// A registered traveller. Only the id takes part in booking rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: PassengerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
}

impl Passenger {
    pub fn new(id: PassengerId) -> Self {
        Self {
            id,
            name: String::new(),
            email: String::new(),
            age: None,
        }
    }

    pub fn with_contact(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.name = name.into();
        self.email = email.into();
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}
