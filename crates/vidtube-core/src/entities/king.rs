//! King entity - a read-only curiosity table served as-is

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct King {
    pub id: i32,
    pub name: String,
    pub info: String,
}

impl King {
    pub fn new(id: i32, name: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            info: info.into(),
        }
    }
}
