/// Fields for a new user, trimmed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
        }
    }
}

/// A partial update. `None` leaves a field alone; `Some` assigns it, even when
/// the trimmed value is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserPatch {
    pub fn new(first_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            first_name: first_name.map(|s| s.trim().to_string()),
            last_name: last_name.map(|s| s.trim().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}
