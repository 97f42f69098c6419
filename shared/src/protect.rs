/// Password and permissions of the protect tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectOptions {
    pub password: String,
    pub confirm_password: String,
    pub allow_print: bool,
    pub allow_copy: bool,
    pub allow_modify: bool,
    pub allow_annotate: bool,
}

impl Default for ProtectOptions {
    fn default() -> Self {
        Self {
            password: String::new(),
            confirm_password: String::new(),
            allow_print: true,
            allow_copy: true,
            allow_modify: false,
            allow_annotate: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn of(password: &str) -> Option<Self> {
        let length = password.chars().count();

        if length == 0 {
            return None;
        }
        if length < 4 {
            return Some(Strength::Weak);
        }

        let mixed = password.chars().any(|c| c.is_ascii_lowercase())
            && password.chars().any(|c| c.is_ascii_uppercase())
            && password.chars().any(|c| c.is_ascii_digit());

        if length >= 8 && mixed {
            Some(Strength::Strong)
        } else {
            Some(Strength::Medium)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl ProtectOptions {
    pub fn strength(&self) -> Option<Strength> {
        Strength::of(&self.password)
    }

    /// Reason the options can't be sent yet
    pub fn problem(&self) -> Option<&'static str> {
        if self.password.is_empty() {
            return Some("Please enter a password to protect your PDF");
        }
        if self.password != self.confirm_password {
            return Some("Passwords do not match. Please confirm your password.");
        }
        None
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("password", self.password.clone()),
            ("allow_print", self.allow_print.to_string()),
            ("allow_copy", self.allow_copy.to_string()),
            ("allow_modify", self.allow_modify.to_string()),
            ("allow_annotate", self.allow_annotate.to_string()),
        ]
    }
}

/// Password of a locked pdf, empty when the file only has owner restrictions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnlockOptions {
    pub password: String,
}

impl UnlockOptions {
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![("password", self.password.clone())]
    }
}
