/// A parsed `accept` attribute, eg `.pdf` or `.jpg,.png` or `*`
///
/// Tokens are stored lowercase with any `*` stripped, an empty token means "anything goes"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptSpec {
    raw: String,
    extensions: Vec<String>,
}

impl AcceptSpec {
    pub fn parse(raw: &str) -> Self {
        let extensions = raw
            .split(',')
            .map(|token| token.trim().to_lowercase().replace('*', ""))
            .collect::<Vec<String>>();

        Self {
            raw: raw.to_string(),
            extensions,
        }
    }

    pub fn any() -> Self {
        Self::parse("*")
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_wildcard(&self) -> bool {
        self.raw.is_empty() || self.raw == "*"
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        if self.is_wildcard() {
            return true;
        }

        let file_ext = extension_of(file_name);

        self.extensions
            .iter()
            .any(|ext| ext.is_empty() || *ext == file_ext)
    }
}

impl Default for AcceptSpec {
    fn default() -> Self {
        Self::parse(".pdf")
    }
}

impl std::fmt::Display for AcceptSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// A name without any dot gives back the whole name, dotted
fn extension_of(file_name: &str) -> String {
    let last = match file_name.rfind('.') {
        Some(dot_index) => &file_name[(dot_index + 1)..],
        None => file_name,
    };

    format!(".{}", last.to_lowercase())
}
