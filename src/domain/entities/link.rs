//! Link entity representing a shortened URL mapping.

/// A short code and the URL it redirects to.
///
/// Once created, a link never changes for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, original_url: String) -> Self {
        Self { code, original_url }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
}

impl From<NewLink> for Link {
    fn from(new_link: NewLink) -> Self {
        Link::new(new_link.code, new_link.original_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_from_new_link() {
        let new_link = NewLink {
            code: "abc123".to_string(),
            original_url: "https://example.com/".to_string(),
        };

        let link = Link::from(new_link);

        assert_eq!(link.code, "abc123");
        assert_eq!(link.original_url, "https://example.com/");
    }
}
