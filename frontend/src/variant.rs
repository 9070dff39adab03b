/// A/B variants of the landing page. They share every component and differ
/// only in theme and in the offer tag sent along with the signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Classic,
    Founders,
}

impl Variant {
    /// Reads the `variant` query parameter; unknown values get the default.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("founders") | Some("b") => Variant::Founders,
            _ => Variant::Classic,
        }
    }

    pub fn theme_class(self) -> &'static str {
        match self {
            Variant::Classic => "theme-teal",
            Variant::Founders => "theme-sand",
        }
    }

    pub fn offer(self) -> Option<&'static str> {
        match self {
            Variant::Classic => None,
            Variant::Founders => Some("founding-member"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_selects_variant() {
        assert_eq!(Variant::from_query(None), Variant::Classic);
        assert_eq!(Variant::from_query(Some("Founders")), Variant::Founders);
        assert_eq!(Variant::from_query(Some("b")), Variant::Founders);
        assert_eq!(Variant::from_query(Some("zzz")), Variant::Classic);
    }

    #[test]
    fn only_founders_carries_an_offer() {
        assert_eq!(Variant::Classic.offer(), None);
        assert_eq!(Variant::Founders.offer(), Some("founding-member"));
    }
}
