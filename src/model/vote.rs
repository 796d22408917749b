use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Up,
    Down,
}

impl VoteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteType::Up => "up",
            VoteType::Down => "down",
        }
    }

    /// Parses the wire name of a vote type, `None` for anything but `up` or `down`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "up" => Some(VoteType::Up),
            "down" => Some(VoteType::Down),
            _ => None,
        }
    }
}

/// Vote request body
///
/// `vote_type` is `up` or `down`, parsed with [`VoteType::from_name`].
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VoteRequestDto {
    #[serde(default)]
    #[schema(example = "up")]
    pub vote_type: String,
}

#[cfg(test)]
mod tests {
    use super::VoteType;

    #[test]
    fn parses_known_vote_types() {
        assert_eq!(VoteType::from_name("up"), Some(VoteType::Up));
        assert_eq!(VoteType::from_name("down"), Some(VoteType::Down));
    }

    #[test]
    fn rejects_unknown_vote_types() {
        assert_eq!(VoteType::from_name("sideways"), None);
        assert_eq!(VoteType::from_name("Up"), None);
        assert_eq!(VoteType::from_name(""), None);
    }
}
