use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the record source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(UserId)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        UserId(value)
    }
}

/// A user as supplied by the record source.
///
/// Field names on the wire follow the placeholder API (`zipcode`,
/// `catchPhrase`, `geo.lat`/`geo.lng`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub company: Company,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    #[serde(rename = "zipcode")]
    pub postal_code: String,
    pub geo: Geo,
}

/// Coordinates as the decimal strings the source provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
    /// Business descriptor.
    pub bs: String,
}

impl UserRecord {
    /// Up to two uppercase initials from the display name, `?` when empty.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }

    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }

    /// Website as a browsable URL. Bare hosts get an `http://` scheme.
    pub fn website_url(&self) -> String {
        if self.website.contains("://") {
            self.website.clone()
        } else {
            format!("http://{}", self.website)
        }
    }

    pub fn mailto_url(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

impl Address {
    pub fn street_line(&self) -> String {
        format!("{} {}", self.street, self.suite).trim().to_string()
    }
}

impl Geo {
    pub fn coordinates(&self) -> String {
        format!("{}, {}", self.lat, self.lng)
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Build a record with distinct username/email derived from the id.
    pub fn make_user(id: u64, name: &str) -> UserRecord {
        UserRecord {
            id: UserId(id),
            name: name.to_string(),
            username: format!("user{}", id),
            email: format!("user{}@example.org", id),
            phone: "1-770-736-8031".to_string(),
            website: "example.org".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: format!("City {}", id),
                postal_code: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::make_user;
    use super::*;

    #[test]
    fn test_user_id_parse_and_display() {
        assert_eq!("7".parse::<UserId>().unwrap(), UserId(7));
        assert_eq!(" 12 ".parse::<UserId>().unwrap(), UserId(12));
        assert!("abc".parse::<UserId>().is_err());
        assert_eq!(UserId(3).to_string(), "3");
    }

    #[test]
    fn test_deserialize_placeholder_shape() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.address.postal_code, "92998-3874");
        assert_eq!(user.address.geo.coordinates(), "-37.3159, 81.1496");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn test_optional_sections_default() {
        let json = r#"{"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv"}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert!(user.phone.is_empty());
        assert_eq!(user.address, Address::default());
    }

    #[test]
    fn test_initials() {
        assert_eq!(make_user(1, "Leanne Graham").initials(), "LG");
        assert_eq!(make_user(1, "mrs. dennis schulist").initials(), "MD");
        assert_eq!(make_user(1, "Cher").initials(), "C");
        assert_eq!(make_user(1, "   ").initials(), "?");
    }

    #[test]
    fn test_link_helpers() {
        let mut user = make_user(4, "Patricia Lebsack");
        assert_eq!(user.handle(), "@user4");
        assert_eq!(user.website_url(), "http://example.org");
        assert_eq!(user.mailto_url(), "mailto:user4@example.org");
        assert_eq!(user.tel_url(), "tel:1-770-736-8031");

        user.website = "https://kale.biz".to_string();
        assert_eq!(user.website_url(), "https://kale.biz");
    }

    #[test]
    fn test_street_line_without_suite() {
        let address = Address {
            street: "Victor Plains".to_string(),
            ..Default::default()
        };
        assert_eq!(address.street_line(), "Victor Plains");
    }
}
