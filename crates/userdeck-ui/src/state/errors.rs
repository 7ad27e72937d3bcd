/// Messages shown in the dismissible error banner.
///
/// Holds problems the user should know about but that do not block the
/// app, such as a config file that failed to load.
#[derive(Clone, Debug, Default)]
pub struct BannerErrors {
    messages: Vec<String>,
}

impl BannerErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message. Duplicates are ignored.
    pub fn push(&mut self, message: String) {
        if !self.messages.contains(&message) {
            self.messages.push(message);
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn dismiss(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut errors = BannerErrors::new();
        assert!(errors.is_empty());

        errors.push("Config parse error".to_string());
        errors.push("Config parse error".to_string());
        errors.push("Copy failed".to_string());
        assert_eq!(errors.messages().len(), 2);

        errors.dismiss();
        assert!(errors.is_empty());
    }
}
