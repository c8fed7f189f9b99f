use serde::{Deserialize, Serialize};

/// Page-level metadata emitted into the exported document head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub title: String,
    pub description: String,
    pub author: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "My Website".to_string(),
            description: "A website built with the website builder".to_string(),
            author: String::new(),
        }
    }
}

/// Partial update for site settings; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSettingsUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl SiteSettings {
    pub fn apply(&mut self, update: SiteSettingsUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
    }
}
