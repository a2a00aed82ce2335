use async_trait::async_trait;
use uuid::Uuid;

/// Trait for generating participant tokens
#[async_trait]
pub trait TokenGenerator: Send + Sync {
    async fn generate(&self) -> String;
}

/// UUID v4 based token generator
pub struct UuidTokenGenerator;

impl UuidTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenGenerator for UuidTokenGenerator {
    async fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
