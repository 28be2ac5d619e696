use anyhow::Result;

pub trait ImageHostingService: Send + Sync {
    /// Uploads a base64 encoded image and returns its public URL.
    fn upload_image(&self, base64_image: &str) -> Result<String>;
}
