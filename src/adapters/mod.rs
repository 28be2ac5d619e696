mod content_field_image_extractor;
mod download_image_extractor;
mod imgbb_image_hosting_service;
mod text_accessor_image_extractor;

pub use content_field_image_extractor::ContentFieldImageExtractor;
pub use download_image_extractor::DownloadImageExtractor;
pub use imgbb_image_hosting_service::ImgbbImageHostingService;
pub use text_accessor_image_extractor::TextAccessorImageExtractor;
