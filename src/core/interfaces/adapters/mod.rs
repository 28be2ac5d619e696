mod image_data_extractor;
mod image_hosting_service;

pub use image_data_extractor::ImageDataExtractor;
pub use image_hosting_service::ImageHostingService;
