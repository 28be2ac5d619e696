mod img2url_plugin;

pub use img2url_plugin::Img2UrlPlugin;
