pub const PLUGIN_NAME: &str = "Img2Url";
pub const PLUGIN_DESCRIPTION: &str = "图片转链接插件";
pub const PLUGIN_VERSION: &str = "1.0";
pub const PLUGIN_AUTHOR: &str = "Lingyuzhou";
pub const PLUGIN_DESIRE_PRIORITY: i32 = 200;

pub const TRIGGER_WORD: &str = "图转链接";

pub const LOG_TAG_PLUGIN: &str = "[IMG2URL]";
pub const LOG_TAG_IMGBB: &str = "[IMGBB]";
pub const LOG_TAG_EXTRACTOR: &str = "[EXTRACTOR]";
pub const LOG_TAG_CONFIG: &str = "[CONFIG]";
pub const LOG_TAG_SESSIONS: &str = "[SESSIONS]";
pub const LOG_TAG_HOST: &str = "[HOST]";

pub const REPLY_SEND_IMAGE_PROMPT: &str = "请发送需要转换的图片";
pub const REPLY_IMAGE_DATA_UNAVAILABLE: &str = "无法获取图片数据，请重试";
pub const REPLY_UPLOAD_FAILED: &str = "上传图片失败";
pub const REPLY_UNEXPECTED_ERROR_PREFIX: &str = "处理图片时发生错误: ";

pub const UPLOAD_SUCCESS_HEADER: &str = "====== 图片上传成功 ======";
pub const UPLOAD_SUCCESS_LINK_LABEL: &str = "链接: ";
pub const UPLOAD_SUCCESS_FOOTER: &str = "=====================";

pub const HELP_TEXT: &str = "图片转链接插件使用说明：\n\
1. 发送'图转链接'，收到反馈消息后再发送图片\n\
2. 插件会自动上传图片并返回可访问的URL\n";

pub const IMGBB_API_URL: &str = "https://api.imgbb.com/1/upload";
pub const IMGBB_UNKNOWN_ERROR: &str = "unknown error";

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CONFIG_DIRECTORY_NAME: &str = "img2url";
pub const CONFIG_PATH_ENV_VAR: &str = "IMG2URL_CONFIG";

pub const DEFAULT_DOWNLOAD_FILE_NAME: &str = "temp.png";
pub const TEXT_ACCESSOR_FILE_NAME: &str = "temp.png";
pub const EXTRACTION_WORKSPACE_PREFIX: &str = "img2url-";

pub const CONSOLE_DEFAULT_USER: &str = "console";
pub const CONSOLE_IMAGE_COMMAND: &str = ":image";
pub const CONSOLE_HELP_COMMAND: &str = ":help";
pub const CONSOLE_QUIT_COMMAND: &str = ":quit";

pub const STARTUP_BANNER: &str = r#"
╔════════════════════════════════════════════════════════╗
║  Img2Url - console host                                ║
║                                                        ║
║  Send 图转链接, then  :image <path>                     ║
║  Prefix a line with @name to speak as another user     ║
║  :help shows plugin help, :quit exits                  ║
║                                                        ║
╚════════════════════════════════════════════════════════╝
"#;
